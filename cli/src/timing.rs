//! Tracing setup for the CLI.
//!
//! Command handlers carry `#[instrument]` spans; with `--timing` each span
//! logs its duration when it closes. Records from the `log` facade used by
//! the business crate are forwarded into the same subscriber.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

/// DEBUG when verbose, INFO when timing (span close events are INFO), WARN
/// otherwise. `RUST_LOG` still refines it.
pub fn default_level(verbose: bool, timing: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else if timing {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    }
}

pub fn init_tracing(verbose: bool, timing: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose, timing).into())
        .from_env_lossy();

    let span_events = if timing {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    // `init` also installs the `log` bridge.
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(verbose)
                .with_level(true)
                .with_span_events(span_events)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // The subscriber is process-global, so only the level choice is tested.
    #[test]
    fn test_verbose_wins_over_timing() {
        assert_eq!(default_level(true, true), LevelFilter::DEBUG);
        assert_eq!(default_level(false, true), LevelFilter::INFO);
        assert_eq!(default_level(false, false), LevelFilter::WARN);
    }
}
