//! Styled terminal output.

use std::fmt::Display;

use console::{Style, Term, style};
use roster_business::{BadgeTone, Notification};

/// Terminal output helper for consistent styled output.
pub struct Output {
    term: Term,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    /// Print a success message with a green checkmark.
    pub fn success(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("✓").green().bold(), message)),
        );
    }

    /// Print an error message with a red X.
    pub fn error(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("✗").red().bold(), message)),
        );
    }

    pub fn warning(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&format!("{} {}", style("⚠").yellow().bold(), message)),
        );
    }

    pub fn print(&self, message: impl Display) {
        drop(self.term.write_line(&message.to_string()));
    }

    pub fn newline(&self) {
        drop(self.term.write_line(""));
    }

    pub fn header(&self, message: impl Display) {
        drop(
            self.term
                .write_line(&style(message).bold().cyan().to_string()),
        );
    }

    /// Print a labeled value with indentation.
    pub fn labeled_indent(&self, label: impl Display, value: impl Display, indent: usize) {
        let spaces = " ".repeat(indent);
        drop(
            self.term
                .write_line(&format!("{spaces}{}: {}", style(label).dim(), value)),
        );
    }

    /// Print a labeled badge colored by its tone.
    pub fn badge(&self, label: impl Display, value: impl Display, tone: BadgeTone) {
        let value = tone_style(tone).apply_to(value);
        drop(
            self.term
                .write_line(&format!("  {}: {}", style(label).dim(), value)),
        );
    }

    pub fn dim(&self, message: impl Display) {
        drop(self.term.write_line(&style(message).dim().to_string()));
    }

    /// Renders a notification the way the dashboard would show a toast.
    pub fn toast(&self, notification: &Notification) {
        if notification.is_destructive() {
            self.error(format!(
                "{}: {}",
                notification.title, notification.description
            ));
        } else {
            self.success(&notification.description);
        }
    }

    /// Shows every notification queued so far.
    pub fn drain_toasts(&self, toasts: &flume::Receiver<Notification>) {
        for notification in toasts.drain() {
            self.toast(&notification);
        }
    }
}

fn tone_style(tone: BadgeTone) -> Style {
    match tone {
        BadgeTone::Purple => Style::new().magenta().bold(),
        BadgeTone::Indigo => Style::new().blue().bold(),
        BadgeTone::Sky => Style::new().cyan(),
        BadgeTone::Green => Style::new().green(),
        BadgeTone::Gray => Style::new().dim(),
        BadgeTone::Amber => Style::new().yellow(),
    }
}
