//! `roster completions <shell>` prints a completion script for the chosen
//! shell. Install it by redirecting stdout into the shell's completion
//! directory, e.g. `roster completions zsh > ~/.zfunc/_roster`.

use std::io::{self, Write as _};

use clap::CommandFactory as _;
use clap_complete::{Generator, Shell};

use crate::cli::Cli;

/// Writes the script for `shell` to stdout under the binary's own name.
pub fn generate_completions(shell: Shell) {
    write_script(shell, &mut io::stdout().lock());
}

fn write_script(generator: impl Generator, out: &mut impl io::Write) {
    let mut command = Cli::command();
    let bin_name = command.get_name().to_owned();
    clap_complete::generate(generator, &mut command, bin_name, out);
    out.flush().ok();
}
