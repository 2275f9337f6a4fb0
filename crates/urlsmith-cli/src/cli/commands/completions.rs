//! `urlsmith completions <shell>` – shell completion scripts on stdout.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;

pub fn run_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, "urlsmith", &mut std::io::stdout());
    Ok(())
}
