//! `urlsmith manpage` – the roff man page on stdout.

use anyhow::Result;
use clap::CommandFactory;
use clap_mangen::Man;

use crate::cli::Cli;

pub fn run_manpage() -> Result<()> {
    let man = Man::new(Cli::command());
    man.render(&mut std::io::stdout())?;
    Ok(())
}
