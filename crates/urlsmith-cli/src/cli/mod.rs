//! CLI for the urlsmith URL toolkit.

mod commands;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use urlsmith_core::config::{self, UrlsmithConfig};

use commands::{run_completions, run_get, run_manpage, run_parts, run_query, run_set, SetArgs};

/// Top-level CLI for the urlsmith URL toolkit.
#[derive(Debug, Parser)]
#[command(name = "urlsmith")]
#[command(about = "urlsmith: parse, mutate, and rebuild URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// A URL component addressable by `urlsmith get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Part {
    Scheme,
    Host,
    Port,
    Path,
    Slugs,
    Query,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print every component of a URL.
    Parts {
        /// URL to split, or `@name` for a configured template.
        url: String,
        /// Emit the components as a JSON object.
        #[arg(long)]
        json: bool,
    },

    /// Print a single component of a URL.
    Get {
        /// Which component to print.
        part: Part,
        /// URL to read, or `@name` for a configured template.
        url: String,
    },

    /// Mutate components of a URL and print the rebuilt string.
    Set(SetArgs),

    /// Print the decoded query parameters of a URL.
    Query {
        /// URL to read, or `@name` for a configured template.
        url: String,
        /// Emit the pairs as a JSON array.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions on stdout.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },

    /// Generate the roff man page on stdout.
    Manpage,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Parts { url, json } => run_parts(&resolve_url(&cfg, &url)?, json)?,
            CliCommand::Get { part, url } => run_get(part, &resolve_url(&cfg, &url)?)?,
            CliCommand::Set(args) => {
                let url = resolve_url(&cfg, &args.url)?;
                run_set(&url, &args)?;
            }
            CliCommand::Query { url, json } => run_query(&resolve_url(&cfg, &url)?, json)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Manpage => run_manpage()?,
        }

        Ok(())
    }
}

/// Resolve a URL argument: `@name` looks up the `[templates]` table, anything
/// else passes through untouched.
fn resolve_url(cfg: &UrlsmithConfig, url: &str) -> Result<String> {
    let Some(name) = url.strip_prefix('@') else {
        return Ok(url.to_string());
    };
    match cfg.templates.get(name) {
        Some(base) => {
            tracing::debug!(name, base, "resolved URL template");
            Ok(base.clone())
        }
        None => bail!("no template named {name:?} in the config (add it under [templates])"),
    }
}

#[cfg(test)]
mod tests;
