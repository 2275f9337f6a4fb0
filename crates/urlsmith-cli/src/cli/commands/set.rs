//! `urlsmith set <url> ...` – mutate components and print the rebuilt URL.

use anyhow::Result;
use clap::Args;

use super::parse_best_effort;

/// Mutations to apply before rebuilding. Flags that would overwrite each
/// other (`--path`/`--slug`, `--query`/`--param`, `--port`/`--clear-port`)
/// conflict at parse time.
#[derive(Debug, Args)]
pub struct SetArgs {
    /// URL to start from, or `@name` for a configured template.
    pub url: String,

    /// Replace the scheme.
    #[arg(long)]
    pub scheme: Option<String>,

    /// Replace the host.
    #[arg(long)]
    pub host: Option<String>,

    /// Replace the port.
    #[arg(long, conflicts_with = "clear_port")]
    pub port: Option<String>,

    /// Remove the port.
    #[arg(long)]
    pub clear_port: bool,

    /// Replace the path (normalized to one leading and no trailing slash).
    #[arg(long, conflicts_with = "slug")]
    pub path: Option<String>,

    /// Replace the path with these segments, in order. Repeatable.
    #[arg(long)]
    pub slug: Vec<String>,

    /// Replace the raw query string (a leading `?` is stripped).
    #[arg(long, conflicts_with = "param")]
    pub query: Option<String>,

    /// Replace the query with these `key=value` pairs, form-encoded.
    /// Repeatable.
    #[arg(long, value_parser = parse_key_value)]
    pub param: Vec<(String, String)>,

    /// Print the relative form (path and query only).
    #[arg(long)]
    pub relative: bool,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!("expected key=value, got {s:?}")),
    }
}

pub fn run_set(url: &str, args: &SetArgs) -> Result<()> {
    let mut components = parse_best_effort(url);

    if let Some(scheme) = &args.scheme {
        components.set_scheme(scheme);
    }
    if let Some(host) = &args.host {
        components.set_host(host);
    }
    if let Some(port) = &args.port {
        components.set_port(port.as_str());
    }
    if args.clear_port {
        components.set_port(None::<u16>);
    }
    if let Some(path) = &args.path {
        components.set_path(path);
    }
    if !args.slug.is_empty() {
        components.set_slugs(&args.slug);
    }
    if let Some(query) = &args.query {
        components.set_query(query);
    }
    if !args.param.is_empty() {
        components.set_query_pairs(args.param.iter().map(|(k, v)| (k, v)));
    }

    let rebuilt = if args.relative {
        components.build_relative()
    } else {
        components.build()
    };
    println!("{rebuilt}");
    Ok(())
}
