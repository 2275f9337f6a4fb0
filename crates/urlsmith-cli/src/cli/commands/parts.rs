//! `urlsmith parts <url>` – print every component of a URL.

use anyhow::Result;
use serde_json::json;

use super::parse_best_effort;

pub fn run_parts(url: &str, json: bool) -> Result<()> {
    let components = parse_best_effort(url);
    if json {
        let value = json!({
            "scheme": components.scheme(),
            "host": components.host(),
            "port": components.port(),
            "path": components.path(),
            "slugs": components.slugs(),
            "query": components.query(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{:<8} {}", "scheme", components.scheme());
        println!("{:<8} {}", "host", components.host());
        println!("{:<8} {}", "port", components.port());
        println!("{:<8} {}", "path", components.path());
        println!("{:<8} {}", "slugs", components.slugs().join(" "));
        println!("{:<8} {}", "query", components.query());
    }
    Ok(())
}
