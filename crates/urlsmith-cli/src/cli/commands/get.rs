//! `urlsmith get <part> <url>` – print a single component of a URL.

use anyhow::Result;

use super::parse_best_effort;
use crate::cli::Part;

pub fn run_get(part: Part, url: &str) -> Result<()> {
    let components = parse_best_effort(url);
    match part {
        Part::Scheme => println!("{}", components.scheme()),
        Part::Host => println!("{}", components.host()),
        Part::Port => println!("{}", components.port()),
        Part::Path => println!("{}", components.path()),
        Part::Slugs => {
            for slug in components.slugs() {
                println!("{slug}");
            }
        }
        Part::Query => println!("{}", components.query()),
    }
    Ok(())
}
