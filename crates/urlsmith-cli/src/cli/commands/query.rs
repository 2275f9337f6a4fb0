//! `urlsmith query <url>` – print the decoded query parameters of a URL.

use anyhow::Result;

use super::parse_best_effort;

pub fn run_query(url: &str, json: bool) -> Result<()> {
    let pairs = parse_best_effort(url).query_pairs();
    if json {
        println!("{}", serde_json::to_string_pretty(&pairs)?);
    } else if pairs.is_empty() {
        println!("No query parameters.");
    } else {
        for (key, value) in pairs {
            println!("{key}={value}");
        }
    }
    Ok(())
}
