//! CLI command handlers. Each command is in its own file for clarity.

mod completions;
mod get;
mod manpage;
mod parts;
mod query;
mod set;

pub use completions::run_completions;
pub use get::run_get;
pub use manpage::run_manpage;
pub use parts::run_parts;
pub use query::run_query;
pub use set::{run_set, SetArgs};

use urlsmith_core::UrlComponents;

/// Best-effort parse shared by the handlers; warns when the input produced
/// the all-empty instance so garbage input is visible without failing.
fn parse_best_effort(url: &str) -> UrlComponents {
    let components = UrlComponents::new(url);
    if components.is_empty() {
        tracing::warn!(url, "input did not parse as a URL; all components are empty");
    }
    components
}
