//! Command handlers for CLI subcommands
//!
//! Each subcommand has its own module; this module re-exports the entry
//! points that `main` dispatches to.

mod check;
mod completions;
mod page;
mod rules;
mod submit;
mod utils;
mod validate;

pub use check::handle_check;
pub use completions::handle_completions;
pub use rules::handle_rules;
pub use submit::handle_submit;
pub use validate::handle_validate;
