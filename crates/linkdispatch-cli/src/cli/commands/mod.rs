//! CLI command handlers, one per file.

mod batch;
mod categories;
mod classify;
mod config;

pub use batch::run_batch;
pub use categories::run_categories;
pub use classify::run_classify;
pub use config::run_config;
