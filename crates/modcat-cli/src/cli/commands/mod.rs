//! CLI command handlers, one view per file.

mod cache;
mod category;
mod home;
mod load;
mod show;

pub use cache::{run_cache_clear, run_cache_status};
pub use category::run_category;
pub use home::run_home;
pub use show::run_show;
