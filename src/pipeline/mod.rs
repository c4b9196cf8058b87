//! Pipeline entry points for application operations.
//!
//! - `run_analyze`: Fetch, score, and persist one post
//! - `run_list`: Render previously analyzed posts
//! - `run_validate`: Check the configuration file

pub mod analyze;
pub mod list;
pub mod validate;

pub use analyze::run_analyze;
pub use list::run_list;
pub use validate::run_validate;
