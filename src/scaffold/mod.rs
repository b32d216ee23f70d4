//! Materializing a structure on disk.
//!
//! Directories are created as described, files receive their declared
//! content or, when they have none, an optional stub chosen by extension.

mod default_content;
mod writer;

pub use default_content::default_content;
pub use writer::{ScaffoldError, ScaffoldOptions, ScaffoldReport, scaffold};
