//! Command dispatch for the `structgen` binary.

mod application;
pub mod data;
mod runtime_config;
mod source;
mod tree_view;

pub use application::{Application, ApplicationError};
pub use runtime_config::RuntimeConfig;
pub use source::{SourceError, StructureSource};
pub use tree_view::render_tree;
