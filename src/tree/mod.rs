//! In-memory representation of a project structure.
//!
//! A structure is a tree whose root is always an anonymous directory.
//! Directories keep their children in insertion order, files optionally
//! carry their content.

mod node;

pub use node::{Directory, File, MergePolicy, Node, TreeError, TreeStats};
