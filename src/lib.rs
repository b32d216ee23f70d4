#![allow(clippy::enum_variant_names)]

//! Tooling for project structure definitions.
//!
//! A structure is written either as indented text or as nested JSON. The
//! [`format`] module converts between the two through the tree model in
//! [`tree`]; the remaining modules make up the `structgen` command line tool.

pub mod application;
pub mod cli;
pub mod config;
pub mod format;
pub mod scaffold;
pub mod templates;
pub mod tree;
