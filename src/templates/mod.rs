//! Built-in starting points for common project layouts.

mod catalog;

pub use catalog::{Template, find_template, templates};
