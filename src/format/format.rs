use clap::ValueEnum;
use derive_more::Display;

/// Notation a structure is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, ValueEnum)]
pub enum Format {
    /// One entry per line, nesting by indentation, directories end with `/`
    #[display("text")]
    Text,
    /// Nested objects for directories, `null` or a string for files
    #[display("json")]
    Json,
}
