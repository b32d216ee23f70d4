mod cli;

pub use cli::{Cli, Command, SourceArgs, TemplatesCommand};
