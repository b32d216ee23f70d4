use std::path::PathBuf;

use crate::cli::{Cli, Command};

/// Everything a single run needs, resolved from the command line
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub root: PathBuf,
    pub command: Command,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            root: cli.root,
            command: cli.command,
        }
    }
}
