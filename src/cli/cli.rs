use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::application::data::LogLevel;
use crate::format::Format;

/// Scaffold project structures described as indented text or JSON
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Cli {
    #[clap(long, short, default_value = "warn", value_enum, global = true)]
    pub log_level: LogLevel,

    /// Directory holding the optional structgen.yaml settings file
    #[clap(long, short, default_value = ".", global = true)]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert a structure to another notation
    Convert {
        #[command(flatten)]
        source: SourceArgs,
        /// Notation to convert to
        #[clap(long, value_enum)]
        to: Format,
        /// Write the result to a file instead of standard output
        #[clap(long, short)]
        output: Option<PathBuf>,
    },
    /// Validate a structure and count its entries
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print a structure as a tree
    Tree {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Create the directories and files of a structure
    Scaffold {
        #[command(flatten)]
        source: SourceArgs,
        /// Directory the structure is created in
        #[clap(long, short)]
        out: PathBuf,
        /// Name of the top-level directory created inside `out`
        #[clap(long, short, default_value = "generated-structure")]
        name: String,
    },
    /// Browse the built-in templates
    Templates {
        #[command(subcommand)]
        action: Option<TemplatesCommand>,
    },
}

/// Where a structure comes from
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Structure file, `-` reads standard input
    #[clap(required_unless_present = "template", conflicts_with = "template")]
    pub input: Option<String>,

    /// Notation of the input
    #[clap(long, short, alias = "format", default_value = "text", value_enum)]
    pub from: Format,

    /// Use a built-in template, its own notation overrides `--from`
    #[clap(long, short)]
    pub template: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TemplatesCommand {
    /// List templates, optionally only those written in one notation
    List {
        #[clap(long, value_enum)]
        format: Option<Format>,
    },
    /// Print a template, converted when a notation is given
    Show {
        id: String,
        #[clap(long, value_enum)]
        format: Option<Format>,
    },
}
