use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    string::FromUtf8Error,
};
use tracing::{debug, info};

use crate::tree::MergePolicy;

pub const SETTINGS_FILE_NAME: &str = "structgen.yaml";

fn get_settings_file_path(root: &Path) -> PathBuf {
    root.join(SETTINGS_FILE_NAME)
}

/// User tunables read from `structgen.yaml`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Policy for sibling entries sharing a name
    pub duplicates: MergePolicy,
    /// Fill files without content with a stub matching their extension
    pub default_content: bool,
    /// Replace files that already exist when scaffolding
    pub overwrite: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            duplicates: MergePolicy::Merge,
            default_content: true,
            overwrite: false,
        }
    }
}

impl Settings {
    /// Reads the settings file from `root`, falling back to defaults when there is none
    pub async fn read(root: &Path) -> Result<Self, SettingsError> {
        Self::from_path(get_settings_file_path(root)).await
    }

    pub async fn from_path(path: PathBuf) -> Result<Self, SettingsError> {
        debug!("Opening settings file: {}", path.display());
        let bytes = match compio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No settings file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).context(ReadSnafu {
                    file_path: path.display().to_string(),
                });
            }
        };
        debug!("Successfully read settings file: {} bytes", bytes.len());

        let contents = String::from_utf8(bytes).context(EncodingSnafu {
            file_path: path.display().to_string(),
        })?;
        contents.as_str().try_into()
    }
}

impl TryFrom<&str> for Settings {
    type Error = SettingsError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let Some(document) = documents.first() else {
            return Ok(Self::default());
        };
        let top_level = document.as_mapping().context(TopLevelNotMapSnafu)?;

        let mut settings = Self::default();
        for (key, value) in top_level {
            match key.as_str() {
                Some("duplicates") => settings.duplicates = parse_policy(value)?,
                Some("defaultContent") => {
                    settings.default_content = parse_bool("defaultContent", value)?
                }
                Some("overwrite") => settings.overwrite = parse_bool("overwrite", value)?,
                _ => debug!("Skipping unknown settings entry: {:?}", key),
            }
        }

        Ok(settings)
    }
}

fn parse_policy(value: &Yaml) -> Result<MergePolicy, SettingsError> {
    let name = value.as_str().context(InvalidValueSnafu {
        key: "duplicates",
        expected: "a string",
    })?;
    match name {
        "merge" => Ok(MergePolicy::Merge),
        "strict" => Ok(MergePolicy::Strict),
        other => UnknownPolicySnafu { name: other }.fail(),
    }
}

fn parse_bool(key: &str, value: &Yaml) -> Result<bool, SettingsError> {
    match value {
        Yaml::Value(Scalar::Boolean(flag)) => Ok(*flag),
        _ => InvalidValueSnafu {
            key,
            expected: "a boolean",
        }
        .fail(),
    }
}

#[derive(Debug, Snafu)]
pub enum SettingsError {
    #[snafu(display("Failed to read the settings file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Settings file {} is not valid UTF-8", file_path))]
    EncodingError {
        file_path: String,
        source: FromUtf8Error,
    },
    #[snafu(display("Failed to parse the settings file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Top level of the settings file should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Setting '{}' should be {}", key, expected))]
    InvalidValue { key: String, expected: &'static str },
    #[snafu(display("Unknown duplicates policy '{}', expected 'merge' or 'strict'", name))]
    UnknownPolicy { name: String },
}
