use std::{path::PathBuf, string::FromUtf8Error};

use snafu::prelude::*;
use tracing::debug;

use crate::cli::SourceArgs;
use crate::format::Format;
use crate::templates::{Template, find_template};

/// Raw structure content together with the notation it is written in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureSource {
    pub content: String,
    pub format: Format,
}

impl StructureSource {
    pub async fn load(args: &SourceArgs) -> Result<Self, SourceError> {
        if let Some(id) = &args.template {
            let template = Self::template(id)?;
            debug!("Using template '{}' written as {}", template.id, template.format);
            return Ok(template.into());
        }

        let content = match args.input.as_deref() {
            Some("-") | None => {
                debug!("Reading structure from standard input");
                std::io::read_to_string(std::io::stdin()).context(StdinSnafu)?
            }
            Some(path) => Self::read_file(PathBuf::from(path)).await?,
        };

        Ok(StructureSource {
            content,
            format: args.from,
        })
    }

    /// Looks up a built-in template by id
    pub fn template(id: &str) -> Result<&'static Template, SourceError> {
        find_template(id).context(UnknownTemplateSnafu { id })
    }

    async fn read_file(path: PathBuf) -> Result<String, SourceError> {
        debug!("Reading structure from {}", path.display());
        let bytes = compio::fs::read(&path)
            .await
            .context(ReadSnafu { path: path.clone() })?;
        String::from_utf8(bytes).context(EncodingSnafu { path })
    }
}

impl From<&Template> for StructureSource {
    fn from(template: &Template) -> Self {
        StructureSource {
            content: template.content.to_string(),
            format: template.format,
        }
    }
}

#[derive(Debug, Snafu)]
pub enum SourceError {
    #[snafu(display("No template with id '{}'", id))]
    UnknownTemplate { id: String },
    #[snafu(display("Failed to read structure file {}", path.display()))]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Structure file {} is not valid UTF-8", path.display()))]
    EncodingError {
        path: PathBuf,
        source: FromUtf8Error,
    },
    #[snafu(display("Failed to read structure from standard input"))]
    StdinError { source: std::io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(input: Option<&str>, from: Format, template: Option<&str>) -> SourceArgs {
        SourceArgs {
            input: input.map(str::to_string),
            from,
            template: template.map(str::to_string),
        }
    }

    #[compio::test]
    async fn template_overrides_declared_format() {
        let source = StructureSource::load(&args(None, Format::Text, Some("react-vite")))
            .await
            .unwrap();

        assert_eq!(source.format, Format::Json);
        assert!(source.content.contains("\"src\""));
    }

    #[compio::test]
    async fn unknown_template_is_reported() {
        let result = StructureSource::load(&args(None, Format::Text, Some("nope"))).await;

        match result {
            Err(SourceError::UnknownTemplate { id }) => assert_eq!(id, "nope"),
            other => panic!("Expected UnknownTemplate, got {other:?}"),
        }
    }

    #[compio::test]
    async fn file_is_read_with_declared_format() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("structure.json");
        std::fs::write(&path, r#"{"a": null}"#).unwrap();

        let source = StructureSource::load(&args(path.to_str(), Format::Json, None))
            .await
            .unwrap();

        assert_eq!(
            source,
            StructureSource {
                content: r#"{"a": null}"#.to_string(),
                format: Format::Json,
            }
        );
    }

    #[compio::test]
    async fn missing_file_is_reported() {
        let result =
            StructureSource::load(&args(Some("/this/path/does/not/exist.txt"), Format::Text, None))
                .await;

        assert!(matches!(result, Err(SourceError::ReadError { .. })));
    }
}
