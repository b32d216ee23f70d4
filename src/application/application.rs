use std::path::{Path, PathBuf};

use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use super::{RuntimeConfig, SourceError, StructureSource, render_tree};
use crate::cli::{Command, SourceArgs, TemplatesCommand};
use crate::config::{Settings, SettingsError};
use crate::format::{ConversionError, DecodeError, Format, convert_with, parse};
use crate::scaffold::{ScaffoldError, ScaffoldOptions, scaffold};
use crate::templates::templates;
use crate::tree::Directory;

pub struct Application;

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let settings = Settings::read(&app_config.root)
            .await
            .context(SettingsSnafu)?;
        debug!("Loaded settings: {:?}", settings);

        match &app_config.command {
            Command::Convert { source, to, output } => {
                let source = load(source).await?;
                let converted = convert_with(&source.content, source.format, *to, settings.duplicates)
                    .context(ConversionSnafu)?;
                info!("Converted {} structure to {}", source.format, to);
                Self::emit(&converted, output.as_deref()).await
            }
            Command::Check { source } => {
                let root = Self::parse_source(source, &settings).await?;
                let stats = root.stats();
                println!("{} directories, {} files", stats.directories, stats.files);
                Ok(())
            }
            Command::Tree { source } => {
                let root = Self::parse_source(source, &settings).await?;
                println!("{}", render_tree(&root));
                Ok(())
            }
            Command::Scaffold { source, out, name } => {
                let root = Self::parse_source(source, &settings).await?;
                let target = out.join(name);
                let report = scaffold(&root, &target, ScaffoldOptions::from(&settings))
                    .await
                    .context(ScaffoldSnafu)?;
                println!(
                    "Created {} in {} ({} directories, {} files, {} kept)",
                    name,
                    out.display(),
                    report.directories,
                    report.files_written,
                    report.files_skipped
                );
                Ok(())
            }
            Command::Templates { action } => Self::templates(action.as_ref()),
        }
    }

    async fn parse_source(
        args: &SourceArgs,
        settings: &Settings,
    ) -> Result<Directory, ApplicationError> {
        let source = load(args).await?;
        parse(&source.content, source.format, settings.duplicates).context(InvalidStructureSnafu {
            format: source.format,
        })
    }

    fn templates(action: Option<&TemplatesCommand>) -> Result<(), ApplicationError> {
        match action {
            None => Self::list_templates(None),
            Some(TemplatesCommand::List { format }) => Self::list_templates(*format),
            Some(TemplatesCommand::Show { id, format }) => {
                let template = StructureSource::template(id).context(SourceSnafu)?;
                let content = template
                    .content_as(format.unwrap_or(template.format))
                    .context(ConversionSnafu)?;
                println!("{content}");
                Ok(())
            }
        }
    }

    fn list_templates(format: Option<Format>) -> Result<(), ApplicationError> {
        templates()
            .iter()
            .filter(|template| format.is_none_or(|format| template.format == format))
            .for_each(|template| {
                println!(
                    "{:<16} {:<5} {} - {}",
                    template.id, template.format, template.name, template.description
                )
            });
        Ok(())
    }

    async fn emit(content: &str, output: Option<&Path>) -> Result<(), ApplicationError> {
        match output {
            None => {
                println!("{content}");
                Ok(())
            }
            Some(path) => {
                debug!("Writing result to {}", path.display());
                compio::fs::write(path, content.as_bytes().to_vec())
                    .await
                    .0
                    .context(WriteOutputSnafu { path })
            }
        }
    }
}

async fn load(args: &SourceArgs) -> Result<StructureSource, ApplicationError> {
    StructureSource::load(args).await.context(SourceSnafu)
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while reading settings"))]
    SettingsError { source: SettingsError },
    #[snafu(display("Could not load the structure"))]
    SourceError { source: SourceError },
    #[snafu(display("The structure is not valid {}", format))]
    InvalidStructureError { format: Format, source: DecodeError },
    #[snafu(display("Conversion failed"))]
    ConversionError { source: ConversionError },
    #[snafu(display("Failed to write {}", path.display()))]
    WriteOutputError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Scaffolding failed"))]
    ScaffoldError { source: ScaffoldError },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn source_from(input: &Path, from: Format) -> SourceArgs {
        SourceArgs {
            input: Some(input.display().to_string()),
            from,
            template: None,
        }
    }

    #[compio::test]
    async fn convert_writes_output_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let input = temp_dir.path().join("structure.txt");
        let output = temp_dir.path().join("structure.json");
        fs::write(&input, "src/\n  main.rs\nCargo.toml\n").unwrap();

        Application::run(RuntimeConfig {
            root: temp_dir.path().to_path_buf(),
            command: Command::Convert {
                source: source_from(&input, Format::Text),
                to: Format::Json,
                output: Some(output.clone()),
            },
        })
        .await
        .unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "{\n  \"src\": {\n    \"main.rs\": null\n  },\n  \"Cargo.toml\": null\n}"
        );
    }

    #[compio::test]
    async fn convert_fails_on_malformed_json() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let input = temp_dir.path().join("broken.json");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "{ not valid").unwrap();

        let result = Application::run(RuntimeConfig {
            root: temp_dir.path().to_path_buf(),
            command: Command::Convert {
                source: source_from(&input, Format::Json),
                to: Format::Text,
                output: Some(output.clone()),
            },
        })
        .await;

        assert!(matches!(
            result,
            Err(ApplicationError::ConversionError { .. })
        ));
        assert!(!output.exists());
    }

    #[compio::test]
    async fn scaffold_uses_settings_from_root() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(
            temp_dir.path().join("structgen.yaml"),
            "defaultContent: false\n",
        )
        .unwrap();
        let out = temp_dir.path().join("out");

        Application::run(RuntimeConfig {
            root: temp_dir.path().to_path_buf(),
            command: Command::Scaffold {
                source: SourceArgs {
                    input: None,
                    from: Format::Text,
                    template: Some("express-js".to_string()),
                },
                out: out.clone(),
                name: "api".to_string(),
            },
        })
        .await
        .unwrap();

        let app = out.join("api/src/app.js");
        assert!(app.is_file());
        assert_eq!(fs::read_to_string(app).unwrap(), "");
        assert!(out.join("api/.gitignore").is_file());
    }

    #[compio::test]
    async fn strict_settings_reject_duplicates() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("structgen.yaml"), "duplicates: strict\n").unwrap();
        let input = temp_dir.path().join("dupes.txt");
        fs::write(&input, "a.txt\na.txt\n").unwrap();

        let result = Application::run(RuntimeConfig {
            root: temp_dir.path().to_path_buf(),
            command: Command::Check {
                source: source_from(&input, Format::Text),
            },
        })
        .await;

        assert!(matches!(
            result,
            Err(ApplicationError::InvalidStructureError {
                format: Format::Text,
                ..
            })
        ));
    }

    #[compio::test]
    async fn invalid_settings_stop_the_run() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("structgen.yaml"), "duplicates: sometimes\n").unwrap();

        let result = Application::run(RuntimeConfig {
            root: temp_dir.path().to_path_buf(),
            command: Command::Templates { action: None },
        })
        .await;

        assert!(matches!(result, Err(ApplicationError::SettingsError { .. })));
    }
}
