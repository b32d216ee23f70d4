use std::path::{Path, PathBuf};

use compio::fs;
use snafu::{ResultExt, Snafu, ensure};
use tracing::{debug, info};

use super::default_content;
use crate::config::Settings;
use crate::tree::{Directory, File, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldOptions {
    pub default_content: bool,
    pub overwrite: bool,
}

impl From<&Settings> for ScaffoldOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            default_content: settings.default_content,
            overwrite: settings.overwrite,
        }
    }
}

/// What a scaffold run did on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScaffoldReport {
    pub directories: usize,
    pub files_written: usize,
    pub files_skipped: usize,
}

/// Creates every directory and file of `root` below `target`.
pub async fn scaffold(
    root: &Directory,
    target: &Path,
    options: ScaffoldOptions,
) -> Result<ScaffoldReport, ScaffoldError> {
    info!("Scaffolding structure into {}", target.display());
    create_directory(target).await?;

    let mut report = ScaffoldReport::default();
    let mut pending: Vec<(&Directory, PathBuf)> = vec![(root, target.to_path_buf())];

    while let Some((directory, path)) = pending.pop() {
        for child in directory.children() {
            let child_path = join_name(&path, child.name())?;
            match child {
                Node::Directory(nested) => {
                    create_directory(&child_path).await?;
                    report.directories += 1;
                    pending.push((nested, child_path));
                }
                Node::File(file) => {
                    if write_file(file, &child_path, options).await? {
                        report.files_written += 1;
                    } else {
                        report.files_skipped += 1;
                    }
                }
            }
        }
    }

    info!(
        "Created {} directories, wrote {} files, skipped {} existing files",
        report.directories, report.files_written, report.files_skipped
    );
    Ok(report)
}

/// Resolves an entry name below `base`. Names may contain `/` to describe
/// several levels at once but can never leave `base`.
fn join_name(base: &Path, name: &str) -> Result<PathBuf, ScaffoldError> {
    let mut path = base.to_path_buf();
    for component in name.split('/') {
        ensure!(
            !component.is_empty()
                && component != "."
                && component != ".."
                && !component.contains('\\')
                && Path::new(component).is_relative(),
            UnsafeNameSnafu { name }
        );
        path.push(component);
    }
    Ok(path)
}

async fn create_directory(path: &Path) -> Result<(), ScaffoldError> {
    debug!("Creating directory {}", path.display());
    fs::create_dir_all(path)
        .await
        .context(CreateDirectorySnafu { path })
}

/// Returns whether the file was written, existing files are kept unless overwriting
async fn write_file(
    file: &File,
    path: &Path,
    options: ScaffoldOptions,
) -> Result<bool, ScaffoldError> {
    if !options.overwrite && fs::metadata(path).await.is_ok() {
        debug!("Keeping existing file {}", path.display());
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        create_directory(parent).await?;
    }

    let content = match file.content() {
        Some(content) => content.to_string(),
        None if options.default_content => {
            let file_name = file.name().rsplit('/').next().unwrap_or_default();
            default_content(file_name).unwrap_or_default()
        }
        None => String::new(),
    };

    debug!("Writing {} bytes to {}", content.len(), path.display());
    fs::write(path, content.into_bytes())
        .await
        .0
        .context(WriteFileSnafu { path })?;
    Ok(true)
}

#[derive(Debug, Snafu)]
pub enum ScaffoldError {
    #[snafu(display("Entry name '{}' would escape the target directory", name))]
    UnsafeName { name: String },
    #[snafu(display("Failed to create directory {}", path.display()))]
    CreateDirectoryError { path: PathBuf, source: std::io::Error },
    #[snafu(display("Failed to write file {}", path.display()))]
    WriteFileError { path: PathBuf, source: std::io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{decode_json, parse_text};
    use rstest::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    const PLAIN: ScaffoldOptions = ScaffoldOptions {
        default_content: false,
        overwrite: false,
    };

    #[compio::test]
    async fn scaffold_creates_nested_structure() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = parse_text("src/\n  components/\n    Button.jsx\n  App.jsx\nassets/\nREADME.md")
            .unwrap();

        let report = scaffold(&root, temp_dir.path(), PLAIN).await.unwrap();

        assert_eq!(
            report,
            ScaffoldReport {
                directories: 3,
                files_written: 3,
                files_skipped: 0,
            }
        );
        assert!(temp_dir.path().join("src/components/Button.jsx").is_file());
        assert!(temp_dir.path().join("src/App.jsx").is_file());
        assert!(temp_dir.path().join("assets").is_dir());
        assert_eq!(
            std_fs::read_to_string(temp_dir.path().join("README.md")).unwrap(),
            ""
        );
    }

    #[compio::test]
    async fn scaffold_writes_declared_content_verbatim() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = decode_json(r##"{"README.md": "# Custom\n", "main.js": null}"##).unwrap();

        let options = ScaffoldOptions {
            default_content: true,
            overwrite: false,
        };
        scaffold(&root, temp_dir.path(), options).await.unwrap();

        assert_eq!(
            std_fs::read_to_string(temp_dir.path().join("README.md")).unwrap(),
            "# Custom\n"
        );
        assert_eq!(
            std_fs::read_to_string(temp_dir.path().join("main.js")).unwrap(),
            "// main.js\nconsole.log('Hello from main.js');\n"
        );
    }

    #[compio::test]
    async fn scaffold_keeps_existing_files_unless_overwriting() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        std_fs::write(temp_dir.path().join("notes.txt"), "mine").unwrap();
        let root = decode_json(r#"{"notes.txt": "generated"}"#).unwrap();

        let report = scaffold(&root, temp_dir.path(), PLAIN).await.unwrap();
        assert_eq!(report.files_skipped, 1);
        assert_eq!(
            std_fs::read_to_string(temp_dir.path().join("notes.txt")).unwrap(),
            "mine"
        );

        let overwrite = ScaffoldOptions {
            default_content: false,
            overwrite: true,
        };
        let report = scaffold(&root, temp_dir.path(), overwrite).await.unwrap();
        assert_eq!(report.files_written, 1);
        assert_eq!(
            std_fs::read_to_string(temp_dir.path().join("notes.txt")).unwrap(),
            "generated"
        );
    }

    #[compio::test]
    async fn second_run_keeps_every_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = parse_text("src/\n  lib/\n    mod.rs\n  main.rs\nREADME.md").unwrap();

        scaffold(&root, temp_dir.path(), PLAIN).await.unwrap();
        std_fs::write(temp_dir.path().join("src/lib/mod.rs"), "edited").unwrap();
        let report = scaffold(&root, temp_dir.path(), PLAIN).await.unwrap();

        assert_eq!(report.files_written, 0);
        assert_eq!(report.files_skipped, 3);
        assert_eq!(
            std_fs::read_to_string(temp_dir.path().join("src/lib/mod.rs")).unwrap(),
            "edited"
        );
    }

    #[compio::test]
    async fn scaffold_accepts_multi_level_names() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = decode_json(r#"{"src/utils": {"helpers.py": null}}"#).unwrap();

        scaffold(&root, temp_dir.path(), PLAIN).await.unwrap();

        assert!(temp_dir.path().join("src/utils/helpers.py").is_file());
    }

    #[rstest]
    #[case("../escape.txt")]
    #[case("a/../../b")]
    #[case("/etc/passwd")]
    #[case("./here")]
    #[case("a//b")]
    #[case("dir\\file")]
    fn join_name_rejects_unsafe_names(#[case] name: &str) {
        let result = join_name(Path::new("/tmp/target"), name);
        assert!(matches!(result, Err(ScaffoldError::UnsafeName { .. })));
    }

    #[rstest]
    #[case("main.rs", "/tmp/target/main.rs")]
    #[case(".gitignore", "/tmp/target/.gitignore")]
    #[case("a/b/c.txt", "/tmp/target/a/b/c.txt")]
    #[case("..hidden", "/tmp/target/..hidden")]
    fn join_name_resolves_below_base(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(
            join_name(Path::new("/tmp/target"), name).unwrap(),
            PathBuf::from(expected)
        );
    }

    #[compio::test]
    async fn scaffold_stops_on_unsafe_names() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = decode_json(r#"{"..": {"x": null}}"#).unwrap();

        let result = scaffold(&root, temp_dir.path(), PLAIN).await;

        assert!(matches!(result, Err(ScaffoldError::UnsafeName { .. })));
    }
}
