use snafu::{ResultExt, Snafu};

use crate::tree::{Directory, File, MergePolicy, TreeError};

/// A directory whose line has been seen but whose children may still follow
struct Frame {
    directory: Directory,
    indent: usize,
    line_number: usize,
}

/// Parses an indented structure using [`MergePolicy::Merge`] for duplicates.
pub fn parse_text(content: &str) -> Result<Directory, TextParseError> {
    parse_text_with(content, MergePolicy::Merge)
}

/// Parses an indented structure.
///
/// Every non-blank line is one entry. Its indent is the raw number of
/// leading whitespace characters, tabs are not expanded. A line becomes a
/// child of the closest open directory whose indent is strictly smaller
/// than its own. Lines ending with `/` open a directory, all other lines
/// are files without content.
pub fn parse_text_with(content: &str, policy: MergePolicy) -> Result<Directory, TextParseError> {
    let mut root = Directory::root();
    let mut open: Vec<Frame> = Vec::new();

    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    for (index, line) in content.lines().enumerate() {
        let name = line.trim();
        if name.is_empty() {
            continue;
        }

        let indent = line.chars().take_while(|c| c.is_whitespace()).count();
        while open.last().is_some_and(|frame| indent <= frame.indent) {
            close_frame(&mut root, &mut open, policy)?;
        }

        let line_number = index + 1;
        match name.strip_suffix('/') {
            Some(directory_name) => {
                // Attaching waits for the frame to close, the name is claimed now.
                innermost(&mut root, &mut open)
                    .check_child(directory_name, policy)
                    .context(TextParseSnafu { line_number })?;
                open.push(Frame {
                    directory: Directory::new(directory_name),
                    indent,
                    line_number,
                });
            }
            None => innermost(&mut root, &mut open)
                .add_child(File::empty(name), policy)
                .context(TextParseSnafu { line_number })?,
        }
    }

    while !open.is_empty() {
        close_frame(&mut root, &mut open, policy)?;
    }

    Ok(root)
}

fn innermost<'a>(root: &'a mut Directory, open: &'a mut [Frame]) -> &'a mut Directory {
    open.last_mut()
        .map(|frame| &mut frame.directory)
        .unwrap_or(root)
}

// A directory is attached to its parent once its last child has been read.
// Later siblings always close it first, so sibling order is unaffected.
fn close_frame(
    root: &mut Directory,
    open: &mut Vec<Frame>,
    policy: MergePolicy,
) -> Result<(), TextParseError> {
    let Some(frame) = open.pop() else {
        return Ok(());
    };

    innermost(root, open)
        .add_child(frame.directory, policy)
        .context(TextParseSnafu {
            line_number: frame.line_number,
        })
}

#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(display("Invalid entry on line {}", line_number))]
pub struct TextParseError {
    line_number: usize,
    source: TreeError,
}

impl TextParseError {
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}
