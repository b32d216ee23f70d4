use colored::Colorize;

use crate::tree::{Directory, Node};

/// Draws a structure with box-drawing connectors, directories highlighted
pub fn render_tree(root: &Directory) -> String {
    let mut output = String::from(".");
    push_entries(root, "", &mut output);
    output
}

fn push_entries(directory: &Directory, prefix: &str, output: &mut String) {
    let count = directory.len();
    for (index, child) in directory.children().enumerate() {
        let last = index + 1 == count;
        output.push('\n');
        output.push_str(prefix);
        output.push_str(if last { "└── " } else { "├── " });

        match child {
            Node::Directory(nested) => {
                let label = format!("{}/", nested.name());
                output.push_str(&label.as_str().blue().bold().to_string());
                let nested_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
                push_entries(nested, &nested_prefix, output);
            }
            Node::File(file) => output.push_str(file.name()),
        }
    }
}
