use crate::tree::{Directory, Node};

const INDENT: &str = "  ";

/// Renders a structure as indented text, two spaces per level.
///
/// File contents have no textual notation and are dropped.
pub fn serialize_text(root: &Directory) -> String {
    let mut lines = Vec::new();
    push_lines(root, 0, &mut lines);
    lines.join("\n")
}

fn push_lines(directory: &Directory, depth: usize, lines: &mut Vec<String>) {
    let indent = INDENT.repeat(depth);
    for child in directory.children() {
        match child {
            Node::Directory(nested) => {
                lines.push(format!("{indent}{}/", nested.name()));
                push_lines(nested, depth + 1, lines);
            }
            Node::File(file) => lines.push(format!("{indent}{}", file.name())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::parse_text;
    use crate::tree::{File, MergePolicy};
    use rstest::*;

    #[test]
    fn empty_root_renders_empty_string() {
        assert_eq!(serialize_text(&Directory::root()), "");
    }

    #[test]
    fn nested_directories_indent_by_two_spaces() {
        let root = Directory::root()
            .with_child(
                Directory::new("src")
                    .with_child(
                        Directory::new("components")
                            .with_child(File::empty("Button.jsx"), MergePolicy::Strict)
                            .unwrap(),
                        MergePolicy::Strict,
                    )
                    .unwrap()
                    .with_child(File::empty("App.jsx"), MergePolicy::Strict)
                    .unwrap(),
                MergePolicy::Strict,
            )
            .unwrap()
            .with_child(File::empty("README.md"), MergePolicy::Strict)
            .unwrap();

        assert_eq!(
            serialize_text(&root),
            "src/\n  components/\n    Button.jsx\n  App.jsx\nREADME.md"
        );
    }

    #[test]
    fn empty_directories_keep_their_slash() {
        let root = Directory::root()
            .with_child(Directory::new("assets"), MergePolicy::Strict)
            .unwrap();

        assert_eq!(serialize_text(&root), "assets/");
    }

    #[test]
    fn file_content_is_dropped() {
        let root = Directory::root()
            .with_child(File::with_content("README.md", "# Title"), MergePolicy::Strict)
            .unwrap();

        assert_eq!(serialize_text(&root), "README.md");
    }

    #[rstest]
    #[case("README.md")]
    #[case("src/\n  main.rs")]
    #[case("a/\n  b/\n    c/\n      d.txt\n  e.txt\nf/")]
    #[case("src/\n  components/\n    Button.jsx\n  App.jsx\nREADME.md")]
    fn canonical_text_is_reproduced(#[case] content: &str) {
        let root = parse_text(content).unwrap();
        assert_eq!(serialize_text(&root), content);
    }

    #[rstest]
    #[case("src/\n    main.rs\n    lib/\n        mod.rs")]
    #[case("src/\n\tmain.rs\nREADME.md")]
    fn serialized_text_parses_back_to_same_tree(#[case] content: &str) {
        let root = parse_text(content).unwrap();
        let reparsed = parse_text(&serialize_text(&root)).unwrap();
        assert_eq!(reparsed, root);
    }
}
