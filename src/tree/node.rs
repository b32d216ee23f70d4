use derive_more::{From, IsVariant};
use hashlink::LinkedHashMap;
use snafu::{Snafu, ensure};

/// What happens when a node is added next to a sibling with the same name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IsVariant)]
pub enum MergePolicy {
    /// Directories are merged recursively, anything else replaces the
    /// earlier node while keeping its position
    #[default]
    Merge,
    /// Duplicate names are rejected
    Strict,
}

/// A single entry of a structure: either a directory or a file
#[derive(Debug, Clone, PartialEq, Eq, From, IsVariant)]
pub enum Node {
    Directory(Directory),
    File(File),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Directory(directory) => directory.name(),
            Node::File(file) => file.name(),
        }
    }

    fn merge(&mut self, incoming: Node) -> Result<(), TreeError> {
        match (self, incoming) {
            (Node::Directory(existing), Node::Directory(incoming)) => {
                for (_, child) in incoming.children {
                    existing.add_child(child, MergePolicy::Merge)?;
                }
                Ok(())
            }
            (slot, incoming) => {
                *slot = incoming;
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Directory {
    name: String,
    children: LinkedHashMap<String, Node>,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Directory {
            name: name.into(),
            children: LinkedHashMap::new(),
        }
    }

    /// The anonymous directory every structure hangs from
    pub fn root() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.values()
    }

    pub fn get(&self, name: impl AsRef<str>) -> Option<&Node> {
        self.children.get(name.as_ref())
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Fails when a child called `name` could not be added under `policy`.
    pub fn check_child(&self, name: &str, policy: MergePolicy) -> Result<(), TreeError> {
        ensure!(!name.is_empty(), EmptyNameSnafu);
        ensure!(
            policy.is_merge() || !self.children.contains_key(name),
            DuplicateNameSnafu { name }
        );
        Ok(())
    }

    pub fn add_child(&mut self, node: impl Into<Node>, policy: MergePolicy) -> Result<(), TreeError> {
        let node = node.into();
        self.check_child(node.name(), policy)?;

        if let Some(existing) = self.children.get_mut(node.name()) {
            return existing.merge(node);
        }

        self.children.insert(node.name().to_string(), node);
        Ok(())
    }

    /// Builder flavour of [`Directory::add_child`]
    pub fn with_child(
        mut self,
        node: impl Into<Node>,
        policy: MergePolicy,
    ) -> Result<Self, TreeError> {
        self.add_child(node, policy)?;
        Ok(self)
    }

    /// Counts every directory and file below this one, excluding itself
    pub fn stats(&self) -> TreeStats {
        self.children()
            .fold(TreeStats::default(), |mut stats, child| {
                match child {
                    Node::Directory(directory) => {
                        let nested = directory.stats();
                        stats.directories += 1 + nested.directories;
                        stats.files += nested.files;
                    }
                    Node::File(_) => stats.files += 1,
                }
                stats
            })
    }
}

// Child order matters when rendering but not when comparing structures.
impl PartialEq for Directory {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .all(|(name, child)| other.children.get(name) == Some(child))
    }
}

impl Eq for Directory {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    name: String,
    content: Option<String>,
}

impl File {
    /// A file without content, rendered as `null` in JSON
    pub fn empty(name: impl Into<String>) -> Self {
        File {
            name: name.into(),
            content: None,
        }
    }

    pub fn with_content(name: impl Into<String>, content: impl Into<String>) -> Self {
        File {
            name: name.into(),
            content: Some(content.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    pub directories: usize,
    pub files: usize,
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum TreeError {
    #[snafu(display("An entry named '{}' already exists in this directory", name))]
    DuplicateName { name: String },
    #[snafu(display("Entry names cannot be empty"))]
    EmptyName,
}
