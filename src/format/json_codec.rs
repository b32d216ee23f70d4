use std::fmt;

use serde::Deserialize;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde_json::{Map, Value};
use snafu::{ResultExt, Snafu};

use crate::tree::{Directory, File, MergePolicy, Node, TreeError};

/// Decodes a JSON structure using [`MergePolicy::Merge`] for duplicates.
pub fn decode_json(content: &str) -> Result<Directory, JsonDecodeError> {
    decode_json_with(content, MergePolicy::Merge)
}

/// Decodes a JSON structure. Blank input is an empty structure.
///
/// Keys repeated inside one object all reach the tree, so `policy` decides
/// whether they merge or fail.
pub fn decode_json_with(content: &str, policy: MergePolicy) -> Result<Directory, JsonDecodeError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    if content.trim().is_empty() {
        return Ok(Directory::root());
    }

    let entry: Entry = serde_json::from_str(content).context(InvalidJsonSnafu)?;
    decode_root(&entry, policy)
}

/// Decodes an already parsed JSON structure.
///
/// The top level must be an object. Inside it every key is an entry:
/// - `null` is a file without content
/// - a string is a file with that content
/// - an object is a directory
/// - an array is a directory of empty files named by its string items
/// - numbers and booleans are files without content
pub fn decode_json_value(value: &Value, policy: MergePolicy) -> Result<Directory, JsonDecodeError> {
    decode_root(&Entry::from(value), policy)
}

/// JSON value that keeps every key of an object in document order,
/// repeated keys included. `serde_json::Map` keeps only the last one.
#[derive(Debug)]
enum Entry {
    Null,
    Scalar(&'static str),
    Text(String),
    Array(Vec<Entry>),
    Object(Vec<(String, Entry)>),
}

impl Entry {
    fn kind(&self) -> &'static str {
        match self {
            Entry::Null => "null",
            Entry::Scalar(kind) => *kind,
            Entry::Text(_) => "a string",
            Entry::Array(_) => "an array",
            Entry::Object(_) => "an object",
        }
    }
}

impl From<&Value> for Entry {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Entry::Null,
            Value::Bool(_) => Entry::Scalar("a boolean"),
            Value::Number(_) => Entry::Scalar("a number"),
            Value::String(text) => Entry::Text(text.clone()),
            Value::Array(items) => Entry::Array(items.iter().map(Entry::from).collect()),
            Value::Object(entries) => Entry::Object(
                entries
                    .iter()
                    .map(|(name, value)| (name.clone(), Entry::from(value)))
                    .collect(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(EntryVisitor)
    }
}

struct EntryVisitor;

impl<'de> Visitor<'de> for EntryVisitor {
    type Value = Entry;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any JSON value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Entry, E> {
        Ok(Entry::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Entry, E> {
        Ok(Entry::Null)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Entry, E> {
        Ok(Entry::Scalar("a boolean"))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Entry, E> {
        Ok(Entry::Scalar("a number"))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Entry, E> {
        Ok(Entry::Scalar("a number"))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Entry, E> {
        Ok(Entry::Scalar("a number"))
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<Entry, E> {
        Ok(Entry::Text(text.to_string()))
    }

    fn visit_string<E: de::Error>(self, text: String) -> Result<Entry, E> {
        Ok(Entry::Text(text))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Entry, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Entry::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Entry, A::Error> {
        let mut entries = Vec::new();
        while let Some((name, value)) = map.next_entry::<String, Entry>()? {
            entries.push((name, value));
        }
        Ok(Entry::Object(entries))
    }
}

fn decode_root(entry: &Entry, policy: MergePolicy) -> Result<Directory, JsonDecodeError> {
    match entry {
        Entry::Object(entries) => decode_entries(Directory::root(), entries, "", policy),
        other => RootNotObjectSnafu {
            found: other.kind(),
        }
        .fail(),
    }
}

fn decode_entries(
    mut directory: Directory,
    entries: &[(String, Entry)],
    prefix: &str,
    policy: MergePolicy,
) -> Result<Directory, JsonDecodeError> {
    for (name, entry) in entries {
        let path = format!("{prefix}{name}");
        let node: Node = match entry {
            Entry::Null | Entry::Scalar(_) => File::empty(name).into(),
            Entry::Text(content) => File::with_content(name, content.as_str()).into(),
            Entry::Object(nested) => {
                decode_entries(Directory::new(name), nested, &format!("{path}/"), policy)?.into()
            }
            Entry::Array(items) => decode_file_list(name, items, &path, policy)?.into(),
        };
        directory
            .add_child(node, policy)
            .context(InvalidEntrySnafu { path })?;
    }

    Ok(directory)
}

// Items that are not strings have no name to give a file and are skipped.
fn decode_file_list(
    name: &str,
    items: &[Entry],
    path: &str,
    policy: MergePolicy,
) -> Result<Directory, JsonDecodeError> {
    let mut directory = Directory::new(name);
    let names = items.iter().filter_map(|item| match item {
        Entry::Text(item) => Some(item.as_str()),
        _ => None,
    });
    for item in names {
        directory
            .add_child(File::empty(item), policy)
            .context(InvalidEntrySnafu {
                path: format!("{path}/{item}"),
            })?;
    }
    Ok(directory)
}

/// Builds the JSON value of a structure. Directories always become objects.
pub fn to_json_value(root: &Directory) -> Value {
    Value::Object(encode_entries(root))
}

fn encode_entries(directory: &Directory) -> Map<String, Value> {
    directory
        .children()
        .map(|child| {
            let value = match child {
                Node::Directory(nested) => Value::Object(encode_entries(nested)),
                Node::File(file) => file
                    .content()
                    .map_or(Value::Null, |content| Value::String(content.to_string())),
            };
            (child.name().to_string(), value)
        })
        .collect()
}

/// Renders a structure as JSON indented by two spaces, keys in tree order.
pub fn encode_json(root: &Directory) -> Result<String, JsonEncodeError> {
    serde_json::to_string_pretty(&to_json_value(root)).context(JsonEncodeSnafu)
}

#[derive(Debug, Snafu)]
pub enum JsonDecodeError {
    #[snafu(display("Structure is not valid JSON"))]
    InvalidJson { source: serde_json::Error },
    #[snafu(display("Top level of a JSON structure should be an object, found {}", found))]
    RootNotObject { found: &'static str },
    #[snafu(display("Invalid entry '{}'", path))]
    InvalidEntry { path: String, source: TreeError },
}

#[derive(Debug, Snafu)]
#[snafu(display("Failed to serialize structure as JSON"))]
pub struct JsonEncodeError {
    source: serde_json::Error,
}
