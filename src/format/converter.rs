use snafu::{ResultExt, Snafu};

use super::Format;
use super::json_codec::{JsonDecodeError, JsonEncodeError, decode_json_with, encode_json};
use super::text_parser::{TextParseError, parse_text_with};
use super::text_serializer::serialize_text;
use crate::tree::{Directory, MergePolicy};

/// Builds the tree described by `content`.
pub fn parse(content: &str, format: Format, policy: MergePolicy) -> Result<Directory, DecodeError> {
    match format {
        Format::Text => parse_text_with(content, policy).context(TextDecodeSnafu),
        Format::Json => decode_json_with(content, policy).context(JsonDecodeSnafu),
    }
}

/// Writes a tree in the given notation.
pub fn render(root: &Directory, format: Format) -> Result<String, JsonEncodeError> {
    match format {
        Format::Text => Ok(serialize_text(root)),
        Format::Json => encode_json(root),
    }
}

/// Converts structure content between notations, merging duplicate entries.
pub fn convert(content: &str, from: Format, to: Format) -> Result<String, ConversionError> {
    convert_with(content, from, to, MergePolicy::Merge)
}

/// Converts structure content between notations.
///
/// Content already in the target notation is returned untouched. Content
/// that cannot be read in its declared notation is an error, it is never
/// passed through as if it had been converted.
pub fn convert_with(
    content: &str,
    from: Format,
    to: Format,
    policy: MergePolicy,
) -> Result<String, ConversionError> {
    if from == to {
        return Ok(content.to_string());
    }

    let root = parse(content, from, policy).context(DecodeSnafu { from })?;
    render(&root, to).context(EncodeSnafu { to })
}

#[derive(Debug, Snafu)]
pub enum DecodeError {
    #[snafu(display("Failed to parse text structure"))]
    TextDecode { source: TextParseError },
    #[snafu(display("Failed to decode JSON structure"))]
    JsonDecode { source: JsonDecodeError },
}

#[derive(Debug, Snafu)]
pub enum ConversionError {
    #[snafu(display("Could not read the {} structure", from))]
    Decode { from: Format, source: DecodeError },
    #[snafu(display("Could not write the {} structure", to))]
    Encode { to: Format, source: JsonEncodeError },
}
