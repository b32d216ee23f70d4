//! Conversion between the textual notations of a project structure.
//!
//! Two notations are supported: an indentation based plain text form and a
//! nested JSON object form. Both decode into a [`crate::tree::Directory`],
//! which can then be rendered in either notation again.

mod converter;
mod format;
mod json_codec;
mod text_parser;
mod text_serializer;

pub use converter::{ConversionError, DecodeError, convert, convert_with, parse, render};
pub use format::Format;
pub use json_codec::{
    JsonDecodeError, JsonEncodeError, decode_json, decode_json_value, decode_json_with,
    encode_json, to_json_value,
};
pub use text_parser::{TextParseError, parse_text, parse_text_with};
pub use text_serializer::serialize_text;
