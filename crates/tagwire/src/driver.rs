//! Single-threaded read-process-write loop.
//!
//! One line of input produces exactly one output unit: a multibase text line,
//! a null-byte-prefixed raw binary record, or a JSON line, depending on mode.
//! Output is flushed before the next line is read so a downstream consumer
//! sees each record as soon as it exists. End-of-stream is clean termination;
//! any processing failure propagates out of the loop and ends the process.

use std::io::{BufRead, Write};

use serde_json::Value;
use tagwire_core::{
    canonical, json, multibase, Base, TypeRegistry,
};

use crate::error::Result;

/// Where serialized bytes go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Multibase text, one line per record.
    Text(Base),
    /// Raw binary: each record prefixed with a single null byte.
    Binary,
}

/// Serialize loop: JSON lines in, encoded records out.
pub fn serialize_stream<R: BufRead, W: Write>(
    registry: &TypeRegistry,
    output: Output,
    mut input: R,
    mut out: W,
) -> Result<()> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let blob = encode_line(registry, line.trim_end_matches(['\r', '\n']))?;
        match output {
            Output::Binary => {
                out.write_all(&[0])?;
                out.write_all(&blob)?;
            }
            Output::Text(base) => {
                writeln!(out, "{}", multibase::encode(&blob, base))?;
            }
        }
        out.flush()?;
    }
}

/// Deserialize loop: tagged JSON lines in, struct-shaped JSON lines out.
pub fn deserialize_stream<R: BufRead, W: Write>(
    registry: &TypeRegistry,
    mut input: R,
    mut out: W,
) -> Result<()> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let document: Value = serde_json::from_str(line.trim_end_matches(['\r', '\n']))?;
        let value = json::from_tagged_json(&document, registry, 0)?;
        writeln!(out, "{}", json::to_json(&value))?;
        out.flush()?;
    }
}

/// Encode one input line to its wire bytes.
///
/// Accepted shapes:
/// - `{"type": "bytes", "value": <multibase>}` - opaque pass-through, the
///   bytes are emitted as-is (no discriminant to strip);
/// - `{"type": <name-or-ordinal>, "value": {fields}}` - explicit alternative
///   selection;
/// - a bare struct-shaped object - the alternative is inferred from the
///   exact set of member names.
///
/// Struct encodes are tagged and then discriminant-stripped before emission.
fn encode_line(registry: &TypeRegistry, line: &str) -> Result<Vec<u8>> {
    let document: Value = serde_json::from_str(line)?;
    let object = document.as_object().ok_or_else(|| {
        tagwire_core::CodecError::MalformedJson("input line must be a JSON object".to_string())
    })?;

    if object.len() == 2 && object.contains_key("type") && object.contains_key("value") {
        let tag = &object["type"];
        let value = &object["value"];
        if tag.as_str() == Some("bytes") {
            let text = value.as_str().ok_or_else(|| {
                tagwire_core::CodecError::MalformedJson(
                    "'value' must be multibase text".to_string(),
                )
            })?;
            return Ok(multibase::decode(text)?);
        }
        let ordinal = json::resolve_tag(tag, registry)?;
        let schema = registry.schema(ordinal)?;
        let parsed = json::from_json(value, schema)?;
        let tagged = canonical::encode_tagged(&parsed, registry)?;
        return Ok(canonical::strip_discriminant(&tagged)?.to_vec());
    }

    let names: Vec<&str> = object.keys().map(String::as_str).collect();
    let ordinal = registry.match_field_names(names)?;
    let schema = registry.schema(ordinal)?;
    let parsed = json::from_json(&document, schema)?;
    let tagged = canonical::encode_tagged(&parsed, registry)?;
    Ok(canonical::strip_discriminant(&tagged)?.to_vec())
}
