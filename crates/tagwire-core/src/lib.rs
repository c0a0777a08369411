//! # Tagwire Core
//!
//! Pure primitives for the tagwire codec: a closed set of typed payload
//! schemas and the machinery to convert them between a compact canonical
//! binary encoding and a human-inspectable textual form.
//!
//! This crate contains no I/O. It is pure computation over byte buffers and
//! JSON values; the line-oriented stream driver lives in the `tagwire` CLI
//! crate.
//!
//! ## Key pieces
//!
//! - [`TypeRegistry`] - name/ordinal resolution over the closed alternative
//!   list, built once at startup
//! - [`canonical`] - deterministic field encoding and decoding
//! - [`varint`] - the variable-length integer rule used for lengths and
//!   discriminants
//! - [`multibase`] - single-character-prefixed text wrapping of binary data
//! - [`json`] - the structural JSON bridge, including the recursion-guarded
//!   tagged form

pub mod canonical;
pub mod error;
pub mod json;
pub mod multibase;
pub mod registry;
pub mod schema;
pub mod value;
pub mod varint;

pub use canonical::{decode_struct, encode_struct, encode_tagged, strip_discriminant};
pub use error::CodecError;
pub use json::{from_json, from_tagged_json, resolve_tag, to_json, MAX_RECURSION_DEPTH};
pub use multibase::{Base, DEFAULT_BASE};
pub use registry::TypeRegistry;
pub use schema::{AlternativeSchema, FieldKind, FieldSchema, ALTERNATIVES};
pub use value::{FieldValue, StructValue, U256};
