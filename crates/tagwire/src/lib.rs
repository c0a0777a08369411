//! # tagwire
//!
//! Line-oriented stream filter between the canonical binary encoding and
//! JSON/multibase text.
//!
//! The binary reads one JSON document per line on standard input and writes
//! exactly one output unit per line: serialize mode emits multibase text (or
//! null-byte-prefixed raw binary records), deserialize mode emits
//! struct-shaped JSON. The codec itself lives in `tagwire-core`; this crate
//! owns argument parsing, the driver loop, and the fail-fast exit policy.

pub mod driver;
pub mod error;

pub use driver::{deserialize_stream, serialize_stream, Output};
pub use error::{DriverError, Result};
