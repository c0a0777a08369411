//! # Tagwire Testkit
//!
//! Testing utilities for the tagwire codec.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: known values with their canonical byte encodings,
//!   for pinning the wire format across changes
//! - **Generators**: proptest strategies for property-based testing
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use tagwire_core::{canonical, TypeRegistry};
//! use tagwire_testkit::generators::any_alternative;
//!
//! proptest! {
//!     #[test]
//!     fn encode_is_deterministic(value in any_alternative()) {
//!         let a = canonical::encode_struct(&value).unwrap();
//!         let b = canonical::encode_struct(&value).unwrap();
//!         prop_assert_eq!(a, b);
//!     }
//! }
//! ```

pub mod generators;
pub mod vectors;
