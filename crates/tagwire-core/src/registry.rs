//! Bidirectional name/ordinal resolution for the closed alternative set.
//!
//! The registry is built exactly once at process start and never mutated
//! afterward; lookups are pure and safe to share by reference. It is the
//! single source of truth for type tags: a name and its ordinal always
//! resolve to the same alternative.

use std::collections::HashMap;

use crate::error::CodecError;
use crate::schema::{AlternativeSchema, ALTERNATIVES};
use crate::value::StructValue;

/// Read-only lookup table over the closed alternative list.
#[derive(Debug)]
pub struct TypeRegistry {
    alternatives: &'static [AlternativeSchema],
    by_name: HashMap<&'static str, usize>,
}

impl TypeRegistry {
    /// Build the registry over the standard alternative set.
    pub fn new() -> Self {
        Self::with_alternatives(ALTERNATIVES)
    }

    /// Build the registry over an explicit alternative list.
    pub fn with_alternatives(alternatives: &'static [AlternativeSchema]) -> Self {
        let mut by_name = HashMap::with_capacity(alternatives.len());
        for (ordinal, alt) in alternatives.iter().enumerate() {
            let prev = by_name.insert(alt.name, ordinal);
            debug_assert!(prev.is_none(), "duplicate alternative name {}", alt.name);
        }
        Self {
            alternatives,
            by_name,
        }
    }

    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Resolve a declared name to its ordinal.
    pub fn resolve_by_name(&self, name: &str) -> Result<usize, CodecError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| CodecError::UnknownVariantType(name.to_string()))
    }

    /// Resolve an ordinal to its declared name.
    pub fn resolve_by_ordinal(&self, ordinal: usize) -> Result<&'static str, CodecError> {
        self.schema(ordinal).map(|alt| alt.name)
    }

    /// Fetch the schema at `ordinal`.
    pub fn schema(&self, ordinal: usize) -> Result<&'static AlternativeSchema, CodecError> {
        self.alternatives
            .get(ordinal)
            .ok_or_else(|| CodecError::UnknownVariantType(format!("ordinal {}", ordinal)))
    }

    /// Default-construct the alternative at `ordinal`, failing cleanly for
    /// out-of-range input.
    pub fn make_default(&self, ordinal: usize) -> Result<StructValue, CodecError> {
        self.schema(ordinal).map(StructValue::default_for)
    }

    /// Find the unique alternative whose field-name set equals `names`.
    ///
    /// Used by encode-mode struct inference: a bare JSON object selects its
    /// alternative by the exact set of member names.
    pub fn match_field_names(&self, mut names: Vec<&str>) -> Result<usize, CodecError> {
        names.sort_unstable();
        for (ordinal, alt) in self.alternatives.iter().enumerate() {
            let mut declared: Vec<&str> = alt.field_names().collect();
            declared.sort_unstable();
            if declared == names {
                return Ok(ordinal);
            }
        }
        Err(CodecError::UnknownVariantType(format!(
            "no alternative matches fields [{}]",
            names.join(", ")
        )))
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
