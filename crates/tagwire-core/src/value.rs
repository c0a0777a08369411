//! Dynamic value model for decoded alternatives.
//!
//! Values are schema-driven rather than typed per alternative: a
//! [`StructValue`] pairs a schema reference with one [`FieldValue`] per
//! declared field. Everything here is created and destroyed per input line.

use std::fmt;

use crate::schema::{AlternativeSchema, FieldKind};

/// A 256-bit unsigned integer, stored as 32 big-endian bytes.
///
/// JSON carries these as decimal strings, the wire as the raw 32 bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct U256(pub [u8; 32]);

impl U256 {
    pub const ZERO: Self = Self([0u8; 32]);

    /// Create from raw big-endian bytes.
    pub const fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw big-endian bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Widen a `u64`.
    pub fn from_u64(n: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&n.to_be_bytes());
        Self(bytes)
    }

    /// Parse a decimal string. Returns `None` on empty input, non-digit
    /// characters, or overflow past 2^256 - 1.
    pub fn from_dec_str(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        let mut bytes = [0u8; 32];
        for ch in s.bytes() {
            if !ch.is_ascii_digit() {
                return None;
            }
            // bytes = bytes * 10 + digit
            let mut carry = u16::from(ch - b'0');
            for b in bytes.iter_mut().rev() {
                let v = u16::from(*b) * 10 + carry;
                *b = v as u8;
                carry = v >> 8;
            }
            if carry != 0 {
                return None;
            }
        }
        Some(Self(bytes))
    }

    /// Render as a decimal string.
    pub fn to_dec_string(&self) -> String {
        let mut work = self.0;
        let mut digits = Vec::new();
        loop {
            // digits.push(work % 10); work /= 10
            let mut rem = 0u32;
            let mut nonzero = false;
            for b in work.iter_mut() {
                let v = rem * 256 + u32::from(*b);
                *b = (v / 10) as u8;
                rem = v % 10;
                if *b != 0 {
                    nonzero = true;
                }
            }
            digits.push(rem as u8);
            if !nonzero {
                break;
            }
        }
        digits.iter().rev().map(|d| char::from(b'0' + d)).collect()
    }
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dec_string())
    }
}

impl fmt::Debug for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U256(0x{})", hex::encode(self.0))
    }
}

impl From<u64> for U256 {
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

/// One field's value, matching its declared [`FieldKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    UInt32(u32),
    UInt64(u64),
    UInt256(U256),
    FixedBytes(Vec<u8>),
    VarBytes(Vec<u8>),
    Nested(StructValue),
}

/// A decoded alternative: its schema plus one value per field, in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructValue {
    pub schema: &'static AlternativeSchema,
    pub fields: Vec<FieldValue>,
}

impl StructValue {
    pub fn new(schema: &'static AlternativeSchema, fields: Vec<FieldValue>) -> Self {
        Self { schema, fields }
    }

    /// Default-construct an alternative: zero integers, zero-filled fixed
    /// blocks, empty variable blocks.
    pub fn default_for(schema: &'static AlternativeSchema) -> Self {
        let fields = schema
            .fields
            .iter()
            .map(|f| match f.kind {
                FieldKind::UInt32 => FieldValue::UInt32(0),
                FieldKind::UInt64 => FieldValue::UInt64(0),
                FieldKind::UInt256 => FieldValue::UInt256(U256::ZERO),
                FieldKind::FixedBytes(width) => FieldValue::FixedBytes(vec![0u8; width]),
                FieldKind::VarBytes => FieldValue::VarBytes(Vec::new()),
                FieldKind::Nested(nested) => FieldValue::Nested(Self::default_for(nested)),
            })
            .collect();
        Self { schema, fields }
    }
}
