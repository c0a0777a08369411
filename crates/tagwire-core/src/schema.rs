//! The closed alternative set, described as static schema tables.
//!
//! Each alternative is an ordered list of named fields; the declared order is
//! the canonical encoding order and never changes independently of schema
//! evolution. The ordinal of an alternative is its position in
//! [`ALTERNATIVES`].

/// The primitive kind of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Fixed-width unsigned 32-bit integer, big-endian.
    UInt32,
    /// Fixed-width unsigned 64-bit integer, big-endian.
    UInt64,
    /// Fixed-width unsigned 256-bit integer, 32 bytes big-endian.
    UInt256,
    /// Fixed-size byte block of the declared width, no length prefix.
    FixedBytes(usize),
    /// Variable-length byte block, varint length prefix.
    VarBytes,
    /// A nested alternative, encoded inline (no discriminant).
    Nested(&'static AlternativeSchema),
}

/// One named field within an alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// One schema in the closed variant set.
#[derive(Debug, PartialEq, Eq)]
pub struct AlternativeSchema {
    pub name: &'static str,
    pub fields: &'static [FieldSchema],
}

impl AlternativeSchema {
    /// Names of the fields in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }
}

/// Width of a recoverable secp256k1 signature (recovery id + r + s).
pub const RECOVERABLE_SIGNATURE_LEN: usize = 65;

/// The closed alternative list. Ordinals are positions in this slice.
pub const ALTERNATIVES: &[AlternativeSchema] = &[
    AlternativeSchema {
        name: "pow_signature_data",
        fields: &[
            FieldSchema {
                name: "nonce",
                kind: FieldKind::UInt256,
            },
            FieldSchema {
                name: "recoverable_signature",
                kind: FieldKind::FixedBytes(RECOVERABLE_SIGNATURE_LEN),
            },
        ],
    },
    AlternativeSchema {
        name: "difficulty_metadata",
        fields: &[
            FieldSchema {
                name: "difficulty_target",
                kind: FieldKind::UInt256,
            },
            FieldSchema {
                name: "last_block_time",
                kind: FieldKind::UInt64,
            },
            FieldSchema {
                name: "block_window_time",
                kind: FieldKind::UInt64,
            },
            FieldSchema {
                name: "averaging_window",
                kind: FieldKind::UInt32,
            },
        ],
    },
    AlternativeSchema {
        name: "transfer_args",
        fields: &[
            FieldSchema {
                name: "from",
                kind: FieldKind::VarBytes,
            },
            FieldSchema {
                name: "to",
                kind: FieldKind::VarBytes,
            },
            FieldSchema {
                name: "value",
                kind: FieldKind::UInt64,
            },
        ],
    },
    AlternativeSchema {
        name: "mint_args",
        fields: &[
            FieldSchema {
                name: "to",
                kind: FieldKind::VarBytes,
            },
            FieldSchema {
                name: "value",
                kind: FieldKind::UInt64,
            },
        ],
    },
    AlternativeSchema {
        name: "balance_of_args",
        fields: &[FieldSchema {
            name: "owner",
            kind: FieldKind::VarBytes,
        }],
    },
    AlternativeSchema {
        name: "balance_of_result",
        fields: &[FieldSchema {
            name: "balance",
            kind: FieldKind::UInt64,
        }],
    },
];
