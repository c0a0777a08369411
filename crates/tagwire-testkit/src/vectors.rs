//! Golden vectors for the canonical encoding.
//!
//! Each vector records one known value in all of its representations. The
//! accompanying tests in the codec crates pin the exact bytes so the wire
//! format cannot drift silently.

use serde::{Deserialize, Serialize};
use tagwire_core::{canonical, json, FieldValue, StructValue, TypeRegistry, U256};

/// A single golden vector.
#[derive(Debug, Serialize, Deserialize)]
pub struct GoldenVector {
    pub name: String,
    pub description: String,

    // Inputs
    pub type_name: String,
    pub ordinal: usize,

    // Derived representations
    pub json: String,        // struct-shaped JSON document
    pub encoded_hex: String, // canonical fields, discriminant stripped
    pub tagged_hex: String,  // varint discriminant + canonical fields
}

fn generate_vector(
    registry: &TypeRegistry,
    name: &str,
    description: &str,
    type_name: &str,
    fields: Vec<FieldValue>,
) -> GoldenVector {
    let ordinal = registry
        .resolve_by_name(type_name)
        .unwrap_or_else(|_| panic!("unknown vector type {}", type_name));
    let schema = registry.schema(ordinal).unwrap();
    let value = StructValue::new(schema, fields);

    let encoded = canonical::encode_struct(&value).unwrap();
    let tagged = canonical::encode_tagged(&value, registry).unwrap();

    GoldenVector {
        name: name.to_string(),
        description: description.to_string(),
        type_name: type_name.to_string(),
        ordinal,
        json: json::to_json(&value).to_string(),
        encoded_hex: hex::encode(&encoded),
        tagged_hex: hex::encode(&tagged),
    }
}

/// Generate all golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    let registry = TypeRegistry::new();
    vec![
        generate_vector(
            &registry,
            "mint_small",
            "Mint to a 3-byte account",
            "mint_args",
            vec![
                FieldValue::VarBytes(vec![0x01, 0x02, 0x03]),
                FieldValue::UInt64(1000),
            ],
        ),
        generate_vector(
            &registry,
            "transfer",
            "Transfer between two short accounts",
            "transfer_args",
            vec![
                FieldValue::VarBytes(vec![0xde, 0xad, 0xbe, 0xef]),
                FieldValue::VarBytes(vec![0x01, 0x02, 0x03]),
                FieldValue::UInt64(1_000_000),
            ],
        ),
        generate_vector(
            &registry,
            "balance_query",
            "Balance query for a 1-byte owner",
            "balance_of_args",
            vec![FieldValue::VarBytes(vec![0xaa])],
        ),
        generate_vector(
            &registry,
            "balance_result",
            "Balance result",
            "balance_of_result",
            vec![FieldValue::UInt64(42)],
        ),
        generate_vector(
            &registry,
            "empty_accounts",
            "Transfer with zero-length accounts",
            "transfer_args",
            vec![
                FieldValue::VarBytes(Vec::new()),
                FieldValue::VarBytes(Vec::new()),
                FieldValue::UInt64(0),
            ],
        ),
        generate_vector(
            &registry,
            "pow_signature",
            "Proof-of-work signature data with a small nonce",
            "pow_signature_data",
            vec![
                FieldValue::UInt256(U256::from_u64(1)),
                FieldValue::FixedBytes(vec![0x11; 65]),
            ],
        ),
        generate_vector(
            &registry,
            "difficulty",
            "Difficulty metadata with a 2^32 target",
            "difficulty_metadata",
            vec![
                FieldValue::UInt256(
                    U256::from_dec_str("4294967296").unwrap(),
                ),
                FieldValue::UInt64(10_000),
                FieldValue::UInt64(600),
                FieldValue::UInt32(86),
            ],
        ),
        generate_vector(
            &registry,
            "max_integers",
            "All-ones integers to pin widths",
            "difficulty_metadata",
            vec![
                FieldValue::UInt256(U256::from_be_bytes([0xff; 32])),
                FieldValue::UInt64(u64::MAX),
                FieldValue::UInt64(u64::MAX),
                FieldValue::UInt32(u32::MAX),
            ],
        ),
        generate_vector(
            &registry,
            "long_account",
            "Account long enough for a 2-byte varint length prefix",
            "balance_of_args",
            vec![FieldValue::VarBytes(vec![0x5a; 200])],
        ),
    ]
}
