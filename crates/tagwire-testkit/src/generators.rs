//! Proptest generators for property-based testing.

use proptest::prelude::*;

use tagwire_core::{
    AlternativeSchema, Base, FieldKind, FieldValue, StructValue, U256, ALTERNATIVES,
};

/// Generate a random U256.
pub fn u256() -> impl Strategy<Value = U256> {
    any::<[u8; 32]>().prop_map(U256::from_be_bytes)
}

/// Generate a value for one field kind.
pub fn field_value(kind: FieldKind) -> BoxedStrategy<FieldValue> {
    match kind {
        FieldKind::UInt32 => any::<u32>().prop_map(FieldValue::UInt32).boxed(),
        FieldKind::UInt64 => any::<u64>().prop_map(FieldValue::UInt64).boxed(),
        FieldKind::UInt256 => u256().prop_map(FieldValue::UInt256).boxed(),
        FieldKind::FixedBytes(width) => prop::collection::vec(any::<u8>(), width)
            .prop_map(FieldValue::FixedBytes)
            .boxed(),
        FieldKind::VarBytes => prop::collection::vec(any::<u8>(), 0..=64)
            .prop_map(FieldValue::VarBytes)
            .boxed(),
        FieldKind::Nested(nested) => struct_value(nested).prop_map(FieldValue::Nested).boxed(),
    }
}

/// Generate a valid value of the given alternative.
pub fn struct_value(schema: &'static AlternativeSchema) -> BoxedStrategy<StructValue> {
    let fields: Vec<BoxedStrategy<FieldValue>> = schema
        .fields
        .iter()
        .map(|f| field_value(f.kind))
        .collect();
    fields
        .prop_map(move |fields| StructValue::new(schema, fields))
        .boxed()
}

/// Generate a valid value of any alternative in the closed set.
pub fn any_alternative() -> impl Strategy<Value = StructValue> {
    (0..ALTERNATIVES.len()).prop_flat_map(|ordinal| struct_value(&ALTERNATIVES[ordinal]))
}

/// Generate a supported multibase alphabet.
pub fn base() -> impl Strategy<Value = Base> {
    prop_oneof![
        Just(Base::HexLower),
        Just(Base::HexUpper),
        Just(Base::Base64),
        Just(Base::Base64Pad),
        Just(Base::Base64Url),
        Just(Base::Base64UrlPad),
    ]
}

/// Generate arbitrary payload bytes up to `max_len`.
pub fn payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}
