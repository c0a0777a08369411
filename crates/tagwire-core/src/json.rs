//! JSON bridge: structural mapping between alternative values and JSON.
//!
//! Output is a direct mapping: every field becomes a JSON member keyed by
//! its declared name. Nested alternatives map to nested objects; the two-key
//! `{"type": ..., "bytes": ...}` form is reserved for top-level variant
//! selection on the decode path ([`from_tagged_json`]).
//!
//! Integer fields are JSON numbers (`u32`/`u64`) or decimal strings
//! (`u256`); byte fields are multibase text.

use serde_json::{Map, Value};

use crate::canonical;
use crate::error::CodecError;
use crate::multibase::{self, DEFAULT_BASE};
use crate::registry::TypeRegistry;
use crate::schema::{AlternativeSchema, FieldKind, FieldSchema};
use crate::value::{FieldValue, StructValue, U256};

/// Ceiling for tagged-value unpacking. Nesting one level past this fails
/// with [`CodecError::DepthExceeded`].
pub const MAX_RECURSION_DEPTH: u32 = 100;

/// Convert a value to a JSON object.
pub fn to_json(value: &StructValue) -> Value {
    let mut map = Map::with_capacity(value.schema.fields.len());
    for (field_schema, field_value) in value.schema.fields.iter().zip(&value.fields) {
        map.insert(field_schema.name.to_string(), field_to_json(field_value));
    }
    Value::Object(map)
}

fn field_to_json(value: &FieldValue) -> Value {
    match value {
        FieldValue::UInt32(n) => Value::from(*n),
        FieldValue::UInt64(n) => Value::from(*n),
        FieldValue::UInt256(n) => Value::String(n.to_dec_string()),
        FieldValue::FixedBytes(bytes) | FieldValue::VarBytes(bytes) => {
            Value::String(multibase::encode(bytes, DEFAULT_BASE))
        }
        FieldValue::Nested(nested) => to_json(nested),
    }
}

/// Parse a struct-shaped JSON object into a value of `schema`.
///
/// Strict: every declared field must be present and no extra members are
/// permitted.
pub fn from_json(json: &Value, schema: &'static AlternativeSchema) -> Result<StructValue, CodecError> {
    let object = json
        .as_object()
        .ok_or_else(|| CodecError::MalformedJson(format!("{} expects an object", schema.name)))?;

    let mut fields = Vec::with_capacity(schema.fields.len());
    for field_schema in schema.fields {
        let member = object.get(field_schema.name).ok_or_else(|| {
            CodecError::MalformedJson(format!(
                "{} is missing field '{}'",
                schema.name, field_schema.name
            ))
        })?;
        fields.push(field_from_json(member, field_schema)?);
    }

    if object.len() != schema.fields.len() {
        let unexpected: Vec<&str> = object
            .keys()
            .map(String::as_str)
            .filter(|key| !schema.field_names().any(|name| name == *key))
            .collect();
        return Err(CodecError::MalformedJson(format!(
            "{} has unexpected members [{}]",
            schema.name,
            unexpected.join(", ")
        )));
    }

    Ok(StructValue::new(schema, fields))
}

fn field_from_json(json: &Value, schema: &FieldSchema) -> Result<FieldValue, CodecError> {
    match schema.kind {
        FieldKind::UInt32 => {
            let n = integer_from_json(json, schema.name)?;
            let n = u32::try_from(n).map_err(|_| {
                CodecError::MalformedJson(format!(
                    "field '{}' value {} out of range for u32",
                    schema.name, n
                ))
            })?;
            Ok(FieldValue::UInt32(n))
        }
        FieldKind::UInt64 => Ok(FieldValue::UInt64(integer_from_json(json, schema.name)?)),
        FieldKind::UInt256 => match json {
            Value::String(s) => U256::from_dec_str(s)
                .map(FieldValue::UInt256)
                .ok_or_else(|| {
                    CodecError::MalformedJson(format!(
                        "field '{}' is not a valid decimal integer",
                        schema.name
                    ))
                }),
            Value::Number(n) => n
                .as_u64()
                .map(|n| FieldValue::UInt256(U256::from_u64(n)))
                .ok_or_else(|| {
                    CodecError::MalformedJson(format!(
                        "field '{}' must be a non-negative integer",
                        schema.name
                    ))
                }),
            _ => Err(CodecError::MalformedJson(format!(
                "field '{}' must be a decimal string or number",
                schema.name
            ))),
        },
        FieldKind::FixedBytes(width) => {
            let bytes = bytes_from_json(json, schema.name)?;
            if bytes.len() != width {
                return Err(CodecError::InvalidField(format!(
                    "field '{}' expects {} bytes, got {}",
                    schema.name,
                    width,
                    bytes.len()
                )));
            }
            Ok(FieldValue::FixedBytes(bytes))
        }
        FieldKind::VarBytes => Ok(FieldValue::VarBytes(bytes_from_json(json, schema.name)?)),
        FieldKind::Nested(nested) => Ok(FieldValue::Nested(from_json(json, nested)?)),
    }
}

fn integer_from_json(json: &Value, field: &str) -> Result<u64, CodecError> {
    match json {
        Value::Number(n) => n.as_u64().ok_or_else(|| {
            CodecError::MalformedJson(format!(
                "field '{}' must be a non-negative integer",
                field
            ))
        }),
        Value::String(s) => s.parse::<u64>().map_err(|_| {
            CodecError::MalformedJson(format!(
                "field '{}' is not a valid decimal integer",
                field
            ))
        }),
        _ => Err(CodecError::MalformedJson(format!(
            "field '{}' must be an integer",
            field
        ))),
    }
}

fn bytes_from_json(json: &Value, field: &str) -> Result<Vec<u8>, CodecError> {
    let text = json.as_str().ok_or_else(|| {
        CodecError::MalformedJson(format!("field '{}' must be multibase text", field))
    })?;
    multibase::decode(text)
}

/// Resolve a JSON type tag to an ordinal: an unsigned integer is taken as an
/// ordinal, a string as a declared name.
pub fn resolve_tag(tag: &Value, registry: &TypeRegistry) -> Result<usize, CodecError> {
    match tag {
        Value::Number(n) => match n.as_u64() {
            Some(ordinal) => {
                let ordinal = ordinal as usize;
                // surfaces UnknownVariantType for out-of-range ordinals
                registry.schema(ordinal)?;
                Ok(ordinal)
            }
            None if n.is_i64() => Err(CodecError::UnknownVariantType(format!("ordinal {}", n))),
            None => Err(CodecError::MalformedJson(
                "'type' must be an unsigned integer or string".to_string(),
            )),
        },
        Value::String(name) => registry.resolve_by_name(name),
        _ => Err(CodecError::MalformedJson(
            "'type' must be an unsigned integer or string".to_string(),
        )),
    }
}

/// Reconstruct a value from the tagged `{"type": T, "bytes": B}` form.
///
/// The only recursive entry point in the codec: recursion occurs through
/// tagged values carried inside `bytes`, and `depth` tracks how deep the
/// caller already is.
pub fn from_tagged_json(
    json: &Value,
    registry: &TypeRegistry,
    depth: u32,
) -> Result<StructValue, CodecError> {
    let depth = depth + 1;
    if depth > MAX_RECURSION_DEPTH {
        return Err(CodecError::DepthExceeded {
            depth,
            limit: MAX_RECURSION_DEPTH,
        });
    }

    let object = json.as_object().ok_or_else(|| {
        CodecError::MalformedJson("variant selector must be an object".to_string())
    })?;
    if object.len() != 2 {
        return Err(CodecError::MalformedJson(
            "variant selector must contain exactly 'type' and 'bytes'".to_string(),
        ));
    }
    let tag = object.get("type").ok_or_else(|| {
        CodecError::MalformedJson("variant selector must contain field 'type'".to_string())
    })?;
    let bytes_text = object
        .get("bytes")
        .ok_or_else(|| {
            CodecError::MalformedJson("variant selector must contain field 'bytes'".to_string())
        })?
        .as_str()
        .ok_or_else(|| CodecError::MalformedJson("'bytes' must be a string".to_string()))?;

    let ordinal = resolve_tag(tag, registry)?;
    let schema = registry.schema(ordinal)?;
    let blob = multibase::decode(bytes_text)?;
    canonical::decode_struct(&blob, schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> TypeRegistry {
        TypeRegistry::new()
    }

    fn mint_blob(to: &[u8], value: u64) -> String {
        let schema = registry().schema(3).unwrap();
        let value = StructValue::new(
            schema,
            vec![FieldValue::VarBytes(to.to_vec()), FieldValue::UInt64(value)],
        );
        multibase::encode(&canonical::encode_struct(&value).unwrap(), DEFAULT_BASE)
    }

    #[test]
    fn test_to_json_mint_args() {
        let registry = registry();
        let schema = registry.schema(3).unwrap();
        let value = StructValue::new(
            schema,
            vec![
                FieldValue::VarBytes(vec![0x01, 0x02, 0x03]),
                FieldValue::UInt64(1000),
            ],
        );
        assert_eq!(to_json(&value), json!({"to": "MAQID", "value": 1000}));
    }

    #[test]
    fn test_to_json_u256_as_decimal_string() {
        let registry = registry();
        let schema = registry.schema(0).unwrap();
        let value = StructValue::new(
            schema,
            vec![
                FieldValue::UInt256(U256::from_u64(42)),
                FieldValue::FixedBytes(vec![0u8; 65]),
            ],
        );
        let object = to_json(&value);
        assert_eq!(object["nonce"], json!("42"));
    }

    #[test]
    fn test_from_json_roundtrip() {
        let registry = registry();
        let schema = registry.schema(2).unwrap();
        let value = StructValue::new(
            schema,
            vec![
                FieldValue::VarBytes(vec![0xde, 0xad]),
                FieldValue::VarBytes(vec![0xbe, 0xef]),
                FieldValue::UInt64(123456789),
            ],
        );
        let object = to_json(&value);
        assert_eq!(from_json(&object, schema).unwrap(), value);
    }

    #[test]
    fn test_from_json_accepts_decimal_strings() {
        let registry = registry();
        let schema = registry.schema(5).unwrap();
        let value = from_json(&json!({"balance": "42"}), schema).unwrap();
        assert_eq!(value.fields, vec![FieldValue::UInt64(42)]);
    }

    #[test]
    fn test_from_json_missing_field() {
        let registry = registry();
        let schema = registry.schema(3).unwrap();
        let err = from_json(&json!({"to": "MAQID"}), schema).unwrap_err();
        assert!(matches!(err, CodecError::MalformedJson(_)));
    }

    #[test]
    fn test_from_json_extra_member() {
        let registry = registry();
        let schema = registry.schema(3).unwrap();
        let err = from_json(
            &json!({"to": "MAQID", "value": 1, "extra": true}),
            schema,
        )
        .unwrap_err();
        assert!(matches!(err, CodecError::MalformedJson(_)));
    }

    #[test]
    fn test_from_json_fixed_width_enforced() {
        let registry = registry();
        let schema = registry.schema(0).unwrap();
        let err = from_json(
            &json!({"nonce": "1", "recoverable_signature": "MAQID"}),
            schema,
        )
        .unwrap_err();
        assert!(matches!(err, CodecError::InvalidField(_)));
    }

    #[test]
    fn test_from_tagged_json_by_name_and_ordinal() {
        let registry = registry();
        let blob = mint_blob(&[0x01, 0x02, 0x03], 1000);

        let by_name =
            from_tagged_json(&json!({"type": "mint_args", "bytes": blob.clone()}), &registry, 0).unwrap();
        let by_ordinal =
            from_tagged_json(&json!({"type": 3, "bytes": blob.clone()}), &registry, 0).unwrap();
        assert_eq!(by_name, by_ordinal);
        assert_eq!(
            to_json(&by_name),
            json!({"to": "MAQID", "value": 1000})
        );
    }

    #[test]
    fn test_from_tagged_json_shape_errors() {
        let registry = registry();
        let blob = mint_blob(&[0x01], 1);

        // not an object
        assert!(matches!(
            from_tagged_json(&json!("nope"), &registry, 0),
            Err(CodecError::MalformedJson(_))
        ));
        // extra third key
        assert!(matches!(
            from_tagged_json(
                &json!({"type": "mint_args", "bytes": blob.clone(), "extra": 1}),
                &registry,
                0
            ),
            Err(CodecError::MalformedJson(_))
        ));
        // two keys but wrong names
        assert!(matches!(
            from_tagged_json(&json!({"type": "mint_args", "value": blob.clone()}), &registry, 0),
            Err(CodecError::MalformedJson(_))
        ));
        // boolean tag
        assert!(matches!(
            from_tagged_json(&json!({"type": true, "bytes": blob.clone()}), &registry, 0),
            Err(CodecError::MalformedJson(_))
        ));
    }

    #[test]
    fn test_from_tagged_json_unknown_type() {
        let registry = registry();
        let blob = mint_blob(&[0x01], 1);

        assert!(matches!(
            from_tagged_json(
                &json!({"type": "not_a_real_type", "bytes": blob.clone()}),
                &registry,
                0
            ),
            Err(CodecError::UnknownVariantType(_))
        ));
        assert!(matches!(
            from_tagged_json(&json!({"type": 99, "bytes": blob.clone()}), &registry, 0),
            Err(CodecError::UnknownVariantType(_))
        ));
        assert!(matches!(
            from_tagged_json(&json!({"type": -1, "bytes": blob.clone()}), &registry, 0),
            Err(CodecError::UnknownVariantType(_))
        ));
    }

    #[test]
    fn test_depth_guard_boundary() {
        let registry = registry();
        let blob = mint_blob(&[0x01], 1);
        let tagged = json!({"type": "mint_args", "bytes": blob.clone()});

        // at the ceiling it succeeds
        assert!(from_tagged_json(&tagged, &registry, MAX_RECURSION_DEPTH - 1).is_ok());
        // one level deeper fails
        assert!(matches!(
            from_tagged_json(&tagged, &registry, MAX_RECURSION_DEPTH),
            Err(CodecError::DepthExceeded { .. })
        ));
    }
}
