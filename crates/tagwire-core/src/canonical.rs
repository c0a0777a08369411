//! Canonical binary encoding for alternative values.
//!
//! The encoding is deterministic: the same logical value always yields
//! identical bytes. Fields are serialized in declaration order; integers are
//! big-endian at their declared width; fixed-size blocks are emitted at their
//! declared width with no padding markers; variable-length blocks carry a
//! varint length prefix; nested alternatives are encoded inline without a
//! discriminant.
//!
//! A tagged wire value prefixes the encoded fields with the alternative's
//! ordinal as a varint. Output emission always strips that discriminant; see
//! [`strip_discriminant`].

use crate::error::CodecError;
use crate::registry::TypeRegistry;
use crate::schema::{AlternativeSchema, FieldKind, FieldSchema};
use crate::value::{FieldValue, StructValue, U256};
use crate::varint;

/// Encode one alternative's fields in canonical order.
pub fn encode_struct(value: &StructValue) -> Result<Vec<u8>, CodecError> {
    let mut buf = Vec::new();
    encode_fields(&mut buf, value)?;
    Ok(buf)
}

/// Encode a value with its varint discriminant prefix.
pub fn encode_tagged(value: &StructValue, registry: &TypeRegistry) -> Result<Vec<u8>, CodecError> {
    let ordinal = registry.resolve_by_name(value.schema.name)?;
    let mut buf = Vec::new();
    varint::encode_into(&mut buf, ordinal as u64);
    encode_fields(&mut buf, value)?;
    Ok(buf)
}

/// Strip the leading varint discriminant from a tagged wire value.
///
/// An empty buffer or a prefix with no terminating byte is a framing error.
pub fn strip_discriminant(bytes: &[u8]) -> Result<&[u8], CodecError> {
    if bytes.is_empty() {
        return Err(CodecError::TruncatedInput {
            needed: 1,
            remaining: 0,
        });
    }
    let n = varint::scan_length(bytes);
    if n == bytes.len() && bytes[n - 1] & 0x80 != 0 {
        return Err(CodecError::InvalidField(
            "unterminated discriminant prefix".to_string(),
        ));
    }
    Ok(&bytes[n..])
}

fn encode_fields(buf: &mut Vec<u8>, value: &StructValue) -> Result<(), CodecError> {
    if value.fields.len() != value.schema.fields.len() {
        return Err(CodecError::InvalidField(format!(
            "{} expects {} fields, got {}",
            value.schema.name,
            value.schema.fields.len(),
            value.fields.len()
        )));
    }
    for (field_schema, field_value) in value.schema.fields.iter().zip(&value.fields) {
        encode_field(buf, field_schema, field_value)?;
    }
    Ok(())
}

fn encode_field(
    buf: &mut Vec<u8>,
    schema: &FieldSchema,
    value: &FieldValue,
) -> Result<(), CodecError> {
    match (schema.kind, value) {
        (FieldKind::UInt32, FieldValue::UInt32(n)) => buf.extend_from_slice(&n.to_be_bytes()),
        (FieldKind::UInt64, FieldValue::UInt64(n)) => buf.extend_from_slice(&n.to_be_bytes()),
        (FieldKind::UInt256, FieldValue::UInt256(n)) => buf.extend_from_slice(n.as_bytes()),
        (FieldKind::FixedBytes(width), FieldValue::FixedBytes(bytes)) => {
            if bytes.len() != width {
                return Err(CodecError::InvalidField(format!(
                    "field '{}' expects {} bytes, got {}",
                    schema.name,
                    width,
                    bytes.len()
                )));
            }
            buf.extend_from_slice(bytes);
        }
        (FieldKind::VarBytes, FieldValue::VarBytes(bytes)) => {
            varint::encode_into(buf, bytes.len() as u64);
            buf.extend_from_slice(bytes);
        }
        (FieldKind::Nested(nested_schema), FieldValue::Nested(nested)) => {
            if nested.schema != nested_schema {
                return Err(CodecError::InvalidField(format!(
                    "field '{}' expects nested {}, got {}",
                    schema.name, nested_schema.name, nested.schema.name
                )));
            }
            encode_fields(buf, nested)?;
        }
        _ => {
            return Err(CodecError::InvalidField(format!(
                "field '{}' value does not match its declared kind",
                schema.name
            )));
        }
    }
    Ok(())
}

/// Decode an alternative's fields from `bytes`, consuming exactly the bytes
/// the schema requires. Trailing bytes are rejected.
pub fn decode_struct(
    bytes: &[u8],
    schema: &'static AlternativeSchema,
) -> Result<StructValue, CodecError> {
    let mut cursor = Cursor::new(bytes);
    let value = decode_fields(&mut cursor, schema)?;
    if cursor.remaining() != 0 {
        return Err(CodecError::InvalidField(format!(
            "{} trailing bytes after {}",
            cursor.remaining(),
            schema.name
        )));
    }
    Ok(value)
}

fn decode_fields(
    cursor: &mut Cursor<'_>,
    schema: &'static AlternativeSchema,
) -> Result<StructValue, CodecError> {
    let mut fields = Vec::with_capacity(schema.fields.len());
    for field_schema in schema.fields {
        fields.push(decode_field(cursor, field_schema)?);
    }
    Ok(StructValue::new(schema, fields))
}

fn decode_field(
    cursor: &mut Cursor<'_>,
    schema: &FieldSchema,
) -> Result<FieldValue, CodecError> {
    match schema.kind {
        FieldKind::UInt32 => {
            let bytes: [u8; 4] = cursor.take_array()?;
            Ok(FieldValue::UInt32(u32::from_be_bytes(bytes)))
        }
        FieldKind::UInt64 => {
            let bytes: [u8; 8] = cursor.take_array()?;
            Ok(FieldValue::UInt64(u64::from_be_bytes(bytes)))
        }
        FieldKind::UInt256 => {
            let bytes: [u8; 32] = cursor.take_array()?;
            Ok(FieldValue::UInt256(U256::from_be_bytes(bytes)))
        }
        FieldKind::FixedBytes(width) => {
            let bytes = cursor.take(width)?;
            Ok(FieldValue::FixedBytes(bytes.to_vec()))
        }
        FieldKind::VarBytes => {
            let len = cursor.take_varint()?;
            let len = usize::try_from(len).map_err(|_| CodecError::InvalidField(
                format!("field '{}' length {} does not fit in memory", schema.name, len),
            ))?;
            let bytes = cursor.take(len)?;
            Ok(FieldValue::VarBytes(bytes.to_vec()))
        }
        FieldKind::Nested(nested) => Ok(FieldValue::Nested(decode_fields(cursor, nested)?)),
    }
}

/// Byte cursor over an input buffer.
struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        if self.remaining() < n {
            return Err(CodecError::TruncatedInput {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let slice = self.take(N)?;
        let mut array = [0u8; N];
        array.copy_from_slice(slice);
        Ok(array)
    }

    fn take_varint(&mut self) -> Result<u64, CodecError> {
        let (value, consumed) = varint::decode(&self.buf[self.pos..])?;
        self.pos += consumed;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ALTERNATIVES;

    fn schema_named(name: &str) -> &'static AlternativeSchema {
        ALTERNATIVES.iter().find(|a| a.name == name).unwrap()
    }

    fn mint(to: &[u8], value: u64) -> StructValue {
        StructValue::new(
            schema_named("mint_args"),
            vec![
                FieldValue::VarBytes(to.to_vec()),
                FieldValue::UInt64(value),
            ],
        )
    }

    #[test]
    fn test_encode_mint_args_canonical() {
        let bytes = encode_struct(&mint(&[0x01, 0x02, 0x03], 1000)).unwrap();
        assert_eq!(
            bytes,
            vec![0x03, 0x01, 0x02, 0x03, 0, 0, 0, 0, 0, 0, 0x03, 0xe8]
        );
    }

    #[test]
    fn test_encode_deterministic() {
        let value = mint(&[0xaa; 16], u64::MAX);
        assert_eq!(encode_struct(&value).unwrap(), encode_struct(&value).unwrap());
    }

    #[test]
    fn test_tagged_prefixes_ordinal() {
        let registry = TypeRegistry::new();
        let value = mint(&[0x01], 7);
        let tagged = encode_tagged(&value, &registry).unwrap();
        let plain = encode_struct(&value).unwrap();
        assert_eq!(tagged[0], 3); // mint_args ordinal
        assert_eq!(&tagged[1..], &plain[..]);
        assert_eq!(strip_discriminant(&tagged).unwrap(), &plain[..]);
    }

    #[test]
    fn test_strip_discriminant_framing_errors() {
        assert!(matches!(
            strip_discriminant(&[]),
            Err(CodecError::TruncatedInput { .. })
        ));
        assert!(matches!(
            strip_discriminant(&[0x80, 0x80]),
            Err(CodecError::InvalidField(_))
        ));
    }

    #[test]
    fn test_decode_roundtrip_every_default() {
        for alt in ALTERNATIVES {
            let value = StructValue::default_for(alt);
            let bytes = encode_struct(&value).unwrap();
            let decoded = decode_struct(&bytes, alt).unwrap();
            assert_eq!(decoded, value, "{}", alt.name);
        }
    }

    #[test]
    fn test_decode_truncated() {
        let bytes = encode_struct(&mint(&[0x01, 0x02, 0x03], 1000)).unwrap();
        let err = decode_struct(&bytes[..bytes.len() - 1], schema_named("mint_args")).unwrap_err();
        assert!(matches!(err, CodecError::TruncatedInput { .. }));
    }

    #[test]
    fn test_decode_rejects_trailing_bytes() {
        let mut bytes = encode_struct(&mint(&[0x01], 5)).unwrap();
        bytes.push(0xff);
        let err = decode_struct(&bytes, schema_named("mint_args")).unwrap_err();
        assert!(matches!(err, CodecError::InvalidField(_)));
    }

    #[test]
    fn test_decode_varbytes_length_overruns_buffer() {
        // claims 200 bytes of payload, provides 1
        let err = decode_struct(&[200, 0xaa], schema_named("balance_of_args")).unwrap_err();
        assert!(matches!(err, CodecError::TruncatedInput { .. }));
    }

    #[test]
    fn test_encode_fixed_width_mismatch() {
        let value = StructValue::new(
            schema_named("pow_signature_data"),
            vec![
                FieldValue::UInt256(U256::from_u64(1)),
                FieldValue::FixedBytes(vec![0u8; 64]), // should be 65
            ],
        );
        let err = encode_struct(&value).unwrap_err();
        assert!(matches!(err, CodecError::InvalidField(_)));
    }

    #[test]
    fn test_encode_kind_mismatch() {
        let value = StructValue::new(
            schema_named("balance_of_result"),
            vec![FieldValue::VarBytes(vec![1, 2, 3])],
        );
        let err = encode_struct(&value).unwrap_err();
        assert!(matches!(err, CodecError::InvalidField(_)));
    }

    #[test]
    fn test_nested_alternative_inline() {
        // Ad-hoc schema embedding balance_of_result inside another struct.
        const INNER: &AlternativeSchema = &ALTERNATIVES[5];
        static WRAPPER: AlternativeSchema = AlternativeSchema {
            name: "wrapper",
            fields: &[
                FieldSchema {
                    name: "inner",
                    kind: FieldKind::Nested(INNER),
                },
                FieldSchema {
                    name: "tail",
                    kind: FieldKind::UInt32,
                },
            ],
        };

        let value = StructValue::new(
            &WRAPPER,
            vec![
                FieldValue::Nested(StructValue::new(INNER, vec![FieldValue::UInt64(9)])),
                FieldValue::UInt32(7),
            ],
        );
        let bytes = encode_struct(&value).unwrap();
        // inner u64 inline (no discriminant), then the u32
        assert_eq!(bytes, vec![0, 0, 0, 0, 0, 0, 0, 9, 0, 0, 0, 7]);
        let decoded = decode_struct(&bytes, &WRAPPER).unwrap();
        assert_eq!(decoded, value);
    }
}
