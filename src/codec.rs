//! Layout driven encoding and decoding of instruction data.

use std::collections::BTreeMap;

use borsh::{BorshDeserialize, BorshSerialize};

use crate::discriminant::Discriminant;
use crate::layout::{Field, FieldKind, Layout};
use crate::util::bytes_ext::{ReadExt, WriteExt};
use crate::{VoteCodecError, VoteCodecResult};

/// Field values keyed by layout field name.
pub type Fields = BTreeMap<&'static str, FieldValue>;

/// A value for one layout field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldValue {
    /// Value of a [`FieldKind::U8`]
    U8(u8),
    /// Value of a [`FieldKind::I64`]
    I64(i64),
    /// Value of a [`FieldKind::Bytes`]; must match the declared width exactly
    Bytes(Vec<u8>),
    /// Value of a [`FieldKind::Struct`]
    Struct(Fields),
}
impl FieldValue {
    /// The `u8` held, if any
    #[must_use]
    pub fn as_u8(&self) -> Option<u8> {
        match self {
            FieldValue::U8(value) => Some(*value),
            _ => None,
        }
    }

    /// The `i64` held, if any
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::I64(value) => Some(*value),
            _ => None,
        }
    }

    /// The bytes held, if any
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            FieldValue::Bytes(value) => Some(value.as_slice()),
            _ => None,
        }
    }

    /// The nested fields held, if any
    #[must_use]
    pub fn as_struct(&self) -> Option<&Fields> {
        match self {
            FieldValue::Struct(value) => Some(value),
            _ => None,
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::U8(_) => "u8",
            FieldValue::I64(_) => "i64",
            FieldValue::Bytes(_) => "bytes",
            FieldValue::Struct(_) => "struct",
        }
    }
}

/// Serializes `fields` according to `layout`: the discriminant first, then every field in declared
/// order.
///
/// Numeric fields are little-endian. Byte fields are copied verbatim with no length prefix and
/// must be exactly as long as declared. Fields present in `fields` but not in the layout are
/// ignored.
pub fn encode(layout: &Layout, fields: &Fields) -> VoteCodecResult<Vec<u8>> {
    let mut data = Vec::with_capacity(layout.span());
    layout
        .discriminant
        .serialize(&mut data)
        .map_err(|error| VoteCodecError::encoding("discriminant", error.to_string()))?;
    write_fields(&mut data, layout.fields, fields)?;
    debug_assert_eq!(data.len(), layout.span());
    Ok(data)
}

fn write_fields(data: &mut Vec<u8>, layout: &[Field], fields: &Fields) -> VoteCodecResult<()> {
    for field in layout {
        let value = fields
            .get(field.name)
            .ok_or_else(|| VoteCodecError::encoding(field.name, "missing"))?;
        write_field(data, field, value)?;
    }
    Ok(())
}

fn write_field(data: &mut Vec<u8>, field: &Field, value: &FieldValue) -> VoteCodecResult<()> {
    let io_error = |error: std::io::Error| VoteCodecError::encoding(field.name, error.to_string());
    match (field.kind, value) {
        (FieldKind::U8, FieldValue::U8(value)) => data.write_u8(*value).map_err(io_error),
        (FieldKind::I64, FieldValue::I64(value)) => data.write_i64_le(*value).map_err(io_error),
        (FieldKind::Bytes(len), FieldValue::Bytes(bytes)) => {
            if bytes.len() == len {
                data.extend_from_slice(bytes);
                Ok(())
            } else {
                Err(VoteCodecError::encoding(
                    field.name,
                    format!("expected {} bytes, got {}", len, bytes.len()),
                ))
            }
        }
        (FieldKind::Struct(nested), FieldValue::Struct(fields)) => {
            write_fields(data, nested, fields)
        }
        (kind, value) => Err(VoteCodecError::encoding(
            field.name,
            format!("cannot write {} value as {:?}", value.kind_name(), kind),
        )),
    }
}

/// Reads `bytes` back into fields according to `layout`.
///
/// Fails if `bytes` is shorter than [`Layout::span`] or starts with a different discriminant.
/// Bytes past the span are ignored.
pub fn decode(layout: &Layout, bytes: &[u8]) -> VoteCodecResult<Fields> {
    if bytes.len() < layout.span() {
        return Err(VoteCodecError::decoding(
            layout.name,
            format!("need {} bytes, got {}", layout.span(), bytes.len()),
        ));
    }
    let mut buf = bytes;
    let discriminant = Discriminant::deserialize(&mut buf)
        .map_err(|error| VoteCodecError::decoding(layout.name, error.to_string()))?;
    if discriminant != layout.discriminant {
        return Err(VoteCodecError::decoding(
            layout.name,
            format!(
                "discriminant `{}` does not match expected `{}`",
                discriminant, layout.discriminant
            ),
        ));
    }
    read_fields(&mut buf, layout.fields)
}

fn read_fields(buf: &mut &[u8], layout: &[Field]) -> VoteCodecResult<Fields> {
    let mut fields = Fields::new();
    for field in layout {
        let value = read_field(buf, field)?;
        fields.insert(field.name, value);
    }
    Ok(fields)
}

fn read_field(buf: &mut &[u8], field: &Field) -> VoteCodecResult<FieldValue> {
    let io_error = |error: std::io::Error| VoteCodecError::decoding(field.name, error.to_string());
    Ok(match field.kind {
        FieldKind::U8 => FieldValue::U8(buf.read_u8().map_err(io_error)?),
        FieldKind::I64 => FieldValue::I64(buf.read_i64_le().map_err(io_error)?),
        FieldKind::Bytes(len) => FieldValue::Bytes(buf.read_bytes(len).map_err(io_error)?),
        FieldKind::Struct(nested) => FieldValue::Struct(read_fields(buf, nested)?),
    })
}

/// Looks up `name` in decoded `fields`.
pub(crate) fn field<'a>(
    fields: &'a Fields,
    what: &'static str,
    name: &'static str,
) -> VoteCodecResult<&'a FieldValue> {
    fields
        .get(name)
        .ok_or_else(|| VoteCodecError::decoding(what, format!("missing field `{}`", name)))
}
