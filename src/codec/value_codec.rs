use crate::codec::{CodecError, Value, scalar_codec};
use crate::constants::NULL_OBJECT_ID;
use crate::schema::{ConnectionId, ObjectHandle, TypeDescriptor, ValueType};
use crate::wire;
use bytes::Buf;
use prost::Message;
use prost::encoding::{decode_varint, encode_varint};

/// Encode a value against a type descriptor into its wire payload.
///
/// Pure function of `(value, descriptor)`; recursion depth is bounded by the
/// descriptor's nesting, which the service manifest bounds.
pub fn encode_value(value: &Value, descriptor: &TypeDescriptor) -> Result<Vec<u8>, CodecError> {
    let mut buf = Vec::new();
    encode_into(value, descriptor, &mut buf)?;
    Ok(buf)
}

/// Decode a wire payload against a type descriptor.
///
/// `connection` is bound into any remote object handle the payload contains;
/// no round trip validates that decoded object ids are live. The payload must
/// hold exactly one value: leftovers fail with `TrailingBytes`.
pub fn decode_value(
    bytes: &[u8],
    descriptor: &TypeDescriptor,
    connection: ConnectionId,
) -> Result<Value, CodecError> {
    let mut buf = bytes;
    let value = decode_from(&mut buf, descriptor, connection)?;
    if buf.has_remaining() {
        return Err(CodecError::TrailingBytes {
            remaining: buf.remaining(),
        });
    }
    Ok(value)
}

fn encode_into(
    value: &Value,
    descriptor: &TypeDescriptor,
    buf: &mut Vec<u8>,
) -> Result<(), CodecError> {
    match descriptor {
        TypeDescriptor::Value(value_type) => scalar_codec::encode_scalar(value, *value_type, buf),
        TypeDescriptor::Enum(enumeration) => match value {
            Value::Enum(member) => {
                let code =
                    enumeration
                        .code_for(member)
                        .ok_or_else(|| CodecError::UnknownEnumMember {
                            enumeration: enumeration.name().to_string(),
                            member: member.clone(),
                        })?;
                scalar_codec::encode_scalar(&Value::Int(code.into()), ValueType::Int32, buf)
            }
            other => Err(mismatch(descriptor, other)),
        },
        TypeDescriptor::RemoteClass(_) => match value {
            Value::Null => {
                encode_varint(NULL_OBJECT_ID, buf);
                Ok(())
            }
            Value::Object(handle) => {
                encode_varint(handle.object_id, buf);
                Ok(())
            }
            other => Err(mismatch(descriptor, other)),
        },
        TypeDescriptor::Message(schema) => match value {
            Value::Message { schema_id, bytes } if *schema_id == schema.schema_id => {
                buf.extend_from_slice(bytes);
                Ok(())
            }
            Value::Message { schema_id, .. } => Err(CodecError::SchemaMismatch {
                expected: schema.schema_id,
                actual: *schema_id,
            }),
            other => Err(mismatch(descriptor, other)),
        },
        TypeDescriptor::List(element) => match value {
            Value::List(items) => {
                let envelope = wire::List {
                    items: encode_items(items, element)?,
                };
                buf.extend_from_slice(&envelope.encode_to_vec());
                Ok(())
            }
            other => Err(mismatch(descriptor, other)),
        },
        // Input iteration order is preserved on the wire; no canonical sort.
        TypeDescriptor::Set(element) => match value {
            Value::Set(items) => {
                let envelope = wire::Set {
                    items: encode_items(items, element)?,
                };
                buf.extend_from_slice(&envelope.encode_to_vec());
                Ok(())
            }
            other => Err(mismatch(descriptor, other)),
        },
        TypeDescriptor::Dictionary(key_type, value_type) => match value {
            Value::Dictionary(entries) => {
                let entries = entries
                    .iter()
                    .map(|(key, value)| {
                        Ok(wire::DictionaryEntry {
                            key: encode_value(key, key_type)?,
                            value: encode_value(value, value_type)?,
                        })
                    })
                    .collect::<Result<Vec<_>, CodecError>>()?;
                let envelope = wire::Dictionary { entries };
                buf.extend_from_slice(&envelope.encode_to_vec());
                Ok(())
            }
            other => Err(mismatch(descriptor, other)),
        },
        TypeDescriptor::Tuple(element_types) => match value {
            Value::Tuple(items) => {
                if items.len() != element_types.len() {
                    return Err(CodecError::Arity {
                        expected: element_types.len(),
                        actual: items.len(),
                    });
                }
                let items = items
                    .iter()
                    .zip(element_types)
                    .map(|(item, element_type)| encode_value(item, element_type))
                    .collect::<Result<Vec<_>, CodecError>>()?;
                let envelope = wire::Tuple { items };
                buf.extend_from_slice(&envelope.encode_to_vec());
                Ok(())
            }
            other => Err(mismatch(descriptor, other)),
        },
    }
}

fn decode_from(
    buf: &mut &[u8],
    descriptor: &TypeDescriptor,
    connection: ConnectionId,
) -> Result<Value, CodecError> {
    match descriptor {
        TypeDescriptor::Value(value_type) => scalar_codec::decode_scalar(buf, *value_type),
        TypeDescriptor::Enum(enumeration) => {
            let code = match scalar_codec::decode_scalar(buf, ValueType::Int32)? {
                Value::Int(code) => code as i32,
                // decode_scalar only produces Int for Int32
                _ => unreachable!("int32 scalar decoded to a non-integer value"),
            };
            let member =
                enumeration
                    .member_for(code)
                    .ok_or_else(|| CodecError::UnknownEnumCode {
                        enumeration: enumeration.name().to_string(),
                        code,
                    })?;
            Ok(Value::Enum(member.to_string()))
        }
        TypeDescriptor::RemoteClass(_) => {
            let object_id = decode_varint(buf).map_err(CodecError::Malformed)?;
            if object_id == NULL_OBJECT_ID {
                Ok(Value::Null)
            } else {
                Ok(Value::Object(ObjectHandle::new(connection, object_id)))
            }
        }
        TypeDescriptor::Message(schema) => {
            // Opaque passthrough: the message occupies the rest of the payload.
            let bytes = buf.to_vec();
            buf.advance(bytes.len());
            Ok(Value::Message {
                schema_id: schema.schema_id,
                bytes,
            })
        }
        TypeDescriptor::List(element) => {
            let envelope = take_envelope::<wire::List>(buf)?;
            let items = envelope
                .items
                .iter()
                .map(|item| decode_value(item, element, connection))
                .collect::<Result<Vec<_>, CodecError>>()?;
            Ok(Value::List(items))
        }
        TypeDescriptor::Set(element) => {
            let envelope = take_envelope::<wire::Set>(buf)?;
            let mut items: Vec<Value> = Vec::with_capacity(envelope.items.len());
            for item in &envelope.items {
                let decoded = decode_value(item, element, connection)?;
                // Duplicate elements collapse.
                if !items.contains(&decoded) {
                    items.push(decoded);
                }
            }
            Ok(Value::Set(items))
        }
        TypeDescriptor::Dictionary(key_type, value_type) => {
            let envelope = take_envelope::<wire::Dictionary>(buf)?;
            let mut entries: Vec<(Value, Value)> = Vec::with_capacity(envelope.entries.len());
            for entry in &envelope.entries {
                let key = decode_value(&entry.key, key_type, connection)?;
                let value = decode_value(&entry.value, value_type, connection)?;
                // The server is trusted not to send duplicates, but if it
                // does, the last entry wins.
                match entries.iter_mut().find(|(existing, _)| *existing == key) {
                    Some(existing) => existing.1 = value,
                    None => entries.push((key, value)),
                }
            }
            Ok(Value::Dictionary(entries))
        }
        TypeDescriptor::Tuple(element_types) => {
            let envelope = take_envelope::<wire::Tuple>(buf)?;
            if envelope.items.len() != element_types.len() {
                return Err(CodecError::Arity {
                    expected: element_types.len(),
                    actual: envelope.items.len(),
                });
            }
            let items = envelope
                .items
                .iter()
                .zip(element_types)
                .map(|(item, element_type)| decode_value(item, element_type, connection))
                .collect::<Result<Vec<_>, CodecError>>()?;
            Ok(Value::Tuple(items))
        }
    }
}

fn encode_items(items: &[Value], element: &TypeDescriptor) -> Result<Vec<Vec<u8>>, CodecError> {
    items
        .iter()
        .map(|item| encode_value(item, element))
        .collect()
}

/// Decode a container envelope from everything remaining in `buf`.
fn take_envelope<M: Message + Default>(buf: &mut &[u8]) -> Result<M, CodecError> {
    let envelope = M::decode(*buf).map_err(CodecError::Malformed)?;
    let remaining = buf.remaining();
    buf.advance(remaining);
    Ok(envelope)
}

fn mismatch(descriptor: &TypeDescriptor, value: &Value) -> CodecError {
    CodecError::TypeMismatch {
        expected: descriptor.to_string(),
        actual: format!("{} ({value})", value.kind()),
    }
}
