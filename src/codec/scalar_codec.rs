use crate::codec::{CodecError, Value};
use crate::schema::ValueType;
use bytes::Buf;
use prost::encoding::{decode_varint, encode_varint};

/// Encode one primitive value onto `buf` in its declared wire representation.
///
/// Numeric values coerce across families when lossless: signed and unsigned
/// integers convert in range, and any integer may widen into a float or
/// double. Everything else is a `TypeMismatch`.
pub fn encode_scalar(
    value: &Value,
    value_type: ValueType,
    buf: &mut Vec<u8>,
) -> Result<(), CodecError> {
    match value_type {
        ValueType::Int16 => {
            let n = signed_in_range(value, value_type, i16::MIN as i64, i16::MAX as i64)?;
            encode_varint(zigzag_encode(n), buf);
        }
        ValueType::Int32 => {
            let n = signed_in_range(value, value_type, i32::MIN as i64, i32::MAX as i64)?;
            encode_varint(zigzag_encode(n), buf);
        }
        ValueType::Int64 => {
            let n = signed_in_range(value, value_type, i64::MIN, i64::MAX)?;
            encode_varint(zigzag_encode(n), buf);
        }
        ValueType::UInt16 => {
            let n = unsigned_in_range(value, value_type, u16::MAX as u64)?;
            encode_varint(n, buf);
        }
        ValueType::UInt32 => {
            let n = unsigned_in_range(value, value_type, u32::MAX as u64)?;
            encode_varint(n, buf);
        }
        ValueType::UInt64 => {
            let n = unsigned_in_range(value, value_type, u64::MAX)?;
            encode_varint(n, buf);
        }
        ValueType::Float => {
            let x = float_of(value, value_type)?;
            buf.extend_from_slice(&(x as f32).to_le_bytes());
        }
        ValueType::Double => {
            let x = float_of(value, value_type)?;
            buf.extend_from_slice(&x.to_le_bytes());
        }
        ValueType::Bool => match value {
            Value::Bool(v) => encode_varint(u64::from(*v), buf),
            other => return Err(mismatch(value_type, other)),
        },
        ValueType::String => match value {
            Value::String(s) => {
                encode_varint(s.len() as u64, buf);
                buf.extend_from_slice(s.as_bytes());
            }
            other => return Err(mismatch(value_type, other)),
        },
        ValueType::Bytes => match value {
            Value::Bytes(b) => {
                encode_varint(b.len() as u64, buf);
                buf.extend_from_slice(b);
            }
            other => return Err(mismatch(value_type, other)),
        },
    }
    Ok(())
}

/// Decode one primitive value from the front of `buf`.
///
/// Consumes exactly the bytes of the value; the caller decides whether
/// leftovers are an error.
pub fn decode_scalar(buf: &mut impl Buf, value_type: ValueType) -> Result<Value, CodecError> {
    match value_type {
        ValueType::Int16 => {
            let n = zigzag_decode(read_varint(buf)?);
            decoded_signed_in_range(n, value_type, i16::MIN as i64, i16::MAX as i64)
        }
        ValueType::Int32 => {
            let n = zigzag_decode(read_varint(buf)?);
            decoded_signed_in_range(n, value_type, i32::MIN as i64, i32::MAX as i64)
        }
        ValueType::Int64 => Ok(Value::Int(zigzag_decode(read_varint(buf)?))),
        ValueType::UInt16 => {
            let n = read_varint(buf)?;
            decoded_unsigned_in_range(n, value_type, u16::MAX as u64)
        }
        ValueType::UInt32 => {
            let n = read_varint(buf)?;
            decoded_unsigned_in_range(n, value_type, u32::MAX as u64)
        }
        ValueType::UInt64 => Ok(Value::UInt(read_varint(buf)?)),
        ValueType::Float => {
            if buf.remaining() < 4 {
                return Err(CodecError::Truncated);
            }
            Ok(Value::Float(buf.get_f32_le().into()))
        }
        ValueType::Double => {
            if buf.remaining() < 8 {
                return Err(CodecError::Truncated);
            }
            Ok(Value::Float(buf.get_f64_le()))
        }
        ValueType::Bool => Ok(Value::Bool(read_varint(buf)? != 0)),
        ValueType::String => {
            let bytes = read_length_prefixed(buf)?;
            String::from_utf8(bytes)
                .map(Value::String)
                .map_err(|_| CodecError::InvalidUtf8)
        }
        ValueType::Bytes => Ok(Value::Bytes(read_length_prefixed(buf)?)),
    }
}

fn zigzag_encode(n: i64) -> u64 {
    ((n << 1) ^ (n >> 63)) as u64
}

fn zigzag_decode(n: u64) -> i64 {
    ((n >> 1) as i64) ^ -((n & 1) as i64)
}

fn read_varint(buf: &mut impl Buf) -> Result<u64, CodecError> {
    decode_varint(buf).map_err(CodecError::Malformed)
}

fn read_length_prefixed(buf: &mut impl Buf) -> Result<Vec<u8>, CodecError> {
    let len = read_varint(buf)? as usize;
    if buf.remaining() < len {
        return Err(CodecError::Truncated);
    }
    Ok(buf.copy_to_bytes(len).to_vec())
}

fn mismatch(value_type: ValueType, value: &Value) -> CodecError {
    CodecError::TypeMismatch {
        expected: value_type.name().to_string(),
        actual: format!("{} ({value})", value.kind()),
    }
}

fn signed_in_range(
    value: &Value,
    value_type: ValueType,
    min: i64,
    max: i64,
) -> Result<i64, CodecError> {
    let n = match value {
        Value::Int(n) => *n,
        Value::UInt(n) => i64::try_from(*n).map_err(|_| out_of_range(value_type, value))?,
        other => return Err(mismatch(value_type, other)),
    };
    if n < min || n > max {
        return Err(out_of_range(value_type, value));
    }
    Ok(n)
}

fn unsigned_in_range(value: &Value, value_type: ValueType, max: u64) -> Result<u64, CodecError> {
    let n = match value {
        Value::UInt(n) => *n,
        Value::Int(n) => u64::try_from(*n).map_err(|_| out_of_range(value_type, value))?,
        other => return Err(mismatch(value_type, other)),
    };
    if n > max {
        return Err(out_of_range(value_type, value));
    }
    Ok(n)
}

fn float_of(value: &Value, value_type: ValueType) -> Result<f64, CodecError> {
    match value {
        Value::Float(x) => Ok(*x),
        Value::Int(n) => Ok(*n as f64),
        Value::UInt(n) => Ok(*n as f64),
        other => Err(mismatch(value_type, other)),
    }
}

fn out_of_range(value_type: ValueType, value: &Value) -> CodecError {
    CodecError::ValueOutOfRange {
        expected: value_type.name().to_string(),
        value: value.to_string(),
    }
}

fn decoded_signed_in_range(
    n: i64,
    value_type: ValueType,
    min: i64,
    max: i64,
) -> Result<Value, CodecError> {
    if n < min || n > max {
        return Err(CodecError::ValueOutOfRange {
            expected: value_type.name().to_string(),
            value: n.to_string(),
        });
    }
    Ok(Value::Int(n))
}

fn decoded_unsigned_in_range(n: u64, value_type: ValueType, max: u64) -> Result<Value, CodecError> {
    if n > max {
        return Err(CodecError::ValueOutOfRange {
            expected: value_type.name().to_string(),
            value: n.to_string(),
        });
    }
    Ok(Value::UInt(n))
}
