use prost::Message;
use remio::codec::{CodecError, Value, decode_value, encode_value};
use remio::schema::{
    ClassDescriptor, ConnectionId, EnumDescriptor, MessageSchema, ObjectHandle, TypeDescriptor,
    ValueType,
};
use remio::wire;
use std::sync::Arc;

fn ctx() -> ConnectionId {
    ConnectionId::from_raw(7)
}

fn double() -> TypeDescriptor {
    TypeDescriptor::Value(ValueType::Double)
}

fn string() -> TypeDescriptor {
    TypeDescriptor::Value(ValueType::String)
}

fn mode_enum() -> TypeDescriptor {
    TypeDescriptor::Enum(Arc::new(EnumDescriptor::new(
        "Mode",
        &[(0, "Idle"), (1, "Active"), (2, "Fault")],
    )))
}

fn probe_class() -> TypeDescriptor {
    TypeDescriptor::RemoteClass(Arc::new(ClassDescriptor::new("Probe", 1)))
}

fn roundtrip(value: &Value, descriptor: &TypeDescriptor) -> Value {
    let bytes = encode_value(value, descriptor).expect("value encodes");
    decode_value(&bytes, descriptor, ctx()).expect("value decodes")
}

#[test]
fn enum_members_roundtrip_by_name() {
    let descriptor = mode_enum();
    for member in ["Idle", "Active", "Fault"] {
        assert_eq!(
            roundtrip(&Value::Enum(member.to_string()), &descriptor),
            Value::Enum(member.to_string())
        );
    }
}

#[test]
fn unknown_enum_member_fails_on_encode() {
    let result = encode_value(&Value::Enum("Sleep".to_string()), &mode_enum());
    assert!(matches!(
        result,
        Err(CodecError::UnknownEnumMember { enumeration, member })
            if enumeration == "Mode" && member == "Sleep"
    ));
}

#[test]
fn unknown_enum_code_fails_on_decode() {
    // Wire code 999 against a mapping containing only {0, 1, 2}.
    let bytes = encode_value(&Value::Int(999), &TypeDescriptor::Value(ValueType::Int32))
        .expect("int32 encodes");
    let result = decode_value(&bytes, &mode_enum(), ctx());
    assert!(matches!(
        result,
        Err(CodecError::UnknownEnumCode { enumeration, code })
            if enumeration == "Mode" && code == 999
    ));
}

#[test]
fn absent_remote_object_roundtrips_to_absent() {
    let descriptor = probe_class();
    let bytes = encode_value(&Value::Null, &descriptor).expect("null encodes");
    assert_eq!(bytes, vec![0]);
    // Never a handle with id 0.
    assert_eq!(decode_value(&bytes, &descriptor, ctx()).expect("decodes"), Value::Null);
}

#[test]
fn remote_object_handles_bind_to_the_decoding_connection() {
    let descriptor = probe_class();
    let handle = ObjectHandle::new(ConnectionId::from_raw(3), 42);
    let bytes = encode_value(&Value::Object(handle), &descriptor).expect("handle encodes");

    let decoded = decode_value(&bytes, &descriptor, ctx()).expect("handle decodes");
    assert_eq!(decoded, Value::Object(ObjectHandle::new(ctx(), 42)));
}

#[test]
fn handle_equality_is_structural() {
    let a = ObjectHandle::new(ctx(), 9);
    let b = ObjectHandle::new(ctx(), 9);
    assert_eq!(a, b);
    assert_ne!(a, ObjectHandle::new(ConnectionId::from_raw(8), 9));
    assert_ne!(a, ObjectHandle::new(ctx(), 10));
}

#[test]
fn lists_preserve_order() {
    let descriptor = TypeDescriptor::List(Box::new(string()));
    let value = Value::List(vec![
        Value::String("b".to_string()),
        Value::String("a".to_string()),
        Value::String("a".to_string()),
    ]);
    assert_eq!(roundtrip(&value, &descriptor), value);
}

#[test]
fn sets_roundtrip_and_collapse_duplicates() {
    let descriptor = TypeDescriptor::Set(Box::new(string()));
    let value = Value::Set(vec![
        Value::String("x".to_string()),
        Value::String("y".to_string()),
    ]);
    assert_eq!(roundtrip(&value, &descriptor), value);

    // A wire sequence with duplicates decodes to a collapsed set.
    let item = encode_value(&Value::String("x".to_string()), &string()).expect("encodes");
    let envelope = wire::Set {
        items: vec![item.clone(), item],
    };
    let decoded =
        decode_value(&envelope.encode_to_vec(), &descriptor, ctx()).expect("set decodes");
    assert_eq!(decoded, Value::Set(vec![Value::String("x".to_string())]));
}

#[test]
fn dictionaries_roundtrip_and_last_entry_wins() {
    let descriptor = TypeDescriptor::Dictionary(Box::new(string()), Box::new(double()));
    let value = Value::Dictionary(vec![
        (Value::String("a".to_string()), Value::Float(1.0)),
        (Value::String("b".to_string()), Value::Float(2.0)),
    ]);
    assert_eq!(roundtrip(&value, &descriptor), value);

    let key = encode_value(&Value::String("a".to_string()), &string()).expect("encodes");
    let envelope = wire::Dictionary {
        entries: vec![
            wire::DictionaryEntry {
                key: key.clone(),
                value: encode_value(&Value::Float(1.0), &double()).expect("encodes"),
            },
            wire::DictionaryEntry {
                key,
                value: encode_value(&Value::Float(9.0), &double()).expect("encodes"),
            },
        ],
    };
    let decoded =
        decode_value(&envelope.encode_to_vec(), &descriptor, ctx()).expect("dict decodes");
    assert_eq!(
        decoded,
        Value::Dictionary(vec![(Value::String("a".to_string()), Value::Float(9.0))])
    );
}

#[test]
fn tuples_roundtrip_positionally() {
    let descriptor = TypeDescriptor::Tuple(vec![
        TypeDescriptor::Value(ValueType::Int32),
        string(),
        TypeDescriptor::Value(ValueType::Bool),
    ]);
    let value = Value::Tuple(vec![
        Value::Int(5),
        Value::String("mid".to_string()),
        Value::Bool(true),
    ]);
    assert_eq!(roundtrip(&value, &descriptor), value);
}

#[test]
fn tuple_arity_mismatch_fails_both_directions() {
    let descriptor = TypeDescriptor::Tuple(vec![double(), double()]);
    let result = encode_value(&Value::Tuple(vec![Value::Float(1.0)]), &descriptor);
    assert!(matches!(
        result,
        Err(CodecError::Arity {
            expected: 2,
            actual: 1
        })
    ));

    let envelope = wire::Tuple {
        items: vec![encode_value(&Value::Float(1.0), &double()).expect("encodes")],
    };
    let result = decode_value(&envelope.encode_to_vec(), &descriptor, ctx());
    assert!(matches!(
        result,
        Err(CodecError::Arity {
            expected: 2,
            actual: 1
        })
    ));
}

#[test]
fn nested_containers_roundtrip() {
    let descriptor = TypeDescriptor::List(Box::new(TypeDescriptor::Dictionary(
        Box::new(string()),
        Box::new(TypeDescriptor::List(Box::new(double()))),
    )));
    let value = Value::List(vec![Value::Dictionary(vec![(
        Value::String("samples".to_string()),
        Value::List(vec![Value::Float(0.5), Value::Float(0.75)]),
    )])]);
    assert_eq!(roundtrip(&value, &descriptor), value);
}

#[test]
fn messages_pass_through_opaquely() {
    let schema = Arc::new(MessageSchema::new("ProbeConfig", 1));
    let descriptor = TypeDescriptor::Message(schema);
    // Any prost message stands in for an application schema here.
    let payload = wire::List {
        items: vec![vec![1, 2, 3]],
    };
    let value = Value::from_message(1, &payload);
    let decoded = roundtrip(&value, &descriptor);
    assert_eq!(decoded, value);
    let unwrapped: wire::List = decoded.to_message().expect("message unwraps");
    assert_eq!(unwrapped, payload);
}

#[test]
fn message_schema_mismatch_fails_on_encode() {
    let descriptor = TypeDescriptor::Message(Arc::new(MessageSchema::new("ProbeConfig", 1)));
    let value = Value::Message {
        schema_id: 2,
        bytes: vec![],
    };
    assert!(matches!(
        encode_value(&value, &descriptor),
        Err(CodecError::SchemaMismatch {
            expected: 1,
            actual: 2
        })
    ));
}

#[test]
fn trailing_bytes_after_a_value_are_rejected() {
    let descriptor = TypeDescriptor::Value(ValueType::Bool);
    let mut bytes = encode_value(&Value::Bool(true), &descriptor).expect("bool encodes");
    bytes.push(0xff);
    assert!(matches!(
        decode_value(&bytes, &descriptor, ctx()),
        Err(CodecError::TrailingBytes { remaining: 1 })
    ));
}

#[test]
fn container_values_must_match_descriptor_shape() {
    let descriptor = TypeDescriptor::List(Box::new(double()));
    assert!(matches!(
        encode_value(&Value::Float(1.0), &descriptor),
        Err(CodecError::TypeMismatch { .. })
    ));
    assert!(matches!(
        encode_value(&Value::Set(vec![]), &descriptor),
        Err(CodecError::TypeMismatch { .. })
    ));
}
