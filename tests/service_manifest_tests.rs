use remio::codec::Value;
use remio::schema::{
    ClassDescriptor, DefaultValue, EnumDescriptor, ManifestError, MessageSchema, ServiceRegistry,
    TypeDescriptor, TypeRef, ValueType,
};

fn registry() -> ServiceRegistry {
    let mut registry = ServiceRegistry::new();
    registry.register_enum(EnumDescriptor::new("Mode", &[(0, "Idle"), (1, "Active")]));
    registry.register_class(ClassDescriptor::new("Probe", 1));
    registry.register_schema(MessageSchema::new("ProbeConfig", 1));
    registry
}

#[test]
fn resolves_primitives_without_registration() {
    let descriptor = registry()
        .resolve(&TypeRef::Value(ValueType::Int64))
        .expect("resolves");
    assert_eq!(descriptor, TypeDescriptor::Value(ValueType::Int64));
}

#[test]
fn resolves_registered_names_at_any_nesting_depth() {
    let type_ref = TypeRef::Dictionary(
        Box::new(TypeRef::Value(ValueType::String)),
        Box::new(TypeRef::List(Box::new(TypeRef::Class("Probe".to_string())))),
    );
    let descriptor = registry().resolve(&type_ref).expect("resolves");
    match descriptor {
        TypeDescriptor::Dictionary(key, value) => {
            assert_eq!(*key, TypeDescriptor::Value(ValueType::String));
            assert!(matches!(
                *value,
                TypeDescriptor::List(element)
                    if matches!(*element, TypeDescriptor::RemoteClass(ref class) if class.name == "Probe")
            ));
        }
        other => panic!("expected dictionary descriptor, got {other:?}"),
    }
}

#[test]
fn unregistered_name_is_a_fatal_manifest_error() {
    let result = registry().resolve(&TypeRef::Enum("Missing".to_string()));
    assert!(matches!(
        result,
        Err(ManifestError::UnknownType { kind: "enum", name }) if name == "Missing"
    ));

    // Nested references are checked too.
    let result = registry().resolve(&TypeRef::Tuple(vec![
        TypeRef::Value(ValueType::Bool),
        TypeRef::Class("Ghost".to_string()),
    ]));
    assert!(matches!(result, Err(ManifestError::UnknownType { .. })));
}

#[test]
fn builds_procedures_from_manifest_entries() {
    let procedure = registry()
        .procedure(
            "Telemetry",
            "set_mode",
            vec![
                (
                    "mode",
                    TypeRef::Enum("Mode".to_string()),
                    DefaultValue::NoDefault,
                ),
                (
                    "sticky",
                    TypeRef::Value(ValueType::Bool),
                    DefaultValue::HasDefault(Value::Bool(false)),
                ),
            ],
            None,
        )
        .expect("builds");
    assert_eq!(procedure.required_count(), 1);
    assert_eq!(
        procedure.signature(),
        "Telemetry.set_mode(mode: enum Mode, sticky: bool = false)"
    );
}

#[test]
fn procedure_with_unknown_parameter_type_fails() {
    let result = registry().procedure(
        "Telemetry",
        "bad",
        vec![(
            "x",
            TypeRef::Message("Nope".to_string()),
            DefaultValue::NoDefault,
        )],
        None,
    );
    assert!(matches!(
        result,
        Err(ManifestError::UnknownType { kind: "message schema", name }) if name == "Nope"
    ));
}
