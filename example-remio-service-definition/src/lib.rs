//! Example "Telemetry" service definition.
//!
//! A small but representative service manifest — an enum, a remote class, a
//! message schema, defaults, and container-typed parameters — shared by
//! integration tests and demos. In a real deployment these descriptors are
//! built from a server-provided manifest at setup time; here they are spelled
//! out by hand.

use remio::codec::Value;
use remio::schema::{
    ClassDescriptor, DefaultValue, EnumDescriptor, MessageSchema, ProcedureDescriptor,
    ServiceRegistry, TypeRef, ValueType,
};

pub const SERVICE_NAME: &str = "Telemetry";

/// Registry holding every named type the Telemetry service references.
pub fn telemetry_registry() -> ServiceRegistry {
    let mut registry = ServiceRegistry::new();
    registry.register_enum(EnumDescriptor::new(
        "Mode",
        &[(0, "Idle"), (1, "Active"), (2, "Fault")],
    ));
    registry.register_class(ClassDescriptor::new("Probe", 1));
    registry.register_schema(MessageSchema::new("ProbeConfig", 1));
    registry
}

/// `Telemetry.get_reading(channel: string) -> double`
pub fn get_reading(registry: &ServiceRegistry) -> ProcedureDescriptor {
    registry
        .procedure(
            SERVICE_NAME,
            "get_reading",
            vec![(
                "channel",
                TypeRef::Value(ValueType::String),
                DefaultValue::NoDefault,
            )],
            Some(TypeRef::Value(ValueType::Double)),
        )
        .expect("fixture types are registered")
}

/// `Telemetry.set_mode(mode: enum Mode)`
pub fn set_mode(registry: &ServiceRegistry) -> ProcedureDescriptor {
    registry
        .procedure(
            SERVICE_NAME,
            "set_mode",
            vec![(
                "mode",
                TypeRef::Enum("Mode".to_string()),
                DefaultValue::NoDefault,
            )],
            None,
        )
        .expect("fixture types are registered")
}

/// `Telemetry.find_probe(name: string) -> class Probe`
pub fn find_probe(registry: &ServiceRegistry) -> ProcedureDescriptor {
    registry
        .procedure(
            SERVICE_NAME,
            "find_probe",
            vec![(
                "name",
                TypeRef::Value(ValueType::String),
                DefaultValue::NoDefault,
            )],
            Some(TypeRef::Class("Probe".to_string())),
        )
        .expect("fixture types are registered")
}

/// `Telemetry.probe_position(probe: class Probe) -> tuple(double, double, double)`
pub fn probe_position(registry: &ServiceRegistry) -> ProcedureDescriptor {
    registry
        .procedure(
            SERVICE_NAME,
            "probe_position",
            vec![(
                "probe",
                TypeRef::Class("Probe".to_string()),
                DefaultValue::NoDefault,
            )],
            Some(TypeRef::Tuple(vec![
                TypeRef::Value(ValueType::Double),
                TypeRef::Value(ValueType::Double),
                TypeRef::Value(ValueType::Double),
            ])),
        )
        .expect("fixture types are registered")
}

/// `Telemetry.configure(probe: class Probe, window: int32 = 60, channels: list(string) = [])`
pub fn configure(registry: &ServiceRegistry) -> ProcedureDescriptor {
    registry
        .procedure(
            SERVICE_NAME,
            "configure",
            vec![
                (
                    "probe",
                    TypeRef::Class("Probe".to_string()),
                    DefaultValue::NoDefault,
                ),
                (
                    "window",
                    TypeRef::Value(ValueType::Int32),
                    DefaultValue::HasDefault(Value::Int(60)),
                ),
                (
                    "channels",
                    TypeRef::List(Box::new(TypeRef::Value(ValueType::String))),
                    DefaultValue::HasDefault(Value::List(vec![])),
                ),
            ],
            None,
        )
        .expect("fixture types are registered")
}

/// `Telemetry.latest_samples(channels: set(string)) -> dictionary(string, list(double))`
pub fn latest_samples(registry: &ServiceRegistry) -> ProcedureDescriptor {
    registry
        .procedure(
            SERVICE_NAME,
            "latest_samples",
            vec![(
                "channels",
                TypeRef::Set(Box::new(TypeRef::Value(ValueType::String))),
                DefaultValue::NoDefault,
            )],
            Some(TypeRef::Dictionary(
                Box::new(TypeRef::Value(ValueType::String)),
                Box::new(TypeRef::List(Box::new(TypeRef::Value(ValueType::Double)))),
            )),
        )
        .expect("fixture types are registered")
}
