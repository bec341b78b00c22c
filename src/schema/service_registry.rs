use crate::schema::{
    ClassDescriptor, DefaultValue, EnumDescriptor, MessageSchema, ParameterDescriptor,
    ProcedureDescriptor, TypeDescriptor, ValueType,
};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Structural type reference as it appears in a service manifest: the same
/// shape as `TypeDescriptor`, but naming enums, classes, and message schemas
/// by string instead of embedding their descriptors.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    Value(ValueType),
    Enum(String),
    Class(String),
    Message(String),
    List(Box<TypeRef>),
    Set(Box<TypeRef>),
    Dictionary(Box<TypeRef>, Box<TypeRef>),
    Tuple(Vec<TypeRef>),
}

/// Fatal manifest errors.
///
/// A manifest that references a name never registered is a malformed server
/// manifest, which is a configuration fault, not a per-call error.
#[derive(Debug)]
pub enum ManifestError {
    UnknownType { kind: &'static str, name: String },
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::UnknownType { kind, name } => {
                write!(f, "manifest references unregistered {kind} '{name}'")
            }
        }
    }
}

impl std::error::Error for ManifestError {}

/// Registry of every named type a service manifest may reference.
///
/// Enums, classes, and message schemas are registered once at setup time;
/// resolving a `TypeRef` against the registry yields the immutable
/// `TypeDescriptor` the codec dispatches on. After setup the registry is
/// read-only and freely shared.
#[derive(Debug, Clone, Default)]
pub struct ServiceRegistry {
    enums: BTreeMap<String, Arc<EnumDescriptor>>,
    classes: BTreeMap<String, Arc<ClassDescriptor>>,
    schemas: BTreeMap<String, Arc<MessageSchema>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_enum(&mut self, descriptor: EnumDescriptor) -> Arc<EnumDescriptor> {
        let descriptor = Arc::new(descriptor);
        self.enums
            .insert(descriptor.name().to_string(), descriptor.clone());
        descriptor
    }

    pub fn register_class(&mut self, descriptor: ClassDescriptor) -> Arc<ClassDescriptor> {
        let descriptor = Arc::new(descriptor);
        self.classes
            .insert(descriptor.name.clone(), descriptor.clone());
        descriptor
    }

    pub fn register_schema(&mut self, schema: MessageSchema) -> Arc<MessageSchema> {
        let schema = Arc::new(schema);
        self.schemas.insert(schema.name.clone(), schema.clone());
        schema
    }

    /// Resolve a structural type reference into a full descriptor.
    ///
    /// Fails with `ManifestError::UnknownType` if any name, at any nesting
    /// depth, was never registered.
    pub fn resolve(&self, type_ref: &TypeRef) -> Result<TypeDescriptor, ManifestError> {
        match type_ref {
            TypeRef::Value(value_type) => Ok(TypeDescriptor::Value(*value_type)),
            TypeRef::Enum(name) => self
                .enums
                .get(name)
                .cloned()
                .map(TypeDescriptor::Enum)
                .ok_or_else(|| ManifestError::UnknownType {
                    kind: "enum",
                    name: name.clone(),
                }),
            TypeRef::Class(name) => self
                .classes
                .get(name)
                .cloned()
                .map(TypeDescriptor::RemoteClass)
                .ok_or_else(|| ManifestError::UnknownType {
                    kind: "class",
                    name: name.clone(),
                }),
            TypeRef::Message(name) => self
                .schemas
                .get(name)
                .cloned()
                .map(TypeDescriptor::Message)
                .ok_or_else(|| ManifestError::UnknownType {
                    kind: "message schema",
                    name: name.clone(),
                }),
            TypeRef::List(element) => Ok(TypeDescriptor::List(Box::new(self.resolve(element)?))),
            TypeRef::Set(element) => Ok(TypeDescriptor::Set(Box::new(self.resolve(element)?))),
            TypeRef::Dictionary(key, value) => Ok(TypeDescriptor::Dictionary(
                Box::new(self.resolve(key)?),
                Box::new(self.resolve(value)?),
            )),
            TypeRef::Tuple(elements) => Ok(TypeDescriptor::Tuple(
                elements
                    .iter()
                    .map(|element| self.resolve(element))
                    .collect::<Result<_, _>>()?,
            )),
        }
    }

    /// Build a procedure descriptor from one manifest entry.
    pub fn procedure(
        &self,
        service: &str,
        name: &str,
        parameters: Vec<(&str, TypeRef, DefaultValue)>,
        return_type: Option<TypeRef>,
    ) -> Result<ProcedureDescriptor, ManifestError> {
        let parameters = parameters
            .into_iter()
            .map(|(param_name, type_ref, default)| {
                Ok(ParameterDescriptor {
                    name: param_name.to_string(),
                    param_type: self.resolve(&type_ref)?,
                    default,
                })
            })
            .collect::<Result<Vec<_>, ManifestError>>()?;
        let return_type = match return_type {
            Some(type_ref) => Some(self.resolve(&type_ref)?),
            None => None,
        };
        Ok(ProcedureDescriptor::new(
            service,
            name,
            parameters,
            return_type,
        ))
    }
}
