mod procedure_descriptor;
mod remote_object;
mod service_registry;
mod type_descriptor;

pub use procedure_descriptor::{DefaultValue, ParameterDescriptor, ProcedureDescriptor};
pub use remote_object::{ConnectionId, ObjectHandle};
pub use service_registry::{ManifestError, ServiceRegistry, TypeRef};
pub use type_descriptor::{
    ClassDescriptor, EnumDescriptor, MessageSchema, TypeDescriptor, ValueType,
};
