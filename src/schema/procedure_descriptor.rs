use crate::codec::Value;
use crate::schema::TypeDescriptor;
use std::fmt;

/// Declared default of a procedure parameter.
///
/// `NoDefault` is a real tag, distinct from every legal value including
/// `Value::Null`: a parameter defaulting to null and a parameter with no
/// default are different declarations.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    NoDefault,
    HasDefault(Value),
}

impl DefaultValue {
    pub fn value(&self) -> Option<&Value> {
        match self {
            DefaultValue::NoDefault => None,
            DefaultValue::HasDefault(value) => Some(value),
        }
    }
}

/// One declared parameter of a remote procedure: name, wire type, and
/// optional default.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDescriptor {
    pub name: String,
    pub param_type: TypeDescriptor,
    pub default: DefaultValue,
}

impl ParameterDescriptor {
    pub fn required(name: &str, param_type: TypeDescriptor) -> Self {
        Self {
            name: name.to_string(),
            param_type,
            default: DefaultValue::NoDefault,
        }
    }

    pub fn optional(name: &str, param_type: TypeDescriptor, default: Value) -> Self {
        Self {
            name: name.to_string(),
            param_type,
            default: DefaultValue::HasDefault(default),
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self.default, DefaultValue::NoDefault)
    }
}

impl fmt::Display for ParameterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.param_type)?;
        if let DefaultValue::HasDefault(default) = &self.default {
            write!(f, " = {default}")?;
        }
        Ok(())
    }
}

/// A remote procedure's declared signature: service, name, ordered
/// parameters, and optional return type.
///
/// Parameters without defaults are required and precede the optional ones in
/// the declared order. That ordering is a manifest precondition; the binder
/// relies on it rather than re-checking it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureDescriptor {
    pub service: String,
    pub name: String,
    pub parameters: Vec<ParameterDescriptor>,
    pub return_type: Option<TypeDescriptor>,
}

impl ProcedureDescriptor {
    pub fn new(
        service: &str,
        name: &str,
        parameters: Vec<ParameterDescriptor>,
        return_type: Option<TypeDescriptor>,
    ) -> Self {
        Self {
            service: service.to_string(),
            name: name.to_string(),
            parameters,
            return_type,
        }
    }

    /// Number of parameters without a declared default; the procedure's
    /// minimum arity.
    pub fn required_count(&self) -> usize {
        self.parameters
            .iter()
            .filter(|parameter| parameter.is_required())
            .count()
    }

    /// Human-readable signature, attached to every binding error for
    /// diagnosability.
    pub fn signature(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ProcedureDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}(", self.service, self.name)?;
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{parameter}")?;
        }
        f.write_str(")")?;
        if let Some(return_type) = &self.return_type {
            write!(f, " -> {return_type}")?;
        }
        Ok(())
    }
}
