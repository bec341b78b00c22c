use crate::binder::BindError;
use crate::codec::{Value, encode_value};
use crate::schema::{DefaultValue, ProcedureDescriptor};
use crate::wire::Argument;

/// Resolve a call's positional and keyword arguments against a procedure
/// signature into an ordered, sparse, encoded argument list.
///
/// The list is sparse: an optional parameter whose effective value equals its
/// declared default is omitted entirely. Positions always reflect the
/// parameter's place in the signature, never its place in the wire list.
///
/// Binding is a pure function of its inputs; the output is ascending by
/// position, and unknown keyword names are reported sorted, so identical
/// inputs always produce identical results.
pub fn bind_arguments(
    positional: &[Value],
    keyword: &[(String, Value)],
    procedure: &ProcedureDescriptor,
) -> Result<Vec<Argument>, BindError> {
    let parameters = &procedure.parameters;
    if positional.len() > parameters.len() {
        return Err(BindError::TooManyArguments {
            supplied: positional.len(),
            accepted: parameters.len(),
            signature: procedure.signature(),
        });
    }

    let required_count = procedure.required_count();
    let mut bound = Vec::new();
    for (position, parameter) in parameters.iter().enumerate() {
        let by_keyword = keyword
            .iter()
            .find(|(name, _)| *name == parameter.name)
            .map(|(_, value)| value);
        if by_keyword.is_some() && position < positional.len() {
            return Err(BindError::ConflictingArgument {
                parameter: parameter.name.clone(),
                signature: procedure.signature(),
            });
        }

        let supplied = by_keyword.or_else(|| positional.get(position));
        let optional = position >= required_count;
        let at_default = match supplied {
            None => true,
            Some(value) => {
                matches!(&parameter.default, DefaultValue::HasDefault(default) if value == default)
            }
        };
        if optional && at_default {
            continue;
        }

        let effective = match supplied {
            Some(value) => value,
            None => {
                return Err(BindError::MissingArgument {
                    parameter: parameter.name.clone(),
                    signature: procedure.signature(),
                });
            }
        };
        let payload =
            encode_value(effective, &parameter.param_type).map_err(|source| {
                BindError::TypeMismatch {
                    parameter: parameter.name.clone(),
                    source,
                    signature: procedure.signature(),
                }
            })?;
        bound.push(Argument {
            position: position as u32,
            value: payload,
        });
    }

    let mut unknown: Vec<String> = keyword
        .iter()
        .filter(|(name, _)| !parameters.iter().any(|parameter| parameter.name == *name))
        .map(|(name, _)| name.clone())
        .collect();
    if !unknown.is_empty() {
        unknown.sort();
        unknown.dedup();
        return Err(BindError::UnknownKeywordArguments {
            names: unknown,
            signature: procedure.signature(),
        });
    }

    Ok(bound)
}
