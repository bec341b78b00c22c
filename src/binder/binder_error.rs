use crate::codec::CodecError;
use std::fmt;

/// Signature-mismatch errors raised while binding a call's arguments.
///
/// All of these are detected before any network I/O: a bind failure means
/// the request was never sent. Every variant carries the procedure's
/// human-readable signature for diagnostics.
#[derive(Debug)]
pub enum BindError {
    /// More positional arguments were supplied than the signature accepts.
    TooManyArguments {
        supplied: usize,
        accepted: usize,
        signature: String,
    },
    /// A required parameter was supplied neither positionally nor by keyword.
    MissingArgument {
        parameter: String,
        signature: String,
    },
    /// A parameter was supplied both positionally and by keyword.
    ConflictingArgument {
        parameter: String,
        signature: String,
    },
    /// Keyword argument names matching no declared parameter, all of them at
    /// once, sorted.
    UnknownKeywordArguments {
        names: Vec<String>,
        signature: String,
    },
    /// A supplied value could not be coerced and encoded to the parameter's
    /// declared type.
    TypeMismatch {
        parameter: String,
        source: CodecError,
        signature: String,
    },
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::TooManyArguments {
                supplied,
                accepted,
                signature,
            } => write!(
                f,
                "too many arguments: {supplied} supplied, at most {accepted} accepted by {signature}"
            ),
            BindError::MissingArgument {
                parameter,
                signature,
            } => write!(f, "missing required argument '{parameter}' for {signature}"),
            BindError::ConflictingArgument {
                parameter,
                signature,
            } => write!(
                f,
                "argument '{parameter}' supplied both positionally and by keyword for {signature}"
            ),
            BindError::UnknownKeywordArguments { names, signature } => {
                write!(f, "unknown keyword argument(s) ")?;
                for (i, name) in names.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{name}'")?;
                }
                write!(f, " for {signature}")
            }
            BindError::TypeMismatch {
                parameter,
                source,
                signature,
            } => write!(f, "argument '{parameter}' for {signature}: {source}"),
        }
    }
}

impl std::error::Error for BindError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BindError::TypeMismatch { source, .. } => Some(source),
            _ => None,
        }
    }
}
