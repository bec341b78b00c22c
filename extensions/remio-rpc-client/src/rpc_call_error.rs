use remio::binder::BindError;
use remio::codec::CodecError;
use std::fmt;
use std::io;

/// Errors surfaced by the call executor. Nothing here is retried; the caller
/// decides whether to repeat the whole call.
#[derive(Debug)]
pub enum RpcCallError {
    /// The connection was not established when a send or receive was
    /// attempted, or was torn down mid-call.
    NotConnected,
    /// The arguments failed to bind against the procedure signature; the
    /// request was never sent.
    Bind(BindError),
    /// Local encode/decode failure. On the decode side the request was sent
    /// and a response received, but its payload could not be interpreted.
    Codec(CodecError),
    /// The server executed the call and reported failure. The description is
    /// the server's, verbatim. Never to be confused with a local failure:
    /// the request was successfully transmitted.
    Remote(String),
    /// A transport-level I/O error other than a dead connection.
    Io(io::Error),
}

impl fmt::Display for RpcCallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcCallError::NotConnected => write!(f, "connection is not established"),
            RpcCallError::Bind(error) => write!(f, "argument binding failed: {error}"),
            RpcCallError::Codec(error) => write!(f, "codec failure: {error}"),
            RpcCallError::Remote(description) => {
                write!(f, "remote procedure error: {description}")
            }
            RpcCallError::Io(error) => write!(f, "I/O error: {error}"),
        }
    }
}

impl std::error::Error for RpcCallError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RpcCallError::Bind(error) => Some(error),
            RpcCallError::Codec(error) => Some(error),
            RpcCallError::Io(error) => Some(error),
            _ => None,
        }
    }
}

impl From<BindError> for RpcCallError {
    fn from(error: BindError) -> Self {
        RpcCallError::Bind(error)
    }
}

impl From<CodecError> for RpcCallError {
    fn from(error: CodecError) -> Self {
        RpcCallError::Codec(error)
    }
}
