use crate::{RpcCallError, RpcConnection};
use prost::Message;
use remio::binder::bind_arguments;
use remio::codec::{Value, decode_value};
use remio::schema::ProcedureDescriptor;
use remio::wire::{Request, Response, encode_length_prefixed};
use std::io;

/// Executes procedure calls over a single connection.
///
/// Strictly request/response: one call in flight at a time, blocking
/// synchronously on the response with no timeout. Binding and encoding run
/// before any I/O, so a bind failure guarantees nothing was sent.
pub struct RpcClient<C: RpcConnection> {
    connection: C,
}

impl<C: RpcConnection> RpcClient<C> {
    pub fn new(connection: C) -> Self {
        Self { connection }
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    pub fn connection_mut(&mut self) -> &mut C {
        &mut self.connection
    }

    pub fn into_connection(self) -> C {
        self.connection
    }

    /// Bind, encode, send, and await one procedure call.
    ///
    /// Returns the decoded return value for procedures declaring a return
    /// type, `None` otherwise. A server-reported error surfaces as
    /// `RpcCallError::Remote` with the server's description verbatim.
    pub fn call(
        &mut self,
        procedure: &ProcedureDescriptor,
        positional: &[Value],
        keyword: &[(String, Value)],
    ) -> Result<Option<Value>, RpcCallError> {
        if !self.connection.is_connected() {
            return Err(RpcCallError::NotConnected);
        }

        let arguments = bind_arguments(positional, keyword, procedure)?;
        let request = Request {
            service: procedure.service.clone(),
            procedure: procedure.name.clone(),
            arguments,
        };
        let frame = encode_length_prefixed(&request);
        tracing::debug!(
            service = %procedure.service,
            procedure = %procedure.name,
            frame_len = frame.len(),
            "sending request"
        );
        self.connection.send(&frame).map_err(map_io)?;

        let response_len = self.connection.receive_varint_length().map_err(map_io)?;
        let response_bytes = self.connection.receive_exact(response_len as usize).map_err(map_io)?;
        let response = Response::decode(response_bytes.as_slice())
            .map_err(|error| RpcCallError::Codec(error.into()))?;
        tracing::debug!(
            service = %procedure.service,
            procedure = %procedure.name,
            response_len = response_bytes.len(),
            "received response"
        );

        if let Some(description) = response.error {
            tracing::warn!(
                service = %procedure.service,
                procedure = %procedure.name,
                "remote procedure reported an error"
            );
            return Err(RpcCallError::Remote(description));
        }

        match &procedure.return_type {
            Some(return_type) => {
                let payload = response.return_value.unwrap_or_default();
                let value =
                    decode_value(&payload, return_type, self.connection.connection_id())?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }
}

/// A connection torn down mid-call is reported as not-connected rather than
/// as a raw I/O failure; other I/O errors pass through.
fn map_io(error: io::Error) -> RpcCallError {
    match error.kind() {
        io::ErrorKind::NotConnected
        | io::ErrorKind::UnexpectedEof
        | io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::BrokenPipe => RpcCallError::NotConnected,
        _ => RpcCallError::Io(error),
    }
}
