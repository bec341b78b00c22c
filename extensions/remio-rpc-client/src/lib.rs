mod rpc_call_error;
mod rpc_client;
mod rpc_connection;
mod tcp_rpc_connection;

pub use rpc_call_error::RpcCallError;
pub use rpc_client::RpcClient;
pub use rpc_connection::RpcConnection;
pub use tcp_rpc_connection::TcpRpcConnection;
