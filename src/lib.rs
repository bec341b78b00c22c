//! Core of a client-side RPC runtime: a type-directed value codec and an
//! argument-binding engine over a prost-based wire envelope.
//!
//! Everything in this crate is pure and synchronous; the blocking call
//! executor lives in the `remio-rpc-client` extension crate.

pub mod binder;
pub mod codec;
pub mod constants;
pub mod schema;
pub mod utils;
pub mod wire;
