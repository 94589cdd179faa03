//! Minimal kRPC client: protobuf messages, value encoding, the framed TCP
//! connection and typed procedure requests for the `SpaceCenter` and `UI` services.

pub mod krpc_client;
mod krpc_codec;
mod krpc_handler_common;
mod krpc_messages;
pub mod krpc_request;
pub mod session;
#[cfg(test)]
pub(crate) mod test_server;

pub(crate) use krpc_codec::{Ignored, KRPCValue, ObjectHandle};
pub(crate) use krpc_client::KRPCClient;
pub(crate) use krpc_handler_common::KRPCError;
