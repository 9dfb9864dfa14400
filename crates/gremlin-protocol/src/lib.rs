//! Driver-side messaging for Gremlin Server.
//!
//! Covers the request/response envelopes of the wire protocol and their
//! GraphSON serialization. Transport (sockets, pooling, retries) lives with
//! the caller; this crate only shapes and checks the bytes.

mod message;
mod serializer;

pub use message::{
    args, ops, RequestMessage, RequestMessageBuilder, ResponseMessage, ResponseResult,
    ResponseStatus, AUTHENTICATE, NO_CONTENT, PARTIAL_CONTENT, SCRIPT_EVALUATION_ERROR,
    SERVER_ERROR, SUCCESS, UNAUTHORIZED,
};
pub use serializer::{
    GraphSonMessageSerializer, MessageSerializer, ProtocolError, GRAPHSON_V3_MIME_TYPE,
};
