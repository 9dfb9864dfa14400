//! Message serialization with the driver's failure taxonomy.
//!
//! Deserialization keeps two failure classes strictly apart: an absent
//! payload reference ([`ProtocolError::AbsentPayload`]) versus bytes that
//! exist but hold no parseable message (every other variant). Transport
//! code routes the two down different paths, so the serializer must never
//! conflate them.

use thiserror::Error;
use tracing::{debug, warn};

use crate::message::{RequestMessage, ResponseMessage};

/// Content type for GraphSON 3.0 message envelopes.
pub const GRAPHSON_V3_MIME_TYPE: &str = "application/vnd.gremlin-v3.0+json";

/// Failures while converting messages to or from wire bytes.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// No payload reference was handed over at all.
    #[error("response payload is absent")]
    AbsentPayload,

    /// Payload bytes exist but do not contain a message.
    #[error("malformed response payload: {0}")]
    Malformed(String),

    /// Message could not be converted to or from JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ProtocolError {
    /// True for the input-format class of failures: every variant except an
    /// absent payload reference.
    pub fn is_format_error(&self) -> bool {
        !matches!(self, ProtocolError::AbsentPayload)
    }
}

/// Trait for converting driver messages to and from wire bytes.
pub trait MessageSerializer: Send + Sync {
    /// Content type emitted and accepted by this serializer.
    fn mime_type(&self) -> &str;

    fn serialize_request(&self, request: &RequestMessage) -> Result<Vec<u8>, ProtocolError>;

    /// Decode a server response. `None` models a payload reference that was
    /// never produced, as opposed to empty or garbled bytes; the two reject
    /// with different error classes.
    fn deserialize_response(
        &self,
        payload: Option<&[u8]>,
    ) -> Result<ResponseMessage, ProtocolError>;
}

/// Serializer carrying messages as UTF-8 JSON in the GraphSON 3.0 envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphSonMessageSerializer;

impl MessageSerializer for GraphSonMessageSerializer {
    fn mime_type(&self) -> &str {
        GRAPHSON_V3_MIME_TYPE
    }

    fn serialize_request(&self, request: &RequestMessage) -> Result<Vec<u8>, ProtocolError> {
        debug!(
            "serializing request {} (op={})",
            request.request_id, request.op
        );
        Ok(serde_json::to_vec(request)?)
    }

    fn deserialize_response(
        &self,
        payload: Option<&[u8]>,
    ) -> Result<ResponseMessage, ProtocolError> {
        let bytes = payload.ok_or(ProtocolError::AbsentPayload)?;
        if bytes.is_empty() {
            warn!("rejecting zero-length response payload");
            return Err(ProtocolError::Malformed("zero-length payload".to_string()));
        }

        let text = std::str::from_utf8(bytes)
            .map_err(|e| ProtocolError::Malformed(format!("payload is not UTF-8: {e}")))?;
        if text.trim() == "null" {
            warn!("rejecting null-token response payload");
            return Err(ProtocolError::Malformed(
                "payload is the null token".to_string(),
            ));
        }

        let message: ResponseMessage = serde_json::from_str(text)?;
        debug!(
            "deserialized response for {:?} (code={})",
            message.request_id, message.status.code
        );
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{args, ops, SUCCESS};
    use uuid::Uuid;

    const RESPONSE_JSON: &str = r#"{
        "requestId": "41d2e28a-20a4-4ab0-b379-d810dede3786",
        "status": { "code": 200, "message": "", "attributes": {} },
        "result": { "data": [1, 2, 3], "meta": {} }
    }"#;

    // =========================================================================
    // Round trips
    // =========================================================================

    #[test]
    fn test_serialize_request_produces_wire_fields() {
        let request = RequestMessage::build(ops::EVAL)
            .add(args::GREMLIN, "g.V()")
            .create();

        let bytes = GraphSonMessageSerializer
            .serialize_request(&request)
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["op"], "eval");
        assert_eq!(json["processor"], "");
        assert_eq!(json["args"]["gremlin"], "g.V()");
        assert_eq!(
            json["requestId"].as_str().unwrap(),
            request.request_id.to_string()
        );
    }

    #[test]
    fn test_deserialize_well_formed_response() {
        let response = GraphSonMessageSerializer
            .deserialize_response(Some(RESPONSE_JSON.as_bytes()))
            .unwrap();

        assert_eq!(
            response.request_id,
            Some(Uuid::parse_str("41d2e28a-20a4-4ab0-b379-d810dede3786").unwrap())
        );
        assert_eq!(response.status.code, SUCCESS);
        assert!(response.status.is_success());
        assert_eq!(response.result.data, serde_json::json!([1, 2, 3]));
    }

    // =========================================================================
    // Failure taxonomy
    // =========================================================================

    #[test]
    fn test_absent_payload_is_its_own_class() {
        let err = GraphSonMessageSerializer
            .deserialize_response(None)
            .unwrap_err();

        assert!(matches!(err, ProtocolError::AbsentPayload));
        assert!(!err.is_format_error());
    }

    #[test]
    fn test_empty_bytes_are_a_format_error() {
        let err = GraphSonMessageSerializer
            .deserialize_response(Some(&[]))
            .unwrap_err();

        assert!(matches!(err, ProtocolError::Malformed(_)));
        assert!(err.is_format_error());
    }

    #[test]
    fn test_empty_string_payload_is_a_format_error() {
        let err = GraphSonMessageSerializer
            .deserialize_response(Some("".as_bytes()))
            .unwrap_err();

        assert!(matches!(err, ProtocolError::Malformed(_)));
        assert!(err.is_format_error());
    }

    #[test]
    fn test_null_token_payload_is_a_format_error() {
        let err = GraphSonMessageSerializer
            .deserialize_response(Some("null".as_bytes()))
            .unwrap_err();

        assert!(matches!(err, ProtocolError::Malformed(_)));
        assert!(err.is_format_error());
    }

    #[test]
    fn test_invalid_json_is_a_format_error() {
        let err = GraphSonMessageSerializer
            .deserialize_response(Some(b"{\"status\": "))
            .unwrap_err();

        assert!(matches!(err, ProtocolError::Json(_)));
        assert!(err.is_format_error());
    }

    #[test]
    fn test_invalid_utf8_is_a_format_error() {
        let err = GraphSonMessageSerializer
            .deserialize_response(Some(&[0xff, 0xfe, 0xfd]))
            .unwrap_err();

        assert!(matches!(err, ProtocolError::Malformed(_)));
        assert!(err.is_format_error());
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(
            GraphSonMessageSerializer.mime_type(),
            "application/vnd.gremlin-v3.0+json"
        );
    }
}
