//! Request and response envelopes of the server wire protocol.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Operation names understood by the server.
pub mod ops {
    pub const EVAL: &str = "eval";
    pub const BYTECODE: &str = "bytecode";
    pub const AUTHENTICATION: &str = "authentication";
    pub const CLOSE: &str = "close";
}

/// Well-known argument keys.
pub mod args {
    pub const GREMLIN: &str = "gremlin";
    pub const LANGUAGE: &str = "language";
    pub const BINDINGS: &str = "bindings";
    pub const ALIASES: &str = "aliases";
    pub const BATCH_SIZE: &str = "batchSize";
}

pub const SUCCESS: u16 = 200;
pub const NO_CONTENT: u16 = 204;
pub const PARTIAL_CONTENT: u16 = 206;
pub const UNAUTHORIZED: u16 = 401;
pub const AUTHENTICATE: u16 = 407;
pub const SERVER_ERROR: u16 = 500;
pub const SCRIPT_EVALUATION_ERROR: u16 = 597;

/// A single operation submitted to the server.
///
/// Assemble one through [`RequestMessage::build`]; the request id defaults
/// to a fresh random UUID unless pinned with
/// [`RequestMessageBuilder::override_request_id`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestMessage {
    #[serde(rename = "requestId")]
    pub request_id: Uuid,
    pub op: String,
    pub processor: String,
    pub args: BTreeMap<String, Value>,
}

impl RequestMessage {
    /// Start building a message for the given operation.
    pub fn build(op: impl Into<String>) -> RequestMessageBuilder {
        RequestMessageBuilder {
            op: op.into(),
            processor: String::new(),
            request_id: None,
            args: BTreeMap::new(),
        }
    }

    /// Value of an argument, if one was attached under this key.
    pub fn optional_args(&self, key: &str) -> Option<&Value> {
        self.args.get(key)
    }
}

/// Builder for [`RequestMessage`].
#[derive(Debug, Clone)]
pub struct RequestMessageBuilder {
    op: String,
    processor: String,
    request_id: Option<Uuid>,
    args: BTreeMap<String, Value>,
}

impl RequestMessageBuilder {
    /// Route the operation to a named op processor. The server's standard
    /// processor is the empty name, which is the default.
    pub fn processor(mut self, processor: impl Into<String>) -> Self {
        self.processor = processor.into();
        self
    }

    /// Pin the request id instead of generating a random one.
    pub fn override_request_id(mut self, request_id: Uuid) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Attach one argument. The last value wins on repeated keys.
    pub fn add(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    pub fn create(self) -> RequestMessage {
        RequestMessage {
            request_id: self.request_id.unwrap_or_else(Uuid::new_v4),
            op: self.op,
            processor: self.processor,
            args: self.args,
        }
    }
}

/// Server reply to a single request.
///
/// A streamed result arrives as several messages sharing one request id,
/// all but the last carrying [`PARTIAL_CONTENT`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMessage {
    #[serde(rename = "requestId")]
    pub request_id: Option<Uuid>,
    pub status: ResponseStatus,
    #[serde(default)]
    pub result: ResponseResult,
}

/// Outcome portion of a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseStatus {
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
}

impl ResponseStatus {
    pub fn is_success(&self) -> bool {
        matches!(self.code, SUCCESS | NO_CONTENT | PARTIAL_CONTENT)
    }
}

/// Data portion of a response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseResult {
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub meta: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Request building
    // =========================================================================

    #[test]
    fn test_build_applies_defaults() {
        let request = RequestMessage::build(ops::EVAL).create();

        assert_eq!(request.op, "eval");
        assert_eq!(request.processor, "");
        assert!(request.args.is_empty());
    }

    #[test]
    fn test_build_generates_distinct_request_ids() {
        let first = RequestMessage::build(ops::EVAL).create();
        let second = RequestMessage::build(ops::EVAL).create();

        assert_ne!(first.request_id, second.request_id);
    }

    #[test]
    fn test_override_request_id() {
        let id = Uuid::new_v4();
        let request = RequestMessage::build(ops::EVAL)
            .override_request_id(id)
            .create();

        assert_eq!(request.request_id, id);
    }

    #[test]
    fn test_custom_processor() {
        let request = RequestMessage::build(ops::EVAL)
            .processor("session")
            .create();

        assert_eq!(request.processor, "session");
    }

    #[test]
    fn test_add_collects_args() {
        let request = RequestMessage::build(ops::EVAL)
            .add(args::GREMLIN, "g.V()")
            .add(args::LANGUAGE, "gremlin-groovy")
            .create();

        assert_eq!(
            request.optional_args(args::GREMLIN),
            Some(&Value::String("g.V()".to_string()))
        );
        assert_eq!(
            request.optional_args(args::LANGUAGE),
            Some(&Value::String("gremlin-groovy".to_string()))
        );
        assert_eq!(request.optional_args("missing"), None);
    }

    #[test]
    fn test_add_last_value_wins() {
        let request = RequestMessage::build(ops::EVAL)
            .add(args::GREMLIN, "g.V()")
            .add(args::GREMLIN, "g.E()")
            .create();

        assert_eq!(
            request.optional_args(args::GREMLIN),
            Some(&Value::String("g.E()".to_string()))
        );
    }

    // =========================================================================
    // Response structure
    // =========================================================================

    #[test]
    fn test_status_success_codes() {
        for code in [SUCCESS, NO_CONTENT, PARTIAL_CONTENT] {
            let status = ResponseStatus {
                code,
                message: String::new(),
                attributes: BTreeMap::new(),
            };
            assert!(status.is_success(), "code {} should be success", code);
        }

        let failed = ResponseStatus {
            code: SERVER_ERROR,
            message: "boom".to_string(),
            attributes: BTreeMap::new(),
        };
        assert!(!failed.is_success());
    }

    #[test]
    fn test_response_parses_minimal_json() {
        let json = r#"{"status":{"code":204},"result":{}}"#;
        let response: ResponseMessage = serde_json::from_str(json).unwrap();

        assert_eq!(response.request_id, None);
        assert_eq!(response.status.code, NO_CONTENT);
        assert_eq!(response.result.data, Value::Null);
        assert!(response.result.meta.is_empty());
    }
}
