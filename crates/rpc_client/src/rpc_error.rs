// Copyright (C) 2018-2025 The monero-rpc Authors.
//
// rpc_error.rs file belongs to the monero-rpc project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde_json::{json, Map, Value};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Code used when the server answered without a readable body.
pub const EMPTY_BODY_CODE: i64 = -342;
/// Code used when the response carries neither `error` nor `result`.
pub const MISSING_RESULT_CODE: i64 = -343;
/// Code used when the server answered with a non-success HTTP status.
pub const HTTP_STATUS_CODE: i64 = -344;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Failure domain of an [`RpcError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcErrorKind {
    /// The server answered with a non-null `error` member.
    Remote,
    /// The response had no `error` and no `result`.
    MissingResult,
    /// The response body was empty or unreadable.
    EmptyBody,
    /// The HTTP status was outside the success range.
    HttpStatus,
    /// The transport could not connect.
    Connection,
    /// The round trip exceeded the configured timeout.
    Timeout,
    /// Any other transport level fault.
    Transport,
    /// The body was not a JSON-RPC response object.
    Decode,
    /// The call parameters could not be encoded as JSON.
    Encode,
    /// The endpoint URL is malformed.
    InvalidEndpoint,
    /// The bound method name is empty or reserved.
    InvalidMethod,
    /// The Digest challenge could not be answered.
    Auth,
    /// A batch description is malformed.
    InvalidBatch,
}

/// The single error type returned by every proxy operation.
///
/// `error` holds the raw error payload: the server's `error` member for
/// [`RpcErrorKind::Remote`], or a synthesized `{code, message}` object for
/// locally detected failures.
#[derive(Error, Debug)]
pub struct RpcError {
    /// Failure domain
    pub kind: RpcErrorKind,

    /// Numeric error code, absent for message-only failures
    pub code: Option<i64>,

    /// Error message
    pub message: String,

    /// Raw error payload
    pub error: Value,

    #[source]
    source: Option<BoxError>,
}

impl RpcError {
    /// Creates an error with a synthesized payload.
    pub fn new(kind: RpcErrorKind, code: Option<i64>, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut payload = Map::new();
        if let Some(code) = code {
            payload.insert("code".to_string(), json!(code));
        }
        payload.insert("message".to_string(), Value::String(message.clone()));

        Self {
            kind,
            code,
            message,
            error: Value::Object(payload),
            source: None,
        }
    }

    /// Wraps the `error` member of a server response.
    pub fn remote(payload: Value) -> Self {
        let code = payload.get("code").and_then(Value::as_i64);
        let message = match &payload {
            Value::Object(obj) => obj
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_default(),
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };

        Self {
            kind: RpcErrorKind::Remote,
            code,
            message,
            error: payload,
            source: None,
        }
    }

    pub fn missing_result() -> Self {
        Self::new(
            RpcErrorKind::MissingResult,
            Some(MISSING_RESULT_CODE),
            "missing JSON-RPC result",
        )
    }

    pub fn empty_body() -> Self {
        Self::new(
            RpcErrorKind::EmptyBody,
            Some(EMPTY_BODY_CODE),
            "missing HTTP response from server",
        )
    }

    pub fn http_status(status: reqwest::StatusCode) -> Self {
        Self::new(
            RpcErrorKind::HttpStatus,
            Some(HTTP_STATUS_CODE),
            format!("received HTTP status code {}", status.as_u16()),
        )
    }

    /// Classifies a transport failure. The transport error itself is only
    /// reachable through [`StdError::source`].
    pub fn transport(err: reqwest::Error) -> Self {
        let (kind, message) = if err.is_timeout() {
            (
                RpcErrorKind::Timeout,
                format!("connection timeout, original error: {err}"),
            )
        } else if err.is_connect() {
            (
                RpcErrorKind::Connection,
                format!("could not establish a connection, original error: {err}"),
            )
        } else {
            (
                RpcErrorKind::Transport,
                format!("request failed, original error: {err}"),
            )
        };
        Self::new(kind, None, message).with_source(err)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(RpcErrorKind::Decode, None, message)
    }

    pub fn encode(err: serde_json::Error) -> Self {
        Self::new(
            RpcErrorKind::Encode,
            None,
            format!("params are not JSON serializable: {err}"),
        )
        .with_source(err)
    }

    pub fn invalid_endpoint(url: &str, reason: impl fmt::Display) -> Self {
        Self::new(
            RpcErrorKind::InvalidEndpoint,
            None,
            format!("invalid endpoint '{url}': {reason}"),
        )
    }

    pub fn invalid_method(name: &str) -> Self {
        Self::new(
            RpcErrorKind::InvalidMethod,
            None,
            format!("invalid RPC method name '{name}'"),
        )
    }

    pub fn auth(reason: impl fmt::Display) -> Self {
        Self::new(
            RpcErrorKind::Auth,
            None,
            format!("digest authentication failed: {reason}"),
        )
    }

    /// Attaches the underlying cause.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> RpcErrorKind {
        self.kind
    }

    pub fn code(&self) -> Option<i64> {
        self.code
    }

    /// True for failures raised before a usable HTTP response existed.
    pub fn is_transport(&self) -> bool {
        matches!(
            self.kind,
            RpcErrorKind::Connection | RpcErrorKind::Timeout | RpcErrorKind::Transport
        )
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}: {}", code, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_takes_code_and_message_from_payload() {
        let err = RpcError::remote(json!({"code": -13, "message": "No wallet file"}));
        assert_eq!(err.kind(), RpcErrorKind::Remote);
        assert_eq!(err.code(), Some(-13));
        assert_eq!(err.message, "No wallet file");
        assert_eq!(err.to_string(), "-13: No wallet file");
    }

    #[test]
    fn remote_error_keeps_non_object_payload() {
        let err = RpcError::remote(json!("dummy error"));
        assert_eq!(err.error, json!("dummy error"));
        assert_eq!(err.code(), None);
        assert_eq!(err.to_string(), "dummy error");
    }

    #[test]
    fn local_errors_carry_reserved_codes() {
        assert_eq!(RpcError::empty_body().code(), Some(-342));
        assert_eq!(RpcError::missing_result().code(), Some(-343));

        let status = RpcError::http_status(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(status.code(), Some(-344));
        assert!(status.message.contains("404"));
        assert_eq!(status.error["code"], json!(-344));
    }

    #[test]
    fn message_only_errors_have_no_code() {
        let err = RpcError::invalid_method("");
        assert_eq!(err.code(), None);
        assert!(err.error.get("code").is_none());
        assert!(!err.is_transport());
    }
}
