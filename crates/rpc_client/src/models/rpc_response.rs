// Copyright (C) 2018-2025 The monero-rpc Authors.
//
// rpc_response.rs file belongs to the monero-rpc project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::rpc_error::RpcError;
use serde_json::{Map, Value};

/// RPC response envelope
///
/// `result` is `Some(Value::Null)` when the server sent `"result": null`
/// and `None` when the member is missing altogether.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcResponse {
    pub result: Option<Value>,
    pub error: Option<Value>,
    pub id: Option<Value>,
}

impl RpcResponse {
    /// Parses a response body. Numbers keep their exact text.
    pub fn from_body(body: &str) -> Result<Self, RpcError> {
        let json: Value = serde_json::from_str(body).map_err(|err| {
            RpcError::decode(format!("response is not valid JSON: {err}")).with_source(err)
        })?;

        match json {
            Value::Object(obj) => Ok(Self::from_json(obj)),
            other => Err(RpcError::decode(format!(
                "expected a JSON-RPC response object, found {other}"
            ))),
        }
    }

    pub fn from_json(mut obj: Map<String, Value>) -> Self {
        Self {
            result: obj.remove("result"),
            error: obj.remove("error").filter(|error| !error.is_null()),
            id: obj.remove("id"),
        }
    }

    /// Unwraps the result, turning `error` or a missing `result` into an
    /// [`RpcError`].
    pub fn into_result(self) -> Result<Value, RpcError> {
        if let Some(error) = self.error {
            return Err(RpcError::remote(error));
        }
        self.result.ok_or_else(RpcError::missing_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc_error::RpcErrorKind;
    use serde_json::json;

    #[test]
    fn null_error_with_result_is_success() {
        let response =
            RpcResponse::from_body(r#"{"id":"0","jsonrpc":"2.0","error":null,"result":{"count":993163}}"#)
                .unwrap();
        assert_eq!(response.into_result().unwrap(), json!({"count": 993163}));
    }

    #[test]
    fn explicit_null_result_is_returned() {
        let response = RpcResponse::from_body(r#"{"id":1,"result":null}"#).unwrap();
        assert_eq!(response.into_result().unwrap(), Value::Null);
    }

    #[test]
    fn empty_object_is_missing_result() {
        let err = RpcResponse::from_body("{}").unwrap().into_result().unwrap_err();
        assert_eq!(err.kind(), RpcErrorKind::MissingResult);
        assert_eq!(err.code(), Some(-343));
    }

    #[test]
    fn error_wins_over_result() {
        let err = RpcResponse::from_body(
            r#"{"id":1,"result":{},"error":{"code":-32601,"message":"Method not found"}}"#,
        )
        .unwrap()
        .into_result()
        .unwrap_err();
        assert_eq!(err.kind(), RpcErrorKind::Remote);
        assert_eq!(err.code(), Some(-32601));
        assert_eq!(err.message, "Method not found");
    }

    #[test]
    fn non_object_bodies_fail_to_decode() {
        for body in ["[]", "\"ok\"", "not json", "{\"result\":"] {
            let err = RpcResponse::from_body(body).unwrap_err();
            assert_eq!(err.kind(), RpcErrorKind::Decode, "{body}");
        }
    }
}
