// Copyright (C) 2018-2025 The monero-rpc Authors.
//
// batch.rs file belongs to the monero-rpc project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::rpc_error::{RpcError, RpcErrorKind};
use serde_json::Value;

/// One entry of a sequential batch, see [`RpcProxy::batch_call`].
///
/// [`RpcProxy::batch_call`]: crate::RpcProxy::batch_call
#[derive(Debug, Clone, PartialEq)]
pub struct BatchCall {
    pub method: String,
    pub params: Option<Value>,
}

impl BatchCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            params: None,
        }
    }

    pub fn with_params(method: impl Into<String>, params: Value) -> Self {
        Self {
            method: method.into(),
            params: Some(params),
        }
    }

    /// Reads the array-of-arrays batch form:
    /// `[["get_balance"], ["get_balance", {"account_index": 0}]]`.
    ///
    /// Elements after the params of an entry are ignored.
    pub fn from_json(value: &Value) -> Result<Vec<Self>, RpcError> {
        let entries = value
            .as_array()
            .ok_or_else(|| invalid_batch(format!("expected an array of calls, found {value}")))?;

        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let parts = entry.as_array().ok_or_else(|| {
                    invalid_batch(format!("call #{index} is not an array: {entry}"))
                })?;
                let method = parts.first().and_then(Value::as_str).ok_or_else(|| {
                    invalid_batch(format!("call #{index} has no method name: {entry}"))
                })?;
                Ok(Self {
                    method: method.to_string(),
                    params: parts.get(1).cloned(),
                })
            })
            .collect()
    }
}

fn invalid_batch(message: String) -> RpcError {
    RpcError::new(RpcErrorKind::InvalidBatch, None, message)
}

impl From<&str> for BatchCall {
    fn from(method: &str) -> Self {
        Self::new(method)
    }
}

impl From<String> for BatchCall {
    fn from(method: String) -> Self {
        Self::new(method)
    }
}

impl<M: Into<String>> From<(M, Value)> for BatchCall {
    fn from((method, params): (M, Value)) -> Self {
        Self::with_params(method, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_array_of_arrays() {
        let calls = BatchCall::from_json(&json!([
            ["get_balance"],
            ["get_balance", {"account_index": 0, "address_indices": [0, 1]}],
            ["transfer", {"mixin": 10}, "ignored"]
        ]))
        .unwrap();

        assert_eq!(
            calls,
            vec![
                BatchCall::new("get_balance"),
                BatchCall::with_params(
                    "get_balance",
                    json!({"account_index": 0, "address_indices": [0, 1]})
                ),
                BatchCall::with_params("transfer", json!({"mixin": 10})),
            ]
        );
    }

    #[test]
    fn rejects_malformed_entries() {
        for value in [
            json!({"method": "get_balance"}),
            json!(["get_balance"]),
            json!([[]]),
            json!([[42, {}]]),
        ] {
            let err = BatchCall::from_json(&value).unwrap_err();
            assert_eq!(err.kind(), RpcErrorKind::InvalidBatch, "{value}");
        }
    }

    #[test]
    fn conversions() {
        assert_eq!(BatchCall::from("get_info"), BatchCall::new("get_info"));
        assert_eq!(
            BatchCall::from(("on_get_block_hash", json!([2]))),
            BatchCall::with_params("on_get_block_hash", json!([2]))
        );
    }
}
