// Copyright (C) 2018-2025 The monero-rpc Authors.
//
// rpc_request.rs file belongs to the monero-rpc project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::rpc_error::RpcError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC protocol version sent with every request
pub const JSON_RPC_VERSION: &str = "2.0";

/// RPC request envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    /// JSON-RPC version
    #[serde(rename = "jsonrpc")]
    pub json_rpc: String,

    /// Method name
    pub method: String,

    /// Method parameters, an object or an array
    pub params: Value,

    /// Request ID
    pub id: u64,
}

impl RpcRequest {
    /// Creates a new RPC request
    pub fn new(id: u64, method: impl Into<String>, params: Value) -> Self {
        Self {
            json_rpc: JSON_RPC_VERSION.to_string(),
            method: method.into(),
            params,
            id,
        }
    }

    /// Serializes the envelope into the request body.
    pub fn to_body(&self) -> Result<String, RpcError> {
        serde_json::to_string(self).map_err(RpcError::encode)
    }
}
