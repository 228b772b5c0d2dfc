// Copyright (C) 2018-2025 The monero-rpc Authors.
//
// lib.rs file belongs to the monero-rpc project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Monero RPC Client Library
//!
//! A JSON-RPC 2.0 client for `monerod` and `monero-wallet-rpc`. A single
//! [`RpcProxy`] stands in for any remote method name, reuses one HTTP
//! connection for the whole proxy family, answers Digest challenges, and
//! keeps decimal amounts exact in both directions.

mod auth;
mod batch;
pub mod decimal;
mod endpoint;
pub mod models;
mod proxy;
mod rpc_error;
mod session;

/// Tracing target of every event the client emits
pub const LOG_TARGET: &str = "monero_rpc";

pub use auth::DigestAuth;
pub use batch::BatchCall;
pub use decimal::JsonDecimal;
pub use endpoint::{Credentials, Endpoint, DEFAULT_PORT};
pub use proxy::RpcProxy;
pub use rpc_error::{
    RpcError, RpcErrorKind, EMPTY_BODY_CODE, HTTP_STATUS_CODE, MISSING_RESULT_CODE,
};
pub use session::{RpcSession, DEFAULT_TIMEOUT, USER_AGENT};

// Re-export commonly used types
pub use models::{RpcRequest, RpcResponse};
// Plain `Decimal` has no serde support here; wrap amounts in `JsonDecimal`.
pub use rust_decimal::Decimal;
