// Copyright (C) 2018-2025 The monero-rpc Authors.
//
// session.rs file belongs to the monero-rpc project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::auth::DigestAuth;
use crate::endpoint::Endpoint;
use crate::rpc_error::RpcError;
use crate::LOG_TARGET;
use reqwest::blocking::{Client, Response};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::StatusCode;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// User agent sent with every request
pub const USER_AGENT: &str = "AuthServiceProxy/0.1";

/// Per-call timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Persistent HTTP context shared by every proxy derived from one root.
///
/// Holds the pooled HTTP client, the credential-free request URL, the
/// optional Digest authenticator and the call-id counter of the family.
pub struct RpcSession {
    endpoint: Endpoint,
    rpc_url: Url,
    client: Client,
    timeout: Duration,
    auth: Option<DigestAuth>,
    id_counter: AtomicU64,
}

impl RpcSession {
    /// Opens a session for `endpoint`. No request is sent.
    pub fn connect(endpoint: Endpoint, timeout: Duration) -> Result<Arc<Self>, RpcError> {
        let rpc_url = endpoint.rpc_url()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
        headers.insert(
            header::HOST,
            HeaderValue::from_str(endpoint.host())
                .map_err(|err| RpcError::invalid_endpoint(endpoint.host(), err))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(RpcError::transport)?;

        let auth = endpoint.credentials().cloned().map(DigestAuth::new);
        if let Some(auth) = &auth {
            debug!(target: LOG_TARGET, user = auth.username(), "digest authentication enabled");
        }

        Ok(Arc::new(Self {
            endpoint,
            rpc_url,
            client,
            timeout,
            auth,
            id_counter: AtomicU64::new(0),
        }))
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn has_auth(&self) -> bool {
        self.auth.is_some()
    }

    /// Reserves the next call id. The first id handed out is 1.
    pub fn next_id(&self) -> u64 {
        self.id_counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The most recently reserved call id, 0 before the first call.
    pub fn last_id(&self) -> u64 {
        self.id_counter.load(Ordering::SeqCst)
    }

    /// POSTs `body` to the request URL.
    ///
    /// A 401 carrying a Digest challenge is answered once; any other
    /// response is handed back as is for the caller to validate.
    pub fn post(&self, body: &str) -> Result<Response, RpcError> {
        let response = self.send(body)?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        let Some(auth) = &self.auth else {
            return Ok(response);
        };
        if !auth.accept_challenge(response.headers())? {
            return Ok(response);
        }

        debug!(target: LOG_TARGET, url = %self.rpc_url, "answering digest challenge");
        self.send(body)
    }

    fn send(&self, body: &str) -> Result<Response, RpcError> {
        let mut request = self
            .client
            .post(self.rpc_url.clone())
            .timeout(self.timeout)
            .body(body.to_owned());

        if let Some(auth) = &self.auth {
            if let Some(value) = auth.authorization(self.rpc_url.path(), body.as_bytes())? {
                request = request.header(header::AUTHORIZATION, value);
            }
        }

        request.send().map_err(RpcError::transport)
    }
}

impl std::fmt::Debug for RpcSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcSession")
            .field("rpc_url", &self.rpc_url.as_str())
            .field("timeout", &self.timeout)
            .field("auth", &self.auth)
            .field("last_id", &self.last_id())
            .finish()
    }
}
