// Copyright (C) 2018-2025 The monero-rpc Authors.
//
// auth.rs file belongs to the monero-rpc project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::endpoint::Credentials;
use crate::rpc_error::RpcError;
use digest_auth::{AuthContext, WwwAuthenticateHeader};
use parking_lot::Mutex;
use reqwest::header::{HeaderMap, HeaderValue, WWW_AUTHENTICATE};
use std::fmt;

/// HTTP Digest authentication shared by a session.
///
/// The last challenge is cached so later requests answer it up front and
/// only a stale nonce costs an extra round trip. The nonce count inside the
/// cached challenge advances with every answer.
pub struct DigestAuth {
    credentials: Credentials,
    challenge: Mutex<Option<WwwAuthenticateHeader>>,
}

impl DigestAuth {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            challenge: Mutex::new(None),
        }
    }

    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    pub fn has_challenge(&self) -> bool {
        self.challenge.lock().is_some()
    }

    /// Answers the cached challenge for a POST of `body` to `uri`.
    ///
    /// Returns `None` until a challenge has been seen.
    pub fn authorization(&self, uri: &str, body: &[u8]) -> Result<Option<HeaderValue>, RpcError> {
        let mut challenge = self.challenge.lock();
        let Some(prompt) = challenge.as_mut() else {
            return Ok(None);
        };

        let context = AuthContext::new_post(
            self.credentials.username.as_str(),
            self.credentials.password.as_str(),
            uri,
            Some(body),
        );
        let answer = prompt.respond(&context).map_err(RpcError::auth)?;
        HeaderValue::from_str(&answer.to_header_string())
            .map(Some)
            .map_err(RpcError::auth)
    }

    /// Caches the Digest challenge of a 401 response.
    ///
    /// Returns `false` when the response offers no Digest challenge.
    pub fn accept_challenge(&self, headers: &HeaderMap) -> Result<bool, RpcError> {
        let Some(raw) = headers
            .get_all(WWW_AUTHENTICATE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find(|value| value.trim_start().starts_with("Digest"))
        else {
            return Ok(false);
        };

        let prompt = digest_auth::parse(raw).map_err(RpcError::auth)?;
        *self.challenge.lock() = Some(prompt);
        Ok(true)
    }
}

impl fmt::Debug for DigestAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestAuth")
            .field("username", &self.credentials.username)
            .field("challenged", &self.has_challenge())
            .finish()
    }
}
