// Copyright (C) 2018-2025 The monero-rpc Authors.
//
// endpoint.rs file belongs to the monero-rpc project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::rpc_error::RpcError;
use percent_encoding::percent_decode_str;
use std::fmt;
use url::Url;

/// Port used when the endpoint URL does not name one, whatever the scheme.
pub const DEFAULT_PORT: u16 = 80;

/// Username and password for Digest authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Parsed connection target: `scheme://[user[:pass]@]host[:port]/path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    scheme: String,
    host: String,
    port: u16,
    path: String,
    credentials: Option<Credentials>,
}

impl Endpoint {
    /// Parses an absolute endpoint URL.
    pub fn parse(input: &str) -> Result<Self, RpcError> {
        let url = Url::parse(input).map_err(|err| RpcError::invalid_endpoint(input, err))?;
        let host = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| RpcError::invalid_endpoint(input, "missing host"))?
            .to_string();

        // `Url` drops a port equal to the scheme default, so look at the
        // authority text to tell "absent" from "written out".
        let port = match url.port() {
            Some(port) => port,
            None if has_explicit_port(input) => url.port_or_known_default().unwrap_or(DEFAULT_PORT),
            None => DEFAULT_PORT,
        };

        let credentials = match (url.username(), url.password()) {
            ("", _) | (_, None) => None,
            (user, Some(pass)) => Some(Credentials {
                username: decode_userinfo(user),
                password: decode_userinfo(pass),
            }),
        };

        Ok(Self {
            scheme: url.scheme().to_string(),
            host,
            port,
            path: url.path().to_string(),
            credentials,
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// The URL requests are posted to. Credentials are never part of it.
    pub fn rpc_url(&self) -> Result<Url, RpcError> {
        let rendered = format!("{}://{}:{}{}", self.scheme, self.host, self.port, self.path);
        Url::parse(&rendered).map_err(|err| RpcError::invalid_endpoint(&rendered, err))
    }
}

fn decode_userinfo(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

fn has_explicit_port(input: &str) -> bool {
    let Some((_, rest)) = input.split_once("://") else {
        return false;
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);
    let after_host = match host_port.rfind(']') {
        Some(idx) => &host_port[idx + 1..],
        None => host_port,
    };
    after_host
        .rsplit_once(':')
        .map_or(false, |(_, port)| !port.is_empty())
}
