//! monero-rpc CLI Library
//!
//! Command-line front end for the `monero-rpc-client` proxy: argument
//! parsing, TOML configuration and the call/batch commands.

pub mod args;
pub mod commands;
pub mod config;

/// Tracing target shared with the client library
pub use monero_rpc_client::LOG_TARGET;
