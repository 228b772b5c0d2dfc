//! RPC commands exposed by the CLI

pub mod batch;
pub mod call;

use crate::args::Command;
use anyhow::Context;
use monero_rpc_client::RpcProxy;
use serde_json::Value;

/// Outcome of a command: the JSON to print
pub type CommandResult = anyhow::Result<Value>;

/// Runs `command` against `client`.
pub fn execute(client: &RpcProxy, command: &Command) -> CommandResult {
    match command {
        Command::Call { method, params } => {
            let params = params.as_deref().map(parse_json).transpose()?;
            call::execute(client, method, params)
        }
        Command::Batch { calls } => batch::execute(client, &parse_json(calls)?),
    }
}

/// Parses a command-line JSON argument, keeping numbers as written.
pub fn parse_json(text: &str) -> anyhow::Result<Value> {
    serde_json::from_str(text).with_context(|| format!("invalid JSON argument: {text}"))
}
