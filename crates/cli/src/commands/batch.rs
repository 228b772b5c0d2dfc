//! Batch command - invokes several methods in sequence

use super::CommandResult;
use monero_rpc_client::{BatchCall, RpcProxy};
use serde_json::Value;

pub fn execute(client: &RpcProxy, calls: &Value) -> CommandResult {
    let calls = BatchCall::from_json(calls)?;
    let results = client.batch_call(calls)?;

    Ok(Value::Array(results))
}
