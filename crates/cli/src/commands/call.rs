//! Call command - invokes a single method

use super::CommandResult;
use monero_rpc_client::RpcProxy;
use serde_json::Value;

pub fn execute(client: &RpcProxy, method: &str, params: Option<Value>) -> CommandResult {
    let proxy = client.bind(method);
    let result = match params {
        Some(params) => proxy.invoke_with(&params)?,
        None => proxy.invoke()?,
    };

    Ok(result)
}
