//! RPC router and stdio loop
//!
//! One JSON-RPC request per input line, one response per output line.
//! Notifications are executed but never answered.

use clickup_core::{RpcRequest, RpcResponse, INVALID_PARAMS};
use clickup_tools::ToolRegistry;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

pub const SERVER_NAME: &str = "clickup-mcp";
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Result type for RPC handlers.
pub type RpcResult = Result<Value, (i32, String)>;

/// Route an RPC method call to the appropriate handler. `None` for an unknown method.
pub async fn route_rpc(method: &str, params: Value, registry: &ToolRegistry) -> Option<RpcResult> {
    let result = match method {
        "initialize" => Ok(handle_initialize()),
        "tools/list" => Ok(handle_tools_list(registry)),
        "tools/call" => handle_tools_call(params, registry).await,
        "ping" => Ok(json!({})),
        _ => return None,
    };
    Some(result)
}

/// Handle one input line. `None` means nothing should be written back.
pub async fn handle_line(line: &str, registry: &ToolRegistry) -> Option<RpcResponse> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let request: RpcRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            warn!("Unparseable request line: {}", e);
            return Some(RpcResponse::parse_error(format!("Parse error: {}", e)));
        }
    };

    debug!(method = %request.method, "rpc request");
    let notification = request.is_notification();
    let outcome = route_rpc(&request.method, request.params, registry).await;
    if notification {
        return None;
    }

    let id = request.id.unwrap_or(Value::Null);
    Some(match outcome {
        Some(Ok(value)) => RpcResponse::ok(id, value),
        Some(Err((code, message))) => RpcResponse::err(id, code, message),
        None => {
            warn!(method = %request.method, "unknown method");
            RpcResponse::method_not_found(id, &request.method)
        }
    })
}

/// Serve requests from `reader` until EOF, writing responses to `writer`.
pub async fn serve<R, W>(reader: R, mut writer: W, registry: &ToolRegistry) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!(tools = registry.list().len(), "{} listening on stdio", SERVER_NAME);
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if let Some(response) = handle_line(&line, registry).await {
            let mut out = serde_json::to_string(&response)?;
            out.push('\n');
            writer.write_all(out.as_bytes()).await?;
            writer.flush().await?;
        }
    }

    info!("stdin closed, shutting down");
    Ok(())
}

// ---------------------------------------------------------------------------
// initialize
// ---------------------------------------------------------------------------

fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        },
        "capabilities": {
            "tools": {}
        }
    })
}

// ---------------------------------------------------------------------------
// tools/list
// ---------------------------------------------------------------------------

fn handle_tools_list(registry: &ToolRegistry) -> Value {
    json!({ "tools": registry.get_definitions() })
}

// ---------------------------------------------------------------------------
// tools/call: a failing tool is still a successful RPC, flagged with isError
// ---------------------------------------------------------------------------

async fn handle_tools_call(params: Value, registry: &ToolRegistry) -> RpcResult {
    let name = params["name"]
        .as_str()
        .ok_or_else(|| (INVALID_PARAMS, "Missing required param: name".to_string()))?;
    let arguments = match params.get("arguments") {
        None | Some(Value::Null) => json!({}),
        Some(args) if args.is_object() => args.clone(),
        Some(_) => return Err((INVALID_PARAMS, "arguments must be an object".to_string())),
    };

    info!(tool = name, "tools/call");
    let result = registry.execute(name, arguments).await;

    Ok(json!({
        "content": [{ "type": "text", "text": result.to_content_string() }],
        "isError": result.is_error(),
    }))
}
