//! Line-delimited JSON-RPC loop

use std::sync::Arc;

use application::ForecastService;
use serde::Deserialize;
use serde_json::{Value, json};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::{
    protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION},
    tools::{WeatherTools, tool_descriptors},
};

const SERVER_NAME: &str = "skycast";

/// Errors that end the serve loop
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct CallParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

/// MCP server over any line-oriented byte stream
#[derive(Debug, Clone)]
pub struct McpServer {
    tools: WeatherTools,
}

impl McpServer {
    #[must_use]
    pub fn new(service: Arc<ForecastService>) -> Self {
        Self {
            tools: WeatherTools::new(service),
        }
    }

    /// Read requests until EOF, writing one response line per request
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<(), ServeError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(&line).await {
                let mut encoded = serde_json::to_string(&response)?;
                encoded.push('\n');
                writer.write_all(encoded.as_bytes()).await?;
                writer.flush().await?;
            }
        }
        info!("Input closed, stopping MCP server");
        Ok(())
    }

    /// Handle one raw line; `None` means nothing is sent back
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Unparseable JSON-RPC message");
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    JsonRpcError::parse_error(e.to_string()),
                ));
            },
        };

        let request: JsonRpcRequest = match serde_json::from_value(value.clone()) {
            Ok(request) => request,
            Err(e) => {
                let id = value.get("id").cloned().unwrap_or(Value::Null);
                return Some(JsonRpcResponse::failure(
                    id,
                    JsonRpcError::invalid_request(e.to_string()),
                ));
            },
        };

        if request.is_notification() {
            debug!(method = %request.method, "Ignoring notification");
            return None;
        }

        let id = request.id.clone().unwrap_or(Value::Null);
        Some(match self.dispatch(request).await {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::failure(id, error),
        })
    }

    async fn dispatch(&self, request: JsonRpcRequest) -> Result<Value, JsonRpcError> {
        debug!(method = %request.method, "Dispatching request");
        match request.method.as_str() {
            "initialize" => Ok(json!({
                "protocolVersion": PROTOCOL_VERSION,
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION"),
                },
                "capabilities": { "tools": {} },
            })),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": tool_descriptors() })),
            "tools/call" => self.call_tool(request.params).await,
            other => Err(JsonRpcError::method_not_found(other)),
        }
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: CallParams = params
            .ok_or_else(|| JsonRpcError::invalid_params("missing params"))
            .and_then(|p| {
                serde_json::from_value(p).map_err(|e| JsonRpcError::invalid_params(e.to_string()))
            })?;

        let result = self
            .tools
            .call(&params.name, params.arguments)
            .await
            .map_err(|e| JsonRpcError::invalid_params(e.to_string()))?;

        serde_json::to_value(result).map_err(|e| JsonRpcError::internal(e.to_string()))
    }
}
