//! Stdio MCP server.

use std::sync::Arc;

use anyhow::{Context, Result};
use paper_reader_tools::{TextExtractor, ToolDispatcherImpl, ToolRegistryImpl, ToolRequest};
use serde_json::json;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};
use tracing::{debug, error, info, warn};

use crate::config::{Config, ServerInfo};
use crate::protocol::{error_codes, methods, JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION};

pub struct McpServer {
    dispatcher: ToolDispatcherImpl,
    info: ServerInfo,
}

impl McpServer {
    /// Build the server with the paper tools registered.
    pub fn new(config: &Config, extractor: Arc<dyn TextExtractor>) -> Result<Self> {
        let registry = ToolRegistryImpl::paper_tools(extractor, config.limits)
            .context("Failed to register tools")?;
        info!("Registered {} tools: {:?}", registry.count(), registry.list());

        Ok(Self::with_dispatcher(
            ToolDispatcherImpl::new(Arc::new(registry)),
            config.server.clone(),
        ))
    }

    pub fn with_dispatcher(dispatcher: ToolDispatcherImpl, info: ServerInfo) -> Self {
        Self { dispatcher, info }
    }

    pub fn dispatcher(&self) -> &ToolDispatcherImpl {
        &self.dispatcher
    }

    /// Run the server on the process's stdin and stdout.
    pub async fn run(&self) -> Result<()> {
        let reader = BufReader::new(tokio::io::stdin());
        let writer = BufWriter::new(tokio::io::stdout());
        self.serve(reader, writer).await
    }

    /// Serve newline-delimited JSON-RPC until the reader hits EOF.
    ///
    /// # Errors
    ///
    /// Returns error if reading a line or writing a response fails. Bad
    /// requests never end the loop.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut line = String::new();
        info!("{} {} ready, waiting for requests", self.info.name, self.info.version);

        loop {
            line.clear();

            let bytes_read = reader.read_line(&mut line).await.map_err(|e| {
                error!("FATAL: Failed to read from stdin: {}", e);
                anyhow::anyhow!("stdin read error: {}", e)
            })?;

            // EOF - client closed connection
            if bytes_read == 0 {
                info!("stdin closed (EOF), shutting down");
                break;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            debug!("Received: {}", trimmed);

            let Some(response) = self.handle_line(trimmed).await else {
                debug!("Notification handled, no response needed");
                continue;
            };

            let response_json = serde_json::to_string(&response)?;
            debug!("Sending: {}", response_json);

            writer.write_all(response_json.as_bytes()).await.map_err(|e| {
                error!("FATAL: Failed to write to stdout: {}", e);
                anyhow::anyhow!("stdout write error: {}", e)
            })?;
            writer.write_all(b"\n").await?;
            writer.flush().await.map_err(|e| {
                error!("FATAL: Failed to flush stdout: {}", e);
                anyhow::anyhow!("stdout flush error: {}", e)
            })?;
        }

        Ok(())
    }

    /// Handle one raw frame. Returns `None` for notifications.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) if e.is_syntax() || e.is_eof() => {
                warn!("Unparseable frame: {}", e);
                return Some(JsonRpcResponse::error(
                    None,
                    error_codes::PARSE_ERROR,
                    "Parse error",
                ));
            }
            Err(e) => {
                warn!("Invalid request: {}", e);
                return Some(JsonRpcResponse::error(
                    None,
                    error_codes::INVALID_REQUEST,
                    "Invalid Request",
                ));
            }
        };

        self.handle_request(request).await
    }

    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            match request.method.as_str() {
                methods::INITIALIZED => info!("Client initialized"),
                other => debug!("Ignoring notification: {}", other),
            }
            return None;
        }

        let id = request.id;
        let response = match request.method.as_str() {
            methods::INITIALIZE => JsonRpcResponse::success(
                id,
                json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "serverInfo": {
                        "name": self.info.name,
                        "version": self.info.version,
                    },
                    "capabilities": {
                        "tools": {}
                    }
                }),
            ),
            methods::PING => JsonRpcResponse::success(id, json!({})),
            methods::TOOLS_LIST => {
                JsonRpcResponse::success(id, json!({ "tools": self.dispatcher.list_tools() }))
            }
            methods::TOOLS_CALL => self.call_tool(id, request.params).await,
            other => {
                warn!("Method not found: {}", other);
                JsonRpcResponse::error(
                    id,
                    error_codes::METHOD_NOT_FOUND,
                    format!("Method not found: {}", other),
                )
            }
        };

        Some(response)
    }

    async fn call_tool(
        &self,
        id: Option<crate::protocol::JsonRpcId>,
        params: Option<serde_json::Value>,
    ) -> JsonRpcResponse {
        let mut call: ToolRequest = match params.map(serde_json::from_value) {
            Some(Ok(call)) => call,
            Some(Err(e)) => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("Invalid params: {}", e),
                )
            }
            None => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    "Invalid params: missing tool name",
                )
            }
        };

        if call.arguments.is_null() {
            call.arguments = json!({});
        }

        let response = self.dispatcher.dispatch(call).await;
        match serde_json::to_value(response) {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(e) => {
                error!("Failed to serialize tool response: {}", e);
                JsonRpcResponse::error(id, error_codes::INTERNAL_ERROR, "Internal error")
            }
        }
    }
}
