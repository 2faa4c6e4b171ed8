/// MCP server implementation that handles JSON-RPC communication
///
/// This module implements the actual MCP server that:
/// 1. Reads newline-delimited JSON-RPC requests
/// 2. Routes tool calls to the mood journal
/// 3. Writes one JSON-RPC response line per request

use chrono::Utc;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};

use crate::mcp::protocol::*;
use crate::storage::BlobStore;
use crate::tools;
use crate::{MoodJournalServer, ServerError};

/// MCP server that handles communication with the client
pub struct McpServer<B: BlobStore> {
    /// The underlying mood journal
    journal: MoodJournalServer<B>,
    /// Whether the client has finished initialization
    initialized: bool,
}

/// JSON schema for a tool's parameter struct
fn schema_of<T: JsonSchema>() -> Value {
    serde_json::to_value(schemars::schema_for!(T)).unwrap_or_else(|_| json!({"type": "object"}))
}

/// Decode tool arguments into the tool's parameter struct
fn parse_args<T: DeserializeOwned>(args: Map<String, Value>) -> Result<T, String> {
    serde_json::from_value(Value::Object(args)).map_err(|e| format!("Invalid arguments: {}", e))
}

/// A successful tool result carrying both text and the structured response
fn tool_success<T: Serialize>(message: String, response: &T) -> ToolCallResult {
    ToolCallResult::success(message, serde_json::to_value(response).ok())
}

impl<B: BlobStore> McpServer<B> {
    /// Create a new MCP server
    pub fn new(journal: MoodJournalServer<B>) -> Self {
        Self {
            journal,
            initialized: false,
        }
    }

    /// The journal behind this server (useful for testing)
    pub fn journal(&self) -> &MoodJournalServer<B> {
        &self.journal
    }

    /// Run the MCP server over stdin/stdout
    pub async fn run(&mut self) -> Result<(), ServerError> {
        info!("Starting MCP server, waiting for JSON-RPC requests...");
        let reader = BufReader::new(tokio::io::stdin());
        let writer = tokio::io::stdout();
        self.serve(reader, writer).await
    }

    /// Serve requests from `reader` until it is closed
    pub async fn serve<R, W>(&mut self, mut reader: R, mut writer: W) -> Result<(), ServerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut line = String::new();

        loop {
            line.clear();

            match reader.read_line(&mut line).await {
                Ok(0) => {
                    info!("MCP server shutting down (input closed)");
                    break;
                }
                Ok(_) => {
                    if let Some(response) = self.process_line(&line) {
                        let response_str = serde_json::to_string(&response)?;

                        writer.write_all(response_str.as_bytes()).await?;
                        writer.write_all(b"\n").await?;
                        writer.flush().await?;

                        debug!("Sent response: {}", response_str);
                    }
                }
                Err(e) => {
                    error!("Failed to read request: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Process a single line of JSON-RPC input
    fn process_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        debug!("Processing request: {}", line);

        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                error!("Failed to parse JSON-RPC request: {}", e);
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    error_codes::PARSE_ERROR,
                    format!("Invalid JSON: {}", e),
                    None,
                ));
            }
        };

        if request.is_notification() {
            if request.method == "notifications/initialized" {
                self.initialized = true;
                info!("MCP client finished initialization");
            }
            return None;
        }

        Some(self.handle_request(request))
    }

    /// Handle a JSON-RPC request
    fn handle_request(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request),
            "initialized" => {
                self.initialized = true;
                JsonRpcResponse::success(request.id, Value::Null)
            }
            "ping" => JsonRpcResponse::success(request.id, json!({})),
            "tools/list" => JsonRpcResponse::success(request.id, json!({"tools": Self::tool_definitions()})),
            "tools/call" => self.handle_tools_call(request),
            _ => JsonRpcResponse::error(
                request.id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method '{}' not found", request.method),
                None,
            ),
        }
    }

    /// Handle MCP initialization request
    fn handle_initialize(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        info!("MCP client connected");

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: "Mood Journal MCP".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(request.id, value),
            Err(e) => JsonRpcResponse::error(
                request.id,
                error_codes::INTERNAL_ERROR,
                e.to_string(),
                None,
            ),
        }
    }

    /// The tools this server offers
    fn tool_definitions() -> Vec<ToolDefinition> {
        vec![
            ToolDefinition {
                name: "mood_log".to_string(),
                description: "Log how you feel: mood, energy, sleep, activities and an optional note, for now or a past day".to_string(),
                input_schema: schema_of::<tools::LogMoodParams>(),
            },
            ToolDefinition {
                name: "mood_list".to_string(),
                description: "List journal entries, newest first".to_string(),
                input_schema: schema_of::<tools::ListEntriesParams>(),
            },
            ToolDefinition {
                name: "mood_note".to_string(),
                description: "Replace the journal note on an existing entry".to_string(),
                input_schema: schema_of::<tools::UpdateNoteParams>(),
            },
            ToolDefinition {
                name: "mood_summary".to_string(),
                description: "Streak, mood stability score, sleep rating and dominant mood".to_string(),
                input_schema: json!({"type": "object", "properties": {}}),
            },
            ToolDefinition {
                name: "mood_trend".to_string(),
                description: "Chart data for the most recent entries: mood or sleep, oldest first".to_string(),
                input_schema: schema_of::<tools::TrendParams>(),
            },
        ]
    }

    /// Handle tools/call request
    fn handle_tools_call(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        let tool_params: ToolCallParams = match request.params {
            Some(params) => match serde_json::from_value(params) {
                Ok(p) => p,
                Err(e) => {
                    return JsonRpcResponse::error(
                        request.id,
                        error_codes::INVALID_PARAMS,
                        format!("Invalid parameters: {}", e),
                        None,
                    );
                }
            },
            None => {
                return JsonRpcResponse::error(
                    request.id,
                    error_codes::INVALID_PARAMS,
                    "Missing parameters".to_string(),
                    None,
                );
            }
        };

        if !self.initialized {
            debug!("Tool call '{}' before initialization finished", tool_params.name);
        }

        let result = self.call_tool(&tool_params.name, tool_params.arguments);

        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(request.id, value),
            Err(e) => JsonRpcResponse::error(
                request.id,
                error_codes::INTERNAL_ERROR,
                e.to_string(),
                None,
            ),
        }
    }

    /// Route a tool call to its implementation
    fn call_tool(&mut self, name: &str, args: Map<String, Value>) -> ToolCallResult {
        let now = Utc::now();
        let analytics = *self.journal.analytics();
        let offset = analytics.offset();

        match name {
            "mood_log" => {
                let params = match parse_args::<tools::LogMoodParams>(args) {
                    Ok(p) => p,
                    Err(e) => return ToolCallResult::error(e),
                };
                match tools::log_mood(self.journal.store_mut(), params, &offset) {
                    Ok(response) => {
                        if let Some(warning) = &response.warning {
                            warn!("{}", warning);
                        }
                        tool_success(with_warning(&response.message, &response.warning), &response)
                    }
                    Err(e) => ToolCallResult::error(e.to_string()),
                }
            }
            "mood_list" => match parse_args::<tools::ListEntriesParams>(args) {
                Ok(params) => {
                    let response = tools::list_entries(self.journal.store(), params, &offset, now);
                    tool_success(response.message.clone(), &response)
                }
                Err(e) => ToolCallResult::error(e),
            },
            "mood_note" => {
                let params = match parse_args::<tools::UpdateNoteParams>(args) {
                    Ok(p) => p,
                    Err(e) => return ToolCallResult::error(e),
                };
                match tools::update_note(self.journal.store_mut(), params) {
                    Ok(response) => {
                        tool_success(with_warning(&response.message, &response.warning), &response)
                    }
                    Err(e) => ToolCallResult::error(e.to_string()),
                }
            }
            "mood_summary" => {
                let response = tools::mood_summary(self.journal.store(), &analytics, now);
                tool_success(response.message.clone(), &response)
            }
            "mood_trend" => match parse_args::<tools::TrendParams>(args) {
                Ok(params) => match tools::mood_trend(self.journal.store(), &analytics, params) {
                    Ok(response) => tool_success(response.message.clone(), &response),
                    Err(e) => ToolCallResult::error(e.to_string()),
                },
                Err(e) => ToolCallResult::error(e),
            },
            _ => ToolCallResult::error(format!("Unknown tool: {}", name)),
        }
    }
}

fn with_warning(message: &str, warning: &Option<String>) -> String {
    match warning {
        Some(w) => format!("{}\n⚠️ {}", message, w),
        None => message.to_string(),
    }
}
