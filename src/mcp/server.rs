/// MCP server implementation that handles JSON-RPC communication
///
/// This module implements the server that:
/// 1. Reads JSON-RPC requests line by line
/// 2. Routes tool calls to the tracker session
/// 3. Writes one JSON-RPC response line per request

use serde::Serialize;
use serde_json::{json, Map, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};

use crate::mcp::protocol::*;
use crate::session::Session;
use crate::storage::KeyValueStore;
use crate::tools;
use crate::TrackerError;

/// MCP server that drives one tracker session
pub struct McpServer<S: KeyValueStore> {
    /// The session every tool call acts on
    session: Session<S>,
    /// Whether the client has finished initialization
    initialized: bool,
}

impl<S: KeyValueStore> McpServer<S> {
    /// Create a new MCP server
    pub fn new(session: Session<S>) -> Self {
        Self {
            session,
            initialized: false,
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Run the MCP server, handling JSON-RPC over stdin/stdout
    pub async fn run(&mut self) -> Result<(), TrackerError> {
        info!("Starting MCP server, waiting for JSON-RPC requests...");
        let reader = BufReader::new(tokio::io::stdin());
        let writer = tokio::io::stdout();
        self.serve(reader, writer).await
    }

    /// Serve requests from `reader` until end of input, answering on `writer`
    pub async fn serve<R, W>(&mut self, mut reader: R, mut writer: W) -> Result<(), TrackerError>
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
                    return Err(e.into());
                }
            }
        }

        Ok(())
    }

    /// Process a single line of JSON-RPC input
    ///
    /// Returns `None` for blank lines and notifications.
    pub fn process_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
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
                ));
            }
        };

        self.handle_request(request)
    }

    /// Handle a JSON-RPC request
    fn handle_request(&mut self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(id) = request.id else {
            if request.method == "notifications/initialized" || request.method == "initialized" {
                self.initialized = true;
            } else {
                debug!("Ignoring notification '{}'", request.method);
            }
            return None;
        };

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(id),
            "initialized" => {
                self.initialized = true;
                JsonRpcResponse::success(id, Value::Null)
            }
            "tools/list" => JsonRpcResponse::success(id, json!({ "tools": tool_definitions() })),
            "tools/call" => self.handle_tools_call(id, request.params),
            _ => JsonRpcResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method '{}' not found", request.method),
            ),
        };

        Some(response)
    }

    /// Handle MCP initialization request
    fn handle_initialize(&mut self, id: Value) -> JsonRpcResponse {
        info!("MCP client connected");

        let result = InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability { list_changed: false }),
            },
            server_info: ServerInfo {
                name: "Monthly Habit Tracker".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::error(id, error_codes::INTERNAL_ERROR, e.to_string()),
        }
    }

    /// Handle tools/call request
    fn handle_tools_call(&mut self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let tool_params: ToolCallParams = match params.map(serde_json::from_value) {
            Some(Ok(p)) => p,
            Some(Err(e)) => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("Invalid parameters: {}", e),
                );
            }
            None => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    "Missing parameters".to_string(),
                );
            }
        };

        let result = self.call_tool(&tool_params.name, tool_params.arguments);

        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::error(id, error_codes::INTERNAL_ERROR, e.to_string()),
        }
    }

    /// Route a tool call to its implementation
    fn call_tool(&mut self, name: &str, arguments: Map<String, Value>) -> ToolCallResult {
        let args = Value::Object(arguments);

        let outcome = match name {
            "month_select" => self.call_month_select(args),
            "goal_add" => self.call_goal_add(args),
            "goal_delete" => self.call_goal_delete(args),
            "day_toggle" => self.call_day_toggle(args),
            "dashboard" => self.call_dashboard(args),
            "year_report" => self.call_year_report(args),
            _ => return ToolCallResult::error(format!("Unknown tool: {}", name)),
        };

        outcome.unwrap_or_else(|e| {
            warn!("Tool '{}' failed: {}", name, e);
            ToolCallResult::failure(&e)
        })
    }

    fn call_month_select(&mut self, args: Value) -> Result<ToolCallResult, TrackerError> {
        let params = serde_json::from_value(args)?;
        let response = tools::select_month(&mut self.session, params)?;
        structured(&response.message, &response)
    }

    fn call_goal_add(&mut self, args: Value) -> Result<ToolCallResult, TrackerError> {
        let params = serde_json::from_value(args)?;
        let response = tools::add_goal(&mut self.session, params)?;
        structured(&response.message, &response)
    }

    fn call_goal_delete(&mut self, args: Value) -> Result<ToolCallResult, TrackerError> {
        let params = serde_json::from_value(args)?;
        let response = tools::delete_goal(&mut self.session, params)?;
        structured(&response.message, &response)
    }

    fn call_day_toggle(&mut self, args: Value) -> Result<ToolCallResult, TrackerError> {
        let params = serde_json::from_value(args)?;
        let response = tools::toggle_day(&mut self.session, params)?;
        structured(&response.message, &response)
    }

    fn call_dashboard(&mut self, args: Value) -> Result<ToolCallResult, TrackerError> {
        let params = serde_json::from_value(args)?;
        let response = tools::show_dashboard(&self.session, params);
        structured(&response.message, &response)
    }

    fn call_year_report(&mut self, args: Value) -> Result<ToolCallResult, TrackerError> {
        let params = serde_json::from_value(args)?;
        let response = tools::generate_report(&self.session, params);
        structured(&response.message, &response)
    }
}

/// Wrap a typed tool response into a tool result
fn structured<T: Serialize>(message: &str, response: &T) -> Result<ToolCallResult, TrackerError> {
    Ok(ToolCallResult::success(
        message.to_string(),
        serde_json::to_value(response)?,
    ))
}

/// Tools this server provides
fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "month_select".to_string(),
            description: "Switch the active month; saves the current month first".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "year": {"type": "integer", "description": "Calendar year"},
                    "month": {"description": "Month name (e.g. 'March') or zero-based index (0-11)"}
                },
                "required": ["year", "month"]
            }),
        },
        ToolDefinition {
            name: "goal_add".to_string(),
            description: "Add a goal to the active month".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "name": {"type": "string", "description": "Goal name, unique ignoring case"}
                },
                "required": ["name"]
            }),
        },
        ToolDefinition {
            name: "goal_delete".to_string(),
            description: "Delete a goal from the active month (confirm with the user first)".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "index": {"type": "integer", "description": "Position of the goal in the list"}
                },
                "required": ["index"]
            }),
        },
        ToolDefinition {
            name: "day_toggle".to_string(),
            description: "Mark a day of a goal done, or undo it".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "index": {"type": "integer", "description": "Position of the goal in the list"},
                    "day": {"type": "integer", "description": "Day of the month, starting at 1"}
                },
                "required": ["index", "day"]
            }),
        },
        ToolDefinition {
            name: "dashboard".to_string(),
            description: "Habit grid, per-goal progress, leaderboard, overall and weekly stats for the active month".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "top": {"type": "integer", "description": "Leaderboard length (default 10)"}
                },
                "required": []
            }),
        },
        ToolDefinition {
            name: "year_report".to_string(),
            description: "Summary of every stored month of a year".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "year": {"type": "integer", "description": "Year to report on (defaults to the active year)"}
                },
                "required": []
            }),
        },
    ]
}
