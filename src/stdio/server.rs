// src/stdio/server.rs
use anyhow::Result;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
    model::{
        CallToolRequestParam, CallToolResult, Content, Implementation, JsonObject, ListPromptsResult,
        ListResourceTemplatesResult, ListResourcesResult, ListToolsResult, PaginatedRequestParam,
        ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    transport::stdio,
};
use std::collections::HashSet;
use tokio_util::sync::CancellationToken;

use super::dispatch::{self, ToolName};
use super::metadata::all_tool_metadata;
use crate::error::handle_tool_error;

/// Name reported to clients during initialization.
pub const SERVER_NAME: &str = "MCP-Reasoning-Server";

/// Version reported to clients during initialization.
pub const SERVER_VERSION: &str = "1.0.0";

/// MCP server exposing the reasoning tools over stdio
///
/// Holds only the immutable tool filter; every call builds its own state.
#[derive(Debug, Clone, Default)]
pub struct ReasoningServer {
    /// Enabled tool names (filtered by --tool/--tools/--toolset CLI args)
    enabled_tools: Option<HashSet<String>>,
}

impl ReasoningServer {
    /// Create a new server
    ///
    /// # Arguments
    /// * `enabled_tools` - Individual tool names to enable, `None` for all
    pub fn new(enabled_tools: Option<HashSet<String>>) -> Self {
        Self { enabled_tools }
    }

    fn is_enabled(&self, name: &str) -> bool {
        self.enabled_tools
            .as_ref()
            .is_none_or(|enabled| enabled.contains(name))
    }

    /// Resolve and run one tool call.
    ///
    /// Unknown or disabled tools are protocol errors. Failures inside a tool
    /// become an error result carrying the rendered message.
    pub fn dispatch(
        &self,
        tool_name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        if !self.is_enabled(tool_name) {
            return Err(McpError::invalid_params(
                format!("Tool '{}' is not enabled", tool_name),
                None,
            ));
        }

        let tool = ToolName::from_name(tool_name).ok_or_else(|| {
            McpError::invalid_params(format!("Unknown tool: {}", tool_name), None)
        })?;

        log::debug!("Calling tool '{tool}'");

        match dispatch::invoke(tool, arguments.unwrap_or_default()) {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(e) => {
                let message = handle_tool_error(&e);
                log::warn!("Tool '{tool}' failed: {message}");
                Ok(CallToolResult::error(vec![Content::text(message)]))
            }
        }
    }

    /// Tools advertised to the client, honoring the enabled filter.
    pub fn tools(&self) -> Vec<Tool> {
        all_tool_metadata()
            .iter()
            .filter(|tool_meta| self.is_enabled(tool_meta.name))
            .map(|tool_meta| {
                Tool::new(tool_meta.name, tool_meta.description, tool_meta.schema.clone())
            })
            .collect()
    }

    /// Serve over stdio until the client disconnects or `shutdown_token` fires
    pub async fn serve_stdio(self, shutdown_token: CancellationToken) -> Result<()> {
        log::info!("Starting stdio server");

        let service = self
            .serve_with_ct(stdio(), shutdown_token)
            .await
            .inspect_err(|e| {
                log::error!("serving error: {e:?}");
            })?;

        log::info!("{SERVER_NAME} started successfully");

        let reason = service.waiting().await?;

        log::info!("Stdio server stopped: {reason:?}");
        Ok(())
    }
}

impl ServerHandler for ReasoningServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "Reasoning strategies as tools. Step-wise tools (mcts_reasoning, beam_search_reasoning, hybrid_reasoning) return one thought per call; r1_reasoning answers in one call; reason_* tools run a whole session from a single query.".to_string(),
            ),
        }
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch(&request.name, request.arguments)
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = self.tools();
        log::debug!("Serving {} tools from static metadata", tools.len());
        Ok(ListToolsResult::with_all_items(tools))
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        // This server only exposes tools
        Ok(ListPromptsResult {
            prompts: vec![],
            next_cursor: None,
        })
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: vec![],
            next_cursor: None,
        })
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult {
            next_cursor: None,
            resource_templates: Vec::new(),
        })
    }
}
