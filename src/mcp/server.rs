use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    config::{DEFAULT_FUNCTION_NAME, ResolvedConfig, load_config},
    core::{parse_calls, transform},
};

use super::types::{
    CallItem, ConfigDto, ConfigValues, GetConfigParams, ScanCallsParams, ScanCallsResult,
    TransformSourceParams, TransformSourceResult,
};

/// File id used when the caller does not name the source.
const DEFAULT_SOURCE_ID: &str = "input.tsx";

#[derive(Clone)]
pub struct ClsMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for ClsMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ClsMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the resolved cls-extended configuration
    #[tool(
        description = "Get the cls-extended configuration for a project (breakpoints, variants, function name, file filters) and whether it came from .clsrc.json."
    )]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        to_tool_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// List the call sites that would be rewritten
    #[tool(
        description = "Find every tw(\"base\", { breakpoint: \"classes\" }) call in a JS/TS/JSX/TSX source text. Returns base classes, responsive classes and byte spans."
    )]
    pub async fn scan_calls(
        &self,
        params: Parameters<ScanCallsParams>,
    ) -> Result<CallToolResult, McpError> {
        let ScanCallsParams {
            source,
            function_name,
        } = params.0;
        let function_name = function_name.as_deref().unwrap_or(DEFAULT_FUNCTION_NAME);

        let records = parse_calls(&source, DEFAULT_SOURCE_ID, function_name)
            .map_err(|e| McpError::invalid_params(format!("{:#}", e), None))?;

        to_tool_result(&ScanCallsResult {
            total_count: records.len(),
            items: records.iter().map(CallItem::from).collect(),
        })
    }

    /// Rewrite a source text
    #[tool(
        description = "Replace tw() calls in a source text with static class strings. Returns the new code, a Source Map v3 and unknown breakpoint warnings. Unparseable or call-free source comes back unchanged."
    )]
    pub async fn transform_source(
        &self,
        params: Parameters<TransformSourceParams>,
    ) -> Result<CallToolResult, McpError> {
        let TransformSourceParams {
            source,
            id,
            project_root_path,
        } = params.0;

        let config = match project_root_path {
            Some(path) => load_config(Path::new(&path))
                .map_err(|e| {
                    McpError::internal_error(format!("Failed to load config: {}", e), None)
                })?
                .config
                .resolve(),
            None => ResolvedConfig::default(),
        };
        let id = id.as_deref().unwrap_or(DEFAULT_SOURCE_ID);

        let outcome = transform(&source, id, &config);
        let result = TransformSourceResult::from_outcome(source, outcome).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        to_tool_result(&result)
    }
}

fn to_tool_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_handler]
impl ServerHandler for ClsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "cls-extended MCP helps AI agents work with responsive tw() class calls.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration (breakpoints, variants, function name)\n\
                 2. scan_calls - List tw() call sites in a source text\n\
                 3. transform_source - Rewrite a source text to static class strings\n\n\
                 Use get_config first to learn which breakpoint names are known; \
                 transform_source reports unknown ones as warnings."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = ClsMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
