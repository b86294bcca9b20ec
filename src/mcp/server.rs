use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

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
    cli::CommonArgs,
    config::load_config,
    core::{
        CheckContext,
        context::{locale_order, resolve_path},
        parsers::json::scan_message_files,
    },
    rules::format::check_format_issues,
};

use super::types::{
    ConfigDto, ConfigValues, FormatFailureItem, GetConfigParams, GetLocalesParams, LocaleInfo,
    LocalesResult, Pagination, VerifyCatalogParams, VerifyCatalogResult,
};

#[derive(Clone)]
pub struct CatalintMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for CatalintMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_router]
impl CatalintMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Verify every message id against its declared parameters
    #[tool(
        description = "Verify that every locale's format string matches the declared parameter signature of its message id. Returns pass/fail totals and a paginated list of failing (id, locale) pairs."
    )]
    pub async fn verify_catalog(
        &self,
        params: Parameters<VerifyCatalogParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = &params.0.project_root_path;
        let limit = params.0.limit.map(|v| v as usize).unwrap_or(50).min(100);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);

        let common = CommonArgs {
            root: Some(PathBuf::from(path)),
            ..Default::default()
        };
        let ctx = CheckContext::new(&common)
            .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))?;

        let issues = check_format_issues(&ctx);

        let total_count = issues.len();
        let failed_id_count = issues.iter().map(|i| i.id).collect::<BTreeSet<_>>().len();

        let items: Vec<FormatFailureItem> = issues
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|issue| FormatFailureItem {
                reason: issue.mismatch.to_string(),
                id: issue.id,
                locale: issue.locale,
                file_path: issue.location.file_path,
                line: issue.location.line,
                value: issue.value,
                expected: issue.expected,
                found: issue.found,
            })
            .collect();

        let has_more = offset + items.len() < total_count;

        to_json_result(&VerifyCatalogResult {
            passed: total_count == 0,
            max_id: ctx.max_id(),
            locale_count: ctx.max_locale(),
            total_count,
            failed_id_count,
            parse_error_count: ctx.parse_errors().len(),
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// Get available locale files in verification order
    #[tool(
        description = "Get the locales in verification order with their message files and message counts."
    )]
    pub async fn get_locales(
        &self,
        params: Parameters<GetLocalesParams>,
    ) -> Result<CallToolResult, McpError> {
        let root = Path::new(&params.0.project_root_path);

        let config = load_config(root)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?
            .config;

        let messages_dir = resolve_path(root, &config.messages_root);
        let scan = scan_message_files(&messages_dir).map_err(|e| {
            McpError::internal_error(format!("Failed to scan messages: {}", e), None)
        })?;

        let order = locale_order(&config, scan.messages.keys());

        let mut locales: Vec<LocaleInfo> = order
            .iter()
            .enumerate()
            .map(|(index, locale)| {
                let messages = scan.messages.get(locale);
                LocaleInfo {
                    locale: locale.clone(),
                    index: Some(index),
                    file_path: messages.map(|m| m.file_path.clone()),
                    message_count: messages.map_or(0, |m| m.len()),
                }
            })
            .collect();

        let mut unlisted: Vec<LocaleInfo> = scan
            .messages
            .iter()
            .filter(|(locale, _)| !order.contains(locale))
            .map(|(locale, messages)| LocaleInfo {
                locale: locale.clone(),
                index: None,
                file_path: Some(messages.file_path.clone()),
                message_count: messages.len(),
            })
            .collect();
        unlisted.sort_by(|a, b| a.locale.cmp(&b.locale));
        locales.extend(unlisted);

        to_json_result(&LocalesResult {
            messages_root: messages_dir.to_string_lossy().to_string(),
            primary_locale: config.primary_locale,
            locales,
        })
    }

    /// Get current configuration
    #[tool(description = "Get the current catalint configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        to_json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }
}

#[tool_handler]
impl ServerHandler for CatalintMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Catalint MCP helps AI agents keep printf-style parameters consistent across \
                 the locales of a message catalog.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. get_locales - Get locales in verification order and their message counts\n\
                 3. verify_catalog - Check every message id against its declared parameters (paginated)\n\n\
                 Fix a failure by editing the locale string so its specifiers match the \
                 expected kinds in order, or by correcting the declaration in the signature file."
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
            let service = CatalintMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
