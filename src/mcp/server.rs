use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

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
    config::load_config,
    core::{
        FileRefresh, KeyService, Project, ProjectOverrides,
        cache::{CacheStore, JsonFileStore},
        service::filter_entries,
    },
};

use super::types::{
    ConfigDto, ConfigValues, FormatInsertionParams, GetConfigParams, InsertionResult, KeyItem,
    LookupKeysParams, LookupKeysResult, Pagination, RefreshFileParams, RefreshFileResult,
    RefreshKeysParams, RefreshKeysResult, source_name,
};

#[derive(Clone)]
pub struct LokeyMcpServer {
    tool_router: ToolRouter<Self>,
    service: Arc<Mutex<KeyService>>,
}

impl Default for LokeyMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl LokeyMcpServer {
    /// Server backed by the key cache in the user's cache directory.
    pub fn new() -> Self {
        Self::with_store(JsonFileStore::default())
    }

    pub fn with_store(store: impl CacheStore + 'static) -> Self {
        Self {
            tool_router: Self::tool_router(),
            service: Arc::new(Mutex::new(KeyService::open(store))),
        }
    }

    /// Get the current lokey configuration
    #[tool(description = "Get the resolved project root, project name and lokey configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);
        let project = resolve_project(path)?;

        let loaded = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        let config_dto = ConfigDto {
            from_file: loaded.from_file(),
            project_root: project.root.to_string_lossy().to_string(),
            project_name: project.name,
            config: ConfigValues::from(project.config),
        };

        json_result(&config_dto)
    }

    /// List translation keys
    #[tool(
        description = "List translation keys of a project as flattened dotted paths with their values. Uses the cache and scans the locale files on a miss (or when refresh is true). Returns a paginated list; pass an item's display string to format_insertion."
    )]
    pub async fn lookup_keys(
        &self,
        params: Parameters<LookupKeysParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params.limit.map(|v| v as usize).unwrap_or(50).min(200);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);
        let project = resolve_project(Path::new(&params.project_root_path))?;

        let outcome = self
            .lock_service()?
            .lookup(&project, params.refresh.unwrap_or(false))
            .map_err(|e| McpError::internal_error(format!("Lookup failed: {:#}", e), None))?;

        let separator = project.separator();
        let matches = filter_entries(
            &outcome.entries,
            params.query.as_deref().unwrap_or_default(),
            separator,
        );
        let match_count = matches.len();

        let items: Vec<KeyItem> = matches
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|entry| KeyItem::new(entry, separator))
            .collect();
        let has_more = offset + items.len() < match_count;

        let result = LookupKeysResult {
            project: project.name.clone(),
            source: source_name(outcome.source),
            total_count: outcome.entries.len(),
            match_count,
            items,
            warnings: outcome.warnings.into_iter().map(|w| w.error).collect(),
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        };

        json_result(&result)
    }

    /// Rebuild the project's key cache
    #[tool(description = "Re-scan all locale files of a project and replace its cached keys.")]
    pub async fn refresh_keys(
        &self,
        params: Parameters<RefreshKeysParams>,
    ) -> Result<CallToolResult, McpError> {
        let project = resolve_project(Path::new(&params.0.project_root_path))?;

        let extracted = self
            .lock_service()?
            .refresh_all(&project)
            .map_err(|e| McpError::internal_error(format!("Refresh failed: {:#}", e), None))?;

        let result = RefreshKeysResult {
            project: project.name.clone(),
            key_count: extracted.entries.len(),
            files_scanned: extracted.files_scanned,
            warnings: extracted.warnings.into_iter().map(|w| w.error).collect(),
        };

        json_result(&result)
    }

    /// Update the cache after a locale file was saved
    #[tool(
        description = "Update the cached keys after one locale file was saved, without re-scanning the whole project. Keys sharing a top-level namespace with the file are replaced."
    )]
    pub async fn refresh_file(
        &self,
        params: Parameters<RefreshFileParams>,
    ) -> Result<CallToolResult, McpError> {
        let project = resolve_project(Path::new(&params.0.project_root_path))?;
        let file = Path::new(&params.0.file_path);

        let outcome = self
            .lock_service()?
            .refresh_file(&project, file)
            .map_err(|e| McpError::internal_error(format!("Refresh failed: {:#}", e), None))?;

        let (status, message, file_keys, total) = match outcome {
            FileRefresh::Updated { file_keys, total } => (
                "updated",
                format!("Updated {} keys from {}", file_keys, file.display()),
                Some(file_keys),
                Some(total),
            ),
            FileRefresh::NoCache => (
                "noCache",
                format!("No cached keys for {} yet; call refresh_keys first", project.name),
                None,
                None,
            ),
            FileRefresh::NotTranslationFile => (
                "notTranslationFile",
                format!("{} is not a translation file", file.display()),
                None,
                None,
            ),
            FileRefresh::ParseFailed(reason) => ("parseFailed", reason, None, None),
        };

        let result = RefreshFileResult {
            project: project.name.clone(),
            status: status.to_string(),
            message,
            file_keys,
            total,
        };

        json_result(&result)
    }

    /// Build the translation call to insert into a file
    #[tool(
        description = "Format the t() call for a selected key as it should be inserted into the given file. Views and helpers get t('key') (view namespace stripped), other files get I18n.t('key'). The cursor points where interpolation arguments go."
    )]
    pub async fn format_insertion(
        &self,
        params: Parameters<FormatInsertionParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        if params.selection.trim().is_empty() {
            return Err(McpError::invalid_params("selection cannot be empty", None));
        }
        let project = resolve_project(Path::new(&params.project_root_path))?;

        let insertion = self
            .lock_service()?
            .insertion(&project, &params.selection, Path::new(&params.file_path))
            .map_err(|e| McpError::internal_error(format!("Formatting failed: {:#}", e), None))?;

        json_result(&InsertionResult {
            snippet: insertion.snippet,
            cursor: insertion.cursor,
        })
    }

    fn lock_service(&self) -> Result<MutexGuard<'_, KeyService>, McpError> {
        self.service
            .lock()
            .map_err(|_| McpError::internal_error("Key cache lock poisoned", None))
    }
}

#[tool_handler]
impl ServerHandler for LokeyMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "lokey MCP looks up Rails i18n translation keys and formats the t() calls that use them.\n\n\
                 Available tools:\n\
                 1. get_config - Get project root, name and configuration\n\
                 2. lookup_keys - List translation keys (cached, paginated, filterable)\n\
                 3. refresh_keys - Re-scan all locale files\n\
                 4. refresh_file - Update the cache after saving one locale file\n\
                 5. format_insertion - Build the t() call for a key in a given file\n\n\
                 Recommended Workflow:\n\
                 1. Use lookup_keys with a query to find the key\n\
                 2. Pass the item's display string and the target file to format_insertion\n\
                 3. After editing a locale file, call refresh_file so later lookups see the change"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

fn resolve_project(path: &Path) -> Result<Project, McpError> {
    Project::resolve(path, &ProjectOverrides::default())
        .map_err(|e| McpError::invalid_params(format!("Invalid project: {:#}", e), None))
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = LokeyMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
