use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::core::MessageId;

// ============================================================
// Parameter Types
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path to the project root (where .catalintrc.json lives)
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetLocalesParams {
    /// Absolute path to the project root (where .catalintrc.json lives)
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCatalogParams {
    /// Absolute path to the project root (where .catalintrc.json lives)
    pub project_root_path: String,
    /// Maximum number of failures to return (default 50, max 100)
    pub limit: Option<u32>,
    /// Number of failures to skip
    pub offset: Option<u32>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub messages_root: String,
    pub signatures_file: String,
    pub primary_locale: String,
    pub locales: Vec<String>,
    pub max_id: Option<MessageId>,
    pub fail_fast: bool,
    /// "skip" or "require"
    pub missing_locales: String,
}

impl From<Config> for ConfigValues {
    fn from(c: Config) -> Self {
        let missing_locales = serde_json::to_value(c.missing_locales)
            .ok()
            .and_then(|v| v.as_str().map(String::from))
            .unwrap_or_default();
        Self {
            messages_root: c.messages_root,
            signatures_file: c.signatures_file,
            primary_locale: c.primary_locale,
            locales: c.locales,
            max_id: c.max_id,
            fail_fast: c.fail_fast,
            missing_locales,
        }
    }
}

// ============================================================
// Locales Types (get_locales)
// ============================================================

/// Result of get_locales operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalesResult {
    pub messages_root: String,
    pub primary_locale: String,
    pub locales: Vec<LocaleInfo>,
}

/// Information about a single locale
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocaleInfo {
    pub locale: String,
    /// Position in the verification order; absent if the locale is not verified
    pub index: Option<usize>,
    /// Absent if the locale is configured but has no file
    pub file_path: Option<String>,
    pub message_count: usize,
}

// ============================================================
// Verify Types (verify_catalog)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCatalogResult {
    /// True if every (id, locale) pair matched its signature
    pub passed: bool,
    pub max_id: MessageId,
    pub locale_count: usize,
    /// Total failing (id, locale) pairs
    pub total_count: usize,
    /// Number of distinct failing ids
    pub failed_id_count: usize,
    /// Files or entries that could not be parsed and were not verified
    pub parse_error_count: usize,
    pub items: Vec<FormatFailureItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormatFailureItem {
    pub id: MessageId,
    pub locale: String,
    pub file_path: String,
    pub line: usize,
    /// The offending string; absent when the locale has no string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Declared parameter kinds, e.g. "int string"
    pub expected: String,
    /// Specifiers found, e.g. "%d %s %s"
    pub found: String,
    pub reason: String,
}

// ============================================================
// Common Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
