use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use serde_json::{Map, Value};

use crate::core::catalog::SignatureDeclarations;
use crate::core::data::{LocaleMessages, MessageEntry, MessageLocation, SignatureEntry};
use crate::core::enumerator::MessageId;
use crate::core::signature::ParameterSignature;

/// A warning from scanning message or signature files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageScanWarning {
    pub file_path: String,
    pub error: String,
}

impl MessageScanWarning {
    fn new(file_path: &str, error: impl Into<String>) -> Self {
        Self {
            file_path: file_path.to_string(),
            error: error.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ScanMessagesResult {
    pub messages: HashMap<String, LocaleMessages>,
    pub warnings: Vec<MessageScanWarning>,
}

#[derive(Debug, Default)]
pub struct ScanSignaturesResult {
    pub declarations: SignatureDeclarations,
    pub warnings: Vec<MessageScanWarning>,
}

/// Read a file and return its top-level JSON object.
fn read_json_object(path: &Path) -> Result<(String, Map<String, Value>)> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

    match json {
        Value::Object(map) => Ok((content, map)),
        _ => bail!("Expected a JSON object at the top level of {:?}", path),
    }
}

/// Parse a JSON object key as a message id. Id 0 is reserved.
///
/// Only the canonical decimal form is accepted, so `"05"` and `"+5"` can never
/// shadow the entry for `"5"`.
fn parse_message_id(key: &str) -> Option<MessageId> {
    match key.parse::<MessageId>() {
        Ok(0) | Err(_) => None,
        Ok(id) if id.to_string() != key => None,
        Ok(id) => Some(id),
    }
}

/// Parse a locale file: `{ "<id>": "<format>" | null }`.
///
/// Malformed entries are skipped and returned as warnings; the file as a whole
/// only fails when it cannot be read or is not a JSON object.
pub fn parse_json_file(
    path: &Path,
    locale: &str,
) -> Result<(LocaleMessages, Vec<MessageScanWarning>)> {
    let (content, map) = read_json_object(path)?;

    let file_path = path.to_string_lossy().to_string();
    // Pre-compute line index for O(log n) line lookups
    let line_index = build_line_index(&content);
    let mut messages = LocaleMessages::new(locale, file_path.clone());
    let mut warnings = Vec::new();

    for (key, value) in map {
        let Some(id) = parse_message_id(&key) else {
            warnings.push(MessageScanWarning::new(
                &file_path,
                format!("\"{}\" is not a valid message id", key),
            ));
            continue;
        };

        let value = match value {
            Value::String(s) => Some(s),
            Value::Null => None,
            other => {
                warnings.push(MessageScanWarning::new(
                    &file_path,
                    format!(
                        "value of message {} must be a string or null, got {}",
                        id,
                        json_type_name(&other)
                    ),
                ));
                continue;
            }
        };

        let line = find_key_line(&content, &key, &line_index);
        messages.entries.insert(
            id,
            MessageEntry {
                location: MessageLocation::with_line(file_path.clone(), line),
                value,
            },
        );
    }

    Ok((messages, warnings))
}

/// Parse the signature file: `{ "<id>": ["int", "string"] | "unverified" }`.
pub fn parse_signature_file(path: &Path) -> Result<ScanSignaturesResult> {
    let (content, map) = read_json_object(path)?;

    let file_path = path.to_string_lossy().to_string();
    let line_index = build_line_index(&content);
    let mut result = ScanSignaturesResult {
        declarations: SignatureDeclarations::new(file_path.clone()),
        warnings: Vec::new(),
    };

    for (key, value) in map {
        let Some(id) = parse_message_id(&key) else {
            result.warnings.push(MessageScanWarning::new(
                &file_path,
                format!("\"{}\" is not a valid message id", key),
            ));
            continue;
        };

        match serde_json::from_value::<ParameterSignature>(value) {
            Ok(signature) => {
                let line = find_key_line(&content, &key, &line_index);
                result.declarations.entries.insert(
                    id,
                    SignatureEntry {
                        location: MessageLocation::with_line(file_path.clone(), line),
                        signature,
                    },
                );
            }
            Err(e) => result.warnings.push(MessageScanWarning::new(
                &file_path,
                format!("invalid signature for message {}: {}", id, e),
            )),
        }
    }

    Ok(result)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// The returned vector contains byte offsets where each line starts.
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0]; // Line 1 starts at offset 0
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find line number for a byte offset using binary search.
///
/// Returns 1-based line number.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1, // Exact match at line start
        Err(line) => line,    // Falls within this line
    }
}

/// Find the line where a top-level key appears in the JSON content.
///
/// Only matches occurrences followed by `:`, so a value that happens to contain
/// the same digits is never mistaken for the key.
fn find_key_line(content: &str, key: &str, line_index: &[usize]) -> usize {
    let pattern = format!("\"{}\"", key);

    let mut pos = 0;
    while let Some(rel_pos) = content[pos..].find(&pattern) {
        let abs_pos = pos + rel_pos;
        let after_pattern = abs_pos + pattern.len();

        if content[after_pattern..].trim_start().starts_with(':') {
            return offset_to_line(line_index, abs_pos);
        }
        pos = abs_pos + 1;
    }

    1 // Default to line 1 if not found
}

/// Extracts locale from filename.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-CN.json" -> Some("zh-CN")
/// - "/path/to/messages/ja.json" -> Some("ja")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

pub fn scan_message_files(message_dir: impl AsRef<Path>) -> Result<ScanMessagesResult> {
    let message_dir = message_dir.as_ref();

    if !message_dir.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check your .catalintrc.json 'messagesRoot' setting.",
            message_dir.display()
        );
    }

    if !message_dir.is_dir() {
        bail!("'{}' is not a directory.", message_dir.display());
    }

    let mut files: Vec<(PathBuf, String)> = Vec::new();
    for entry in fs::read_dir(message_dir)? {
        let path = entry?.path();

        if path.extension().and_then(|e| e.to_str()) == Some("json")
            && let Some(locale) = extract_locale(&path)
        {
            files.push((path, locale));
        }
    }

    let parsed: Vec<_> = files
        .par_iter()
        .map(|(path, locale)| (path, locale, parse_json_file(path, locale)))
        .collect();

    let mut result = ScanMessagesResult::default();
    for (path, locale, parse_result) in parsed {
        match parse_result {
            Ok((messages, warnings)) => {
                result.messages.insert(locale.clone(), messages);
                result.warnings.extend(warnings);
            }
            Err(e) => {
                result.warnings.push(MessageScanWarning {
                    file_path: path.to_string_lossy().to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    Ok(result)
}
