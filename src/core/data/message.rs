use std::collections::BTreeMap;

use crate::core::enumerator::MessageId;
use crate::core::signature::ParameterSignature;

/// Position information in message/signature files (JSON).
///
/// Used for error reporting when a format string or a declaration is wrong.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLocation {
    /// Path to the file (e.g., "./messages/de.json").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl MessageLocation {
    /// Create with default column (1).
    pub fn with_line(file_path: impl Into<String>, line: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col: 1,
        }
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

/// One entry of a locale file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    pub location: MessageLocation,
    /// `None` for an explicit `null` (no translation).
    pub value: Option<String>,
}

/// All entries of one locale file, keyed by message id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleMessages {
    pub locale: String,
    pub file_path: String,
    pub entries: BTreeMap<MessageId, MessageEntry>,
}

impl LocaleMessages {
    pub fn new(locale: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            file_path: file_path.into(),
            entries: BTreeMap::new(),
        }
    }

    pub fn get(&self, id: MessageId) -> Option<&MessageEntry> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One declaration of the signature file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureEntry {
    pub location: MessageLocation,
    pub signature: ParameterSignature,
}
