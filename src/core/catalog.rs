//! File-backed implementations of the catalog and signature collaborators.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::data::{LocaleMessages, MessageLocation, SignatureEntry};
use super::enumerator::{LocaleIndex, MessageCatalog, MessageId, SignatureTable};
use super::signature::ParameterSignature;

/// Locale files arranged by locale index.
///
/// A locale listed in the order but without a loaded file has no strings.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locales: Vec<String>,
    tables: Vec<Option<LocaleMessages>>,
}

impl Catalog {
    /// Arrange `messages` in `order`. Locales not in `order` are dropped.
    pub fn new(order: Vec<String>, mut messages: HashMap<String, LocaleMessages>) -> Self {
        let tables = order.iter().map(|locale| messages.remove(locale)).collect();
        Self {
            locales: order,
            tables,
        }
    }

    /// MAX_LOCALE for this catalog.
    pub fn locale_count(&self) -> usize {
        self.locales.len()
    }

    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    pub fn locale_name(&self, locale: LocaleIndex) -> Option<&str> {
        self.locales.get(locale).map(String::as_str)
    }

    pub fn messages(&self, locale: LocaleIndex) -> Option<&LocaleMessages> {
        self.tables.get(locale).and_then(Option::as_ref)
    }

    /// Where the entry for `id` lives in the file of `locale`.
    pub fn location(&self, id: MessageId, locale: LocaleIndex) -> Option<&MessageLocation> {
        self.messages(locale)?.get(id).map(|entry| &entry.location)
    }

    /// Every id with an entry in at least one locale, ascending.
    pub fn ids(&self) -> BTreeSet<MessageId> {
        self.tables
            .iter()
            .flatten()
            .flat_map(|messages| messages.entries.keys().copied())
            .collect()
    }

    /// First location (by locale index) where `id` appears.
    pub fn first_location(&self, id: MessageId) -> Option<(LocaleIndex, &MessageLocation)> {
        (0..self.locale_count())
            .find_map(|locale| self.location(id, locale).map(|loc| (locale, loc)))
    }

    /// Number of locale files actually loaded.
    pub fn loaded_file_count(&self) -> usize {
        self.tables.iter().flatten().count()
    }
}

impl MessageCatalog for Catalog {
    fn lookup_string(&self, id: MessageId, locale: LocaleIndex) -> Option<&str> {
        self.messages(locale)?.get(id)?.value.as_deref()
    }
}

/// Declarations loaded from the signature file.
#[derive(Debug, Clone, Default)]
pub struct SignatureDeclarations {
    pub file_path: String,
    pub entries: BTreeMap<MessageId, SignatureEntry>,
}

impl SignatureDeclarations {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            entries: BTreeMap::new(),
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = MessageId> + '_ {
        self.entries.keys().copied()
    }

    pub fn location(&self, id: MessageId) -> Option<&MessageLocation> {
        self.entries.get(&id).map(|entry| &entry.location)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SignatureTable for SignatureDeclarations {
    fn lookup_signature(&self, id: MessageId) -> Option<&ParameterSignature> {
        self.entries.get(&id).map(|entry| &entry.signature)
    }
}
