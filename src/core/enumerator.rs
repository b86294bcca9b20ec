//! Catalog-wide verification over the identifier range.
//!
//! Every identifier in `[1, max_id]` is checked exactly once against every
//! locale in `[0, max_locale)`. Identifiers are independent of each other, so
//! the range is split across the rayon pool; visit order is unspecified.

use std::{
    collections::{BTreeMap, HashMap},
    sync::{Mutex, PoisonError},
};

use clap::ValueEnum;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::matcher::{Mismatch, check};
use super::signature::ParameterSignature;
use super::specifier::render_found;

pub type MessageId = u32;
pub type LocaleIndex = usize;

/// Read-only lookup of format strings.
pub trait MessageCatalog: Sync {
    fn lookup_string(&self, id: MessageId, locale: LocaleIndex) -> Option<&str>;
}

/// Read-only lookup of declared signatures.
pub trait SignatureTable: Sync {
    fn lookup_signature(&self, id: MessageId) -> Option<&ParameterSignature>;
}

/// Receives one diagnostic per failing (identifier, locale) pair.
pub trait DiagnosticSink: Sync {
    fn report(&self, diagnostic: Diagnostic);
}

impl MessageCatalog for HashMap<(MessageId, LocaleIndex), String> {
    fn lookup_string(&self, id: MessageId, locale: LocaleIndex) -> Option<&str> {
        self.get(&(id, locale)).map(String::as_str)
    }
}

impl SignatureTable for HashMap<MessageId, ParameterSignature> {
    fn lookup_signature(&self, id: MessageId) -> Option<&ParameterSignature> {
        self.get(&id)
    }
}

impl SignatureTable for BTreeMap<MessageId, ParameterSignature> {
    fn lookup_signature(&self, id: MessageId) -> Option<&ParameterSignature> {
        self.get(&id)
    }
}

/// A failed check, with enough detail for a human to fix either side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub id: MessageId,
    pub locale: LocaleIndex,
    /// Expected kinds, e.g. `int string`.
    pub expected: String,
    /// Specifiers used by the string, e.g. `%d %s %s`.
    pub found: String,
    pub mismatch: Mismatch,
}

/// Sink that keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Collected diagnostics ordered by identifier, then locale.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        let mut diagnostics = self
            .diagnostics
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        diagnostics.sort_by_key(|d| (d.id, d.locale));
        diagnostics
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}

/// What to do after the first failing identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Check every identifier and report all failures.
    #[default]
    Collect,
    /// Stop scheduling new identifiers once one has failed.
    FailFast,
}

/// How a locale with no string for an identifier is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MissingLocalePolicy {
    /// Absent strings are not checked.
    #[default]
    Skip,
    /// Absent strings go through the matcher and fail unless no parameters are expected.
    Require,
}

/// Enumeration bounds: identifiers `[1, max_id]`, locales `[0, max_locale)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub max_id: MessageId,
    pub max_locale: LocaleIndex,
}

impl Bounds {
    pub fn new(max_id: MessageId, max_locale: LocaleIndex) -> Self {
        Self { max_id, max_locale }
    }

    /// Number of identifiers a full run visits.
    pub fn id_count(&self) -> u64 {
        u64::from(self.max_id)
    }
}

pub struct Verifier<'a> {
    catalog: &'a dyn MessageCatalog,
    signatures: &'a dyn SignatureTable,
    bounds: Bounds,
    failure_policy: FailurePolicy,
    missing_locales: MissingLocalePolicy,
}

impl<'a> Verifier<'a> {
    pub fn new(
        catalog: &'a dyn MessageCatalog,
        signatures: &'a dyn SignatureTable,
        bounds: Bounds,
    ) -> Self {
        Self {
            catalog,
            signatures,
            bounds,
            failure_policy: FailurePolicy::default(),
            missing_locales: MissingLocalePolicy::default(),
        }
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_missing_locales(mut self, policy: MissingLocalePolicy) -> Self {
        self.missing_locales = policy;
        self
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Verify every identifier in range. Returns `true` if all passed.
    ///
    /// With [`FailurePolicy::FailFast`] the run stops early, but identifiers
    /// already in flight on other workers may still report.
    pub fn verify_catalog(&self, sink: &dyn DiagnosticSink) -> bool {
        let ids = 1..=self.bounds.max_id;

        match self.failure_policy {
            FailurePolicy::Collect => ids
                .into_par_iter()
                .map(|id| self.verify_id(id, sink))
                .reduce(|| true, |a, b| a && b),
            FailurePolicy::FailFast => ids.into_par_iter().all(|id| self.verify_id(id, sink)),
        }
    }

    /// Verify all locales of a single identifier.
    ///
    /// An identifier without a declared signature is treated as unverified.
    pub fn verify_id(&self, id: MessageId, sink: &dyn DiagnosticSink) -> bool {
        let Some(signature) = self.signatures.lookup_signature(id) else {
            return true;
        };
        if signature.is_unverified() {
            return true;
        }

        let mut passed = true;
        for locale in 0..self.bounds.max_locale {
            let text = self.catalog.lookup_string(id, locale);
            if text.is_none() && self.missing_locales == MissingLocalePolicy::Skip {
                continue;
            }

            if let Err(mismatch) = check(text, signature) {
                sink.report(Diagnostic {
                    id,
                    locale,
                    expected: signature.render(),
                    found: text.map(render_found).unwrap_or_default(),
                    mismatch,
                });
                passed = false;

                if self.failure_policy == FailurePolicy::FailFast {
                    break;
                }
            }
        }
        passed
    }
}
