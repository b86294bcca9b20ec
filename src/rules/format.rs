//! Format string verification rule.
//!
//! Runs the verifier over the whole id range and turns every diagnostic into
//! an issue pointing at the offending entry of the locale file.

use std::path::Path;

use crate::{
    core::{Catalog, CheckContext, CollectingSink, Diagnostic, MessageCatalog, MessageLocation},
    issues::FormatMismatchIssue,
};

pub fn check_format_issues(ctx: &CheckContext) -> Vec<FormatMismatchIssue> {
    let sink = CollectingSink::new();
    let passed = ctx.verifier().verify_catalog(&sink);

    if ctx.verbose {
        eprintln!(
            "Note: verification {} ({} failing pair(s))",
            if passed { "passed" } else { "failed" },
            sink.len()
        );
    }

    diagnostics_to_issues(
        ctx.catalog(),
        &ctx.resolved_messages_dir(),
        sink.into_diagnostics(),
    )
}

/// Attach file locations and the offending text to verifier diagnostics.
///
/// A diagnostic for a locale without an entry points at line 1 of that
/// locale's file (or where the file would be).
pub fn diagnostics_to_issues(
    catalog: &Catalog,
    messages_dir: &Path,
    diagnostics: Vec<Diagnostic>,
) -> Vec<FormatMismatchIssue> {
    diagnostics
        .into_iter()
        .map(|diagnostic| {
            let locale = catalog
                .locale_name(diagnostic.locale)
                .unwrap_or_default()
                .to_string();

            let location = match catalog.location(diagnostic.id, diagnostic.locale) {
                Some(location) => location.clone(),
                None => {
                    let file_path = match catalog.messages(diagnostic.locale) {
                        Some(messages) => messages.file_path.clone(),
                        None => messages_dir
                            .join(format!("{}.json", locale))
                            .to_string_lossy()
                            .to_string(),
                    };
                    MessageLocation::with_line(file_path, 1)
                }
            };

            FormatMismatchIssue {
                location,
                id: diagnostic.id,
                value: catalog
                    .lookup_string(diagnostic.id, diagnostic.locale)
                    .map(String::from),
                locale,
                expected: diagnostic.expected,
                found: diagnostic.found,
                mismatch: diagnostic.mismatch,
            }
        })
        .collect()
}
