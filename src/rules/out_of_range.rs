//! Out-of-range id detection rule.
//!
//! Verification only visits ids in `[1, max_id]`. Entries above that bound in
//! either the catalog or the signature file are never checked.

use crate::{
    core::{Catalog, CheckContext, MessageId, SignatureDeclarations},
    issues::{IdSource, OutOfRangeIssue},
};

pub fn check_out_of_range_issues(ctx: &CheckContext) -> Vec<OutOfRangeIssue> {
    check_out_of_range(ctx.catalog(), ctx.signatures(), ctx.max_id())
}

pub fn check_out_of_range(
    catalog: &Catalog,
    signatures: &SignatureDeclarations,
    max_id: MessageId,
) -> Vec<OutOfRangeIssue> {
    let from_catalog = catalog
        .ids()
        .into_iter()
        .filter(|&id| id > max_id)
        .filter_map(|id| {
            let (_, location) = catalog.first_location(id)?;
            Some(OutOfRangeIssue {
                location: location.clone(),
                id,
                max_id,
                source: IdSource::Catalog,
            })
        });

    let from_signatures = signatures
        .entries
        .range(max_id.saturating_add(1)..)
        .filter(|(id, _)| **id > max_id)
        .map(|(id, entry)| OutOfRangeIssue {
            location: entry.location.clone(),
            id: *id,
            max_id,
            source: IdSource::Signatures,
        });

    from_catalog.chain(from_signatures).collect()
}
