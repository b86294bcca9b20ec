//! Undeclared message detection rule.
//!
//! A catalog id with no entry in the signature file is accepted by the
//! verifier without any check. This rule surfaces those ids so they are
//! declared (or explicitly marked unverified).

use crate::{
    core::{Catalog, CheckContext, MessageId, SignatureTable},
    issues::UndeclaredIssue,
};

pub fn check_undeclared_issues(ctx: &CheckContext) -> Vec<UndeclaredIssue> {
    check_undeclared(ctx.catalog(), ctx.signatures(), ctx.max_id())
}

/// Ids in `[1, max_id]` that appear in any locale but have no signature.
///
/// Ids above `max_id` are left to the out-of-range rule.
pub fn check_undeclared(
    catalog: &Catalog,
    signatures: &dyn SignatureTable,
    max_id: MessageId,
) -> Vec<UndeclaredIssue> {
    catalog
        .ids()
        .into_iter()
        .filter(|&id| id <= max_id && signatures.lookup_signature(id).is_none())
        .filter_map(|id| {
            let (locale, location) = catalog.first_location(id)?;
            Some(UndeclaredIssue {
                location: location.clone(),
                id,
                locale: catalog.locale_name(locale).unwrap_or_default().to_string(),
            })
        })
        .collect()
}
