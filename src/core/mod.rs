//! Verification engine and the file-backed data it runs on.
//!
//! - `specifier` / `signature` / `matcher`: checking one string
//! - `enumerator`: checking the whole id x locale range
//! - `catalog` / `parsers`: loading message and signature files
//! - `context`: everything a command needs, resolved from config and CLI

pub mod catalog;
pub mod context;
pub mod data;
pub mod enumerator;
pub mod matcher;
pub mod parsers;
pub mod signature;
pub mod specifier;

pub use catalog::{Catalog, SignatureDeclarations};
pub use context::CheckContext;
pub use data::{LocaleMessages, MessageEntry, MessageLocation, SignatureEntry};
pub use enumerator::{
    Bounds, CollectingSink, Diagnostic, DiagnosticSink, FailurePolicy, LocaleIndex,
    MessageCatalog, MessageId, MissingLocalePolicy, SignatureTable, Verifier,
};
pub use matcher::{Mismatch, check, matches};
pub use signature::{ParamKind, ParameterSignature, UNVERIFIED_MARKER};
pub use specifier::{Specifier, SpecifierKind, next_specifier, render_found, specifiers};
