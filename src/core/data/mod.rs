//! Data types shared by the loaders, rules, and reporters.
//!
//! ## Module Structure
//!
//! - `message`: Locale and signature file entries with their locations

pub mod message;

pub use message::{LocaleMessages, MessageEntry, MessageLocation, SignatureEntry};
