//! Loaders for locale message files and the signature declaration file.

pub mod json;
