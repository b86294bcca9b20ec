//! Catalint - printf-style parameter verifier for localized message catalogs
//!
//! Catalint is a CLI tool and library for checking that every locale's format
//! string uses the same conversion specifiers, in the same order, as the
//! parameters declared for its message id.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Specifier scanner, signature matcher, catalog verifier and loaders
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Check rules built on the verifier

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod rules;
