//! Model Context Protocol (MCP) server implementation.
//!
//! This module provides an MCP server that exposes catalog verification to AI
//! assistants over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{CatalintMcpServer, run_server};
