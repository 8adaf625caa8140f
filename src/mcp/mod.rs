//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes configuration lookup, call scanning and the transform to AI
//! assistants over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{ClsMcpServer, run_server};
