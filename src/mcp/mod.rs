//! Model Context Protocol (MCP) server.
//!
//! Exposes key lookup, cache refresh and insertion formatting to AI assistants
//! over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Tool router and server entry point
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{LokeyMcpServer, run_server};
