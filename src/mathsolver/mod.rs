// src/mathsolver/mod.rs

pub mod expr;
pub mod tool_protocol;
pub mod tool_protocols;
pub mod tool_server;
pub mod tools;

#[cfg(feature = "server")]
pub mod http_server;
#[cfg(feature = "server")]
pub mod server_builder;

// Export the common entry points so callers reach them as
// mathsolver::ToolServer instead of mathsolver::tool_server::ToolServer.
pub use tool_server::ToolServer;
pub use tools::Calculator;
