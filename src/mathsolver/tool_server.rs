//! Unified Tool Server
//!
//! A concrete server that aggregates multiple tools behind a single
//! [`ToolProtocol`] implementation, routing each call to the protocol
//! registered under the tool's name.
//!
//! The server is the piece that gets deployed: the HTTP layer wraps an
//! `Arc<ToolServer>` and serves its tool list and executions to remote
//! clients.
//!
//! # Architecture
//!
//! ```text
//! Tools (Calculator, custom protocols, ...)
//!         ↓
//! ToolServer (implements ToolProtocol)
//!         ↓
//! HTTP endpoints (POST /tools/list, POST /tools/execute)
//!         ↓
//! Agents / clients
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use mathsolver::tool_server::ToolServer;
//! use mathsolver::tools::Calculator;
//! use mathsolver::tool_protocols::CalculatorProtocol;
//! use mathsolver::tool_protocol::ToolProtocol;
//! use std::sync::Arc;
//!
//! # async {
//! let protocol = Arc::new(CalculatorProtocol::new(Arc::new(Calculator::new())));
//!
//! let mut server = ToolServer::new();
//! server.register_tool("calculate", protocol).await;
//!
//! let tools = server.list_tools().await.unwrap();
//! # };
//! ```

use crate::mathsolver::tool_protocol::{ToolError, ToolMetadata, ToolProtocol, ToolResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A unified server that aggregates multiple tools
///
/// `ToolServer` implements [`ToolProtocol`] itself and routes execution
/// requests to the protocol registered under each tool name, so one server
/// instance can expose any mix of tool implementations.
///
/// # Thread Safety
///
/// The server is thread-safe and can be shared across concurrent tool
/// executions via `Arc<ToolServer>`.
#[derive(Clone)]
pub struct ToolServer {
    /// Map of tool name to its ToolProtocol implementation
    tools: Arc<RwLock<HashMap<String, Arc<dyn ToolProtocol>>>>,
}

impl ToolServer {
    /// Create a new empty tool server
    pub fn new() -> Self {
        Self {
            tools: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a tool with the server
    ///
    /// # Arguments
    ///
    /// * `tool_name` - The identifier clients use (e.g., "calculate")
    /// * `protocol` - The ToolProtocol implementation for this tool
    pub async fn register_tool(&mut self, tool_name: &str, protocol: Arc<dyn ToolProtocol>) {
        let mut tools = self.tools.write().await;
        tools.insert(tool_name.to_string(), protocol);
    }

    /// Unregister a tool from the server
    pub async fn unregister_tool(&mut self, tool_name: &str) {
        let mut tools = self.tools.write().await;
        tools.remove(tool_name);
    }

    /// Check if a tool is registered
    pub async fn has_tool(&self, tool_name: &str) -> bool {
        let tools = self.tools.read().await;
        tools.contains_key(tool_name)
    }

    /// Get the number of registered tools
    pub async fn tool_count(&self) -> usize {
        let tools = self.tools.read().await;
        tools.len()
    }
}

impl Default for ToolServer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolProtocol for ToolServer {
    /// Execute a tool by routing to the protocol registered under its name.
    async fn execute(
        &self,
        tool_name: &str,
        parameters: serde_json::Value,
    ) -> Result<ToolResult, Box<dyn Error + Send + Sync>> {
        let tools = self.tools.read().await;

        let protocol = tools.get(tool_name).cloned().ok_or_else(|| {
            Box::new(ToolError::NotFound(tool_name.to_string())) as Box<dyn Error + Send + Sync>
        })?;

        // Drop the read lock before executing to allow concurrent access
        drop(tools);

        protocol.execute(tool_name, parameters).await
    }

    /// List all available tools across all registered protocols.
    async fn list_tools(&self) -> Result<Vec<ToolMetadata>, Box<dyn Error + Send + Sync>> {
        let tools = self.tools.read().await;
        let protocols: Vec<Arc<dyn ToolProtocol>> = tools.values().cloned().collect();

        // Drop the read lock before making async calls
        drop(tools);

        let mut all_tools = Vec::new();

        for protocol in protocols {
            match protocol.list_tools().await {
                Ok(mut tool_list) => all_tools.append(&mut tool_list),
                Err(e) => {
                    // Return what we can and note the failing protocol
                    log::warn!("error listing tools from protocol: {}", e);
                }
            }
        }

        Ok(all_tools)
    }

    /// Get metadata for a specific tool, searching all registered protocols.
    async fn get_tool_metadata(
        &self,
        tool_name: &str,
    ) -> Result<ToolMetadata, Box<dyn Error + Send + Sync>> {
        let all_tools = self.list_tools().await?;
        all_tools
            .into_iter()
            .find(|t| t.name == tool_name)
            .ok_or_else(|| {
                Box::new(ToolError::NotFound(tool_name.to_string())) as Box<dyn Error + Send + Sync>
            })
    }

    fn protocol_name(&self) -> &str {
        "tool-server"
    }
}
