//! Tool Server Builder
//!
//! Simplifies creation and deployment of HTTP tool servers. Only available
//! when the "server" feature is enabled.
//!
//! # Example
//!
//! ```rust,ignore
//! use mathsolver::server_builder::ServerBuilder;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let server = ServerBuilder::new()
//!         .with_calculator_tool()
//!         .await
//!         .with_bearer_token("my-secret-token")
//!         .start_on(8080)
//!         .await?;
//!
//!     println!("Server running at {}", server.addr());
//!     Ok(())
//! }
//! ```

use crate::mathsolver::http_server::{self, HttpServerConfig, HttpServerInstance};
use crate::mathsolver::tool_protocol::ToolProtocol;
use crate::mathsolver::tool_protocols::CalculatorProtocol;
use crate::mathsolver::tool_server::ToolServer;
use crate::mathsolver::tools::Calculator;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builder for deploying tool servers over HTTP with a fluent API.
pub struct ServerBuilder {
    /// The tool server that aggregates all registered tools
    server: ToolServer,
    /// Optional bearer token required on every request
    bearer_token: Option<String>,
}

impl ServerBuilder {
    /// Create a new server builder with no tools and no authentication.
    pub fn new() -> Self {
        Self {
            server: ToolServer::new(),
            bearer_token: None,
        }
    }

    /// Add the calculator tool to this server under the name `calculate`.
    pub async fn with_calculator_tool(mut self) -> Self {
        let protocol = Arc::new(CalculatorProtocol::new(Arc::new(Calculator::new())));
        self.server.register_tool("calculate", protocol).await;
        self
    }

    /// Add a custom tool to the server
    ///
    /// # Arguments
    ///
    /// * `tool_name` - Unique name for the tool
    /// * `protocol` - The ToolProtocol implementation for this tool
    pub async fn with_custom_tool(
        mut self,
        tool_name: &str,
        protocol: Arc<dyn ToolProtocol>,
    ) -> Self {
        self.server.register_tool(tool_name, protocol).await;
        self
    }

    /// Set bearer token authentication
    ///
    /// Requires requests to include: `Authorization: Bearer <token>`
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Start the server on localhost at the specified port.
    pub async fn start_on(
        self,
        port: u16,
    ) -> Result<HttpServerInstance, Box<dyn Error + Send + Sync>> {
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        self.start_at(addr).await
    }

    /// Start the server at the specified address.
    pub async fn start_at(
        self,
        addr: SocketAddr,
    ) -> Result<HttpServerInstance, Box<dyn Error + Send + Sync>> {
        let config = HttpServerConfig {
            addr,
            bearer_token: self.bearer_token,
        };
        http_server::serve(config, Arc::new(self.server)).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
