//! # MathSolver
//!
//! MathSolver is a Rust toolkit for giving LLM agents a trustworthy calculator:
//! a safe arithmetic expression engine exposed as a `calculate` tool through a
//! pluggable tool protocol, with optional HTTP deployment.
//!
//! The crate provides three layers:
//!
//! * **Expression Engine**: [`expr`] parses calculator input into a typed
//!   expression tree and evaluates it against a fixed, allow-listed math
//!   namespace. There is no ambient environment for an expression to reach
//!   into, so untrusted agent input is safe to evaluate.
//! * **Tools and Protocols**: [`tools::Calculator`] wraps the engine as a
//!   stateless tool; [`tool_protocols::CalculatorProtocol`] exposes it through
//!   the [`tool_protocol::ToolProtocol`] trait; [`tool_server::ToolServer`]
//!   aggregates any number of protocols behind one routing surface.
//! * **Server Deployment**: `ServerBuilder` (on the `server` feature) deploys
//!   a tool server over HTTP with bearer token authentication.
//!
//! ## Evaluating Expressions
//!
//! ```rust
//! use mathsolver::tools::Calculator;
//!
//! let calc = Calculator::new();
//! assert_eq!(calc.evaluate_to_string("2 + 2"), "4");
//! assert_eq!(calc.evaluate_to_string("math.sqrt(16)"), "4.0");
//! assert_eq!(calc.evaluate_to_string("1 / 0"), "Error: division by zero");
//! ```
//!
//! ## Serving the Calculator as a Tool
//!
//! ```rust
//! use std::sync::Arc;
//! use mathsolver::tool_protocol::ToolProtocol;
//! use mathsolver::tool_protocols::CalculatorProtocol;
//! use mathsolver::tool_server::ToolServer;
//! use mathsolver::tools::Calculator;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let mut server = ToolServer::new();
//! server
//!     .register_tool(
//!         "calculate",
//!         Arc::new(CalculatorProtocol::new(Arc::new(Calculator::new()))),
//!     )
//!     .await;
//!
//! let result = server
//!     .execute("calculate", serde_json::json!({"expression": "6 * 7"}))
//!     .await?;
//! assert_eq!(result.output["result"], "42");
//! # Ok(())
//! # }
//! ```
//!
//! ## Deploying over HTTP
//!
//! With the `server` feature enabled, a builder hides the HTTP plumbing:
//!
//! ```rust,ignore
//! use mathsolver::server_builder::ServerBuilder;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     mathsolver::init_logger();
//!
//!     let server = ServerBuilder::new()
//!         .with_calculator_tool()
//!         .await
//!         .with_bearer_token("my-secret-token")
//!         .start_on(8080)
//!         .await?;
//!
//!     println!("Math Solver running at {}", server.addr());
//!     Ok(())
//! }
//! ```

use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialise the global [`env_logger`] subscriber exactly once.
///
/// Applications embedding MathSolver can opt in to simple `RUST_LOG` driven
/// diagnostics without choosing a logging backend upfront.
///
/// ```rust
/// mathsolver::init_logger();
/// log::info!("Logger is ready");
/// ```
pub fn init_logger() {
    INIT_LOGGER.call_once(|| {
        env_logger::init();
    });
}

// Import the top-level `mathsolver` module.
pub mod mathsolver;

// Re-exporting key items for easier external access.
pub use mathsolver::expr;
pub use mathsolver::expr::{evaluate, EvalError, Value};
pub use mathsolver::tool_protocol;
pub use mathsolver::tool_protocols;
pub use mathsolver::tool_server;
pub use mathsolver::tool_server::ToolServer;
pub use mathsolver::tools;
pub use mathsolver::tools::Calculator;

#[cfg(feature = "server")]
pub use mathsolver::http_server;
#[cfg(feature = "server")]
pub use mathsolver::server_builder;
#[cfg(feature = "server")]
pub use mathsolver::server_builder::ServerBuilder;
