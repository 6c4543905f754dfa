//! Math Solver tool server over HTTP
//!
//! Starts a tool server on localhost:8008 exposing the `calculate` tool.
//!
//! ```bash
//! cargo run --example calculate_server --features server
//! ```
//!
//! Then, from another terminal:
//!
//! ```bash
//! curl -s -X POST http://127.0.0.1:8008/tools/list \
//!   -H 'Authorization: Bearer demo-token' | jq
//!
//! curl -s -X POST http://127.0.0.1:8008/tools/execute \
//!   -H 'Authorization: Bearer demo-token' \
//!   -H 'Content-Type: application/json' \
//!   -d '{"tool": "calculate", "parameters": {"expression": "math.sqrt(16)"}}' | jq
//! ```

use mathsolver::server_builder::ServerBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    mathsolver::init_logger();

    let server = ServerBuilder::new()
        .with_calculator_tool()
        .await
        .with_bearer_token("demo-token")
        .start_on(8008)
        .await?;

    println!("Math Solver tool server running at {}", server.addr());
    println!("Endpoints:");
    println!("  POST /tools/list");
    println!("  POST /tools/execute");
    println!("Authorization: Bearer demo-token");

    // Serve until interrupted.
    tokio::signal::ctrl_c().await?;
    server.shutdown();
    Ok(())
}
