//! HTTP Deployment for Tool Servers
//!
//! Serves any [`ToolProtocol`] implementation over HTTP using axum. Only
//! available when the "server" feature is enabled.
//!
//! # Endpoints
//!
//! - `POST /tools/list` - list all available tools from the protocol
//! - `POST /tools/execute` - execute a tool: `{"tool": "...", "parameters": {...}}`
//!
//! Responses mirror the protocol layer: a tool list comes back as
//! `{"tools": [...]}`, an execution as `{"result": {...}}`, and failures as
//! `{"error": "..."}` with a 4xx/5xx status.
//!
//! # Authentication
//!
//! When a bearer token is configured, every request must carry
//! `Authorization: Bearer <token>`; anything else is a 401.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use sha2::{Digest, Sha256};
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tokio::net::TcpListener;

use crate::mathsolver::tool_protocol::ToolProtocol;

/// Configuration for an HTTP tool server
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    /// Socket address to bind to (e.g., "127.0.0.1:8080")
    pub addr: SocketAddr,
    /// Optional bearer token required on every request
    pub bearer_token: Option<String>,
}

/// Authentication configuration for the HTTP server
#[derive(Debug, Clone)]
pub enum AuthConfig {
    /// No authentication required
    None,
    /// Bearer token authentication
    Bearer(String),
}

impl AuthConfig {
    /// Create bearer token authentication
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(token.into())
    }

    /// Validate an Authorization header value against the configuration.
    pub fn validate(&self, header: Option<&str>) -> bool {
        match self {
            AuthConfig::None => true,
            AuthConfig::Bearer(token) => match header.and_then(|h| h.strip_prefix("Bearer ")) {
                Some(provided) => {
                    // Comparing SHA-256 digests with ct_eq keeps the check
                    // constant-time even for tokens of different lengths.
                    let expected_hash = Sha256::digest(token.as_bytes());
                    let provided_hash = Sha256::digest(provided.as_bytes());
                    expected_hash.ct_eq(&provided_hash).into()
                }
                None => false,
            },
        }
    }
}

/// A running HTTP server instance
pub struct HttpServerInstance {
    addr: SocketAddr,
    handle: tokio::task::JoinHandle<std::io::Result<()>>,
}

impl HttpServerInstance {
    /// The socket address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop the server by aborting its serve task.
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

struct AppState {
    protocol: Arc<dyn ToolProtocol>,
    auth: AuthConfig,
}

/// Build the axum router serving the given protocol.
///
/// Exposed separately from [`serve`] so the routes can be exercised in-process
/// without binding a socket.
pub fn router(protocol: Arc<dyn ToolProtocol>, auth: AuthConfig) -> Router {
    let state = Arc::new(AppState { protocol, auth });
    Router::new()
        .route("/tools/list", post(list_tools))
        .route("/tools/execute", post(execute_tool))
        .with_state(state)
}

/// Bind the configured address and serve the protocol until shut down.
pub async fn serve(
    config: HttpServerConfig,
    protocol: Arc<dyn ToolProtocol>,
) -> Result<HttpServerInstance, Box<dyn Error + Send + Sync>> {
    let auth = match config.bearer_token {
        Some(token) => AuthConfig::bearer(token),
        None => AuthConfig::None,
    };
    let app = router(protocol, auth);

    let listener = TcpListener::bind(config.addr).await?;
    let addr = listener.local_addr()?;
    log::info!("tool server listening on {}", addr);

    let handle = tokio::spawn(async move { axum::serve(listener, app).await });

    Ok(HttpServerInstance { addr, handle })
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": "Unauthorized"})),
    )
        .into_response()
}

fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
}

async fn list_tools(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    if !state.auth.validate(authorization_header(&headers)) {
        return unauthorized();
    }

    match state.protocol.list_tools().await {
        Ok(tools) => (StatusCode::OK, Json(json!({"tools": tools}))).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

async fn execute_tool(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<serde_json::Value>,
) -> Response {
    if !state.auth.validate(authorization_header(&headers)) {
        return unauthorized();
    }

    let tool_name = payload["tool"].as_str().unwrap_or("");
    let params = payload["parameters"].clone();

    match state.protocol.execute(tool_name, params).await {
        Ok(result) => (StatusCode::OK, Json(json!({"result": result}))).into_response(),
        Err(e) => {
            log::warn!("tool '{}' failed: {}", tool_name, e);
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mathsolver::tool_protocols::CalculatorProtocol;
    use crate::mathsolver::tool_server::ToolServer;
    use crate::mathsolver::tools::Calculator;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn calculator_router(auth: AuthConfig) -> Router {
        let mut server = ToolServer::new();
        server
            .register_tool(
                "calculate",
                Arc::new(CalculatorProtocol::new(Arc::new(Calculator::new()))),
            )
            .await;
        router(Arc::new(server), auth)
    }

    fn post_json(uri: &str, body: serde_json::Value, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn lists_the_calculate_tool() {
        let app = calculator_router(AuthConfig::None).await;

        let response = app
            .oneshot(post_json("/tools/list", json!({}), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["tools"][0]["name"], "calculate");
    }

    #[tokio::test]
    async fn executes_an_expression_over_http() {
        let app = calculator_router(AuthConfig::None).await;

        let response = app
            .oneshot(post_json(
                "/tools/execute",
                json!({"tool": "calculate", "parameters": {"expression": "2 + 2"}}),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["result"]["output"]["result"], "4");
    }

    #[tokio::test]
    async fn evaluation_errors_come_back_as_tool_output() {
        let app = calculator_router(AuthConfig::None).await;

        let response = app
            .oneshot(post_json(
                "/tools/execute",
                json!({"tool": "calculate", "parameters": {"expression": "1 / 0"}}),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(
            body["result"]["output"]["result"],
            "Error: division by zero"
        );
    }

    #[tokio::test]
    async fn unknown_tool_is_a_bad_request() {
        let app = calculator_router(AuthConfig::None).await;

        let response = app
            .oneshot(post_json(
                "/tools/execute",
                json!({"tool": "bash", "parameters": {}}),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn bearer_token_is_enforced() {
        let app = calculator_router(AuthConfig::bearer("secret")).await;
        let response = app
            .oneshot(post_json("/tools/list", json!({}), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let app = calculator_router(AuthConfig::bearer("secret")).await;
        let response = app
            .oneshot(post_json("/tools/list", json!({}), Some("wrong")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let app = calculator_router(AuthConfig::bearer("secret")).await;
        let response = app
            .oneshot(post_json("/tools/list", json!({}), Some("secret")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn auth_config_validation() {
        assert!(AuthConfig::None.validate(None));
        let auth = AuthConfig::bearer("token123");
        assert!(auth.validate(Some("Bearer token123")));
        assert!(!auth.validate(Some("Bearer other")));
        assert!(!auth.validate(Some("token123")));
        assert!(!auth.validate(None));
    }
}
