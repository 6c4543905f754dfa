//! Tool Protocol Implementations
//!
//! Concrete implementations of the [`ToolProtocol`] trait. Each struct wires
//! one of the built-in tools into the protocol interface so it can be served
//! by a [`ToolServer`](crate::mathsolver::tool_server::ToolServer) or called
//! directly.
//!
//! # Available Implementations
//!
//! - **CalculatorProtocol**: exposes the [`Calculator`] as the `calculate` tool

use crate::mathsolver::tool_protocol::{
    ToolError, ToolMetadata, ToolParameter, ToolParameterType, ToolProtocol, ToolResult,
};
use crate::mathsolver::tools::Calculator;
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::error::Error;
use std::sync::Arc;

/// Calculator Tool Protocol
///
/// Wraps the [`Calculator`] to expose a single `calculate` tool through the
/// [`ToolProtocol`] interface.
///
/// The tool takes one required string parameter, `expression`, and always
/// reports a successful [`ToolResult`] whose output carries the outcome as
/// text: the numeric result on success, or a message starting with
/// `Error: ` when the expression could not be evaluated. Keeping failures
/// in-band lets the calling agent read the message and correct its
/// expression, instead of treating a typo as a transport failure. Structural
/// problems with the request itself (missing or non-string `expression`)
/// are reported as [`ToolError::InvalidParameters`].
///
/// # Example
///
/// ```rust,no_run
/// use mathsolver::tools::Calculator;
/// use mathsolver::tool_protocols::CalculatorProtocol;
/// use std::sync::Arc;
///
/// let protocol = CalculatorProtocol::new(Arc::new(Calculator::new()));
/// ```
pub struct CalculatorProtocol {
    /// The underlying calculator implementation
    calculator: Arc<Calculator>,
}

impl CalculatorProtocol {
    /// Create a new calculator protocol wrapping a Calculator
    pub fn new(calculator: Arc<Calculator>) -> Self {
        Self { calculator }
    }

    fn calculate_metadata() -> ToolMetadata {
        ToolMetadata::new(
            "calculate",
            "Evaluates a mathematical expression and returns the result as text. \
             Supports +, -, *, /, % and ** with parentheses, the math library \
             (math.sqrt, math.sin, math.log, math.pi, ...), and abs/round/min/max. \
             On failure the result is an explanatory message starting with 'Error: '.",
        )
        .with_parameter(
            ToolParameter::new("expression", ToolParameterType::String)
                .with_description(
                    "The expression to evaluate (e.g., '2 + 2', 'math.sqrt(16)', \
                     'round(math.pi, 2)')",
                )
                .required(),
        )
    }
}

#[async_trait]
impl ToolProtocol for CalculatorProtocol {
    async fn execute(
        &self,
        tool_name: &str,
        parameters: JsonValue,
    ) -> Result<ToolResult, Box<dyn Error + Send + Sync>> {
        // This protocol only handles the "calculate" tool
        if tool_name != "calculate" {
            return Err(Box::new(ToolError::NotFound(tool_name.to_string())));
        }

        let expression = match parameters.get("expression") {
            Some(JsonValue::String(s)) => s.as_str(),
            Some(other) => {
                return Err(Box::new(ToolError::InvalidParameters(format!(
                    "'expression' must be a string, got: {}",
                    other
                ))));
            }
            None => {
                return Err(Box::new(ToolError::InvalidParameters(
                    "Missing 'expression' parameter. \
                     Use e.g. {\"expression\": \"2 + 2\"}"
                        .to_string(),
                )));
            }
        };

        let outcome = self.calculator.evaluate_to_string(expression);
        log::debug!("calculate: {:?} -> {:?}", expression, outcome);

        // Evaluation failures travel in-band as "Error: ..." text, so the
        // tool call itself is always a success.
        Ok(ToolResult::success(serde_json::json!({
            "result": outcome
        })))
    }

    async fn list_tools(&self) -> Result<Vec<ToolMetadata>, Box<dyn Error + Send + Sync>> {
        Ok(vec![Self::calculate_metadata()])
    }

    async fn get_tool_metadata(
        &self,
        tool_name: &str,
    ) -> Result<ToolMetadata, Box<dyn Error + Send + Sync>> {
        if tool_name != "calculate" {
            return Err(Box::new(ToolError::NotFound(tool_name.to_string())));
        }
        Ok(Self::calculate_metadata())
    }

    fn protocol_name(&self) -> &str {
        "calculator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn protocol() -> CalculatorProtocol {
        CalculatorProtocol::new(Arc::new(Calculator::new()))
    }

    #[tokio::test]
    async fn executes_an_expression() {
        let result = protocol()
            .execute("calculate", serde_json::json!({"expression": "2 + 2"}))
            .await
            .unwrap();
        assert!(result.success);
        assert_eq!(result.output["result"], "4");
    }

    #[tokio::test]
    async fn evaluation_failures_stay_in_band() {
        let result = protocol()
            .execute("calculate", serde_json::json!({"expression": "1 / 0"}))
            .await
            .unwrap();
        assert!(result.success);
        assert_eq!(result.output["result"], "Error: division by zero");
    }

    #[tokio::test]
    async fn missing_expression_is_invalid_parameters() {
        let err = protocol()
            .execute("calculate", serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Invalid parameters"));
    }

    #[tokio::test]
    async fn non_string_expression_is_invalid_parameters() {
        let err = protocol()
            .execute("calculate", serde_json::json!({"expression": 42}))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("must be a string"));
    }

    #[tokio::test]
    async fn unknown_tool_is_not_found() {
        let err = protocol()
            .execute("bash", serde_json::json!({"expression": "1"}))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Tool not found"));
    }

    #[tokio::test]
    async fn metadata_describes_the_expression_parameter() {
        let metadata = protocol().get_tool_metadata("calculate").await.unwrap();
        assert_eq!(metadata.name, "calculate");
        assert_eq!(metadata.parameters.len(), 1);
        assert_eq!(metadata.parameters[0].name, "expression");
        assert!(metadata.parameters[0].required);
    }
}
