//! # Calculator Tool
//!
//! A safe arithmetic calculator for LLM agents, built on the crate's own
//! expression engine rather than any general-purpose evaluator. Input is
//! parsed into a typed expression tree and interpreted against a fixed math
//! namespace, so there is no way for an expression to reach the host
//! environment.
//!
//! ## Supported Input
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%` (floored modulo), `**` (power)
//! - **Grouping**: parentheses, unary `+`/`-`
//! - **Math library**: `math.sqrt`, `math.sin`, `math.cos`, `math.log`,
//!   `math.floor`, and the rest of the allow-listed functions, also
//!   reachable without the `math.` prefix
//! - **Constants**: `math.pi`, `math.e`, `math.tau`, `math.inf`, `math.nan`
//! - **Built-ins**: `abs()`, `round()`, `min()`, `max()`
//!
//! Integer and float results are kept distinct: `2 + 2` is `4`,
//! `math.sqrt(16)` is `4.0`.
//!
//! ## Quick Start
//!
//! ```rust
//! use mathsolver::tools::Calculator;
//!
//! let calc = Calculator::new();
//!
//! assert_eq!(calc.evaluate_to_string("2 + 2"), "4");
//! assert_eq!(calc.evaluate_to_string("math.sqrt(16)"), "4.0");
//! assert_eq!(calc.evaluate_to_string("1 / 0"), "Error: division by zero");
//! ```
//!
//! ## Thread Safety
//!
//! The `Calculator` is stateless and thread-safe. A single instance can be
//! shared across threads or tasks.

use crate::mathsolver::expr::{self, EvalError, Value};

/// A safe, stateless calculator for arithmetic expressions.
///
/// Each call parses and evaluates one expression from scratch; there is no
/// shared state and no variable environment between calls.
#[derive(Clone, Default)]
pub struct Calculator {
    // Stateless, no fields needed
}

impl Calculator {
    /// Create a new calculator instance. Instances are free to create.
    pub fn new() -> Self {
        Calculator {}
    }

    /// Evaluate an expression and return the computed value.
    ///
    /// Leading and trailing whitespace is ignored. Errors cover malformed
    /// input, unknown names, wrong argument counts, division by zero, and
    /// out-of-domain math calls.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mathsolver::tools::Calculator;
    /// use mathsolver::expr::Value;
    ///
    /// let calc = Calculator::new();
    /// assert_eq!(calc.evaluate("  2 + 2  ").unwrap(), Value::Int(4));
    /// assert!(calc.evaluate("1 / 0").is_err());
    /// ```
    pub fn evaluate(&self, expression: &str) -> Result<Value, EvalError> {
        expr::evaluate(expression.trim())
    }

    /// Evaluate an expression and report the outcome as text.
    ///
    /// This is the calculator's tool-facing surface: it never fails.
    /// Successful results render as their numeric text, failures as the
    /// error message behind an `Error: ` prefix.
    pub fn evaluate_to_string(&self, expression: &str) -> String {
        match self.evaluate(expression) {
            Ok(value) => value.to_string(),
            Err(e) => format!("Error: {}", e),
        }
    }
}
