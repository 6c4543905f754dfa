//! Built-in Tool Implementations
//!
//! This module provides the production-ready tools the server can expose.
//!
//! # Available Tools
//!
//! - **Calculator**: Safe arithmetic expression evaluation
//!   - Own lexer/parser/interpreter, no ambient environment access
//!   - Allow-listed math namespace (`math.sqrt`, `abs`, `round`, `min`, `max`)
//!   - Stateless and thread-safe
//!   - Wrapped by `CalculatorProtocol` for use through the tool protocol
//!
//! # Integration
//!
//! Tools are exposed through the tool protocol system:
//!
//! ```rust
//! use mathsolver::tools::Calculator;
//! use mathsolver::tool_protocols::CalculatorProtocol;
//! use std::sync::Arc;
//!
//! let calculator = Arc::new(Calculator::new());
//! let protocol = CalculatorProtocol::new(calculator);
//! ```

pub mod calculator;

pub use calculator::Calculator;
