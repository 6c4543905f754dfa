//! Arithmetic expression engine.
//!
//! A small, closed interpreter for calculator expressions: a lexer, a
//! Pratt parser producing a typed tree, and a tree-walk evaluator whose
//! only namespace is the allow-listed math tables. Nothing an expression
//! can write reaches outside the engine — there are no strings, no
//! attribute walks, no ambient environment. The usual entry point is
//! [`evaluate`].
//!
//! ```
//! use mathsolver::expr::{evaluate, Value};
//!
//! assert_eq!(evaluate("2 + 2").unwrap(), Value::Int(4));
//! assert_eq!(evaluate("math.sqrt(16)").unwrap().to_string(), "4.0");
//! ```

use std::error::Error;
use std::fmt;

pub mod eval;
pub mod functions;
pub mod lexer;
pub mod parser;
pub mod value;

pub use parser::Expr;
pub use value::Value;

/// Everything that can go wrong between an expression string and a value.
///
/// The `Display` form is the user-facing message a calculator reports, so
/// the wording stays short and names the offending piece of input.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The input failed to tokenize or parse.
    Syntax(String),
    /// A bare name that is not in any table.
    UnknownName(String),
    /// A `math.`-qualified name the math tables do not contain.
    UnknownMathAttribute(String),
    /// A constant used with call parentheses.
    NotCallable(String),
    /// A function used in value position, without call parentheses.
    MissingArguments(String),
    /// A call with the wrong number of arguments.
    Arity {
        name: String,
        expected: String,
        got: usize,
    },
    /// An argument of the wrong kind, such as a fractional digit count.
    InvalidArgument(String),
    DivisionByZero(&'static str),
    /// The input is outside the mathematical domain of the operation.
    Domain(&'static str),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::Syntax(message) => write!(f, "{}", message),
            EvalError::UnknownName(name) => write!(f, "name '{}' is not defined", name),
            EvalError::UnknownMathAttribute(attr) => {
                write!(f, "module 'math' has no attribute '{}'", attr)
            }
            EvalError::NotCallable(name) => write!(f, "'{}' is not callable", name),
            EvalError::MissingArguments(name) => {
                write!(f, "'{}' is a function; call it with arguments", name)
            }
            EvalError::Arity {
                name,
                expected,
                got,
            } => write!(f, "{}() takes {} ({} given)", name, expected, got),
            EvalError::InvalidArgument(message) => write!(f, "{}", message),
            EvalError::DivisionByZero(message) => write!(f, "{}", message),
            EvalError::Domain(message) => write!(f, "{}", message),
        }
    }
}

impl Error for EvalError {}

/// Tokenize, parse, and evaluate one expression.
pub fn evaluate(input: &str) -> Result<Value, EvalError> {
    let tokens = lexer::tokenize(input)?;
    let expr = parser::parse(tokens)?;
    eval::eval(&expr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_results_print_without_decimal_point() {
        assert_eq!(evaluate("2 + 2").unwrap().to_string(), "4");
    }

    #[test]
    fn float_results_print_with_decimal_point() {
        assert_eq!(evaluate("math.sqrt(16)").unwrap().to_string(), "4.0");
        assert_eq!(evaluate("10 / 4").unwrap().to_string(), "2.5");
        assert_eq!(evaluate("10 / 5").unwrap().to_string(), "2.0");
    }

    #[test]
    fn division_by_zero_message() {
        assert_eq!(
            evaluate("1 / 0").unwrap_err().to_string(),
            "division by zero"
        );
        assert_eq!(
            evaluate("1.0 / 0").unwrap_err().to_string(),
            "float division by zero"
        );
    }

    #[test]
    fn malformed_input_is_a_syntax_error() {
        assert!(matches!(
            evaluate("2 +"),
            Err(EvalError::Syntax(_))
        ));
        assert!(matches!(evaluate(""), Err(EvalError::Syntax(_))));
    }

    #[test]
    fn attempted_code_injection_fails_to_resolve() {
        assert!(evaluate("__import__('os').system('id')").is_err());
        assert!(evaluate("open('/etc/passwd')").is_err());
        assert_eq!(
            evaluate("exec(1)").unwrap_err().to_string(),
            "name 'exec' is not defined"
        );
    }

    #[test]
    fn evaluation_is_deterministic() {
        let first = evaluate("math.sin(1.5) ** 2 + math.cos(1.5) ** 2").unwrap();
        let second = evaluate("math.sin(1.5) ** 2 + math.cos(1.5) ** 2").unwrap();
        assert_eq!(first, second);
    }
}
