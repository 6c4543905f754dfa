//! Tree-walk interpreter for parsed expressions.
//!
//! Evaluation is a plain recursive walk. Names resolve against the fixed
//! tables in [`functions`](super::functions) and nowhere else; a
//! `math.`-qualified name only looks inside the math tables, while a bare
//! name tries the general built-ins first and the math library second, so
//! both `sqrt(16)` and `math.sqrt(16)` work.

use super::functions::{BUILTIN_FUNCTIONS, MATH_CONSTANTS, MATH_FUNCTIONS};
use super::parser::{BinaryOp, Expr, UnaryOp};
use super::value::Value;
use super::EvalError;

/// Evaluate a parsed expression to a single value.
pub fn eval(expr: &Expr) -> Result<Value, EvalError> {
    match expr {
        Expr::Literal(value) => Ok(*value),
        Expr::Name(name) => resolve_constant(name),
        Expr::Unary(op, operand) => {
            let value = eval(operand)?;
            Ok(match op {
                UnaryOp::Neg => value.neg(),
                UnaryOp::Pos => value,
            })
        }
        Expr::Binary(op, lhs, rhs) => {
            let left = eval(lhs)?;
            let right = eval(rhs)?;
            match op {
                BinaryOp::Add => left.add(right),
                BinaryOp::Sub => left.sub(right),
                BinaryOp::Mul => left.mul(right),
                BinaryOp::Div => left.div(right),
                BinaryOp::Mod => left.rem(right),
                BinaryOp::Pow => left.pow(right),
            }
        }
        Expr::Call { name, args } => {
            let mut values = Vec::with_capacity(args.len());
            for arg in args {
                values.push(eval(arg)?);
            }
            call_function(name, &values)
        }
    }
}

/// Split `math.sqrt` into `(Some("math"), "sqrt")`, bare names into
/// `(None, name)`.
fn split_qualified(name: &str) -> (Option<&str>, &str) {
    match name.split_once('.') {
        Some((module, attr)) => (Some(module), attr),
        None => (None, name),
    }
}

fn resolve_constant(name: &str) -> Result<Value, EvalError> {
    match split_qualified(name) {
        (Some("math"), attr) => {
            if let Some(&value) = MATH_CONSTANTS.get(attr) {
                Ok(Value::Float(value))
            } else if MATH_FUNCTIONS.contains_key(attr) {
                Err(EvalError::MissingArguments(name.to_string()))
            } else {
                Err(EvalError::UnknownMathAttribute(attr.to_string()))
            }
        }
        (Some(module), _) => Err(EvalError::UnknownName(module.to_string())),
        (None, bare) => {
            if let Some(&value) = MATH_CONSTANTS.get(bare) {
                Ok(Value::Float(value))
            } else if BUILTIN_FUNCTIONS.contains_key(bare) || MATH_FUNCTIONS.contains_key(bare) {
                Err(EvalError::MissingArguments(bare.to_string()))
            } else {
                Err(EvalError::UnknownName(bare.to_string()))
            }
        }
    }
}

fn call_function(name: &str, args: &[Value]) -> Result<Value, EvalError> {
    match split_qualified(name) {
        (Some("math"), attr) => {
            if let Some(function) = MATH_FUNCTIONS.get(attr) {
                function.call(name, args)
            } else if MATH_CONSTANTS.contains_key(attr) {
                Err(EvalError::NotCallable(name.to_string()))
            } else {
                Err(EvalError::UnknownMathAttribute(attr.to_string()))
            }
        }
        (Some(module), _) => Err(EvalError::UnknownName(module.to_string())),
        (None, bare) => {
            if let Some(function) = BUILTIN_FUNCTIONS.get(bare) {
                function.call(bare, args)
            } else if let Some(function) = MATH_FUNCTIONS.get(bare) {
                function.call(bare, args)
            } else if MATH_CONSTANTS.contains_key(bare) {
                Err(EvalError::NotCallable(bare.to_string()))
            } else {
                Err(EvalError::UnknownName(bare.to_string()))
            }
        }
    }
}
