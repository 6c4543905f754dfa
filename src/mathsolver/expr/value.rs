//! Numeric value model for the expression engine.
//!
//! Expressions compute over two kinds of numbers: exact integers and
//! double-precision floats. The split is visible to callers through the
//! textual form of results: integer results print without a decimal point
//! (`2 + 2` is `4`), float results always carry one (`math.sqrt(16)` is
//! `4.0`). Arithmetic promotes to float as soon as either operand is a
//! float, and also when an integer operation would overflow — the engine
//! trades exactness for bounded computation rather than growing numbers
//! without limit.

use std::fmt;

use super::EvalError;

/// A computed number: an exact 64-bit integer or an IEEE 754 double.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl Value {
    /// Widen to a float regardless of variant.
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Int(i) => i as f64,
            Value::Float(f) => f,
        }
    }

    /// True for the `Float` variant.
    pub fn is_float(self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn add(self, rhs: Value) -> Result<Value, EvalError> {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Ok(a
                .checked_add(b)
                .map(Value::Int)
                .unwrap_or(Value::Float(a as f64 + b as f64))),
            _ => Ok(Value::Float(self.as_f64() + rhs.as_f64())),
        }
    }

    pub fn sub(self, rhs: Value) -> Result<Value, EvalError> {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Ok(a
                .checked_sub(b)
                .map(Value::Int)
                .unwrap_or(Value::Float(a as f64 - b as f64))),
            _ => Ok(Value::Float(self.as_f64() - rhs.as_f64())),
        }
    }

    pub fn mul(self, rhs: Value) -> Result<Value, EvalError> {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Ok(a
                .checked_mul(b)
                .map(Value::Int)
                .unwrap_or(Value::Float(a as f64 * b as f64))),
            _ => Ok(Value::Float(self.as_f64() * rhs.as_f64())),
        }
    }

    /// True division: the result is always a float, and a zero divisor is
    /// an error rather than an infinity.
    pub fn div(self, rhs: Value) -> Result<Value, EvalError> {
        if rhs.is_zero() {
            let message = if self.is_float() || rhs.is_float() {
                "float division by zero"
            } else {
                "division by zero"
            };
            return Err(EvalError::DivisionByZero(message));
        }
        Ok(Value::Float(self.as_f64() / rhs.as_f64()))
    }

    /// Floored modulo: the result takes the sign of the divisor, so
    /// `-7 % 3` is `2` and `7 % -3` is `-2`.
    pub fn rem(self, rhs: Value) -> Result<Value, EvalError> {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => {
                if b == 0 {
                    return Err(EvalError::DivisionByZero(
                        "integer division or modulo by zero",
                    ));
                }
                // i64::MIN % -1 is the one int case that cannot be
                // represented; its mathematical result is 0.
                let mut r = a.checked_rem(b).unwrap_or(0);
                if r != 0 && (r < 0) != (b < 0) {
                    r += b;
                }
                Ok(Value::Int(r))
            }
            _ => {
                if rhs.is_zero() {
                    return Err(EvalError::DivisionByZero("float modulo by zero"));
                }
                let (x, y) = (self.as_f64(), rhs.as_f64());
                Ok(Value::Float(x - y * (x / y).floor()))
            }
        }
    }

    /// Exponentiation. Integer base and non-negative integer exponent stay
    /// integral when the result fits in an `i64`; everything else goes
    /// through float math. A zero base with a negative exponent and a
    /// negative base with a fractional exponent are errors.
    pub fn pow(self, rhs: Value) -> Result<Value, EvalError> {
        if let (Value::Int(a), Value::Int(b)) = (self, rhs) {
            if b >= 0 {
                if let Ok(exp) = u32::try_from(b) {
                    if let Some(result) = a.checked_pow(exp) {
                        return Ok(Value::Int(result));
                    }
                }
                return Ok(Value::Float((a as f64).powf(b as f64)));
            }
        }
        let (base, exp) = (self.as_f64(), rhs.as_f64());
        if base == 0.0 && exp < 0.0 {
            return Err(EvalError::DivisionByZero(
                "0.0 cannot be raised to a negative power",
            ));
        }
        if base < 0.0 && exp.fract() != 0.0 {
            // The mathematical result is complex; the engine only
            // computes real numbers.
            return Err(EvalError::Domain("math domain error"));
        }
        Ok(Value::Float(base.powf(exp)))
    }

    /// Arithmetic negation, promoting on the single overflowing int.
    pub fn neg(self) -> Value {
        match self {
            Value::Int(i) => i
                .checked_neg()
                .map(Value::Int)
                .unwrap_or(Value::Float(-(i as f64))),
            Value::Float(f) => Value::Float(-f),
        }
    }

    fn is_zero(self) -> bool {
        match self {
            Value::Int(i) => i == 0,
            Value::Float(f) => f == 0.0,
        }
    }
}

impl fmt::Display for Value {
    /// Render the way results are reported to callers: ints bare, floats
    /// always with a decimal point, non-finite floats as `inf`/`-inf`/`nan`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => {
                if x.is_nan() {
                    write!(f, "nan")
                } else if x.is_infinite() {
                    write!(f, "{}", if x > 0.0 { "inf" } else { "-inf" })
                } else {
                    let rendered = format!("{}", x);
                    if rendered.contains('.') {
                        write!(f, "{}", rendered)
                    } else {
                        write!(f, "{}.0", rendered)
                    }
                }
            }
        }
    }
}
