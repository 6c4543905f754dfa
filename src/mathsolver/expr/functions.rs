//! The fixed, allow-listed namespace available to expressions.
//!
//! Everything an expression can name lives in the three tables below:
//! the math function library, the math constants, and a handful of
//! general built-ins (`abs`, `round`, `min`, `max`). Nothing else
//! resolves — there is no ambient environment to escape into. The tables
//! are data, so the interpreter stays a pure dispatcher.
//!
//! Math library functions always compute over floats; the exceptions are
//! `floor`, `ceil` and `trunc`, which report integers. The built-ins
//! preserve the variant of their inputs (`abs(-5)` is `5`, not `5.0`).

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::value::Value;
use super::EvalError;

type Apply = Box<dyn Fn(&[Value]) -> Result<Value, EvalError> + Send + Sync>;

/// How many arguments a function accepts.
#[derive(Debug, Clone, Copy)]
pub enum Arity {
    Exact(usize),
    Range(usize, usize),
    AtLeast(usize),
}

impl Arity {
    fn accepts(self, got: usize) -> bool {
        match self {
            Arity::Exact(n) => got == n,
            Arity::Range(lo, hi) => got >= lo && got <= hi,
            Arity::AtLeast(n) => got >= n,
        }
    }

    fn describe(self) -> String {
        match self {
            Arity::Exact(1) => "exactly 1 argument".to_string(),
            Arity::Exact(n) => format!("exactly {} arguments", n),
            Arity::Range(lo, hi) => format!("{} to {} arguments", lo, hi),
            Arity::AtLeast(n) => format!("at least {} arguments", n),
        }
    }
}

/// An allow-listed function: an arity contract plus the computation.
pub struct MathFn {
    arity: Arity,
    apply: Apply,
}

impl MathFn {
    fn new(arity: Arity, apply: Apply) -> Self {
        Self { arity, apply }
    }

    /// Check the arity contract and run the function. `name` is the
    /// spelling used in the expression, for error messages.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, EvalError> {
        if !self.arity.accepts(args.len()) {
            return Err(EvalError::Arity {
                name: name.to_string(),
                expected: self.arity.describe(),
                got: args.len(),
            });
        }
        (self.apply)(args)
    }
}

/// A one-float-argument function with no domain restriction.
fn unary(f: fn(f64) -> f64) -> MathFn {
    MathFn::new(
        Arity::Exact(1),
        Box::new(move |args| Ok(Value::Float(f(args[0].as_f64())))),
    )
}

/// A one-float-argument function defined only where `in_domain` holds.
fn unary_in(in_domain: fn(f64) -> bool, f: fn(f64) -> f64) -> MathFn {
    MathFn::new(
        Arity::Exact(1),
        Box::new(move |args| {
            let x = args[0].as_f64();
            if !in_domain(x) {
                return Err(EvalError::Domain("math domain error"));
            }
            Ok(Value::Float(f(x)))
        }),
    )
}

/// A two-float-argument function.
fn binary(f: fn(f64, f64) -> f64) -> MathFn {
    MathFn::new(
        Arity::Exact(2),
        Box::new(move |args| Ok(Value::Float(f(args[0].as_f64(), args[1].as_f64())))),
    )
}

/// A one-float-argument function whose result is reported as an integer.
fn unary_to_int(f: fn(f64) -> f64) -> MathFn {
    MathFn::new(
        Arity::Exact(1),
        Box::new(move |args| float_to_int(f(args[0].as_f64()))),
    )
}

/// Convert a float that is mathematically integral into an `Int` value.
/// Non-finite inputs are errors; magnitudes beyond `i64` stay floats.
fn float_to_int(x: f64) -> Result<Value, EvalError> {
    if x.is_nan() {
        return Err(EvalError::Domain("cannot convert float NaN to integer"));
    }
    if x.is_infinite() {
        return Err(EvalError::Domain(
            "cannot convert float infinity to integer",
        ));
    }
    if x >= i64::MIN as f64 && x <= i64::MAX as f64 {
        Ok(Value::Int(x as i64))
    } else {
        Ok(Value::Float(x))
    }
}

/// Round half-to-even, the rounding the `round` built-in reports.
fn round_half_even(x: f64) -> f64 {
    if (x - x.trunc()).abs() == 0.5 {
        (x / 2.0).round() * 2.0
    } else {
        x.round()
    }
}

fn round_builtin(args: &[Value]) -> Result<Value, EvalError> {
    if args.len() == 1 {
        return match args[0] {
            Value::Int(i) => Ok(Value::Int(i)),
            Value::Float(f) => float_to_int(round_half_even(f)),
        };
    }

    let ndigits = match args[1] {
        Value::Int(n) => n,
        Value::Float(_) => {
            return Err(EvalError::InvalidArgument(
                "ndigits must be an integer".to_string(),
            ))
        }
    };
    let x = args[0].as_f64();

    // Beyond these magnitudes the scale factor degenerates to 0 or
    // infinity; the input is already exact at that precision.
    let scaled = if ndigits > 323 {
        x
    } else if ndigits < -308 {
        0.0
    } else {
        let scale = 10f64.powi(ndigits as i32);
        round_half_even(x * scale) / scale
    };

    match args[0] {
        Value::Int(_) => float_to_int(scaled),
        Value::Float(_) => Ok(Value::Float(scaled)),
    }
}

fn abs_builtin(args: &[Value]) -> Result<Value, EvalError> {
    Ok(match args[0] {
        Value::Int(i) => i
            .checked_abs()
            .map(Value::Int)
            .unwrap_or(Value::Float(-(i as f64))),
        Value::Float(f) => Value::Float(f.abs()),
    })
}

fn fold_extreme(args: &[Value], keep_right: fn(f64, f64) -> bool) -> Value {
    let mut best = args[0];
    for &candidate in &args[1..] {
        if keep_right(best.as_f64(), candidate.as_f64()) {
            best = candidate;
        }
    }
    best
}

fn log_builtin(args: &[Value]) -> Result<Value, EvalError> {
    let x = args[0].as_f64();
    if x <= 0.0 {
        return Err(EvalError::Domain("math domain error"));
    }
    if args.len() == 1 {
        return Ok(Value::Float(x.ln()));
    }
    let base = args[1].as_f64();
    if base <= 0.0 {
        return Err(EvalError::Domain("math domain error"));
    }
    if base == 1.0 {
        return Err(EvalError::DivisionByZero("float division by zero"));
    }
    Ok(Value::Float(x.ln() / base.ln()))
}

fn pow_fn(args: &[Value]) -> Result<Value, EvalError> {
    let (x, y) = (args[0].as_f64(), args[1].as_f64());
    if x == 0.0 && y < 0.0 {
        return Err(EvalError::Domain("math domain error"));
    }
    if x < 0.0 && y.fract() != 0.0 && y.is_finite() {
        return Err(EvalError::Domain("math domain error"));
    }
    Ok(Value::Float(x.powf(y)))
}

fn fmod_fn(args: &[Value]) -> Result<Value, EvalError> {
    let (x, y) = (args[0].as_f64(), args[1].as_f64());
    if y == 0.0 {
        return Err(EvalError::Domain("math domain error"));
    }
    Ok(Value::Float(x % y))
}

lazy_static! {
    /// The math library functions, addressable bare or `math.`-qualified.
    pub static ref MATH_FUNCTIONS: HashMap<&'static str, MathFn> = {
        let mut table: HashMap<&'static str, MathFn> = HashMap::new();
        table.insert("sqrt", unary_in(|x| x >= 0.0, f64::sqrt));
        table.insert("sin", unary(f64::sin));
        table.insert("cos", unary(f64::cos));
        table.insert("tan", unary(f64::tan));
        table.insert("asin", unary_in(|x| (-1.0..=1.0).contains(&x), f64::asin));
        table.insert("acos", unary_in(|x| (-1.0..=1.0).contains(&x), f64::acos));
        table.insert("atan", unary(f64::atan));
        table.insert("atan2", binary(f64::atan2));
        table.insert("sinh", unary(f64::sinh));
        table.insert("cosh", unary(f64::cosh));
        table.insert("tanh", unary(f64::tanh));
        table.insert("asinh", unary(f64::asinh));
        table.insert("acosh", unary_in(|x| x >= 1.0, f64::acosh));
        table.insert("atanh", unary_in(|x| x > -1.0 && x < 1.0, f64::atanh));
        table.insert("exp", unary(f64::exp));
        table.insert("log", MathFn::new(Arity::Range(1, 2), Box::new(log_builtin)));
        table.insert("log10", unary_in(|x| x > 0.0, f64::log10));
        table.insert("log2", unary_in(|x| x > 0.0, f64::log2));
        table.insert("floor", unary_to_int(f64::floor));
        table.insert("ceil", unary_to_int(f64::ceil));
        table.insert("trunc", unary_to_int(f64::trunc));
        table.insert("fabs", unary(f64::abs));
        table.insert("fmod", MathFn::new(Arity::Exact(2), Box::new(fmod_fn)));
        table.insert("pow", MathFn::new(Arity::Exact(2), Box::new(pow_fn)));
        table.insert("hypot", binary(f64::hypot));
        table.insert("degrees", unary(f64::to_degrees));
        table.insert("radians", unary(f64::to_radians));
        table
    };

    /// Math constants, addressable bare or `math.`-qualified.
    pub static ref MATH_CONSTANTS: HashMap<&'static str, f64> = {
        let mut table = HashMap::new();
        table.insert("pi", std::f64::consts::PI);
        table.insert("e", std::f64::consts::E);
        table.insert("tau", std::f64::consts::TAU);
        table.insert("inf", f64::INFINITY);
        table.insert("nan", f64::NAN);
        table
    };

    /// General built-ins, addressable only by their bare names.
    pub static ref BUILTIN_FUNCTIONS: HashMap<&'static str, MathFn> = {
        let mut table: HashMap<&'static str, MathFn> = HashMap::new();
        table.insert(
            "abs",
            MathFn::new(Arity::Exact(1), Box::new(abs_builtin)),
        );
        table.insert(
            "round",
            MathFn::new(Arity::Range(1, 2), Box::new(round_builtin)),
        );
        table.insert(
            "min",
            MathFn::new(
                Arity::AtLeast(2),
                Box::new(|args| Ok(fold_extreme(args, |best, c| c < best))),
            ),
        );
        table.insert(
            "max",
            MathFn::new(
                Arity::AtLeast(2),
                Box::new(|args| Ok(fold_extreme(args, |best, c| c > best))),
            ),
        );
        table
    };
}
