//! Comprehensive test suite for the Calculator tool
//!
//! Tests cover:
//! - Basic arithmetic and the int/float split in results
//! - Order of operations, power associativity, unary sign
//! - The math namespace (functions and constants, qualified and bare)
//! - General built-ins (abs, round, min, max)
//! - Error conditions, including injection attempts

use mathsolver::tools::Calculator;
use mathsolver::Value;

#[test]
fn integer_arithmetic_prints_without_decimal_point() {
    let calc = Calculator::new();
    assert_eq!(calc.evaluate_to_string("2 + 2"), "4");
    assert_eq!(calc.evaluate_to_string("7 - 10"), "-3");
    assert_eq!(calc.evaluate_to_string("6 * 7"), "42");
    assert_eq!(calc.evaluate_to_string("2 ** 10"), "1024");
}

#[test]
fn float_results_print_with_decimal_point() {
    let calc = Calculator::new();
    assert_eq!(calc.evaluate_to_string("math.sqrt(16)"), "4.0");
    assert_eq!(calc.evaluate_to_string("10 / 5"), "2.0");
    assert_eq!(calc.evaluate_to_string("10 / 4"), "2.5");
    assert_eq!(calc.evaluate_to_string("2.5 + 2.5"), "5.0");
}

#[test]
fn division_is_always_float_but_modulo_is_not() {
    let calc = Calculator::new();
    assert_eq!(calc.evaluate_to_string("4 / 2"), "2.0");
    assert_eq!(calc.evaluate_to_string("17 % 5"), "2");
    // floored modulo: result takes the sign of the divisor
    assert_eq!(calc.evaluate_to_string("-7 % 3"), "2");
    assert_eq!(calc.evaluate_to_string("7 % -3"), "-2");
}

#[test]
fn operator_precedence_and_grouping() {
    let calc = Calculator::new();
    assert_eq!(calc.evaluate_to_string("2 + 3 * 4"), "14");
    assert_eq!(calc.evaluate_to_string("(2 + 3) * 4"), "20");
    // ** binds tighter than unary minus, and associates to the right
    assert_eq!(calc.evaluate_to_string("-2 ** 2"), "-4");
    assert_eq!(calc.evaluate_to_string("2 ** 3 ** 2"), "512");
    assert_eq!(calc.evaluate_to_string("2 ** -1"), "0.5");
}

#[test]
fn math_namespace_works_qualified_and_bare() {
    let calc = Calculator::new();
    assert_eq!(calc.evaluate_to_string("math.sqrt(16)"), "4.0");
    assert_eq!(calc.evaluate_to_string("sqrt(16)"), "4.0");
    assert_eq!(calc.evaluate_to_string("math.floor(3.7)"), "3");
    assert_eq!(calc.evaluate_to_string("math.ceil(3.2)"), "4");
    assert_eq!(calc.evaluate_to_string("math.cos(0)"), "1.0");
}

#[test]
fn constants_resolve() {
    let calc = Calculator::new();
    let pi = calc.evaluate("math.pi").unwrap();
    assert_eq!(pi, Value::Float(std::f64::consts::PI));
    assert_eq!(calc.evaluate_to_string("round(math.e, 4)"), "2.7183");
}

#[test]
fn builtins_preserve_integer_inputs() {
    let calc = Calculator::new();
    assert_eq!(calc.evaluate_to_string("abs(-5)"), "5");
    assert_eq!(calc.evaluate_to_string("abs(-5.0)"), "5.0");
    assert_eq!(calc.evaluate_to_string("min(3, 1, 2)"), "1");
    assert_eq!(calc.evaluate_to_string("max(3, 1, 2)"), "3");
    // round is half-to-even
    assert_eq!(calc.evaluate_to_string("round(2.5)"), "2");
    assert_eq!(calc.evaluate_to_string("round(3.5)"), "4");
}

#[test]
fn failures_carry_the_error_prefix() {
    let calc = Calculator::new();
    assert_eq!(calc.evaluate_to_string("1 / 0"), "Error: division by zero");
    assert_eq!(
        calc.evaluate_to_string("1.0 / 0"),
        "Error: float division by zero"
    );
    assert_eq!(
        calc.evaluate_to_string("5 % 0"),
        "Error: integer division or modulo by zero"
    );
    assert_eq!(
        calc.evaluate_to_string("math.sqrt(-1)"),
        "Error: math domain error"
    );
    assert_eq!(
        calc.evaluate_to_string("math.log(0)"),
        "Error: math domain error"
    );
}

#[test]
fn unknown_names_are_reported_like_missing_bindings() {
    let calc = Calculator::new();
    assert_eq!(
        calc.evaluate_to_string("frobnicate(3)"),
        "Error: name 'frobnicate' is not defined"
    );
    assert_eq!(
        calc.evaluate_to_string("math.frobnicate(3)"),
        "Error: module 'math' has no attribute 'frobnicate'"
    );
    assert_eq!(
        calc.evaluate_to_string("x + 1"),
        "Error: name 'x' is not defined"
    );
}

#[test]
fn malformed_input_is_rejected() {
    let calc = Calculator::new();
    assert!(calc.evaluate_to_string("2 +").starts_with("Error: "));
    assert!(calc.evaluate_to_string("(2 + 3").starts_with("Error: "));
    assert!(calc.evaluate_to_string("").starts_with("Error: "));
    assert!(calc.evaluate_to_string("2 2").starts_with("Error: "));
    assert!(calc
        .evaluate_to_string("2 ^ 3")
        .contains("use ** for exponentiation"));
}

#[test]
fn injection_attempts_cannot_escape_the_grammar() {
    let calc = Calculator::new();
    // String literals, attribute chains, and statements are not part of the
    // grammar at all; every escape attempt dies in the lexer or resolver.
    assert!(calc
        .evaluate_to_string("__import__('os').system('id')")
        .starts_with("Error: "));
    assert!(calc
        .evaluate_to_string("open('/etc/passwd')")
        .starts_with("Error: "));
    assert_eq!(
        calc.evaluate_to_string("exec(1)"),
        "Error: name 'exec' is not defined"
    );
    assert!(calc.evaluate_to_string("x = 5").starts_with("Error: "));
}

#[test]
fn pathological_nesting_is_bounded() {
    let calc = Calculator::new();
    let mut deep = "(".repeat(10_000);
    deep.push('1');
    deep.push_str(&")".repeat(10_000));
    assert!(calc.evaluate_to_string(&deep).starts_with("Error: "));
}

#[test]
fn evaluation_is_deterministic() {
    let calc = Calculator::new();
    let expr = "math.sin(0.5) ** 2 + math.cos(0.5) ** 2";
    let first = calc.evaluate_to_string(expr);
    for _ in 0..5 {
        assert_eq!(calc.evaluate_to_string(expr), first);
    }
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let calc = Calculator::new();
    assert_eq!(calc.evaluate_to_string("  2 + 2  "), "4");
    assert_eq!(calc.evaluate_to_string("\tmath.sqrt(16)\n"), "4.0");
}
