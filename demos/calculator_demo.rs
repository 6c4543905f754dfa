//! Example demonstrating the Calculator tool with common usage patterns
//!
//! This example walks through what the calculator accepts:
//! - Basic arithmetic and the int/float split in results
//! - Math library functions and constants
//! - General built-ins (abs, round, min, max)
//! - Error reporting

use mathsolver::tools::Calculator;

fn main() {
    let calc = Calculator::new();

    println!("=== MathSolver Calculator Example ===\n");

    println!("--- Arithmetic ---");
    demo(
        &calc,
        &[
            ("2 + 2", "Simple addition"),
            ("10 - 3", "Subtraction"),
            ("4 * 5", "Multiplication"),
            ("20 / 4", "Division (always a float)"),
            ("2 ** 10", "Exponentiation"),
            ("17 % 5", "Modulo"),
            ("(2 + 3) * 4", "Grouping with parentheses"),
            ("-2 ** 2", "Power binds tighter than unary minus"),
        ],
    );

    println!("\n--- Math Library ---");
    demo(
        &calc,
        &[
            ("math.sqrt(16)", "Square root"),
            ("math.sin(math.pi / 2)", "Sine of pi/2"),
            ("math.log(100, 10)", "Logarithm with explicit base"),
            ("math.floor(3.7)", "Floor reports an integer"),
            ("sqrt(2)", "Bare names resolve too"),
            ("math.degrees(math.pi)", "Radians to degrees"),
        ],
    );

    println!("\n--- Built-ins ---");
    demo(
        &calc,
        &[
            ("abs(-7)", "Absolute value keeps the integer"),
            ("round(math.pi, 2)", "Round to two digits"),
            ("round(2.5)", "Half-to-even rounding"),
            ("min(4, 1, 8)", "Smallest of several"),
            ("max(4, 1, 8)", "Largest of several"),
        ],
    );

    println!("\n--- Error Reporting ---");
    demo(
        &calc,
        &[
            ("1 / 0", "Division by zero"),
            ("math.sqrt(-1)", "Outside the real domain"),
            ("frobnicate(3)", "Unknown name"),
            ("2 +", "Malformed input"),
            ("__import__('os')", "No way out of the grammar"),
        ],
    );
}

fn demo(calc: &Calculator, examples: &[(&str, &str)]) {
    for (expression, description) in examples {
        println!(
            "  {} = {}  ({})",
            expression,
            calc.evaluate_to_string(expression),
            description
        );
    }
}
