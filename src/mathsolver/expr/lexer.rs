//! Tokenizer for the expression grammar.
//!
//! Produces a flat token stream for the parser. Numbers are classified as
//! int or float literals right here, since the distinction is visible in
//! results. Identifiers may carry a single `math.` style qualifier; that
//! is the only use of `.` outside a numeric literal.

use super::value::Value;
use super::EvalError;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(Value),
    /// An identifier, possibly dotted (`sqrt`, `math.sqrt`, `pi`).
    Name(String),
    Plus,
    Minus,
    Star,
    DoubleStar,
    Slash,
    Percent,
    LParen,
    RParen,
    Comma,
}

/// Split an expression string into tokens, or fail with a syntax error
/// naming the offending character and its column.
pub fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            c if c.is_whitespace() => i += 1,
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '*' => {
                if chars.get(i + 1) == Some(&'*') {
                    tokens.push(Token::DoubleStar);
                    i += 2;
                } else {
                    tokens.push(Token::Star);
                    i += 1;
                }
            }
            '/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '%' => {
                tokens.push(Token::Percent);
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            ',' => {
                tokens.push(Token::Comma);
                i += 1;
            }
            '^' => {
                return Err(EvalError::Syntax(format!(
                    "unexpected character '^' at column {}; use ** for exponentiation",
                    i + 1
                )));
            }
            c if c.is_ascii_digit() => {
                let (token, next) = lex_number(&chars, i)?;
                tokens.push(token);
                i = next;
            }
            '.' => {
                // A leading-dot float like `.5`; a bare dot is an error.
                if chars.get(i + 1).is_some_and(|c| c.is_ascii_digit()) {
                    let (token, next) = lex_number(&chars, i)?;
                    tokens.push(token);
                    i = next;
                } else {
                    return Err(EvalError::Syntax(format!(
                        "unexpected character '.' at column {}",
                        i + 1
                    )));
                }
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let (token, next) = lex_name(&chars, i);
                tokens.push(token);
                i = next;
            }
            other => {
                return Err(EvalError::Syntax(format!(
                    "unexpected character {:?} at column {}",
                    other,
                    i + 1
                )));
            }
        }
    }

    Ok(tokens)
}

/// Lex a numeric literal starting at `start`: digits, an optional
/// fractional part, an optional exponent. A literal is an int only when it
/// has neither; an int literal too large for `i64` falls back to a float.
fn lex_number(chars: &[char], start: usize) -> Result<(Token, usize), EvalError> {
    let mut i = start;
    let mut is_float = false;

    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if i < chars.len() && chars[i] == '.' {
        is_float = true;
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
    }
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        let mut j = i + 1;
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_digit() {
            is_float = true;
            i = j;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
        }
    }

    let text: String = chars[start..i].iter().collect();
    let value = if is_float {
        let parsed = text.parse::<f64>().map_err(|_| {
            EvalError::Syntax(format!("invalid number literal '{}'", text))
        })?;
        Value::Float(parsed)
    } else {
        match text.parse::<i64>() {
            Ok(n) => Value::Int(n),
            // Wider than i64: keep it as an (approximate) float rather
            // than rejecting the expression.
            Err(_) => Value::Float(text.parse::<f64>().map_err(|_| {
                EvalError::Syntax(format!("invalid number literal '{}'", text))
            })?),
        }
    };

    Ok((Token::Number(value), i))
}

/// Lex an identifier, consuming one `.qualifier` level if present so that
/// `math.sqrt` arrives at the parser as a single name.
fn lex_name(chars: &[char], start: usize) -> (Token, usize) {
    let mut i = start;
    while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
        i += 1;
    }
    if i < chars.len()
        && chars[i] == '.'
        && chars
            .get(i + 1)
            .is_some_and(|c| c.is_ascii_alphabetic() || *c == '_')
    {
        i += 2;
        while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
            i += 1;
        }
    }
    let text: String = chars[start..i].iter().collect();
    (Token::Name(text), i)
}
