//! Pratt parser producing a typed expression tree.
//!
//! The grammar is deliberately small: numeric literals, names, unary sign,
//! the binary operators `+ - * / % **`, parentheses, and calls with
//! comma-separated argument lists. Precedence follows the conventional
//! arithmetic reading: `**` binds tightest and associates to the right,
//! unary sign binds tighter than `* / %` but looser than `**`, so
//! `-2**2` is `-(2**2)` while `2**-3` still parses.

use super::lexer::Token;
use super::value::Value;
use super::EvalError;

/// Nesting bound; expressions deeper than this are rejected instead of
/// risking stack exhaustion on pathological input.
const MAX_DEPTH: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Value),
    /// A bare or `math.`-qualified name in value position.
    Name(String),
    Unary(UnaryOp, Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    Call { name: String, args: Vec<Expr> },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnaryOp {
    Neg,
    Pos,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

/// Parse a complete token stream into one expression.
pub fn parse(tokens: Vec<Token>) -> Result<Expr, EvalError> {
    let mut parser = Parser { tokens, pos: 0 };
    if parser.peek().is_none() {
        return Err(EvalError::Syntax("empty expression".to_string()));
    }
    let expr = parser.parse_expr(0, 0)?;
    if let Some(extra) = parser.peek() {
        return Err(EvalError::Syntax(format!(
            "unexpected {} after expression",
            describe(extra)
        )));
    }
    Ok(expr)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

/// Binding power of the unary sign operators.
const PREFIX_BP: u8 = 9;

/// Left/right binding powers for infix operators. `**` is right
/// associative (left power above its right power) and outbinds unary sign.
fn infix_binding_power(token: &Token) -> Option<(BinaryOp, u8, u8)> {
    match token {
        Token::Plus => Some((BinaryOp::Add, 1, 2)),
        Token::Minus => Some((BinaryOp::Sub, 1, 2)),
        Token::Star => Some((BinaryOp::Mul, 3, 4)),
        Token::Slash => Some((BinaryOp::Div, 3, 4)),
        Token::Percent => Some((BinaryOp::Mod, 3, 4)),
        Token::DoubleStar => Some((BinaryOp::Pow, 11, 10)),
        _ => None,
    }
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_expr(&mut self, min_bp: u8, depth: usize) -> Result<Expr, EvalError> {
        if depth > MAX_DEPTH {
            return Err(EvalError::Syntax("expression is nested too deeply".to_string()));
        }

        let mut lhs = self.parse_prefix(depth)?;

        while let Some((op, l_bp, r_bp)) = self.peek().and_then(infix_binding_power) {
            if l_bp < min_bp {
                break;
            }
            self.advance();
            let rhs = self.parse_expr(r_bp, depth + 1)?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }

        Ok(lhs)
    }

    fn parse_prefix(&mut self, depth: usize) -> Result<Expr, EvalError> {
        match self.advance() {
            Some(Token::Number(value)) => Ok(Expr::Literal(value)),
            Some(Token::Name(name)) => {
                if self.peek() == Some(&Token::LParen) {
                    self.advance();
                    let args = self.parse_args(depth)?;
                    Ok(Expr::Call { name, args })
                } else {
                    Ok(Expr::Name(name))
                }
            }
            Some(Token::LParen) => {
                let inner = self.parse_expr(0, depth + 1)?;
                self.expect_rparen()?;
                Ok(inner)
            }
            Some(Token::Minus) => {
                let operand = self.parse_expr(PREFIX_BP, depth + 1)?;
                Ok(Expr::Unary(UnaryOp::Neg, Box::new(operand)))
            }
            Some(Token::Plus) => {
                let operand = self.parse_expr(PREFIX_BP, depth + 1)?;
                Ok(Expr::Unary(UnaryOp::Pos, Box::new(operand)))
            }
            Some(other) => Err(EvalError::Syntax(format!(
                "unexpected {}",
                describe(&other)
            ))),
            None => Err(EvalError::Syntax(
                "unexpected end of expression".to_string(),
            )),
        }
    }

    fn parse_args(&mut self, depth: usize) -> Result<Vec<Expr>, EvalError> {
        let mut args = Vec::new();
        if self.peek() == Some(&Token::RParen) {
            self.advance();
            return Ok(args);
        }
        loop {
            args.push(self.parse_expr(0, depth + 1)?);
            match self.advance() {
                Some(Token::Comma) => continue,
                Some(Token::RParen) => return Ok(args),
                Some(other) => {
                    return Err(EvalError::Syntax(format!(
                        "expected ',' or ')' in argument list, found {}",
                        describe(&other)
                    )))
                }
                None => {
                    return Err(EvalError::Syntax(
                        "unclosed argument list".to_string(),
                    ))
                }
            }
        }
    }

    fn expect_rparen(&mut self) -> Result<(), EvalError> {
        match self.advance() {
            Some(Token::RParen) => Ok(()),
            Some(other) => Err(EvalError::Syntax(format!(
                "expected ')', found {}",
                describe(&other)
            ))),
            None => Err(EvalError::Syntax("unclosed parenthesis".to_string())),
        }
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Number(value) => format!("number '{}'", value),
        Token::Name(name) => format!("name '{}'", name),
        Token::Plus => "'+'".to_string(),
        Token::Minus => "'-'".to_string(),
        Token::Star => "'*'".to_string(),
        Token::DoubleStar => "'**'".to_string(),
        Token::Slash => "'/'".to_string(),
        Token::Percent => "'%'".to_string(),
        Token::LParen => "'('".to_string(),
        Token::RParen => "')'".to_string(),
        Token::Comma => "','".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mathsolver::expr::lexer::tokenize;

    fn parse_str(input: &str) -> Result<Expr, EvalError> {
        parse(tokenize(input).unwrap())
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let expr = parse_str("2 + 3 * 4").unwrap();
        match expr {
            Expr::Binary(BinaryOp::Add, lhs, _) => {
                assert_eq!(*lhs, Expr::Literal(Value::Int(2)));
            }
            other => panic!("unexpected tree: {:?}", other),
        }
    }

    #[test]
    fn power_is_right_associative() {
        // 2 ** 3 ** 2 parses as 2 ** (3 ** 2)
        let expr = parse_str("2 ** 3 ** 2").unwrap();
        match expr {
            Expr::Binary(BinaryOp::Pow, lhs, rhs) => {
                assert_eq!(*lhs, Expr::Literal(Value::Int(2)));
                assert!(matches!(*rhs, Expr::Binary(BinaryOp::Pow, _, _)));
            }
            other => panic!("unexpected tree: {:?}", other),
        }
    }

    #[test]
    fn unary_minus_binds_looser_than_power() {
        // -2 ** 2 parses as -(2 ** 2)
        let expr = parse_str("-2 ** 2").unwrap();
        assert!(matches!(expr, Expr::Unary(UnaryOp::Neg, _)));
    }

    #[test]
    fn power_accepts_signed_exponent() {
        let expr = parse_str("2 ** -3").unwrap();
        match expr {
            Expr::Binary(BinaryOp::Pow, _, rhs) => {
                assert!(matches!(*rhs, Expr::Unary(UnaryOp::Neg, _)));
            }
            other => panic!("unexpected tree: {:?}", other),
        }
    }

    #[test]
    fn call_with_multiple_arguments() {
        let expr = parse_str("max(1, 2, 3)").unwrap();
        match expr {
            Expr::Call { name, args } => {
                assert_eq!(name, "max");
                assert_eq!(args.len(), 3);
            }
            other => panic!("unexpected tree: {:?}", other),
        }
    }

    #[test]
    fn dangling_operator_is_a_syntax_error() {
        let err = parse_str("2 +").unwrap_err();
        assert!(err.to_string().contains("unexpected end of expression"));
    }

    #[test]
    fn adjacent_operators_are_rejected_where_meaningless() {
        assert!(parse_str("2 * / 3").is_err());
        assert!(parse_str(") 2").is_err());
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        let err = parse_str("2 2").unwrap_err();
        assert!(err.to_string().contains("after expression"));
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = parse(vec![]).unwrap_err();
        assert!(err.to_string().contains("empty expression"));
    }

    #[test]
    fn deep_nesting_is_bounded() {
        let mut pathological = "(".repeat(500);
        pathological.push('1');
        pathological.push_str(&")".repeat(500));
        let err = parse_str(&pathological).unwrap_err();
        assert!(err.to_string().contains("nested too deeply"));
    }
}
