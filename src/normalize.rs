//! Rewrite the raw token stream into something the shunting-yard parser can
//! consume directly:
//!
//! - juxtaposed operands get an explicit operator: `^` when the second one
//!   is a number (`x2` is `x^2`), `*` otherwise (`2x`, `j(x+1)`);
//! - a unary `+` is dropped;
//! - a unary `-` becomes `-1 *-` where `*-` binds like `^`, so `-2^2` is
//!   `-(2^2)`;
//! - parenthesis balance and operand placement are checked.

use crate::error::CompileError;
use crate::token::{Op, Token, TokenKind};

/// Normalize and validate a token sequence produced by the lexer
pub fn normalize(tokens: Vec<Token>) -> Result<Vec<Token>, CompileError> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len() * 2);
    // offsets of the currently open parenthesis, outermost first
    let mut parens: Vec<usize> = Vec::new();

    for token in tokens {
        // Nothing, `(` or an operator: an operand is expected next
        let expects_operand = output.last().map_or(true, |prev| !prev.ends_operand());

        match token.kind {
            TokenKind::Number(_)
            | TokenKind::Variable
            | TokenKind::ImaginaryUnit
            | TokenKind::LParen => {
                debug_assert!(token.starts_operand());
                if !expects_operand {
                    let op = if let TokenKind::Number(_) = token.kind {
                        Op::Exp
                    } else {
                        Op::Mul
                    };
                    output.push(Token::new(TokenKind::Op(op), token.offset));
                }
                if token.kind == TokenKind::LParen {
                    parens.push(token.offset);
                }
                output.push(token);
            }
            TokenKind::RParen => {
                if parens.pop().is_none() {
                    return Err(CompileError::structural(
                        token.offset,
                        "unmatched closing parenthesis",
                    ));
                }
                if expects_operand {
                    return Err(CompileError::structural(
                        token.offset,
                        "expected operand before closing parenthesis",
                    ));
                }
                output.push(token);
            }
            TokenKind::Op(op) => {
                if expects_operand {
                    match op {
                        Op::Plus => {}
                        Op::Minus => {
                            output.push(Token::new(TokenKind::Number(-1.0), token.offset));
                            output.push(Token::new(TokenKind::Op(Op::SignMul), token.offset));
                        }
                        _ => {
                            return Err(CompileError::structural(
                                token.offset,
                                "expected operand before operator",
                            ));
                        }
                    }
                } else {
                    output.push(token);
                }
            }
        }
    }

    match output.last() {
        None => return Err(CompileError::structural(0, "empty expression")),
        Some(&Token {
            kind: TokenKind::Op(_),
            offset,
        }) => {
            return Err(CompileError::structural(
                offset,
                "expected operand after operator",
            ));
        }
        Some(_) => {}
    }

    if let Some(&offset) = parens.first() {
        return Err(CompileError::structural(offset, "parenthesis not closed"));
    }

    Ok(output)
}
