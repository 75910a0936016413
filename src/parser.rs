use crate::error::CompileError;
use crate::program::{Element, Program};
use crate::token::{Op, Token, TokenKind};
use num_complex::Complex64;

/// Entries of the operator stack
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    Op(Op),
    /// An open parenthesis, with its offset
    LParen(usize),
}

fn mismatched(offset: usize) -> CompileError {
    CompileError::structural(offset, "invalid expression")
}

/// Convert a normalized token sequence to a postfix program, using the
/// shunting-yard algorithm.
///
/// Unbalanced parenthesis are already rejected by the normalizer, the checks
/// here only guard against a token stream which did not go through it.
pub fn parse(tokens: &[Token]) -> Result<Program, CompileError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Pending> = Vec::new();

    'tokens: for token in tokens {
        match token.kind {
            TokenKind::Number(value) => output.push(Element::Value(Complex64::new(value, 0.0))),
            TokenKind::ImaginaryUnit => output.push(Element::Value(Complex64::new(0.0, 1.0))),
            TokenKind::Variable => output.push(Element::Variable),
            TokenKind::Op(o1) => {
                while let Some(&Pending::Op(o2)) = operators.last() {
                    let pop_me = o1.precedence() < o2.precedence()
                        || (o1.precedence() == o2.precedence() && o1.is_left_associative());
                    if !pop_me {
                        break;
                    }
                    operators.pop();
                    output.push(Element::Op(o2));
                }
                operators.push(Pending::Op(o1));
            }
            TokenKind::LParen => operators.push(Pending::LParen(token.offset)),
            TokenKind::RParen => {
                while let Some(pending) = operators.pop() {
                    match pending {
                        Pending::LParen(_) => continue 'tokens,
                        Pending::Op(op) => output.push(Element::Op(op)),
                    }
                }
                return Err(mismatched(token.offset));
            }
        }
    }

    while let Some(pending) = operators.pop() {
        match pending {
            Pending::LParen(offset) => return Err(mismatched(offset)),
            Pending::Op(op) => output.push(Element::Op(op)),
        }
    }

    Program::from_elements(output).map_err(|_| mismatched(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variable;
    use crate::lexer::Lexer;
    use crate::normalize::normalize;
    use test_case::test_case;

    fn postfix(input: &str) -> String {
        let variable = Variable::new('x').unwrap();
        let tokens = normalize(Lexer::new(input, variable).tokenize().unwrap()).unwrap();
        parse(&tokens).unwrap().to_string().replace("<var>", "x")
    }

    #[test_case("1 + 2" => "1 2 +" ; "addition")]
    #[test_case("3 + 5 * 2" => "3 5 2 * +" ; "multiplication first")]
    #[test_case("(3 + 5) * 2" => "3 5 + 2 *" ; "parenthesis")]
    #[test_case("2-3-4" => "2 3 - 4 -" ; "left associative subtraction")]
    #[test_case("8/4/2" => "8 4 / 2 /" ; "left associative division")]
    #[test_case("2^3^2" => "2 3 2 ^ ^" ; "right associative power")]
    #[test_case("-2^2" => "-1 2 2 ^ *-" ; "unary minus binds looser than power")]
    #[test_case("2^-2" => "2 -1 2 *- ^" ; "unary minus in exponent")]
    #[test_case("-x*3" => "-1 x *- 3 *" ; "unary minus binds tighter than product")]
    #[test_case("2x^2" => "2 x 2 ^ *" ; "implicit product")]
    #[test_case("x2+j" => "x 2 ^ (0+1i) +" ; "implicit power")]
    #[test_case("((x))" => "x" ; "nested parenthesis")]
    fn shunting_yard(input: &str) -> String {
        postfix(input)
    }

    #[test]
    fn mismatched_parenthesis() {
        let open = Token::new(TokenKind::LParen, 3);
        let close = Token::new(TokenKind::RParen, 5);
        let one = Token::new(TokenKind::Number(1.0), 4);

        let error = parse(&[one, close]).unwrap_err();
        assert_eq!(error.offset, 5);
        assert_eq!(error.message, "invalid expression");

        let error = parse(&[open, one]).unwrap_err();
        assert_eq!(error.offset, 3);
    }

    #[test]
    fn malformed_stream() {
        let plus = Token::new(TokenKind::Op(Op::Plus), 0);
        assert!(parse(&[plus]).is_err());
        assert!(parse(&[]).is_err());
    }
}
