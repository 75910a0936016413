use crate::config::{Variable, IMAGINARY_UNIT};
use crate::error::CompileError;
use crate::token::{Op, Token, TokenKind};

/// An helper struct for lexing the input
pub struct Lexer<'a> {
    input: &'a [u8],
    position: usize,
    variable: Variable,
}

impl<'a> Lexer<'a> {
    pub fn new(string: &'a str, variable: Variable) -> Lexer<'a> {
        Lexer {
            input: string.as_bytes(),
            position: 0,
            variable,
        }
    }

    /// Split the whole input in tokens, in source order
    pub fn tokenize(&mut self) -> Result<Vec<Token>, CompileError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    fn next_token(&mut self) -> Result<Option<Token>, CompileError> {
        while self.peek().map_or(false, is_whitespace) {
            self.position += 1;
        }

        let start = self.position;
        let c = match self.peek() {
            Some(c) => c,
            None => return Ok(None),
        };

        let kind = match c {
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'+' => TokenKind::Op(Op::Plus),
            b'-' => TokenKind::Op(Op::Minus),
            b'*' => TokenKind::Op(Op::Mul),
            b'/' => TokenKind::Op(Op::Div),
            b'^' => TokenKind::Op(Op::Exp),
            c if is_number_start(c) => return self.number().map(Some),
            c if c == self.variable.as_byte() => TokenKind::Variable,
            c if char::from(c) == IMAGINARY_UNIT => TokenKind::ImaginaryUnit,
            _ => {
                return Err(CompileError::lexical(
                    start,
                    format!(
                        "expected a number, the variable `{}`, the imaginary unit `{}`, \
                         a parenthesis or an operator",
                        self.variable, IMAGINARY_UNIT
                    ),
                ));
            }
        };
        self.position += 1;
        Ok(Some(Token::new(kind, start)))
    }

    /// Read a number literal: digits, optionally followed by a decimal
    /// separator and more digits. Either digit run may be empty, not both.
    fn number(&mut self) -> Result<Token, CompileError> {
        let start = self.position;
        let mut literal = String::new();

        self.digits(&mut literal);
        if self.peek().map_or(false, is_decimal_separator) {
            self.position += 1;
            literal.push('.');
            self.digits(&mut literal);
            if self.peek().map_or(false, is_decimal_separator) {
                return Err(CompileError::lexical(
                    self.position,
                    "more than one decimal point",
                ));
            }
        }

        if literal == "." {
            return Err(CompileError::lexical(
                start,
                "digits expected before and/or after the point",
            ));
        }

        // Only digits and at most one '.' at this point
        literal
            .parse()
            .map(|value| Token::new(TokenKind::Number(value), start))
            .map_err(|_| CompileError::lexical(start, format!("invalid number {}", literal)))
    }

    fn digits(&mut self, literal: &mut String) {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                literal.push(char::from(c));
                self.position += 1;
            } else {
                break;
            }
        }
    }
}

/// Control characters and space are skipped
fn is_whitespace(c: u8) -> bool {
    c <= b' '
}

/// `.` and `,` are both accepted as decimal separator
fn is_decimal_separator(c: u8) -> bool {
    c == b'.' || c == b','
}

/// Check if `c` can appear at the first character of a number
fn is_number_start(c: u8) -> bool {
    c.is_ascii_digit() || is_decimal_separator(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use test_case::test_case;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let variable = Variable::new('x').unwrap();
        Lexer::new(input, variable)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    fn error(input: &str) -> (usize, String) {
        let variable = Variable::new('x').unwrap();
        let error = Lexer::new(input, variable).tokenize().unwrap_err();
        assert_eq!(error.kind, ErrorKind::Lexical);
        (error.offset, error.message)
    }

    #[test_case("2 + 2" => vec![TokenKind::Number(2.0), TokenKind::Op(Op::Plus), TokenKind::Number(2.0)] ; "addition")]
    #[test_case("2+2" => vec![TokenKind::Number(2.0), TokenKind::Op(Op::Plus), TokenKind::Number(2.0)] ; "no spaces")]
    #[test_case("(x)^j" => vec![TokenKind::LParen, TokenKind::Variable, TokenKind::RParen, TokenKind::Op(Op::Exp), TokenKind::ImaginaryUnit] ; "variable and unit")]
    #[test_case("-*/" => vec![TokenKind::Op(Op::Minus), TokenKind::Op(Op::Mul), TokenKind::Op(Op::Div)] ; "operators")]
    #[test_case("2x" => vec![TokenKind::Number(2.0), TokenKind::Variable] ; "juxtaposition is kept for the normalizer")]
    #[test_case("\t\n 1\r" => vec![TokenKind::Number(1.0)] ; "whitespace and control characters")]
    #[test_case("" => Vec::<TokenKind>::new() ; "empty input")]
    fn tokenize(input: &str) -> Vec<TokenKind> {
        kinds(input)
    }

    #[test_case("12" => 12.0 ; "integer")]
    #[test_case("1.25" => 1.25 ; "decimal point")]
    #[test_case("1,25" => 1.25 ; "decimal comma")]
    #[test_case(".5" => 0.5 ; "no integer part")]
    #[test_case("5." => 5.0 ; "no fractional part")]
    #[test_case("007" => 7.0 ; "leading zeros")]
    fn numbers(input: &str) -> f64 {
        match kinds(input).as_slice() {
            [TokenKind::Number(value)] => *value,
            other => panic!("expected a single number, got {:?}", other),
        }
    }

    #[test]
    fn offsets() {
        let variable = Variable::new('x').unwrap();
        let tokens = Lexer::new(" 12.5 *  (x", variable).tokenize().unwrap();
        let offsets: Vec<usize> = tokens.iter().map(|token| token.offset).collect();
        assert_eq!(offsets, vec![1, 6, 9, 10]);
    }

    #[test]
    fn other_variable_letters() {
        let variable = Variable::new('s').unwrap();
        let tokens = Lexer::new("s", variable).tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Variable);

        let error = Lexer::new("x", variable).tokenize().unwrap_err();
        assert_eq!(error.offset, 0);
        assert!(error.message.contains("`s`"));
    }

    #[test_case("." => (0, "digits expected before and/or after the point".to_string()) ; "lone point")]
    #[test_case("1 + ," => (4, "digits expected before and/or after the point".to_string()) ; "lone comma")]
    #[test_case("1.2.3" => (3, "more than one decimal point".to_string()) ; "two points")]
    #[test_case("1,2.3" => (3, "more than one decimal point".to_string()) ; "comma then point")]
    #[test_case("1..2" => (2, "more than one decimal point".to_string()) ; "adjacent points")]
    fn malformed_numbers(input: &str) -> (usize, String) {
        error(input)
    }

    #[test]
    fn unexpected_character() {
        let (offset, message) = error("2 + y");
        assert_eq!(offset, 4);
        assert_eq!(
            message,
            "expected a number, the variable `x`, the imaginary unit `j`, a parenthesis or an operator"
        );

        assert_eq!(error("x % 2").0, 2);
        // byte offsets, not character offsets
        assert_eq!(error("1+é").0, 2);
        assert_eq!(error("é").0, 0);
    }

    #[test]
    fn characters() {
        for c in b" \t\n\r\x00".iter() {
            assert!(is_whitespace(*c));
        }
        for c in b"0x(.".iter() {
            assert!(!is_whitespace(*c));
        }

        for c in b"0123456789.,".iter() {
            assert!(is_number_start(*c));
        }
        for c in b"x-+j e".iter() {
            assert!(!is_number_start(*c));
        }
    }
}
