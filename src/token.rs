use crate::config::IMAGINARY_UNIT;
use libm::pow;
use num_complex::Complex64;
use std::fmt::{self, Display, Formatter};

/// A token and the byte offset where it starts in the input string
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    /// What was found
    pub kind: TokenKind,
    /// Where it was found
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// Check if this token can start an operand: a value or `(`
    pub fn starts_operand(&self) -> bool {
        match self.kind {
            TokenKind::Number(_)
            | TokenKind::Variable
            | TokenKind::ImaginaryUnit
            | TokenKind::LParen => true,
            TokenKind::RParen | TokenKind::Op(_) => false,
        }
    }

    /// Check if this token can end an operand: a value or `)`
    pub fn ends_operand(&self) -> bool {
        match self.kind {
            TokenKind::Number(_)
            | TokenKind::Variable
            | TokenKind::ImaginaryUnit
            | TokenKind::RParen => true,
            TokenKind::LParen | TokenKind::Op(_) => false,
        }
    }
}

/// Possible tokens to find in the input string
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// A real number literal
    Number(f64),
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
    /// A binary operator
    Op(Op),
    /// The free variable
    Variable,
    /// The imaginary unit `j`
    ImaginaryUnit,
}

impl Display for TokenKind {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Number(value) => write!(fmt, "{}", value),
            Self::LParen => write!(fmt, "("),
            Self::RParen => write!(fmt, ")"),
            Self::Op(op) => write!(fmt, "{}", op),
            Self::Variable => write!(fmt, "<var>"),
            Self::ImaginaryUnit => write!(fmt, "{}", IMAGINARY_UNIT),
        }
    }
}

/// Allowed operators in the algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`, written or implicit
    Mul,
    /// Multiplication by the `-1` standing for a unary minus. It binds like
    /// `^`, so that `-2^2` is `-(2^2)`.
    SignMul,
    /// `/`
    Div,
    /// `^`, written or implicit
    Exp,
}

impl Op {
    /// Get the operator precedence. Operators with higher precedence should be
    /// evaluated first.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Mul | Self::Div => 2,
            Self::Exp | Self::SignMul => 3,
        }
    }

    /// Check if the operator is left associative
    pub fn is_left_associative(self) -> bool {
        match self {
            Self::Plus | Self::Minus | Self::Mul | Self::Div => true,
            Self::Exp | Self::SignMul => false,
        }
    }

    /// Check if the operator is right associative
    pub fn is_right_associative(self) -> bool {
        !self.is_left_associative()
    }

    /// Get the function computing `left <op> right`
    pub fn function(self) -> fn(Complex64, Complex64) -> Complex64 {
        match self {
            Self::Plus => |left: Complex64, right: Complex64| left + right,
            Self::Minus => |left: Complex64, right: Complex64| left - right,
            Self::Mul | Self::SignMul => |left: Complex64, right: Complex64| left * right,
            Self::Div => |left: Complex64, right: Complex64| left / right,
            Self::Exp => power,
        }
    }

    /// Compute `left <op> right`
    #[inline]
    pub fn apply(self, left: Complex64, right: Complex64) -> Complex64 {
        self.function()(left, right)
    }
}

impl Display for Op {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        let symbol = match *self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mul => "*",
            Self::SignMul => "*-",
            Self::Div => "/",
            Self::Exp => "^",
        };
        write!(fmt, "{}", symbol)
    }
}

/// Principal value of `base ^ exponent`.
///
/// Zero raised to an exponent with a non positive real part is `NaN`.
/// Integer exponents use repeated multiplication, which keeps small powers of
/// `j` and of real numbers exact.
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
pub fn power(base: Complex64, exponent: Complex64) -> Complex64 {
    if base.re == 0.0 && base.im == 0.0 {
        return if exponent.re > 0.0 {
            Complex64::new(0.0, 0.0)
        } else {
            Complex64::new(f64::NAN, f64::NAN)
        };
    }
    if exponent.im == 0.0 {
        let n = exponent.re;
        if n.fract() == 0.0 && n.abs() <= f64::from(i32::MAX) {
            return base.powi(n as i32);
        }
        if base.im == 0.0 && base.re > 0.0 {
            return Complex64::new(pow(base.re, n), 0.0);
        }
    }
    (exponent * base.ln()).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn precedence() {
        assert!(Op::Plus.precedence() < Op::Mul.precedence());
        assert!(Op::Div.precedence() < Op::Exp.precedence());
        assert_eq!(Op::SignMul.precedence(), Op::Exp.precedence());
        assert_eq!(Op::Minus.precedence(), Op::Plus.precedence());
    }

    #[test]
    fn associativity() {
        for op in &[Op::Plus, Op::Minus, Op::Mul, Op::Div] {
            assert!(op.is_left_associative());
        }
        for op in &[Op::Exp, Op::SignMul] {
            assert!(op.is_right_associative());
        }
    }

    #[test_case(Op::Plus, c(1.0, 2.0), c(3.0, -1.0) => c(4.0, 1.0) ; "addition")]
    #[test_case(Op::Minus, c(2.0, 0.0), c(5.0, 0.0) => c(-3.0, 0.0) ; "subtraction keeps operand order")]
    #[test_case(Op::Mul, c(0.0, 1.0), c(0.0, 1.0) => c(-1.0, 0.0) ; "j times j")]
    #[test_case(Op::SignMul, c(-1.0, 0.0), c(4.0, 0.0) => c(-4.0, 0.0) ; "sign multiplication")]
    #[test_case(Op::Div, c(10.0, 0.0), c(4.0, 0.0) => c(2.5, 0.0) ; "division keeps operand order")]
    #[test_case(Op::Exp, c(2.0, 0.0), c(9.0, 0.0) => c(512.0, 0.0) ; "integer power")]
    #[test_case(Op::Exp, c(0.0, 1.0), c(2.0, 0.0) => c(-1.0, 0.0) ; "j squared is exact")]
    #[test_case(Op::Exp, c(4.0, 0.0), c(0.5, 0.0) => c(2.0, 0.0) ; "real square root")]
    #[test_case(Op::Exp, c(2.0, 0.0), c(-1.0, 0.0) => c(0.5, 0.0) ; "negative integer power")]
    #[test_case(Op::Exp, c(0.0, 0.0), c(3.0, 0.0) => c(0.0, 0.0) ; "zero to positive power")]
    fn apply(op: Op, left: Complex64, right: Complex64) -> Complex64 {
        op.apply(left, right)
    }

    #[test]
    fn non_finite_results() {
        let zero = c(0.0, 0.0);
        assert!(Op::Exp.apply(zero, zero).re.is_nan());
        assert!(Op::Exp.apply(zero, c(-2.0, 0.0)).re.is_nan());
        assert!(Op::Exp.apply(zero, c(0.0, 1.0)).re.is_nan());
        assert!(!Op::Div.apply(c(1.0, 0.0), zero).is_finite());
    }

    #[test]
    fn principal_branch() {
        // (-4)^0.5 = 2j
        let root = power(c(-4.0, 0.0), c(0.5, 0.0));
        assert!(root.re.abs() < 1e-12);
        assert!((root.im - 2.0).abs() < 1e-12);

        // j^j = e^(-pi/2)
        let value = power(c(0.0, 1.0), c(0.0, 1.0));
        assert!((value.re - (-std::f64::consts::FRAC_PI_2).exp()).abs() < 1e-12);
        assert!(value.im.abs() < 1e-12);
    }

    #[test]
    fn display() {
        assert_eq!(TokenKind::Op(Op::Exp).to_string(), "^");
        assert_eq!(TokenKind::Number(2.5).to_string(), "2.5");
        assert_eq!(TokenKind::ImaginaryUnit.to_string(), "j");
        assert_eq!(Op::SignMul.to_string(), "*-");
    }
}
