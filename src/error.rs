use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// Which stage of the compilation rejected the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed number or unexpected character
    Lexical,
    /// Unbalanced parenthesis, missing operand, empty input
    Structural,
}

impl Display for ErrorKind {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Lexical => write!(fmt, "LexicalError"),
            Self::Structural => write!(fmt, "SyntaxError"),
        }
    }
}

/// Error produced while compiling an expression.
///
/// The `offset` is the byte offset in the source text of the character the
/// error refers to, so the caller can highlight it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message} (at offset {offset})")]
pub struct CompileError {
    /// Byte offset of the offending character
    pub offset: usize,
    /// Stage which rejected the input
    pub kind: ErrorKind,
    /// Human readable description
    pub message: String,
}

impl CompileError {
    pub(crate) fn lexical<S: Into<String>>(offset: usize, message: S) -> Self {
        Self {
            offset,
            kind: ErrorKind::Lexical,
            message: message.into(),
        }
    }

    pub(crate) fn structural<S: Into<String>>(offset: usize, message: S) -> Self {
        Self {
            offset,
            kind: ErrorKind::Structural,
            message: message.into(),
        }
    }
}

/// Error produced while evaluating a compiled program.
///
/// Programs built by the compiler never produce `StackUnderflow` or
/// `StackSize`; they are kept as guards against inconsistent programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// An operator found less than two operands on the stack
    #[error("evaluation error: operator applied to {0} operand(s)")]
    StackUnderflow(usize),
    /// The program did not leave exactly one value on the stack
    #[error("evaluation error: {0} value(s) left on the stack")]
    StackSize(usize),
    /// No expression is currently compiled
    #[error("evaluation error: no expression")]
    NoExpression,
}

/// Error type for the tauexpr crate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Error while compiling an expression
    #[error(transparent)]
    Compile(#[from] CompileError),
    /// Error while evaluating an expression
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// The character can not be used as the free variable
    #[error("ConfigError: `{0}` can not be used as the variable, expected an ASCII letter other than `j`")]
    InvalidVariable(char),
}
