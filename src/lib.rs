#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::non_ascii_literal,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc
)]

//! Tauexpr, a crate for compiling and evaluating transfer-function-like
//! expressions of one complex variable.
//!
//! An expression is compiled once, and then evaluated at as many points as
//! needed without parsing it again. The easiest way to use this crate is with
//! the [`eval`](fn.eval.html) function:
//!
//! ```
//! use num_complex::Complex64;
//! use tauexpr::Variable;
//!
//! let x = Variable::new('x').unwrap();
//! let value = Complex64::new(2.0, 0.0);
//! assert_eq!(tauexpr::eval("3 + 5 * x", x, value), Ok(Complex64::new(13.0, 0.0)));
//! ```
//!
//! To evaluate the same expression many times, compile it to an
//! [`Expression`](struct.Expression.html):
//!
//! ```
//! use num_complex::Complex64;
//! use tauexpr::{Expression, Variable};
//!
//! let s = Variable::default();
//! let expr = Expression::compile("1 / (s2 + 2s + 1)", s).unwrap();
//! for i in 0..100 {
//!     let omega = f64::from(i) / 10.0;
//!     let response = expr.frequency_response(omega).unwrap();
//!     assert!(response.is_finite());
//! }
//! ```
//!
//! # Language definition
//!
//! The language implemented by tauexpr can contain the following elements:
//!
//! - real number literals: `12`, `0.45`, `.5`, `3.`. Both `.` and `,` are
//!   accepted as the decimal separator, there is no exponent notation;
//! - the free variable, a single ASCII letter chosen by the caller (see
//!   [`Variable`](struct.Variable.html)), `s` by default;
//! - the imaginary unit `j`;
//! - left and right parenthesis;
//! - mathematical operators: `+` for addition, `-` for subtraction,
//!   `*` for multiplication, `/` for division and `^` for exponentiation
//!   (principal value);
//! - unary `+` and `-`.
//!
//! Whitespace and control characters are ignored. Any other symbol is
//! forbidden in the input.
//!
//! Operands written next to each other without an operator are combined:
//! a number following an operand raises it to that power (`s2` is `s^2`,
//! `(s+1)3` is `(s+1)^3`), anything else multiplies (`2s`, `js`,
//! `(s+1)(s+2)`).
//!
//! Addition and subtraction have the lowest precedence, then multiplication
//! and division, then exponentiation. `^` is right associative, the other
//! operators are left associative. A unary minus binds like `^`, so that
//! `-2^2` is `-4`.
//!
//! Division by zero and undefined powers are not errors: they produce
//! infinite or `NaN` values, like floating point operations do.
//!
//! # Technical details
//!
//! tauexpr is based on a stack machine, and uses a simple Shunting-Yard
//! algorithm to produce programs in reverse polish notation. It works with
//! `Complex64` data, and performs a simple constant propagation to optimize
//! the programs. Compilation logs through the `log` crate, evaluation does
//! not log anything.

mod config;
mod error;
mod expr;
mod lexer;
mod normalize;
mod parser;
mod program;
mod session;
mod token;

pub use config::{Variable, IMAGINARY_UNIT};
pub use error::{CompileError, Error, ErrorKind, EvalError};
pub use expr::{compile, eval, Expression};
pub use program::{Element, Program};
pub use session::{Curve, Session, DEFAULT_SOURCE};
pub use token::{power, Op};
