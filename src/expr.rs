use crate::config::Variable;
use crate::error::{CompileError, Error, EvalError};
use crate::lexer::Lexer;
use crate::normalize::normalize;
use crate::parser::parse;
use crate::program::Program;
use log::{debug, trace};
use num_complex::Complex64;

/// Compile `input` and evaluate it once, at `value`.
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// compiling or evaluating the expression failed.
///
/// # Example
///
/// ```
/// # use tauexpr::{eval, Variable};
/// # use num_complex::Complex64;
/// let x = Variable::new('x').unwrap();
/// let three = Complex64::new(3.0, 0.0);
/// assert_eq!(eval("45 - 2^3", x, three), Ok(Complex64::new(37.0, 0.0)));
/// assert_eq!(eval("2x", x, three), Ok(Complex64::new(6.0, 0.0)));
/// assert_eq!(eval("x2", x, three), Ok(Complex64::new(9.0, 0.0)));
/// ```
pub fn eval(input: &str, variable: Variable, value: Complex64) -> Result<Complex64, Error> {
    let expr = Expression::compile(input, variable)?;
    Ok(expr.eval(value)?)
}

/// Compile `input` into an [`Expression`], with `variable` as the free
/// variable. This is the same as [`Expression::compile`].
pub fn compile(input: &str, variable: Variable) -> Result<Expression, CompileError> {
    Expression::compile(input, variable)
}

/// A compiled expression of one complex variable.
///
/// An `Expression` is either a valid program, or empty: "no expression is
/// currently compiled". The empty expression is what a caller keeps after a
/// failed compilation, so nothing stale gets evaluated.
///
/// # Examples
/// ```
/// # use tauexpr::{Expression, Variable};
/// # use num_complex::Complex64;
/// let s = Variable::default();
/// let expr = Expression::compile("1 / (s + 1)", s).unwrap();
/// assert_eq!(expr.eval(Complex64::new(1.0, 0.0)), Ok(Complex64::new(0.5, 0.0)));
/// assert_eq!(expr.eval(Complex64::new(3.0, 0.0)), Ok(Complex64::new(0.25, 0.0)));
///
/// let empty = Expression::empty();
/// assert!(empty.is_empty());
/// assert!(empty.eval(Complex64::new(3.0, 0.0)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expression {
    program: Option<Program>,
}

impl Expression {
    /// Compile the given mathematical `expression` into an `Expression`.
    ///
    /// On failure, the error carries the byte offset of the offending
    /// character in `expression`.
    ///
    /// # Examples
    /// ```
    /// # use tauexpr::{Expression, Variable};
    /// let x = Variable::new('x').unwrap();
    /// // A valid expression
    /// assert!(Expression::compile("3 + 5x^2", x).is_ok());
    /// // an invalid expression
    /// let error = Expression::compile("3 + (5 * x", x).unwrap_err();
    /// assert_eq!(error.offset, 4);
    /// assert_eq!(error.message, "parenthesis not closed");
    /// ```
    pub fn compile(expression: &str, variable: Variable) -> Result<Self, CompileError> {
        match Self::build(expression, variable) {
            Ok(program) => {
                debug!(
                    "compiled '{}' to {} elements: {}",
                    expression,
                    program.len(),
                    program
                );
                Ok(Self {
                    program: Some(program),
                })
            }
            Err(error) => {
                debug!("failed to compile '{}': {}", expression, error);
                Err(error)
            }
        }
    }

    fn build(expression: &str, variable: Variable) -> Result<Program, CompileError> {
        let tokens = Lexer::new(expression, variable).tokenize()?;
        trace!("tokens: {:?}", tokens);
        let tokens = normalize(tokens)?;
        trace!("normalized tokens: {:?}", tokens);
        Ok(parse(&tokens)?.optimize())
    }

    /// Get the expression representing "nothing compiled"
    pub fn empty() -> Self {
        Self { program: None }
    }

    /// Check if no program is compiled in this expression
    pub fn is_empty(&self) -> bool {
        self.program.is_none()
    }

    /// Get the compiled program, if any
    pub fn program(&self) -> Option<&Program> {
        self.program.as_ref()
    }

    /// Evaluate the expression with the free variable set to `value`.
    ///
    /// Non finite results (division by zero, `0^0`, ...) are returned as is,
    /// callers plotting the values should check [`Complex64::is_finite`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use tauexpr::{Expression, Variable};
    /// # use num_complex::Complex64;
    /// let x = Variable::new('x').unwrap();
    /// let expr = Expression::compile("x^2 + 1", x).unwrap();
    /// assert_eq!(expr.eval(Complex64::new(2.0, 0.0)), Ok(Complex64::new(5.0, 0.0)));
    /// assert_eq!(expr.eval(Complex64::new(0.0, 1.0)), Ok(Complex64::new(0.0, 0.0)));
    /// ```
    pub fn eval(&self, value: Complex64) -> Result<Complex64, EvalError> {
        match self.program {
            Some(ref program) => program.eval(value),
            None => Err(EvalError::NoExpression),
        }
    }

    /// Evaluate the expression on the imaginary axis, at `j * omega`. For a
    /// transfer function `W(s)`, this is the frequency response `W(jω)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tauexpr::{Expression, Variable};
    /// # use num_complex::Complex64;
    /// let expr = Expression::compile("1 / (s + 1)", Variable::default()).unwrap();
    /// // 1 / (1 + j) = 0.5 - 0.5j
    /// assert_eq!(expr.frequency_response(1.0), Ok(Complex64::new(0.5, -0.5)));
    /// ```
    pub fn frequency_response(&self, omega: f64) -> Result<Complex64, EvalError> {
        self.eval(Complex64::new(0.0, omega))
    }
}
