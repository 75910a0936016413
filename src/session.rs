use crate::config::Variable;
use crate::error::CompileError;
use crate::expr::Expression;
use log::debug;

/// The source text an editing session starts with
pub const DEFAULT_SOURCE: &str = "0";

/// Which curve of a frequency response is sampled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    /// `(Re W(jt), Im W(jt))`, the Nyquist plot
    Nyquist,
    /// `(t, Re W(jt))`
    Real,
    /// `(t, Im W(jt))`
    Imaginary,
}

/// Expression being edited by a user.
///
/// Every edit recompiles the source. A failed compilation leaves an empty
/// expression behind, and keeps the error so that the offending character
/// can be highlighted.
///
/// # Examples
///
/// ```
/// # use tauexpr::{Curve, Session, Variable};
/// let mut session = Session::new(Variable::default());
/// assert!(session.set_source("1 / (s + 1)").is_none());
/// assert_eq!(session.sample(Curve::Nyquist, 1.0), Some([0.5, -0.5]));
///
/// let error = session.set_source("1 / (s + ").cloned().unwrap();
/// assert_eq!(error.offset, 7);
/// assert!(session.expression().is_empty());
/// assert_eq!(session.sample(Curve::Nyquist, 1.0), None);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    variable: Variable,
    source: String,
    expression: Expression,
    diagnostic: Option<CompileError>,
}

impl Session {
    /// Start a session on [`DEFAULT_SOURCE`]
    pub fn new(variable: Variable) -> Self {
        let mut session = Self {
            variable,
            source: String::new(),
            expression: Expression::empty(),
            diagnostic: None,
        };
        session.set_source(DEFAULT_SOURCE);
        session
    }

    /// Replace the source text and recompile it. Returns the compilation
    /// error, if any.
    pub fn set_source(&mut self, source: &str) -> Option<&CompileError> {
        self.source = source.to_owned();
        match Expression::compile(source, self.variable) {
            Ok(expression) => {
                self.expression = expression;
                self.diagnostic = None;
            }
            Err(error) => {
                debug!("discarding the expression: {}", error);
                self.expression = Expression::empty();
                self.diagnostic = Some(error);
            }
        }
        self.diagnostic.as_ref()
    }

    /// Get the free variable of this session
    pub fn variable(&self) -> Variable {
        self.variable
    }

    /// Get the current source text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Get the current expression, empty if the source does not compile
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Get the error of the last compilation, if it failed
    pub fn diagnostic(&self) -> Option<&CompileError> {
        self.diagnostic.as_ref()
    }

    /// Get the point of `curve` at frequency `t`.
    ///
    /// Returns `None` if the expression can not be evaluated, or if the
    /// point is not finite: such points are skipped when plotting.
    pub fn sample(&self, curve: Curve, t: f64) -> Option<[f64; 2]> {
        let value = self.expression.frequency_response(t).ok()?;
        let point = match curve {
            Curve::Nyquist => [value.re, value.im],
            Curve::Real => [t, value.re],
            Curve::Imaginary => [t, value.im],
        };
        if point.iter().all(|coordinate| coordinate.is_finite()) {
            Some(point)
        } else {
            None
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Variable::default())
    }
}
