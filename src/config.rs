use crate::error::Error;
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The letter reserved for the imaginary unit. It can never be the variable.
pub const IMAGINARY_UNIT: char = 'j';

/// The letter naming the free variable of an expression.
///
/// Only ASCII letters other than [`IMAGINARY_UNIT`] are accepted, so a
/// `Variable` can always be told apart from every other token.
///
/// # Examples
///
/// ```
/// # use tauexpr::Variable;
/// assert_eq!(Variable::default().as_char(), 's');
/// assert!(Variable::new('x').is_ok());
/// assert!(Variable::new('j').is_err());
/// assert!(Variable::new('2').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variable(char);

impl Variable {
    /// Validate `letter` and use it as the variable name
    pub fn new(letter: char) -> Result<Self, Error> {
        if letter.is_ascii_alphabetic() && letter != IMAGINARY_UNIT {
            Ok(Self(letter))
        } else {
            Err(Error::InvalidVariable(letter))
        }
    }

    /// Get the variable letter
    #[must_use]
    pub fn as_char(self) -> char {
        self.0
    }

    /// Get the variable letter as the single byte the lexer matches
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn as_byte(self) -> u8 {
        // ASCII only, checked in `new`
        self.0 as u8
    }
}

impl Default for Variable {
    /// `s`, the variable of a transfer function `W(s)`
    fn default() -> Self {
        Self('s')
    }
}

impl Display for Variable {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(fmt, "{}", self.0)
    }
}

impl TryFrom<char> for Variable {
    type Error = Error;

    fn try_from(letter: char) -> Result<Self, Error> {
        Self::new(letter)
    }
}

impl FromStr for Variable {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self, Error> {
        let mut chars = string.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::new(letter),
            (Some(letter), Some(_)) => Err(Error::InvalidVariable(letter)),
            (None, _) => Err(Error::InvalidVariable(' ')),
        }
    }
}
