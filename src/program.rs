use crate::error::EvalError;
use crate::token::Op;
use num_complex::Complex64;
use std::fmt::{self, Display, Formatter};

/// An element of a program in reverse polish notation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element {
    /// A constant value
    Value(Complex64),
    /// The value the program is evaluated at
    Variable,
    /// <second from top> op <top>
    Op(Op),
}

impl Display for Element {
    #[allow(clippy::float_cmp)]
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Value(value) if value.im == 0.0 => write!(fmt, "{}", value.re),
            Self::Value(value) => write!(fmt, "({})", value),
            Self::Variable => write!(fmt, "<var>"),
            Self::Op(op) => write!(fmt, "{}", op),
        }
    }
}

/// A postfix program, ready to be evaluated by a stack machine.
///
/// A `Program` is only built through [`Program::from_elements`], which checks
/// that every operator finds two operands and that exactly one value is left
/// at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    elements: Vec<Element>,
    /// Maximal stack size reached during evaluation
    depth: usize,
}

impl Program {
    /// Build a program from `elements`, in reverse polish notation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tauexpr::{Element, Op, Program};
    /// # use num_complex::Complex64;
    /// let two = Element::Value(Complex64::new(2.0, 0.0));
    /// let program = Program::from_elements(vec![two, Element::Variable, Element::Op(Op::Mul)]);
    /// assert!(program.is_ok());
    ///
    /// let program = Program::from_elements(vec![two, Element::Op(Op::Mul)]);
    /// assert!(program.is_err());
    /// ```
    pub fn from_elements(elements: Vec<Element>) -> Result<Self, EvalError> {
        let mut size = 0_usize;
        let mut depth = 0;
        for element in &elements {
            match element {
                Element::Value(_) | Element::Variable => {
                    size += 1;
                    depth = depth.max(size);
                }
                Element::Op(_) => {
                    if size < 2 {
                        return Err(EvalError::StackUnderflow(size));
                    }
                    size -= 1;
                }
            }
        }
        if size != 1 {
            return Err(EvalError::StackSize(size));
        }
        Ok(Self { elements, depth })
    }

    /// Get the elements of the program
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Get the number of elements in the program
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// A valid program always contains at least one element
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Evaluate the program, substituting `variable` for every
    /// [`Element::Variable`].
    ///
    /// Division by zero and invalid powers are not errors, they give
    /// infinite or `NaN` results.
    pub fn eval(&self, variable: Complex64) -> Result<Complex64, EvalError> {
        let mut stack: Vec<Complex64> = Vec::with_capacity(self.depth);
        for element in &self.elements {
            match *element {
                Element::Value(value) => stack.push(value),
                Element::Variable => stack.push(variable),
                Element::Op(op) => {
                    let (top, second) = match (stack.pop(), stack.pop()) {
                        (Some(top), Some(second)) => (top, second),
                        (Some(_), None) => return Err(EvalError::StackUnderflow(1)),
                        (None, _) => return Err(EvalError::StackUnderflow(0)),
                    };
                    stack.push(op.apply(second, top));
                }
            }
        }

        match stack.as_slice() {
            [result] => Ok(*result),
            other => Err(EvalError::StackSize(other.len())),
        }
    }

    /// Optimize the program by doing constants propagation: an operator
    /// applied to two constants is replaced by its result.
    #[must_use]
    pub fn optimize(self) -> Self {
        let mut elements: Vec<Element> = Vec::with_capacity(self.elements.len());
        for element in self.elements {
            if let Element::Op(op) = element {
                // In postfix, two trailing constants are exactly the operands
                // of the next operator.
                let folded = match elements[..] {
                    [.., Element::Value(second), Element::Value(top)] => Some(op.apply(second, top)),
                    _ => None,
                };
                if let Some(value) = folded {
                    elements.truncate(elements.len() - 2);
                    elements.push(Element::Value(value));
                    continue;
                }
            }
            elements.push(element);
        }
        // Folding never makes the stack deeper
        Self {
            elements,
            depth: self.depth,
        }
    }

    /// If the program is a single constant, get `Some(constant)`. Else,
    /// get `None`
    pub fn value(&self) -> Option<Complex64> {
        match self.elements[..] {
            [Element::Value(value)] => Some(value),
            _ => None,
        }
    }
}

impl Display for Program {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        let mut first = true;
        for element in &self.elements {
            if !first {
                write!(fmt, " ")?;
            }
            write!(fmt, "{}", element)?;
            first = false;
        }
        Ok(())
    }
}
