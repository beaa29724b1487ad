use crate::base::*;
use std::fmt::{Display, Formatter};

use colored::Colorize;

/// The base error returned by the numeric operations. In the expression language this is
/// turned into [`EvalError`] by supplementing the [`Expr`] whose evaluation failed.
#[derive(Debug, Clone, PartialEq)]
pub enum BaseError {
    /// A precondition of an operation was violated: wrong kind of value, or an argument out of
    /// range.
    InvalidArgument(String),
    /// An undefined operation of the numeric tower, e.g. division by an exact zero.
    Arithmetic(String),
    Interrupt
}

impl BaseError {
    pub(crate) fn arithmetic(reason: impl Into<String>) -> BaseError {
        BaseError::Arithmetic(reason.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, BaseError::InvalidArgument(_))
    }
}

impl From<String> for BaseError {
    fn from(string: String) -> BaseError {
        BaseError::InvalidArgument(string)
    }
}

impl From<&str> for BaseError {
    fn from(string: &str) -> BaseError {
        BaseError::InvalidArgument(string.to_string())
    }
}

impl std::error::Error for BaseError { }

impl Display for BaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(s) | Self::Arithmetic(s) => write!(f, "{s}"),
            Self::Interrupt => write!(f, "interrupted")
        }
    }
}


/// The evaluation error type with an indication of the [`Expr`] whose evaluation caused it.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalError {
    reason: BaseError,
    expr: Expr
}

impl EvalError {
    pub fn new(reason: impl Into<BaseError>, expr: impl Into<Expr>) -> EvalError {
        EvalError{reason: reason.into(), expr: expr.into()}
    }

    pub fn reason(&self) -> &BaseError {
        &self.reason
    }
}

impl std::error::Error for EvalError { }

impl Display for EvalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            BaseError::Interrupt => write!(f, "{}", self.reason),
            _ => write!(f, "{}: {}", self.expr.describe(), self.reason)
        }
    }
}

/// The error type returned by [`parse`](crate::parse). Contains the description of the error
/// and its location within the input string. The lifetime is bound to the lifetime of the
/// input string.
#[derive(Debug, PartialEq)]
pub struct ParseError<'str> {
    reason: String,
    slice: &'str str
}

impl<'str> ParseError<'str> {
    pub fn new(text: impl Into<String>, slice: &'str str) -> ParseError<'str> {
        ParseError{reason: text.into(), slice}
    }

    /// Shows the location of the parse error. For this purpose, the input string is reproduced in
    /// full, with the part causing the error highlighted.
    ///
    /// For the actual description of the error, use the `Display` trait.
    pub fn display(&self, input: &'str str) {
        if self.slice.is_empty() { return; }
        let start = self.slice.as_ptr() as usize - input.as_ptr() as usize;
        let end = start + self.slice.len();
        println!("{}{}{}", &input[..start], input[start..end].red().bold(), &input[end..]);
    }
}

impl Display for ParseError<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.reason, f)
    }
}

macro_rules! try_with {
    ($blame:expr, $expr:expr) => {
        match (|| -> Result<_, BaseError> { Ok($expr) })() {
            Ok(result) => result,
            Err(err) => return Err(EvalError::new(err, $blame))
        }
    }
}

macro_rules! check_stop {
    () => {
        if $crate::base::should_stop() {
            return Err(BaseError::Interrupt);
        }
    }
}

pub(crate) use try_with;
pub(crate) use check_stop;
