//! Factorial-like functions over a numeric tower of native integers, big integers, exact
//! rationals, reals and symbolic expressions.
//!
//! The functions can be used directly ([`factorial`], [`falling_factorial`], …) or through a
//! small expression language ([`parse`] followed by [`Expr::eval`](base::Expr::eval)).

pub mod base;
mod parser;
mod keywords;
mod ops;

pub use parser::parse;
pub use keywords::list_keywords;
pub use ops::factorial::factorial;
pub use ops::pochhammer::{falling_factorial, rising_factorial, factorial_power, pochhammer};
pub use ops::multifactorial::{multi_factorial, double_factorial};
pub use ops::subfactorial::subfactorial;
pub use ops::stirling::{stirling_first_kind, stirling_second_kind};
pub use base::tracing;
