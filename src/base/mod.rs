pub(crate) use num::{BigInt, BigRational, Integer, One, Signed, ToPrimitive, Zero};

mod rules;
mod value;
mod symbolic;
mod expr;
mod env;
mod error;
mod describe;
mod stop;
pub mod tracing;

pub use rules::Op;
pub(crate) use rules::{op_rules, PREC_NEG, PREC_POSTFIX};
pub use value::*;
pub use symbolic::Term;
pub use expr::*;
pub use env::*;
pub use error::*;
pub use describe::Describe;
pub(crate) use describe::describe_infix;
pub use stop::{reset_stop, send_stop, should_stop};

/// The arbitrary-precision integer type that native integers are promoted to when a product
/// would no longer fit in an `i64`.
pub type Number = BigInt;
