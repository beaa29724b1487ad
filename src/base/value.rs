use super::*;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// A member of the numeric tower: everything the factorial family can take as a base or
/// return as a result.
///
/// Exact values are kept canonical: an integer that fits into `i64` is always `Int`, and a
/// rational with unit denominator is always an integer. Constructing values through `From`
/// or the arithmetic functions of this module maintains this.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Big(Number),
    Ratio(BigRational),
    Real(f64),
    Symbolic(Rc<Term>),
    /// The pole sentinel, returned where a reciprocal relation would divide by exact zero.
    Infinity
}

impl Value {
    pub fn var(name: impl Into<String>) -> Value {
        Value::Symbolic(Rc::new(Term::Var(name.into())))
    }

    pub fn is_pole(&self) -> bool {
        matches!(self, Value::Infinity)
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Big(_) | Value::Ratio(_))
    }

    pub(crate) fn is_one(&self) -> bool {
        matches!(self, Value::Int(1))
    }

    pub fn type_str(&self) -> &'static str {
        match self {
            Value::Int(_) => "native integer",
            Value::Big(_) => "big integer",
            Value::Ratio(_) => "rational",
            Value::Real(_) => "real",
            Value::Symbolic(_) => "symbolic expression",
            Value::Infinity => "infinity"
        }
    }

    /// The native integer held by this value, or an `InvalidArgument` error naming `what`.
    pub(crate) fn as_native(&self, what: &str) -> Result<i64, BaseError> {
        match self {
            Value::Int(x) => Ok(*x),
            _ => Err(format!("{what} must be a native integer, found {}", self.type_str()).into())
        }
    }

    fn to_f64(&self) -> f64 {
        match self {
            Value::Int(x) => *x as f64,
            Value::Big(x) => x.to_f64().unwrap_or(f64::NAN),
            Value::Ratio(x) => x.to_f64().unwrap_or(f64::NAN),
            Value::Real(x) => *x,
            Value::Symbolic(_) | Value::Infinity => f64::NAN
        }
    }

    fn to_number(&self) -> Number {
        match self {
            Value::Int(x) => Number::from(*x),
            Value::Big(x) => x.clone(),
            _ => panic!("to_number() called on {}", self.type_str())
        }
    }

    fn to_ratio(&self) -> BigRational {
        match self {
            Value::Ratio(x) => x.clone(),
            Value::Int(_) | Value::Big(_) => BigRational::from_integer(self.to_number()),
            _ => panic!("to_ratio() called on {}", self.type_str())
        }
    }
}

impl From<i64> for Value {
    fn from(x: i64) -> Value {
        Value::Int(x)
    }
}

impl From<Number> for Value {
    fn from(x: Number) -> Value {
        match x.to_i64() {
            Some(x) => Value::Int(x),
            None => Value::Big(x)
        }
    }
}

impl From<BigRational> for Value {
    fn from(x: BigRational) -> Value {
        if x.is_integer() {
            Value::from(x.to_integer())
        } else {
            Value::Ratio(x)
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Value {
        Value::Real(x)
    }
}

impl From<Term> for Value {
    fn from(term: Term) -> Value {
        Value::Symbolic(Rc::new(term))
    }
}

impl Default for Value {
    fn default() -> Value {
        Value::Int(0)
    }
}

impl Describe for Value {
    fn describe_prec(&self, prec: u32) -> String {
        match self {
            Value::Int(x) => x.describe_prec(prec),
            Value::Big(x) => x.describe_prec(prec),
            Value::Ratio(x) => x.describe_prec(prec),
            Value::Real(x) => x.describe_prec(prec),
            Value::Symbolic(t) => t.describe_prec(prec),
            Value::Infinity => "inf".to_string()
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}


fn arith(op: Op, lhs: &Value, rhs: &Value) -> Result<Value, BaseError> {
    use Value::*;
    Ok(match (lhs, rhs) {
        (Infinity, _) | (_, Infinity)
            => return Err(BaseError::arithmetic(format!("'{op}' applied to infinity"))),
        (Symbolic(_), _) | (_, Symbolic(_)) => Term::combine(op, lhs, rhs)?,
        (Real(_), _) | (_, Real(_)) => Real(op.apply(lhs.to_f64(), rhs.to_f64())),
        _ if op == Op::Div => {
            if is_zero(rhs) {
                return Err(BaseError::arithmetic("division by zero"));
            }
            Value::from(lhs.to_ratio() / rhs.to_ratio())
        },
        (Int(x), Int(y)) => match op.checked(*x, *y) {
            Some(res) => Int(res),
            None => Value::from(op.apply(Number::from(*x), Number::from(*y)))
        },
        (Ratio(_), _) | (_, Ratio(_)) => Value::from(op.apply(lhs.to_ratio(), rhs.to_ratio())),
        _ => Value::from(op.apply(lhs.to_number(), rhs.to_number()))
    })
}

pub fn add(lhs: &Value, rhs: &Value) -> Result<Value, BaseError> {
    arith(Op::Add, lhs, rhs)
}

pub fn sub(lhs: &Value, rhs: &Value) -> Result<Value, BaseError> {
    arith(Op::Sub, lhs, rhs)
}

pub fn mul(lhs: &Value, rhs: &Value) -> Result<Value, BaseError> {
    arith(Op::Mul, lhs, rhs)
}

/// Division. Exact operands give an exact (possibly rational) result, and an exact zero
/// divisor is an error. Real division follows IEEE semantics.
pub fn div(lhs: &Value, rhs: &Value) -> Result<Value, BaseError> {
    arith(Op::Div, lhs, rhs)
}

/// The multiplicative inverse.
pub fn invert(value: &Value) -> Result<Value, BaseError> {
    div(&Value::Int(1), value)
}

pub fn floor(value: &Value) -> Result<Value, BaseError> {
    match value {
        Value::Int(_) | Value::Big(_) => Ok(value.clone()),
        Value::Ratio(x) => Ok(Value::from(x.floor())),
        Value::Real(x) => BigRational::from_float(x.floor())
            .map(Value::from)
            .ok_or_else(|| BaseError::arithmetic(format!("floor of {x} is not an integer"))),
        Value::Symbolic(_) => Ok(Term::Floor(value.clone()).into()),
        Value::Infinity => Err(BaseError::arithmetic("floor applied to infinity"))
    }
}

/// True for an exact zero and for a real zero. Symbolic values and infinity are never zero.
pub fn is_zero(value: &Value) -> bool {
    match value {
        Value::Int(x) => *x == 0,
        Value::Real(x) => *x == 0.0,
        _ => false
    }
}

pub fn is_native_int(value: &Value) -> bool {
    matches!(value, Value::Int(_))
}
