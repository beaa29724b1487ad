use super::*;

/// A symbolic expression. Terms are built, not simplified: apart from the identities applied
/// by [`Term::combine`], operations on symbolic values just record themselves.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Var(String),
    Binary(Op, Value, Value),
    Floor(Value)
}

impl Term {
    /// Applies `op` where at least one operand is symbolic.
    pub(crate) fn combine(op: Op, lhs: &Value, rhs: &Value) -> Result<Value, BaseError> {
        let exact_zero = |v: &Value| v.is_exact() && is_zero(v);
        Ok(match op {
            Op::Add if exact_zero(lhs) => rhs.clone(),
            Op::Add | Op::Sub if exact_zero(rhs) => lhs.clone(),
            Op::Mul if exact_zero(lhs) || exact_zero(rhs) => Value::Int(0),
            Op::Mul if lhs.is_one() => rhs.clone(),
            Op::Mul | Op::Div if rhs.is_one() => lhs.clone(),
            Op::Div if exact_zero(rhs) => return Err(BaseError::arithmetic("division by zero")),
            // x + (-2) reads better as x - 2
            Op::Add | Op::Sub if rhs.is_exact() && Self::is_negative(rhs) => {
                let flipped = if op == Op::Add { Op::Sub } else { Op::Add };
                Term::Binary(flipped, lhs.clone(), sub(&Value::Int(0), rhs)?).into()
            },
            _ => Term::Binary(op, lhs.clone(), rhs.clone()).into()
        })
    }

    fn is_negative(value: &Value) -> bool {
        match value {
            Value::Int(x) => x.is_negative(),
            Value::Big(x) => x.is_negative(),
            Value::Ratio(x) => x.is_negative(),
            _ => false
        }
    }
}

impl Describe for Term {
    fn describe_prec(&self, prec: u32) -> String {
        match self {
            Term::Var(name) => name.clone(),
            Term::Binary(op, lhs, rhs) => describe_infix(op.symbol(), lhs, rhs, prec),
            Term::Floor(arg) => format!("floor({})", arg.describe())
        }
    }
}
