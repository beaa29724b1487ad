use std::fmt::{Display, Formatter};

/// The four ring operations of the numeric tower. Also used as the node type of symbolic
/// expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div
}

impl Op {
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/"
        }
    }

    pub(crate) fn checked(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Op::Add => lhs.checked_add(rhs),
            Op::Sub => lhs.checked_sub(rhs),
            Op::Mul => lhs.checked_mul(rhs),
            Op::Div => None
        }
    }

    pub(crate) fn apply<T>(self, lhs: T, rhs: T) -> T
        where T: std::ops::Add<Output = T> + std::ops::Sub<Output = T>
            + std::ops::Mul<Output = T> + std::ops::Div<Output = T>
    {
        match self {
            Op::Add => lhs + rhs,
            Op::Sub => lhs - rhs,
            Op::Mul => lhs * rhs,
            Op::Div => lhs / rhs
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Precedence and associativity of infix operators.
pub(crate) fn op_rules(op: &str) -> (u32, bool) {
    match op {
        "+" => (1, true),
        "-" => (1, false),
        "*" => (2, true),
        "/" => (2, false),
        _ => (0, false)
    }
}

/// Binding strength of unary minus.
pub(crate) const PREC_NEG: u32 = 3;
/// Binding strength of the postfix `!` and `!!` operators.
pub(crate) const PREC_POSTFIX: u32 = 4;
