use super::*;

/// A trait for the ability to turn a value or expression into an input form.
pub trait Describe {
    /// Construct a string representation of `self`. The resulting `String` must be a
    /// syntactically valid input that reconstructs a copy of the original object on
    /// [`parse()`](crate::parse()) and [`Expr::eval()`].
    fn describe(&self) -> String {
        self.describe_prec(0)
    }

    /// Like [`Describe::describe()`], but wraps the output in parentheses if it would bind
    /// less tightly than an operator of precedence `prec`.
    fn describe_prec(&self, prec: u32) -> String;
}

macro_rules! impl_describe_signed {
    ($t: ty) => {
        impl Describe for $t {
            fn describe_prec(&self, prec: u32) -> String {
                if prec > 0 && self.is_negative() {
                    format!("({})", self)
                } else {
                    self.to_string()
                }
            }
        }
    }
}

impl_describe_signed!(Number);
impl_describe_signed!(i64);

impl Describe for BigRational {
    fn describe_prec(&self, prec: u32) -> String {
        if prec > 0 {
            format!("({})", self)
        } else {
            self.to_string()
        }
    }
}

impl Describe for f64 {
    fn describe_prec(&self, prec: u32) -> String {
        let s = if self.is_finite() && self.fract() == 0.0 {
            format!("{self:.1}")
        } else {
            self.to_string()
        };
        if prec > 0 && self.is_sign_negative() {
            format!("({s})")
        } else {
            s
        }
    }
}

impl<T: Describe> Describe for &T {
    fn describe_prec(&self, prec: u32) -> String {
        (**self).describe_prec(prec)
    }
}

/// Writes an infix operation, parenthesizing the whole if `prec` exceeds the operator's own
/// precedence.
pub(crate) fn describe_infix(op: &str, lhs: &impl Describe, rhs: &impl Describe, prec: u32) -> String {
    let (op_prec, assoc) = op_rules(op);
    let inner = format!("{} {} {}",
        lhs.describe_prec(op_prec),
        op,
        rhs.describe_prec(if assoc { op_prec } else { op_prec + 1 }));
    if prec > op_prec {
        format!("({inner})")
    } else {
        inner
    }
}
