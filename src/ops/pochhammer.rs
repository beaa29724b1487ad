//! Falling and rising factorials.
//!
//! Both functions come in two variants: one for a native integer base, which multiplies a
//! strided range of integers directly, and one for an arbitrary base, which only relies on
//! the ring operations of [`Value`]. Which one runs is decided by [`Arg::classify`]ing both
//! arguments. Negative exponents are resolved through the reciprocal relations
//!
//! ```text
//! falling(x, -n) = 1 / rising(x + 1, n)
//! rising(x, -n) = 1 / falling(x - 1, n)
//! ```
//!
//! which always make exactly one hop to the other function with a positive exponent. Where the
//! denominator is zero the result is [`Value::Infinity`].

use crate::base::*;
use super::product::strided_product;

/// The capability of an argument, as far as dispatch is concerned.
enum Arg<'a> {
    Native(i64),
    Ring(&'a Value)
}

impl<'a> Arg<'a> {
    fn classify(value: &'a Value) -> Arg<'a> {
        match value {
            Value::Int(x) => Arg::Native(*x),
            _ => Arg::Ring(value)
        }
    }
}

/// `x·(x-1)·…·(x-n+1)`, extended to negative `n` by `1 / rising(x+1, -n)`.
pub fn falling_factorial(x: &Value, n: &Value) -> Result<Value, BaseError> {
    match (Arg::classify(x), Arg::classify(n)) {
        (Arg::Native(x), Arg::Native(n)) => falling_int(x, n),
        (Arg::Ring(x), Arg::Native(n)) => falling_ring(x, n),
        (_, Arg::Ring(n)) => Err(invalid_exponent(n))
    }
}

/// `x·(x+1)·…·(x+n-1)`, extended to negative `n` by `1 / falling(x-1, -n)`.
pub fn rising_factorial(x: &Value, n: &Value) -> Result<Value, BaseError> {
    match (Arg::classify(x), Arg::classify(n)) {
        (Arg::Native(x), Arg::Native(n)) => rising_int(x, n),
        (Arg::Ring(x), Arg::Native(n)) => rising_ring(x, n),
        (_, Arg::Ring(n)) => Err(invalid_exponent(n))
    }
}

/// Alias of [`falling_factorial`].
pub fn factorial_power(x: &Value, n: &Value) -> Result<Value, BaseError> {
    falling_factorial(x, n)
}

/// Alias of [`rising_factorial`].
pub fn pochhammer(x: &Value, n: &Value) -> Result<Value, BaseError> {
    rising_factorial(x, n)
}

fn invalid_exponent(n: &Value) -> BaseError {
    format!("n must be a native integer, found {}", n.type_str()).into()
}

fn check_operand(x: &Value) -> Result<(), BaseError> {
    match x {
        Value::Infinity => Err(BaseError::arithmetic("x must not be infinity")),
        _ => Ok(())
    }
}

fn negate_exponent(n: i64) -> Result<i64, BaseError> {
    n.checked_neg().ok_or_else(|| BaseError::from(format!("exponent {n} out of range")))
}

fn falling_int(x: i64, n: i64) -> Result<Value, BaseError> {
    match n {
        0 => Ok(Value::Int(1)),
        1.. => strided_product(x, -1, n as u64),
        _ => {
            let den = match x.checked_add(1) {
                Some(x1) => rising_int(x1, negate_exponent(n)?)?,
                None => rising_factorial(&add(&Value::Int(x), &Value::Int(1))?, &Value::Int(negate_exponent(n)?))?
            };
            if den == Value::Int(0) { Ok(Value::Infinity) } else { invert(&den) }
        }
    }
}

fn rising_int(x: i64, n: i64) -> Result<Value, BaseError> {
    match n {
        0 => Ok(Value::Int(1)),
        1.. => strided_product(x, 1, n as u64),
        _ => {
            let den = match x.checked_sub(1) {
                Some(x1) => falling_int(x1, negate_exponent(n)?)?,
                None => falling_factorial(&sub(&Value::Int(x), &Value::Int(1))?, &Value::Int(negate_exponent(n)?))?
            };
            if den == Value::Int(0) { Ok(Value::Infinity) } else { invert(&den) }
        }
    }
}

fn falling_ring(x: &Value, n: i64) -> Result<Value, BaseError> {
    check_operand(x)?;
    match n {
        0 => Ok(Value::Int(1)),
        1.. => {
            let mut acc = x.clone();
            for i in 1..n {
                check_stop!();
                acc = mul(&acc, &sub(x, &Value::Int(i))?)?;
            }
            Ok(acc)
        },
        _ => {
            let den = rising_factorial(&add(x, &Value::Int(1))?, &Value::Int(negate_exponent(n)?))?;
            if is_zero(&den) { Ok(Value::Infinity) } else { invert(&den) }
        }
    }
}

fn rising_ring(x: &Value, n: i64) -> Result<Value, BaseError> {
    check_operand(x)?;
    match n {
        0 => Ok(Value::Int(1)),
        1.. => {
            let mut acc = x.clone();
            for i in 1..n {
                check_stop!();
                acc = mul(&acc, &add(x, &Value::Int(i))?)?;
            }
            Ok(acc)
        },
        _ => {
            let den = falling_factorial(&sub(x, &Value::Int(1))?, &Value::Int(negate_exponent(n)?))?;
            if is_zero(&den) { Ok(Value::Infinity) } else { invert(&den) }
        }
    }
}

fn eval_falling(args: &[Value]) -> Result<Value, BaseError> {
    match args {
        [x, n] => falling_factorial(x, n),
        _ => Err("exactly 2 arguments required".into())
    }
}

fn eval_rising(args: &[Value]) -> Result<Value, BaseError> {
    match args {
        [x, n] => rising_factorial(x, n),
        _ => Err("exactly 2 arguments required".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::testutils::*;

    fn ratio(n: i64, d: i64) -> Value {
        Value::from(BigRational::new(n.into(), d.into()))
    }

    #[test]
    fn test_falling() {
        assert_eq!(falling_factorial(&int(5), &int(0)), Ok(int(1)));
        assert_eq!(falling_factorial(&int(5), &int(3)), Ok(int(60)));
        assert_eq!(falling_factorial(&int(5), &int(7)), Ok(int(0)));
        assert_eq!(falling_factorial(&int(-2), &int(3)), Ok(int(-24)));
        assert_eq!(falling_factorial(&int(5), &int(-2)), Ok(ratio(1, 42)));
        assert_eq!(falling_factorial(&int(-1), &int(-1)), Ok(Value::Infinity));
        assert_eq!(falling_factorial(&int(-2), &int(-2)), Ok(Value::Infinity));
        assert_eq!(falling_factorial(&int(-4), &int(-2)), Ok(ratio(1, 6)));
        assert_eq!(falling_factorial(&int(0), &int(-2)), Ok(ratio(1, 2)));
    }

    #[test]
    fn test_rising() {
        assert_eq!(rising_factorial(&int(5), &int(3)), Ok(int(210)));
        assert_eq!(rising_factorial(&int(0), &int(3)), Ok(int(0)));
        assert_eq!(rising_factorial(&int(1), &int(5)), Ok(int(120)));
        assert_eq!(rising_factorial(&int(5), &int(-2)), Ok(ratio(1, 12)));
        assert_eq!(rising_factorial(&int(1), &int(-1)), Ok(Value::Infinity));
        assert_eq!(rising_factorial(&int(2), &int(-3)), Ok(Value::Infinity));
        assert!(rising_factorial(&int(1), &int(i64::MIN)).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_falling_rising_relation() {
        for x in -6..=6 {
            for n in 0..=6 {
                assert_eq!(falling_factorial(&int(x), &int(n)), rising_factorial(&int(x - n + 1), &int(n)));
            }
        }
    }

    #[test]
    fn test_reciprocal_relation() {
        for x in -5..=5 {
            for n in 1..=4 {
                let f = falling_factorial(&int(x), &int(-n)).unwrap();
                let r = rising_factorial(&int(x + 1), &int(n)).unwrap();
                if r == int(0) {
                    assert!(f.is_pole());
                } else {
                    assert_eq!(mul(&f, &r), Ok(int(1)));
                }
            }
        }
    }

    #[test]
    fn test_overflow() {
        let big = falling_factorial(&int(i64::MAX), &int(2)).unwrap();
        assert_eq!(big, Value::from(Number::from(i64::MAX) * (i64::MAX - 1)));
        let big = rising_factorial(&int(i64::MAX), &int(2)).unwrap();
        assert_eq!(big, Value::from(Number::from(i64::MAX) * (Number::from(i64::MAX) + 1)));
        let inv = falling_factorial(&int(i64::MAX), &int(-1)).unwrap();
        assert_eq!(inv, Value::from(BigRational::new(1.into(), Number::from(i64::MAX) + 1)));
        assert_eq!(rising_factorial(&int(1), &int(30)).unwrap().to_string(),
            "265252859812191058636308480000000");
    }

    #[test]
    fn test_generic() {
        let half = ratio(1, 2);
        assert_eq!(falling_factorial(&half, &int(2)), Ok(ratio(-1, 4)));
        assert_eq!(rising_factorial(&half, &int(3)), Ok(ratio(15, 8)));
        assert_eq!(falling_factorial(&half, &int(-1)), Ok(ratio(2, 3)));
        assert_eq!(falling_factorial(&Value::Real(2.5), &int(2)), Ok(Value::Real(3.75)));
        assert_eq!(rising_factorial(&Value::Real(-1.0), &int(2)), Ok(Value::Real(-0.0)));
        assert_eq!(falling_factorial(&Value::Real(-1.0), &int(-1)), Ok(Value::Infinity));
        let big = Value::from(Number::from(1) << 64);
        assert_eq!(falling_factorial(&big, &int(0)), Ok(int(1)));
        assert_eq!(falling_factorial(&big, &int(1)), Ok(big.clone()));
        let x = Value::var("x");
        assert_eq!(rising_factorial(&x, &int(2)).unwrap().to_string(), "x * (x + 1)");
        assert_eq!(falling_factorial(&x, &int(3)).unwrap().to_string(), "x * (x - 1) * (x - 2)");
        assert_eq!(falling_factorial(&x, &int(-1)).unwrap().to_string(), "1 / (x + 1)");
    }

    #[test]
    fn test_invalid() {
        assert!(falling_factorial(&int(5), &Value::Real(2.0)).unwrap_err().is_invalid_argument());
        assert!(rising_factorial(&int(5), &Value::var("n")).unwrap_err().is_invalid_argument());
        assert!(rising_factorial(&int(5), &ratio(1, 2)).unwrap_err().is_invalid_argument());
        for n in [-2, -1, 0, 1, 2] {
            assert_eq!(falling_factorial(&Value::Infinity, &int(n)),
                Err(BaseError::arithmetic("x must not be infinity")));
            assert_eq!(rising_factorial(&Value::Infinity, &int(n)),
                Err(BaseError::arithmetic("x must not be infinity")));
        }
    }

    #[test]
    fn test_eval() {
        test_eval!("falling(5, 3)" => "60");
        test_eval!("factorial_power(5, -2)" => "1/42");
        test_eval!("rising(5, 3)" => "210");
        test_eval!("pochhammer(1/2, 2)" => "3/4");
        test_eval!("falling(-1, -1)" => "inf");
        test_eval!("rising(y, 0)" => "1");
        test_eval!("falling(5, 2.0)" => err);
        test_eval!("rising(5)" => err);
        test_eval!("falling((-4)!!, 1)" => err);
    }
}

pub fn init(keywords: &mut crate::keywords::Keywords) {
    keywords.insert(["falling", "factorial_power"], eval_falling, "falling(x, n)");
    keywords.insert(["rising", "pochhammer"], eval_rising, "rising(x, n)");
}
