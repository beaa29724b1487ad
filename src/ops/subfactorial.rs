use crate::base::*;
use super::factorial::factorial;

/// The number of derangements of `n` elements, computed as the integer nearest to `n!/e`.
///
/// `1/e` enters as the partial sum `Σ (-1)^j/j!` over `j ≤ n + 2`. With this many terms
/// `n!` times the partial sum lies within `1/3` of the derangement count, so the rounding is
/// exact for all `n ≥ 1`.
pub fn subfactorial(n: &Value) -> Result<Value, BaseError> {
    let m = n.as_native("n")?;
    if m < 0 {
        return Err(format!("n must be non-negative, found {m}").into());
    }
    if m == 0 {
        return Ok(Value::Int(1));
    }
    let terms = m.checked_add(2)
        .ok_or_else(|| BaseError::from(format!("n = {m} too large")))?;
    let inv_e = Value::from(inv_e_partial(terms)?);
    let half = Value::from(BigRational::new(1.into(), 2.into()));
    floor(&add(&mul(&factorial(n)?, &inv_e)?, &half)?)
}

/// `Σ_{j=0}^{terms} (-1)^j / j!`.
fn inv_e_partial(terms: i64) -> Result<BigRational, BaseError> {
    let mut sum = BigRational::zero();
    let mut fact = Number::one();
    for j in 0..=terms {
        check_stop!();
        if j > 0 {
            fact *= j;
        }
        let term = BigRational::new(Number::one(), fact.clone());
        if j.is_even() { sum += term; } else { sum -= term; }
    }
    Ok(sum)
}

fn eval_subfactorial(args: &[Value]) -> Result<Value, BaseError> {
    match args {
        [n] => subfactorial(n),
        _ => Err("exactly 1 argument required".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::testutils::*;

    #[test]
    fn test_subfactorial() {
        let expected = [1, 0, 1, 2, 9, 44, 265, 1854, 14833, 133496, 1334961];
        for (n, d) in expected.into_iter().enumerate() {
            assert_eq!(subfactorial(&int(n as i64)), Ok(int(d)));
        }
        assert!(subfactorial(&int(-1)).unwrap_err().is_invalid_argument());
        assert!(subfactorial(&Value::Real(4.0)).unwrap_err().is_invalid_argument());
        assert!(subfactorial(&int(i64::MAX)).unwrap_err().is_invalid_argument());
        assert!(subfactorial(&int(i64::MAX - 1)).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_recurrence() {
        // D(n) = (n-1)·(D(n-1) + D(n-2))
        let (mut prev2, mut prev1) = (Number::one(), Number::zero());
        for n in 2..=60i64 {
            let cur = Number::from(n - 1) * (&prev1 + &prev2);
            assert_eq!(subfactorial(&int(n)), Ok(Value::from(cur.clone())), "n = {n}");
            prev2 = prev1;
            prev1 = cur;
        }
    }

    #[test]
    fn test_eval() {
        test_eval!("subfactorial(4)" => "9");
        test_eval!("subfactorial(0)" => "1");
        test_eval!("subfactorial(25)" => "5706255282633466762357224");
        test_eval!("subfactorial(1/2)" => err);
    }
}

pub fn init(keywords: &mut crate::keywords::Keywords) {
    keywords.insert("subfactorial", eval_subfactorial, "subfactorial(n)");
}
