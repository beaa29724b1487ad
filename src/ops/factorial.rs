use crate::base::*;

/// Largest `n` for which `n!` fits into an `i64`.
const NATIVE_LIMIT: i64 = 20;

/// `n! = 1·2·…·n`, with `0! = 1`. `n` must be a non-negative native integer.
pub fn factorial(n: &Value) -> Result<Value, BaseError> {
    let n = n.as_native("n")?;
    if n < 0 {
        return Err(format!("n must be non-negative, found {n}").into());
    }
    let native = (2..=n.min(NATIVE_LIMIT)).product::<i64>();
    if n <= NATIVE_LIMIT {
        return Ok(Value::Int(native));
    }
    let mut acc = Number::from(native);
    for i in (NATIVE_LIMIT + 1)..=n {
        check_stop!();
        acc *= i;
    }
    Ok(Value::from(acc))
}

fn eval_factorial(args: &[Value]) -> Result<Value, BaseError> {
    match args {
        [n] => factorial(n),
        _ => Err("exactly 1 argument required".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::testutils::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(&int(0)), Ok(int(1)));
        assert_eq!(factorial(&int(1)), Ok(int(1)));
        assert_eq!(factorial(&int(5)), Ok(int(120)));
        assert_eq!(factorial(&int(20)), Ok(int(2432902008176640000)));
        assert_eq!(factorial(&int(21)).unwrap().to_string(), "51090942171709440000");
        assert_eq!(factorial(&int(30)).unwrap().to_string(), "265252859812191058636308480000000");
        assert_eq!(factorial(&int(100)).unwrap().to_string().len(), 158);
    }

    #[test]
    fn test_invalid() {
        assert!(factorial(&int(-1)).unwrap_err().is_invalid_argument());
        assert!(factorial(&Value::Real(3.0)).unwrap_err().is_invalid_argument());
        assert!(factorial(&Value::var("n")).unwrap_err().is_invalid_argument());
        let big = Value::from(Number::from(1) << 64);
        assert!(factorial(&big).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_eval() {
        test_eval!("factorial(10)" => "3628800");
        test_eval!("5!" => "120");
        test_eval!("3! + 1" => "7");
        test_eval!("2 * 3!" => "12");
        test_eval!("3!!" => "3");
        test_eval!("(3!)!" => "720");
        test_eval!("0!" => "1");
        test_eval!("(-1)!" => err);
        test_eval!("(1/2)!" => err);
        test_eval!("factorial(1, 2)" => err);
    }

    #[test]
    fn test_deterministic() {
        let first = factorial(&int(200)).unwrap();
        assert_eq!(factorial(&int(200)).unwrap(), first);
    }
}

pub fn init(keywords: &mut crate::keywords::Keywords) {
    keywords.insert(["factorial", "!"], eval_factorial, "factorial(n)");
}
