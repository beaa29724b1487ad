use crate::base::*;

/// Product of the `count` terms `start, start + step, start + 2·step, …`, or 1 for `count = 0`.
///
/// The product is accumulated in an `i64` for as long as it fits and continues in [`Number`]
/// from the first multiplication that would overflow. Terms themselves may leave the `i64`
/// range. A zero term ends the product early.
pub(crate) fn strided_product(start: i64, step: i64, count: u64) -> Result<Value, BaseError> {
    let mut native: i64 = 1;
    let mut big: Option<Number> = None;
    let mut term = start as i128;
    for _ in 0..count {
        check_stop!();
        if term == 0 {
            return Ok(Value::Int(0));
        }
        match &mut big {
            Some(acc) => *acc *= term,
            None => match i64::try_from(term).ok().and_then(|t| native.checked_mul(t)) {
                Some(prod) => native = prod,
                None => big = Some(Number::from(native) * term)
            }
        }
        term += step as i128;
    }
    Ok(match big {
        Some(acc) => Value::from(acc),
        None => Value::Int(native)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strided() {
        assert_eq!(strided_product(5, -1, 3), Ok(Value::Int(60)));
        assert_eq!(strided_product(5, 1, 3), Ok(Value::Int(210)));
        assert_eq!(strided_product(10, -3, 4), Ok(Value::Int(280)));
        assert_eq!(strided_product(7, 2, 0), Ok(Value::Int(1)));
        assert_eq!(strided_product(-3, 2, 2), Ok(Value::Int(3)));
        assert_eq!(strided_product(2, -1, 1_000_000_000_000), Ok(Value::Int(0)));
    }

    #[test]
    fn test_overflow() {
        let prod = strided_product(i64::MAX, 1, 2).unwrap();
        let expected = Number::from(i64::MAX) * (Number::from(i64::MAX) + 1);
        assert_eq!(prod, Value::Big(expected));
        let prod = strided_product(1, 1, 25).unwrap();
        assert_eq!(prod.to_string(), "15511210043330985984000000");
        let prod = strided_product(-(1 << 40), 1 << 41, 2).unwrap();
        assert_eq!(prod.to_string(), "-1208925819614629174706176");
    }
}
