use crate::base::*;
use super::product::strided_product;

/// `n·(n-k)·(n-2k)·…`, continuing while the factor stays positive. `0` gives the empty
/// product 1.
pub fn multi_factorial(n: &Value, k: &Value) -> Result<Value, BaseError> {
    let (n, k) = (n.as_native("n")?, k.as_native("k")?);
    if n < 0 {
        return Err(format!("n must be non-negative, found {n}").into());
    }
    if k <= 0 {
        return Err(format!("k must be positive, found {k}").into());
    }
    multi_factorial_int(n, k)
}

fn multi_factorial_int(n: i64, k: i64) -> Result<Value, BaseError> {
    let count = if n == 0 { 0 } else { (n - 1) / k + 1 };
    strided_product(n, -k, count as u64)
}

/// `n!! = n·(n-2)·(n-4)·…`.
///
/// Negative arguments follow the recurrence `n!! = (n+2)!! / (n+2)`: negative odd `n` give
/// the exact rationals `(-1)!! = 1`, `(-3)!! = -1`, `(-5)!! = 1/3`, …, and negative even `n`
/// are poles. The recurrence is evaluated unrolled, as the single product
/// `1 / ((n+2)·(n+4)·…·(-1))`, which equals it for every odd `n < 0`.
pub fn double_factorial(n: &Value) -> Result<Value, BaseError> {
    let n = n.as_native("n")?;
    match n {
        0 => Ok(Value::Int(1)),
        1.. => multi_factorial_int(n, 2),
        _ if n.is_even() => Ok(Value::Infinity),
        _ => {
            let count = (-1 - n) / 2;
            invert(&strided_product(n + 2, 2, count as u64)?)
        }
    }
}

fn eval_multi(args: &[Value]) -> Result<Value, BaseError> {
    match args {
        [n, k] => multi_factorial(n, k),
        _ => Err("exactly 2 arguments required".into())
    }
}

fn eval_double(args: &[Value]) -> Result<Value, BaseError> {
    match args {
        [n] => double_factorial(n),
        _ => Err("exactly 1 argument required".into())
    }
}


pub fn init(keywords: &mut crate::keywords::Keywords) {
    keywords.insert("multifactorial", eval_multi, "multifactorial(n, k)");
    keywords.insert(["double_factorial", "!!"], eval_double, "double_factorial(n)");
}
