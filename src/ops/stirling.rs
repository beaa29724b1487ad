//! Stirling numbers of the first (signed) and second kind.
//!
//! Both are defined by two-term recurrences over the `(n, k)` grid. The value at `(n, k)` only
//! depends on the band of cells with `0 ≤ i - j ≤ n - k`, so each call keeps one diagonal of
//! that band in its own [`StirlingTable`] and sweeps it column by column. No recursion takes
//! place and nothing is shared between calls.

use crate::base::*;

/// Call-local memo over one diagonal of the recurrence grid: while sweeping column `j`, cell
/// `t` holds the value at `(j + t, j)`. Starts as column 0, where only `(0, 0)` is nonzero.
struct StirlingTable {
    cells: Vec<Number>
}

impl StirlingTable {
    fn new(n: i64, k: i64) -> Result<StirlingTable, BaseError> {
        let too_large = || BaseError::from(format!("arguments ({n}, {k}) too large"));
        let len = usize::try_from(n - k).ok()
            .and_then(|d| d.checked_add(1))
            .ok_or_else(too_large)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large())?;
        cells.resize(len, Number::zero());
        cells[0] = Number::one();
        Ok(StirlingTable { cells })
    }

    /// Moves from column `j - 1` to column `j`, in place. `weight(t)` is the factor applied
    /// to the cell `(j + t - 1, j)` already computed in this sweep.
    fn advance(&mut self, weight: impl Fn(usize) -> Number) {
        for t in 1..self.cells.len() {
            let step = &self.cells[t - 1] * weight(t);
            self.cells[t] += step;
        }
    }

    fn into_value(mut self) -> Value {
        Value::from(self.cells.pop().unwrap_or_default())
    }
}

fn check_indices(n: &Value, k: &Value) -> Result<(i64, i64), BaseError> {
    let (n, k) = (n.as_native("n")?, k.as_native("k")?);
    if n < 0 {
        return Err(format!("n must be non-negative, found {n}").into());
    }
    Ok((n, k))
}

/// Signed Stirling number of the first kind: `S1(n, k) = S1(n-1, k-1) - (n-1)·S1(n-1, k)`
/// with `S1(0, 0) = 1`. Requires `0 ≤ k ≤ n`.
pub fn stirling_first_kind(n: &Value, k: &Value) -> Result<Value, BaseError> {
    let (n, k) = check_indices(n, k)?;
    if k < 0 || k > n {
        return Err(format!("k must satisfy 0 ≤ k ≤ {n}, found {k}").into());
    }
    if k == n {
        return Ok(Value::Int(1));
    }
    let mut table = StirlingTable::new(n, k)?;
    for j in 1..=k as usize {
        check_stop!();
        table.advance(|t| -Number::from(j + t - 1));
    }
    Ok(table.into_value())
}

/// Stirling number of the second kind: `S2(n, k) = k·S2(n-1, k) + S2(n-1, k-1)` with
/// `S2(n, 1) = S2(n, n) = 1`. Requires `1 ≤ k ≤ n`.
pub fn stirling_second_kind(n: &Value, k: &Value) -> Result<Value, BaseError> {
    let (n, k) = check_indices(n, k)?;
    if k < 1 || k > n {
        return Err(format!("k must satisfy 1 ≤ k ≤ {n}, found {k}").into());
    }
    if k == n {
        return Ok(Value::Int(1));
    }
    let mut table = StirlingTable::new(n, k)?;
    for j in 1..=k as usize {
        check_stop!();
        table.advance(|_| Number::from(j));
    }
    Ok(table.into_value())
}

fn eval_stirling1(args: &[Value]) -> Result<Value, BaseError> {
    match args {
        [n, k] => stirling_first_kind(n, k),
        _ => Err("exactly 2 arguments required".into())
    }
}

fn eval_stirling2(args: &[Value]) -> Result<Value, BaseError> {
    match args {
        [n, k] => stirling_second_kind(n, k),
        _ => Err("exactly 2 arguments required".into())
    }
}


pub fn init(keywords: &mut crate::keywords::Keywords) {
    keywords.insert("stirling1", eval_stirling1, "stirling1(n, k)");
    keywords.insert("stirling2", eval_stirling2, "stirling2(n, k)");
}
