use crate::base::*;
use std::collections::HashMap;
use std::sync::Arc;
use once_cell::sync::Lazy;

pub(crate) type Evaluator = fn(&[Value]) -> Result<Value, BaseError>;

pub(crate) struct Keyword {
    pub(crate) func: Evaluator,
    pub(crate) usage: &'static str,
}

#[derive(Default)]
pub(crate) struct Keywords(HashMap<&'static str, Arc<Keyword>>);

static KEYWORDS: Lazy<Keywords> = Lazy::new(|| {
    let mut keywords = Default::default();
    crate::ops::init(&mut keywords);
    keywords
});

impl Keywords {
    /// Registers `func` under one or more names. Aliases share a single record.
    pub(crate) fn insert(&mut self, names: impl AsSlice<&'static str>, func: Evaluator, usage: &'static str) {
        let rec = Arc::new(Keyword { func, usage });
        for name in names.as_slice() {
            self.0.insert(*name, Arc::clone(&rec));
        }
    }
}

pub(crate) fn find_keyword(name: &str) -> Result<&'static Keyword, BaseError> {
    KEYWORDS.0.get(name)
        .map(|rec| &**rec)
        .ok_or_else(|| BaseError::from(format!("symbol '{name}' not found")))
}

/// All named functions with their usage strings, sorted by name. Operators are not included.
pub fn list_keywords() -> Vec<(&'static str, &'static str)> {
    let mut list = KEYWORDS.0.iter()
        .filter(|(name, _)| name.starts_with(|c: char| c.is_ascii_alphabetic()))
        .map(|(name, rec)| (*name, rec.usage))
        .collect::<Vec<_>>();
    list.sort();
    list
}

pub(crate) trait AsSlice<T> {
    fn as_slice(&self) -> &[T];
}

impl<T> AsSlice<T> for T {
    fn as_slice(&self) -> &[T] { std::slice::from_ref(self) }
}

impl<T, const N: usize> AsSlice<T> for [T; N] {
    fn as_slice(&self) -> &[T] { self }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry() {
        let list = list_keywords();
        assert!(list.windows(2).all(|w| w[0].0 < w[1].0));
        for (name, usage) in &list {
            assert!(usage.ends_with(')'), "malformed usage of {name}: {usage}");
        }
        for alias in ["factorial_power", "pochhammer"] {
            assert!(list.iter().any(|(name, _)| name == &alias));
        }
        assert!(find_keyword("!!").is_ok());
        assert!(find_keyword("gamma").is_err());
    }
}
