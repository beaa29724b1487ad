macro_rules! test_eval {
    ($input:literal => err) => {
        assert!(crate::parse($input).unwrap().eval_default().is_err(), "{} should fail", $input);
    };
    ($input:literal => $output:literal) => {
        assert_eq!(crate::parse($input).unwrap().eval_default().unwrap().to_string(), $output);
    };
}

pub(crate) use test_eval;

/// Shorthand for a native integer argument.
pub(crate) fn int(x: i64) -> crate::base::Value {
    crate::base::Value::Int(x)
}
