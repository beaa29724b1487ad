use crate::base::*;

fn eval_plus(args: &[Value]) -> Result<Value, BaseError> {
    match args {
        [lhs, rhs] => add(lhs, rhs),
        _ => Err("exactly 2 arguments required".into())
    }
}

fn eval_minus(args: &[Value]) -> Result<Value, BaseError> {
    match args {
        [arg] => sub(&Value::Int(0), arg),
        [lhs, rhs] => sub(lhs, rhs),
        _ => Err("1 or 2 arguments required".into())
    }
}

fn eval_times(args: &[Value]) -> Result<Value, BaseError> {
    match args {
        [lhs, rhs] => mul(lhs, rhs),
        _ => Err("exactly 2 arguments required".into())
    }
}

fn eval_div(args: &[Value]) -> Result<Value, BaseError> {
    match args {
        [lhs, rhs] => div(lhs, rhs),
        _ => Err("exactly 2 arguments required".into())
    }
}

fn eval_floor(args: &[Value]) -> Result<Value, BaseError> {
    match args {
        [arg] => floor(arg),
        _ => Err("exactly 1 argument required".into())
    }
}

fn eval_invert(args: &[Value]) -> Result<Value, BaseError> {
    match args {
        [arg] => invert(arg),
        _ => Err("exactly 1 argument required".into())
    }
}


pub fn init(keywords: &mut crate::keywords::Keywords) {
    keywords.insert("+", eval_plus, "a + b");
    keywords.insert("-", eval_minus, "a - b");
    keywords.insert("*", eval_times, "a * b");
    keywords.insert("/", eval_div, "a / b");
    keywords.insert("floor", eval_floor, "floor(x)");
    keywords.insert("invert", eval_invert, "invert(x)");
}
