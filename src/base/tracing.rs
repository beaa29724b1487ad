use crate::base::*;

/// A step of evaluation reported to a [`Tracer`]. Every `Enter` is balanced by a `Leave`.
#[derive(Debug)]
pub enum Event<'a> {
    Enter(&'a Node),
    Leave(&'a Result<Value, EvalError>)
}

pub trait Tracer {
    fn log(&mut self, ev: Event<'_>);
}

impl Tracer for () {
    fn log(&mut self, _ev: Event<'_>) { }
}
