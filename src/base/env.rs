use super::tracing::Tracer;

use std::rc::Rc;
use std::cell::RefCell;

/// The environment in which expressions are evaluated. This is passed as an argument to
/// [`Expr::eval()`](crate::base::Expr::eval()).
#[derive(Clone)]
pub struct Env {
    pub tracer: Rc<RefCell<dyn Tracer>>,
}

impl Env {
    pub fn with_tracer(tracer: Rc<RefCell<dyn Tracer>>) -> Env {
        Env { tracer }
    }
}

impl Default for Env {
    fn default() -> Env {
        Env {
            tracer: Rc::new(RefCell::new(()))
        }
    }
}
