use pochhammer::base::*;
use pochhammer::tracing::*;

use colored::Colorize;

/// Prints each call as it is entered and its result as it returns, indented by nesting depth.
/// Results are tagged with their place in the numeric tower, so promotions (`native integer`
/// to `big integer`, integer to `rational`) show up where they happen.
#[derive(Default)]
pub struct TextTracer {
    depth: usize,
    enabled: bool,
}

impl Tracer for TextTracer {
    fn log(&mut self, ev: Event<'_>) {
        if !self.enabled { return; }
        let line = self.render(ev);
        println!("{}", line.dimmed());
    }
}

impl TextTracer {
    fn render(&mut self, ev: Event<'_>) -> String {
        match ev {
            Event::Enter(node) => {
                let line = format!("{}{}", Self::indent(self.depth), node.describe());
                self.depth += 1;
                line
            },
            Event::Leave(res) => {
                self.depth = self.depth.saturating_sub(1);
                let out = match res {
                    Ok(value) => format!("= {value} [{}]", value.type_str()),
                    Err(err) => format!("! {}", err.reason())
                };
                format!("{}{out}", Self::indent(self.depth + 1))
            }
        }
    }

    fn indent(depth: usize) -> String {
        "  ".repeat(depth)
    }

    pub(crate) fn toggle(&mut self, on: bool) {
        self.enabled = on;
        self.depth = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pochhammer::parse;

    fn node(input: &str) -> Node {
        match parse(input).unwrap() {
            Expr::Eval(node) => node,
            expr => panic!("{expr:?} is not a call")
        }
    }

    #[test]
    fn test_render() {
        let mut tracer = TextTracer::default();
        let (outer, inner) = (node("21! - 1"), node("21!"));
        assert_eq!(tracer.render(Event::Enter(&outer)), "21! - 1");
        assert_eq!(tracer.render(Event::Enter(&inner)), "  21!");
        let big = inner.clone().eval(&Env::default());
        assert_eq!(tracer.render(Event::Leave(&big)), "    = 51090942171709440000 [big integer]");
        let res = Expr::Eval(outer.clone()).eval_default();
        assert_eq!(tracer.render(Event::Leave(&res)), "  = 51090942171709439999 [big integer]");
    }

    #[test]
    fn test_render_error() {
        let mut tracer = TextTracer::default();
        let call = node("factorial(1 / 2)");
        tracer.render(Event::Enter(&call));
        let res = call.clone().eval(&Env::default());
        assert_eq!(tracer.render(Event::Leave(&res)), "  ! n must be a native integer, found rational");
        assert_eq!(tracer.depth, 0);
    }
}
