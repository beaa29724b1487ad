use crate::base::*;
use crate::keywords::find_keyword;

/// An expression of the calculator language. This may be either a directly accessible
/// [`Value`] (a literal or a free variable) or a [`Node`], which becomes a [`Value`] on
/// evaluation.
#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    Imm(Value),
    Eval(Node)
}

/// The head of a [`Node`]: a named function (`factorial(5)`) or an operator (`5!`, `2*3`).
#[derive(Debug, PartialEq, Clone)]
pub enum Head {
    Symbol(String),
    Oper(String)
}

impl Head {
    pub fn as_str(&self) -> &str {
        match self {
            Head::Symbol(s) | Head::Oper(s) => s
        }
    }
}

/// A function or operator applied to a list of argument expressions.
#[derive(Debug, PartialEq, Clone)]
pub struct Node {
    pub head: Head,
    pub args: Vec<Expr>
}

impl Expr {
    pub fn new_value(value: impl Into<Value>) -> Expr {
        Expr::Imm(value.into())
    }

    pub fn new_var(name: impl Into<String>) -> Expr {
        Expr::Imm(Value::var(name))
    }

    pub fn new_node(head: impl Into<String>, args: Vec<Expr>) -> Expr {
        Expr::Eval(Node{head: Head::Symbol(head.into()), args})
    }

    /// Creates an operator expression. Operands are provided as `args`.
    pub fn new_op(op: impl Into<String>, args: Vec<Expr>) -> Expr {
        Expr::Eval(Node{head: Head::Oper(op.into()), args})
    }

    pub fn eval(self, env: &Env) -> Result<Value, EvalError> {
        match self {
            Expr::Imm(value) => Ok(value),
            Expr::Eval(node) => node.eval(env)
        }
    }

    pub fn eval_default(self) -> Result<Value, EvalError> {
        self.eval(&Default::default())
    }
}

impl Node {
    /// Evaluates the arguments, then looks the head up in the global keyword table and applies
    /// it. Both steps are reported to the tracer of `env`.
    pub fn eval(self, env: &Env) -> Result<Value, EvalError> {
        env.tracer.borrow_mut().log(tracing::Event::Enter(&self));
        let res = self.eval_inner(env);
        env.tracer.borrow_mut().log(tracing::Event::Leave(&res));
        res
    }

    fn eval_inner(&self, env: &Env) -> Result<Value, EvalError> {
        let keyword = try_with!(self.clone(), find_keyword(self.head.as_str())?);
        let args = self.args.iter()
            .map(|arg| arg.clone().eval(env))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(try_with!(self.clone(), (keyword.func)(&args)?))
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Expr {
        Expr::Imm(value)
    }
}

impl From<Node> for Expr {
    fn from(node: Node) -> Expr {
        Expr::Eval(node)
    }
}

impl Describe for Expr {
    fn describe_prec(&self, prec: u32) -> String {
        match self {
            Expr::Imm(value) => value.describe_prec(prec),
            Expr::Eval(node) => node.describe_prec(prec)
        }
    }
}

impl Describe for Node {
    fn describe_prec(&self, prec: u32) -> String {
        match (&self.head, &self.args[..]) {
            (Head::Oper(op), [lhs, rhs]) => describe_infix(op, lhs, rhs, prec),
            (Head::Oper(op), [arg]) if op == "-" => {
                let inner = format!("-{}", arg.describe_prec(PREC_NEG));
                if prec > PREC_NEG { format!("({inner})") } else { inner }
            },
            (Head::Oper(op), [arg]) => format!("{}{op}", arg.describe_prec(PREC_POSTFIX)),
            (head, args) => {
                let args = args.iter()
                    .map(Describe::describe)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}({args})", head.as_str())
            }
        }
    }
}
