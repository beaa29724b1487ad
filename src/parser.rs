use std::str::CharIndices;
use std::iter::Peekable;
use crate::base::*;

struct Tokenizer<'a> {
    input: &'a str,
    iter: Peekable<CharIndices<'a>>,
}

#[derive(PartialEq)]
enum CharClass {
    Space,
    Ident,
    Bang,
    Other
}

fn char_class(c: char) -> CharClass {
    match c {
        ' ' | '\t' | '\n' => CharClass::Space,
        'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '.' => CharClass::Ident,
        '!' => CharClass::Bang,
        _ => CharClass::Other
    }
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Tokenizer<'a> {
        Tokenizer{input, iter: input.char_indices().peekable()}
    }

    fn byte_pos(&mut self) -> usize {
        match self.iter.peek() {
            Some(&(pos, _)) => pos,
            None => self.input.len()
        }
    }

    fn read_same(&mut self, class: CharClass) {
        while let Some(&(_, ch)) = self.iter.peek() {
            if char_class(ch) == class {
                self.iter.next();
            } else {
                break;
            }
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&(_, ch)) = self.iter.peek() {
            let start = self.byte_pos();
            match char_class(ch) {
                CharClass::Space => {
                    self.iter.next();
                    continue;
                },
                class @ (CharClass::Ident | CharClass::Bang) => self.read_same(class),
                CharClass::Other => { self.iter.next(); }
            }
            let end = self.byte_pos();
            return Some(&self.input[start..end]);
        }
        None
    }
}


struct Parser<'str> {
    input: &'str str,
    tokens: Peekable<Tokenizer<'str>>,
}

/// Parses an input line into an [`Expr`].
///
/// The grammar, from loosest to tightest binding: `+` and `-` (left-associative), `*` and `/`
/// (left-associative), unary `-`, postfix `!` (factorial) and `!!` (double factorial),
/// then atoms: numbers, parenthesized expressions, function calls `name(args...)` and
/// free variables.
pub fn parse(input: &str) -> Result<Expr, ParseError<'_>> {
    let mut parser = Parser{input, tokens: Tokenizer::new(input).peekable()};
    let expr = parser.parse_sum()?;
    match parser.tokens.next() {
        None => Ok(expr),
        Some(tk) => Err(ParseError::new(format!("unexpected '{tk}'"), tk))
    }
}

impl<'str> Parser<'str> {
    fn next_token(&mut self) -> Result<&'str str, ParseError<'str>> {
        self.tokens.next()
            .ok_or_else(|| ParseError::new("unexpected end of input", &self.input[self.input.len()..]))
    }

    fn next_if(&mut self, expected: &str) -> Option<&'str str> {
        self.tokens.next_if(|tk| *tk == expected)
    }

    fn parse_sum(&mut self) -> Result<Expr, ParseError<'str>> {
        let mut expr = self.parse_product()?;
        while let Some(op) = self.next_if("+").or_else(|| self.next_if("-")) {
            expr = Expr::new_op(op, vec![expr, self.parse_product()?]);
        }
        Ok(expr)
    }

    fn parse_product(&mut self) -> Result<Expr, ParseError<'str>> {
        let mut expr = self.parse_unary()?;
        while let Some(op) = self.next_if("*").or_else(|| self.next_if("/")) {
            expr = Expr::new_op(op, vec![expr, self.parse_unary()?]);
        }
        Ok(expr)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError<'str>> {
        match self.next_if("-") {
            Some(op) => Ok(Expr::new_op(op, vec![self.parse_unary()?])),
            None => self.parse_postfix()
        }
    }

    fn parse_postfix(&mut self) -> Result<Expr, ParseError<'str>> {
        let mut expr = self.parse_atom()?;
        while let Some(tk) = self.tokens.next_if(|tk| tk.starts_with('!')) {
            if tk != "!" && tk != "!!" {
                return Err(ParseError::new(format!("unknown operator '{tk}'"), tk));
            }
            expr = Expr::new_op(tk, vec![expr]);
        }
        Ok(expr)
    }

    fn parse_atom(&mut self) -> Result<Expr, ParseError<'str>> {
        let tk = self.next_token()?;
        if tk == "(" {
            let expr = self.parse_sum()?;
            self.expect(")")?;
            Ok(expr)
        } else if tk.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
            Self::parse_number(tk)
        } else if tk.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
            if self.next_if("(").is_some() {
                Ok(Expr::new_node(tk, self.parse_args()?))
            } else if tk.contains('.') {
                Err(ParseError::new(format!("invalid identifier '{tk}'"), tk))
            } else {
                Ok(Expr::new_var(tk))
            }
        } else {
            Err(ParseError::new(format!("unexpected '{tk}'"), tk))
        }
    }

    fn parse_args(&mut self) -> Result<Vec<Expr>, ParseError<'str>> {
        let mut args = Vec::new();
        if self.next_if(")").is_some() {
            return Ok(args);
        }
        loop {
            args.push(self.parse_sum()?);
            let tk = self.next_token()?;
            match tk {
                ")" => return Ok(args),
                "," => continue,
                _ => return Err(ParseError::new(format!("expected ',' or ')', found '{tk}'"), tk))
            }
        }
    }

    fn parse_number(tk: &'str str) -> Result<Expr, ParseError<'str>> {
        let value = if tk.contains('.') {
            tk.parse::<f64>().map(Value::from).ok()
        } else {
            tk.parse::<Number>().map(Value::from).ok()
        };
        value.map(Expr::new_value)
            .ok_or_else(|| ParseError::new(format!("invalid number '{tk}'"), tk))
    }

    fn expect(&mut self, expected: &str) -> Result<(), ParseError<'str>> {
        let tk = self.next_token()?;
        if tk == expected {
            Ok(())
        } else {
            Err(ParseError::new(format!("expected '{expected}', found '{tk}'"), tk))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizer() {
        let tk = Tokenizer::new("falling(x_1, -2.5)!!+ 3!").collect::<Vec<_>>();
        assert_eq!(tk, ["falling", "(", "x_1", ",", "-", "2.5", ")", "!!", "+", "3", "!"]);
        assert_eq!(Tokenizer::new("  ").count(), 0);
    }

    #[test]
    fn test_parser() {
        assert_eq!(parse("3!"), Ok(Expr::new_op("!", vec![Expr::new_value(Value::Int(3))])));
        assert_eq!(parse("-x"), Ok(Expr::new_op("-", vec![Expr::new_var("x")])));
        assert_eq!(parse("f()"), Ok(Expr::new_node("f", vec![])));
        assert_eq!(parse("1 - 2 - 3"), Ok(Expr::new_op("-", vec![
            Expr::new_op("-", vec![Expr::new_value(Value::Int(1)), Expr::new_value(Value::Int(2))]),
            Expr::new_value(Value::Int(3))])));
        assert_eq!(parse("99999999999999999999"),
            Ok(Expr::new_value("99999999999999999999".parse::<Number>().unwrap())));
        assert_eq!(parse("0.25"), Ok(Expr::new_value(0.25)));
    }

    #[test]
    fn test_parse_errors() {
        let input = "factorial(3";
        assert_eq!(parse(input).unwrap_err().to_string(), "unexpected end of input");
        let input = "3!!!";
        let err = parse(input).unwrap_err();
        assert_eq!(err, ParseError::new("unknown operator '!!!'", &input[1..]));
        assert!(parse("").is_err());
        assert!(parse("1 2").is_err());
        assert!(parse("1..2").is_err());
        assert!(parse("f(1;2)").is_err());
        assert!(parse("x.y").is_err());
    }
}
