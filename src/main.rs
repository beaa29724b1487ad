use pochhammer::base::*;
use pochhammer::{list_keywords, parse};

use std::cell::RefCell;
use std::rc::Rc;

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

mod tracer;
use tracer::TextTracer;

fn main() -> rustyline::Result<()> {
    if let Err(err) = ctrlc::set_handler(send_stop) {
        eprintln!("{}", format!("Ctrl-C will not interrupt evaluation: {err}").yellow());
    }
    let mut rl = DefaultEditor::new()?;
    let tracer = Rc::new(RefCell::new(TextTracer::default()));
    let env = Env::with_tracer(tracer.clone());
    loop {
        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err)
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        rl.add_history_entry(input)?;
        if let Some(cmd) = input.strip_prefix(':') {
            match cmd.split_whitespace().collect::<Vec<_>>()[..] {
                ["quit" | "q"] => break,
                ["help" | "h"] => help(),
                ["trace", "on"] => tracer.borrow_mut().toggle(true),
                ["trace", "off"] => tracer.borrow_mut().toggle(false),
                _ => println!("{}", format!("unknown command ':{cmd}'").red())
            }
            continue;
        }
        reset_stop();
        match parse(input) {
            Ok(expr) => match expr.eval(&env) {
                Ok(value) => println!("{value}"),
                Err(err) => println!("{}", err.to_string().red())
            },
            Err(err) => {
                err.display(input);
                println!("{}", err.to_string().red());
            }
        }
    }
    Ok(())
}

fn help() {
    println!("Functions:");
    for (name, usage) in list_keywords() {
        println!("  {:18} {}", name, usage.bold());
    }
    println!("Operators: + - * / (infix), - (prefix), ! !! (postfix)");
    println!("Commands: :trace on|off, :help, :quit");
}
