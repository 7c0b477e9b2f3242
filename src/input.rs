// src/input.rs
use std::io::BufRead;

use crate::args::Args;
use crate::error::Result;

/// Take the expression from the command line, or read one line from
/// standard input. The stdin lock is scoped to this call.
pub fn read_expression(args: &Args) -> Result<String> {
    if let Some(expression) = &args.expression {
        return Ok(expression.clone());
    }
    read_line(&mut std::io::stdin().lock())
}

fn read_line(reader: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    // A stream that ends before any byte yields an empty string here;
    // rejecting it is the parser's job.
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}
