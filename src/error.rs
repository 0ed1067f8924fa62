use std::io;

use thiserror::Error;

use crate::config::IntWidth;
use crate::parser::Rule;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("syntax error\n{0}")]
    Syntax(#[from] Box<pest::error::Error<Rule>>),
    #[error("line {line}: integer literal `{text}` does not fit in 64 bits")]
    Literal { line: usize, text: String },
    #[error("line {line}: unknown builtin `{name}`")]
    UnknownBuiltin { line: usize, name: String },
    #[error("line {line}: `{name}` takes at least {expect} arguments, found {found}")]
    Arity { line: usize, name: String, expect: usize, found: usize },
    #[error("line {line}: count {count} does not match the {found} values supplied")]
    CountMismatch { line: usize, count: i64, found: usize },
    #[error("{}{value} does not fit in a {width} word", at(.line))]
    Overflow { line: Option<usize>, value: i64, width: IntWidth },
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn at(line: &Option<usize>) -> String {
    line.map(|line| format!("line {}: ", line)).unwrap_or_default()
}
