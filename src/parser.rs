use pest::iterators::Pair;
use pest::Parser;

use crate::ast::{Call, Script};
use crate::error::RuntimeError;

#[derive(Parser)]
#[grammar = "calls.pest"]
pub struct CallParser;

fn parse_literal(pair: Pair<Rule>) -> Result<i64, RuntimeError> {
    let text = pair.as_str();
    text.parse::<i64>().map_err(|_| RuntimeError::Literal {
        line: pair.as_span().start_pos().line_col().0,
        text: text.to_owned(),
    })
}

pub fn parse_call(call: Pair<Rule>) -> Result<Call, RuntimeError> {
    let line = call.as_span().start_pos().line_col().0;
    let mut name = String::new();
    let mut args = Vec::new();
    for part in call.into_inner() {
        match part.as_rule() {
            Rule::identifier => name = part.as_str().to_owned(),
            Rule::args => {
                args = part.into_inner().map(parse_literal).collect::<Result<_, _>>()?;
            }
            _ => unreachable!("{:?}", part),
        }
    }
    Ok(Call { name, args, line })
}

pub fn parse_script(input: &str) -> Result<Script, RuntimeError> {
    let pairs = CallParser::parse(Rule::script, input).map_err(Box::new)?;
    let calls = pairs
        .flat_map(|script| script.into_inner())
        .filter(|pair| pair.as_rule() == Rule::call)
        .map(parse_call)
        .collect::<Result<_, _>>()?;
    Ok(Script { calls })
}
