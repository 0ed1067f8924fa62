use std::collections::HashMap;
use std::convert::TryFrom;
use std::io::Write;

use crate::ast::{Call, Script};
use crate::config::IntWidth;
use crate::error::RuntimeError;
use crate::runtime::print;

type Builtin = fn(&mut EvalCtx<'_>, &Call) -> Result<(), RuntimeError>;

lazy_static! {
    static ref BUILTINS: HashMap<&'static str, Builtin> = {
        let mut builtins: HashMap<&'static str, Builtin> = HashMap::new();
        builtins.insert("__print", call_print);
        builtins
    };
}

/// Replays calls against an explicit sink. Each `__print` call carries its own `noeol`.
pub struct EvalCtx<'a> {
    out: &'a mut dyn Write,
    width: IntWidth,
}

impl<'a> EvalCtx<'a> {
    pub fn new(out: &'a mut dyn Write, width: IntWidth) -> Self {
        Self { out, width }
    }

    pub fn run_call(&mut self, call: &Call) -> Result<(), RuntimeError> {
        let builtin = BUILTINS.get(call.name.as_str()).ok_or_else(|| RuntimeError::UnknownBuiltin {
            line: call.line,
            name: call.name.to_owned(),
        })?;
        debug!("line {}: {}({:?})", call.line, call.name, call.args);
        builtin(self, call)
    }

    pub fn run_script(&mut self, script: &Script) -> Result<(), RuntimeError> {
        script.calls.iter().try_for_each(|call| self.run_call(call))?;
        self.out.flush()?;
        Ok(())
    }
}

fn call_print(ctx: &mut EvalCtx<'_>, call: &Call) -> Result<(), RuntimeError> {
    let (noeol, count, rest) = match call.args.as_slice() {
        [noeol, count, rest @ ..] => (*noeol, *count, rest),
        args => return Err(RuntimeError::Arity {
            line: call.line,
            name: call.name.to_owned(),
            expect: 2,
            found: args.len(),
        }),
    };
    let values = usize::try_from(count)
        .ok()
        .and_then(|n| rest.get(..n))
        .ok_or(RuntimeError::CountMismatch { line: call.line, count, found: rest.len() })?;
    if values.len() < rest.len() {
        warn!("line {}: {} surplus values left unread", call.line, rest.len() - values.len());
    }
    if let Some(&value) = values.iter().find(|&&x| !ctx.width.fits(x)) {
        return Err(RuntimeError::Overflow { line: Some(call.line), value, width: ctx.width });
    }
    print(&mut *ctx.out, noeol != 0, values)?;
    Ok(())
}
