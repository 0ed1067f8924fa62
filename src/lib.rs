#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate pest;
#[macro_use]
extern crate pest_derive;

use std::fs::read_to_string;
use std::io::Write;
use std::path::Path;

pub use crate::config::{Config, IntWidth};
pub use crate::error::RuntimeError;
pub use crate::eval::EvalCtx;
pub use crate::parser::parse_script;
pub use crate::runtime::{__print, print, print_stdout, symbol, RuntimeInt, DEFAULT_RUNTIME};

pub mod ast;
pub mod config;
pub mod error;
pub mod eval;
pub mod parser;
pub mod runtime;

/// Parses the call script at `filename` and replays it into `out`.
pub fn run(filename: impl AsRef<Path>, width: IntWidth, out: &mut dyn Write) -> Result<(), RuntimeError> {
    let filename = filename.as_ref();
    let input = read_to_string(filename)?;
    let script = parse_script(&input)?;
    info!("{}: {} calls", filename.display(), script.calls.len());
    EvalCtx::new(out, width).run_script(&script)
}

/// Prints `values` to stdout with the configured width.
pub fn print_values(values: &[i64], config: Config) -> Result<(), RuntimeError> {
    match config.width {
        IntWidth::W64 => print_stdout(config.noeol, values),
        IntWidth::W32 => {
            if let Some(&value) = values.iter().find(|&&x| !config.width.fits(x)) {
                return Err(RuntimeError::Overflow { line: None, value, width: config.width });
            }
            let narrowed = values.iter().map(|&x| x as i32).collect::<Vec<_>>();
            print_stdout(config.noeol, &narrowed)
        }
    }
    Ok(())
}
