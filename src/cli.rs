//! CLI driver.
//!
//! Everything user-facing lives behind [`run`], which takes the
//! arguments and an output sink so tests can drive it without a real
//! process. `main` is a trivial shell around it.
//!
//! The driver prints exactly one thing per invocation: the usage text,
//! one of the two failure messages, or the simulation result. Parse
//! failures never escape as errors; they map to the wrong-content
//! message. Only genuine I/O failures propagate.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use gridfall_core::{parse_field, settle, ParseError};
use gridfall_term::{render_field, render_trace};

pub const USAGE: &str = "No input file given.\nUsage: gridfall <input-file> [--steps]";
pub const MISSING_FILE: &str = "Input file does not exist.";
pub const WRONG_CONTENT: &str = "Input file has wrong content.";

/// Flag enabling step-trace output.
pub const STEPS_FLAG: &str = "--steps";

/// Parse, simulate, and render in one go.
///
/// With `record_trace` set the result is the step-trace text, otherwise
/// the rendering of the settled field.
pub fn simulate(input: &str, record_trace: bool) -> Result<String, ParseError> {
    let field = parse_field(input)?;
    let settled = settle(field, record_trace);

    if record_trace {
        Ok(render_trace(&settled.trace))
    } else {
        Ok(render_field(&settled.field))
    }
}

/// Run the CLI against `args` (program name already stripped), writing
/// all output to `out`.
pub fn run(args: &[String], out: &mut dyn Write) -> io::Result<()> {
    let mut paths = args.iter().filter(|a| a.as_str() != STEPS_FLAG);
    let Some(path) = paths.next() else {
        return writeln!(out, "{}", USAGE);
    };
    let record_trace = args.iter().any(|a| a == STEPS_FLAG);

    if !Path::new(path).exists() {
        return writeln!(out, "{}", MISSING_FILE);
    }
    let input = fs::read_to_string(path)?;

    match simulate(&input, record_trace) {
        Ok(rendered) => writeln!(out, "{}", rendered),
        Err(_) => writeln!(out, "{}", WRONG_CONTENT),
    }
}
