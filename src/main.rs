//! Gridfall runner (default binary).
//!
//! Reads the field description from the file named on the command line,
//! lets the figure fall until it rests, and prints the result (or the
//! full step trace with `--steps`).

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut stdout = std::io::stdout();

    gridfall::cli::run(&args, &mut stdout)?;
    Ok(())
}
