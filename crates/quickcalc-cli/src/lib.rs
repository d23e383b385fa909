//! quickcalc command-line front end.
//!
//! Prints a banner, reads one line, evaluates it once, and prints either
//! the error message or `Result: {value}`.

use std::io::{self, BufRead, Write};

use quickcalc_eval::evaluate;
use tracing::debug;

/// Banner printed before the prompt, one entry per line.
pub const BANNER: [&str; 2] = [
    "Simple Calculator",
    "Type: number operator number (example: 12.5 * 3)",
];

/// Prompt printed without a trailing newline.
pub const PROMPT: &str = "Input: ";

/// Run one prompt-evaluate-print cycle.
///
/// Evaluation failures are printed, not returned; only I/O errors
/// propagate.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    for line in BANNER {
        writeln!(output, "{line}")?;
    }
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let line = read_line(input)?;
    match evaluate(line.as_deref()) {
        Ok(value) => writeln!(output, "Result: {value}")?,
        Err(err) => {
            if let Some(span) = err.span {
                debug!(%span, kind = ?err.kind, "input rejected");
            }
            writeln!(output, "{err}")?
        }
    }
    output.flush()
}

/// Read one line without its terminator; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    debug!(bytes = read, "read input line");
    if read == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
    line.truncate(trimmed);
    Ok(Some(line))
}
