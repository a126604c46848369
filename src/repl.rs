use std::io;
use std::io::{BufRead, Write};

use anyhow::Result;
use log::{debug, trace};

use crate::value::JsonBoolean;

const PROMPT: &str = ">> ";

/// Runs the checker on stdin and stdout.
pub fn start() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock())
}

/// Reads one token per line from `input` and writes its classification to `output`.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<()> {
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            trace!("end of input");
            writeln!(output)?;
            return Ok(());
        }

        let token = strip_newline(&line);
        if token.is_empty() {
            continue;
        }

        let b = JsonBoolean::new(token);
        debug!("classified {}", b);
        match b.value() {
            Ok(v) => writeln!(output, "{} => {}", b, v)?,
            Err(e) => writeln!(output, "{} => error: {}", b, e)?,
        }
    }
}

fn strip_newline(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
