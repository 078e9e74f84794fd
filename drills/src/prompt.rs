//! Interactive console prompts with re-prompt loops.
//!
//! The workers are generic over `BufRead`/`Write` so tests can drive them
//! with in-memory buffers; [`prompt_until`] and [`prompt_line`] are the
//! stdin/stdout wrappers the binaries use.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result, bail};

/// Prompt until a line parses as `T` and satisfies `accept`.
///
/// The prompt is re-issued after every rejected line, whether it failed to
/// parse or failed `accept`. End of input is an error: the caller cannot
/// make progress without a value.
pub fn read_until<T, R, W, F>(input: &mut R, output: &mut W, prompt: &str, accept: F) -> Result<T>
where
    T: FromStr,
    R: BufRead,
    W: Write,
    F: Fn(&T) -> bool,
{
    let mut line = String::new();
    loop {
        write!(output, "{prompt}").context("write prompt")?;
        output.flush().context("flush prompt")?;
        line.clear();
        let read = input.read_line(&mut line).context("read input line")?;
        if read == 0 {
            bail!("unexpected end of input while waiting for {prompt:?}");
        }
        if let Ok(value) = line.trim().parse::<T>() {
            if accept(&value) {
                return Ok(value);
            }
        }
    }
}

/// Prompt once and return the entered line without its trailing newline.
pub fn read_line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}").context("write prompt")?;
    output.flush().context("flush prompt")?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("read input line")?;
    if read == 0 {
        bail!("unexpected end of input while waiting for {prompt:?}");
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// [`read_until`] over stdin/stdout.
pub fn prompt_until<T, F>(prompt: &str, accept: F) -> Result<T>
where
    T: FromStr,
    F: Fn(&T) -> bool,
{
    let stdin = io::stdin();
    let stdout = io::stdout();
    read_until(&mut stdin.lock(), &mut stdout.lock(), prompt, accept)
}

/// [`read_line`] over stdin/stdout.
pub fn prompt_line(prompt: &str) -> Result<String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    read_line(&mut stdin.lock(), &mut stdout.lock(), prompt)
}
