//! Prompt helpers
//!
//! Line-oriented input loops shared by the buyer and seller flows.
//! Invalid input re-prompts; a closed input stream is an error so the
//! caller can unwind to the shutdown path.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{Result, StockError};

/// Read one line, without the trailing newline
pub(super) fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(StockError::InputClosed);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Read until the answer is an integer within `low..=high`
///
/// Menus print their own text first; this only consumes answers.
pub(super) fn prompt_choice<R, W>(input: &mut R, output: &mut W, low: u32, high: u32) -> Result<u32>
where
    R: BufRead,
    W: Write,
{
    loop {
        output.flush()?;
        match read_line(input)?.trim().parse::<u32>() {
            Ok(value) if (low..=high).contains(&value) => return Ok(value),
            _ => writeln!(
                output,
                "Invalid choice. Please enter a number from {low} to {high}."
            )?,
        }
    }
}

/// Prompt until the answer parses as `T`
pub(super) fn prompt_parse<R, W, T>(
    input: &mut R,
    output: &mut W,
    message: &str,
    complaint: &str,
) -> Result<T>
where
    R: BufRead,
    W: Write,
    T: FromStr,
{
    loop {
        write!(output, "{message}")?;
        output.flush()?;
        match read_line(input)?.trim().parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "{complaint}")?,
        }
    }
}

/// Prompt until the answer is non-empty (whitespace does not count)
///
/// The answer is returned verbatim, untrimmed.
pub(super) fn prompt_nonempty<R, W>(
    input: &mut R,
    output: &mut W,
    message: &str,
    complaint: &str,
) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{message}")?;
        output.flush()?;
        let line = read_line(input)?;
        if line.trim().is_empty() {
            writeln!(output, "{complaint}")?;
        } else {
            return Ok(line);
        }
    }
}

/// Ask for a `y` to confirm; any other answer declines
pub(super) fn confirm<R, W>(input: &mut R, output: &mut W, message: &str) -> Result<bool>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{message}")?;
    output.flush()?;
    Ok(read_line(input)?.trim().eq_ignore_ascii_case("y"))
}
