#![cfg(feature = "std")]

//! Console I/O for the game: the [`Terminal`] seam and the integer prompt.

use std::fmt;
use std::io::{self, BufRead, Write};

pub const INVALID_INTEGER_MESSAGE: &str = "Invalid input: please enter an integer number.";

/// Failure to obtain input at all. Bad text is not an error here; it is
/// reported to the user and reprompted.
#[derive(Debug)]
pub enum InputError {
    /// Input reached end of file before a valid integer was read.
    Closed,
    Io(io::Error),
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        InputError::Io(err)
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Closed => write!(f, "input closed before the game finished"),
            InputError::Io(e) => write!(f, "console I/O error: {}", e),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            InputError::Closed => None,
        }
    }
}

/// Text output plus integer input, as seen by players and the game loop.
pub trait Terminal {
    /// Write `text` exactly as given.
    fn write_str(&mut self, text: &str) -> Result<(), InputError>;

    /// Prompt until the user enters something that parses as an integer.
    fn read_int(&mut self, prompt: &str) -> Result<i64, InputError>;

    fn say(&mut self, line: &str) -> Result<(), InputError> {
        self.write_str(line)?;
        self.write_str("\n")
    }

    fn blank_line(&mut self) -> Result<(), InputError> {
        self.write_str("\n")
    }
}

/// A [`Terminal`] over any line reader and writer, e.g. locked stdin/stdout
/// or in-memory buffers in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    fn write_str(&mut self, text: &str) -> Result<(), InputError> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    fn read_int(&mut self, prompt: &str) -> Result<i64, InputError> {
        read_int(&mut self.input, &mut self.output, prompt)
    }
}

/// Print `prompt` and read lines from `input` until one parses as an integer.
///
/// Each rejected line prints [`INVALID_INTEGER_MESSAGE`] and a blank line
/// before the prompt is shown again.
pub fn read_int<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<i64, InputError> {
    let mut line = String::new();
    loop {
        output.write_all(prompt.as_bytes())?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        let entry = line.strip_suffix('\n').unwrap_or(&line);
        let entry = entry.strip_suffix('\r').unwrap_or(entry);
        match parse_leading_int(entry) {
            Some(value) => return Ok(value),
            None => {
                log::debug!("rejected non-integer input {:?}", entry);
                writeln!(output, "{}", INVALID_INTEGER_MESSAGE)?;
                writeln!(output)?;
            }
        }
    }
}

/// Read the integer at the start of `entry`.
///
/// Leading whitespace and a sign are allowed and anything after the digits
/// is ignored, so `"123asdf"` reads as 123. Zero is only accepted when the
/// entry is exactly `"0"`. Magnitudes past `i64` saturate.
pub fn parse_leading_int(entry: &str) -> Option<i64> {
    let rest = entry.trim_start();
    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let digits = &digits[..digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len())];
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits.bytes().fold(0i64, |acc, d| {
        acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
    });
    let value = if negative { -magnitude } else { magnitude };
    if value == 0 && entry != "0" {
        return None;
    }
    Some(value)
}
