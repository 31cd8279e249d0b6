//! Whitespace-token console reader
//!
//! Tokens may span lines, so `2\n1\n10 5` and `2 1 10 5` read the same way.
//! After a malformed token the caller can drop the rest of the current line.

use crate::error::{CalcError, CalcResult};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Buffered token reader over any line source
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next whitespace-separated token, reading more lines as needed
    pub fn next_token(&mut self) -> CalcResult<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut buf = Vec::new();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                return Err(CalcError::EndOfInput);
            }
            // Invalid UTF-8 becomes U+FFFD and then fails to parse as a number
            let line = String::from_utf8_lossy(&buf);
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Drop whatever is left of the line the last token came from
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }

    pub fn next_integer(&mut self) -> CalcResult<i64> {
        let token = self.next_token()?;
        parse_integer(&token)
    }

    pub fn next_number(&mut self) -> CalcResult<f64> {
        let token = self.next_token()?;
        parse_number(&token)
    }
}

pub fn parse_integer(token: &str) -> CalcResult<i64> {
    token.parse::<i64>().map_err(|_| CalcError::MalformedInput {
        expected: "an integer",
        token: token.to_string(),
    })
}

/// Parse a finite real number; `NaN` and `inf` are rejected
pub fn parse_number(token: &str) -> CalcResult<f64> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::MalformedInput {
            expected: "a number",
            token: token.to_string(),
        }),
    }
}

/// Interactive console: token input plus prompt/line output
pub struct Console<R, W> {
    input: TokenReader<R>,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self {
            input: TokenReader::new(reader),
            out,
        }
    }

    pub fn input(&mut self) -> &mut TokenReader<R> {
        &mut self.input
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Print without a newline and flush so the prompt is visible before reading
    pub fn prompt(&mut self, text: &str) -> CalcResult<()> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn line(&mut self, text: impl std::fmt::Display) -> CalcResult<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.out
    }
}
