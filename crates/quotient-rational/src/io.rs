//! Interactive text input and output.
//!
//! [`Rational::read_from`] prompts for and reads two whitespace-delimited
//! integers, numerator first. [`Rational::write_to`] writes the
//! [`Display`](std::fmt::Display) form.

use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::{Rational, RationalError};

impl Rational {
    /// Reads a numerator and then a denominator from `input`, writing a
    /// prompt to `prompt` before each.
    ///
    /// Values are assigned through [`Rational::set_numerator`] and
    /// [`Rational::set_denominator`] as soon as each is read, so a failure
    /// on the second integer leaves the new numerator in place. Bytes after
    /// the second integer are left unread.
    ///
    /// # Errors
    ///
    /// Returns an error if either stream fails, a token is not an `i64`, or
    /// the input ends early.
    ///
    /// # Panics
    ///
    /// Panics if the denominator read is zero.
    pub fn read_from<R, W>(&mut self, input: &mut R, prompt: &mut W) -> Result<(), RationalError>
    where
        R: BufRead + ?Sized,
        W: Write + ?Sized,
    {
        write!(prompt, "numerator? ")?;
        prompt.flush()?;
        let numerator = next_integer(input)?;
        self.set_numerator(numerator);

        write!(prompt, "\ndenominator? ")?;
        prompt.flush()?;
        let denominator = next_integer(input)?;
        self.set_denominator(denominator);

        writeln!(prompt)?;
        debug!(
            numerator = self.numerator,
            denominator = self.denominator,
            "read rational"
        );
        Ok(())
    }

    /// Writes the display form to `sink`.
    ///
    /// # Errors
    ///
    /// Returns any error from the sink.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> std::io::Result<()> {
        write!(sink, "{self}")
    }
}

fn next_integer<R: BufRead + ?Sized>(input: &mut R) -> Result<i64, RationalError> {
    let token = next_token(input)?.ok_or(RationalError::UnexpectedEof)?;
    trace!(token = %token, "read token");
    token
        .parse()
        .map_err(|source| RationalError::Parse { token, source })
}

/// Skips leading whitespace and returns the next run of non-whitespace bytes,
/// or `None` at end of input. The delimiter after the token is not consumed.
fn next_token<R: BufRead + ?Sized>(input: &mut R) -> Result<Option<String>, RationalError> {
    let mut token = Vec::new();

    loop {
        let buf = input.fill_buf()?;
        if buf.is_empty() {
            break;
        }

        let mut used = 0;
        let mut done = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    done = true;
                    break;
                }
            } else {
                token.push(byte);
            }
            used += 1;
        }

        input.consume(used);
        if done {
            break;
        }
    }

    if token.is_empty() {
        Ok(None)
    } else {
        Ok(Some(String::from_utf8_lossy(&token).into_owned()))
    }
}
