//! Line-oriented prompting over any reader and writer.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// A line consisting solely of this token ends multi-line input.
pub const END_SENTINEL: &str = "end";

/// Reads one line, without its line terminator.
///
/// Returns `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(Some(buf))
}

/// Collects lines until one whose trimmed text is `end`, or end of input.
///
/// Lines are joined with `\n`; the result has no trailing newline. Lines
/// are otherwise kept verbatim, including surrounding whitespace.
pub fn read_until_sentinel<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut lines = Vec::new();
    while let Some(line) = read_line(input)? {
        if line.trim() == END_SENTINEL {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

/// Pairs an input and an output stream for an interactive session.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints a line.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Prints `question` without a newline and reads the trimmed answer.
    ///
    /// Returns `None` at end of input.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        Ok(read_line(&mut self.input)?.map(|s| s.trim().to_string()))
    }

    /// Reads multi-line text terminated by the `end` line.
    pub fn read_until_sentinel(&mut self) -> io::Result<String> {
        self.output.flush()?;
        read_until_sentinel(&mut self.input)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
