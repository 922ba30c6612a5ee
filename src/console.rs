//! Line-oriented prompt/response console
//!
//! Generic over the input and output streams so a session can be driven by
//! the real terminal or by canned input in tests.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::{GenError, Result};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a prompt (no newline) and read one line of input
    ///
    /// The trailing line ending is removed; other whitespace is kept.
    /// Returns [`GenError::InputClosed`] at end-of-file.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        if !prompt.is_empty() {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;
        }
        self.read_line()
    }

    /// Read one line without printing anything first
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GenError::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Ask a yes/no question; only `yes` or `y` count as yes
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(&format!("{} (yes/no): ", question))?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "yes" | "y"))
    }

    /// Print a line
    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
