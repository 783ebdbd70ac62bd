//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{display_boundary_warning, display_error, display_status, Theme};

/// Sequential line prompts over any reader/writer pair.
///
/// Production code uses stdin/stdout; tests feed an in-memory buffer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process terminal
    pub fn stdio() -> Self {
        Prompter::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Prints `question` without a newline and blocks for one line of input.
    ///
    /// # Returns
    /// * `Ok(Some(String))` - The trimmed answer
    /// * `Ok(None)` - Empty answer or end of input
    /// * `Err` - If input error occurs
    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut input = String::new();
        let read = self.input.read_line(&mut input)?;
        let answer = input.trim();

        if read == 0 || answer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(answer.to_string()))
        }
    }

    /// Writes one line of output.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Gives back the underlying writer
    pub fn into_output(self) -> W {
        self.output
    }
}
