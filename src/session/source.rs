//! Sources of point-winner signals.

use crate::session::error::SessionError;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Supplies one raw signal per call.
///
/// Returns `Ok(None)` once no further input will arrive.
pub trait PointSource {
    fn next_signal(&mut self) -> Result<Option<String>, SessionError>;
}

/// Line-oriented console input with a prompt.
pub struct ConsoleSource<R: BufRead, W: Write> {
    reader: R,
    prompt_to: W,
    prompt: String,
}

impl<R: BufRead, W: Write> ConsoleSource<R, W> {
    pub fn new(reader: R, prompt_to: W) -> Self {
        Self {
            reader,
            prompt_to,
            prompt: "Point winner (1 or 2): ".to_string(),
        }
    }

    /// Replace the default prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}

impl<R: BufRead, W: Write> PointSource for ConsoleSource<R, W> {
    fn next_signal(&mut self) -> Result<Option<String>, SessionError> {
        self.prompt_to.write_all(self.prompt.as_bytes())?;
        self.prompt_to.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Pre-scripted signals, handy for replays and tests.
///
/// # Example
///
/// ```rust
/// use deuce::session::{PointSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new(["1", "x"]);
/// assert_eq!(source.next_signal().unwrap().as_deref(), Some("1"));
/// assert_eq!(source.next_signal().unwrap().as_deref(), Some("x"));
/// assert_eq!(source.next_signal().unwrap(), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    signals: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, T>(signals: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            signals: signals.into_iter().map(Into::into).collect(),
        }
    }
}

impl PointSource for ScriptedSource {
    fn next_signal(&mut self) -> Result<Option<String>, SessionError> {
        Ok(self.signals.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn console_trims_and_prompts() {
        let mut prompts = Vec::new();
        let mut source = ConsoleSource::new(Cursor::new("  2 \r\n1\n"), &mut prompts);

        assert_eq!(source.next_signal().unwrap().as_deref(), Some("2"));
        assert_eq!(source.next_signal().unwrap().as_deref(), Some("1"));
        assert_eq!(source.next_signal().unwrap(), None);

        drop(source);
        assert_eq!(
            String::from_utf8(prompts).unwrap(),
            "Point winner (1 or 2): ".repeat(3)
        );
    }

    #[test]
    fn custom_prompt_is_used() {
        let mut prompts = Vec::new();
        let mut source = ConsoleSource::new(Cursor::new("1\n"), &mut prompts).with_prompt("> ");

        source.next_signal().unwrap();

        drop(source);
        assert_eq!(prompts, b"> ");
    }

    #[test]
    fn blank_line_is_an_empty_signal_not_eof() {
        let mut source = ConsoleSource::new(Cursor::new("\n"), std::io::sink());
        assert_eq!(source.next_signal().unwrap().as_deref(), Some(""));
    }
}
