//! Where the session's answers come from
//!
//! The session logic never touches the console directly. It asks an
//! [`InputSource`] for the next token, so tests can feed scripted answers.

use std::io::BufRead;
use thiserror::Error;

/// **Why no token could be produced**
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InputError {
    #[error("input exhausted")]
    Exhausted,

    #[error("failed to read input: {0}")]
    Io(String),
}

/// **A source of whitespace-delimited answer tokens**
pub trait InputSource {
    /// Returns the next answer token.
    ///
    /// # Errors
    /// - No more input, `InputError::Exhausted`;
    /// - The underlying reader failed, `InputError::Io`.
    fn next_token(&mut self) -> Result<String, InputError>;
}

/// **Line-oriented input over any buffered reader**
///
/// Each answer is the first token of the next non-empty line;
/// the rest of that line is discarded. Empty lines are skipped.
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        LineSource { reader }
    }
}

impl<R: BufRead> InputSource for LineSource<R> {
    fn next_token(&mut self) -> Result<String, InputError> {
        let mut line = String::new();

        loop {
            line.clear();
            let read = self
                .reader
                .read_line(&mut line)
                .map_err(|err| InputError::Io(err.to_string()))?;

            if read == 0 {
                return Err(InputError::Exhausted);
            }

            if let Some(token) = line.split_whitespace().next() {
                return Ok(token.to_string());
            }
        }
    }
}
