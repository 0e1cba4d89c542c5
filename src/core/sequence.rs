//! Ordered substring matching over lines of text.
//!
//! Tokens are consumed strictly front to back: a line can only satisfy the
//! token currently at the front of the queue, and earlier lines are never
//! looked at again.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Scanning,
    Done,
}

/// The most recent token matched and the line that matched it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastMatch {
    pub token: String,
    pub line: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Matched,
    Unmatched {
        missing: String,
        last_match: Option<LastMatch>,
    },
}

impl Outcome {
    pub fn is_matched(&self) -> bool {
        matches!(self, Outcome::Matched)
    }

    /// Diagnostic text for a failed match, `None` on success.
    pub fn report(&self) -> Option<String> {
        match self {
            Outcome::Matched => None,
            Outcome::Unmatched {
                missing,
                last_match: None,
            } => Some(format!("No line containing: \"{}\"", missing)),
            Outcome::Unmatched {
                missing,
                last_match: Some(last),
            } => Some(format!(
                "No line containing: \"{}\"\nAfter match of \"{}\" on line:\n{}",
                missing, last.token, last.line
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SequenceChecker {
    pending: VecDeque<String>,
    last_match: Option<LastMatch>,
}

impl SequenceChecker {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pending: tokens.into_iter().map(Into::into).collect(),
            last_match: None,
        }
    }

    pub fn state(&self) -> State {
        if self.pending.is_empty() {
            State::Done
        } else {
            State::Scanning
        }
    }

    /// Offer one line. At most one token is consumed per line.
    pub fn feed(&mut self, line: &str) -> State {
        if let Some(front) = self.pending.front() {
            if line.contains(front.as_str()) {
                if let Some(token) = self.pending.pop_front() {
                    self.last_match = Some(LastMatch {
                        token,
                        line: line.to_string(),
                    });
                }
            }
        }
        self.state()
    }

    /// Outcome given that no more lines will be fed.
    pub fn finish(self) -> Outcome {
        let SequenceChecker {
            mut pending,
            last_match,
        } = self;
        match pending.pop_front() {
            None => Outcome::Matched,
            Some(missing) => Outcome::Unmatched {
                missing,
                last_match,
            },
        }
    }

    /// Feed lines from `reader` until every token matched or input ends.
    ///
    /// Line terminators are stripped; invalid UTF-8 is decoded lossily.
    pub fn check<R: BufRead>(mut self, mut reader: R) -> Result<Outcome> {
        let mut buf = Vec::new();
        while self.state() == State::Scanning {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| Error::internal_io(e.to_string(), Some("read stdin".to_string())))?;
            if read == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            self.feed(line.trim_end_matches(&['\n', '\r'][..]));
        }
        Ok(self.finish())
    }
}
