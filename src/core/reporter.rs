//! Progress reporting for filesystem-mutating operations.
//!
//! The fixture materializer never prints on its own; it is handed a
//! [`Reporter`] and tells it about every step it takes.

use std::io::{self, Write};

pub trait Reporter {
    fn step(&mut self, message: &str);
}

/// Writes each step as one line on stderr.
#[derive(Debug, Default)]
pub struct StderrReporter;

impl StderrReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for StderrReporter {
    fn step(&mut self, message: &str) {
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        if let Err(e) = writeln!(handle, "{}", message) {
            if e.kind() != io::ErrorKind::BrokenPipe {
                eprintln!("IO error while writing: {}", e);
            }
        }
    }
}

/// Keeps every step in memory.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub steps: Vec<String>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for RecordingReporter {
    fn step(&mut self, message: &str) {
        self.steps.push(message.to_string());
    }
}

/// Discards everything.
#[derive(Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn step(&mut self, _message: &str) {}
}
