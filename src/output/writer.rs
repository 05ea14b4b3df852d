//! Output abstraction layer
//!
//! Diagnostics and results go through [`OutputWriter`] so the command layer
//! does not care whether it prints to a terminal or records into a buffer.

use colored::Colorize;
use std::sync::{Mutex, PoisonError};

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use nodesel::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new(false);
/// output.write("Data:Subdata");
/// output.warning("node 'a:b' contains the delimiter");
/// output.error("Malformed forest");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a result line (never suppressed)
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes to stdout/stderr
///
/// Warnings and errors go to stderr. In quiet mode only results and
/// errors are printed.
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "⚠️".yellow(), message);
        }
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.dimmed());
        }
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Normal,
    Error,
    Success,
    Warning,
    Info,
}

/// Writer that records every message in memory
///
/// Used by embedding hosts that show messages themselves, and by tests.
#[derive(Default)]
pub struct BufferWriter {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl BufferWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded messages, oldest first
    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Recorded messages of one level
    #[must_use]
    pub fn messages_at(&self, level: MessageLevel) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }

    pub fn clear(&self) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn add_message(&self, level: MessageLevel, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((level, message.to_string()));
    }
}

impl OutputWriter for BufferWriter {
    fn write(&self, message: &str) {
        self.add_message(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.add_message(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.add_message(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.add_message(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.add_message(MessageLevel::Info, message);
    }
}
