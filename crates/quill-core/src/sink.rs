//! Output sinks
//!
//! A sink receives the styled tokens of one log line as separate values and
//! decides how to write them. The default is [`StdoutSink`].

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Destination for formatted log lines
pub trait Sink: Send + Sync {
    fn write(&self, tokens: &[String]);
}

impl<F> Sink for F
where
    F: Fn(&[String]) + Send + Sync,
{
    fn write(&self, tokens: &[String]) {
        self(tokens)
    }
}

/// Writes tokens separated by spaces to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write(&self, tokens: &[String]) {
        write_joined(io::stdout().lock(), tokens);
    }
}

/// Writes tokens separated by spaces to standard error
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write(&self, tokens: &[String]) {
        write_joined(io::stderr().lock(), tokens);
    }
}

fn write_joined(mut target: impl Write, tokens: &[String]) {
    let _ = writeln!(target, "{}", tokens.join(" "));
}

/// Forwards each line to `tracing` as an INFO event with target `quill`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn write(&self, tokens: &[String]) {
        tracing::info!(target: "quill", "{}", tokens.join(" "));
    }
}

/// Keeps every line in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    lines: Arc<Mutex<Vec<Vec<String>>>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured lines, oldest first
    pub fn lines(&self) -> Vec<Vec<String>> {
        self.lines.lock().clone()
    }

    /// Remove and return all captured lines
    pub fn take(&self) -> Vec<Vec<String>> {
        std::mem::take(&mut *self.lines.lock())
    }

    pub fn last(&self) -> Option<Vec<String>> {
        self.lines.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl Sink for CaptureSink {
    fn write(&self, tokens: &[String]) {
        self.lines.lock().push(tokens.to_vec());
    }
}
