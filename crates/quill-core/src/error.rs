//! Error types for the formatter

use thiserror::Error;

/// Errors returned by the fallible formatting entry points
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogError {
    /// A log line needs at least one message to print
    #[error("at least one message is required to write a log line")]
    EmptyMessages,
}
