//! Bordered banners for messages that should stand out

use crate::loggers::SemanticLogger;
use crate::sink::Sink;

/// The three lines of a banner around `message`
///
/// ```text
/// /----\
/// | hi |
/// \----/
/// ```
pub fn banner_lines(message: &str) -> [String; 3] {
    let border = "-".repeat(message.chars().count() + 2);
    [
        format!("/{}\\", border),
        format!("| {} |", message),
        format!("\\{}/", border),
    ]
}

/// Emit a banner one line at a time through `logger`
pub fn important_with(mut logger: impl FnMut(&str), message: &str) {
    for line in banner_lines(message) {
        logger(&line);
    }
}

/// Emit a banner through a semantic logger on standard output
pub fn important(logger: SemanticLogger, message: &str) {
    important_with(|line| logger.line(line, &[]), message);
}

pub fn important_to(logger: SemanticLogger, sink: &dyn Sink, message: &str) {
    important_with(|line| logger.line_to(sink, line, &[]), message);
}
