//! # Quill Core Library
//!
//! Styled console output with a fixed table of semantic loggers.
//!
//! ## Modules
//!
//! - `style` - Text stylers and title/message style pairs
//! - `message` - Message values (plain text or debug representations)
//! - `sink` - Output destinations for formatted lines
//! - `formatter` - Timestamped, styled line formatting
//! - `loggers` - Semantic logger table (info, warn, error, ...)
//! - `banner` - Bordered three-line banners
//! - `outcome` - Logging helpers for futures yielding `Result`

pub mod banner;
pub mod error;
pub mod formatter;
pub mod loggers;
pub mod message;
pub mod outcome;
pub mod sink;
pub mod style;

pub use banner::{banner_lines, important, important_to, important_with};
pub use error::LogError;
pub use formatter::{format, render, strip_title, timestamp, write_line};
pub use loggers::{LoggerEntry, SemanticLogger};
pub use message::Message;
pub use outcome::{
    attempting_to, attempting_to_with, log_on_error, log_on_error_to, log_on_success,
    log_on_success_to, OutcomeLogExt,
};
pub use sink::{CaptureSink, Sink, StderrSink, StdoutSink, TracingSink};
pub use style::{set_colors, LogStyle, Styler};

/// Re-export of the palette used by [`Styler`]
pub use colored::Color;
