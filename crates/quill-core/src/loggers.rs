//! Semantic logger table
//!
//! Each [`SemanticLogger`] names one row of a fixed table (title plus
//! styles). All of them dispatch through [`write_line`].

use colored::Color;

use crate::error::LogError;
use crate::formatter::{format, write_line};
use crate::message::Message;
use crate::sink::Sink;
use crate::style::{LogStyle, Styler};

/// One row of the logger table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoggerEntry {
    pub name: &'static str,
    pub title: &'static str,
    pub style: LogStyle,
}

/// Rows are indexed by `SemanticLogger as usize`; keep both in the same order.
static LOGGERS: [LoggerEntry; 12] = [
    LoggerEntry {
        name: "info",
        title: "Info",
        style: LogStyle::new().with_title(Styler::WHITE),
    },
    LoggerEntry {
        name: "verbose",
        title: "Verbose",
        style: LogStyle::new()
            .with_title(Styler::GRAY.italic())
            .with_message(Styler::GRAY.italic()),
    },
    LoggerEntry {
        name: "warn",
        title: "Warning",
        style: LogStyle::new()
            .with_title(Styler::new().color(Color::Yellow))
            .with_message(Styler::WHITE.italic()),
    },
    LoggerEntry {
        name: "error",
        title: "Error",
        style: LogStyle::new()
            .with_title(Styler::new().color(Color::Red).bold())
            .with_message(Styler::new().color(Color::Red)),
    },
    LoggerEntry {
        name: "setup",
        title: "Setup",
        style: LogStyle::DEFAULT,
    },
    LoggerEntry {
        name: "create",
        title: "Create",
        style: LogStyle::new().with_title(Styler::new().color(Color::Green)),
    },
    LoggerEntry {
        name: "notFound",
        title: "Not Found",
        style: LogStyle::new().with_title(Styler::new().color(Color::Red)),
    },
    LoggerEntry {
        name: "incomingRequest",
        title: "Incoming Request",
        style: LogStyle::new().with_title(Styler::new().color(Color::Magenta)),
    },
    LoggerEntry {
        name: "outgoingResponse",
        title: "Outgoing Response",
        style: LogStyle::new().with_title(Styler::new().color(Color::Cyan)),
    },
    LoggerEntry {
        name: "success",
        title: "Success",
        style: LogStyle::new().with_title(Styler::new().color(Color::Green)),
    },
    LoggerEntry {
        name: "failure",
        title: "Failure",
        style: LogStyle::new().with_title(Styler::new().color(Color::Red)),
    },
    LoggerEntry {
        name: "event",
        title: "Event",
        style: LogStyle::new().with_title(Styler::new().color(Color::Blue)),
    },
];

/// Pre-configured loggers with a fixed title and style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticLogger {
    Info,
    Verbose,
    Warn,
    Error,
    Setup,
    Create,
    NotFound,
    IncomingRequest,
    OutgoingResponse,
    Success,
    Failure,
    Event,
}

impl SemanticLogger {
    /// Every logger, in table order
    pub const ALL: [SemanticLogger; 12] = [
        Self::Info,
        Self::Verbose,
        Self::Warn,
        Self::Error,
        Self::Setup,
        Self::Create,
        Self::NotFound,
        Self::IncomingRequest,
        Self::OutgoingResponse,
        Self::Success,
        Self::Failure,
        Self::Event,
    ];

    pub fn entry(self) -> &'static LoggerEntry {
        &LOGGERS[self as usize]
    }

    /// Semantic name, e.g. `"notFound"`
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    pub fn title(self) -> &'static str {
        self.entry().title
    }

    pub fn style(self) -> &'static LogStyle {
        &self.entry().style
    }

    /// Look a logger up by its semantic name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|logger| logger.name() == name)
    }

    /// Write `messages` to standard output
    pub fn log(self, messages: &[Message]) -> Result<(), LogError> {
        format(self.title(), self.style(), None, messages)
    }

    /// Write `messages` to `sink`
    pub fn log_to(self, sink: &dyn Sink, messages: &[Message]) -> Result<(), LogError> {
        format(self.title(), self.style(), Some(sink), messages)
    }

    /// Write one line to standard output
    pub fn line(self, first: impl Into<Message>, rest: &[Message]) {
        write_line(self.title(), self.style(), None, &first.into(), rest);
    }

    /// Write one line to `sink`
    pub fn line_to(self, sink: &dyn Sink, first: impl Into<Message>, rest: &[Message]) {
        write_line(self.title(), self.style(), Some(sink), &first.into(), rest);
    }
}

/// Write a line through a [`SemanticLogger`].
///
/// At least one message is required. Arguments are converted with
/// `Message::from`, so pass `Message::debug(&value)` for structured values.
///
/// ```no_run
/// use quill_core::{log, Message, SemanticLogger};
///
/// log!(SemanticLogger::Warn, "disk almost full", Message::debug(&[12, 3]));
/// ```
#[macro_export]
macro_rules! log {
    (to: $sink:expr, $logger:expr, $first:expr $(, $rest:expr)* $(,)?) => {
        $logger.line_to($sink, $first, &[$($crate::Message::from($rest)),*])
    };
    ($logger:expr, $first:expr $(, $rest:expr)* $(,)?) => {
        $logger.line($first, &[$($crate::Message::from($rest)),*])
    };
}
