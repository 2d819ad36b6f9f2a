//! Message values
//!
//! Text passes through the formatter as-is. Anything else is converted to
//! its debug representation up front so the formatter only handles strings.

use std::fmt;

/// One message argument of a log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Plain text, eligible for title de-duplication
    Text(String),
    /// Debug representation of a structured value
    Inspected(String),
}

impl Message {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Capture the `{:?}` representation of any value
    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Self::Inspected(format!("{:?}", value))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Inspected(repr) => repr,
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Message {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<serde_json::Value> for Message {
    fn from(value: serde_json::Value) -> Self {
        Self::Inspected(value.to_string())
    }
}

impl From<&serde_json::Value> for Message {
    fn from(value: &serde_json::Value) -> Self {
        Self::Inspected(value.to_string())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
