//! Line formatter
//!
//! Every log line is made of separate tokens handed to a [`Sink`]:
//!
//! ```text
//! 10/19/2026, 3:04:05 PM |  Warning:  disk almost full  {"free":12}
//! ^ gray timestamp         ^ title    ^ one token per message
//! ```

use chrono::Local;

use crate::error::LogError;
use crate::message::Message;
use crate::sink::{Sink, StdoutSink};
use crate::style::{LogStyle, Styler};

/// Local date-time layout of the timestamp token
pub const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Current local time in [`TIMESTAMP_FORMAT`]
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Drop a leading `"<title>: "` (any case) from `text`.
///
/// Callers often embed the title themselves; printing it twice adds noise.
pub fn strip_title<'a>(title: &str, text: &'a str) -> &'a str {
    let prefix = format!("{}: ", title);
    match text.get(..prefix.len()) {
        Some(head) if head.to_lowercase() == prefix.to_lowercase() => &text[prefix.len()..],
        _ => text,
    }
}

/// Build the styled tokens of one line without writing them
pub fn render(title: &str, style: &LogStyle, first: &Message, rest: &[Message]) -> Vec<String> {
    let message_styler = style.message_styler();

    let lead = match first {
        Message::Text(text) => strip_title(title, text),
        Message::Inspected(repr) => repr.as_str(),
    };

    let mut tokens = Vec::with_capacity(rest.len() + 3);
    tokens.push(Styler::GRAY.apply(&format!("{} |", timestamp())));
    tokens.push(style.title_styler().apply(&format!("{}:", title)));
    tokens.push(message_styler.apply(lead));
    tokens.extend(rest.iter().map(|message| message_styler.apply(message.as_str())));
    tokens
}

/// Format one line and hand it to `sink` (standard output when `None`)
pub fn write_line(
    title: &str,
    style: &LogStyle,
    sink: Option<&dyn Sink>,
    first: &Message,
    rest: &[Message],
) {
    let tokens = render(title, style, first, rest);
    match sink {
        Some(sink) => sink.write(&tokens),
        None => StdoutSink.write(&tokens),
    }
}

/// Format `messages` under `title` and write them to `sink`.
///
/// Fails with [`LogError::EmptyMessages`] when there is nothing to print.
pub fn format(
    title: &str,
    style: &LogStyle,
    sink: Option<&dyn Sink>,
    messages: &[Message],
) -> Result<(), LogError> {
    let (first, rest) = messages.split_first().ok_or(LogError::EmptyMessages)?;
    write_line(title, style, sink, first, rest);
    Ok(())
}
