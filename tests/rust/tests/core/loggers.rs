//! Semantic logger table

use pretty_assertions::assert_eq;
use quill_core::{log, Message, SemanticLogger};
use tests::capture::{plain_capture, without_timestamps};

#[test]
fn test_every_logger_prints_its_title() {
    let sink = plain_capture();
    for logger in SemanticLogger::ALL {
        logger.line_to(&sink, "payload", &[]);
    }

    let titles: Vec<String> = without_timestamps(sink.lines())
        .into_iter()
        .map(|line| line[0].clone())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Info:",
            "Verbose:",
            "Warning:",
            "Error:",
            "Setup:",
            "Create:",
            "Not Found:",
            "Incoming Request:",
            "Outgoing Response:",
            "Success:",
            "Failure:",
            "Event:",
        ]
    );
}

#[test]
fn test_loggers_strip_their_own_title() {
    let sink = plain_capture();
    SemanticLogger::Warn.line_to(&sink, "WARNING: low disk", &[]);
    SemanticLogger::NotFound.line_to(&sink, "Not found: /missing", &[]);

    assert_eq!(
        without_timestamps(sink.lines()),
        vec![
            vec!["Warning:".to_string(), "low disk".to_string()],
            vec!["Not Found:".to_string(), "/missing".to_string()],
        ]
    );
}

#[test]
fn test_macro_sends_every_argument_as_a_token() {
    let sink = plain_capture();
    log!(
        to: &sink,
        SemanticLogger::Create,
        "user",
        String::from("alice"),
        Message::debug(&Some(42)),
    );

    assert_eq!(
        without_timestamps(sink.lines()),
        vec![vec![
            "Create:".to_string(),
            "user".to_string(),
            "alice".to_string(),
            "Some(42)".to_string(),
        ]]
    );
}

#[test]
fn test_names_round_trip() {
    assert_eq!(
        SemanticLogger::from_name("outgoingResponse"),
        Some(SemanticLogger::OutgoingResponse)
    );
    assert_eq!(SemanticLogger::from_name("Info"), None);
}
