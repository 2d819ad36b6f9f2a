//! Formatter behaviour through the public API

use pretty_assertions::assert_eq;
use quill_core::{format, render, Color, LogError, LogStyle, Message, Styler};
use tests::capture::{plain_capture, without_timestamps};

#[derive(Debug)]
#[allow(dead_code)]
struct Failure {
    code: u16,
}

#[test]
fn test_strips_embedded_title_case_insensitively() {
    let sink = plain_capture();
    format(
        "Info",
        &LogStyle::default(),
        Some(&sink),
        &["info: build started".into()],
    )
    .unwrap();

    assert_eq!(
        without_timestamps(sink.lines()),
        vec![vec!["Info:".to_string(), "build started".to_string()]]
    );
}

#[test]
fn test_keeps_message_without_title_prefix() {
    let sink = plain_capture();
    format(
        "Info",
        &LogStyle::default(),
        Some(&sink),
        &["build: Info: started".into()],
    )
    .unwrap();

    assert_eq!(sink.last().unwrap()[2], "build: Info: started");
}

#[test]
fn test_structured_values_are_printed_as_debug() {
    let sink = plain_capture();
    let style = LogStyle::new()
        .with_title(Styler::new().color(Color::Red).bold())
        .with_message(Styler::new().color(Color::Red));

    format(
        "Error",
        &style,
        Some(&sink),
        &[
            Message::debug(&Failure { code: 500 }),
            Message::from(serde_json::json!({"retry": false})),
        ],
    )
    .unwrap();

    assert_eq!(
        without_timestamps(sink.lines()),
        vec![vec![
            "Error:".to_string(),
            "Failure { code: 500 }".to_string(),
            r#"{"retry":false}"#.to_string(),
        ]]
    );
}

#[test]
fn test_timestamp_token_ends_with_separator() {
    quill_core::set_colors(Some(false));
    let tokens = render("Event", &LogStyle::default(), &"tick".into(), &[]);
    assert!(tokens[0].ends_with(" |"));
    assert_eq!(tokens.len(), 3);
}

#[test]
fn test_empty_messages_are_rejected() {
    let sink = plain_capture();
    assert_eq!(
        format("Info", &LogStyle::default(), Some(&sink), &[]),
        Err(LogError::EmptyMessages)
    );
    assert!(sink.is_empty());
}
