//! Outcome helpers on futures yielding `Result`

use pretty_assertions::assert_eq;
use quill_core::{attempting_to_with, log_on_error_to, log_on_success_to, SemanticLogger};
use std::io;
use tests::capture::plain_capture;

#[tokio::test]
async fn test_log_error_keeps_rejection() {
    let sink = plain_capture();

    let outcome = log_on_error_to(
        async { Err::<(), _>(io::Error::new(io::ErrorKind::NotFound, "config.toml")) },
        SemanticLogger::Error,
        &sink,
        "msg",
    )
    .await;

    let error = outcome.unwrap_err();
    assert_eq!(error.kind(), io::ErrorKind::NotFound);

    let line = sink.last().unwrap();
    assert!(line[2].starts_with("msg\nError: "));
    assert!(line[2].contains("config.toml"));
}

#[tokio::test]
async fn test_success_logging_passes_value_through() {
    let sink = plain_capture();

    let value = log_on_success_to(
        async { Ok::<_, io::Error>(vec![1, 2, 3]) },
        SemanticLogger::Success,
        &sink,
        "Success: loaded",
    )
    .await
    .unwrap();

    assert_eq!(value, vec![1, 2, 3]);
    assert_eq!(sink.last().unwrap()[2], "loaded");
}

#[tokio::test]
async fn test_attempts_report_success_and_failure() {
    let sink = plain_capture();

    let _ = attempting_to_with(async { Ok::<_, io::Error>(()) }, &sink, "migrate").await;
    let failed = attempting_to_with(
        async { Err::<(), _>(io::Error::other("locked")) },
        &sink,
        "migrate",
    )
    .await;

    assert!(failed.is_err());
    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0][1], "Success:");
    assert_eq!(lines[1][1], "Failure:");
    assert!(lines[1][2].starts_with("migrate\nError: "));
    assert!(lines[1][2].contains("locked"));
}
