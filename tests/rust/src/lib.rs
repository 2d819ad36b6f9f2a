//! Shared test utilities for Quill integration tests.

pub use quill_core::{CaptureSink, Message, SemanticLogger};

/// Log capture helpers
pub mod capture {
    use quill_core::{set_colors, CaptureSink};

    /// A fresh capture sink with colors disabled so tokens compare as plain text
    pub fn plain_capture() -> CaptureSink {
        set_colors(Some(false));
        CaptureSink::new()
    }

    /// Drop the timestamp token of every captured line
    pub fn without_timestamps(lines: Vec<Vec<String>>) -> Vec<Vec<String>> {
        lines
            .into_iter()
            .map(|line| line.into_iter().skip(1).collect())
            .collect()
    }
}

/// Router helpers
pub mod http {
    use axum::{body::Body, extract::Request, http::StatusCode, Router};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    /// Send one request through `app` and return the status and body text
    pub async fn send(app: Router, request: Request) -> (StatusCode, String) {
        let response = app.oneshot(request).await.expect("router is infallible");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body collects")
            .to_bytes();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn get(uri: &str) -> Request {
        axum::http::Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request")
    }
}
