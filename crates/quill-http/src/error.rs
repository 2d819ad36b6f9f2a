//! Handler errors that the `errored` middleware reports
//!
//! Handlers return `Result<_, HttpError>`. The error becomes a response with
//! the chosen status and carries a [`ReportedError`] extension, which the
//! `errored` middleware logs before passing the response on.

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use std::sync::Arc;

/// Error attached to a response for the `errored` middleware
#[derive(Debug, Clone)]
pub struct ReportedError(pub Arc<anyhow::Error>);

/// Error type for axum handlers
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    error: anyhow::Error,
}

impl HttpError {
    pub fn new(status: StatusCode, error: impl Into<anyhow::Error>) -> Self {
        Self {
            status,
            error: error.into(),
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn error(&self) -> &anyhow::Error {
        &self.error
    }
}

impl<E> From<E> for HttpError
where
    E: Into<anyhow::Error>,
{
    fn from(error: E) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, error)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let reason = self.status.canonical_reason().unwrap_or("Error");
        let mut response = (self.status, reason).into_response();
        response
            .extensions_mut()
            .insert(ReportedError(Arc::new(self.error)));
        response
    }
}
