//! HTTP request/response observers
//!
//! Each observer logs through a semantic logger and always continues the
//! pipeline. They share an [`HttpLogging`] state that decides where lines go.

use axum::{
    body::Body,
    extract::{OriginalUri, Request, State},
    middleware::{from_fn_with_state, Next},
    response::{IntoResponse, Response},
    Router,
};
use http::{header::CONTENT_TYPE, StatusCode};
use http_body::Body as HttpBody;
use http_body_util::BodyExt;
use quill_core::{Message, SemanticLogger, Sink};
use std::sync::Arc;
use tracing::{info_span, warn, Instrument};

use crate::body::{can_buffer, format_body, is_streaming, unbuffered_marker};
use crate::context::RequestSummary;
use crate::error::ReportedError;

/// Shared state of the observers
#[derive(Clone, Default)]
pub struct HttpLogging {
    sink: Option<Arc<dyn Sink>>,
}

impl HttpLogging {
    /// Log to standard output
    pub fn new() -> Self {
        Self::default()
    }

    /// Log to `sink` instead of standard output
    pub fn with_sink(sink: impl Sink + 'static) -> Self {
        Self {
            sink: Some(Arc::new(sink)),
        }
    }

    pub fn with_shared_sink(sink: Arc<dyn Sink>) -> Self {
        Self { sink: Some(sink) }
    }

    pub fn sink(&self) -> Option<&dyn Sink> {
        self.sink.as_deref()
    }

    fn line(&self, logger: SemanticLogger, first: impl Into<Message>, rest: &[Message]) {
        match self.sink() {
            Some(sink) => logger.line_to(sink, first, rest),
            None => logger.line(first, rest),
        }
    }

    /// Install every observer on `router`.
    ///
    /// `inbound_requests` is outermost, then `outbound_responses`, then
    /// `errored`; unmatched paths go to `not_found`.
    pub fn apply<S>(self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let fallback = self.clone();
        router
            .fallback(move |uri: OriginalUri| {
                let logging = fallback.clone();
                async move { not_found(State(logging), uri).await }
            })
            .layer(from_fn_with_state(self.clone(), errored))
            .layer(from_fn_with_state(self.clone(), outbound_responses))
            .layer(from_fn_with_state(self, inbound_requests))
    }
}

impl std::fmt::Debug for HttpLogging {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpLogging")
            .field("custom_sink", &self.sink.is_some())
            .finish()
    }
}

/// Log one line per inbound request, then continue
pub async fn inbound_requests(
    State(logging): State<HttpLogging>,
    request: Request,
    next: Next,
) -> Response {
    let summary = RequestSummary::from_request(&request);
    logging.line(SemanticLogger::IncomingRequest, summary.inbound_line(), &[]);

    let span = info_span!("request", method = %summary.method, uri = %summary.uri);
    next.run(request).instrument(span).await
}

/// Log the response produced for this request.
///
/// Successful responses (< 400) with a body also log the body. Only bodies
/// of known, bounded length are buffered, and they are handed back
/// unchanged. Streamed or oversized bodies pass through untouched and are
/// logged as a marker.
pub async fn outbound_responses(
    State(logging): State<HttpLogging>,
    request: Request,
    next: Next,
) -> Response {
    let summary = RequestSummary::from_request(&request);
    let response = next.run(request).await;
    let status = response.status();
    let status_line = summary.outbound_line(status);

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    if status.as_u16() >= 400 || is_streaming(content_type) {
        logging.line(SemanticLogger::OutgoingResponse, status_line, &[]);
        return response;
    }

    let exact_len = HttpBody::size_hint(response.body()).exact();
    if !can_buffer(exact_len) {
        logging.line(
            SemanticLogger::OutgoingResponse,
            status_line,
            &[Message::Text(unbuffered_marker(exact_len))],
        );
        return response;
    }

    let (parts, body) = response.into_parts();
    let body_bytes = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            warn!(uri = %summary.uri, "Failed to read response body: {}", e);
            logging.line(SemanticLogger::OutgoingResponse, status_line, &[]);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    if body_bytes.is_empty() {
        logging.line(SemanticLogger::OutgoingResponse, status_line, &[]);
    } else {
        logging.line(
            SemanticLogger::OutgoingResponse,
            status_line,
            &[Message::Text(format_body(&body_bytes))],
        );
    }

    Response::from_parts(parts, Body::from(body_bytes))
}

/// Log errors reported by handlers through `HttpError`, then pass the
/// response on unchanged
pub async fn errored(State(logging): State<HttpLogging>, request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    if let Some(ReportedError(error)) = response.extensions().get::<ReportedError>() {
        logging.line(SemanticLogger::Error, format!("{:?}", error), &[]);
    }
    response
}

/// Fallback handler: log the unmatched path and answer 404
pub async fn not_found(
    State(logging): State<HttpLogging>,
    OriginalUri(uri): OriginalUri,
) -> Response {
    logging.line(SemanticLogger::NotFound, uri.path(), &[]);
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}
