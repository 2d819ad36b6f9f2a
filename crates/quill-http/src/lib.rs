//! # Quill HTTP
//!
//! Request/response logging middleware for axum, built on the semantic
//! loggers of `quill-core`:
//!
//! - `inbound_requests` - one `Incoming Request` line per request
//! - `outbound_responses` - one `Outgoing Response` line per response, with the body on success
//! - `errored` - logs errors reported by handlers through [`HttpError`]
//! - `not_found` - fallback handler logging unmatched paths
//!
//! ```no_run
//! use axum::{routing::get, Router};
//! use quill_http::HttpLogging;
//!
//! let app: Router = HttpLogging::new().apply(Router::new().route("/", get(|| async { "hi" })));
//! ```

pub mod body;
pub mod context;
pub mod error;
pub mod middleware;

pub use body::format_body;
pub use context::RequestSummary;
pub use error::{HttpError, ReportedError};
pub use middleware::{errored, inbound_requests, not_found, outbound_responses, HttpLogging};
