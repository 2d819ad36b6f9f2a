//! Request summary - the request details every log line is built from

use axum::extract::{ConnectInfo, OriginalUri, Request};
use http::{Method, StatusCode, Version};
use std::net::SocketAddr;

/// Placeholder when the server was not started with connect info
pub const UNKNOWN_CLIENT: &str = "unknown";

/// What the observers report about a request
#[derive(Debug, Clone)]
pub struct RequestSummary {
    pub version: Version,
    pub method: Method,
    /// URI as received, before any nesting stripped a prefix
    pub uri: String,
    /// Client IP address
    pub client: String,
}

impl RequestSummary {
    pub fn from_request(request: &Request) -> Self {
        let uri = request
            .extensions()
            .get::<OriginalUri>()
            .map(|OriginalUri(uri)| uri.to_string())
            .unwrap_or_else(|| request.uri().to_string());

        let client = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_else(|| UNKNOWN_CLIENT.to_string());

        Self {
            version: request.version(),
            method: request.method().clone(),
            uri,
            client,
        }
    }

    /// `HTTP/1.1 GET /users?page=2 from 127.0.0.1`
    pub fn inbound_line(&self) -> String {
        format!(
            "{:?} {} {} from {}",
            self.version, self.method, self.uri, self.client
        )
    }

    /// `GET /users?page=2 from 127.0.0.1 -> 200`
    pub fn outbound_line(&self, status: StatusCode) -> String {
        format!(
            "{} {} from {} -> {}",
            self.method,
            self.uri,
            self.client,
            status.as_u16()
        )
    }
}
