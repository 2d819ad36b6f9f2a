//! Response body rendering for log lines

/// Maximum body size to render (1MB)
const MAX_BODY_LOG_SIZE: usize = 1024 * 1024;

/// Text longer than this is truncated
const MAX_TEXT_CHARS: usize = 200;

/// Content types that are streamed and must never be buffered
const STREAMING_CONTENT_TYPES: &[&str] = &["text/event-stream"];

/// Check if a response with this content type should be passed through untouched
pub fn is_streaming(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| STREAMING_CONTENT_TYPES.iter().any(|s| ct.starts_with(s)))
}

/// Whether a body of this exact length may be buffered for logging.
///
/// Bodies of unknown length are streamed and pass through untouched.
pub fn can_buffer(exact_len: Option<u64>) -> bool {
    exact_len.is_some_and(|len| len <= MAX_BODY_LOG_SIZE as u64)
}

/// Marker logged in place of a body that was not buffered
pub fn unbuffered_marker(exact_len: Option<u64>) -> String {
    match exact_len {
        Some(len) => format!("[{} bytes]", len),
        None => "[streamed]".to_string(),
    }
}

/// Format body bytes as a compact, printable string
pub fn format_body(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "[empty]".to_string();
    }

    if bytes.len() > MAX_BODY_LOG_SIZE {
        return format!("[{} bytes]", bytes.len());
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => {
            // Compact JSON
            if let Ok(json) = serde_json::from_str::<serde_json::Value>(text) {
                return json.to_string();
            }
            if text.chars().count() > MAX_TEXT_CHARS {
                let truncated: String = text.chars().take(MAX_TEXT_CHARS).collect();
                format!("{}...", truncated)
            } else {
                text.to_string()
            }
        }
        Err(_) => format!("[binary: {} bytes]", bytes.len()),
    }
}
