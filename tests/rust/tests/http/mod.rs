//! HTTP observer integration tests
//!
//! Drives routers wrapped by `HttpLogging` with `tower::ServiceExt::oneshot`
//! and inspects the captured log lines.
