//! Demo server configuration, read from the environment

use anyhow::{bail, Context, Result};
use quill_core::{Sink, StderrSink, StdoutSink, TracingSink};
use std::net::SocketAddr;
use std::sync::Arc;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Where formatted lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Stdout,
    Stderr,
    Tracing,
}

impl SinkKind {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stdout" => Ok(Self::Stdout),
            "stderr" => Ok(Self::Stderr),
            "tracing" => Ok(Self::Tracing),
            other => bail!("unknown QUILL_SINK '{}' (expected stdout, stderr or tracing)", other),
        }
    }

    pub fn into_sink(self) -> Arc<dyn Sink> {
        match self {
            Self::Stdout => Arc::new(StdoutSink),
            Self::Stderr => Arc::new(StderrSink),
            Self::Tracing => Arc::new(TracingSink),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// `QUILL_ADDR`
    pub addr: SocketAddr,
    /// `QUILL_SINK`
    pub sink: SinkKind,
}

impl DemoConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw_addr = lookup("QUILL_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse()
            .with_context(|| format!("invalid QUILL_ADDR '{}'", raw_addr))?;

        let sink = match lookup("QUILL_SINK") {
            Some(value) => SinkKind::parse(&value)?,
            None => SinkKind::Stdout,
        };

        Ok(Self { addr, sink })
    }
}
