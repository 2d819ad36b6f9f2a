//! Logging helpers for asynchronous results
//!
//! Wrap any future yielding `Result<T, E>` to log its outcome. The outcome
//! itself is always returned unchanged: errors are logged, never swallowed.
//!
//! ```no_run
//! use quill_core::{OutcomeLogExt, SemanticLogger};
//!
//! # async fn load() -> Result<u32, std::io::Error> { Ok(1) }
//! # async fn run() -> Result<u32, std::io::Error> {
//! let value = load()
//!     .log(SemanticLogger::Info, "config loaded")
//!     .log_error(SemanticLogger::Error, "could not load config")
//!     .await?;
//! # Ok(value)
//! # }
//! ```

use futures::future::{BoxFuture, FutureExt};
use std::fmt::Debug;
use std::future::Future;

use crate::loggers::SemanticLogger;
use crate::sink::Sink;

fn error_line<E: Debug>(message: &str, error: &E) -> String {
    format!("{}\nError: {:?}", message, error)
}

fn emit(logger: SemanticLogger, sink: Option<&dyn Sink>, line: String) {
    match sink {
        Some(sink) => logger.line_to(sink, line, &[]),
        None => logger.line(line, &[]),
    }
}

/// Log `message` through `logger` if `future` succeeds
pub async fn log_on_success<F, T, E>(
    future: F,
    logger: SemanticLogger,
    message: impl Into<String>,
) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    log_on_success_inner(future, logger, None, message.into()).await
}

pub async fn log_on_success_to<F, T, E>(
    future: F,
    logger: SemanticLogger,
    sink: &dyn Sink,
    message: impl Into<String>,
) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    log_on_success_inner(future, logger, Some(sink), message.into()).await
}

async fn log_on_success_inner<F, T, E>(
    future: F,
    logger: SemanticLogger,
    sink: Option<&dyn Sink>,
    message: String,
) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    let outcome = future.await;
    if outcome.is_ok() {
        emit(logger, sink, message);
    }
    outcome
}

/// Log `message` plus the error's debug representation if `future` fails
pub async fn log_on_error<F, T, E>(
    future: F,
    logger: SemanticLogger,
    message: impl Into<String>,
) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: Debug,
{
    log_on_error_inner(future, logger, None, message.into()).await
}

pub async fn log_on_error_to<F, T, E>(
    future: F,
    logger: SemanticLogger,
    sink: &dyn Sink,
    message: impl Into<String>,
) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: Debug,
{
    log_on_error_inner(future, logger, Some(sink), message.into()).await
}

async fn log_on_error_inner<F, T, E>(
    future: F,
    logger: SemanticLogger,
    sink: Option<&dyn Sink>,
    message: String,
) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: Debug,
{
    let outcome = future.await;
    if let Err(error) = &outcome {
        emit(logger, sink, error_line(&message, error));
    }
    outcome
}

/// Report `action` as a success or a failure depending on the outcome
pub async fn attempting_to<F, T, E>(future: F, action: impl Into<String>) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: Debug,
{
    attempting_to_inner(future, None, action.into()).await
}

pub async fn attempting_to_with<F, T, E>(
    future: F,
    sink: &dyn Sink,
    action: impl Into<String>,
) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: Debug,
{
    attempting_to_inner(future, Some(sink), action.into()).await
}

async fn attempting_to_inner<F, T, E>(
    future: F,
    sink: Option<&dyn Sink>,
    action: String,
) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: Debug,
{
    let outcome = future.await;
    match &outcome {
        Ok(_) => emit(SemanticLogger::Success, sink, action),
        Err(error) => emit(SemanticLogger::Failure, sink, error_line(&action, error)),
    }
    outcome
}

/// Method syntax for the outcome helpers, available on every
/// `Future<Output = Result<T, E>>` once the trait is in scope.
pub trait OutcomeLogExt<T, E>: Future<Output = Result<T, E>> + Sized {
    fn log<'a>(self, logger: SemanticLogger, message: impl Into<String>) -> BoxFuture<'a, Result<T, E>>
    where
        Self: Send + 'a,
        T: 'a,
        E: 'a,
    {
        log_on_success(self, logger, message.into()).boxed()
    }

    fn log_error<'a>(
        self,
        logger: SemanticLogger,
        message: impl Into<String>,
    ) -> BoxFuture<'a, Result<T, E>>
    where
        Self: Send + 'a,
        T: 'a,
        E: Debug + 'a,
    {
        log_on_error(self, logger, message.into()).boxed()
    }

    fn is_attempting_to<'a>(self, action: impl Into<String>) -> BoxFuture<'a, Result<T, E>>
    where
        Self: Send + 'a,
        T: 'a,
        E: Debug + 'a,
    {
        attempting_to(self, action.into()).boxed()
    }

    fn log_to<'a>(
        self,
        logger: SemanticLogger,
        sink: &'a dyn Sink,
        message: impl Into<String>,
    ) -> BoxFuture<'a, Result<T, E>>
    where
        Self: Send + 'a,
        T: 'a,
        E: 'a,
    {
        log_on_success_to(self, logger, sink, message.into()).boxed()
    }

    fn log_error_to<'a>(
        self,
        logger: SemanticLogger,
        sink: &'a dyn Sink,
        message: impl Into<String>,
    ) -> BoxFuture<'a, Result<T, E>>
    where
        Self: Send + 'a,
        T: 'a,
        E: Debug + 'a,
    {
        log_on_error_to(self, logger, sink, message.into()).boxed()
    }

    fn is_attempting_to_with<'a>(
        self,
        sink: &'a dyn Sink,
        action: impl Into<String>,
    ) -> BoxFuture<'a, Result<T, E>>
    where
        Self: Send + 'a,
        T: 'a,
        E: Debug + 'a,
    {
        attempting_to_with(self, sink, action.into()).boxed()
    }
}

impl<F, T, E> OutcomeLogExt<T, E> for F where F: Future<Output = Result<T, E>> {}
