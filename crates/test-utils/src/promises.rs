//! Futures standing in for resolved and rejected promises.

use futures::future::{Ready, ready};
use std::{future::Future, time::Duration};

/// The error produced by [`rejected`] futures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("rejected: {0}")]
pub struct TestError(pub String);

impl TestError {
    /// Creates a new error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// A future that resolves to `value` right away.
pub fn resolved<T>(value: T) -> Ready<Result<T, TestError>> {
    ready(Ok(value))
}

/// A future that fails with a [`TestError`] right away.
pub fn rejected<T>(reason: &str) -> Ready<Result<T, TestError>> {
    ready(Err(TestError::new(reason)))
}

/// A future that resolves to `result` after sleeping for `delay`.
///
/// Must be polled from within a tokio runtime with the timer enabled.
pub fn delayed<T>(
    result: Result<T, TestError>,
    delay: Duration,
) -> impl Future<Output = Result<T, TestError>> {
    async move {
        tokio::time::sleep(delay).await;
        trace!(?delay, ok = result.is_ok(), "delayed future settled");
        result
    }
}
