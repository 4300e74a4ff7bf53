//! Conversions from results and fallible futures into [`Option`].
//!
//! A future resolving to `Result<T, E>` stands in for a promise: `Ok` is a resolved value, `Err` a
//! rejection. By default a rejection is swallowed and becomes `None`; the `*_with` variants take a
//! `catch_error` flag and hand the original error back when it is `false`, the `*_configured`
//! variants read that flag from a [`ConversionConfig`].
//!
//! A plain `Ok(value)` always becomes `Some(value)`. When the payload itself may be null, e.g. an
//! `Option<T>` or a JSON value, the `from_nullable_*` variants normalize it with
//! [`maybe`](crate::maybe) so that `Ok(None)` also yields `None`.
//!
//! The error carried by a result value is never kept. An [`Option`] has no error channel, so
//! converting into one is lossy on purpose.

use crate::{
    config::ConversionConfig,
    option::{AsyncOption, Nullable},
};
use futures::FutureExt;
use std::{any::type_name, future::Future};

/// Converts a result into an [`Option`], discarding the error.
///
/// # Example
///
/// ```
/// use maybe_option::from_result;
///
/// assert_eq!(from_result(Ok::<_, &str>(42)), Some(42));
/// assert_eq!(from_result(Err::<u32, _>("My error")), None);
/// ```
pub fn from_result<T, E>(result: Result<T, E>) -> Option<T> {
    result.ok()
}

/// Converts a result with a nullable payload into an [`Option`], discarding the error.
///
/// `Ok(value)` is normalized with [`maybe`](crate::maybe), so `Ok(None)` also yields `None`.
///
/// ```
/// use maybe_option::from_nullable_result;
///
/// assert_eq!(from_nullable_result(Ok::<_, &str>(Some(42))), Some(42));
/// assert_eq!(from_nullable_result(Ok::<_, &str>(serde_json::Value::Null)), None);
/// ```
pub fn from_nullable_result<N: Nullable, E>(result: Result<N, E>) -> Option<N::Value> {
    from_result(result).and_then(Nullable::into_option)
}

/// Awaits `future` and converts its output into an [`Option`], turning a failure into `None`.
///
/// # Example
///
/// ```
/// use maybe_option::from_future;
///
/// # futures::executor::block_on(async {
/// assert_eq!(from_future(async { Ok::<_, &str>(42) }).await, Some(42));
/// assert_eq!(from_future(async { Err::<u32, _>("rejected") }).await, None);
/// # });
/// ```
pub async fn from_future<F, T, E>(future: F) -> Option<T>
where
    F: Future<Output = Result<T, E>>,
{
    match future.await {
        Ok(value) => Some(value),
        Err(_) => {
            swallowed::<E>("future");
            None
        }
    }
}

/// Same as [`from_future`], normalizing a nullable payload with [`maybe`](crate::maybe).
pub async fn from_nullable_future<F, N, E>(future: F) -> Option<N::Value>
where
    F: Future<Output = Result<N, E>>,
    N: Nullable,
{
    from_future(future).await.and_then(Nullable::into_option)
}

/// Awaits `future` and converts its output into an [`Option`].
///
/// If the future fails and `catch_error` is `true` this returns `Ok(None)`, otherwise the original
/// error is returned unchanged.
pub async fn from_future_with<F, T, E>(future: F, catch_error: bool) -> Result<Option<T>, E>
where
    F: Future<Output = Result<T, E>>,
{
    match future.await {
        Ok(value) => Ok(Some(value)),
        Err(_) if catch_error => {
            swallowed::<E>("future");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Same as [`from_future_with`], with the `catch_error` policy taken from `config`.
pub async fn from_future_configured<F, T, E>(
    future: F,
    config: &ConversionConfig,
) -> Result<Option<T>, E>
where
    F: Future<Output = Result<T, E>>,
{
    from_future_with(future, config.catch_error).await
}

/// Awaits a future resolving to a result and converts that result with [`from_result`].
///
/// The outer error, i.e. the future itself failing, is swallowed and yields `None`.
pub async fn from_async_result<F, T, E, R>(future: F) -> Option<T>
where
    F: Future<Output = Result<Result<T, E>, R>>,
{
    match future.await {
        Ok(result) => from_result(result),
        Err(_) => {
            swallowed::<R>("async result");
            None
        }
    }
}

/// Same as [`from_async_result`], converting the resolved result with [`from_nullable_result`].
pub async fn from_nullable_async_result<F, N, E, R>(future: F) -> Option<N::Value>
where
    F: Future<Output = Result<Result<N, E>, R>>,
    N: Nullable,
{
    from_async_result(future).await.and_then(Nullable::into_option)
}

/// Awaits a future resolving to a result and converts that result with [`from_result`].
///
/// A failure of the future itself follows the same `catch_error` policy as
/// [`from_future_with`]. A resolved `Err` is not a failure and always yields `Ok(None)`.
pub async fn from_async_result_with<F, T, E, R>(
    future: F,
    catch_error: bool,
) -> Result<Option<T>, R>
where
    F: Future<Output = Result<Result<T, E>, R>>,
{
    match future.await {
        Ok(result) => Ok(from_result(result)),
        Err(_) if catch_error => {
            swallowed::<R>("async result");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Same as [`from_async_result_with`], with the `catch_error` policy taken from `config`.
pub async fn from_async_result_configured<F, T, E, R>(
    future: F,
    config: &ConversionConfig,
) -> Result<Option<T>, R>
where
    F: Future<Output = Result<Result<T, E>, R>>,
{
    from_async_result_with(future, config.catch_error).await
}

/// Converts a fallible future into a boxed [`AsyncOption`].
///
/// Failures are swallowed, see [`from_future`].
pub trait IntoAsyncOption<'a, T> {
    /// Boxes `self` into a future resolving to an [`Option`].
    fn into_async_option(self) -> AsyncOption<'a, T>;
}

impl<'a, F, T, E> IntoAsyncOption<'a, T> for F
where
    F: Future<Output = Result<T, E>> + Send + 'a,
    T: Send + 'a,
    E: Send + 'a,
{
    fn into_async_option(self) -> AsyncOption<'a, T> {
        from_future(self).boxed()
    }
}

fn swallowed<E>(source: &str) {
    trace!(target: "maybe_option::from", error = type_name::<E>(), "{source} failed, yielding None");
}
