//! Core constructors for [`Option`] values.
//!
//! `Option<T>` already is the two-variant type this crate works with: `Some(T)` when a value is
//! present and `None` when it is not. This module adds the constructors and the [`Nullable`]
//! abstraction used to normalize inputs that carry their own notion of "null".

use futures::future::BoxFuture;
use serde_json::Value;
use std::ptr::NonNull;

/// A future that resolves to an [`Option`].
pub type AsyncOption<'a, T> = BoxFuture<'a, Option<T>>;

/// A value that has a null representation.
///
/// [`maybe`] uses this to turn the null representation into [`None`] and everything else into
/// [`Some`].
pub trait Nullable {
    /// The payload type once the null case has been removed.
    type Value;

    /// Converts `self` into an [`Option`], mapping null to [`None`].
    fn into_option(self) -> Option<Self::Value>;
}

impl<T> Nullable for Option<T> {
    type Value = T;

    #[inline]
    fn into_option(self) -> Option<T> {
        self
    }
}

impl Nullable for Value {
    type Value = Self;

    fn into_option(self) -> Option<Self> {
        match self {
            Self::Null => None,
            value => Some(value),
        }
    }
}

impl<'a> Nullable for &'a Value {
    type Value = &'a Value;

    fn into_option(self) -> Option<&'a Value> {
        if self.is_null() { None } else { Some(self) }
    }
}

impl<T> Nullable for *const T {
    type Value = NonNull<T>;

    #[inline]
    fn into_option(self) -> Option<NonNull<T>> {
        NonNull::new(self.cast_mut())
    }
}

impl<T> Nullable for *mut T {
    type Value = NonNull<T>;

    #[inline]
    fn into_option(self) -> Option<NonNull<T>> {
        NonNull::new(self)
    }
}

/// Wraps `value` in [`Some`].
#[inline]
pub const fn some<T>(value: T) -> Option<T> {
    Some(value)
}

/// Returns [`None`].
#[inline]
pub const fn none<T>() -> Option<T> {
    None
}

/// Returns [`None`] if `value` is null, [`Some`] otherwise.
///
/// # Example
///
/// ```
/// use maybe_option::maybe;
/// use serde_json::json;
///
/// assert_eq!(maybe(Some(42)), Some(42));
/// assert_eq!(maybe(None::<u32>), None);
/// assert_eq!(maybe(json!(null)), None);
/// assert_eq!(maybe(json!("hello")), Some(json!("hello")));
/// ```
#[inline]
pub fn maybe<N: Nullable>(value: N) -> Option<N::Value> {
    value.into_option()
}
