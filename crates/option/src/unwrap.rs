//! Helpers to get the value out of an [`Option`].

/// Returns the contained value, or `default` if `option` is `None`.
///
/// ```
/// use maybe_option::unwrap_or;
///
/// assert_eq!(unwrap_or(Some(42), 0), 42);
/// assert_eq!(unwrap_or(None, 0), 0);
/// ```
#[inline]
pub fn unwrap_or<T>(option: Option<T>, default: T) -> T {
    match option {
        Some(value) => value,
        None => default,
    }
}

/// Returns the contained value, or computes one with `f` if `option` is `None`.
///
/// `f` only runs when `option` is `None`.
#[inline]
pub fn unwrap_or_else<T, F>(option: Option<T>, f: F) -> T
where
    F: FnOnce() -> T,
{
    match option {
        Some(value) => value,
        None => f(),
    }
}
