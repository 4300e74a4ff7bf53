//! Helpers to map an [`Option`] to another value.

/// The outcome of the closure passed to [`map`].
///
/// A closure either produces a plain value, which [`map`] wraps in `Some`, or an [`Option`] of its
/// own, which [`map`] returns as is. The latter makes [`map`] act as a flat-map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mapped<Z> {
    /// A plain value.
    Value(Z),
    /// A nested option, returned without wrapping.
    Option(Option<Z>),
}

impl<Z> Mapped<Z> {
    /// Resolves into the [`Option`] returned by [`map`].
    #[inline]
    pub fn into_option(self) -> Option<Z> {
        match self {
            Self::Value(value) => Some(value),
            Self::Option(option) => option,
        }
    }
}

impl<Z> From<Option<Z>> for Mapped<Z> {
    fn from(option: Option<Z>) -> Self {
        Self::Option(option)
    }
}

/// Maps the value of `option` with `f`.
///
/// `f` is not called if `option` is `None`.
///
/// # Example
///
/// ```
/// use maybe_option::{Mapped, map, maybe};
///
/// let doubled = map(Some(42), |value| Mapped::Value(value * 2));
/// assert_eq!(doubled, Some(84));
///
/// let flat = map(Some(42), |value| Mapped::Option(maybe(Some(value * 2))));
/// assert_eq!(flat, Some(84));
///
/// let empty = map(Some(42), |_| Mapped::<u32>::Option(None));
/// assert_eq!(empty, None);
/// ```
pub fn map<T, Z, F>(option: Option<T>, f: F) -> Option<Z>
where
    F: FnOnce(T) -> Mapped<Z>,
{
    option.and_then(|value| f(value).into_option())
}

/// Calls `some` with the value of `option`, or `none` if it is empty. Exactly one closure runs.
///
/// # Example
///
/// ```
/// use maybe_option::map_or;
///
/// assert_eq!(map_or(Some(42), |value| value * 2, || 0), 84);
/// assert_eq!(map_or(None, |value: i32| value * 2, || 0), 0);
/// ```
pub fn map_or<T, Z, S, N>(option: Option<T>, some: S, none: N) -> Z
where
    S: FnOnce(T) -> Z,
    N: FnOnce() -> Z,
{
    match option {
        Some(value) => some(value),
        None => none(),
    }
}

/// Removes one level of nesting.
#[inline]
pub fn flatten<T>(option: Option<Option<T>>) -> Option<T> {
    option.flatten()
}
