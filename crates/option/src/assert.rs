//! Assertions on the variant of an [`Option`].
//!
//! The `check_*` functions return an [`AssertionError`] and leave the decision to the caller, the
//! `assert_*` functions panic with the same message and are meant for tests.
//!
//! ```
//! use maybe_option::{assert_none, assert_some, assert_some_value, check_some_value};
//!
//! let option = Some(42);
//! assert_eq!(*assert_some(&option), 42);
//! assert_some_value(&option, &42);
//! assert!(check_some_value(&option, &43).is_err());
//!
//! assert_none(&None::<u32>);
//! ```

use crate::errors::AssertionError;
use std::fmt;

/// Returns the contained value, or [`AssertionError::ExpectedSome`] if `option` is `None`.
pub fn check_some<T>(option: &Option<T>) -> Result<&T, AssertionError> {
    option.as_ref().ok_or(AssertionError::ExpectedSome)
}

/// Returns [`AssertionError::ExpectedNone`] if `option` is `Some`.
pub fn check_none<T>(option: &Option<T>) -> Result<(), AssertionError> {
    match option {
        Some(_) => Err(AssertionError::ExpectedNone),
        None => Ok(()),
    }
}

/// Checks that `option` is `Some` and holds a value equal to `value`.
///
/// Both values in [`AssertionError::ValueMismatch`] are rendered with `Debug`, so strings keep
/// their quotes:
///
/// ```
/// use maybe_option::check_some_value;
///
/// let err = check_some_value(&Some("a"), &"b").unwrap_err();
/// assert_eq!(err.to_string(), r#"Expected value to be "b", but got "a""#);
/// ```
pub fn check_some_value<'a, T>(option: &'a Option<T>, value: &T) -> Result<&'a T, AssertionError>
where
    T: PartialEq + fmt::Debug,
{
    let actual = check_some(option)?;
    if actual != value {
        return Err(AssertionError::mismatch(value, actual));
    }
    Ok(actual)
}

/// Asserts that `option` is `Some` and returns the contained value.
///
/// # Panics
///
/// Panics with "Expected a value to be present" if `option` is `None`.
#[track_caller]
pub fn assert_some<T>(option: &Option<T>) -> &T {
    check_some(option).unwrap_or_else(|err| panic!("{err}"))
}

/// Asserts that `option` is `None`.
///
/// # Panics
///
/// Panics with "Expected no value to be present" if `option` is `Some`.
#[track_caller]
pub fn assert_none<T>(option: &Option<T>) {
    if let Err(err) = check_none(option) {
        panic!("{err}");
    }
}

/// Asserts that `option` is `Some` and holds a value equal to `value`.
///
/// # Panics
///
/// Panics if `option` is `None`, or if the contained value differs from `value`. The message
/// renders both values with `Debug`, see [`check_some_value`].
#[track_caller]
pub fn assert_some_value<'a, T>(option: &'a Option<T>, value: &T) -> &'a T
where
    T: PartialEq + fmt::Debug,
{
    check_some_value(option, value).unwrap_or_else(|err| panic!("{err}"))
}

mod private {
    pub trait Sealed {}

    impl<T> Sealed for Option<T> {}
}

/// Method forms of the assertions in this module.
pub trait OptionAssertExt<T>: private::Sealed {
    /// See [`assert_some`].
    fn assert_some(&self) -> &T;

    /// See [`assert_none`].
    fn assert_none(&self);

    /// See [`assert_some_value`].
    fn assert_some_value(&self, value: &T) -> &T
    where
        T: PartialEq + fmt::Debug;
}

impl<T> OptionAssertExt<T> for Option<T> {
    #[track_caller]
    fn assert_some(&self) -> &T {
        assert_some(self)
    }

    #[track_caller]
    fn assert_none(&self) {
        assert_none(self)
    }

    #[track_caller]
    fn assert_some_value(&self, value: &T) -> &T
    where
        T: PartialEq + fmt::Debug,
    {
        assert_some_value(self, value)
    }
}
