//! The `{ "hasValue": bool, "value": T }` representation of an [`Option`].
//!
//! This is the shape other tooling uses to exchange optional values as plain records. The
//! [`serialize`] and [`deserialize`] functions are meant to be used with `#[serde(with)]`:
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Lookup {
//!     #[serde(with = "maybe_option::shape")]
//!     owner: Option<String>,
//! }
//!
//! let lookup = Lookup { owner: Some("alice".to_string()) };
//! let json = serde_json::to_value(&lookup).unwrap();
//! assert_eq!(json, serde_json::json!({ "owner": { "hasValue": true, "value": "alice" } }));
//! assert!(maybe_option::is_option(&json["owner"]));
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::Value;

/// The discriminant key of the shape.
pub const HAS_VALUE_KEY: &str = "hasValue";

/// The payload key of the shape.
pub const VALUE_KEY: &str = "value";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShapeRef<'a, T> {
    has_value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a T>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShapeOwned<T> {
    has_value: bool,
    value: Option<T>,
}

/// Serializes `option` as `{ "hasValue": true, "value": .. }` or `{ "hasValue": false }`.
pub fn serialize<T, S>(option: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    ShapeRef { has_value: option.is_some(), value: option.as_ref() }.serialize(serializer)
}

/// Deserializes an [`Option`] from its `hasValue` shape.
///
/// `hasValue: true` requires a non-null `value`, `hasValue: false` must not carry one.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    let ShapeOwned { has_value, value } = ShapeOwned::<T>::deserialize(deserializer)?;
    match (has_value, value) {
        (true, Some(value)) => Ok(Some(value)),
        (true, None) => Err(de::Error::missing_field(VALUE_KEY)),
        (false, None) => Ok(None),
        (false, Some(_)) => Err(de::Error::custom(format!(
            "`{VALUE_KEY}` must be absent when `{HAS_VALUE_KEY}` is false"
        ))),
    }
}

/// Wrapper that (de)serializes an [`Option`] in its `hasValue` shape, for use outside of
/// `#[serde(with)]` fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shaped<T>(pub Option<T>);

impl<T> Shaped<T> {
    /// Returns the wrapped option.
    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<T> From<Option<T>> for Shaped<T> {
    fn from(option: Option<T>) -> Self {
        Self(option)
    }
}

impl<T> From<Shaped<T>> for Option<T> {
    fn from(shaped: Shaped<T>) -> Self {
        shaped.0
    }
}

impl<T: Serialize> Serialize for Shaped<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize(&self.0, serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Shaped<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize(deserializer).map(Self)
    }
}

/// Returns `true` if `value` is an object with a boolean `hasValue` field.
///
/// Only the discriminant is inspected, `value` is not required to be well formed otherwise.
pub fn is_option(value: &Value) -> bool {
    value.as_object().and_then(|object| object.get(HAS_VALUE_KEY)).is_some_and(Value::is_boolean)
}
