#![doc = include_str!("../README.md")]
#![warn(missing_docs, unused_crate_dependencies)]

#[macro_use]
extern crate tracing;

pub mod assert;
pub mod config;
pub mod errors;
pub mod from;
pub mod map;
pub mod option;
pub mod shape;
pub mod unwrap;

pub use assert::{
    OptionAssertExt, assert_none, assert_some, assert_some_value, check_none, check_some,
    check_some_value,
};
pub use config::ConversionConfig;
pub use errors::{AssertionError, ConfigError};
pub use from::{
    IntoAsyncOption, from_async_result, from_async_result_configured, from_async_result_with,
    from_future, from_future_configured, from_future_with, from_nullable_async_result,
    from_nullable_future, from_nullable_result, from_result,
};
pub use map::{Mapped, flatten, map, map_or};
pub use option::{AsyncOption, Nullable, maybe, none, some};
pub use shape::is_option;
pub use unwrap::{unwrap_or, unwrap_or_else};

