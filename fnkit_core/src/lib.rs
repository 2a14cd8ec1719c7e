#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod accessor;
pub mod collection;
pub mod counter;
mod error;
pub mod memo;
mod truthy;

pub use accessor::{Member, Object, at, create, get, identity, property, result};
pub use collection::{
    Collection, Enumerable, Key, cast_array, compact, filter, flatten, flatten_nested, map,
    map_values, max_by, negate, partial, partition, sum, sum_text,
};
pub use counter::{Counter, counter};
pub use error::{Error, Result};
pub use memo::{CacheKey, Memoized, memoize, try_memoize};
pub use truthy::is_truthy;
