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

//! Decoding of the host location's query string.

mod decode;
mod decoder;
mod error;
mod location;

pub use decode::{QueryMap, QueryValue, decode_query, percent_decode};
pub use decoder::QueryDecoder;
pub use error::{QueryError, Result};
pub use location::Location;
