use std::borrow::Cow;

use indexmap::IndexMap;
use percent_encoding::percent_decode_str;
use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::error::{QueryError, Result};

/// Decoded parameters, in order of first appearance.
pub type QueryMap = IndexMap<String, QueryValue>;

/// A parameter value: decoded text, or a bare flag written without `=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Text(String),
    Flag,
}

impl QueryValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Flag => None,
        }
    }

    #[must_use]
    pub const fn is_flag(&self) -> bool {
        matches!(self, Self::Flag)
    }
}

impl From<&str> for QueryValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Text serializes as a string, a flag as `true`.
impl Serialize for QueryValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Flag => serializer.serialize_bool(true),
        }
    }
}

/// Decode the query part of `href` into a [`QueryMap`].
///
/// Only the text between the first `?` and the first `#` is considered.
/// Empty segments are skipped, each segment is split on its first `=`, and a
/// repeated name keeps the last value. `+` is left as-is.
pub fn decode_query(href: &str) -> Result<QueryMap> {
    let query = query_part(href);

    let mut params = QueryMap::new();
    for segment in query.split('&').filter(|segment| !segment.is_empty()) {
        let (name, value) = match segment.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (segment, None),
        };

        let name = percent_decode(name)?;
        let value = match value {
            Some(value) => QueryValue::Text(percent_decode(value)?),
            None => QueryValue::Flag,
        };
        params.insert(name, value);
    }

    debug!(params = params.len(), "decoded query string");
    Ok(params)
}

fn query_part(href: &str) -> &str {
    let without_fragment = href.split_once('#').map_or(href, |(before, _)| before);
    without_fragment
        .find('?')
        .map_or("", |start| &without_fragment[start..])
        .trim_start_matches('?')
}

/// Strict percent-decoding: every `%` must start a two-digit hex escape and
/// the decoded bytes must be UTF-8.
pub fn percent_decode(input: &str) -> Result<String> {
    for (index, _) in input.match_indices('%') {
        let escape = input.get(index + 1..index + 3);
        if !escape.is_some_and(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit())) {
            warn!(input, index, "malformed percent escape");
            return Err(QueryError::decoding(
                input,
                format!("malformed escape at byte {index}"),
            ));
        }
    }

    percent_decode_str(input)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|err| {
            warn!(input, "percent escapes are not valid UTF-8");
            QueryError::decoding(input, err.to_string())
        })
}
