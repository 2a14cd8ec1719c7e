//! Collection operations that work uniformly over ordered sequences and
//! string-keyed mappings.
//!
//! Every operation dispatches on the [`Collection`] tag instead of probing the
//! input at runtime, and none of them mutate their input.

use std::fmt;
use std::ops::Add;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::accessor::identity;
use crate::error::{Error, Result};
use crate::truthy::is_truthy;

/// Either an ordered sequence or a mapping from string key to value.
///
/// Mappings enumerate in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Collection<T> {
    Sequence(Vec<T>),
    Keyed(IndexMap<String, T>),
}

impl<T> Collection<T> {
    /// Build a keyed collection from `(key, value)` pairs.
    ///
    /// A repeated key keeps its first position and takes the last value.
    pub fn keyed<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        Self::Keyed(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items)
    }
}

impl<T> From<IndexMap<String, T>> for Collection<T> {
    fn from(entries: IndexMap<String, T>) -> Self {
        Self::Keyed(entries)
    }
}

/// Position of a value inside a [`Collection`], handed to iteratees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Index(usize),
    Name(&'a str),
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Minimal capability shared by sequences and mappings.
pub trait Enumerable<T> {
    /// Visit every value with its key or index, in enumeration order.
    fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T, Key<'_>);

    fn keys(&self) -> Vec<Key<'_>>;

    fn values(&self) -> Vec<&T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Enumerable<T> for Collection<T> {
    fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T, Key<'_>),
    {
        match self {
            Self::Sequence(items) => items
                .iter()
                .enumerate()
                .for_each(|(index, value)| f(value, Key::Index(index))),
            Self::Keyed(entries) => entries
                .iter()
                .for_each(|(name, value)| f(value, Key::Name(name))),
        }
    }

    fn keys(&self) -> Vec<Key<'_>> {
        match self {
            Self::Sequence(items) => (0..items.len()).map(Key::Index).collect(),
            Self::Keyed(entries) => entries.keys().map(|name| Key::Name(name)).collect(),
        }
    }

    fn values(&self) -> Vec<&T> {
        match self {
            Self::Sequence(items) => items.iter().collect(),
            Self::Keyed(entries) => entries.values().collect(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Sequence(items) => items.len(),
            Self::Keyed(entries) => entries.len(),
        }
    }
}

/// Apply `iteratee` to every value and collect the results as a sequence.
///
/// A missing collection maps to an empty sequence. Mapping keys are passed to
/// the iteratee but are not part of the result.
pub fn map<T, U, F>(collection: Option<&Collection<T>>, mut iteratee: F) -> Vec<U>
where
    F: FnMut(&T, Key<'_>, &Collection<T>) -> U,
{
    let Some(collection) = collection else {
        return Vec::new();
    };

    let mut mapped = Vec::with_capacity(collection.len());
    collection.for_each(|value, key| mapped.push(iteratee(value, key, collection)));
    mapped
}

/// Keep the values for which `predicate` holds. Mapping keys are dropped.
pub fn filter<T, F>(collection: Option<&Collection<T>>, mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, Key<'_>, &Collection<T>) -> bool,
{
    let Some(collection) = collection else {
        return Vec::new();
    };

    let mut kept = Vec::new();
    collection.for_each(|value, key| {
        if predicate(value, key, collection) {
            kept.push(value.clone());
        }
    });
    kept
}

/// Split values into `(matches, non_matches)`, each in original order.
///
/// Mappings are first materialized into their values.
pub fn partition<T, F>(collection: Option<&Collection<T>>, predicate: F) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let values = match collection {
        Some(Collection::Sequence(items)) => items.clone(),
        other => map(other, |value, _, _| identity(value).clone()),
    };
    values.into_iter().partition(predicate)
}

/// Drop falsy elements; truthy arrays are spliced in one level deep.
///
/// `compact([0, 1, false, [2, 3], ""])` is `[1, 2, 3]`.
#[must_use]
pub fn compact(array: Option<&[Value]>) -> Vec<Value> {
    let Some(array) = array else {
        return Vec::new();
    };

    array
        .iter()
        .filter(|value| is_truthy(value))
        .fold(Vec::new(), concat)
}

/// Concatenate one level: arrays are spliced, everything else is appended.
#[must_use]
pub fn flatten(array: &[Value]) -> Vec<Value> {
    array.iter().fold(Vec::new(), concat)
}

/// One-level concatenation of homogeneous sequences.
#[must_use]
pub fn flatten_nested<T: Clone>(array: &[Vec<T>]) -> Vec<T> {
    array.concat()
}

fn concat(mut acc: Vec<Value>, value: &Value) -> Vec<Value> {
    match value {
        Value::Array(items) => acc.extend(items.iter().cloned()),
        other => acc.push(other.clone()),
    }
    acc
}

/// Fold with `+`, seeded by the first element.
///
/// There is no identity element, so an empty input is an error. `String`
/// only implements `Add<&str>`, so text goes through [`sum_text`].
pub fn sum<T>(array: &[T]) -> Result<T>
where
    T: Clone + Add<Output = T>,
{
    let (first, rest) = array
        .split_first()
        .ok_or(Error::EmptyInput { operation: "sum" })?;

    Ok(rest
        .iter()
        .cloned()
        .fold(first.clone(), |total, value| total + value))
}

/// Concatenate text, seeded by the first element.
///
/// An empty input is an error, as for [`sum`].
pub fn sum_text<S: AsRef<str>>(array: &[S]) -> Result<String> {
    let (first, rest) = array
        .split_first()
        .ok_or(Error::EmptyInput { operation: "sum_text" })?;

    Ok(rest
        .iter()
        .fold(first.as_ref().to_string(), |total, value| total + value.as_ref()))
}

/// Element with the strictly greatest `iteratee` result.
///
/// Returns `None` for a missing or keyed collection, or when every element
/// was skipped because `iteratee` returned `None`. Ties keep the element seen
/// first.
pub fn max_by<'a, T, K, F>(collection: Option<&'a Collection<T>>, mut iteratee: F) -> Option<&'a T>
where
    K: PartialOrd,
    F: FnMut(&T) -> Option<K>,
{
    let Some(Collection::Sequence(items)) = collection else {
        return None;
    };

    let mut best: Option<(K, &T)> = None;
    for item in items {
        let Some(computed) = iteratee(item) else {
            continue;
        };
        if best.as_ref().is_none_or(|(current, _)| computed > *current) {
            best = Some((computed, item));
        }
    }
    best.map(|(_, item)| item)
}

/// Same keys, values replaced by `iteratee(value, key, mapping)`.
pub fn map_values<T, U, F>(mapping: &IndexMap<String, T>, mut iteratee: F) -> IndexMap<String, U>
where
    F: FnMut(&T, &str, &IndexMap<String, T>) -> U,
{
    mapping
        .iter()
        .map(|(key, value)| (key.clone(), iteratee(value, key, mapping)))
        .collect()
}

/// Arrays are returned as their elements, anything else is wrapped.
#[must_use]
pub fn cast_array(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => vec![other],
    }
}

/// Predicate with the inverted result.
pub fn negate<T, F>(predicate: F) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    move |value| !predicate(value)
}

/// Bind the first argument of a two-argument function.
///
/// `first` is cloned into every call.
#[must_use]
pub fn partial<A, B, R, F>(func: F, first: A) -> impl Fn(B) -> R
where
    A: Clone,
    F: Fn(A, B) -> R,
{
    move |rest| func(first.clone(), rest)
}
