//! Property and path readers.
//!
//! [`Object`] is a small prototype-delegating record used by [`property`],
//! [`result`] and [`create`]. Plain data paths go through [`get`] on
//! `serde_json::Value`.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::truthy::is_truthy;

type Method = Rc<dyn Fn(&Object) -> Value>;

/// Returns its argument unchanged.
pub const fn identity<T>(value: T) -> T {
    value
}

/// A slot on an [`Object`]: either plain data or something to invoke.
#[derive(Clone)]
pub enum Member {
    Value(Value),
    Invocable(Method),
}

impl Member {
    pub fn invocable<F>(method: F) -> Self
    where
        F: Fn(&Object) -> Value + 'static,
    {
        Self::Invocable(Rc::new(method))
    }

    /// Plain values are returned as-is; invocables are called with `receiver`
    /// bound as their object.
    #[must_use]
    pub fn evaluate(&self, receiver: &Object) -> Value {
        match self {
            Self::Value(value) => value.clone(),
            Self::Invocable(method) => method(receiver),
        }
    }

    #[must_use]
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Invocable(_) => None,
        }
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Invocable(_) => f.write_str("Invocable(..)"),
        }
    }
}

impl From<Value> for Member {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

/// Record whose lookups fall back to an optional prototype.
#[derive(Debug, Clone, Default)]
pub struct Object {
    own: IndexMap<String, Member>,
    proto: Option<Rc<Self>>,
}

impl Object {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, member: impl Into<Member>) -> Self {
        self.insert(key, member);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, member: impl Into<Member>) {
        self.own.insert(key.into(), member.into());
    }

    /// Own member first, then each prototype in turn.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&Member> {
        let mut object = self;
        loop {
            if let Some(member) = object.own.get(key) {
                return Some(member);
            }
            object = object.proto.as_deref()?;
        }
    }

    pub fn own_keys(&self) -> impl Iterator<Item = &str> {
        self.own.keys().map(String::as_str)
    }

    #[must_use]
    pub const fn prototype(&self) -> Option<&Rc<Self>> {
        self.proto.as_ref()
    }
}

impl From<Map<String, Value>> for Object {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            own: map
                .into_iter()
                .map(|(key, value)| (key, Member::Value(value)))
                .collect(),
            proto: None,
        }
    }
}

/// Reader for `object[key]`.
///
/// A missing receiver is a fault, not a missing value: it surfaces as
/// [`Error::NullReceiver`]. An absent key reads as `Ok(None)`.
pub fn property(key: impl Into<String>) -> impl Fn(Option<&Object>) -> Result<Option<Member>> {
    let key = key.into();
    move |object: Option<&Object>| {
        let object = object.ok_or_else(|| Error::NullReceiver { key: key.clone() })?;
        Ok(object.lookup(&key).cloned())
    }
}

/// Like [`property`], but invocable members are evaluated against the
/// receiving object.
pub fn result(key: impl Into<String>) -> impl Fn(Option<&Object>) -> Result<Option<Value>> {
    let key = key.into();
    move |object: Option<&Object>| {
        let object = object.ok_or_else(|| Error::NullReceiver { key: key.clone() })?;
        Ok(object.lookup(&key).map(|member| member.evaluate(object)))
    }
}

/// Walk `path` from `object`, stopping at the first falsy step.
///
/// `None` stands for an undefined read; a falsy value met along the way
/// (`null`, `false`, `0`, `""`) is returned instead of being descended into.
/// Arrays are indexed by decimal steps.
pub fn get<'a, S>(object: Option<&'a Value>, path: &[S]) -> Option<&'a Value>
where
    S: AsRef<str>,
{
    let mut current = object?;
    for step in path {
        if !is_truthy(current) {
            break;
        }
        current = read_step(current, step.as_ref())?;
    }
    Some(current)
}

fn read_step<'a>(value: &'a Value, step: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(step),
        Value::Array(items) => step.parse::<usize>().ok().and_then(|index| items.get(index)),
        _ => None,
    }
}

/// A fresh single-key object `{ key: value }`.
#[must_use]
pub fn at(key: impl Into<String>, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(key.into(), value);
    Value::Object(map)
}

/// New object delegating to `proto`, with the own members of `props` overlaid.
#[must_use]
pub fn create(proto: Rc<Object>, props: Option<Object>) -> Object {
    Object {
        own: props.map(|props| props.own).unwrap_or_default(),
        proto: Some(proto),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn person() -> Object {
        Object::new()
            .with("first", json!("Ada"))
            .with("last", json!("Lovelace"))
            .with(
                "full_name",
                Member::invocable(|this| {
                    let first = this.lookup("first").and_then(Member::as_value);
                    let last = this.lookup("last").and_then(Member::as_value);
                    match (first, last) {
                        (Some(Value::String(a)), Some(Value::String(b))) => json!(format!("{a} {b}")),
                        _ => Value::Null,
                    }
                }),
            )
    }

    #[test]
    fn property_reads_own_member() {
        let read = property("first");
        let member = read(Some(&person())).unwrap();
        assert_eq!(member.and_then(|m| m.as_value().cloned()), Some(json!("Ada")));
    }

    #[test]
    fn property_missing_key_is_none() {
        let read = property("age");
        assert!(read(Some(&person())).unwrap().is_none());
    }

    #[test]
    fn property_null_receiver_faults() {
        let read = property("first");
        assert_eq!(
            read(None).unwrap_err(),
            Error::NullReceiver { key: "first".to_string() }
        );
    }

    #[test]
    fn property_does_not_invoke() {
        let read = property("full_name");
        let member = read(Some(&person())).unwrap();
        assert!(matches!(member, Some(Member::Invocable(_))));
    }

    #[test]
    fn result_invokes_bound_to_receiver() {
        let read = result("full_name");
        assert_eq!(read(Some(&person())).unwrap(), Some(json!("Ada Lovelace")));

        let child = create(Rc::new(person()), Some(Object::new().with("first", json!("Augusta"))));
        assert_eq!(read(Some(&child)).unwrap(), Some(json!("Augusta Lovelace")));
    }

    #[test]
    fn result_plain_value_passes_through() {
        let read = result("last");
        assert_eq!(read(Some(&person())).unwrap(), Some(json!("Lovelace")));
        assert!(result("x")(None).is_err());
    }

    #[test]
    fn get_walks_nested_path() {
        let doc = json!({"a": {"b": [10, {"c": "deep"}]}});
        assert_eq!(get(Some(&doc), &["a", "b", "1", "c"]), Some(&json!("deep")));
        assert_eq!(get(Some(&doc), &["a", "missing", "c"]), None);
        assert_eq!(get(Some(&doc), &[] as &[&str]), Some(&doc));
    }

    #[test]
    fn get_stops_at_falsy() {
        let doc = json!({"a": {"b": 0}, "n": null, "s": ""});
        assert_eq!(get(Some(&doc), &["a", "b", "c", "d"]), Some(&json!(0)));
        assert_eq!(get(Some(&doc), &["n", "x"]), Some(&Value::Null));
        assert_eq!(get(Some(&doc), &["s", "len"]), Some(&json!("")));
        assert_eq!(get(None, &["a"]), None);
    }

    #[test]
    fn at_builds_single_key_object() {
        assert_eq!(at("k", json!([1])), json!({"k": [1]}));
    }

    #[test]
    fn create_delegates_and_overlays() {
        let base = Rc::new(Object::new().with("x", json!(1)).with("y", json!(2)));
        let derived = create(Rc::clone(&base), Some(Object::new().with("y", json!(20))));

        let read_x = property("x");
        let read_y = property("y");
        let x = read_x(Some(&derived)).unwrap();
        let y = read_y(Some(&derived)).unwrap();
        assert_eq!(x.and_then(|m| m.as_value().cloned()), Some(json!(1)));
        assert_eq!(y.and_then(|m| m.as_value().cloned()), Some(json!(20)));
        assert_eq!(derived.own_keys().collect::<Vec<_>>(), vec!["y"]);
        assert!(derived.prototype().is_some());
    }

    #[test]
    fn create_without_props_has_no_own_keys() {
        let derived = create(Rc::new(Object::from(Map::new())), None);
        assert_eq!(derived.own_keys().count(), 0);
    }

    #[test]
    fn identity_returns_argument() {
        assert_eq!(identity(5), 5);
    }
}
