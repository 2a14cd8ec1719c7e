//! Integration tests for query decoding.
//!
//! These tests verify that:
//! - a full location string decodes to the expected parameter map
//! - the decoder reads the location once and keeps the first result
//! - malformed escapes surface as `QueryError::Decoding`

use std::cell::RefCell;
use std::rc::Rc;

use fnkit_query::{Location, QueryDecoder, QueryError, QueryValue, decode_query, percent_decode};
use pretty_assertions::assert_eq;

struct CountingLocation {
    href: RefCell<String>,
    reads: RefCell<usize>,
}

impl Location for CountingLocation {
    fn href(&self) -> String {
        *self.reads.borrow_mut() += 1;
        self.href.borrow().clone()
    }
}

#[test]
fn test_repeated_names_keep_last_value() {
    let params = decode_query("?a=1&b&b=2").unwrap();
    assert_eq!(params.len(), 2);
    assert_eq!(params["a"], QueryValue::from("1"));
    assert_eq!(params["b"], QueryValue::from("2"));
}

#[test]
fn test_empty_location_has_no_params() {
    assert!(decode_query("").unwrap().is_empty());
}

#[test]
fn test_full_location() {
    let params =
        decode_query("https://example.test/app/index.html?lang=en&debug&q=a%26b%3Dc#section-2")
            .unwrap();
    let pairs: Vec<(&str, &QueryValue)> = params.iter().map(|(k, v)| (k.as_str(), v)).collect();
    assert_eq!(
        pairs,
        vec![
            ("lang", &QueryValue::from("en")),
            ("debug", &QueryValue::Flag),
            ("q", &QueryValue::from("a&b=c")),
        ]
    );
}

#[test]
fn test_location_is_read_once() {
    let location = Rc::new(CountingLocation {
        href: RefCell::new("https://example.test/?page=3".to_string()),
        reads: RefCell::new(0),
    });
    let decoder = QueryDecoder::new(Rc::clone(&location));

    for _ in 0..3 {
        assert_eq!(decoder.param("page").unwrap(), Some(QueryValue::from("3")));
    }
    *location.href.borrow_mut() = "https://example.test/?page=4".to_string();
    assert_eq!(decoder.param("page").unwrap(), Some(QueryValue::from("3")));
    assert_eq!(*location.reads.borrow(), 1);
}

#[test]
fn test_failed_decode_is_not_cached() {
    let location = Rc::new(CountingLocation {
        href: RefCell::new("https://example.test/?x=%".to_string()),
        reads: RefCell::new(0),
    });
    let decoder = QueryDecoder::new(Rc::clone(&location));

    let err = decoder.query().unwrap_err();
    assert!(matches!(err, QueryError::Decoding { ref input, .. } if input == "%"));
    assert!(decoder.query().is_err());
    assert_eq!(*location.reads.borrow(), 2);
    assert!(!decoder.is_decoded());
}

#[test]
fn test_percent_decode_is_strict() {
    assert_eq!(percent_decode("%41%42c").unwrap(), "ABc");
    assert!(percent_decode("100%").is_err());
    assert!(percent_decode("%C3").is_err());
}
