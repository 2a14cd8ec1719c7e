//! Bounded wrap-around stepping.

use serde::{Deserialize, Serialize};

/// Step `value` by `delta` inside `[min, max]`.
///
/// Leaving the range on the high side lands on `min`, on the low side on
/// `max`. The wrap happens once, whatever the size of `delta`: overshooting
/// by several spans is not reduced modulo the span. A step past the `i64`
/// range counts as leaving on that side.
#[must_use]
pub const fn counter(value: i64, delta: i64, max: i64, min: i64) -> i64 {
    let mut next = match value.checked_add(delta) {
        Some(next) => next,
        None if delta > 0 => return min,
        None => return max,
    };
    if next > max {
        next = min;
    }
    if next < min {
        next = max;
    }
    next
}

/// Inclusive bounds for [`counter`], with `min` defaulting to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    #[serde(default)]
    pub min: i64,
    pub max: i64,
}

impl Counter {
    #[must_use]
    pub const fn new(max: i64) -> Self {
        Self { min: 0, max }
    }

    #[must_use]
    pub const fn with_min(mut self, min: i64) -> Self {
        self.min = min;
        self
    }

    #[must_use]
    pub const fn step(&self, value: i64, delta: i64) -> i64 {
        counter(value, delta, self.max, self.min)
    }

    #[must_use]
    pub const fn next(&self, value: i64) -> i64 {
        self.step(value, 1)
    }

    #[must_use]
    pub const fn prev(&self, value: i64) -> i64 {
        self.step(value, -1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_wraps_to_min() {
        assert_eq!(counter(9, 1, 9, 0), 0);
    }

    #[test]
    fn underflow_wraps_to_max() {
        assert_eq!(counter(0, -1, 9, 0), 9);
    }

    #[test]
    fn in_range_steps_plainly() {
        assert_eq!(counter(5, 1, 9, 0), 6);
        assert_eq!(counter(5, 4, 9, 0), 9);
    }

    #[test]
    fn large_delta_wraps_once() {
        assert_eq!(counter(5, 27, 9, 0), 0);
        assert_eq!(counter(5, -27, 9, 0), 9);
        assert_eq!(counter(3, 100, 10, 2), 2);
    }

    #[test]
    fn overflowing_step_still_wraps() {
        assert_eq!(counter(i64::MAX, 1, 9, 0), 0);
        assert_eq!(counter(i64::MIN, -1, 9, 0), 9);
        assert_eq!(counter(i64::MAX, 1, i64::MAX, 0), 0);
        assert_eq!(counter(i64::MIN, -1, 5, i64::MIN), 5);
        assert_eq!(counter(i64::MAX - 1, 1, i64::MAX, 0), i64::MAX);
    }

    #[test]
    fn counter_struct_defaults_min_to_zero() {
        let dial = Counter::new(3);
        assert_eq!(dial.next(3), 0);
        assert_eq!(dial.prev(0), 3);

        let shifted = Counter::new(5).with_min(1);
        assert_eq!(shifted.step(5, 1), 1);
        assert_eq!(shifted.step(1, -1), 5);
    }

    #[test]
    fn deserializes_without_min() {
        let dial: Counter = serde_json::from_str(r#"{"max": 7}"#).unwrap();
        assert_eq!(dial, Counter::new(7));
    }
}
