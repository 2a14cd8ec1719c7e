//! Single-argument memoization.
//!
//! Each [`Memoized`] wrapper owns its cache, so the cache lives exactly as
//! long as the wrapper. Entries are keyed by the argument's [`CacheKey`] and
//! are never evicted. Failed calls made through [`Memoized::try_call`] are
//! not cached.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde_json::Value;
use tracing::trace;

/// Stable string form of a memoized argument.
pub trait CacheKey {
    fn cache_key(&self) -> String;
}

macro_rules! display_cache_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CacheKey for $ty {
                fn cache_key(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_cache_key!(
    str, String, char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    f64,
);

/// The no-argument call site: every call shares one cache slot.
impl CacheKey for () {
    fn cache_key(&self) -> String {
        "undefined".to_string()
    }
}

impl CacheKey for Value {
    fn cache_key(&self) -> String {
        match self {
            Self::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

impl<T: CacheKey + ?Sized> CacheKey for &T {
    fn cache_key(&self) -> String {
        (**self).cache_key()
    }
}

/// Wrapper that caches the results of `func` per distinct argument.
pub struct Memoized<A: ?Sized, R, F> {
    func: F,
    cache: RefCell<HashMap<String, R>>,
    _arg: PhantomData<fn(&A)>,
}

/// Memoize an infallible single-argument function.
pub fn memoize<A, R, F>(func: F) -> Memoized<A, R, F>
where
    A: CacheKey + ?Sized,
    R: Clone,
    F: Fn(&A) -> R,
{
    Memoized::new(func)
}

/// Memoize a fallible single-argument function. Only successes are cached.
pub fn try_memoize<A, R, E, F>(func: F) -> Memoized<A, R, F>
where
    A: CacheKey + ?Sized,
    R: Clone,
    F: Fn(&A) -> Result<R, E>,
{
    Memoized::new(func)
}

impl<A, R, F> Memoized<A, R, F>
where
    A: CacheKey + ?Sized,
    R: Clone,
{
    fn new(func: F) -> Self {
        Self {
            func,
            cache: RefCell::new(HashMap::new()),
            _arg: PhantomData,
        }
    }

    pub fn call(&self, arg: &A) -> R
    where
        F: Fn(&A) -> R,
    {
        let key = arg.cache_key();
        if let Some(hit) = self.lookup(&key) {
            return hit;
        }

        let computed = (self.func)(arg);
        self.cache.borrow_mut().insert(key, computed.clone());
        computed
    }

    /// Errors from `func` are returned as-is and leave the cache untouched,
    /// so the next call with the same argument runs `func` again.
    pub fn try_call<E>(&self, arg: &A) -> Result<R, E>
    where
        F: Fn(&A) -> Result<R, E>,
    {
        let key = arg.cache_key();
        if let Some(hit) = self.lookup(&key) {
            return Ok(hit);
        }

        let computed = (self.func)(arg)?;
        self.cache.borrow_mut().insert(key, computed.clone());
        Ok(computed)
    }

    fn lookup(&self, key: &str) -> Option<R> {
        let hit = self.cache.borrow().get(key).cloned();
        if hit.is_some() {
            trace!(key, "memo hit");
        } else {
            trace!(key, "memo miss");
        }
        hit
    }

    #[must_use]
    pub fn contains(&self, arg: &A) -> bool {
        self.cache.borrow().contains_key(&arg.cache_key())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<A: ?Sized, R, F> fmt::Debug for Memoized<A, R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("cached", &self.cache.borrow().len())
            .finish_non_exhaustive()
    }
}
