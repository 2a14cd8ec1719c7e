use std::fmt;
use std::rc::Rc;

use fnkit_core::{Memoized, try_memoize};
use tracing::debug;

use crate::decode::{QueryMap, QueryValue, decode_query};
use crate::error::{QueryError, Result};
use crate::location::Location;

type DecodeFn = Box<dyn Fn(&()) -> Result<Rc<QueryMap>>>;

/// Query parameters of a host location, decoded on first use.
///
/// The location is read and decoded once. After the first successful call
/// the same map is returned forever, even if the location has changed since.
/// A failed decode is not remembered, so the next call reads the location
/// again.
pub struct QueryDecoder {
    memo: Memoized<(), Rc<QueryMap>, DecodeFn>,
}

impl QueryDecoder {
    pub fn new<L>(location: L) -> Self
    where
        L: Location + 'static,
    {
        let decode: DecodeFn = Box::new(move |_: &()| {
            let href = location.href();
            debug!(href = %href, "reading query from host location");
            decode_query(&href).map(Rc::new)
        });

        Self {
            memo: try_memoize(decode),
        }
    }

    /// The cached map is shared; repeated calls only bump a reference count.
    pub fn query(&self) -> Result<Rc<QueryMap>> {
        self.memo.try_call::<QueryError>(&())
    }

    /// Single parameter lookup on the cached map.
    pub fn param(&self, name: &str) -> Result<Option<QueryValue>> {
        Ok(self.query()?.get(name).cloned())
    }

    #[must_use]
    pub fn is_decoded(&self) -> bool {
        !self.memo.is_empty()
    }
}

impl fmt::Debug for QueryDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryDecoder")
            .field("decoded", &self.is_decoded())
            .finish()
    }
}
