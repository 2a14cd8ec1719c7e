use std::cell::RefCell;
use std::rc::Rc;

/// Source of the host's current location string.
pub trait Location {
    fn href(&self) -> String;
}

impl Location for str {
    fn href(&self) -> String {
        self.to_string()
    }
}

impl Location for String {
    fn href(&self) -> String {
        self.clone()
    }
}

impl<T: Location + ?Sized> Location for &T {
    fn href(&self) -> String {
        (**self).href()
    }
}

impl<T: Location + ?Sized> Location for Rc<T> {
    fn href(&self) -> String {
        (**self).href()
    }
}

/// A location that can be navigated after it was handed out.
impl<T: Location> Location for RefCell<T> {
    fn href(&self) -> String {
        self.borrow().href()
    }
}
