//! Shared value cells.

use std::cell::RefCell;
use std::rc::Rc;

/// A read/write cell shared between a widget and its host.
///
/// The host owns the value and may change it out-of-band at any time, so
/// widgets re-read through the binding at the start of every computation
/// that depends on it and never cache across gesture callbacks. Writes are
/// whole-value assignments; a 2D value is published in one `set`, never as
/// two independent axis writes.
pub struct Binding<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Binding<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    pub fn set(&self, value: T) {
        *self.inner.borrow_mut() = value;
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.borrow_mut());
    }
}

impl<T: Clone> Binding<T> {
    pub fn get(&self) -> T {
        self.inner.borrow().clone()
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}
