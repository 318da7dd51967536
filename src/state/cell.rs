//! Read/update access to shared state, independent of the reactive runtime.

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update, WithUntracked};

/// Interior-mutable holder of a `T`.
pub trait StateCell<T> {
    fn read_state<R>(&self, f: impl FnOnce(&T) -> R) -> R;
    fn write_state(&self, f: impl FnOnce(&mut T));
}

/// Reads are untracked: store operations must not subscribe the caller.
impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn read_state<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.with_untracked(f)
    }

    fn write_state(&self, f: impl FnOnce(&mut T)) {
        self.update(f);
    }
}

impl<T> StateCell<T> for RefCell<T> {
    fn read_state<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }

    fn write_state(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.borrow_mut());
    }
}
