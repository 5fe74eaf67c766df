//! Lock-scoped access to the matrix panel

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

/// A matrix panel shared between the view loop and command handling
///
/// Access goes through [`frame`](Self::frame), which hands out the panel
/// for the duration of a synchronous closure. Building a frame and flushing
/// it therefore always happen together: the closure cannot `.await`.
pub struct SharedPanel<M: RawMutex, P> {
    inner: Mutex<M, RefCell<P>>,
}

impl<M: RawMutex, P> SharedPanel<M, P> {
    /// Wrap a panel for shared access
    pub const fn new(panel: P) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(panel)),
        }
    }

    /// Run one frame against the panel
    ///
    /// Must not be called re-entrantly from inside another `frame` closure.
    pub fn frame<R>(&self, f: impl FnOnce(&mut P) -> R) -> R {
        self.inner.lock(|cell| f(&mut *cell.borrow_mut()))
    }

    /// Take the panel back
    pub fn into_inner(self) -> P {
        self.inner.into_inner().into_inner()
    }
}
