//! Lock-wrapped containers for callers sharing one queue or stack between
//! threads.
//!
//! The engines themselves never lock. [`Shared`] puts any
//! [`LinearContainer`] behind a mutex and pairs it with a condition variable so
//! consumers can block until a producer pushes.
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//! use linked_core::{Queue, sync::Shared};
//!
//! let jobs = Arc::new(Shared::new(Queue::<u32>::new()));
//!
//! let producer = {
//!     let jobs = Arc::clone(&jobs);
//!     thread::spawn(move || {
//!         for i in 0..4 {
//!             jobs.push(i);
//!         }
//!     })
//! };
//!
//! let got: Vec<u32> = (0..4).map(|_| jobs.pop()).collect();
//! producer.join().unwrap();
//! assert_eq!(got, [0, 1, 2, 3]);
//! ```

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::LinearContainer;

#[derive(Debug, Default)]
pub struct Shared<C> {
    inner: Mutex<C>,
    ready: Condvar,
}

impl<C: LinearContainer> Shared<C> {
    pub fn new(container: C) -> Self {
        Shared {
            inner: Mutex::new(container),
            ready: Condvar::new(),
        }
    }

    // A panicking helper never leaves a chain half-linked, so a poisoned lock
    // still guards a consistent container.
    fn lock(&self) -> MutexGuard<'_, C> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Pushes `value` and wakes one blocked consumer.
    pub fn push(&self, value: C::Item) {
        self.lock().push(value);
        self.ready.notify_one();
    }

    /// Pops without waiting.
    pub fn try_pop(&self) -> Option<C::Item> {
        self.lock().pop()
    }

    /// Pops, blocking while the container is empty.
    pub fn pop(&self) -> C::Item {
        let mut guard = self.lock();
        loop {
            if let Some(value) = guard.pop() {
                return value;
            }
            guard = self
                .ready
                .wait(guard)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Pops, blocking for at most `timeout`. Returns `None` if nothing arrived.
    ///
    /// A timeout too large to express as a deadline waits like [`pop`](Shared::pop).
    pub fn pop_timeout(&self, timeout: Duration) -> Option<C::Item> {
        let mut guard = self.lock();
        let mut deadline: Option<Option<Instant>> = None;
        loop {
            if let Some(value) = guard.pop() {
                return Some(value);
            }
            match *deadline.get_or_insert_with(|| Instant::now().checked_add(timeout)) {
                None => {
                    guard = self
                        .ready
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return None;
                    }
                    guard = self
                        .ready
                        .wait_timeout(guard, deadline - now)
                        .unwrap_or_else(PoisonError::into_inner)
                        .0;
                }
            }
        }
    }

    /// Runs `f` with exclusive access to the container.
    pub fn with<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn into_inner(self) -> C {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}
