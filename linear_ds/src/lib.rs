//! # Linear DS
//!
//! Queues and stacks with pluggable element contracts, in one place.
//!
//! ## Features
//!
//! - **Typed containers**: `Queue<T, H>` and `Stack<T, H>` with the copy and
//!   destroy behavior chosen at compile time
//! - **Derivable contracts**: `#[derive(Element)]` for structs that own heap data
//! - **Erased containers**: byte-oriented `ErasedQueue` / `ErasedStack` driven
//!   by a runtime `ErasedHelper`
//! - **Shared access**: `Shared<C>` puts any container behind a lock with
//!   blocking pops
//!
//! ## Quick Start
//!
//! ```rust
//! use linear_ds::prelude::*;
//!
//! #[derive(Debug, PartialEq, Element)]
//! #[element(crate = "linear_ds")]
//! struct Entry {
//!     val: f64,
//!     name: String,
//! }
//!
//! let mut stack: Stack<Entry> = Stack::new();
//! stack.push_copy(&Entry { val: 0.5, name: "One".into() });
//! stack.push_copy(&Entry { val: 1.5, name: "Two".into() });
//! assert_eq!(stack.top().map(|e| e.name.as_str()), Some("Two"));
//!
//! let mut bytes = ErasedQueue::new(Some(&ErasedHelper::of::<u16>())).unwrap();
//! bytes.push_pod(&42u16).unwrap();
//! assert_eq!(bytes.pop_pod::<u16>().unwrap(), Some(42));
//! ```

pub mod prelude;

// Typed engines and the element contract
pub use linked_core::{
    Deep, DsError, Element, Helper, LinearContainer, Queue, Shallow, Stack, Typed, linear, queue,
    stack,
};

pub use linked_core::sync::{self, Shared};

// Erased path
pub use erased_ds::{
    Blob, CopyFn, DestroyFn, ErasedHelper, ErasedQueue, ErasedStack, zero_fill,
};

/// `#[derive(Element)]`, re-exported.
///
/// The derive names `::linked_core::Element` unless told otherwise, so
/// structs deriving through this crate add `#[element(crate = "linear_ds")]`:
///
/// ```rust
/// use linear_ds::{Element, Queue};
///
/// #[derive(Debug, PartialEq, Element)]
/// #[element(crate = "linear_ds")]
/// struct Job {
///     id: u32,
///     tags: Vec<String>,
/// }
///
/// let job = Job { id: 7, tags: vec!["build".into()] };
/// let mut q: Queue<Job> = Queue::new();
/// q.push_copy(&job);
/// assert_eq!(q.pop(), Some(job));
/// ```
#[cfg(feature = "derive")]
pub use element_derive::Element;

// Re-export for convenience
pub use bytemuck::{self, Pod, Zeroable};
