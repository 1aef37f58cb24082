//! # linked_core
//!
//! Node-chain queue and stack engines over arbitrary element types.
//!
//! Every container carries an element contract ([`Helper`]) that decides how
//! values are copied in and how they are disposed of. The contract is a type
//! parameter, so the usual case is resolved entirely at compile time:
//!
//! ```rust
//! use linked_core::{Queue, Stack};
//!
//! let mut queue: Queue<String> = Queue::new();
//! queue.push("One".to_string());
//! queue.push("Two".to_string());
//! assert_eq!(queue.front().map(String::as_str), Some("One"));
//! assert_eq!(queue.pop().as_deref(), Some("One"));
//!
//! let mut stack: Stack<u32> = Stack::new();
//! stack.extend([1, 2, 3]);
//! assert_eq!(stack.pop(), Some(3));
//! assert_eq!(stack.len(), 2);
//! ```
//!
//! Runtime contracts (fn pointers, byte-sized elements) implement the same
//! [`Helper`] trait and reuse the same engines; see the `erased_ds` crate.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod helper;
pub mod linear;
mod node;
pub mod queue;
pub mod stack;

#[cfg(feature = "std")]
pub mod sync;

pub use error::DsError;
pub use helper::{Deep, Element, Helper, Shallow, Typed};
pub use linear::LinearContainer;
pub use queue::Queue;
pub use stack::Stack;
