//! erased_ds: byte-oriented queues and stacks configured at runtime.
//!
//! This crate is the type-erased face of `linked_core`. Elements are opaque
//! byte buffers of a fixed size, and the element contract is an
//! [`ErasedHelper`] value carrying that size plus optional copy and destroy
//! callbacks. Underneath, [`ErasedQueue`] and [`ErasedStack`] are plain
//! `linked_core` engines instantiated with [`Blob`] elements, so both faces
//! share one node-chain implementation.
//!
//! ```rust
//! use erased_ds::{ErasedHelper, ErasedQueue};
//!
//! let helper = ErasedHelper::of::<u32>();
//! let mut q = ErasedQueue::new(Some(&helper)).unwrap();
//!
//! q.push(&7u32.to_ne_bytes()).unwrap();
//! q.push_pod(&9u32).unwrap();
//! assert_eq!(q.len(), 2);
//!
//! let mut out = [0u8; 4];
//! assert!(q.pop_into(Some(&mut out)).unwrap());
//! assert_eq!(u32::from_ne_bytes(out), 7);
//! assert_eq!(q.pop_pod::<u32>().unwrap(), Some(9));
//! assert!(!q.pop_into(None).unwrap());
//! ```
//!
//! ## Features
//! - `std` (default): forwards to `linked_core/std`
//!
//! ## no_std Support
//! ```toml
//! [dependencies]
//! erased_ds = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

// Re-export bytemuck for convenience
pub use bytemuck;

pub mod helper;
pub mod queue;
pub mod stack;

pub use helper::{Blob, CopyFn, DestroyFn, ErasedHelper, zero_fill};
pub use linked_core::DsError;
pub use queue::ErasedQueue;
pub use stack::ErasedStack;
