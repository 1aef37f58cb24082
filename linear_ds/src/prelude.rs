//! Convenience re-exports for common usage

pub use crate::{Deep, DsError, Element, Helper, LinearContainer, Queue, Shallow, Stack, Typed};

pub use crate::{ErasedHelper, ErasedQueue, ErasedStack};

pub use crate::Shared;

// Bytemuck utilities
pub use bytemuck::{Pod, Zeroable};
