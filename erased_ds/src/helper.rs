//! Runtime element contract for byte-blob elements.

use alloc::boxed::Box;
use alloc::vec;
use bytemuck::Pod;
use linked_core::{DsError, Helper};

/// One stored element: exactly `element_size` bytes.
pub type Blob = Box<[u8]>;

/// Fills `dst` from `src`; both are `element_size` long.
pub type CopyFn = fn(dst: &mut [u8], src: &[u8]);

/// Releases whatever an element's bytes refer to, before the bytes are freed.
pub type DestroyFn = fn(elem: &mut [u8]);

/// Element size plus optional copy and destroy callbacks.
///
/// Without a copy callback elements are duplicated byte for byte; without a
/// destroy callback nothing runs beyond freeing the node.
///
/// # Example
/// ```
/// use erased_ds::{ErasedHelper, ErasedStack};
///
/// fn scrub(elem: &mut [u8]) {
///     elem.fill(0);
/// }
///
/// let helper = ErasedHelper::new(16).with_destroy(scrub);
/// let stack = ErasedStack::new(Some(&helper)).unwrap();
/// assert_eq!(stack.element_size(), 16);
///
/// assert!(ErasedStack::new(Some(&ErasedHelper::new(0))).is_err());
/// assert!(ErasedStack::new(None).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ErasedHelper {
    element_size: usize,
    copy: Option<CopyFn>,
    destroy: Option<DestroyFn>,
}

impl ErasedHelper {
    /// Flat contract for `element_size`-byte elements.
    pub const fn new(element_size: usize) -> Self {
        ErasedHelper {
            element_size,
            copy: None,
            destroy: None,
        }
    }

    /// Flat contract sized for the Pod type `T`.
    pub const fn of<T: Pod>() -> Self {
        Self::new(core::mem::size_of::<T>())
    }

    /// Flat contract whose destroy zero-fills the element bytes.
    pub const fn scrubbing(element_size: usize) -> Self {
        Self::new(element_size).with_destroy(zero_fill)
    }

    pub const fn with_copy(mut self, copy: CopyFn) -> Self {
        self.copy = Some(copy);
        self
    }

    pub const fn with_destroy(mut self, destroy: DestroyFn) -> Self {
        self.destroy = Some(destroy);
        self
    }

    #[inline]
    pub const fn element_size(&self) -> usize {
        self.element_size
    }

    pub fn copy_fn(&self) -> Option<CopyFn> {
        self.copy
    }

    pub fn destroy_fn(&self) -> Option<DestroyFn> {
        self.destroy
    }

    /// Rejects buffers whose length differs from the element size.
    pub fn check_len(&self, len: usize) -> Result<(), DsError> {
        if len != self.element_size {
            return Err(DsError::SizeMismatch {
                expected: self.element_size,
                found: len,
            });
        }
        Ok(())
    }

    /// Copies `src` into `dst` through the contract. Both must already be
    /// `element_size` long.
    pub(crate) fn copy_into(&self, dst: &mut [u8], src: &[u8]) {
        match self.copy {
            Some(copy) => copy(dst, src),
            None => dst.copy_from_slice(src),
        }
    }

    /// Copies `src` into a new blob through the contract.
    pub(crate) fn copy_bytes(&self, src: &[u8]) -> Blob {
        let mut dst = vec![0u8; self.element_size].into_boxed_slice();
        self.copy_into(&mut dst, src);
        dst
    }
}

impl Helper<Blob> for ErasedHelper {
    fn copy(&self, src: &Blob) -> Blob {
        self.copy_bytes(src)
    }

    fn destroy(&self, mut value: Blob) {
        if let Some(destroy) = self.destroy {
            destroy(&mut value);
        }
    }

    fn validate(&self) -> Result<(), DsError> {
        if self.element_size == 0 {
            return Err(DsError::InvalidConfiguration(
                "element size must be non-zero",
            ));
        }
        Ok(())
    }

    fn element_size(&self) -> usize {
        self.element_size
    }
}

/// Destroy callback that overwrites the element with zeros.
pub fn zero_fill(elem: &mut [u8]) {
    elem.fill(0);
}

pub(crate) const MISSING_HELPER: DsError =
    DsError::InvalidConfiguration("no element helper supplied");
