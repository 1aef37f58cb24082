use core::fmt;

use bytemuck::Pod;
use linked_core::{DsError, Helper, Queue};
use log::debug;

use crate::helper::{Blob, ErasedHelper, MISSING_HELPER};

/// FIFO queue of fixed-size byte elements.
///
/// Every push copies the caller's bytes in through the helper, so the queue
/// never aliases caller memory.
///
/// # Example
/// ```
/// use erased_ds::{ErasedHelper, ErasedQueue};
///
/// let helper = ErasedHelper::new(3);
/// let mut q = ErasedQueue::new(Some(&helper)).unwrap();
/// q.push(b"abc").unwrap();
/// q.push(b"def").unwrap();
///
/// assert_eq!(q.front(), Some(&b"abc"[..]));
/// assert_eq!(q.back(), Some(&b"def"[..]));
/// assert!(q.push(b"too long").is_err());
/// ```
pub struct ErasedQueue {
    inner: Queue<Blob, ErasedHelper>,
}

impl ErasedQueue {
    /// Creates an empty queue governed by a copy of `helper`.
    ///
    /// # Errors
    ///
    /// [`DsError::InvalidConfiguration`] when `helper` is `None` or declares a
    /// zero element size.
    pub fn new(helper: Option<&ErasedHelper>) -> Result<Self, DsError> {
        let Some(helper) = helper else {
            debug!("erased queue construction rejected: {}", MISSING_HELPER);
            return Err(MISSING_HELPER);
        };
        Ok(ErasedQueue {
            inner: Queue::with_helper(*helper)?,
        })
    }

    #[inline]
    pub fn helper(&self) -> &ErasedHelper {
        self.inner.helper()
    }

    #[inline]
    pub fn element_size(&self) -> usize {
        self.helper().element_size()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Same as [`len`](ErasedQueue::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Appends a copy of `bytes` at the back.
    ///
    /// # Errors
    ///
    /// [`DsError::SizeMismatch`] if `bytes` is not exactly one element long;
    /// the queue is left unchanged.
    pub fn push(&mut self, bytes: &[u8]) -> Result<(), DsError> {
        self.helper().check_len(bytes.len())?;
        let blob = self.helper().copy_bytes(bytes);
        self.inner.push(blob);
        Ok(())
    }

    /// Removes the front element and hands its bytes to the caller without
    /// running the destroy callback.
    pub fn pop(&mut self) -> Option<Blob> {
        self.inner.pop()
    }

    /// Removes the front element, copying it into `out` (if given) and then
    /// running the destroy callback on the stored bytes.
    ///
    /// Returns `Ok(false)` on an empty queue, leaving `out` untouched.
    ///
    /// # Errors
    ///
    /// [`DsError::SizeMismatch`] if `out` has the wrong length; nothing is
    /// removed in that case.
    pub fn pop_into(&mut self, out: Option<&mut [u8]>) -> Result<bool, DsError> {
        if let Some(out) = out.as_deref() {
            self.helper().check_len(out.len())?;
        }
        let Some(blob) = self.inner.pop() else {
            return Ok(false);
        };
        let helper = *self.helper();
        if let Some(out) = out {
            helper.copy_into(out, &blob);
        }
        helper.destroy(blob);
        Ok(true)
    }

    /// Removes and destroys the front element. Returns `false` if empty.
    pub fn pop_discard(&mut self) -> bool {
        self.inner.pop_discard()
    }

    #[inline]
    pub fn front(&self) -> Option<&[u8]> {
        self.inner.front().map(|b| &b[..])
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut [u8]> {
        self.inner.front_mut().map(|b| &mut b[..])
    }

    #[inline]
    pub fn back(&self) -> Option<&[u8]> {
        self.inner.back().map(|b| &b[..])
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut [u8]> {
        self.inner.back_mut().map(|b| &mut b[..])
    }

    /// Pushes the bytes of a Pod value.
    pub fn push_pod<T: Pod>(&mut self, value: &T) -> Result<(), DsError> {
        self.push(bytemuck::bytes_of(value))
    }

    /// Reads the front element as `T`.
    pub fn front_pod<T: Pod>(&self) -> Result<Option<T>, DsError> {
        self.helper().check_len(core::mem::size_of::<T>())?;
        Ok(self.front().map(bytemuck::pod_read_unaligned))
    }

    /// Reads the back element as `T`.
    pub fn back_pod<T: Pod>(&self) -> Result<Option<T>, DsError> {
        self.helper().check_len(core::mem::size_of::<T>())?;
        Ok(self.back().map(bytemuck::pod_read_unaligned))
    }

    /// Pops the front element into a `T` through [`pop_into`](ErasedQueue::pop_into).
    pub fn pop_pod<T: Pod>(&mut self) -> Result<Option<T>, DsError> {
        let mut value = T::zeroed();
        let popped = self.pop_into(Some(bytemuck::bytes_of_mut(&mut value)))?;
        Ok(popped.then_some(value))
    }

    /// Destroys every element, leaving the queue empty and reusable.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Tears the queue down, destroying each remaining element once.
    pub fn free(self) {
        self.inner.free();
    }
}

impl Clone for ErasedQueue {
    fn clone(&self) -> Self {
        ErasedQueue {
            inner: self.inner.clone(),
        }
    }
}

impl fmt::Debug for ErasedQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedQueue")
            .field("element_size", &self.element_size())
            .field("elements", &self.inner)
            .finish()
    }
}
