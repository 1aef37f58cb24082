use core::fmt;

use bytemuck::Pod;
use linked_core::{DsError, Helper, Stack};
use log::debug;

use crate::helper::{Blob, ErasedHelper, MISSING_HELPER};

/// LIFO stack of fixed-size byte elements.
///
/// ```
/// use erased_ds::{ErasedHelper, ErasedStack};
///
/// let mut s = ErasedStack::new(Some(&ErasedHelper::of::<[f32; 2]>())).unwrap();
/// s.push_pod(&[1.0f32, 2.0]).unwrap();
/// s.push_pod(&[3.0f32, 4.0]).unwrap();
///
/// assert_eq!(s.top_pod::<[f32; 2]>().unwrap(), Some([3.0, 4.0]));
/// assert_eq!(s.pop_pod::<[f32; 2]>().unwrap(), Some([3.0, 4.0]));
/// assert_eq!(s.len(), 1);
/// ```
pub struct ErasedStack {
    inner: Stack<Blob, ErasedHelper>,
}

impl ErasedStack {
    /// Creates an empty stack governed by a copy of `helper`.
    ///
    /// # Errors
    ///
    /// [`DsError::InvalidConfiguration`] when `helper` is `None` or declares a
    /// zero element size.
    pub fn new(helper: Option<&ErasedHelper>) -> Result<Self, DsError> {
        let Some(helper) = helper else {
            debug!("erased stack construction rejected: {}", MISSING_HELPER);
            return Err(MISSING_HELPER);
        };
        Ok(ErasedStack {
            inner: Stack::with_helper(*helper)?,
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

    /// Same as [`len`](ErasedStack::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Pushes a copy of `bytes` on top.
    ///
    /// # Errors
    ///
    /// [`DsError::SizeMismatch`] if `bytes` is not exactly one element long.
    pub fn push(&mut self, bytes: &[u8]) -> Result<(), DsError> {
        self.helper().check_len(bytes.len())?;
        let blob = self.helper().copy_bytes(bytes);
        self.inner.push(blob);
        Ok(())
    }

    /// Removes the top element and hands its bytes over, skipping destroy.
    pub fn pop(&mut self) -> Option<Blob> {
        self.inner.pop()
    }

    /// Removes the top element, copying it into `out` (if given) and then
    /// running the destroy callback on the stored bytes.
    ///
    /// # Errors
    ///
    /// [`DsError::SizeMismatch`] if `out` has the wrong length; the stack is
    /// left unchanged.
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

    pub fn pop_discard(&mut self) -> bool {
        self.inner.pop_discard()
    }

    #[inline]
    pub fn top(&self) -> Option<&[u8]> {
        self.inner.top().map(|b| &b[..])
    }

    #[inline]
    pub fn top_mut(&mut self) -> Option<&mut [u8]> {
        self.inner.top_mut().map(|b| &mut b[..])
    }

    pub fn push_pod<T: Pod>(&mut self, value: &T) -> Result<(), DsError> {
        self.push(bytemuck::bytes_of(value))
    }

    pub fn top_pod<T: Pod>(&self) -> Result<Option<T>, DsError> {
        self.helper().check_len(core::mem::size_of::<T>())?;
        Ok(self.top().map(bytemuck::pod_read_unaligned))
    }

    pub fn pop_pod<T: Pod>(&mut self) -> Result<Option<T>, DsError> {
        let mut value = T::zeroed();
        let popped = self.pop_into(Some(bytemuck::bytes_of_mut(&mut value)))?;
        Ok(popped.then_some(value))
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Tears the stack down, destroying each remaining element once.
    pub fn free(self) {
        self.inner.free();
    }
}

impl Clone for ErasedStack {
    fn clone(&self) -> Self {
        ErasedStack {
            inner: self.inner.clone(),
        }
    }
}

impl fmt::Debug for ErasedStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedStack")
            .field("element_size", &self.element_size())
            .field("elements", &self.inner)
            .finish()
    }
}
