use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use log::{debug, trace};

use crate::node::{self, Link, Node};
use crate::{DsError, Helper, Typed};

/// LIFO stack over a singly-linked node chain.
///
/// The most recently pushed element sits on top; push and pop are O(1).
///
/// # Examples
///
/// ```
/// use linked_core::Stack;
///
/// let mut s: Stack<(f64, String)> = Stack::new();
/// s.push((0.5, "One".to_string()));
/// s.push((1.5, "Two".to_string()));
///
/// assert_eq!(s.top().map(|p| p.1.as_str()), Some("Two"));
/// let (val, name) = s.pop().unwrap();
/// assert_eq!((val, name.as_str()), (1.5, "Two"));
/// assert_eq!(s.len(), 1);
/// ```
pub struct Stack<T, H: Helper<T> = Typed> {
    len: usize,
    top: Link<T>,
    helper: H,
    _owns: PhantomData<Box<Node<T>>>,
}

unsafe impl<T: Send, H: Helper<T> + Send> Send for Stack<T, H> {}
unsafe impl<T: Sync, H: Helper<T> + Sync> Sync for Stack<T, H> {}

impl<T, H: Helper<T> + Default> Stack<T, H> {
    /// Creates an empty stack with the default contract for `H`.
    pub fn new() -> Self {
        Stack {
            len: 0,
            top: None,
            helper: H::default(),
            _owns: PhantomData,
        }
    }
}

impl<T, H: Helper<T>> Stack<T, H> {
    /// Creates an empty stack governed by `helper`.
    ///
    /// # Errors
    ///
    /// Returns [`DsError::InvalidConfiguration`] if the helper fails validation.
    pub fn with_helper(helper: H) -> Result<Self, DsError> {
        if let Err(e) = helper.validate() {
            debug!("stack construction rejected: {}", e);
            return Err(e);
        }
        Ok(Stack {
            len: 0,
            top: None,
            helper,
            _owns: PhantomData,
        })
    }

    #[inline]
    pub fn helper(&self) -> &H {
        &self.helper
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Same as [`len`](Stack::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pushes `value` on top, taking ownership of it.
    pub fn push(&mut self, value: T) {
        self.top = Some(Node::alloc(value, self.top));
        self.len += 1;
    }

    /// Pushes a helper-made copy of `item`.
    pub fn push_copy(&mut self, item: &T) {
        let value = self.helper.copy(item);
        self.push(value);
    }

    /// Removes the top element and hands it to the caller without invoking
    /// the helper's `destroy`.
    pub fn pop(&mut self) -> Option<T> {
        self.top.map(|top| {
            let (value, next) = unsafe { Node::release(top) };
            self.top = next;
            self.len -= 1;
            value
        })
    }

    /// Removes the top element and releases it through the helper.
    pub fn pop_discard(&mut self) -> bool {
        match self.pop() {
            Some(value) => {
                self.helper.destroy(value);
                true
            }
            None => false,
        }
    }

    /// Removes the top element, copying it into `out` (if given) and then
    /// releasing the stored element through the helper.
    pub fn pop_into(&mut self, out: Option<&mut T>) -> bool {
        match self.pop() {
            Some(value) => {
                if let Some(slot) = out {
                    *slot = self.helper.copy(&value);
                }
                self.helper.destroy(value);
                true
            }
            None => false,
        }
    }

    /// Most recently pushed element, valid until the next mutation.
    #[inline]
    pub fn top(&self) -> Option<&T> {
        self.top.map(|ptr| unsafe { &(*ptr.as_ptr()).value })
    }

    #[inline]
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.top.map(|ptr| unsafe { &mut (*ptr.as_ptr()).value })
    }

    pub fn clear(&mut self) {
        let head = self.top.take();
        self.len = 0;
        let helper = &self.helper;
        let released = unsafe { node::release_chain(head, |v| helper.destroy(v)) };
        if released > 0 {
            trace!("stack cleared, {} elements released", released);
        }
    }

    /// Tears the stack down, releasing every remaining element through the
    /// helper exactly once.
    pub fn free(self) {
        drop(self);
    }

    fn iter(&self) -> node::Iter<'_, T> {
        unsafe { node::Iter::new(self.top, self.len) }
    }
}

impl<T, H: Helper<T>> Drop for Stack<T, H> {
    fn drop(&mut self) {
        let head = self.top.take();
        let helper = &self.helper;
        let released = unsafe { node::release_chain(head, |v| helper.destroy(v)) };
        trace!("stack freed, {} elements released", released);
    }
}

impl<T, H: Helper<T> + Default> Default for Stack<T, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, H: Helper<T> + Clone> Clone for Stack<T, H> {
    fn clone(&self) -> Self {
        let mut copy = Stack {
            len: 0,
            top: None,
            helper: self.helper.clone(),
            _owns: PhantomData,
        };
        let copies: Vec<T> = self.iter().map(|v| copy.helper.copy(v)).collect();
        copy.extend(copies.into_iter().rev());
        copy
    }
}

impl<T, H: Helper<T>> Extend<T> for Stack<T, H> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, H: Helper<T> + Default> FromIterator<T> for Stack<T, H> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut s = Self::new();
        s.extend(iter);
        s
    }
}

impl<T: fmt::Debug, H: Helper<T>> fmt::Debug for Stack<T, H> {
    /// Lists elements top first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
