use alloc::boxed::Box;
use core::fmt;
use core::marker::PhantomData;

use log::{debug, trace};

use crate::node::{self, Link, Node};
use crate::{DsError, Helper, Typed};

/// FIFO queue over a singly-linked node chain.
///
/// Elements are pushed at the back and popped from the front, both in O(1).
/// The queue's [`Helper`] decides how elements are copied in through
/// [`push_copy`](Queue::push_copy) and how discarded elements are released.
///
/// # Examples
///
/// ```
/// use linked_core::Queue;
///
/// let words = ["One", "Two", "Three"];
/// let mut q: Queue<&str> = Queue::new();
/// for w in &words {
///     q.push_copy(w);
/// }
///
/// assert_eq!(q.len(), 3);
/// assert_eq!(q.front(), Some(&"One"));
/// assert_eq!(q.back(), Some(&"Three"));
///
/// assert_eq!(q.pop(), Some("One"));
/// assert_eq!(q.front(), Some(&"Two"));
/// ```
///
/// ## Custom contracts
///
/// ```
/// use linked_core::{Deep, Queue};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Job { id: u32, name: String }
///
/// let mut q = Queue::with_helper(Deep).unwrap();
/// let mut job = Job { id: 1, name: "build".into() };
/// q.push_copy(&job);
///
/// // The queue holds its own copy.
/// job.name.push_str("-edited");
/// assert_eq!(q.front().unwrap().name, "build");
/// ```
pub struct Queue<T, H: Helper<T> = Typed> {
    len: usize,
    front: Link<T>,
    back: Link<T>,
    helper: H,
    _owns: PhantomData<Box<Node<T>>>,
}

// The queue owns its chain outright; no link is ever shared between queues.
unsafe impl<T: Send, H: Helper<T> + Send> Send for Queue<T, H> {}
unsafe impl<T: Sync, H: Helper<T> + Sync> Sync for Queue<T, H> {}

impl<T, H: Helper<T> + Default> Queue<T, H> {
    /// Creates an empty queue with the default contract for `H`.
    pub fn new() -> Self {
        Queue {
            len: 0,
            front: None,
            back: None,
            helper: H::default(),
            _owns: PhantomData,
        }
    }
}

impl<T, H: Helper<T>> Queue<T, H> {
    /// Creates an empty queue governed by `helper`.
    ///
    /// # Errors
    ///
    /// Returns [`DsError::InvalidConfiguration`] if the helper rejects itself
    /// (for example a runtime contract with a zero element size).
    pub fn with_helper(helper: H) -> Result<Self, DsError> {
        if let Err(e) = helper.validate() {
            debug!("queue construction rejected: {}", e);
            return Err(e);
        }
        Ok(Queue {
            len: 0,
            front: None,
            back: None,
            helper,
            _owns: PhantomData,
        })
    }

    /// The contract this queue was built with.
    #[inline]
    pub fn helper(&self) -> &H {
        &self.helper
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Same as [`len`](Queue::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `value` at the back, taking ownership of it.
    pub fn push(&mut self, value: T) {
        let node = Node::alloc(value, None);
        match self.back {
            None => self.front = Some(node),
            Some(back) => unsafe { (*back.as_ptr()).next = Some(node) },
        }
        self.back = Some(node);
        self.len += 1;
    }

    /// Appends a copy of `item` made by the queue's helper. The caller keeps
    /// `item`; later changes to it do not reach the stored element.
    pub fn push_copy(&mut self, item: &T) {
        let value = self.helper.copy(item);
        self.push(value);
    }

    /// Removes the front element and hands it to the caller.
    ///
    /// Ownership moves out with the value, so the helper's `destroy` is not
    /// invoked. Returns `None` on an empty queue without touching any state.
    pub fn pop(&mut self) -> Option<T> {
        self.front.map(|front| {
            let (value, next) = unsafe { Node::release(front) };
            self.front = next;
            if self.front.is_none() {
                self.back = None;
            }
            self.len -= 1;
            value
        })
    }

    /// Removes the front element and releases it through the helper.
    ///
    /// Returns `false` if the queue was empty.
    pub fn pop_discard(&mut self) -> bool {
        match self.pop() {
            Some(value) => {
                self.helper.destroy(value);
                true
            }
            None => false,
        }
    }

    /// Removes the front element, writing a helper-made copy into `out` and
    /// releasing the stored element through the helper.
    ///
    /// With `out == None` this behaves like [`pop_discard`](Queue::pop_discard).
    /// On an empty queue `out` is left untouched and `false` is returned.
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

    /// Oldest element, valid until the next mutation.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.front.map(|ptr| unsafe { &(*ptr.as_ptr()).value })
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.front.map(|ptr| unsafe { &mut (*ptr.as_ptr()).value })
    }

    /// Newest element, valid until the next mutation.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.back.map(|ptr| unsafe { &(*ptr.as_ptr()).value })
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.back.map(|ptr| unsafe { &mut (*ptr.as_ptr()).value })
    }

    /// Releases every element through the helper, leaving an empty queue.
    pub fn clear(&mut self) {
        let head = self.front.take();
        self.back = None;
        self.len = 0;
        let helper = &self.helper;
        let released = unsafe { node::release_chain(head, |v| helper.destroy(v)) };
        if released > 0 {
            trace!("queue cleared, {} elements released", released);
        }
    }

    /// Tears the queue down, releasing every remaining element through the
    /// helper exactly once.
    pub fn free(self) {
        drop(self);
    }

    fn iter(&self) -> node::Iter<'_, T> {
        unsafe { node::Iter::new(self.front, self.len) }
    }

    #[cfg(test)]
    fn check_links(&self) {
        assert_eq!(self.front.is_none(), self.len == 0);
        assert_eq!(self.back.is_none(), self.len == 0);
        assert_eq!(self.iter().count(), self.len);
        if let Some(back) = self.back {
            assert!(unsafe { (*back.as_ptr()).next.is_none() });
            assert!(core::ptr::eq(self.iter().last().unwrap(), self.back().unwrap()));
        }
    }
}

impl<T, H: Helper<T>> Drop for Queue<T, H> {
    fn drop(&mut self) {
        let head = self.front.take();
        self.back = None;
        let helper = &self.helper;
        let released = unsafe { node::release_chain(head, |v| helper.destroy(v)) };
        trace!("queue freed, {} elements released", released);
    }
}

impl<T, H: Helper<T> + Default> Default for Queue<T, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, H: Helper<T> + Clone> Clone for Queue<T, H> {
    /// Copies every element through the helper, front to back.
    fn clone(&self) -> Self {
        let mut copy = Queue {
            len: 0,
            front: None,
            back: None,
            helper: self.helper.clone(),
            _owns: PhantomData,
        };
        for value in self.iter() {
            copy.push_copy(value);
        }
        copy
    }
}

impl<T, H: Helper<T>> Extend<T> for Queue<T, H> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, H: Helper<T> + Default> FromIterator<T> for Queue<T, H> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut q = Self::new();
        q.extend(iter);
        q
    }
}

impl<T: fmt::Debug, H: Helper<T>> fmt::Debug for Queue<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
