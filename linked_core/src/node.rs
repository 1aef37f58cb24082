//! Singly-linked nodes shared by the queue and stack engines.
//!
//! Nodes are heap allocated one per element and handed around as raw
//! [`NonNull`] links. A chain is owned by exactly one container header; the
//! engines are the only code that ever dereferences a link.

use alloc::boxed::Box;
use core::marker::PhantomData;
use core::ptr::NonNull;

pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Allocate a node holding `value`, linked in front of `next`.
    ///
    /// Allocation failure aborts the process through the global allocator's
    /// `handle_alloc_error`.
    pub(crate) fn alloc(value: T, next: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Node { value, next })))
    }

    /// Free a node, returning its value and successor.
    ///
    /// # Safety
    ///
    /// `ptr` must come from [`Node::alloc`], must not have been released yet,
    /// and no reference into the node may outlive this call.
    pub(crate) unsafe fn release(ptr: NonNull<Self>) -> (T, Link<T>) {
        let node = unsafe { Box::from_raw(ptr.as_ptr()) };
        (node.value, node.next)
    }
}

/// Free every node reachable from `head`, handing each value to `dispose`
/// front to back. Returns the number of nodes freed.
///
/// # Safety
///
/// The caller must exclusively own the chain and must not use any link into
/// it afterwards.
pub(crate) unsafe fn release_chain<T>(mut head: Link<T>, mut dispose: impl FnMut(T)) -> usize {
    let mut released = 0;
    while let Some(ptr) = head {
        let (value, next) = unsafe { Node::release(ptr) };
        head = next;
        dispose(value);
        released += 1;
    }
    released
}

/// Borrowing walk over a chain. Internal only: used for `Debug` and `Clone`.
pub(crate) struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    /// # Safety
    ///
    /// `head` must start a well-formed chain of exactly `len` nodes that stays
    /// unmodified for `'a`.
    pub(crate) unsafe fn new(head: Link<T>, len: usize) -> Self {
        Iter {
            next: head,
            remaining: len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|ptr| {
            let node: &'a Node<T> = unsafe { &*ptr.as_ptr() };
            self.next = node.next;
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
