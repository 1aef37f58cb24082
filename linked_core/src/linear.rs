use crate::{Helper, Queue, Stack};

/// Common trait for the linear containers.
///
/// `peek` is the element the next `pop` would return: the front of a
/// [`Queue`], the top of a [`Stack`].
pub trait LinearContainer {
    type Item;

    fn push(&mut self, value: Self::Item);
    fn pop(&mut self) -> Option<Self::Item>;
    fn peek(&self) -> Option<&Self::Item>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, H: Helper<T>> LinearContainer for Queue<T, H> {
    type Item = T;

    #[inline]
    fn push(&mut self, value: T) {
        Queue::push(self, value)
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Queue::pop(self)
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        self.front()
    }

    #[inline]
    fn len(&self) -> usize {
        Queue::len(self)
    }
}

impl<T, H: Helper<T>> LinearContainer for Stack<T, H> {
    type Item = T;

    #[inline]
    fn push(&mut self, value: T) {
        Stack::push(self, value)
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        Stack::pop(self)
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        self.top()
    }

    #[inline]
    fn len(&self) -> usize {
        Stack::len(self)
    }
}
