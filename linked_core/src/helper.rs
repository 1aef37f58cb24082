//! Element contracts.
//!
//! A [`Helper`] tells a container how to duplicate an element when it is
//! copied in (or handed back out through a copying pop) and how to release an
//! element when the container discards it. Containers store their helper by
//! value, so stateless helpers cost nothing and runtime helpers (fn pointers,
//! byte sizes) travel with the container they configure.
//!
//! Three compile-time helpers ship with the crate:
//!
//! - [`Shallow`]: bitwise copy, no cleanup (`T: Copy`)
//! - [`Deep`]: `Clone`-based copy, cleanup through `Drop` (`T: Clone`)
//! - [`Typed`]: defers to the element's own [`Element`] implementation; this is
//!   the default for [`Queue`](crate::Queue) and [`Stack`](crate::Stack)

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::DsError;

/// Per-container element contract.
pub trait Helper<T> {
    /// Duplicate `src` into freshly owned storage.
    fn copy(&self, src: &T) -> T;

    /// Release whatever `value` owns. Called exactly once for every element the
    /// container discards; never called for elements handed out by `pop`.
    fn destroy(&self, value: T) {
        drop(value);
    }

    /// Checked once when a container is built with this helper.
    fn validate(&self) -> Result<(), DsError> {
        Ok(())
    }

    /// Bytes per element.
    fn element_size(&self) -> usize {
        core::mem::size_of::<T>()
    }
}

/// Flat copy for self-contained element types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shallow;

impl<T: Copy> Helper<T> for Shallow {
    #[inline]
    fn copy(&self, src: &T) -> T {
        *src
    }
}

/// Deep copy through `Clone`; cleanup is the element's `Drop`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deep;

impl<T: Clone> Helper<T> for Deep {
    #[inline]
    fn copy(&self, src: &T) -> T {
        src.clone()
    }
}

/// Uses the element type's own [`Element`] contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Typed;

impl<T: Element> Helper<T> for Typed {
    #[inline]
    fn copy(&self, src: &T) -> T {
        src.copy_element()
    }

    #[inline]
    fn destroy(&self, value: T) {
        value.destroy_element()
    }
}

/// Copy and cleanup behavior chosen by the element type itself.
///
/// Self-contained types copy flat and need no cleanup. Types owning secondary
/// storage copy deeply and may run extra teardown in `destroy_element`.
/// Structs can derive this with `#[derive(Element)]` from `element_derive`.
pub trait Element: Sized {
    fn copy_element(&self) -> Self;

    fn destroy_element(self) {
        drop(self);
    }
}

macro_rules! flat_elements {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                #[inline]
                fn copy_element(&self) -> Self {
                    *self
                }
            }
        )*
    };
}

flat_elements!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, ()
);

// Shared references copy the reference, never the referent.
impl<T: ?Sized> Element for &T {
    #[inline]
    fn copy_element(&self) -> Self {
        *self
    }
}

impl Element for String {
    fn copy_element(&self) -> Self {
        self.clone()
    }
}

impl<T: Element> Element for Box<T> {
    fn copy_element(&self) -> Self {
        Box::new((**self).copy_element())
    }

    fn destroy_element(self) {
        (*self).destroy_element()
    }
}

impl<T: Element> Element for Option<T> {
    fn copy_element(&self) -> Self {
        self.as_ref().map(Element::copy_element)
    }

    fn destroy_element(self) {
        if let Some(inner) = self {
            inner.destroy_element();
        }
    }
}

impl<T: Element> Element for Vec<T> {
    fn copy_element(&self) -> Self {
        self.iter().map(Element::copy_element).collect()
    }

    fn destroy_element(self) {
        self.into_iter().for_each(Element::destroy_element);
    }
}

impl<T: Element, const N: usize> Element for [T; N] {
    fn copy_element(&self) -> Self {
        core::array::from_fn(|i| self[i].copy_element())
    }

    fn destroy_element(self) {
        self.into_iter().for_each(Element::destroy_element);
    }
}

impl<A: Element, B: Element> Element for (A, B) {
    fn copy_element(&self) -> Self {
        (self.0.copy_element(), self.1.copy_element())
    }

    fn destroy_element(self) {
        self.0.destroy_element();
        self.1.destroy_element();
    }
}

impl<A: Element, B: Element, C: Element> Element for (A, B, C) {
    fn copy_element(&self) -> Self {
        (
            self.0.copy_element(),
            self.1.copy_element(),
            self.2.copy_element(),
        )
    }

    fn destroy_element(self) {
        self.0.destroy_element();
        self.1.destroy_element();
        self.2.destroy_element();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use core::cell::Cell;

    thread_local! {
        static DESTROYED: Cell<usize> = const { Cell::new(0) };
    }

    #[derive(Debug, PartialEq)]
    struct Tracked(u32);

    impl Element for Tracked {
        fn copy_element(&self) -> Self {
            Tracked(self.0)
        }

        fn destroy_element(self) {
            DESTROYED.with(|d| d.set(d.get() + 1));
        }
    }

    #[test]
    fn shallow_copies_bits() {
        let h = Shallow;
        assert_eq!(Helper::<u64>::copy(&h, &42), 42);
        assert_eq!(Helper::<(u8, f32)>::element_size(&h), 8);
        assert!(Helper::<u8>::validate(&h).is_ok());
    }

    #[test]
    fn deep_copy_is_independent() {
        let h = Deep;
        let mut original = "One".to_string();
        let copy = h.copy(&original);
        original.push_str("-changed");
        assert_eq!(copy, "One");
    }

    #[test]
    fn typed_routes_destroy_to_element() {
        DESTROYED.with(|d| d.set(0));
        let h = Typed;
        let item = Tracked(5);
        let copy = h.copy(&item);
        assert_eq!(copy, Tracked(5));

        h.destroy(copy);
        h.destroy(vec![Tracked(1), Tracked(2)]);
        h.destroy(Some(Box::new(Tracked(3))));
        h.destroy((Tracked(4), 1.5f64));
        assert_eq!(DESTROYED.with(Cell::get), 5);

        drop(item);
        assert_eq!(DESTROYED.with(Cell::get), 5);
    }

    #[test]
    fn references_are_copied_not_cloned() {
        let words = ["One", "Two"];
        let first: &str = words[0];
        let copy = Typed.copy(&first);
        assert!(core::ptr::eq(first, copy));
    }

    #[test]
    fn arrays_and_tuples_copy_deeply() {
        let pair = (0.5f64, "Ten".to_string());
        let copied = pair.copy_element();
        assert_eq!(copied, pair);
        assert_ne!(copied.1.as_ptr(), pair.1.as_ptr());

        let arr = ["a".to_string(), "b".to_string()];
        let copied = arr.copy_element();
        assert_eq!(copied, arr);
    }
}
