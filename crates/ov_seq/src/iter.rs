use alloc::boxed::Box;
use alloc::vec;
use core::fmt;
use core::iter::FusedIterator;
use core::slice;

// -----------------------------------------------------------------------------
// Iter

/// Immutable iterator over the elements of an [`OwnPtrVec`] or
/// [`PtrVecView`], in storage order.
///
/// Reverse iteration is the same iterator walked from the back
/// ([`DoubleEndedIterator`]), not a second storage order.
///
/// [`OwnPtrVec`]: crate::OwnPtrVec
/// [`PtrVecView`]: crate::PtrVecView
pub struct Iter<'a, T: ?Sized> {
    inner: slice::Iter<'a, Box<T>>,
}

impl<'a, T: ?Sized> Iter<'a, T> {
    #[inline]
    pub(crate) fn new(handles: &'a [Box<T>]) -> Self {
        Self {
            inner: handles.iter(),
        }
    }
}

impl<'a, T: ?Sized> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|handle| &**handle)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T: ?Sized> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back().map(|handle| &**handle)
    }
}

impl<T: ?Sized> ExactSizeIterator for Iter<'_, T> {}
impl<T: ?Sized> FusedIterator for Iter<'_, T> {}

impl<T: ?Sized> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("len", &self.inner.len()).finish()
    }
}

// -----------------------------------------------------------------------------
// IterMut

/// Mutable iterator over the elements of an [`OwnPtrVec`](crate::OwnPtrVec).
///
/// Yields `&mut T`; the handles themselves stay in place, so element
/// addresses are unaffected.
pub struct IterMut<'a, T: ?Sized> {
    inner: slice::IterMut<'a, Box<T>>,
}

impl<'a, T: ?Sized> IterMut<'a, T> {
    #[inline]
    pub(crate) fn new(handles: &'a mut [Box<T>]) -> Self {
        Self {
            inner: handles.iter_mut(),
        }
    }
}

impl<'a, T: ?Sized> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.next().map(|handle| &mut **handle)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T: ?Sized> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.inner.next_back().map(|handle| &mut **handle)
    }
}

impl<T: ?Sized> ExactSizeIterator for IterMut<'_, T> {}
impl<T: ?Sized> FusedIterator for IterMut<'_, T> {}

impl<T: ?Sized> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("len", &self.inner.len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// IntoIter

/// Consuming iterator over an [`OwnPtrVec`](crate::OwnPtrVec).
///
/// Yields the owned handles; each handle taken out of the iterator is now
/// the caller's to drop. Handles not taken are dropped with the iterator,
/// so every element is still deleted exactly once.
pub struct IntoIter<T: ?Sized> {
    inner: vec::IntoIter<Box<T>>,
}

impl<T: ?Sized> IntoIter<T> {
    #[inline]
    pub(crate) fn new(handles: vec::IntoIter<Box<T>>) -> Self {
        Self { inner: handles }
    }
}

impl<T: ?Sized> Iterator for IntoIter<T> {
    type Item = Box<T>;

    #[inline]
    fn next(&mut self) -> Option<Box<T>> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: ?Sized> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Box<T>> {
        self.inner.next_back()
    }
}

impl<T: ?Sized> ExactSizeIterator for IntoIter<T> {}
impl<T: ?Sized> FusedIterator for IntoIter<T> {}

impl<T: ?Sized> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("len", &self.inner.len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Drain

/// Draining iterator returned by [`OwnPtrVec::drain`](crate::OwnPtrVec::drain).
///
/// Yields the removed handles; anything not taken is dropped when the
/// iterator is dropped, and the remaining elements compact leftward.
pub struct Drain<'a, T: ?Sized> {
    inner: vec::Drain<'a, Box<T>>,
}

impl<'a, T: ?Sized> Drain<'a, T> {
    #[inline]
    pub(crate) fn new(handles: vec::Drain<'a, Box<T>>) -> Self {
        Self { inner: handles }
    }
}

impl<T: ?Sized> Iterator for Drain<'_, T> {
    type Item = Box<T>;

    #[inline]
    fn next(&mut self) -> Option<Box<T>> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: ?Sized> DoubleEndedIterator for Drain<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Box<T>> {
        self.inner.next_back()
    }
}

impl<T: ?Sized> ExactSizeIterator for Drain<'_, T> {}
impl<T: ?Sized> FusedIterator for Drain<'_, T> {}

impl<T: ?Sized> fmt::Debug for Drain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drain")
            .field("len", &self.inner.len())
            .finish()
    }
}
