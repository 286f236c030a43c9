use alloc::boxed::Box;
use core::fmt;
use core::ops::{Bound, Index, RangeBounds};

use crate::iter::Iter;
use crate::own_vec::OwnPtrVec;
use crate::sequence::{PtrSequence, seq_eq};

// -----------------------------------------------------------------------------
// PtrVecView

/// A non-owning, read-only window over a contiguous run of owned handles.
///
/// A view borrows the handles, typically a sub-range of an
/// [`OwnPtrVec`]; it never allocates, frees, or mutates. Dropping a view
/// leaves the underlying elements untouched. The borrow pins the source for
/// the view's lifetime, so the window cannot dangle and cannot observe a
/// relocation of the handle run.
///
/// Views are `Copy`: passing one around duplicates the window, never the
/// elements.
///
/// # Examples
///
/// ```
/// use ov_seq::ptr_vec;
///
/// let vec = ptr_vec![1, 2, 3, 4, 5];
/// let mid = vec.view(1..4);
///
/// assert_eq!(mid.len(), 3);
/// assert_eq!(mid[0], 2);
/// assert_eq!(mid.last(), Some(&4));
///
/// // A view of a view narrows the window further.
/// assert_eq!(mid.view(1..)[0], 3);
/// ```
pub struct PtrVecView<'a, T: ?Sized> {
    handles: &'a [Box<T>],
}

impl<'a, T: ?Sized> PtrVecView<'a, T> {
    /// Creates a view over an existing run of handles.
    #[inline]
    pub const fn new(handles: &'a [Box<T>]) -> Self {
        Self { handles }
    }

    /// Creates an empty view borrowing nothing.
    #[inline]
    pub const fn empty() -> Self {
        Self { handles: &[] }
    }

    /// Returns the number of elements in the window.
    #[inline]
    pub const fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns `true` if the window covers no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Returns a reference to the element at `index`, or `None` when out
    /// of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.handles.get(index).map(|handle| &**handle)
    }

    /// Returns a reference to the first element, or `None` when empty.
    #[inline]
    pub fn first(&self) -> Option<&'a T> {
        self.handles.first().map(|handle| &**handle)
    }

    /// Returns a reference to the last element, or `None` when empty.
    #[inline]
    pub fn last(&self) -> Option<&'a T> {
        self.handles.last().map(|handle| &**handle)
    }

    /// Narrows the view to a sub-range of itself.
    ///
    /// # Panics
    ///
    /// Panics when the range is malformed or ends past `len()`.
    pub fn view<R>(&self, range: R) -> PtrVecView<'a, T>
    where
        R: RangeBounds<usize>,
    {
        let bounds: (Bound<usize>, Bound<usize>) =
            (range.start_bound().cloned(), range.end_bound().cloned());
        PtrVecView::new(&self.handles[bounds])
    }

    /// Borrows the underlying run of handles.
    #[inline]
    pub const fn as_slice(&self) -> &'a [Box<T>] {
        self.handles
    }

    /// Iterates over the elements in storage order.
    #[inline]
    pub fn iter(&self) -> Iter<'a, T> {
        Iter::new(self.handles)
    }
}

// -----------------------------------------------------------------------------
// Trait impls

impl<T: ?Sized> PtrSequence for PtrVecView<'_, T> {
    type Elem = T;

    #[inline]
    fn handles(&self) -> &[Box<T>] {
        self.handles
    }
}

impl<T: ?Sized> Default for PtrVecView<'_, T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

// Manual impls: a view is a window, copyable regardless of `T`.
impl<T: ?Sized> Clone for PtrVecView<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for PtrVecView<'_, T> {}

impl<T: ?Sized> Index<usize> for PtrVecView<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.handles[index]
    }
}

impl<'a, 'b, T: ?Sized> IntoIterator for &'b PtrVecView<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T: ?Sized> From<&'a [Box<T>]> for PtrVecView<'a, T> {
    #[inline]
    fn from(handles: &'a [Box<T>]) -> Self {
        Self::new(handles)
    }
}

impl<'a, T: ?Sized> From<&'a OwnPtrVec<T>> for PtrVecView<'a, T> {
    /// A full-range view of the vector.
    #[inline]
    fn from(vec: &'a OwnPtrVec<T>) -> Self {
        Self::new(vec.as_slice())
    }
}

impl<T: ?Sized + PartialEq> PartialEq for PtrVecView<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        seq_eq(self, other)
    }
}

impl<T: ?Sized + PartialEq> PartialEq<OwnPtrVec<T>> for PtrVecView<'_, T> {
    #[inline]
    fn eq(&self, other: &OwnPtrVec<T>) -> bool {
        seq_eq(self, other)
    }
}

impl<T: ?Sized + Eq> Eq for PtrVecView<'_, T> {}

impl<T: ?Sized> fmt::Debug for PtrVecView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PtrVecView")
            .field("len", &self.len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests
