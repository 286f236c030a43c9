use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::mem;
use core::ops::{Bound, Index, IndexMut, RangeBounds};

use crate::iter::{Drain, IntoIter, Iter, IterMut};
use crate::sequence::{PtrSequence, seq_eq};
use crate::view::PtrVecView;

// -----------------------------------------------------------------------------
// Growth policy

const GROWTH_NUM: usize = 3;
const GROWTH_DEN: usize = 2;

/// Next capacity under the amortized growth policy: start from
/// `max(2, old)` and multiply by 3/2 (truncating) until `needed` fits.
const fn next_capacity(old: usize, needed: usize) -> usize {
    let mut cap = if old < 2 { 2 } else { old };
    while cap < needed {
        cap = match cap.checked_mul(GROWTH_NUM) {
            Some(scaled) => scaled / GROWTH_DEN,
            None => return needed,
        };
    }
    cap
}

// -----------------------------------------------------------------------------
// OwnPtrVec

/// A growable, contiguous vector of owned heap handles.
///
/// Each element lives on its own allocation behind a [`Box`], so:
///
/// - element addresses are stable across every growth and every mutation
///   that does not remove them (only the handles are relocated);
/// - the element type may be unsized (`OwnPtrVec<dyn Trait>` stores any
///   implementor behind the declared trait), and the unsize coercion at the
///   insertion boundary is the compile-time "same or derived" check;
/// - recursive element types work without indirection tricks at the use
///   site.
///
/// Every handle in the vector is owned exactly once. The vector is
/// move-only; cloning is not implemented because ownership cannot be
/// duplicated implicitly. Ownership of elements leaves the vector only
/// through [`pop`](Self::pop), [`remove`](Self::remove),
/// [`drain`](Self::drain), [`release`](Self::release) or by-value
/// iteration.
///
/// Insertion accepts anything convertible into a handle: a bare value is
/// moved onto the heap, an existing `Box` is absorbed without a new
/// allocation.
///
/// # Examples
///
/// ```
/// use ov_seq::ptr_vec;
///
/// let mut vec = ptr_vec![1, Box::new(2), 3];
/// assert_eq!(vec.len(), 3);
/// assert_eq!(vec[1], 2);
///
/// vec.push_back(4);
/// assert_eq!(vec.pop().as_deref(), Some(&4));
/// ```
///
/// Trait-object storage:
///
/// ```
/// use ov_seq::OwnPtrVec;
///
/// trait Animal {
///     fn legs(&self) -> u32;
/// }
///
/// struct Dog;
/// struct Spider;
///
/// impl Animal for Dog {
///     fn legs(&self) -> u32 { 4 }
/// }
/// impl Animal for Spider {
///     fn legs(&self) -> u32 { 8 }
/// }
///
/// let mut zoo: OwnPtrVec<dyn Animal> = OwnPtrVec::new();
/// zoo.push_back(Box::new(Dog) as Box<dyn Animal>);
/// zoo.push_back(Box::new(Spider) as Box<dyn Animal>);
///
/// assert_eq!(zoo[0].legs(), 4);
/// assert_eq!(zoo[1].legs(), 8);
/// ```
pub struct OwnPtrVec<T: ?Sized> {
    handles: Vec<Box<T>>,
}

impl<T: ?Sized> OwnPtrVec<T> {
    /// Creates an empty vector with zero capacity.
    ///
    /// Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    /// Creates an empty vector with capacity exactly `capacity`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ov_seq::OwnPtrVec;
    ///
    /// let vec: OwnPtrVec<i32> = OwnPtrVec::from_reserve(10);
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 10);
    /// ```
    #[inline]
    pub fn from_reserve(capacity: usize) -> Self {
        Self {
            handles: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Returns the number of handle slots allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.handles.capacity()
    }

    /// Grows capacity to at least `min_capacity`.
    ///
    /// No-op when the current capacity already suffices; never shrinks.
    pub fn reserve(&mut self, min_capacity: usize) {
        if min_capacity > self.handles.capacity() {
            self.handles.reserve_exact(min_capacity - self.handles.len());
        }
    }

    /// Reduces capacity to exactly the current length.
    ///
    /// An empty vector ends up with zero capacity.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.handles.shrink_to_fit();
    }

    /// Appends an element, growing under the amortized ×1.5 policy.
    ///
    /// A bare value is moved onto the heap; an existing `Box` is absorbed
    /// without allocating. Growth relocates handles only, so the address
    /// of every stored element is unchanged afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use ov_seq::OwnPtrVec;
    ///
    /// let mut vec = OwnPtrVec::new();
    /// vec.push_back(1);
    /// vec.push_back(Box::new(2));
    /// assert_eq!(vec.len(), 2);
    /// assert_eq!(vec[1], 2);
    /// ```
    pub fn push_back(&mut self, elem: impl Into<Box<T>>) {
        self.grow_for(1);
        self.handles.push(elem.into());
    }

    /// Inserts an element before `index`, shifting the handles at and after
    /// it one slot right.
    ///
    /// `index == len()` degenerates to [`push_back`](Self::push_back).
    ///
    /// # Panics
    ///
    /// Panics when `index > len()`.
    pub fn insert(&mut self, index: usize, elem: impl Into<Box<T>>) {
        assert!(
            index <= self.handles.len(),
            "insertion index (is {index}) should be <= len (is {})",
            self.handles.len()
        );
        self.grow_for(1);
        self.handles.insert(index, elem.into());
    }

    /// Removes the element at `index` and returns its handle, shifting the
    /// handles after it one slot left.
    ///
    /// Dropping the returned handle deletes the element; keeping it is an
    /// ownership transfer out of the vector.
    ///
    /// # Panics
    ///
    /// Panics when `index >= len()`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Box<T> {
        self.handles.remove(index)
    }

    /// Removes the last element and returns its handle, or `None` when
    /// empty.
    ///
    /// This is the only way the last element leaves the vector: drop the
    /// returned handle to delete it, or keep it to take ownership.
    ///
    /// # Examples
    ///
    /// ```
    /// use ov_seq::ptr_vec;
    ///
    /// let mut vec = ptr_vec![1, 2];
    /// assert_eq!(vec.pop().as_deref(), Some(&2));
    /// assert_eq!(vec.pop().as_deref(), Some(&1));
    /// assert_eq!(vec.pop(), None);
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Option<Box<T>> {
        self.handles.pop()
    }

    /// Removes the elements in `range`, yielding their handles; the
    /// remaining elements compact leftward when the iterator is dropped.
    ///
    /// Handles not taken from the iterator are dropped with it, so removed
    /// elements are still deleted exactly once. An empty range is a no-op.
    ///
    /// # Panics
    ///
    /// Panics when the range is malformed or ends past `len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ov_seq::ptr_vec;
    ///
    /// let mut vec = ptr_vec![10, 20, 30, 40, 50];
    /// let removed: Vec<_> = vec.drain(1..3).collect();
    ///
    /// assert_eq!(removed.len(), 2);
    /// assert_eq!(vec.len(), 3);
    /// assert_eq!(vec[1], 40);
    /// ```
    #[inline]
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, T>
    where
        R: RangeBounds<usize>,
    {
        Drain::new(self.handles.drain(range))
    }

    /// Deletes every element. Capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.handles.clear();
    }

    /// Transfers the entire backing buffer out of the vector.
    ///
    /// The returned buffer keeps both the populated handles and the spare
    /// capacity; the vector resets to empty with zero capacity. Deleting
    /// the elements is now the caller's responsibility (dropping the
    /// returned `Vec` does it).
    ///
    /// # Examples
    ///
    /// ```
    /// use ov_seq::ptr_vec;
    ///
    /// let mut vec = ptr_vec![1, 2, 3];
    /// let buf = vec.release();
    ///
    /// assert_eq!(buf.len(), 3);
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.capacity(), 0);
    /// ```
    #[inline]
    #[must_use = "dropping the returned buffer deletes every element"]
    pub fn release(&mut self) -> Vec<Box<T>> {
        mem::take(&mut self.handles)
    }

    /// Creates a non-owning view of a sub-range of the vector.
    ///
    /// An open upper bound means "to the end".
    ///
    /// # Panics
    ///
    /// Panics when the range is malformed or ends past `len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ov_seq::ptr_vec;
    ///
    /// let vec = ptr_vec![1, 2, 3, 4];
    ///
    /// assert_eq!(vec.view(..).len(), 4);
    /// assert_eq!(vec.view(1..3).len(), 2);
    /// assert_eq!(vec.view(1..)[0], 2);
    /// ```
    pub fn view<R>(&self, range: R) -> PtrVecView<'_, T>
    where
        R: RangeBounds<usize>,
    {
        let bounds: (Bound<usize>, Bound<usize>) =
            (range.start_bound().cloned(), range.end_bound().cloned());
        PtrVecView::new(&self.handles[bounds])
    }

    /// Returns a reference to the element at `index`, or `None` when out
    /// of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.handles.get(index).map(|handle| &**handle)
    }

    /// Returns a mutable reference to the element at `index`, or `None`
    /// when out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.handles.get_mut(index).map(|handle| &mut **handle)
    }

    /// Returns a reference to the first element, or `None` when empty.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.handles.first().map(|handle| &**handle)
    }

    /// Returns a mutable reference to the first element, or `None` when
    /// empty.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.handles.first_mut().map(|handle| &mut **handle)
    }

    /// Returns a reference to the last element, or `None` when empty.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.handles.last().map(|handle| &**handle)
    }

    /// Returns a mutable reference to the last element, or `None` when
    /// empty.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.handles.last_mut().map(|handle| &mut **handle)
    }

    /// Borrows the raw storage: the contiguous run of owned handles.
    ///
    /// The shared borrow is transitive — it grants no mutable access at
    /// any hop, neither to the handles nor to the pointees.
    #[inline]
    pub fn as_slice(&self) -> &[Box<T>] {
        &self.handles
    }

    /// Mutably borrows the raw storage.
    ///
    /// Handles may be reordered or swapped (even with another vector's
    /// storage); each one still owns its element exactly once.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Box<T>] {
        &mut self.handles
    }

    /// Iterates over the elements in storage order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.handles)
    }

    /// Mutably iterates over the elements in storage order.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.handles)
    }

    /// Ensures room for `extra` more handles under the growth policy.
    fn grow_for(&mut self, extra: usize) {
        let needed = match self.handles.len().checked_add(extra) {
            Some(needed) => needed,
            None => panic!("capacity overflow"),
        };
        if needed <= self.handles.capacity() {
            return;
        }
        let target = next_capacity(self.handles.capacity(), needed);
        self.handles.reserve_exact(target - self.handles.len());
    }
}

// -----------------------------------------------------------------------------
// Construction macro

/// Builds an [`OwnPtrVec`] from a list of elements.
///
/// Each element may be a bare value (moved onto the heap) or an existing
/// `Box` (absorbed without a new allocation). The resulting capacity equals
/// the element count.
///
/// # Examples
///
/// ```
/// use ov_seq::ptr_vec;
///
/// let vec = ptr_vec![1, Box::new(2), 3];
///
/// assert_eq!(vec.len(), 3);
/// assert_eq!(vec.capacity(), 3);
/// assert_eq!(vec[0], 1);
/// assert_eq!(vec[1], 2);
/// assert_eq!(vec[2], 3);
/// ```
#[macro_export]
macro_rules! ptr_vec {
    () => {
        $crate::OwnPtrVec::new()
    };
    ($($elem:expr),+ $(,)?) => {{
        let mut vec = $crate::OwnPtrVec::from_reserve(0usize $(+ $crate::ptr_vec_count_one!($elem))+);
        $(vec.push_back($elem);)+
        vec
    }};
}

/// Helper macro used by [`ptr_vec`].
#[macro_export]
#[doc(hidden)]
macro_rules! ptr_vec_count_one {
    ($elem:expr) => {
        1usize
    };
}

// -----------------------------------------------------------------------------
// Trait impls

impl<T: ?Sized> PtrSequence for OwnPtrVec<T> {
    type Elem = T;

    #[inline]
    fn handles(&self) -> &[Box<T>] {
        &self.handles
    }
}

impl<T: ?Sized> Default for OwnPtrVec<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Index<usize> for OwnPtrVec<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.handles[index]
    }
}

impl<T: ?Sized> IndexMut<usize> for OwnPtrVec<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.handles[index]
    }
}

impl<T: ?Sized> From<Vec<Box<T>>> for OwnPtrVec<T> {
    /// Adopts an existing buffer of handles as-is (length and capacity
    /// preserved). The inverse of [`release`](OwnPtrVec::release).
    #[inline]
    fn from(handles: Vec<Box<T>>) -> Self {
        Self { handles }
    }
}

impl<T: ?Sized> Extend<Box<T>> for OwnPtrVec<T> {
    fn extend<I: IntoIterator<Item = Box<T>>>(&mut self, iter: I) {
        for handle in iter {
            self.grow_for(1);
            self.handles.push(handle);
        }
    }
}

impl<T: ?Sized> FromIterator<Box<T>> for OwnPtrVec<T> {
    fn from_iter<I: IntoIterator<Item = Box<T>>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut vec = Self::from_reserve(iter.size_hint().0);
        vec.extend(iter);
        vec
    }
}

impl<'a, T: ?Sized> IntoIterator for &'a OwnPtrVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T: ?Sized> IntoIterator for &'a mut OwnPtrVec<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: ?Sized> IntoIterator for OwnPtrVec<T> {
    type Item = Box<T>;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.handles.into_iter())
    }
}

impl<T: ?Sized + PartialEq> PartialEq for OwnPtrVec<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        seq_eq(self, other)
    }
}

impl<'a, T: ?Sized + PartialEq> PartialEq<PtrVecView<'a, T>> for OwnPtrVec<T> {
    #[inline]
    fn eq(&self, other: &PtrVecView<'a, T>) -> bool {
        seq_eq(self, other)
    }
}

impl<T: ?Sized + Eq> Eq for OwnPtrVec<T> {}

impl<T: ?Sized> fmt::Debug for OwnPtrVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnPtrVec")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::vec::Vec;
    use core::cell::Cell;

    use super::{OwnPtrVec, next_capacity};
    use crate::PtrVecView;

    /// Bumps a counter on drop; used to prove exactly-once deletion.
    struct Tally<'a>(&'a Cell<usize>);

    impl Drop for Tally<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn empty_vector() {
        let vec: OwnPtrVec<i32> = OwnPtrVec::new();
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), 0);
        assert!(vec.is_empty());
        assert!(vec.as_slice().is_empty());
    }

    #[test]
    fn from_reserve_allocates_exactly() {
        let vec: OwnPtrVec<i32> = OwnPtrVec::from_reserve(10);
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), 10);
    }

    #[test]
    fn macro_mixes_values_and_handles() {
        let vec = ptr_vec![1, Box::new(2), 3];
        assert_eq!(vec.len(), 3);
        assert_eq!(vec.capacity(), 3);
        assert_eq!(vec[0], 1);
        assert_eq!(vec[1], 2);
        assert_eq!(vec[2], 3);
    }

    #[test]
    fn growth_policy_sequence() {
        assert_eq!(next_capacity(0, 1), 2);
        assert_eq!(next_capacity(0, 2), 2);
        assert_eq!(next_capacity(2, 3), 3);
        assert_eq!(next_capacity(3, 4), 4);
        assert_eq!(next_capacity(4, 5), 6);
        assert_eq!(next_capacity(6, 7), 9);
        assert_eq!(next_capacity(9, 10), 13);
        // Already-sufficient capacity is never shrunk by the policy.
        assert_eq!(next_capacity(10, 4), 10);
    }

    #[test]
    fn push_grows_by_three_halves() {
        let mut vec = OwnPtrVec::new();
        let mut caps = Vec::new();
        for i in 0..20 {
            vec.push_back(i);
            if caps.last() != Some(&vec.capacity()) {
                caps.push(vec.capacity());
            }
        }
        assert_eq!(caps, [2, 3, 4, 6, 9, 13, 19, 28]);
    }

    #[test]
    fn growth_never_moves_pointees() {
        let mut vec = OwnPtrVec::new();
        vec.push_back(7);
        let addr = &raw const vec[0];

        for i in 0..100 {
            vec.push_back(i);
        }
        assert!(core::ptr::eq(addr, &raw const vec[0]));
        assert_eq!(vec[0], 7);
    }

    #[test]
    fn indexing_matches_iteration() {
        let vec = ptr_vec![1, 2, 3, 4, 5];
        for (i, elem) in vec.iter().enumerate() {
            assert!(core::ptr::eq(elem, &vec[i]));
        }
    }

    #[test]
    fn reverse_iteration() {
        let vec = ptr_vec![1, 2, 3];
        let mut rev = vec.iter().rev();
        assert_eq!(rev.next(), Some(&3));
        assert_eq!(rev.next(), Some(&2));
        assert_eq!(rev.next(), Some(&1));
        assert_eq!(rev.next(), None);
    }

    #[test]
    fn mutation_through_index_and_iter_mut() {
        let mut vec = ptr_vec![1, 2, 3];
        vec[0] = 10;
        for elem in vec.iter_mut() {
            *elem += 1;
        }
        assert_eq!(vec, ptr_vec![11, 3, 4]);
    }

    #[test]
    fn push_then_pop_preserves_other_elements() {
        let mut vec = ptr_vec![1, 2, 3];
        let addrs: Vec<*const i32> = vec.iter().map(|e| &raw const *e).collect();

        vec.push_back(4);
        assert_eq!(vec.pop().as_deref(), Some(&4));

        assert_eq!(vec.len(), 3);
        for (i, addr) in addrs.iter().enumerate() {
            assert!(core::ptr::eq(*addr, &raw const vec[i]));
        }
    }

    #[test]
    fn insert_shifts_right() {
        let mut vec = ptr_vec![1, 2];

        vec.insert(0, 42);
        assert_eq!(vec, ptr_vec![42, 1, 2]);

        vec.insert(1, Box::new(100));
        assert_eq!(vec, ptr_vec![42, 100, 1, 2]);

        // Inserting at len() is a plain append.
        vec.insert(vec.len(), 999);
        assert_eq!(vec, ptr_vec![42, 100, 1, 2, 999]);
    }

    #[test]
    #[should_panic]
    fn insert_past_len_panics() {
        let mut vec = ptr_vec![1];
        vec.insert(2, 5);
    }

    #[test]
    fn remove_returns_the_handle() {
        let mut vec = ptr_vec![1, 2, 3];
        let handle = vec.remove(1);
        assert_eq!(*handle, 2);
        assert_eq!(vec, ptr_vec![1, 3]);
    }

    #[test]
    fn drain_scenario() {
        let mut vec = ptr_vec![10, 20, 30, 40, 50];
        let removed: Vec<i32> = vec.drain(1..3).map(|b| *b).collect();

        assert_eq!(removed, [20, 30]);
        assert_eq!(vec.len(), 3);
        assert_eq!(vec[0], 10);
        assert_eq!(vec[1], 40);
        assert_eq!(vec[2], 50);
    }

    #[test]
    fn drain_empty_range_is_noop() {
        let mut vec = ptr_vec![1, 2];
        drop(vec.drain(1..1));
        assert_eq!(vec.len(), 2);
    }

    #[test]
    fn size_invariant_across_mutations() {
        let mut vec = OwnPtrVec::new();
        for i in 0..50 {
            vec.push_back(i);
            assert!(vec.len() <= vec.capacity());
        }
        drop(vec.drain(10..40));
        assert!(vec.len() <= vec.capacity());
        vec.shrink_to_fit();
        assert_eq!(vec.capacity(), vec.len());
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut vec = ptr_vec![1, 2, 3];
        let cap = vec.capacity();
        vec.clear();
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), cap);
    }

    #[test]
    fn reserve_grows_and_never_shrinks() {
        let mut vec: OwnPtrVec<i32> = OwnPtrVec::new();
        vec.reserve(10);
        assert_eq!(vec.capacity(), 10);
        vec.reserve(1);
        assert_eq!(vec.capacity(), 10);
    }

    #[test]
    fn shrink_to_fit_empty_frees_storage() {
        let mut vec: OwnPtrVec<i32> = OwnPtrVec::from_reserve(10);
        vec.shrink_to_fit();
        assert_eq!(vec.capacity(), 0);
    }

    #[test]
    fn release_transfers_the_buffer() {
        let drops = Cell::new(0);
        let mut vec = OwnPtrVec::new();
        for _ in 0..3 {
            vec.push_back(Tally(&drops));
        }
        let cap = vec.capacity();

        let buf = vec.release();
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), 0);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.capacity(), cap);
        assert_eq!(drops.get(), 0);

        drop(buf);
        assert_eq!(drops.get(), 3);

        // The source must still tear down cleanly.
        drop(vec);
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn every_element_dropped_exactly_once() {
        let drops = Cell::new(0);
        let mut created = 0;

        let mut vec = OwnPtrVec::new();
        for _ in 0..10 {
            vec.push_back(Tally(&drops));
            created += 1;
        }
        vec.insert(3, Tally(&drops));
        created += 1;

        drop(vec.remove(0));
        drop(vec.pop());
        drop(vec.drain(2..5));
        vec.clear();

        drop(vec);
        assert_eq!(drops.get(), created);
    }

    #[test]
    fn pop_transfers_ownership() {
        let drops = Cell::new(0);
        let mut vec = OwnPtrVec::new();
        vec.push_back(Tally(&drops));

        let handle = vec.pop().unwrap();
        assert_eq!(drops.get(), 0);
        drop(vec);
        assert_eq!(drops.get(), 0);
        drop(handle);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn move_leaves_source_unusable_and_target_intact() {
        let vec = ptr_vec![1, 2, 3];
        let addr = &raw const vec[0];

        let moved = vec;
        assert_eq!(moved.len(), 3);
        assert!(core::ptr::eq(addr, &raw const moved[0]));
    }

    #[test]
    fn equality_matrix() {
        let same1 = ptr_vec![1, 2, 3, 4];
        let same2 = ptr_vec![1, 2, 3, 4];
        let diff = ptr_vec![100, 200];
        let empty1: OwnPtrVec<i32> = OwnPtrVec::new();
        let empty2: OwnPtrVec<i32> = OwnPtrVec::new();

        assert_eq!(same1, same1);
        assert_eq!(same1, same2);
        assert_eq!(same2, same1);
        assert_eq!(empty1, empty2);
        assert_ne!(same1, diff);
        assert_ne!(same1, empty1);
    }

    #[test]
    fn equality_against_views() {
        let vec = ptr_vec![1, 2, 3, 4];
        let other = ptr_vec![1, 2, 3, 4];

        assert_eq!(vec, other.view(..));
        assert_eq!(vec, vec.view(..));
        // A shorter prefix view is not equal.
        assert_ne!(vec, vec.view(..2));

        let empty: OwnPtrVec<i32> = OwnPtrVec::new();
        let empty_view: PtrVecView<'_, i32> = PtrVecView::default();
        assert_eq!(empty, empty_view);
    }

    #[test]
    fn extend_and_from_iterator() {
        let mut vec: OwnPtrVec<i32> = (1..4).map(Box::new).collect();
        assert_eq!(vec, ptr_vec![1, 2, 3]);

        vec.extend([Box::new(4), Box::new(5)]);
        assert_eq!(vec, ptr_vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn from_buffer_roundtrip() {
        let mut vec = ptr_vec![1, 2, 3];
        let buf = vec.release();
        let restored = OwnPtrVec::from(buf);
        assert_eq!(restored, ptr_vec![1, 2, 3]);
    }

    #[test]
    fn into_iter_yields_handles() {
        let vec = ptr_vec![1, 2, 3];
        let values: Vec<i32> = vec.into_iter().map(|b| *b).collect();
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn trait_object_elements() {
        trait Animal {
            fn legs(&self) -> u32;
        }

        struct Dog;
        struct Spider;

        impl Animal for Dog {
            fn legs(&self) -> u32 {
                4
            }
        }
        impl Animal for Spider {
            fn legs(&self) -> u32 {
                8
            }
        }

        let mut zoo: OwnPtrVec<dyn Animal> = OwnPtrVec::new();
        zoo.push_back(Box::new(Dog) as Box<dyn Animal>);
        zoo.push_back(Box::new(Spider) as Box<dyn Animal>);

        assert_eq!(zoo.len(), 2);
        assert_eq!(zoo[0].legs(), 4);
        assert_eq!(zoo[1].legs(), 8);

        let legs: u32 = zoo.iter().map(Animal::legs).sum();
        assert_eq!(legs, 12);
    }

    #[test]
    fn recursive_element_type() {
        struct Node {
            children: OwnPtrVec<Node>,
            value: i32,
        }

        let mut root = Node {
            children: OwnPtrVec::new(),
            value: 1,
        };
        root.children.push_back(Node {
            children: OwnPtrVec::new(),
            value: 2,
        });

        assert_eq!(root.value, 1);
        assert_eq!(root.children[0].value, 2);
    }

    #[test]
    fn is_sync_send() {
        fn is_send<T: Send>() {}
        fn is_sync<T: Sync>() {}

        is_send::<OwnPtrVec<i32>>();
        is_sync::<OwnPtrVec<i32>>();
    }
}
