use alloc::boxed::Box;
use core::ptr;

// -----------------------------------------------------------------------------
// PtrSequence

/// The read contract shared by every container in this family.
///
/// An implementor stores its elements behind owned handles in one contiguous
/// run, exposed through [`handles`](Self::handles). The slice length is the
/// logical size; every derived query ([`len`](Self::len), [`get`](Self::get),
/// [`first`](Self::first), ...) is O(1) and provided by the trait.
///
/// The trait exists so that owning and non-owning containers share one shape
/// and can be compared against each other with [`seq_eq`] as long as their
/// element types agree. Generic code should depend on `PtrSequence` instead
/// of a concrete container:
///
/// ```
/// use ov_seq::{PtrSequence, ptr_vec};
///
/// fn total(seq: &impl PtrSequence<Elem = i32>) -> i32 {
///     seq.handles().iter().map(|b| **b).sum()
/// }
///
/// let vec = ptr_vec![1, 2, 3];
/// assert_eq!(total(&vec), 6);
/// assert_eq!(total(&vec.view(1..)), 5);
/// ```
pub trait PtrSequence {
    /// The declared element type.
    ///
    /// The runtime type of an individual element may be anything that
    /// coerces to `Elem` (for trait objects, any implementor).
    type Elem: ?Sized;

    /// Borrows the contiguous run of owned handles backing this container.
    ///
    /// The slice length is the logical size of the container. A container
    /// with zero capacity exposes an empty slice.
    fn handles(&self) -> &[Box<Self::Elem>];

    /// Returns the number of elements.
    #[inline]
    fn len(&self) -> usize {
        self.handles().len()
    }

    /// Returns `true` if the container holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.handles().is_empty()
    }

    /// Returns a conservative upper bound on the number of elements the
    /// container could ever hold.
    ///
    /// This is the representable maximum of the size type, not an
    /// allocation guarantee.
    #[inline]
    fn max_len(&self) -> usize {
        usize::MAX
    }

    /// Returns a reference to the element at `index`, or `None` when
    /// `index >= len()`.
    #[inline]
    fn get(&self, index: usize) -> Option<&Self::Elem> {
        self.handles().get(index).map(|handle| &**handle)
    }

    /// Returns a reference to the first element, or `None` when empty.
    #[inline]
    fn first(&self) -> Option<&Self::Elem> {
        self.handles().first().map(|handle| &**handle)
    }

    /// Returns a reference to the last element, or `None` when empty.
    #[inline]
    fn last(&self) -> Option<&Self::Elem> {
        self.handles().last().map(|handle| &**handle)
    }
}

// -----------------------------------------------------------------------------
// Cross-container equality

/// Compares two sequences of the same element type by value.
///
/// Two sequences are equal when they have the same length and every position
/// holds value-equal elements. Positions whose handles refer to the same
/// allocation pass without calling `==`, and two sequences backed by the
/// identical storage run (same pointer, same length) are equal without
/// inspecting any element. Sequences with different element types do not
/// satisfy the bounds and are rejected at compile time.
///
/// The `PartialEq` implementations between [`OwnPtrVec`](crate::OwnPtrVec)
/// and [`PtrVecView`](crate::PtrVecView) all delegate here.
///
/// ```
/// use ov_seq::{ptr_vec, seq_eq};
///
/// let a = ptr_vec![1, 2, 3];
/// let b = ptr_vec![1, 2, 3];
///
/// assert!(seq_eq(&a, &b));
/// assert!(seq_eq(&a, &a.view(..)));
/// assert!(!seq_eq(&a, &a.view(..2)));
/// ```
pub fn seq_eq<A, B>(a: &A, b: &B) -> bool
where
    A: PtrSequence + ?Sized,
    B: PtrSequence<Elem = A::Elem> + ?Sized,
    A::Elem: PartialEq,
{
    let lhs = a.handles();
    let rhs = b.handles();

    // Identical storage run: same object, or views over the same range.
    if ptr::eq(lhs, rhs) {
        return true;
    }
    if lhs.len() != rhs.len() {
        return false;
    }
    lhs.iter()
        .zip(rhs)
        .all(|(x, y)| ptr::addr_eq(&raw const **x, &raw const **y) || **x == **y)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use super::{PtrSequence, seq_eq};
    use crate::{OwnPtrVec, PtrVecView, ptr_vec};

    fn accepts_sequence<S: PtrSequence<Elem = i32>>(seq: &S) -> usize {
        seq.len()
    }

    #[test]
    fn both_containers_implement_the_shape() {
        let vec = ptr_vec![1, 2, 3];
        let view = vec.view(..);

        assert_eq!(accepts_sequence(&vec), 3);
        assert_eq!(accepts_sequence(&view), 3);
    }

    #[test]
    fn provided_queries() {
        let vec = ptr_vec![10, 20, 30];
        let seq: &dyn PtrSequence<Elem = i32> = &vec;

        assert_eq!(seq.len(), 3);
        assert!(!seq.is_empty());
        assert_eq!(seq.get(0), Some(&10));
        assert_eq!(seq.get(3), None);
        assert_eq!(seq.first(), Some(&10));
        assert_eq!(seq.last(), Some(&30));
        assert_eq!(seq.max_len(), usize::MAX);

        let empty = OwnPtrVec::<i32>::new();
        assert!(empty.handles().is_empty());
        assert_eq!(PtrSequence::first(&empty), None);
        assert_eq!(PtrSequence::last(&empty), None);
    }

    #[test]
    fn identical_storage_fast_path() {
        let vec = ptr_vec![1, 2, 3];

        // A full view shares the vector's storage run exactly.
        assert!(seq_eq(&vec, &vec.view(..)));
        assert!(seq_eq(&vec.view(..), &vec.view(..)));
    }

    #[test]
    fn aliasing_positions_pass_without_value_comparison() {
        // f64 NaN is never value-equal, so only handle identity can make
        // the aliasing comparison succeed.
        let vec = ptr_vec![f64::NAN];
        assert!(seq_eq(&vec, &vec.view(..)));

        let other = ptr_vec![f64::NAN];
        assert!(!seq_eq(&vec, &other));
    }

    #[test]
    fn value_comparison_across_distinct_storage() {
        let a = ptr_vec![1, 2, 3];
        let b = ptr_vec![1, 2, 3];
        let c = ptr_vec![1, 2, 4];
        let shorter = ptr_vec![1, 2];

        assert!(seq_eq(&a, &b));
        assert!(seq_eq(&b, &a));
        assert!(!seq_eq(&a, &c));
        assert!(!seq_eq(&a, &shorter));
    }

    #[test]
    fn view_from_plain_slice() {
        let handles = [Box::new(7), Box::new(8)];
        let view = PtrVecView::new(&handles);
        let vec = ptr_vec![7, 8];

        assert!(seq_eq(&view, &vec));
    }
}
