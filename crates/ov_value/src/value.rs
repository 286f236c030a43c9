use alloc::boxed::Box;
use core::borrow::{Borrow, BorrowMut};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut};

// -----------------------------------------------------------------------------
// ValuePtr

/// An owning heap handle with value semantics.
///
/// `ValuePtr<T>` always holds exactly one element on its own allocation.
/// Unlike a plain owning pointer it clones like a value: duplicating the
/// handle duplicates the element onto a fresh allocation, so two handles
/// never share storage and mutating one never affects the other.
///
/// The handle dereferences to the element, so field access, method calls
/// and even call syntax for stored closures go straight through:
///
/// ```
/// use ov_value::ValuePtr;
///
/// let add_one = ValuePtr::new(|x: i32| x + 1);
/// assert_eq!((*add_one)(3), 4);
/// ```
///
/// The element type may be unsized; a `ValuePtr<dyn Trait>` holds any
/// implementor behind the declared trait. Cloning needs the concrete type
/// and is therefore only available for sized, `Clone` elements.
///
/// ```
/// use ov_value::ValuePtr;
///
/// let a = ValuePtr::new(String::from("hello"));
/// let mut b = a.clone();
/// b.push_str(", world");
///
/// assert_eq!(*a, "hello");
/// assert_eq!(*b, "hello, world");
/// ```
pub struct ValuePtr<T: ?Sized> {
    handle: Box<T>,
}

impl<T> ValuePtr<T> {
    /// Moves `value` onto the heap behind a new handle.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            handle: Box::new(value),
        }
    }

    /// Moves the element back out of the handle, freeing the allocation.
    #[inline]
    pub fn into_inner(self) -> T {
        *self.handle
    }

    /// Applies `f` to the element, re-wrapping the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use ov_value::ValuePtr;
    ///
    /// let len = ValuePtr::new(String::from("hello")).map(|s| s.len());
    /// assert_eq!(*len, 5);
    /// ```
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ValuePtr<U> {
        ValuePtr::new(f(*self.handle))
    }
}

impl<T: ?Sized> ValuePtr<T> {
    /// Adopts an existing owning pointer without a new allocation.
    ///
    /// Same as the `From<Box<T>>` impl; this form reads better in method
    /// chains and admits unsized elements.
    #[inline]
    pub fn from_box(handle: Box<T>) -> Self {
        Self { handle }
    }

    /// Transfers the element out as a plain owning pointer.
    #[inline]
    pub fn into_box(self) -> Box<T> {
        self.handle
    }

    /// Borrows the element.
    #[inline]
    pub fn get(&self) -> &T {
        &self.handle
    }

    /// Mutably borrows the element.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.handle
    }
}

// -----------------------------------------------------------------------------
// Trait impls

impl<T: Clone> Clone for ValuePtr<T> {
    /// Clones the element onto a fresh allocation.
    #[inline]
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        (*self.handle).clone_from(&source.handle);
    }
}

impl<T: Default> Default for ValuePtr<T> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for ValuePtr<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: ?Sized> From<Box<T>> for ValuePtr<T> {
    /// Adopts an existing owning pointer without a new allocation.
    ///
    /// This is also the door for unsized elements:
    ///
    /// ```
    /// use ov_value::ValuePtr;
    ///
    /// let answer: ValuePtr<dyn Fn() -> i32> = ValuePtr::from(Box::new(|| 42) as Box<dyn Fn() -> i32>);
    /// assert_eq!((*answer)(), 42);
    /// ```
    #[inline]
    fn from(handle: Box<T>) -> Self {
        Self { handle }
    }
}

impl<T: ?Sized> Deref for ValuePtr<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.handle
    }
}

impl<T: ?Sized> DerefMut for ValuePtr<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.handle
    }
}

impl<T: ?Sized> AsRef<T> for ValuePtr<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.handle
    }
}

impl<T: ?Sized> AsMut<T> for ValuePtr<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut T {
        &mut self.handle
    }
}

impl<T: ?Sized> Borrow<T> for ValuePtr<T> {
    #[inline]
    fn borrow(&self) -> &T {
        &self.handle
    }
}

impl<T: ?Sized> BorrowMut<T> for ValuePtr<T> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut T {
        &mut self.handle
    }
}

impl<T, U> PartialEq<ValuePtr<U>> for ValuePtr<T>
where
    T: ?Sized + PartialEq<U>,
    U: ?Sized,
{
    /// Element equality; two handles are never compared by address.
    #[inline]
    fn eq(&self, other: &ValuePtr<U>) -> bool {
        *self.handle == *other.handle
    }
}

impl<T: ?Sized + Eq> Eq for ValuePtr<T> {}

impl<T, U> PartialOrd<ValuePtr<U>> for ValuePtr<T>
where
    T: ?Sized + PartialOrd<U>,
    U: ?Sized,
{
    #[inline]
    fn partial_cmp(&self, other: &ValuePtr<U>) -> Option<Ordering> {
        (*self.handle).partial_cmp(&other.handle)
    }
}

impl<T: ?Sized + Ord> Ord for ValuePtr<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        (*self.handle).cmp(&other.handle)
    }
}

impl<T: ?Sized + Hash> Hash for ValuePtr<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        (*self.handle).hash(state);
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for ValuePtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.handle, f)
    }
}

impl<T: ?Sized + fmt::Display> fmt::Display for ValuePtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.handle, f)
    }
}

// -----------------------------------------------------------------------------
// Tests
