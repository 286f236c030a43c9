//! Sequence containers for elements that each live on their own heap
//! allocation.
//!
//! Every element is held behind an owned handle ([`Box`]), so elements are
//! address-stable across growth, may be recursive types, and may be stored
//! polymorphically as trait objects under a declared base type.
//!
//! **PtrSequence**
//!
//! [`PtrSequence`] is the read contract shared by every container in the
//! family: a contiguous run of owned handles plus the size/access queries
//! derived from it. Cross-container equality ([`seq_eq`]) is defined once
//! over any two implementors with the same element type.
//!
//! **OwnPtrVec**
//!
//! [`OwnPtrVec<T>`] is the centerpiece: a growable vector of owned handles.
//! Growth relocates only the handles and never touches the pointees, and
//! follows an amortized ×1.5 policy. The vector is move-only; ownership of
//! individual elements leaves it only through [`pop`](OwnPtrVec::pop),
//! [`remove`](OwnPtrVec::remove), [`drain`](OwnPtrVec::drain) or
//! [`release`](OwnPtrVec::release).
//!
//! **PtrVecView**
//!
//! [`PtrVecView<'a, T>`] is a non-owning, read-only window over a contiguous
//! run of handles, typically a sub-range of an [`OwnPtrVec`]. It never
//! allocates or frees, and it compares against vectors and other views by
//! element value.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod iter;
mod own_vec;
mod sequence;
mod view;

// -----------------------------------------------------------------------------
// Top-level exports

pub use iter::{Drain, IntoIter, Iter, IterMut};
pub use own_vec::OwnPtrVec;
pub use sequence::{PtrSequence, seq_eq};
pub use view::PtrVecView;
