//! A single-element owning handle with value semantics.
//!
//! [`ValuePtr<T>`] owns exactly one heap-allocated element and behaves like
//! the value it holds: cloning the handle clones the element onto a fresh
//! allocation, comparison and hashing see through to the element, and the
//! handle dereferences to it everywhere a plain value would be used. It is
//! the single-element counterpart to a vector of owned handles: heap
//! indirection without pointer semantics.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod value;

// -----------------------------------------------------------------------------
// Top-level exports

pub use value::ValuePtr;
