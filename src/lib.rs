//! Binary heap with a sentinel-guarded, 1-indexed implicit tree.
//!
//! [`Heap`] takes any ordering predicate and a sentinel value that bounds
//! every element it will hold. [`MinHeap`] and [`MaxHeap`] pre-select both
//! for numeric types.
//!
//! ```
//! use sentinel_heap::{HeapError, MaxHeap};
//!
//! let mut heap = MaxHeap::new();
//! heap.insert(3).unwrap();
//! heap.insert(11).unwrap();
//! assert_eq!(Err(HeapError::OutOfRange), heap.insert(i32::MAX));
//! assert_eq!(Ok(11), heap.extract_maximum());
//! ```

pub mod error;
pub mod heap;
pub mod kind;
pub mod specialized;

pub use error::{HeapError, Result};
pub use heap::Heap;
pub use kind::{Bounded, Kind};
pub use specialized::{MaxHeap, MinHeap};
