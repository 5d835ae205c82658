use crate::error::Result;
use crate::heap::Heap;
use crate::kind::{Bounded, Kind};

macro_rules! specialized_heap {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $peek:ident, $extract:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<T> {
            inner: Heap<T>,
        }

        impl<T> $name<T>
        where
            T: Bounded + PartialOrd,
        {
            pub fn new() -> Self {
                Self {
                    inner: Heap::with_kind($kind),
                }
            }

            pub fn from_vec(elements: Vec<T>) -> Result<Self> {
                Heap::from_vec_with_kind($kind, elements).map(|inner| Self { inner })
            }

            pub fn insert(&mut self, value: T) -> Result<()> {
                self.inner.insert(value)
            }

            pub fn peek_top(&self) -> Result<&T> {
                self.inner.peek_top()
            }

            pub fn $peek(&self) -> Result<&T> {
                self.inner.peek_top()
            }

            pub fn extract_top(&mut self) -> Result<T> {
                self.inner.extract_top()
            }

            pub fn $extract(&mut self) -> Result<T> {
                self.inner.extract_top()
            }

            pub fn is_empty(&self) -> bool {
                self.inner.is_empty()
            }

            pub fn len(&self) -> usize {
                self.inner.len()
            }

            pub fn sentinel(&self) -> &T {
                self.inner.sentinel()
            }

            pub fn as_slice(&self) -> &[T] {
                self.inner.as_slice()
            }

            pub fn iter(&self) -> std::slice::Iter<'_, T> {
                self.inner.iter()
            }

            pub fn into_sorted_vec(self) -> Vec<T> {
                self.inner.into_sorted_vec()
            }

            pub fn into_inner(self) -> Heap<T> {
                self.inner
            }
        }

        impl<T> Default for $name<T>
        where
            T: Bounded + PartialOrd,
        {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

specialized_heap!(
    /// Smallest value on top; the sentinel is the type's lowest value.
    MinHeap,
    Kind::Min,
    peek_minimum,
    extract_minimum
);

specialized_heap!(
    /// Largest value on top; the sentinel is the type's highest value.
    MaxHeap,
    Kind::Max,
    peek_maximum,
    extract_maximum
);
