use std::fmt;

use log::{debug, trace};

use crate::error::{HeapError, Result};
use crate::kind::{Bounded, Kind};

/// `order(a, b)` must return `true` when `a` may sit above `b`.
#[derive(Clone)]
pub struct Heap<T, F = fn(&T, &T) -> bool> {
    // storage[0] is the sentinel, live elements are storage[1..].
    storage: Vec<T>,
    order: F,
}

impl<T, F> Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub fn new(sentinel: T, order: F) -> Self {
        Self {
            storage: vec![sentinel],
            order,
        }
    }

    pub fn from_vec(sentinel: T, order: F, elements: Vec<T>) -> Result<Self> {
        let mut heap = Self {
            storage: Vec::with_capacity(elements.len() + 1),
            order,
        };
        heap.storage.push(sentinel);
        if let Some(pos) = elements.iter().position(|value| !heap.admits(value)) {
            debug!("rejected initial element at index {}", pos);
            return Err(HeapError::OutOfRange);
        }
        heap.storage.extend(elements);
        heap.build_heap();
        Ok(heap)
    }

    pub fn set_sentinel(&mut self, sentinel: T) -> Result<()> {
        if !self.bounds_all(&sentinel, &self.order) {
            debug!("rejected sentinel, {} live elements", self.len());
            return Err(HeapError::OutOfRange);
        }
        self.storage[0] = sentinel;
        Ok(())
    }

    /// Replaces sentinel and predicate together, then reorders under them.
    /// Nothing changes if the pair does not bound every live element.
    pub fn set_order(&mut self, sentinel: T, order: F) -> Result<()> {
        if !self.bounds_all(&sentinel, &order) {
            debug!("rejected reorder, {} live elements", self.len());
            return Err(HeapError::OutOfRange);
        }
        self.storage[0] = sentinel;
        self.order = order;
        trace!("reordering {} elements", self.len());
        self.build_heap();
        Ok(())
    }

    // Values move by swapping along the path rather than through a hole.
    pub fn insert(&mut self, value: T) -> Result<()> {
        if !self.admits(&value) {
            debug!("rejected insertion into heap of {} elements", self.len());
            return Err(HeapError::OutOfRange);
        }
        self.storage.push(value);
        let mut i = self.storage.len() - 1;
        // No i > 1 guard: order(storage[0], value) holds for every admitted value.
        while !(self.order)(&self.storage[i / 2], &self.storage[i]) {
            self.storage.swap(i / 2, i);
            i /= 2;
        }
        Ok(())
    }

    pub fn peek_top(&self) -> Result<&T> {
        self.storage.get(1).ok_or(HeapError::Empty)
    }

    /// Removes the top element: the last leaf moves to the root and sinks.
    pub fn extract_top(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(HeapError::Empty);
        }
        let top = self.storage.swap_remove(1);
        self.percolate_down(1);
        Ok(top)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.storage.len() - 1
    }

    pub fn sentinel(&self) -> &T {
        &self.storage[0]
    }

    /// Live elements in tree order, root first.
    pub fn as_slice(&self) -> &[T] {
        &self.storage[1..]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Drains the heap top first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(top) = self.extract_top() {
            sorted.push(top);
        }
        sorted
    }

    fn admits(&self, value: &T) -> bool {
        dominates(&self.order, &self.storage[0], value)
    }

    fn bounds_all(&self, sentinel: &T, order: &F) -> bool {
        self.as_slice()
            .iter()
            .all(|value| dominates(order, sentinel, value))
    }

    fn build_heap(&mut self) {
        let size = self.len();
        trace!("building heap of {} elements", size);
        for i in (1..=size / 2).rev() {
            self.percolate_down(i);
        }
    }

    fn percolate_down(&mut self, p: usize) {
        let size = self.len();
        let mut parent = p;
        while parent * 2 <= size {
            let mut child = parent * 2;
            if child != size
                && (self.order)(&self.storage[child + 1], &self.storage[child])
            {
                child += 1;
            }
            if (self.order)(&self.storage[parent], &self.storage[child]) {
                break;
            }
            self.storage.swap(parent, child);
            parent = child;
        }
    }
}

fn dominates<T, F: Fn(&T, &T) -> bool>(order: &F, sentinel: &T, value: &T) -> bool {
    order(sentinel, value) && !order(value, sentinel)
}

impl<T> Heap<T>
where
    T: Bounded + PartialOrd,
{
    pub fn with_kind(kind: Kind) -> Self {
        Self::new(kind.sentinel(), kind.order())
    }

    pub fn from_vec_with_kind(kind: Kind, elements: Vec<T>) -> Result<Self> {
        Self::from_vec(kind.sentinel(), kind.order(), elements)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Heap<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("sentinel", &self.storage[0])
            .field("elements", &&self.storage[1..])
            .finish()
    }
}
