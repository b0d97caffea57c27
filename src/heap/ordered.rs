//! Array-backed heap implementation.

use crate::error::HeapError;
use std::cmp::Ordering;
use std::fmt;

/// Priority container that always yields its most extreme element.
///
/// `compare(a, b) == Ordering::Less` means `a` is extracted before `b`.
/// The comparison must be a total order over the inserted elements;
/// otherwise extraction order is unspecified (but no element is lost).
///
/// # Complexity
///
/// | Operation | Cost |
/// |-----------|------|
/// | `insert` | O(log n) amortized |
/// | `extract` / `pop` | O(log n) |
/// | `peek`, `len`, `is_empty` | O(1) |
/// | `from_vec` | O(n) |
pub struct OrderedHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    items: Vec<T>,
    compare: F,
}

impl<T, F> OrderedHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty heap.
    pub fn new(compare: F) -> Self {
        Self {
            items: Vec::new(),
            compare,
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, compare: F) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            compare,
        }
    }

    /// Builds a heap from existing elements with bottom-up heapify.
    pub fn from_vec(items: Vec<T>, compare: F) -> Self {
        let mut heap = Self { items, compare };
        let len = heap.items.len();
        for i in (0..len / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    /// Adds an element.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        let last = self.items.len() - 1;
        self.sift_up(last);
    }

    /// Removes and returns the extreme element.
    ///
    /// # Errors
    ///
    /// [`HeapError::Underflow`] if the heap is empty.
    pub fn extract(&mut self) -> Result<T, HeapError> {
        self.pop().ok_or(HeapError::Underflow)
    }

    /// Removes and returns the extreme element, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let top = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        top
    }

    /// Returns the extreme element without removing it.
    ///
    /// # Errors
    ///
    /// [`HeapError::Underflow`] if the heap is empty.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.items.first().ok_or(HeapError::Underflow)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the heap, yielding elements in extraction order.
    pub fn drain_sorted(self) -> DrainSorted<T, F> {
        DrainSorted { heap: self }
    }

    /// Consumes the heap and returns its elements in extraction order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let len = self.len();
        let mut out = Vec::with_capacity(len);
        out.extend(self.drain_sorted());
        out
    }

    /// Whether `a` should sit above `b`.
    fn wins(&self, a: usize, b: usize) -> bool {
        (self.compare)(&self.items[a], &self.items[b]) == Ordering::Less
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.wins(i, parent) {
                break;
            }
            self.items.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.wins(right, left) {
                right
            } else {
                left
            };
            if !self.wins(child, i) {
                break;
            }
            self.items.swap(i, child);
            i = child;
        }
    }
}

impl<T, F> Extend<T> for OrderedHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.items.reserve(iter.size_hint().0);
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for OrderedHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedHeap")
            .field("len", &self.items.len())
            .field("top", &self.items.first())
            .finish()
    }
}

/// Iterator returned by [`OrderedHeap::drain_sorted`].
pub struct DrainSorted<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    heap: OrderedHeap<T, F>,
}

impl<T, F> Iterator for DrainSorted<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, F> ExactSizeIterator for DrainSorted<T, F> where F: Fn(&T, &T) -> Ordering {}
