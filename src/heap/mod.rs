//! Generic binary heap ordered by a caller-supplied comparison.
//!
//! A single [`OrderedHeap`] serves both "smallest first" and "largest first"
//! extraction. The direction is a property of the comparison function, not
//! of the container: the element that compares [`Less`](std::cmp::Ordering::Less)
//! than every other element is the one extracted next.
//!
//! # Examples
//!
//! ```
//! use u_ranking::heap::OrderedHeap;
//!
//! // Largest first: reverse the natural order.
//! let mut heap = OrderedHeap::new(|a: &i32, b: &i32| b.cmp(a));
//! heap.extend([3, 9, 1, 4]);
//!
//! assert_eq!(heap.peek(), Ok(&9));
//! assert_eq!(heap.into_sorted_vec(), vec![9, 4, 3, 1]);
//! ```
//!
//! # References
//!
//! Williams (1964), "Algorithm 232: Heapsort"; Sedgewick & Wayne (2011),
//! *Algorithms*, 4th ed., §2.4.

mod ordered;

pub use ordered::{DrainSorted, OrderedHeap};
