//! # Stepvec
//!
//! `stepvec` is a contiguous, dynamically-growable array container with a
//! **fixed-step growth policy**: when the buffer fills up, capacity grows by
//! a configured number of slots instead of doubling. Growth is linear and
//! predictable, and the buffer never shrinks.
//!
//! The surface is small and classic: push/pop at the end, linear search,
//! shift-left removal, index access, and two textbook O(N²) in-place
//! comparison sorts.
//!
//! ## Key Features
//!
//! - **Fixed-step growth**: each expansion adds exactly
//!   [`step`](StepVec::step) slots; a step of `0` freezes the capacity and
//!   turns overflowing pushes into reportable [`CapacityError`]s.
//! - **Live-prefix storage**: a single heap allocation in which only
//!   logically live slots are ever initialized; spare capacity is never
//!   zero-filled, and growth moves elements without cloning them.
//! - **Classic sorts included**: [`bubble_sort`] and [`selection_sort`] work
//!   on any `&mut [T]` with `T: PartialOrd`, and [`StepVec`] sorts its live
//!   prefix in place with the same routines.
//! - **Index-access surface**: element access is by index only (`v[i]`,
//!   [`get`](StepVec::get)); the container exposes no iterators.
//!
//! ## Usage
//!
//! ### The container
//!
//! ```rust
//! use stepvec::StepVec;
//!
//! // 3 slots up front, grow by 2 whenever the buffer fills.
//! let mut v = StepVec::new(3, 2);
//! for n in [1, 2, 3, 4] {
//!     v.push(n);
//! }
//! assert_eq!((v.len(), v.capacity()), (4, 5));
//!
//! // Shift-left removal and linear search.
//! assert_eq!(v.remove(1), Some(2));
//! assert_eq!(v.search(&3), Some(1));
//! ```
//!
//! ### The sorts
//!
//! ```rust
//! use stepvec::prelude::*;
//!
//! let mut data = vec![5, 3, 1, 4];
//! selection_sort(&mut data);
//!
//! assert_eq!(data, vec![1, 3, 4, 5]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Append**: O(1) while capacity remains; a growth event moves the live
//!   prefix once, O(len). With a fixed step the total move cost over N
//!   appends is O(N²/step), so pick a step that matches the expected load,
//!   or pre-allocate and set the step to `0`.
//! - **Search and removal**: linear scans, O(N); removal shifts the tail.
//! - **Sorts**: O(N²) comparisons on every input; there is no early exit
//!   for already-sorted data. For large inputs reach for
//!   `slice::sort_unstable`; these routines exist for small, predictable
//!   workloads.
//!
//! The container assumes exclusive, single-threaded use; Rust's ownership
//! rules enforce that at compile time.

pub mod algo;
pub mod core;
pub use algo::{bubble_sort, double_factorial, factorial, selection_sort};
pub use core::{CapacityError, StepVec};

pub mod prelude {
    pub use crate::algo::{bubble_sort, double_factorial, factorial, selection_sort};
    pub use crate::core::{CapacityError, StepVec};
}
