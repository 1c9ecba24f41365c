//! Core container type for stepvec.
//!
//! This module defines:
//! - [`StepVec`]: the fixed-step growable array.
//! - [`CapacityError`]: reported when an insertion needs room while growth
//!   is disabled.

use std::fmt;
use std::mem::MaybeUninit;
use std::ops::{Index, IndexMut};
use std::ptr;
use std::slice;

use crate::algo;

/// A contiguous growable array with a fixed-step growth policy.
///
/// `StepVec<T>` owns a single heap allocation and tracks a logical length
/// over it: elements at indices `[0, len)` are live, the remaining capacity
/// is uninitialized spare room. When an insertion finds the buffer full, the
/// capacity grows by exactly [`step`](Self::step) slots rather than by
/// doubling, and it never shrinks, so memory use stays linear in the step.
///
/// Setting the step to `0` disables growth and turns the container into a
/// fixed-capacity vector: [`try_push`](Self::try_push) reports
/// [`CapacityError`] and [`push`](Self::push) panics once the capacity is
/// used up.
///
/// Element access is by index only (`v[i]`, [`get`](Self::get)); the
/// container exposes no iterators.
///
/// # Examples
///
/// ```rust
/// use stepvec::StepVec;
///
/// let mut v = StepVec::new(3, 2);
/// for n in [1, 2, 3, 4] {
///     v.push(n);
/// }
///
/// // The fourth push grew the buffer by one step: 3 + 2 slots.
/// assert_eq!(v.capacity(), 5);
/// assert_eq!(v.len(), 4);
/// assert_eq!(v[3], 4);
/// ```
pub struct StepVec<T> {
    /// Owned storage; `buf.len()` is the capacity. Slots at `[len, capacity)`
    /// are uninitialized and never read as `T`.
    buf: Box<[MaybeUninit<T>]>,
    /// Number of live elements; the prefix `[0, len)` is initialized.
    len: usize,
    /// Capacity increment applied on overflow; `0` disables growth.
    step: usize,
}

impl<T> StepVec<T> {
    /// Creates a container with `capacity` pre-allocated slots and the given
    /// growth step.
    ///
    /// No allocation is performed when `capacity` is `0`; the first growing
    /// push then allocates `step` slots.
    pub fn new(capacity: usize, step: usize) -> Self {
        Self {
            buf: Box::new_uninit_slice(capacity),
            len: 0,
            step,
        }
    }

    /// Creates a container with `capacity` slots and the default step of 1.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity, 1)
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the container holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Current growth step.
    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Sets the growth step applied on the next overflow; `0` disables
    /// growth from that point on.
    #[inline]
    pub fn set_step(&mut self, step: usize) {
        self.step = step;
    }

    /// Appends `value` at the end, growing the buffer by one step first if
    /// it is full. O(1) except when a grow occurs; each grow moves the live
    /// prefix once.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is full and growth is disabled (`step == 0`).
    /// Use [`try_push`](Self::try_push) to handle that case instead.
    pub fn push(&mut self, value: T) {
        if self.try_push(value).is_err() {
            panic!(
                "capacity exhausted: all {} slots are in use and growth is disabled (step = 0)",
                self.capacity(),
            );
        }
    }

    /// Appends `value` at the end, reporting failure instead of panicking.
    ///
    /// On a full buffer this grows by one step; if growth is disabled
    /// (`step == 0`) the value is handed back inside [`CapacityError`] and
    /// the container is left exactly as it was.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stepvec::StepVec;
    ///
    /// let mut v = StepVec::new(1, 0);
    /// assert!(v.try_push('a').is_ok());
    /// assert_eq!(v.try_push('b').unwrap_err().into_inner(), 'b');
    /// assert_eq!(v.len(), 1);
    /// ```
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.len == self.capacity() {
            if self.step == 0 {
                return Err(CapacityError::new(value));
            }
            self.expand();
        }
        // Safety: `len < capacity` after the check above, and the slot at
        // `len` is spare room holding no live value.
        unsafe { self.as_mut_ptr().add(self.len).write(value) };
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last element, or `None` if the container is
    /// empty. Never shrinks the buffer. O(1).
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // Safety: the slot at the decremented `len` was live; reading it out
        // moves the value, and the slot is spare room from here on.
        Some(unsafe { self.as_ptr().add(self.len).read() })
    }

    /// Removes and returns the element at `index`, shifting every later
    /// element one position left. O(N) in the number of shifted elements.
    ///
    /// An out-of-range `index` is not an error: the call returns `None` and
    /// leaves the container unchanged.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        unsafe {
            let hole = self.as_mut_ptr().add(index);
            // Safety: `index < len`, so `hole` points at a live element.
            let value = hole.read();
            // Shift the tail left over the hole; the vacated slot at the end
            // becomes spare room.
            ptr::copy(hole.add(1), hole, self.len - index - 1);
            self.len -= 1;
            Some(value)
        }
    }

    /// Returns the index of the first element equal to `value`, or `None`
    /// if no element matches. Linear scan over the live prefix, O(N).
    pub fn search(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().position(|item| item == value)
    }

    /// Returns a reference to the element at `index`, or `None` when
    /// `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Mutable counterpart of [`get`](Self::get).
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Drops all live elements and resets the length to 0. The allocation
    /// is kept: capacity and step are unchanged.
    pub fn clear(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        // Zero the length before dropping so a panicking destructor cannot
        // lead to a second drop of the same prefix.
        self.len = 0;
        // Safety: `live` covers exactly the previously live prefix.
        unsafe { ptr::drop_in_place(live) };
    }

    /// Sorts the live prefix ascending with [`algo::bubble_sort`].
    pub fn bubble_sort(&mut self)
    where
        T: PartialOrd,
    {
        algo::bubble_sort(self.as_mut_slice());
    }

    /// Sorts the live prefix ascending with [`algo::selection_sort`].
    pub fn selection_sort(&mut self)
    where
        T: PartialOrd,
    {
        algo::selection_sort(self.as_mut_slice());
    }

    /// Grows the buffer by one step. Callers handle `step == 0` before
    /// getting here; growth itself never fails short of allocation failure.
    fn expand(&mut self) {
        debug_assert!(self.step > 0, "expand called with growth disabled");
        let Some(new_capacity) = self.capacity().checked_add(self.step) else {
            panic!("capacity overflow");
        };
        let mut fresh = Box::new_uninit_slice(new_capacity);
        // Safety: bitwise-move the live prefix into the fresh allocation.
        // The old box is released below without running element destructors
        // (`MaybeUninit` never drops its contents), so every value keeps
        // exactly one owner.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), fresh.as_mut_ptr(), self.len);
        }
        self.buf = fresh;
    }

    #[inline]
    fn as_ptr(&self) -> *const T {
        self.buf.as_ptr().cast()
    }

    #[inline]
    fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr().cast()
    }

    /// View of the live prefix. Kept private: the public surface is index
    /// access only.
    #[inline]
    fn as_slice(&self) -> &[T] {
        // Safety: the container invariant keeps `[0, len)` initialized.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        // Safety: as above; `&mut self` guarantees exclusive access.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), len) }
    }
}

impl<T> Drop for StepVec<T> {
    fn drop(&mut self) {
        // Drop the live prefix; releasing the allocation itself is the boxed
        // slice's job.
        let live: *mut [T] = self.as_mut_slice();
        unsafe { ptr::drop_in_place(live) };
    }
}

impl<T> Default for StepVec<T> {
    /// An empty container with no allocation and the default step of 1.
    fn default() -> Self {
        Self::new(0, 1)
    }
}

impl<T> Index<usize> for StepVec<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`. Only the logical length bounds the check;
    /// spare capacity is never addressable.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for StepVec<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: Clone> Clone for StepVec<T> {
    /// Clones the live elements into a container with the same capacity and
    /// step.
    fn clone(&self) -> Self {
        let mut fresh = Self::new(self.capacity(), self.step);
        for item in self.as_slice() {
            // Capacity already suffices, so this never grows; going through
            // `push` keeps a mid-clone panic from leaking cloned elements.
            fresh.push(item.clone());
        }
        fresh
    }
}

impl<T: fmt::Debug> fmt::Debug for StepVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for StepVec<T> {
    /// Live prefixes are compared element-wise; capacity and step take no
    /// part in equality.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for StepVec<T> {}

/// Error returned by [`StepVec::try_push`] when the buffer is full and
/// growth is disabled.
///
/// The rejected value rides along so the caller can recover it:
///
/// ```rust
/// use stepvec::StepVec;
///
/// let mut v = StepVec::new(1, 0);
/// v.push("kept");
///
/// let err = v.try_push("rejected").unwrap_err();
/// assert_eq!(err.into_inner(), "rejected");
/// ```
pub struct CapacityError<T> {
    value: T,
}

impl<T> CapacityError<T> {
    pub(crate) fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns ownership of the rejected value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

// Debug and Display keep the element out of the message, which also spares
// callers a `T: Debug` bound.
impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CapacityError(..)")
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("capacity exhausted and growth is disabled (step = 0)")
    }
}

impl<T> std::error::Error for CapacityError<T> {}
