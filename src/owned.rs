//! A list that owns its pool.
//!
//! [`OwnedList`] bundles a [`Pool`] and a [`List`] into one value with
//! the familiar container API, with no pool argument on every call. Reach
//! for the split `Pool` + `List` form only when several lists need to
//! share one pool (splice, merge, relinking between queues).

use core::fmt;

use crate::list::{Cursor, Drain, Indices, Iter, IterMut};
use crate::{CapacityError, Full, List, Pool, SlotIndex};

/// A doubly-linked list with its slot pool embedded.
///
/// Capacity is fixed at construction; the single allocation happens
/// there and never again. The `try_*` methods report exhaustion as an
/// error; the plain methods panic on it, for callers that size the
/// pool to their workload.
///
/// # Example
///
/// ```
/// use ballast::OwnedList;
///
/// let mut list: OwnedList<u32> = OwnedList::with_capacity(8);
/// list.push_back(1);
/// list.push_back(2);
/// list.push_front(0);
///
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2]);
/// assert_eq!(list.pop_front(), Some(0));
/// assert_eq!(list.len(), 2);
/// ```
pub struct OwnedList<T, I: SlotIndex = u16> {
    pool: Pool<T, I>,
    list: List<T, I>,
}

impl<T, I: SlotIndex> OwnedList<T, I> {
    /// Creates a list with room for exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` cannot be addressed by the index type.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pool: Pool::with_capacity(capacity),
            list: List::new(),
        }
    }

    /// Creates a list with room for exactly `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `capacity` cannot be addressed by
    /// the index type.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, CapacityError> {
        Ok(Self {
            pool: Pool::try_with_capacity(capacity)?,
            list: List::new(),
        })
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Returns `true` if no capacity remains.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.pool.is_full()
    }

    /// Returns how many more elements fit.
    #[inline]
    pub fn free_slots(&self) -> usize {
        self.pool.free_slots()
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns the index of the front node, or `None` if empty.
    #[inline]
    pub fn front_index(&self) -> Option<I> {
        self.list.front_index()
    }

    /// Returns the index of the back node, or `None` if empty.
    #[inline]
    pub fn back_index(&self) -> Option<I> {
        self.list.back_index()
    }

    /// Walks `n` links from the front and returns the index there. O(n).
    #[inline]
    pub fn index_at(&self, n: usize) -> Option<I> {
        self.list.index_at(&self.pool, n)
    }

    /// Returns a reference to the element in slot `idx`, if claimed.
    #[inline]
    pub fn get(&self, idx: I) -> Option<&T> {
        self.pool.get(idx)
    }

    /// Returns a mutable reference to the element in slot `idx`.
    #[inline]
    pub fn get_mut(&mut self, idx: I) -> Option<&mut T> {
        self.pool.get_mut(idx)
    }

    /// Returns a reference to the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.list.front(&self.pool)
    }

    /// Returns a mutable reference to the front element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let Self { pool, list } = self;
        list.front_mut(pool)
    }

    /// Returns a reference to the back element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.list.back(&self.pool)
    }

    /// Returns a mutable reference to the back element.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let Self { pool, list } = self;
        list.back_mut(pool)
    }

    // ========================================================================
    // Insertion and removal
    // ========================================================================

    /// Appends a value, returning its stable slot index.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if the list is at capacity.
    #[inline]
    pub fn try_push_back(&mut self, value: T) -> Result<I, Full<T>> {
        let Self { pool, list } = self;
        list.try_push_back(pool, value)
    }

    /// Appends a value, returning its stable slot index.
    ///
    /// # Panics
    ///
    /// Panics if the list is at capacity.
    #[inline]
    pub fn push_back(&mut self, value: T) -> I {
        match self.try_push_back(value) {
            Ok(idx) => idx,
            Err(_) => panic!("bounded list is full"),
        }
    }

    /// Prepends a value, returning its stable slot index.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if the list is at capacity.
    #[inline]
    pub fn try_push_front(&mut self, value: T) -> Result<I, Full<T>> {
        let Self { pool, list } = self;
        list.try_push_front(pool, value)
    }

    /// Prepends a value, returning its stable slot index.
    ///
    /// # Panics
    ///
    /// Panics if the list is at capacity.
    #[inline]
    pub fn push_front(&mut self, value: T) -> I {
        match self.try_push_front(value) {
            Ok(idx) => idx,
            Err(_) => panic!("bounded list is full"),
        }
    }

    /// Inserts a value before the node at `before`.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if the list is at capacity.
    ///
    /// # Panics
    ///
    /// Panics if `before` is not a claimed slot.
    #[inline]
    pub fn try_insert_before(&mut self, before: I, value: T) -> Result<I, Full<T>> {
        let Self { pool, list } = self;
        list.try_insert_before(pool, before, value)
    }

    /// Inserts a value after the node at `after`.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if the list is at capacity.
    ///
    /// # Panics
    ///
    /// Panics if `after` is not a claimed slot.
    #[inline]
    pub fn try_insert_after(&mut self, after: I, value: T) -> Result<I, Full<T>> {
        let Self { pool, list } = self;
        list.try_insert_after(pool, after, value)
    }

    /// Removes and returns the front element, or `None` if empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        let Self { pool, list } = self;
        list.pop_front(pool)
    }

    /// Removes and returns the back element, or `None` if empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        let Self { pool, list } = self;
        list.pop_back(pool)
    }

    /// Removes and returns the element in slot `idx`, or `None` if the
    /// index is not claimed.
    #[inline]
    pub fn remove(&mut self, idx: I) -> Option<T> {
        let Self { pool, list } = self;
        list.remove(pool, idx)
    }

    // ========================================================================
    // Bulk operations
    // ========================================================================

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        let Self { pool, list } = self;
        list.clear(pool);
    }

    /// Shortens the list to at most `len` elements, dropping the tail.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        let Self { pool, list } = self;
        list.truncate(pool, len);
    }

    /// Resizes to `new_len`, cloning `value` into new back slots.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`], before any mutation, if `new_len`
    /// exceeds the capacity.
    #[inline]
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), CapacityError>
    where
        T: Clone,
    {
        let Self { pool, list } = self;
        list.resize(pool, new_len, value)
    }

    /// Resizes to `new_len`, filling new back slots from `f`.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`], before any mutation, if `new_len`
    /// exceeds the capacity.
    #[inline]
    pub fn resize_with<F>(&mut self, new_len: usize, f: F) -> Result<(), CapacityError>
    where
        F: FnMut() -> T,
    {
        let Self { pool, list } = self;
        list.resize_with(pool, new_len, f)
    }

    /// Appends every value from `values`.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] when capacity runs out; values already
    /// appended stay in the list.
    #[inline]
    pub fn try_extend<It>(&mut self, values: It) -> Result<(), CapacityError>
    where
        It: IntoIterator<Item = T>,
    {
        let Self { pool, list } = self;
        list.try_extend(pool, values)
    }

    /// Clears the list, then fills it from `values`.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] when capacity runs out; the list keeps
    /// the prefix that fit.
    #[inline]
    pub fn assign<It>(&mut self, values: It) -> Result<(), CapacityError>
    where
        It: IntoIterator<Item = T>,
    {
        let Self { pool, list } = self;
        list.assign(pool, values)
    }

    /// Clears the list, then fills it with `n` clones of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `n` exceeds the capacity.
    #[inline]
    pub fn assign_n(&mut self, n: usize, value: T) -> Result<(), CapacityError>
    where
        T: Clone,
    {
        let Self { pool, list } = self;
        list.assign_n(pool, n, value)
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns a double-ended iterator over element references.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, I> {
        self.list.iter(&self.pool)
    }

    /// Returns a double-ended iterator over mutable element references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, I> {
        let Self { pool, list } = self;
        list.iter_mut(pool)
    }

    /// Returns a double-ended iterator over slot indices.
    #[inline]
    pub fn indices(&self) -> Indices<'_, T, I> {
        self.list.indices(&self.pool)
    }

    /// Empties the list, yielding its elements front to back.
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T, I> {
        let Self { pool, list } = self;
        list.drain(pool)
    }

    /// Returns a cursor positioned at the front of the list.
    #[inline]
    pub fn cursor_front(&mut self) -> Cursor<'_, T, I> {
        let Self { pool, list } = self;
        list.cursor_front(pool)
    }

    /// Returns a cursor positioned at the back of the list.
    #[inline]
    pub fn cursor_back(&mut self) -> Cursor<'_, T, I> {
        let Self { pool, list } = self;
        list.cursor_back(pool)
    }
}

impl<T: Clone, I: SlotIndex> Clone for OwnedList<T, I> {
    /// Deep, element-wise copy into a fresh pool of the same capacity.
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.capacity());
        for value in self.iter() {
            let pushed = out.try_push_back(value.clone());
            debug_assert!(pushed.is_ok());
        }
        out
    }
}

impl<T: PartialEq, I: SlotIndex> PartialEq for OwnedList<T, I> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, I: SlotIndex> Eq for OwnedList<T, I> {}

impl<T: fmt::Debug, I: SlotIndex> fmt::Debug for OwnedList<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Appends each value with the panicking [`push_back`](OwnedList::push_back).
impl<T, I: SlotIndex> Extend<T> for OwnedList<T, I> {
    fn extend<It: IntoIterator<Item = T>>(&mut self, values: It) {
        for value in values {
            self.push_back(value);
        }
    }
}

impl<'a, T, I: SlotIndex> IntoIterator for &'a OwnedList<T, I> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, I>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, I: SlotIndex> IntoIterator for &'a mut OwnedList<T, I> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, I>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, I: SlotIndex> IntoIterator for OwnedList<T, I> {
    type Item = T;
    type IntoIter = IntoIter<T, I>;

    fn into_iter(self) -> IntoIter<T, I> {
        let OwnedList { pool, list } = self;
        IntoIter {
            next: list.front_index().unwrap_or(I::NONE),
            pool,
        }
    }
}

/// By-value iterator over an [`OwnedList`].
///
/// Elements not yielded are dropped with the pool.
pub struct IntoIter<T, I: SlotIndex = u16> {
    pool: Pool<T, I>,
    next: I,
}

impl<T, I: SlotIndex> Iterator for IntoIter<T, I> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.next.is_none() {
            return None;
        }
        let idx = self.next;
        self.next = self.pool.next_of(idx);
        // Safety: the chain's nodes are live until taken here.
        let value = unsafe { self.pool.take(idx) };
        self.pool.release(idx);
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_round_trip() {
        let mut list: OwnedList<u32> = OwnedList::with_capacity(4);
        list.push_back(1);
        list.push_back(2);
        list.push_front(0);

        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&0));
        assert_eq!(list.back(), Some(&2));

        assert_eq!(list.pop_front(), Some(0));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_back(), Some(1));
        assert_eq!(list.pop_back(), None);
    }

    #[test]
    #[should_panic(expected = "bounded list is full")]
    fn push_past_capacity_panics() {
        let mut list: OwnedList<u32> = OwnedList::with_capacity(1);
        list.push_back(1);
        list.push_back(2);
    }

    #[test]
    fn try_push_reports_full() {
        let mut list: OwnedList<u32> = OwnedList::with_capacity(2);
        list.push_back(1);
        list.push_back(2);
        assert!(list.is_full());
        assert_eq!(list.try_push_back(3).unwrap_err().into_inner(), 3);
    }

    #[test]
    fn positional_insert_by_stable_index() {
        let mut list: OwnedList<u32> = OwnedList::with_capacity(8);
        let a = list.push_back(1);
        list.push_back(3);

        list.try_insert_after(a, 2).unwrap();
        list.try_insert_before(a, 0).unwrap();

        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3]);

        let idx = list.index_at(2).unwrap();
        assert_eq!(list.remove(idx), Some(2));
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 3]);
    }

    #[test]
    fn front_and_back_mut() {
        let mut list: OwnedList<u32> = OwnedList::with_capacity(4);
        list.push_back(1);
        list.push_back(2);

        *list.front_mut().unwrap() = 10;
        *list.back_mut().unwrap() = 20;
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [10, 20]);
    }

    #[test]
    fn resize_assign_truncate() {
        let mut list: OwnedList<u32> = OwnedList::with_capacity(6);
        list.resize(4, 7).unwrap();
        assert_eq!(list.len(), 4);

        list.assign([1, 2, 3]).unwrap();
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);

        list.truncate(1);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1]);

        assert_eq!(list.resize(7, 0), Err(CapacityError));
    }

    #[test]
    fn clone_is_deep() {
        let mut list: OwnedList<String> = OwnedList::with_capacity(4);
        list.push_back("a".to_owned());
        list.push_back("b".to_owned());

        let mut copy = list.clone();
        assert_eq!(copy, list);

        copy.push_back("c".to_owned());
        assert_ne!(copy, list);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn extend_collects_values() {
        let mut list: OwnedList<u32> = OwnedList::with_capacity(8);
        list.extend([1, 2, 3]);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn cursor_erases_a_run() {
        let mut list: OwnedList<u32> = OwnedList::with_capacity(8);
        list.extend([1, 2, 3, 4, 5]);

        let mut cursor = list.cursor_front();
        while let Some(&value) = cursor.current() {
            if value % 2 == 1 {
                cursor.remove_current();
            } else {
                cursor.move_next();
            }
        }

        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2, 4]);
    }

    #[test]
    fn drain_then_reuse() {
        let mut list: OwnedList<u32> = OwnedList::with_capacity(4);
        list.extend([1, 2, 3]);

        let drained: Vec<_> = list.drain().collect();
        assert_eq!(drained, [1, 2, 3]);
        assert!(list.is_empty());

        list.push_back(9);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn into_iter_consumes_in_order() {
        let mut list: OwnedList<String> = OwnedList::with_capacity(4);
        list.push_back("x".to_owned());
        list.push_back("y".to_owned());

        let values: Vec<_> = list.into_iter().collect();
        assert_eq!(values, ["x", "y"]);
    }

    #[test]
    fn partial_into_iter_drops_the_rest() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static DROPS: AtomicUsize = AtomicUsize::new(0);

        struct Counted;
        impl Drop for Counted {
            fn drop(&mut self) {
                DROPS.fetch_add(1, Ordering::SeqCst);
            }
        }

        DROPS.store(0, Ordering::SeqCst);
        {
            let mut list: OwnedList<Counted> = OwnedList::with_capacity(4);
            for _ in 0..3 {
                list.push_back(Counted);
            }
            let mut it = list.into_iter();
            drop(it.next());
        }
        assert_eq!(DROPS.load(Ordering::SeqCst), 3);
    }
}
