//! Doubly-linked list over pool slots.
//!
//! A [`List`] is three fields (head, tail, length) plus the link
//! indices threaded through the [`Pool`]'s slots. It owns no storage of
//! its own: every operation takes the pool as an argument, the same way
//! the backing store is passed explicitly in slab-style designs. That
//! calling convention is also what makes several lists over one pool
//! first-class, which in turn is what gives splice its meaning: moving
//! elements between lists rewrites index links and touches no element.
//!
//! # Pool pairing invariant
//!
//! A list must always be used with the same pool instance, and an index
//! passed to positional operations must have come from an insertion
//! into *that* list. This is the caller's responsibility, exactly as
//! with the `slab` crate's key discipline. Mixing pools or lists is not
//! memory-unsafe (indices are range- and occupancy-checked), but it
//! corrupts list structure.
//!
//! # Example
//!
//! ```
//! use ballast::{List, Pool};
//!
//! let mut pool: Pool<u64> = Pool::with_capacity(8);
//! let mut list: List<u64> = List::new();
//!
//! list.try_push_back(&mut pool, 1).unwrap();
//! list.try_push_back(&mut pool, 2).unwrap();
//! let idx = list.try_push_front(&mut pool, 0).unwrap();
//!
//! assert_eq!(list.iter(&pool).copied().collect::<Vec<_>>(), [0, 1, 2]);
//! assert_eq!(list.remove(&mut pool, idx), Some(0));
//! ```

use core::fmt;
use core::marker::PhantomData;
use core::mem;

use crate::{CapacityError, Full, Pool, SlotIndex};

/// A doubly-linked list whose nodes live in slots of a [`Pool`].
///
/// The list is plain data (head, tail, length); dropping it does not
/// drop its elements. Call [`clear`](List::clear) first, or let the
/// pool's own drop sweep whatever remains linked.
#[derive(Debug)]
pub struct List<T, I: SlotIndex = u16> {
    head: I,
    tail: I,
    len: usize,
    _marker: PhantomData<T>,
}

impl<T, I: SlotIndex> Default for List<T, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, I: SlotIndex> List<T, I> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: I::NONE,
            tail: I::NONE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the index of the front node, or `None` if empty.
    #[inline]
    pub fn front_index(&self) -> Option<I> {
        if self.head.is_none() {
            None
        } else {
            Some(self.head)
        }
    }

    /// Returns the index of the back node, or `None` if empty.
    #[inline]
    pub fn back_index(&self) -> Option<I> {
        if self.tail.is_none() {
            None
        } else {
            Some(self.tail)
        }
    }

    /// Walks `n` links from the front and returns the index there.
    ///
    /// This is O(n); positional access over a linked structure walks
    /// node by node.
    pub fn index_at(&self, pool: &Pool<T, I>, n: usize) -> Option<I> {
        if n >= self.len {
            return None;
        }
        let mut idx = self.head;
        for _ in 0..n {
            idx = pool.next_of(idx);
        }
        Some(idx)
    }

    /// Returns `true` if `idx` is linked into this list. O(n).
    pub fn contains_index(&self, pool: &Pool<T, I>, idx: I) -> bool {
        let mut cur = self.head;
        while cur.is_some() {
            if cur == idx {
                return true;
            }
            cur = pool.next_of(cur);
        }
        false
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns a reference to the element in slot `idx`, if claimed.
    #[inline]
    pub fn get<'a>(&self, pool: &'a Pool<T, I>, idx: I) -> Option<&'a T> {
        pool.get(idx)
    }

    /// Returns a mutable reference to the element in slot `idx`, if
    /// claimed.
    #[inline]
    pub fn get_mut<'a>(&self, pool: &'a mut Pool<T, I>, idx: I) -> Option<&'a mut T> {
        pool.get_mut(idx)
    }

    /// Returns a reference to the front element.
    #[inline]
    pub fn front<'a>(&self, pool: &'a Pool<T, I>) -> Option<&'a T> {
        if self.head.is_none() {
            return None;
        }
        // Safety: a non-sentinel head is a live node.
        Some(unsafe { pool.value_ref(self.head) })
    }

    /// Returns a mutable reference to the front element.
    #[inline]
    pub fn front_mut<'a>(&self, pool: &'a mut Pool<T, I>) -> Option<&'a mut T> {
        if self.head.is_none() {
            return None;
        }
        // Safety: a non-sentinel head is a live node.
        Some(unsafe { pool.value_mut(self.head) })
    }

    /// Returns a reference to the back element.
    #[inline]
    pub fn back<'a>(&self, pool: &'a Pool<T, I>) -> Option<&'a T> {
        if self.tail.is_none() {
            return None;
        }
        // Safety: a non-sentinel tail is a live node.
        Some(unsafe { pool.value_ref(self.tail) })
    }

    /// Returns a mutable reference to the back element.
    #[inline]
    pub fn back_mut<'a>(&self, pool: &'a mut Pool<T, I>) -> Option<&'a mut T> {
        if self.tail.is_none() {
            return None;
        }
        // Safety: a non-sentinel tail is a live node.
        Some(unsafe { pool.value_mut(self.tail) })
    }

    // ========================================================================
    // Insertion: claim a slot, construct in place, link
    // ========================================================================

    /// Appends a value, constructing it directly in a claimed slot.
    ///
    /// Returns the slot index, stable until the element is removed.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if the pool is exhausted.
    #[inline]
    pub fn try_push_back(&mut self, pool: &mut Pool<T, I>, value: T) -> Result<I, Full<T>> {
        let Some(idx) = pool.claim() else {
            return Err(Full(value));
        };
        pool.write(idx, value);
        self.link_back(pool, idx);
        Ok(idx)
    }

    /// Prepends a value, constructing it directly in a claimed slot.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if the pool is exhausted.
    #[inline]
    pub fn try_push_front(&mut self, pool: &mut Pool<T, I>, value: T) -> Result<I, Full<T>> {
        let Some(idx) = pool.claim() else {
            return Err(Full(value));
        };
        pool.write(idx, value);
        self.link_front(pool, idx);
        Ok(idx)
    }

    /// Inserts a value before the node at `before`.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if the pool is exhausted.
    ///
    /// # Panics
    ///
    /// Panics if `before` is not a claimed slot.
    #[inline]
    pub fn try_insert_before(
        &mut self,
        pool: &mut Pool<T, I>,
        before: I,
        value: T,
    ) -> Result<I, Full<T>> {
        let Some(idx) = pool.claim() else {
            return Err(Full(value));
        };
        pool.write(idx, value);
        self.link_before(pool, before, idx);
        Ok(idx)
    }

    /// Inserts a value after the node at `after`.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if the pool is exhausted.
    ///
    /// # Panics
    ///
    /// Panics if `after` is not a claimed slot.
    #[inline]
    pub fn try_insert_after(
        &mut self,
        pool: &mut Pool<T, I>,
        after: I,
        value: T,
    ) -> Result<I, Full<T>> {
        let Some(idx) = pool.claim() else {
            return Err(Full(value));
        };
        pool.write(idx, value);
        self.link_after(pool, after, idx);
        Ok(idx)
    }

    // ========================================================================
    // Removal: unlink, move the value out, release the slot
    // ========================================================================

    /// Removes and returns the front element, or `None` if empty.
    #[inline]
    pub fn pop_front(&mut self, pool: &mut Pool<T, I>) -> Option<T> {
        if self.head.is_none() {
            return None;
        }
        let idx = self.head;
        self.unlink(pool, idx);
        // Safety: idx was linked, so its slot holds a live value.
        let value = unsafe { pool.take(idx) };
        pool.release(idx);
        Some(value)
    }

    /// Removes and returns the back element, or `None` if empty.
    #[inline]
    pub fn pop_back(&mut self, pool: &mut Pool<T, I>) -> Option<T> {
        if self.tail.is_none() {
            return None;
        }
        let idx = self.tail;
        self.unlink(pool, idx);
        // Safety: idx was linked, so its slot holds a live value.
        let value = unsafe { pool.take(idx) };
        pool.release(idx);
        Some(value)
    }

    /// Removes and returns the element in slot `idx`.
    ///
    /// Returns `None` if `idx` is not a claimed slot. The index must
    /// have come from an insertion into this list (or a node of this
    /// list's pool that was [`unlink`](List::unlink)ed).
    #[inline]
    pub fn remove(&mut self, pool: &mut Pool<T, I>, idx: I) -> Option<T> {
        if !pool.is_claimed(idx) {
            return None;
        }
        self.unlink(pool, idx);
        // Safety: claimed slots hold live values.
        let value = unsafe { pool.take(idx) };
        pool.release(idx);
        Some(value)
    }

    // ========================================================================
    // Relink layer: no construction, no destruction, links only.
    // These are the primitives splice is made of, and the public surface
    // for moving nodes between lists that share a pool.
    // ========================================================================

    /// Links an existing node to the back of the list.
    ///
    /// The node must be claimed and not currently linked in any list.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a claimed slot.
    pub fn link_back(&mut self, pool: &mut Pool<T, I>, idx: I) {
        assert!(pool.is_claimed(idx), "invalid slot index");
        pool.set_links(idx, self.tail, I::NONE);
        if self.tail.is_some() {
            pool.set_next(self.tail, idx);
        } else {
            self.head = idx;
        }
        self.tail = idx;
        self.len += 1;
    }

    /// Links an existing node to the front of the list.
    ///
    /// The node must be claimed and not currently linked in any list.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a claimed slot.
    pub fn link_front(&mut self, pool: &mut Pool<T, I>, idx: I) {
        assert!(pool.is_claimed(idx), "invalid slot index");
        pool.set_links(idx, I::NONE, self.head);
        if self.head.is_some() {
            pool.set_prev(self.head, idx);
        } else {
            self.tail = idx;
        }
        self.head = idx;
        self.len += 1;
    }

    /// Links an existing node immediately before `before`.
    ///
    /// # Panics
    ///
    /// Panics if `before` or `idx` is not a claimed slot.
    pub fn link_before(&mut self, pool: &mut Pool<T, I>, before: I, idx: I) {
        assert!(pool.is_claimed(before), "invalid anchor index");
        assert!(pool.is_claimed(idx), "invalid slot index");
        let prev = pool.prev_of(before);
        pool.set_links(idx, prev, before);
        pool.set_prev(before, idx);
        if prev.is_some() {
            pool.set_next(prev, idx);
        } else {
            self.head = idx;
        }
        self.len += 1;
    }

    /// Links an existing node immediately after `after`.
    ///
    /// # Panics
    ///
    /// Panics if `after` or `idx` is not a claimed slot.
    pub fn link_after(&mut self, pool: &mut Pool<T, I>, after: I, idx: I) {
        assert!(pool.is_claimed(after), "invalid anchor index");
        assert!(pool.is_claimed(idx), "invalid slot index");
        let next = pool.next_of(after);
        pool.set_links(idx, after, next);
        pool.set_next(after, idx);
        if next.is_some() {
            pool.set_prev(next, idx);
        } else {
            self.tail = idx;
        }
        self.len += 1;
    }

    /// Unlinks a node without releasing its slot or touching its value.
    ///
    /// The node stays claimed and can be re-linked into this or another
    /// list sharing the pool. Returns `false` if the node was not
    /// linked.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a claimed slot.
    pub fn unlink(&mut self, pool: &mut Pool<T, I>, idx: I) -> bool {
        assert!(pool.is_claimed(idx), "invalid slot index");
        let prev = pool.prev_of(idx);
        let next = pool.next_of(idx);

        let linked = prev.is_some() || next.is_some() || self.head == idx;
        if !linked {
            return false;
        }

        if prev.is_some() {
            pool.set_next(prev, next);
        } else {
            self.head = next;
        }
        if next.is_some() {
            pool.set_prev(next, prev);
        } else {
            self.tail = prev;
        }
        pool.set_links(idx, I::NONE, I::NONE);
        self.len -= 1;
        true
    }

    // ========================================================================
    // Splice: relink whole chains in O(1), elements never move
    // ========================================================================

    /// Moves every element of `other` to the back of this list.
    ///
    /// O(1): the donor's chain is stitched on by rewriting two links.
    /// `other` is left empty. Both lists must share `pool`.
    pub fn append(&mut self, pool: &mut Pool<T, I>, other: &mut Self) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            self.head = other.head;
            self.tail = other.tail;
            self.len = other.len;
        } else {
            pool.set_next(self.tail, other.head);
            pool.set_prev(other.head, self.tail);
            self.tail = other.tail;
            self.len += other.len;
        }
        other.reset();
    }

    /// Moves every element of `other` in front of the node at `at`.
    ///
    /// O(1). `other` is left empty. Both lists must share `pool`.
    ///
    /// # Panics
    ///
    /// Panics if `at` is not a claimed slot.
    pub fn splice_before(&mut self, pool: &mut Pool<T, I>, at: I, other: &mut Self) {
        assert!(pool.is_claimed(at), "invalid anchor index");
        if other.is_empty() {
            return;
        }
        let prev = pool.prev_of(at);
        pool.set_next(other.tail, at);
        pool.set_prev(at, other.tail);
        if prev.is_some() {
            pool.set_next(prev, other.head);
            pool.set_prev(other.head, prev);
        } else {
            self.head = other.head;
        }
        self.len += other.len;
        other.reset();
    }

    /// Moves the single node `idx` out of `other` in front of `at`.
    ///
    /// O(1). Both lists must share `pool`.
    ///
    /// # Panics
    ///
    /// Panics if `at` or `idx` is not a claimed slot.
    pub fn splice_node_before(
        &mut self,
        pool: &mut Pool<T, I>,
        at: I,
        other: &mut Self,
        idx: I,
    ) {
        other.unlink(pool, idx);
        self.link_before(pool, at, idx);
    }

    /// Moves `count` nodes starting at `first` out of `other` in front
    /// of `at`, preserving their order.
    ///
    /// O(count) link rewrites; no element is copied, moved, or dropped.
    /// Both lists must share `pool`.
    ///
    /// # Panics
    ///
    /// Panics if the run starting at `first` is shorter than `count`,
    /// or if `at` or any node in the run is not a claimed slot.
    pub fn splice_range_before(
        &mut self,
        pool: &mut Pool<T, I>,
        at: I,
        other: &mut Self,
        first: I,
        count: usize,
    ) {
        let mut cur = first;
        for _ in 0..count {
            assert!(cur.is_some(), "splice range runs past the donor's tail");
            let next = pool.next_of(cur);
            other.unlink(pool, cur);
            self.link_before(pool, at, cur);
            cur = next;
        }
    }

    /// Splits the list at `idx`, returning a new list holding `idx` and
    /// everything after it.
    ///
    /// O(n) in the split-off run (its nodes are counted).
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a claimed slot.
    pub fn split_off(&mut self, pool: &mut Pool<T, I>, idx: I) -> Self {
        assert!(pool.is_claimed(idx), "invalid slot index");

        if self.head == idx {
            return mem::take(self);
        }

        let mut count = 0;
        let mut cur = idx;
        while cur.is_some() {
            count += 1;
            cur = pool.next_of(cur);
        }

        let prev = pool.prev_of(idx);
        pool.set_next(prev, I::NONE);
        pool.set_prev(idx, I::NONE);

        let other = Self {
            head: idx,
            tail: self.tail,
            len: count,
            _marker: PhantomData,
        };
        self.tail = prev;
        self.len -= count;
        other
    }

    /// Merges `other` into `self`, assuming both are sorted by `less`.
    ///
    /// Relink-only: O(n + m) link rewrites, no element moves. The merge
    /// is stable; on ties, elements of `self` come first. Both lists
    /// must share `pool`.
    pub fn merge_by<F>(&mut self, pool: &mut Pool<T, I>, other: &mut Self, mut less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            mem::swap(self, other);
            return;
        }

        let total = self.len + other.len;
        let mut dst = self.head;
        let mut src = other.head;
        let src_tail = other.tail;
        other.reset();

        while src.is_some() {
            if dst.is_none() {
                // The destination run is exhausted; stitch the rest of
                // the source run onto the tail in one step.
                pool.set_next(self.tail, src);
                pool.set_prev(src, self.tail);
                self.tail = src_tail;
                break;
            }
            // Safety: dst and src are live nodes of their chains.
            let src_first = unsafe { less(pool.value_ref(src), pool.value_ref(dst)) };
            if src_first {
                let next = pool.next_of(src);
                self.link_before(pool, dst, src);
                src = next;
            } else {
                dst = pool.next_of(dst);
            }
        }
        self.len = total;
    }

    /// Merges `other` into `self`, assuming both are sorted ascending.
    ///
    /// See [`merge_by`](List::merge_by).
    #[inline]
    pub fn merge(&mut self, pool: &mut Pool<T, I>, other: &mut Self)
    where
        T: Ord,
    {
        self.merge_by(pool, other, |a, b| a < b);
    }

    // ========================================================================
    // Bulk operations
    // ========================================================================

    /// Removes every element, dropping each and releasing its slot.
    pub fn clear(&mut self, pool: &mut Pool<T, I>) {
        let mut idx = self.head;
        self.reset();
        while idx.is_some() {
            let next = pool.next_of(idx);
            // Safety: every linked slot holds a live value.
            let value = unsafe { pool.take(idx) };
            pool.release(idx);
            drop(value);
            idx = next;
        }
    }

    /// Shortens the list to at most `len` elements, dropping the tail.
    pub fn truncate(&mut self, pool: &mut Pool<T, I>, len: usize) {
        while self.len > len {
            self.pop_back(pool);
        }
    }

    /// Resizes the list to `new_len` elements, cloning `value` into new
    /// back slots when growing.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`], before any mutation, if growth
    /// would need more slots than the pool has free.
    pub fn resize(&mut self, pool: &mut Pool<T, I>, new_len: usize, value: T) -> Result<(), CapacityError>
    where
        T: Clone,
    {
        self.resize_with(pool, new_len, || value.clone())
    }

    /// Resizes the list to `new_len` elements, filling new back slots
    /// from `f` when growing.
    ///
    /// This is the path for element types with no cheap default: the
    /// generator runs once per new slot.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`], before any mutation, if growth
    /// would need more slots than the pool has free.
    pub fn resize_with<F>(&mut self, pool: &mut Pool<T, I>, new_len: usize, mut f: F) -> Result<(), CapacityError>
    where
        F: FnMut() -> T,
    {
        if new_len > self.len {
            let needed = new_len - self.len;
            if needed > pool.free_slots() {
                return Err(CapacityError);
            }
            for _ in 0..needed {
                let pushed = self.try_push_back(pool, f());
                debug_assert!(pushed.is_ok());
            }
        } else {
            self.truncate(pool, new_len);
        }
        Ok(())
    }

    /// Appends every value from `values`.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] when the pool runs out; values already
    /// appended stay in the list, the rest of the iterator is dropped.
    pub fn try_extend<It>(&mut self, pool: &mut Pool<T, I>, values: It) -> Result<(), CapacityError>
    where
        It: IntoIterator<Item = T>,
    {
        for value in values {
            if self.try_push_back(pool, value).is_err() {
                return Err(CapacityError);
            }
        }
        Ok(())
    }

    /// Clears the list, then fills it from `values`.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] when the pool runs out; the list keeps
    /// the prefix that fit.
    pub fn assign<It>(&mut self, pool: &mut Pool<T, I>, values: It) -> Result<(), CapacityError>
    where
        It: IntoIterator<Item = T>,
    {
        self.clear(pool);
        self.try_extend(pool, values)
    }

    /// Clears the list, then fills it with `n` clones of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `n` slots are not free once the
    /// list has been cleared.
    pub fn assign_n(&mut self, pool: &mut Pool<T, I>, n: usize, value: T) -> Result<(), CapacityError>
    where
        T: Clone,
    {
        self.clear(pool);
        self.resize_with(pool, n, || value.clone())
    }

    /// Builds a deep, element-wise copy of this list in the same pool.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(_))` if the pool cannot hold a second copy; in
    /// that case nothing is left allocated.
    pub fn clone_in(&self, pool: &mut Pool<T, I>) -> Result<Self, Full<T>>
    where
        T: Clone,
    {
        let mut out = Self::new();
        let mut cur = self.head;
        while cur.is_some() {
            // Safety: cur is a live node of this list.
            let value = unsafe { pool.value_ref(cur) }.clone();
            if let Err(full) = out.try_push_back(pool, value) {
                out.clear(pool);
                return Err(full);
            }
            cur = pool.next_of(cur);
        }
        Ok(out)
    }

    #[inline]
    fn reset(&mut self) {
        self.head = I::NONE;
        self.tail = I::NONE;
        self.len = 0;
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns a double-ended iterator over element references.
    #[inline]
    pub fn iter<'a>(&self, pool: &'a Pool<T, I>) -> Iter<'a, T, I> {
        Iter {
            pool,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Returns a double-ended iterator over mutable element references.
    #[inline]
    pub fn iter_mut<'a>(&self, pool: &'a mut Pool<T, I>) -> IterMut<'a, T, I> {
        IterMut {
            pool,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Returns a double-ended iterator over slot indices, front to back.
    #[inline]
    pub fn indices<'a>(&self, pool: &'a Pool<T, I>) -> Indices<'a, T, I> {
        Indices {
            pool,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Empties the list, yielding its elements front to back.
    ///
    /// Slots are released as the iterator advances; dropping the
    /// iterator finishes the job.
    #[inline]
    pub fn drain<'a>(&mut self, pool: &'a mut Pool<T, I>) -> Drain<'a, T, I> {
        let head = self.head;
        self.reset();
        Drain { pool, next: head }
    }

    /// Returns a cursor positioned at the front of the list.
    #[inline]
    pub fn cursor_front<'a>(&'a mut self, pool: &'a mut Pool<T, I>) -> Cursor<'a, T, I> {
        let head = self.head;
        Cursor {
            list: self,
            pool,
            current: head,
        }
    }

    /// Returns a cursor positioned at the back of the list.
    #[inline]
    pub fn cursor_back<'a>(&'a mut self, pool: &'a mut Pool<T, I>) -> Cursor<'a, T, I> {
        let tail = self.tail;
        Cursor {
            list: self,
            pool,
            current: tail,
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over element references, front to back.
pub struct Iter<'a, T, I: SlotIndex = u16> {
    pool: &'a Pool<T, I>,
    front: I,
    back: I,
    remaining: usize,
}

impl<'a, T, I: SlotIndex> Iterator for Iter<'a, T, I> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front;
        self.front = self.pool.next_of(idx);
        self.remaining -= 1;
        // Safety: a non-exhausted iterator's front is a live node.
        Some(unsafe { self.pool.value_ref(idx) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, I: SlotIndex> DoubleEndedIterator for Iter<'_, T, I> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back;
        self.back = self.pool.prev_of(idx);
        self.remaining -= 1;
        // Safety: a non-exhausted iterator's back is a live node.
        Some(unsafe { self.pool.value_ref(idx) })
    }
}

impl<T, I: SlotIndex> ExactSizeIterator for Iter<'_, T, I> {}

/// Iterator over mutable element references, front to back.
pub struct IterMut<'a, T, I: SlotIndex = u16> {
    pool: &'a mut Pool<T, I>,
    front: I,
    back: I,
    remaining: usize,
}

impl<'a, T, I: SlotIndex> Iterator for IterMut<'a, T, I> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front;
        self.front = self.pool.next_of(idx);
        self.remaining -= 1;
        // Safety: each live node is visited exactly once, so the
        // returned mutable references are disjoint.
        let ptr = unsafe { self.pool.value_ptr(idx) };
        Some(unsafe { &mut *ptr })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, I: SlotIndex> DoubleEndedIterator for IterMut<'_, T, I> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back;
        self.back = self.pool.prev_of(idx);
        self.remaining -= 1;
        // Safety: each live node is visited exactly once, so the
        // returned mutable references are disjoint.
        let ptr = unsafe { self.pool.value_ptr(idx) };
        Some(unsafe { &mut *ptr })
    }
}

impl<T, I: SlotIndex> ExactSizeIterator for IterMut<'_, T, I> {}

/// Iterator over slot indices, front to back.
pub struct Indices<'a, T, I: SlotIndex = u16> {
    pool: &'a Pool<T, I>,
    front: I,
    back: I,
    remaining: usize,
}

impl<T, I: SlotIndex> Iterator for Indices<'_, T, I> {
    type Item = I;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front;
        self.front = self.pool.next_of(idx);
        self.remaining -= 1;
        Some(idx)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, I: SlotIndex> DoubleEndedIterator for Indices<'_, T, I> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back;
        self.back = self.pool.prev_of(idx);
        self.remaining -= 1;
        Some(idx)
    }
}

impl<T, I: SlotIndex> ExactSizeIterator for Indices<'_, T, I> {}

/// Iterator that removes and yields elements, front to back.
///
/// Dropping the iterator removes and drops whatever it has not yielded.
pub struct Drain<'a, T, I: SlotIndex = u16> {
    pool: &'a mut Pool<T, I>,
    next: I,
}

impl<T, I: SlotIndex> Iterator for Drain<'_, T, I> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next.is_none() {
            return None;
        }
        let idx = self.next;
        self.next = self.pool.next_of(idx);
        // Safety: the drained chain's nodes are live until taken here.
        let value = unsafe { self.pool.take(idx) };
        self.pool.release(idx);
        Some(value)
    }
}

impl<T, I: SlotIndex> Drop for Drain<'_, T, I> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}

// =============================================================================
// Cursor
// =============================================================================

/// A cursor with mutable access and removal during traversal.
///
/// This is the walk-and-conditionally-erase surface: advance with
/// [`move_next`](Cursor::move_next), inspect with
/// [`current_mut`](Cursor::current_mut), and delete with
/// [`remove_current`](Cursor::remove_current), which advances past the
/// removed node.
///
/// # Example
///
/// ```
/// use ballast::{List, Pool};
///
/// let mut pool: Pool<u32> = Pool::with_capacity(8);
/// let mut list: List<u32> = List::new();
/// list.try_extend(&mut pool, [1, 2, 3, 4, 5]).unwrap();
///
/// // Erase the even run [2, 4].
/// let mut cursor = list.cursor_front(&mut pool);
/// while let Some(&value) = cursor.current() {
///     if value % 2 == 0 {
///         cursor.remove_current();
///     } else {
///         cursor.move_next();
///     }
/// }
///
/// assert_eq!(list.iter(&pool).copied().collect::<Vec<_>>(), [1, 3, 5]);
/// ```
pub struct Cursor<'a, T, I: SlotIndex = u16> {
    list: &'a mut List<T, I>,
    pool: &'a mut Pool<T, I>,
    current: I,
}

impl<T, I: SlotIndex> Cursor<'_, T, I> {
    /// Returns a reference to the current element, or `None` if the
    /// cursor has run off the list.
    #[inline]
    pub fn current(&self) -> Option<&T> {
        if self.current.is_none() {
            return None;
        }
        // Safety: a non-sentinel cursor position is a live node.
        Some(unsafe { self.pool.value_ref(self.current) })
    }

    /// Returns a mutable reference to the current element.
    #[inline]
    pub fn current_mut(&mut self) -> Option<&mut T> {
        if self.current.is_none() {
            return None;
        }
        // Safety: a non-sentinel cursor position is a live node.
        Some(unsafe { self.pool.value_mut(self.current) })
    }

    /// Returns the slot index of the current element.
    #[inline]
    pub fn index(&self) -> Option<I> {
        if self.current.is_none() {
            None
        } else {
            Some(self.current)
        }
    }

    /// Advances to the next element. A cursor that has run off the
    /// list stays there.
    #[inline]
    pub fn move_next(&mut self) {
        if self.current.is_some() {
            self.current = self.pool.next_of(self.current);
        }
    }

    /// Steps back to the previous element.
    #[inline]
    pub fn move_prev(&mut self) {
        if self.current.is_some() {
            self.current = self.pool.prev_of(self.current);
        }
    }

    /// Peeks at the element after the current one without moving.
    #[inline]
    pub fn peek_next(&self) -> Option<&T> {
        if self.current.is_none() {
            return None;
        }
        let next = self.pool.next_of(self.current);
        if next.is_none() {
            return None;
        }
        // Safety: a non-sentinel link of a live node is a live node.
        Some(unsafe { self.pool.value_ref(next) })
    }

    /// Removes the current element and advances to its successor.
    ///
    /// Returns `None` if the cursor has run off the list.
    pub fn remove_current(&mut self) -> Option<T> {
        if self.current.is_none() {
            return None;
        }
        let idx = self.current;
        self.current = self.pool.next_of(idx);
        self.list.remove(self.pool, idx)
    }

    /// Returns `true` if the cursor has run off the list.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }
}

impl<T, I: SlotIndex> fmt::Debug for Cursor<'_, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("index", &self.current).finish()
    }
}
