use std::ops::Range;

use simvec_buffer::OwnedBuffer;
use simvec_common::{Error, Result, verify_index};

use crate::{growth::GrowthPolicy, request::ReserveRequest};

/// A growable, contiguous sequence of `T` values over a single owned buffer.
///
/// `SimpleVector` tracks a logical length (`len`) separately from the number of
/// allocated slots (`capacity`). Slots in `[len, capacity)` hold stale or default
/// values that are not part of the sequence; shrinking operations (`clear`,
/// `pop_back`, `resize` down, `erase`) only move the logical end and leave those
/// values in place until they are overwritten or the storage is released.
///
/// Positions passed to and returned from [`insert`](Self::insert) and
/// [`erase`](Self::erase) are element offsets. Any operation that changes the
/// capacity invalidates raw addresses obtained from
/// [`as_ptr_range`](Self::as_ptr_range).
///
/// ```
/// use simvec::simvec;
///
/// let mut v = simvec![1, 2, 3];
/// v.push_back(4);
/// assert_eq!(v.len(), 4);
/// assert_eq!(v.capacity(), 6);
/// assert_eq!(v.insert(0, 0), Some(0));
/// assert_eq!(v, [0, 1, 2, 3, 4]);
/// ```
pub struct SimpleVector<T> {
    items: OwnedBuffer<T>,
    size: usize,
}

impl<T> SimpleVector<T> {
    /// Creates an empty vector. Does not allocate.
    pub fn new() -> SimpleVector<T> {
        SimpleVector {
            items: OwnedBuffer::empty(),
            size: 0,
        }
    }

    /// Creates a vector holding every element of `vec`, with capacity equal to
    /// its length.
    pub fn from_vec(vec: Vec<T>) -> SimpleVector<T> {
        let size = vec.len();
        SimpleVector {
            items: OwnedBuffer::from_vec(vec),
            size,
        }
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns a reference to the element at `index`, or an out-of-range error
    /// if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T> {
        verify_index!(index, self.size);
        Ok(&self.items[index])
    }

    /// Returns a mutable reference to the element at `index`, or an
    /// out-of-range error if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_index!(index, self.size);
        Ok(&mut self.items[index])
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns a reference to the element at `index` without any bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`capacity`](Self::capacity). Reading a slot
    /// past `len` yields a stale value.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        unsafe { self.items.get_unchecked(index) }
    }

    /// Mutable counterpart of [`get_unchecked`](Self::get_unchecked).
    ///
    /// # Safety
    ///
    /// `index` must be less than [`capacity`](Self::capacity).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        unsafe { self.items.get_unchecked_mut(index) }
    }

    /// Sets the length to zero. Capacity and storage are retained.
    #[inline]
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Removes the last element from the sequence.
    ///
    /// On an empty vector this does nothing except log a warning; it never
    /// underflows the length. Returns `true` if an element was removed.
    pub fn pop_back(&mut self) -> bool {
        if self.size == 0 {
            log::warn!("pop_back on an empty SimpleVector");
            return false;
        }
        self.size -= 1;
        true
    }

    /// Removes the element at `pos`, shifting every following element one slot
    /// to the left.
    ///
    /// Returns the position now occupied by the element that followed the
    /// erased one (equal to `len()` if the last element was erased), or `None`
    /// if `pos > len()` or the vector is empty. A rejected position leaves the
    /// vector untouched.
    ///
    /// `pos == len()` on a non-empty vector removes the last element.
    pub fn erase(&mut self, pos: usize) -> Option<usize> {
        if self.size == 0 || pos > self.size {
            log::debug!("erase rejected: position {pos}, len {}", self.size);
            return None;
        }
        if pos == self.size {
            self.size -= 1;
            return Some(self.size);
        }
        self.items.as_mut_slice()[pos..self.size].rotate_left(1);
        self.size -= 1;
        Some(pos)
    }

    /// Exchanges the contents of two vectors in O(1).
    #[inline]
    pub fn swap(&mut self, other: &mut SimpleVector<T>) {
        self.items.swap(&mut other.items);
        std::mem::swap(&mut self.size, &mut other.size);
    }

    /// Moves the contents out into a new vector, leaving `self` with zero
    /// length, zero capacity and no allocation.
    #[inline]
    pub fn take(&mut self) -> SimpleVector<T> {
        std::mem::take(self)
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items.as_slice()[..self.size]
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let size = self.size;
        &mut self.items.as_mut_slice()[..size]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the `begin..end` address range of the live elements.
    ///
    /// The addresses are valid until the next operation that changes the
    /// capacity.
    #[inline]
    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.as_slice().as_ptr_range()
    }

    /// Mutable counterpart of [`as_ptr_range`](Self::as_ptr_range).
    #[inline]
    pub fn as_mut_ptr_range(&mut self) -> Range<*mut T> {
        self.as_mut_slice().as_mut_ptr_range()
    }

    /// All allocated slots, live and stale.
    #[inline]
    pub(crate) fn slots(&self) -> &[T] {
        self.items.as_slice()
    }

    #[inline]
    pub(crate) fn slots_mut(&mut self) -> &mut [T] {
        self.items.as_mut_slice()
    }

    /// Consumes the vector, returning the live elements. Stale slots are dropped.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = self.items.into_vec();
        vec.truncate(self.size);
        vec
    }
}

impl<T: Default> SimpleVector<T> {
    /// Creates a vector of `len` default values, with capacity `len`.
    pub fn with_len(len: usize) -> SimpleVector<T> {
        SimpleVector {
            items: OwnedBuffer::new(len),
            size: len,
        }
    }

    /// Creates an empty vector with exactly the requested capacity allocated.
    pub fn with_reserved(request: ReserveRequest) -> SimpleVector<T> {
        SimpleVector {
            items: OwnedBuffer::new(request.capacity()),
            size: 0,
        }
    }

    /// Fallible form of [`with_reserved`](Self::with_reserved).
    pub fn try_with_reserved(request: ReserveRequest) -> Result<SimpleVector<T>> {
        Ok(SimpleVector {
            items: OwnedBuffer::try_new(request.capacity())?,
            size: 0,
        })
    }

    /// Changes the length to `new_size`.
    ///
    /// - Shrinking only moves the logical end.
    /// - Growing within the capacity writes `T::default()` into the new slots.
    /// - Growing past the capacity reallocates to exactly `new_size` slots.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails.
    pub fn resize(&mut self, new_size: usize) {
        if let Err(e) = self.try_resize(new_size) {
            alloc_failed(e);
        }
    }

    /// Fallible form of [`resize`](Self::resize). On error the vector is unchanged.
    pub fn try_resize(&mut self, new_size: usize) -> Result<()> {
        if new_size <= self.size {
            self.size = new_size;
            return Ok(());
        }
        if new_size <= self.capacity() {
            self.items.as_mut_slice()[self.size..new_size]
                .iter_mut()
                .for_each(|slot| *slot = T::default());
        } else {
            let capacity = GrowthPolicy::Exact.next_capacity(self.capacity(), new_size)?;
            self.relocate(capacity, GrowthPolicy::Exact)?;
        }
        self.size = new_size;
        Ok(())
    }

    /// Grows the capacity to exactly `new_capacity` if it is larger than the
    /// current one. The length is never changed, and a request that does not
    /// exceed the current capacity does not touch the storage.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails.
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(e) = self.try_reserve(new_capacity) {
            alloc_failed(e);
        }
    }

    /// Fallible form of [`reserve`](Self::reserve). On error the vector is unchanged.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        let capacity = GrowthPolicy::Exact.next_capacity(self.capacity(), new_capacity)?;
        self.relocate(capacity, GrowthPolicy::Exact)
    }

    /// Appends `value`, doubling the capacity first if the vector is full.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails.
    pub fn push_back(&mut self, value: T) {
        if let Err(e) = self.try_push_back(value) {
            alloc_failed(e);
        }
    }

    /// Fallible form of [`push_back`](Self::push_back). On error `value` is
    /// dropped and the vector is unchanged.
    pub fn try_push_back(&mut self, value: T) -> Result<()> {
        self.grow_if_full()?;
        self.items[self.size] = value;
        self.size += 1;
        Ok(())
    }

    /// Inserts `value` at `pos`, shifting `[pos, len)` one slot to the right.
    ///
    /// `pos` may be anywhere in `0..=len`; `pos == len` appends. Returns the
    /// position of the inserted element, or `None` if `pos > len`, in which case
    /// the vector is untouched and `value` is dropped. Callers must check the
    /// result: a rejected position is reported only through the `None`.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails.
    pub fn insert(&mut self, pos: usize, value: T) -> Option<usize> {
        match self.try_insert(pos, value) {
            Ok(pos) => pos,
            Err(e) => alloc_failed(e),
        }
    }

    /// Fallible form of [`insert`](Self::insert).
    pub fn try_insert(&mut self, pos: usize, value: T) -> Result<Option<usize>> {
        if pos > self.size {
            log::debug!("insert rejected: position {pos}, len {}", self.size);
            return Ok(None);
        }
        self.grow_if_full()?;
        let size = self.size;
        let slots = self.items.as_mut_slice();
        slots[size] = value;
        slots[pos..=size].rotate_right(1);
        self.size += 1;
        Ok(Some(pos))
    }

    fn grow_if_full(&mut self) -> Result<()> {
        if self.size < self.capacity() {
            return Ok(());
        }
        let capacity = GrowthPolicy::Doubling.next_capacity(self.capacity(), self.size + 1)?;
        self.relocate(capacity, GrowthPolicy::Doubling)
    }

    /// Moves the live elements into a fresh buffer of `new_capacity` slots and
    /// releases the old one.
    #[cold]
    fn relocate(&mut self, new_capacity: usize, policy: GrowthPolicy) -> Result<()> {
        debug_assert!(new_capacity >= self.size);
        let mut fresh = OwnedBuffer::try_new(new_capacity)?;
        let size = self.size;
        fresh.as_mut_slice()[..size].swap_with_slice(&mut self.items.as_mut_slice()[..size]);
        log::trace!(
            "relocate: capacity {} -> {new_capacity} ({policy:?}), len {size}",
            self.capacity()
        );
        self.items.swap(&mut fresh);
        Ok(())
    }
}

impl<T: Clone> SimpleVector<T> {
    /// Creates a vector of `len` copies of `value`, with capacity `len`.
    pub fn from_value(len: usize, value: T) -> SimpleVector<T> {
        Self::from_vec(vec![value; len])
    }

    /// Creates a vector holding a copy of `values`, with capacity equal to its
    /// length.
    pub fn from_slice(values: &[T]) -> SimpleVector<T> {
        Self::from_vec(values.to_vec())
    }
}

impl<T: Clone + Default> SimpleVector<T> {
    /// Appends a copy of `value`.
    pub fn push_back_cloned(&mut self, value: &T) {
        self.push_back(value.clone());
    }

    /// Inserts a copy of `value` at `pos`. See [`insert`](Self::insert).
    pub fn insert_cloned(&mut self, pos: usize, value: &T) -> Option<usize> {
        self.insert(pos, value.clone())
    }

    /// Like [`resize`](Self::resize), but new elements are copies of `value`.
    pub fn resize_with_value(&mut self, new_size: usize, value: T) {
        let old_size = self.size;
        self.resize(new_size);
        if new_size > old_size {
            self.items.as_mut_slice()[old_size..new_size]
                .iter_mut()
                .for_each(|slot| *slot = value.clone());
        }
    }

    /// Appends copies of every element of `values`.
    ///
    /// Grows with the doubling policy, at most once.
    pub fn extend_from_slice(&mut self, values: &[T]) {
        let required = self.size.checked_add(values.len());
        let Some(required) = required else {
            alloc_failed(Error::capacity_overflow());
        };
        if required > self.capacity() {
            let capacity = match GrowthPolicy::Doubling.next_capacity(self.capacity(), required)
            {
                Ok(capacity) => capacity,
                Err(e) => alloc_failed(e),
            };
            if let Err(e) = self.relocate(capacity, GrowthPolicy::Doubling) {
                alloc_failed(e);
            }
        }
        self.items.as_mut_slice()[self.size..required].clone_from_slice(values);
        self.size = required;
    }
}

#[cold]
#[inline(never)]
fn alloc_failed(e: Error) -> ! {
    panic!("{e}")
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> From<ReserveRequest> for SimpleVector<T> {
    fn from(request: ReserveRequest) -> Self {
        SimpleVector::with_reserved(request)
    }
}

#[cfg(test)]
mod tests {
    use super::SimpleVector;
    use crate::reserve;

    #[test]
    fn test_new_is_empty() {
        let v = SimpleVector::<i32>::new();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        assert!(v.is_empty());
    }

    #[test]
    fn test_with_len_and_from_value() {
        let v = SimpleVector::<i32>::with_len(5);
        assert_eq!(v.len(), 5);
        assert_eq!(v.capacity(), 5);
        assert!(v.iter().all(|&x| x == 0));

        let v = SimpleVector::from_value(3, 42);
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 3);
        assert_eq!(v, [42, 42, 42]);
    }

    #[test]
    fn test_with_reserved() {
        let v = SimpleVector::<String>::with_reserved(reserve(5));
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 5);

        let v = SimpleVector::<u8>::try_with_reserved(reserve(0)).unwrap();
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn test_reserved_push_does_not_reallocate() {
        let mut v = SimpleVector::<u32>::from(reserve(4));
        let first = v.as_mut_ptr_range().start;
        for i in 0..4 {
            v.push_back(i);
        }
        assert_eq!(v.capacity(), 4);
        assert_eq!(v.as_mut_ptr_range().start, first);
    }

    #[test]
    fn test_at() {
        let mut v = SimpleVector::from_vec(vec![1, 2, 3]);
        assert_eq!(*v.at(0).unwrap(), 1);
        assert_eq!(*v.at(2).unwrap(), 3);
        assert!(v.at(3).unwrap_err().is_out_of_range());
        assert!(v.at(4).unwrap_err().is_out_of_range());

        *v.at_mut(1).unwrap() = 20;
        assert_eq!(v[1], 20);
        assert!(v.at_mut(3).is_err());
    }

    #[test]
    fn test_at_on_empty() {
        let v = SimpleVector::<i32>::new();
        let e = v.at(0).unwrap_err();
        assert_eq!(e.to_string(), "index 0 is out of range for length 0");
    }

    #[test]
    fn test_at_after_clear_rejects_stale_slots() {
        let mut v = SimpleVector::from_vec(vec![1, 2, 3]);
        v.clear();
        assert!(v.at(0).is_err());
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut v = SimpleVector::from_vec(vec![1, 2, 3]);
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 3);
        v.push_back(7);
        assert_eq!(v, [7]);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn test_push_back_doubling() {
        let mut v = SimpleVector::new();
        let mut capacities = Vec::new();
        for i in 0..9 {
            v.push_back(i);
            capacities.push(v.capacity());
        }
        assert_eq!(v.len(), 9);
        assert_eq!(capacities, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
        assert_eq!(v, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_push_back_cloned() {
        let mut v = SimpleVector::new();
        let s = String::from("abc");
        v.push_back_cloned(&s);
        v.push_back_cloned(&s);
        assert_eq!(v.len(), 2);
        assert_eq!(s, "abc");
        assert_eq!(v[1], "abc");
    }

    #[test]
    fn test_resize_shrink_and_grow_in_place() {
        let mut v = SimpleVector::from_vec(vec![1, 2, 3, 4]);
        v.resize(2);
        assert_eq!(v, [1, 2]);
        assert_eq!(v.capacity(), 4);

        v.resize(4);
        assert_eq!(v, [1, 2, 0, 0]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn test_resize_grows_exactly() {
        let mut v = SimpleVector::from_vec(vec![1, 2]);
        v.resize(4);
        assert_eq!(v, [1, 2, 0, 0]);
        assert_eq!(v.capacity(), 4);

        v.resize(7);
        assert_eq!(v.len(), 7);
        assert_eq!(v.capacity(), 7);
    }

    #[test]
    fn test_resize_with_value() {
        let mut v = SimpleVector::from_vec(vec![1]);
        v.resize_with_value(3, 9);
        assert_eq!(v, [1, 9, 9]);
        v.resize_with_value(1, 5);
        assert_eq!(v, [1]);
    }

    #[test]
    fn test_reserve() {
        let mut v = SimpleVector::from_vec(vec![1, 2, 3]);
        v.reserve(10);
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 10);
        assert_eq!(v, [1, 2, 3]);

        let before = v.as_ptr_range();
        v.reserve(5);
        assert_eq!(v.capacity(), 10);
        assert_eq!(v.as_ptr_range(), before);
    }

    #[test]
    fn test_insert() {
        let mut v = SimpleVector::from_vec(vec![1, 3]);
        assert_eq!(v.insert(1, 2), Some(1));
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(v.capacity(), 4);

        assert_eq!(v.insert(3, 4), Some(3));
        assert_eq!(v, [1, 2, 3, 4]);

        assert_eq!(v.insert(0, 0), Some(0));
        assert_eq!(v, [0, 1, 2, 3, 4]);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn test_insert_into_empty() {
        let mut v = SimpleVector::new();
        assert_eq!(v.insert(0, "a".to_string()), Some(0));
        assert_eq!(v.len(), 1);
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    fn test_insert_rejects_position_past_end() {
        let mut v = SimpleVector::from_vec(vec![1, 2]);
        assert_eq!(v.insert(3, 9), None);
        assert_eq!(v.insert_cloned(5, &9), None);
        assert_eq!(v, [1, 2]);
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn test_insert_cloned() {
        let mut v = SimpleVector::from_vec(vec!["b".to_string()]);
        let a = "a".to_string();
        assert_eq!(v.insert_cloned(0, &a), Some(0));
        assert_eq!(v, ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_pop_back() {
        let mut v = SimpleVector::from_vec(vec![1, 2]);
        assert!(v.pop_back());
        assert_eq!(v, [1]);
        assert!(v.pop_back());
        assert!(v.is_empty());
        assert!(!v.pop_back());
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 2);
    }

    #[test]
    fn test_erase() {
        let mut v = SimpleVector::from_vec(vec![1, 2, 3, 4]);
        assert_eq!(v.erase(1), Some(1));
        assert_eq!(v, [1, 3, 4]);
        assert_eq!(v[1], 3);

        assert_eq!(v.erase(2), Some(2));
        assert_eq!(v, [1, 3]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn test_erase_rejects_dead_positions() {
        let mut v = SimpleVector::from_vec(vec![1, 2]);
        assert_eq!(v.erase(3), None);
        assert_eq!(v.erase(10), None);
        assert_eq!(v, [1, 2]);

        let mut empty = SimpleVector::<i32>::new();
        assert_eq!(empty.erase(0), None);
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn test_erase_at_end_drops_last() {
        let mut v = SimpleVector::from_vec(vec![1, 2, 3]);
        assert_eq!(v.erase(v.len()), Some(2));
        assert_eq!(v, [1, 2]);
        assert_eq!(v.capacity(), 3);

        assert_eq!(v.erase(2), Some(1));
        assert_eq!(v.erase(1), Some(0));
        assert!(v.is_empty());
        assert_eq!(v.erase(0), None);
        assert_eq!(v.len(), 0);
    }

    #[test]
    fn test_swap() {
        let mut a = SimpleVector::from_vec(vec![1, 2, 3]);
        let mut b = SimpleVector::<i32>::from(reserve(10));
        b.push_back(9);

        a.swap(&mut b);
        assert_eq!(a, [9]);
        assert_eq!(a.capacity(), 10);
        assert_eq!(b, [1, 2, 3]);
        assert_eq!(b.capacity(), 3);
    }

    #[test]
    fn test_take_empties_source() {
        let mut a = SimpleVector::from_vec(vec![1, 2, 3]);
        a.reserve(8);
        let b = a.take();
        assert_eq!(a.len(), 0);
        assert_eq!(a.capacity(), 0);
        assert_eq!(b, [1, 2, 3]);
        assert_eq!(b.capacity(), 8);
    }

    #[test]
    fn test_extend_from_slice() {
        let mut v = SimpleVector::from_vec(vec![1]);
        v.extend_from_slice(&[2, 3, 4]);
        assert_eq!(v, [1, 2, 3, 4]);
        assert_eq!(v.capacity(), 4);

        v.extend_from_slice(&[5]);
        assert_eq!(v.capacity(), 8);
        v.extend_from_slice(&[]);
        assert_eq!(v.len(), 5);
    }

    #[test]
    fn test_into_vec_drops_stale_slots() {
        let mut v = SimpleVector::from_vec(vec![1, 2, 3, 4]);
        v.resize(2);
        assert_eq!(v.into_vec(), vec![1, 2]);
    }

    #[test]
    fn test_try_reserve_failure_leaves_vector_intact() {
        let mut v = SimpleVector::from_vec(vec![1u64, 2]);
        assert!(v.try_reserve(usize::MAX / 2).is_err());
        assert_eq!(v, [1, 2]);
        assert_eq!(v.capacity(), 2);

        assert!(v.try_resize(usize::MAX / 2).is_err());
        assert_eq!(v.len(), 2);
    }
}
