use simvec_common::{Error, Result};

/// A fixed-length, exclusively owned block of `T` slots on the heap.
///
/// The buffer owns exactly one allocation (a boxed slice) and releases it once,
/// when dropped. It can be moved or swapped, but not cloned: there is never more
/// than one owner of the storage.
///
/// A buffer of length zero performs no allocation; its pointer is dangling but
/// well-aligned, which is what an empty boxed slice provides.
pub struct OwnedBuffer<T> {
    items: Box<[T]>,
}

impl<T> OwnedBuffer<T> {
    /// Creates an empty buffer with no allocation.
    #[inline]
    pub fn empty() -> OwnedBuffer<T> {
        OwnedBuffer {
            items: Box::default(),
        }
    }

    /// Adopts the storage of `vec`. The number of slots becomes `vec.len()`;
    /// any spare capacity of the vector is released.
    pub fn from_vec(vec: Vec<T>) -> OwnedBuffer<T> {
        OwnedBuffer {
            items: vec.into_boxed_slice(),
        }
    }

    /// Returns the number of slots in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the buffer has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a raw pointer to the first slot.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.items.as_ptr()
    }

    /// Returns a mutable raw pointer to the first slot.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.items.as_mut_ptr()
    }

    /// Returns all slots of the buffer as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns all slots of the buffer as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Returns a reference to the slot at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len());
        unsafe { self.items.get_unchecked(index) }
    }

    /// Returns a mutable reference to the slot at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len());
        unsafe { self.items.get_unchecked_mut(index) }
    }

    /// Exchanges the storage of two buffers. No elements are moved.
    #[inline]
    pub fn swap(&mut self, other: &mut OwnedBuffer<T>) {
        std::mem::swap(&mut self.items, &mut other.items);
    }

    /// Moves the storage out, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> OwnedBuffer<T> {
        std::mem::take(self)
    }

    /// Consumes the buffer, returning its slots as a `Vec<T>` without copying.
    pub fn into_vec(self) -> Vec<T> {
        self.items.into_vec()
    }
}

impl<T: Default> OwnedBuffer<T> {
    /// Allocates a buffer of `count` default-constructed slots.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails. See [`try_new`](Self::try_new) for the
    /// fallible version.
    pub fn new(count: usize) -> OwnedBuffer<T> {
        match Self::try_new(count) {
            Ok(buffer) => buffer,
            Err(e) => alloc_failed(e),
        }
    }

    /// Allocates a buffer of `count` default-constructed slots, reporting an
    /// allocation error instead of aborting when memory cannot be obtained.
    pub fn try_new(count: usize) -> Result<OwnedBuffer<T>> {
        if count == 0 {
            return Ok(Self::empty());
        }
        let mut items = Vec::new();
        items
            .try_reserve_exact(count)
            .map_err(|_| Error::allocation(count))?;
        items.resize_with(count, T::default);
        Ok(Self::from_vec(items))
    }
}

#[cold]
#[inline(never)]
fn alloc_failed(e: Error) -> ! {
    panic!("{e}")
}

impl<T> Default for OwnedBuffer<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> std::ops::Index<usize> for OwnedBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> std::ops::IndexMut<usize> for OwnedBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T> From<Vec<T>> for OwnedBuffer<T> {
    fn from(vec: Vec<T>) -> Self {
        OwnedBuffer::from_vec(vec)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for OwnedBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnedBuffer")
            .field("slots", &self.as_slice())
            .field("len", &self.len())
            .finish()
    }
}
