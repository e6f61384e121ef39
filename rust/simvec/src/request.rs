/// A request to construct a [`SimpleVector`](crate::SimpleVector) with
/// pre-reserved capacity and no elements.
///
/// Distinguishes "reserve `n` slots" from "create `n` default elements", which
/// would otherwise both be spelled with a single `usize`. The request is not
/// `Clone`; constructing a vector consumes it.
///
/// ```
/// use simvec::{SimpleVector, reserve};
///
/// let v = SimpleVector::<u32>::from(reserve(16));
/// assert_eq!(v.len(), 0);
/// assert_eq!(v.capacity(), 16);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct ReserveRequest {
    capacity: usize,
}

impl ReserveRequest {
    pub fn new(capacity: usize) -> ReserveRequest {
        ReserveRequest { capacity }
    }

    /// Returns the requested capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`ReserveRequest::new`].
pub fn reserve(capacity: usize) -> ReserveRequest {
    ReserveRequest::new(capacity)
}
