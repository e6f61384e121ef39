//! A resizable, contiguous sequence container over a single owned buffer.
//!
//! [`SimpleVector<T>`] tracks a logical length separately from its allocated
//! capacity, grows geometrically on append and exactly on explicit requests, and
//! supports positional insert and erase.
//!
//! # Growth
//!
//! - `push_back`, `insert` and `extend_from_slice` double the capacity when the
//!   vector is full (starting from 1).
//! - `reserve` and `resize` allocate exactly the requested number of slots.
//!
//! See [`growth::GrowthPolicy`].
//!
//! # Reporting contract violations
//!
//! The container reports caller errors through three distinct channels, and
//! callers depend on which one applies:
//!
//! | operation | violation | reported as |
//! |---|---|---|
//! | [`at`](SimpleVector::at), [`at_mut`](SimpleVector::at_mut) | `index >= len` | `Err` with [`ErrorKind::OutOfRange`] |
//! | `try_reserve`, `try_resize`, `try_push_back`, `try_insert` | allocation failure | `Err` with [`ErrorKind::Allocation`] |
//! | `reserve`, `resize`, `push_back`, `insert` | allocation failure | panic |
//! | [`insert`](SimpleVector::insert) | `pos > len` | `None` |
//! | [`erase`](SimpleVector::erase) | `pos > len` or empty vector | `None` |
//! | [`pop_back`](SimpleVector::pop_back) | empty vector | `log::warn!`, no-op |
//!
//! Indexing with `[]` is not checked against the length.
//!
//! # Capacity requests
//!
//! `SimpleVector::with_len(n)` creates `n` default elements, while
//! `SimpleVector::from(reserve(n))` creates an empty vector with `n` slots
//! allocated:
//!
//! ```
//! use simvec::{SimpleVector, reserve};
//!
//! let filled = SimpleVector::<i32>::with_len(3);
//! let reserved = SimpleVector::<i32>::from(reserve(3));
//! assert_eq!((filled.len(), filled.capacity()), (3, 3));
//! assert_eq!((reserved.len(), reserved.capacity()), (0, 3));
//! ```

pub mod growth;
mod request;
mod std_impls;
mod vector;

#[cfg(feature = "serde")]
mod serde_impls;


pub use request::{ReserveRequest, reserve};
pub use simvec_common::{Error, ErrorKind, Result};
pub use vector::SimpleVector;

/// Creates a [`SimpleVector`] from a literal sequence, with capacity equal to
/// the number of elements.
///
/// ```
/// use simvec::simvec;
///
/// let v = simvec![1, 2, 3];
/// assert_eq!(v.capacity(), 3);
///
/// let zeros = simvec![0u8; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! simvec {
    () => {
        $crate::SimpleVector::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::SimpleVector::from_value($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($x),+])
    };
}
