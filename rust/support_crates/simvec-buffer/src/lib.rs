//! Single-owner heap storage for the simvec containers.
//!
//! [`OwnedBuffer`] is the raw storage primitive behind `SimpleVector`: one boxed
//! allocation of a fixed number of slots, every slot default-constructed when the
//! buffer is allocated. It has no notion of a logical length and never resizes
//! itself; growth is done by allocating a new buffer and swapping it in.

pub mod buffer;

pub use buffer::OwnedBuffer;
