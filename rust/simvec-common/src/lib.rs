//! Core definitions shared by all simvec-* crates: the error type and the
//! `Result` alias used across the workspace.

pub mod error;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
