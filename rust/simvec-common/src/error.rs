use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn out_of_range(index: usize, len: usize) -> Error {
        Error(ErrorKind::OutOfRange { index, len }.into())
    }

    pub fn allocation(requested: usize) -> Error {
        Error(ErrorKind::Allocation { requested }.into())
    }

    pub fn capacity_overflow() -> Error {
        Error(ErrorKind::CapacityOverflow.into())
    }

    /// Returns `true` for a bounds-checked access that missed the live range.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfRange { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("failed to allocate storage for {requested} elements")]
    Allocation { requested: usize },

    #[error("capacity overflow")]
    CapacityOverflow,
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
