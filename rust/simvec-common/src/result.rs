pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_index {
    ($index:expr, $len:expr) => {{
        $crate::result::verify_index($index, $len)?;
    }};
}

#[inline]
pub fn verify_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        out_of_range(index, len)
    }
}

#[cold]
pub fn out_of_range(index: usize, len: usize) -> Result<()> {
    Err(crate::error::ErrorKind::OutOfRange { index, len }.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(index: usize, len: usize) -> Result<usize> {
        verify_index!(index, len);
        Ok(index)
    }

    #[test]
    fn test_verify_index() {
        assert_eq!(checked(0, 1).unwrap(), 0);
        assert!(checked(1, 1).unwrap_err().is_out_of_range());
        assert!(checked(0, 0).is_err());
    }

    #[test]
    fn test_out_of_range_reports_index_and_len() {
        let e = checked(7, 3).unwrap_err();
        assert_eq!(e.to_string(), "index 7 is out of range for length 3");
    }
}
