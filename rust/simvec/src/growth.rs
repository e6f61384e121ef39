//! Capacity growth rules.
//!
//! `SimpleVector` uses two distinct policies. Incremental operations
//! (`push_back`, `insert`) grow geometrically so that appends are amortized O(1).
//! Explicit operations (`reserve`, `resize`) grow to exactly the requested size,
//! keeping the memory footprint predictable.

use simvec_common::{Error, Result};

/// Smallest capacity allocated by the doubling policy.
pub const MIN_CAPACITY: usize = 1;

/// Multiplier applied by the doubling policy.
pub const GROWTH_FACTOR: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthPolicy {
    /// `max(MIN_CAPACITY, capacity * GROWTH_FACTOR)`.
    Doubling,
    /// The requested capacity, unchanged.
    Exact,
}

impl GrowthPolicy {
    /// Computes the capacity to allocate when `current` slots are not enough
    /// to hold `required` elements.
    pub fn next_capacity(self, current: usize, required: usize) -> Result<usize> {
        match self {
            GrowthPolicy::Doubling => {
                let doubled = current
                    .checked_mul(GROWTH_FACTOR)
                    .ok_or_else(Error::capacity_overflow)?;
                Ok(doubled.max(MIN_CAPACITY).max(required))
            }
            GrowthPolicy::Exact => Ok(required),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GrowthPolicy;

    #[test]
    fn test_doubling_sequence() {
        let mut capacity = 0;
        let mut seen = Vec::new();
        for _ in 0..6 {
            capacity = GrowthPolicy::Doubling
                .next_capacity(capacity, capacity + 1)
                .unwrap();
            seen.push(capacity);
        }
        assert_eq!(seen, [1, 2, 4, 8, 16, 32]);
    }

    #[test]
    fn test_exact_ignores_current() {
        assert_eq!(GrowthPolicy::Exact.next_capacity(8, 11).unwrap(), 11);
        assert_eq!(GrowthPolicy::Exact.next_capacity(0, 3).unwrap(), 3);
    }

    #[test]
    fn test_doubling_overflow() {
        let e = GrowthPolicy::Doubling
            .next_capacity(usize::MAX / 2 + 1, usize::MAX)
            .unwrap_err();
        assert!(matches!(
            e.kind(),
            simvec_common::ErrorKind::CapacityOverflow
        ));
    }
}
