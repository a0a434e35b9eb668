use std::collections::HashSet;

use rand::Rng;

use super::{
    limits::{numeric_bounds, Limit},
    DataError,
};

/// Draws `count` distinct uniform integers from `[low, high)`.
///
/// The result is ordered by first occurrence during sampling, not
/// numerically. The domain must hold at least `count` values; the check runs
/// before any drawing, since retrying draws from a too-small domain would
/// never terminate.
pub fn unique_random_numbers<R: Rng>(
    rng: &mut R,
    count: usize,
    limits: &[Limit],
) -> Result<Vec<i64>, DataError> {
    let (low, high) = numeric_bounds(limits)?;

    let available = high - low;
    if available < count as i64 {
        return Err(DataError::RangeTooSmall {
            requested: count,
            available,
        });
    }

    let mut seen = HashSet::with_capacity(count);
    let mut numbers = Vec::with_capacity(count);
    while numbers.len() < count {
        let candidate = rng.gen_range(low..high);
        if seen.insert(candidate) {
            numbers.push(candidate);
        }
    }

    Ok(numbers)
}
