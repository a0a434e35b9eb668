use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

use super::{
    limits::{numeric_bounds, Limit},
    DataError,
};

/// Default value-generation range, `[0, 100)`.
pub const DEFAULT_LIMITS: [Limit; 2] = [Limit::Int(0), Limit::Int(100)];

pub struct SequenceGenerator {
    count: usize,
    limits: Vec<Limit>,
}

impl SequenceGenerator {
    pub fn new(count: usize, limits: &[Limit]) -> Self {
        SequenceGenerator {
            count,
            limits: limits.to_vec(),
        }
    }

    /// Draws `count` independent uniform integers in `[low, high)`.
    ///
    /// The limits are validated on every call; validator errors propagate
    /// unchanged. The resolved range must be non-empty.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Vec<i64>, DataError> {
        let (low, high) = numeric_bounds(&self.limits)?;
        let uniform_dist = Uniform::from(low..high);
        Ok((0..self.count)
            .map(|_| uniform_dist.sample(rng))
            .collect())
    }
}
