use log::debug;
use rand::Rng;

use super::{limits::Limit, sampler::unique_random_numbers, Cell, DataError};

/// A `(start, stop, step)` integer range.
///
/// Unlike the two-bound limits used for value generation, a step range walks
/// from `start` toward `stop` in `step` increments, which makes descending
/// ranges such as `(0, -100, -1)` expressible. `stop` is never reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRange {
    start: i64,
    stop: i64,
    step: i64,
}

impl StepRange {
    pub fn new(start: i64, stop: i64, step: i64) -> Self {
        StepRange { start, stop, step }
    }

    /// Number of values the range holds.
    fn span(&self) -> Result<i64, DataError> {
        if self.step == 0 {
            return Err(DataError::ZeroStep);
        }
        // both branches divide positive operands only
        let span = if self.step > 0 && self.stop > self.start {
            (self.stop - self.start + self.step - 1) / self.step
        } else if self.step < 0 && self.stop < self.start {
            (self.start - self.stop - self.step - 1) / -self.step
        } else {
            0
        };
        if span == 0 {
            return Err(DataError::EmptyStepRange {
                start: self.start,
                stop: self.stop,
                step: self.step,
            });
        }
        Ok(span)
    }

    /// Draws one value uniformly from the range.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<i64, DataError> {
        let span = self.span()?;
        Ok(self.start + self.step * rng.gen_range(0..span))
    }
}

impl Default for StepRange {
    fn default() -> Self {
        StepRange::new(0, -100, -1)
    }
}

/// Corrupts a random subset of a sequence with ambiguous and missing values.
pub struct NoiseInjector {
    ambiguous: StepRange,
    fraction: f64,
}

impl NoiseInjector {
    pub const DEFAULT_FRACTION: f64 = 0.3;

    /// `fraction` is the share of cells to corrupt, expected in `[0, 1]`.
    pub fn new(ambiguous: StepRange, fraction: f64) -> Self {
        NoiseInjector {
            ambiguous,
            fraction,
        }
    }

    /// Returns a corrupted copy of `data`; the input is left untouched.
    ///
    /// `floor(len * fraction)` distinct positions are overwritten. Walking
    /// them in sampling order, every 4th becomes a missing cell and the rest
    /// take draws from the ambiguous range, so a quarter of the corrupted
    /// cells (rounded down) end up missing.
    pub fn inject<R: Rng>(&self, rng: &mut R, data: &[Cell]) -> Result<Vec<Cell>, DataError> {
        let mut noisy = data.to_vec();
        let noise_count = (data.len() as f64 * self.fraction) as usize;

        let index_limits = [Limit::Int(0), Limit::Int(data.len() as i64)];
        let indices = unique_random_numbers(rng, noise_count, &index_limits)?;
        debug!(
            "corrupting {} of {} cells, every 4th as missing",
            indices.len(),
            data.len()
        );

        for (iter_no, &index) in indices.iter().enumerate() {
            if (iter_no + 1) % 4 == 0 {
                noisy[index as usize] = Cell::MISSING;
            } else {
                noisy[index as usize] = Cell::from(self.ambiguous.sample(rng)?);
            }
        }

        Ok(noisy)
    }
}

impl Default for NoiseInjector {
    fn default() -> Self {
        NoiseInjector::new(StepRange::default(), Self::DEFAULT_FRACTION)
    }
}
