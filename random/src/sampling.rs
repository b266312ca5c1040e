//! Convenience draws on top of any [`RandomSource`]
//!
//! All helpers consume draws from the underlying generator, so they stay
//! deterministic and replayable through export/import and cloning.

use crate::error::RngError;
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};

/// Sampling helpers, available on every [`RandomSource`]
///
/// # Example
/// ```
/// use scarlet_random::{Alea, Sampling};
///
/// let mut rng = Alea::new("loot");
/// let roll = rng.range_i64(1, 7).unwrap(); // [1, 7)
/// assert!((1..7).contains(&roll));
/// ```
pub trait Sampling: RandomSource {
    /// Float in [min, max)
    fn range_f64(&mut self, min: f64, max: f64) -> Result<f64, RngError> {
        if !(min < max) || !(max - min).is_finite() {
            return Err(RngError::InvalidRange { min, max });
        }
        let value = min + self.next_f64() * (max - min);
        // Rounding can land exactly on max for wide ranges
        Ok(if value < max { value } else { min })
    }

    /// Integer in [min, max)
    fn range_i64(&mut self, min: i64, max: i64) -> Result<i64, RngError> {
        if min >= max {
            return Err(RngError::InvalidRange {
                min: min as f64,
                max: max as f64,
            });
        }
        let span = max.abs_diff(min);
        let offset = ((self.next_f64() * span as f64) as u64).min(span - 1);
        Ok(min.wrapping_add(offset as i64))
    }

    /// `true` with the given probability; at or below 0 never, at or above 1 always
    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    /// Uniformly chosen element, `None` for an empty slice
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = ((self.next_f64() * items.len() as f64) as usize).min(items.len() - 1);
        items.get(index)
    }

    /// Fisher-Yates shuffle in place
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = ((self.next_f64() * (i + 1) as f64) as usize).min(i);
            items.swap(i, j);
        }
    }
}

impl<R: RandomSource> Sampling for R {}

/// Inclusive float range, as carried by host settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMinMax")]
pub struct MinMax {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RawMinMax {
    min: f64,
    max: f64,
}

impl TryFrom<RawMinMax> for MinMax {
    type Error = RngError;

    fn try_from(raw: RawMinMax) -> Result<Self, Self::Error> {
        MinMax::new(raw.min, raw.max)
    }
}

impl MinMax {
    /// `min == max` is allowed and samples to that single value. The
    /// width `max - min` must itself be finite.
    pub fn new(min: f64, max: f64) -> Result<Self, RngError> {
        if !min.is_finite() || !max.is_finite() || min > max || !(max - min).is_finite() {
            return Err(RngError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Linear interpolation; `t` is clamped to [0, 1]
    pub fn lerp(&self, t: f64) -> f64 {
        self.min + (self.max - self.min) * t.clamp(0.0, 1.0)
    }

    /// Uniform draw within the range
    pub fn sample<R: RandomSource>(&self, rng: &mut R) -> f64 {
        self.lerp(rng.next_f64())
    }
}
