//! Samplers

use crate::geometry::*;
use crate::pbrt::*;
use crate::rng::*;

/// Source of uniform sample values in [0, 1). Each worker thread owns its
/// own sampler and lends it to scattering queries.
pub trait Sampler {
    /// Returns the sample value for the next dimension of the current sample
    /// vector.
    fn get_1d(&mut self) -> Float;

    /// Returns the sample value for the next two dimensions of the current
    /// sample vector.
    fn get_2d(&mut self) -> Point2f;
}

/// Implements a sampler that uses a PRNG to generate uniformly random samples.
#[derive(Clone)]
pub struct RandomSampler {
    /// The random number generator.
    rng: RNG,
}

impl RandomSampler {
    /// Create a new `RandomSampler`.
    ///
    /// * `seed` - Optional seed for the random number generator.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: match seed {
                Some(s) => RNG::new(s),
                None => RNG::default(),
            },
        }
    }
}

impl Sampler for RandomSampler {
    fn get_1d(&mut self) -> Float {
        self.rng.uniform_float()
    }

    fn get_2d(&mut self) -> Point2f {
        let x = self.rng.uniform_float();
        let y = self.rng.uniform_float();
        Point2f::new(x, y)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_in_unit_interval() {
        let mut sampler = RandomSampler::new(Some(7));
        for _ in 0..1000 {
            let u = sampler.get_1d();
            assert!((0.0..1.0).contains(&u));

            let p = sampler.get_2d();
            assert!((0.0..1.0).contains(&p.x) && (0.0..1.0).contains(&p.y));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomSampler::new(Some(42));
        let mut b = RandomSampler::new(Some(42));
        for _ in 0..16 {
            assert_eq!(a.get_2d(), b.get_2d());
        }
    }
}
