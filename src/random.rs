// Random deviates consumed by the search engine.
// Any `rand::Rng` works; tests can supply scripted sources instead.

use rand::seq::SliceRandom;
use rand::Rng;

/// Source of the random draws the search engine needs.
pub trait RandomSource {
    /// Uniform draw from `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Triangular draw over `[low, high]` peaking at `mode`.
    fn triangular(&mut self, low: f64, high: f64, mode: f64) -> f64;

    /// Shuffle a slice uniformly in place.
    fn shuffle<T>(&mut self, items: &mut [T]);
}

impl<R: Rng> RandomSource for R {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.random_range(low..=high)
    }

    fn triangular(&mut self, low: f64, high: f64, mode: f64) -> f64 {
        let u: f64 = self.random();
        triangular_from_unit(u, low, high, mode)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(self);
    }
}

/// Inverse CDF of the triangular distribution evaluated at `u` in `[0, 1)`.
pub fn triangular_from_unit(u: f64, low: f64, high: f64, mode: f64) -> f64 {
    let span = high - low;
    if span <= 0.0 {
        return low;
    }
    let mode = mode.clamp(low, high);
    let split = (mode - low) / span;
    if u < split {
        low + libm::sqrt(u * span * (mode - low))
    } else {
        high - libm::sqrt((1.0 - u) * span * (high - mode))
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::RandomSource;
    use alloc::collections::VecDeque;

    /// Replays fixed draws. Shuffles leave the slice untouched.
    pub struct ScriptedSource {
        pub uniforms: VecDeque<f64>,
        pub triangulars: VecDeque<f64>,
    }

    impl ScriptedSource {
        pub fn new(uniforms: &[f64], triangulars: &[f64]) -> Self {
            Self {
                uniforms: uniforms.iter().copied().collect(),
                triangulars: triangulars.iter().copied().collect(),
            }
        }
    }

    impl RandomSource for ScriptedSource {
        fn uniform(&mut self, low: f64, _high: f64) -> f64 {
            self.uniforms.pop_front().unwrap_or(low)
        }

        fn triangular(&mut self, low: f64, _high: f64, _mode: f64) -> f64 {
            self.triangulars.pop_front().unwrap_or(low)
        }

        fn shuffle<T>(&mut self, _items: &mut [T]) {}
    }
}
