//! Uniform random sources.
//!
//! A [`RandomSource`] hands out `f64` values in `[0.0, 1.0)`, optionally indexed by a *step*.
//! Sources that have no notion of steps (regular generators, plain closures) simply ignore it,
//! while step-indexed sources such as [`StepNoise`] return the same value every time they are
//! asked for the same step, which makes a sequence of draws replayable.

use crate::noises::Mixer;
use crate::{utility, FromRng, Noise, Rng};

/// A provider of uniformly distributed `f64` values in `[0.0, 1.0)`.
pub trait RandomSource {
    /// Returns a value in `[0.0, 1.0)`.
    ///
    /// `step` is an index that step-aware sources may use to make their output reproducible.
    /// Other sources are free to ignore it.
    fn sample(&mut self, step: Option<u64>) -> f64;
}

impl<R: Rng> RandomSource for R {
    #[inline]
    fn sample(&mut self, _step: Option<u64>) -> f64 {
        self.next_f64_01()
    }
}

/// A [`RandomSource`] backed by a closure that takes no step.
///
/// Created by [`from_fn`].
#[derive(Debug, Clone)]
pub struct FromFn<F>(F);

/// Wraps a closure returning values in `[0.0, 1.0)` into a [`RandomSource`].
///
/// The step passed to the source is discarded.
pub fn from_fn<F: FnMut() -> f64>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<F: FnMut() -> f64> RandomSource for FromFn<F> {
    #[inline]
    fn sample(&mut self, _step: Option<u64>) -> f64 {
        (self.0)()
    }
}

/// A [`RandomSource`] backed by a closure that receives the step.
///
/// Created by [`from_step_fn`].
#[derive(Debug, Clone)]
pub struct FromStepFn<F>(F);

/// Wraps a step-aware closure returning values in `[0.0, 1.0)` into a [`RandomSource`].
pub fn from_step_fn<F: FnMut(Option<u64>) -> f64>(f: F) -> FromStepFn<F> {
    FromStepFn(f)
}

impl<F: FnMut(Option<u64>) -> f64> RandomSource for FromStepFn<F> {
    #[inline]
    fn sample(&mut self, step: Option<u64>) -> f64 {
        (self.0)(step)
    }
}

/// A seeded, step-indexed [`RandomSource`].
///
/// Sampling a given step always yields the same value. When no step is provided, an internal
/// cursor (starting at zero) is read and advanced instead.
#[derive(Debug, Clone)]
pub struct StepNoise {
    mixer: Mixer<1>,
    cursor: u64,
}

impl StepNoise {
    /// Creates a new [`StepNoise`] from the provided seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(&mut crate::DefaultRng::from_seed(seed))
    }

    /// Returns the step that will be read by the next sample made without a step.
    #[inline]
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    /// Returns the value associated with `step`, without touching the cursor.
    pub fn at(&self, step: u64) -> f64 {
        // The mixer alone is linear in its input; the finalizer decorrelates neighbouring steps.
        utility::f64_from_u64_01(utility::splitmix64(self.mixer.sample([step])))
    }
}

impl FromRng for StepNoise {
    fn from_rng(rng: &mut impl Rng) -> Self {
        Self {
            mixer: Mixer::from_rng(rng),
            cursor: 0,
        }
    }
}

impl RandomSource for StepNoise {
    fn sample(&mut self, step: Option<u64>) -> f64 {
        let step = step.unwrap_or_else(|| {
            let cursor = self.cursor;
            self.cursor = cursor.wrapping_add(1);
            cursor
        });
        self.at(step)
    }
}

/// A [`RandomSource`] replaying a fixed list of values.
///
/// A step selects `values[step % len]`; without a step, the values are returned in order and
/// wrap around. An empty sequence always yields `0.0`.
///
/// The values are returned as-is, even when outside of `[0.0, 1.0)`.
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    values: Vec<f64>,
    cursor: usize,
}

impl Sequence {
    /// Creates a new [`Sequence`] replaying `values`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Returns the values replayed by this sequence.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Rewinds the internal cursor to the first value.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}

impl RandomSource for Sequence {
    fn sample(&mut self, step: Option<u64>) -> f64 {
        let len = self.values.len();
        if len == 0 {
            return 0.0;
        }

        let index = match step {
            Some(step) => (step % len as u64) as usize,
            None => {
                let index = self.cursor;
                self.cursor = (index + 1) % len;
                index
            }
        };

        self.values[index]
    }
}
