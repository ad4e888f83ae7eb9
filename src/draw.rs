//! Per-call configuration of the random helpers, and the default random source.

use std::cell::RefCell;

use randkit_rng::{DefaultRng, RandomSource, Rng};

/// Describes where the uniform values consumed by a helper come from.
///
/// [`Draw::default()`] reads from the default source of the current thread, without a step.
///
/// # Steps
///
/// When `step` is set, every uniform value taken through this [`Draw`] is requested at the
/// current step, which is then incremented. A helper that needs two values therefore reads
/// steps `step` and `step + 1`.
#[derive(Default)]
pub struct Draw<'a> {
    /// The source to read from.
    ///
    /// If left unset, the default source of the current thread is used.
    pub source: Option<&'a mut dyn RandomSource>,
    /// The step forwarded to the source.
    pub step: Option<u64>,
}

impl<'a> Draw<'a> {
    /// Creates a [`Draw`] reading from the provided source.
    pub fn with(source: &'a mut dyn RandomSource) -> Self {
        Self {
            source: Some(source),
            step: None,
        }
    }

    /// Sets the step of the first value drawn.
    pub fn at(mut self, step: u64) -> Self {
        self.step = Some(step);
        self
    }

    /// Takes the next uniform value.
    pub fn sample(&mut self) -> f64 {
        let step = self.step;
        self.step = step.map(|s| s.wrapping_add(1));

        match &mut self.source {
            Some(source) => source.sample(step),
            None => with_default_source(|source| source.sample(step)),
        }
    }
}

impl<'a, S: RandomSource> From<&'a mut S> for Draw<'a> {
    #[inline]
    fn from(source: &'a mut S) -> Self {
        Self::with(source)
    }
}

thread_local! {
    static DEFAULT_SOURCE: RefCell<DefaultRng> = RefCell::new(DefaultRng::from_seed(os_seed()));
}

/// Gathers a seed for the default source of a new thread.
#[profiling::function]
fn os_seed() -> u64 {
    let seed = match randkit_rng::try_entropy() {
        Some(seed) => seed,
        None => {
            randkit_log::warning!(
                "the operating system did not provide entropy, seeding from the system clock"
            );
            randkit_rng::clock_entropy()
        }
    };

    randkit_log::trace!("seeding the default random source with {seed:#018x}");

    seed
}

/// Runs `f` with the default random source of the current thread.
///
/// # Panics
///
/// Calling this function from within `f` panics, as the default source is already borrowed.
pub fn with_default_source<R>(f: impl FnOnce(&mut dyn RandomSource) -> R) -> R {
    DEFAULT_SOURCE.with(|source| f(&mut *source.borrow_mut()))
}

/// Re-seeds the default random source of the current thread.
///
/// Draws made through [`Draw::default()`] on this thread are reproducible afterwards.
pub fn seed_default_source(seed: u64) {
    randkit_log::trace!("re-seeding the default random source with {seed:#018x}");
    DEFAULT_SOURCE.with(|source| *source.borrow_mut() = DefaultRng::from_seed(seed));
}
