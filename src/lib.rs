//! Small random-number helpers built on an injectable uniform random source.
//!
//! Every helper takes a [`Draw`], which selects the [`RandomSource`] to read uniform values
//! from and, optionally, the step to read them at. [`Draw::default()`] uses the default source
//! of the current thread.
//!
//! ```
//! use randkit::{rand_range_int, Draw};
//! use randkit::rng::source::StepNoise;
//!
//! let die = rand_range_int(1, 6, Draw::default());
//! assert!((1..=6).contains(&die));
//!
//! // Step-indexed sources make draws replayable.
//! let mut noise = StepNoise::from_seed(42);
//! let a = rand_range_int(1, 6, Draw::from(&mut noise).at(3));
//! let b = rand_range_int(1, 6, Draw::from(&mut noise).at(3));
//! assert_eq!(a, b);
//! ```
//!
//! None of the helpers validate their input: invalid values propagate through the floating
//! point arithmetic (NaN, infinities, out-of-range results) rather than causing a panic.

mod color;
mod draw;
mod scalar;
mod vector;

pub use color::*;
pub use draw::*;
pub use scalar::*;
pub use vector::*;

pub use glam::DVec3;
pub use randkit_rng as rng;
pub use randkit_rng::RandomSource;
