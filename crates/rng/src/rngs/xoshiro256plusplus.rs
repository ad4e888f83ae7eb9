use crate::{utility, Rng};

/// A general-purpose pseudo-random number generator.
///
/// This number generator is based on the [xoshiro256++][source].
///
/// [source]: https://prng.di.unimi.it/xoshiro256plusplus.c
#[derive(Debug, Clone)]
pub struct Xoshiro256PlusPlus {
    s: [u64; 4],
}

impl Xoshiro256PlusPlus {
    /// Creates a generator directly from its internal state.
    ///
    /// # Remarks
    ///
    /// The state must not be all zeros, otherwise the generator only ever outputs zeros.
    pub const fn from_state(s: [u64; 4]) -> Self {
        Self { s }
    }
}

impl Rng for Xoshiro256PlusPlus {
    fn from_seed(seed: u64) -> Self
    where
        Self: Sized,
    {
        // SplitMix64 never outputs four zeros in a row, so the state is always valid.
        let a = utility::splitmix64(seed);
        let b = utility::splitmix64(a);
        let c = utility::splitmix64(b);
        let d = utility::splitmix64(c);

        Self { s: [a, b, c, d] }
    }

    fn next_u64(&mut self) -> u64 {
        let [s0, s1, s2, s3] = &mut self.s;

        let ret = s0.wrapping_add(*s3).rotate_left(23).wrapping_add(*s0);

        let t = *s1 << 17;

        *s2 ^= *s0;
        *s3 ^= *s1;
        *s1 ^= *s2;
        *s0 ^= *s3;

        *s2 ^= t;

        *s3 = s3.rotate_left(45);

        ret
    }
}
