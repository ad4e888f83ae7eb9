//! Integer mixing, primality testing and float conversion shared by the generators and noises.

mod splitmix64;
pub use splitmix64::*;

mod convert;
pub use convert::*;

mod primes;
pub use primes::*;
