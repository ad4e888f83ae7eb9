/// `2^-53`, the spacing of the `f64` values produced by [`f64_from_u64_01`].
const F64_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// Converts a `u64` value into a `f64` value in the range `[0.0, 1.0)`.
///
/// Only the 53 most significant bits of `x` are used.
#[inline]
pub fn f64_from_u64_01(x: u64) -> f64 {
    (x >> 11) as f64 * F64_UNIT
}
