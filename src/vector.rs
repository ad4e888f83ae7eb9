use std::f64::consts::TAU;

use glam::DVec3;

use crate::Draw;

/// The magnitude used by [`rand_unit_vector3`].
pub const DEFAULT_MAGNITUDE: f64 = 1.0;

/// Returns a random vector of the provided magnitude.
///
/// The direction is uniformly distributed over the sphere. Two uniform values are drawn: the
/// azimuth is `2π·u1` and the polar angle is `acos(1 - 2·u2)`, which is the inverse CDF of the
/// polar angle of a uniform point on the sphere. Sampling the polar angle uniformly instead
/// would cluster points around the poles.
///
/// See <http://corysimon.github.io/articles/uniformdistn-on-sphere/>.
pub fn rand_vector3(magnitude: f64, mut draw: Draw) -> DVec3 {
    let theta = TAU * draw.sample();
    let phi = (1.0 - 2.0 * draw.sample()).acos();

    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    DVec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi) * magnitude
}

/// Returns a random vector of length [`DEFAULT_MAGNITUDE`].
#[inline]
pub fn rand_unit_vector3(draw: Draw) -> DVec3 {
    rand_vector3(DEFAULT_MAGNITUDE, draw)
}
