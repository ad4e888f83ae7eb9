use std::f64::consts::TAU;

use crate::Draw;

/// The lower bound used by [`rand_unit`].
pub const DEFAULT_RANGE_MIN: f64 = 0.0;
/// The upper bound used by [`rand_unit`].
pub const DEFAULT_RANGE_MAX: f64 = 1.0;

/// Returns a random value in `[-1.0, 1.0)`.
pub fn centered_rand(mut draw: Draw) -> f64 {
    (draw.sample() - 0.5) * 2.0
}

/// Returns a random integer in `[min, max]`, both bounds included.
///
/// # Remarks
///
/// The bounds are not validated. When `min > max`, the result is whatever the arithmetic yields
/// (a value in `(max, min]`) and no panic occurs. The computation is carried out with `f64`,
/// so bounds beyond `±2^53` lose precision.
pub fn rand_range_int(min: i64, max: i64, mut draw: Draw) -> i64 {
    let span = max as f64 - min as f64 + 1.0;
    ((draw.sample() * span).floor() + min as f64) as i64
}

/// Returns a random value in `[min, max)`.
pub fn rand_range(min: f64, max: f64, mut draw: Draw) -> f64 {
    draw.sample() * (max - min) + min
}

/// Returns a random value in `[DEFAULT_RANGE_MIN, DEFAULT_RANGE_MAX)`.
#[inline]
pub fn rand_unit(draw: Draw) -> f64 {
    rand_range(DEFAULT_RANGE_MIN, DEFAULT_RANGE_MAX, draw)
}

/// Returns a random value following the normal distribution of the provided mean and standard
/// deviation, using the Box-Muller transform.
///
/// Two uniform values are drawn, at steps `step` and `step + 1`. Without a step, steps `0` and
/// `1` are used, so step-indexed sources always replay the same deviate. If the first value is
/// exactly `0.0`, the logarithm diverges and the result is not finite.
///
/// See <https://www.baeldung.com/cs/uniform-to-normal-distribution>.
pub fn normal_random(mean: f64, std: f64, mut draw: Draw) -> f64 {
    draw.step = Some(draw.step.unwrap_or(0));
    let u1 = draw.sample();
    let u2 = draw.sample();
    mean + std * (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

/// Returns `true` with probability `p`.
///
/// `p <= 0.0` (or NaN) never returns `true`, and `p >= 1.0` always does.
pub fn uniform_rand_bool(p: f64, mut draw: Draw) -> bool {
    draw.sample() < p
}

#[cfg(test)]
mod tests {
    use super::*;
    use randkit_rng::source::{from_step_fn, Sequence, StepNoise};
    use randkit_rng::{DefaultRng, Rng};

    /// Just below one, the largest value a source may return.
    const ALMOST_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

    #[test]
    fn centered_bounds() {
        let mut seq = Sequence::new([0.0, 0.5, ALMOST_ONE]);
        assert_eq!(centered_rand(Draw::from(&mut seq)), -1.0);
        assert_eq!(centered_rand(Draw::from(&mut seq)), 0.0);
        assert!(centered_rand(Draw::from(&mut seq)) < 1.0);
    }

    #[test]
    fn centered_distribution() {
        let mut rng = DefaultRng::from_seed(1);
        let n = 20_000;
        let mut sum = 0.0;
        for _ in 0..n {
            let x = centered_rand(Draw::from(&mut rng));
            assert!((-1.0..1.0).contains(&x));
            sum += x;
        }
        let mean = sum / n as f64;
        assert!(mean.abs() < 0.03, "mean = {mean}");
    }

    #[test]
    fn range_int_includes_both_bounds() {
        let mut seq = Sequence::new([0.0, ALMOST_ONE]);
        assert_eq!(rand_range_int(3, 7, Draw::from(&mut seq)), 3);
        assert_eq!(rand_range_int(3, 7, Draw::from(&mut seq)), 7);

        let mut seq = Sequence::new([0.0, 0.5, ALMOST_ONE]);
        for _ in 0..3 {
            assert_eq!(rand_range_int(-4, -4, Draw::from(&mut seq)), -4);
        }
    }

    #[test]
    fn range_int_distribution() {
        let mut rng = DefaultRng::from_seed(2);
        let mut counts = [0u32; 5];
        for _ in 0..10_000 {
            let x = rand_range_int(-2, 2, Draw::from(&mut rng));
            assert!((-2..=2).contains(&x), "{x} out of range");
            counts[(x + 2) as usize] += 1;
        }
        // Every value, max included, shows up about 2000 times.
        assert!(counts.iter().all(|&c| (1700..2300).contains(&c)), "{counts:?}");
    }

    #[test]
    fn range_int_reversed_bounds_do_not_panic() {
        let mut seq = Sequence::new([0.0, 0.5, ALMOST_ONE]);
        for _ in 0..3 {
            let x = rand_range_int(5, 2, Draw::from(&mut seq));
            assert!((3..=5).contains(&x), "{x}");
        }
        let mut seq = Sequence::new([0.9]);
        rand_range_int(i64::MIN, i64::MAX, Draw::from(&mut seq));
    }

    #[test]
    fn range_bounds() {
        let mut seq = Sequence::new([0.0, 0.5, ALMOST_ONE]);
        assert_eq!(rand_range(-3.0, 5.0, Draw::from(&mut seq)), -3.0);
        assert_eq!(rand_range(-3.0, 5.0, Draw::from(&mut seq)), 1.0);
        assert!(rand_range(-3.0, 5.0, Draw::from(&mut seq)) < 5.0);

        let mut rng = DefaultRng::from_seed(3);
        for _ in 0..10_000 {
            let x = rand_range(10.0, 10.5, Draw::from(&mut rng));
            assert!((10.0..10.5).contains(&x), "{x}");
            let y = rand_unit(Draw::from(&mut rng));
            assert!((0.0..1.0).contains(&y), "{y}");
        }
    }

    #[test]
    fn normal_moments() {
        let mut rng = DefaultRng::from_seed(4);
        let n = 50_000;
        let samples: Vec<f64> = (0..n)
            .map(|_| normal_random(0.0, 1.0, Draw::from(&mut rng)))
            .collect();

        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;

        assert!(mean.abs() < 0.03, "mean = {mean}");
        assert!((var.sqrt() - 1.0).abs() < 0.03, "std = {}", var.sqrt());
    }

    #[test]
    fn normal_is_shifted_and_scaled() {
        // u1 = e^-2 makes the radius exactly 2; u2 = 0 makes the cosine 1.
        let mut seq = Sequence::new([(-2.0f64).exp(), 0.0]);
        let x = normal_random(10.0, 3.0, Draw::from(&mut seq));
        assert!((x - 16.0).abs() < 1e-12, "{x}");
    }

    #[test]
    fn normal_zero_draw_is_not_finite() {
        let mut seq = Sequence::new([0.0, 0.0]);
        assert!(!normal_random(0.0, 1.0, Draw::from(&mut seq)).is_finite());
    }

    #[test]
    fn normal_reads_consecutive_steps() {
        let mut seen = Vec::new();
        let mut source = from_step_fn(|step| {
            seen.push(step);
            0.5
        });
        normal_random(0.0, 1.0, Draw::from(&mut source).at(4));
        assert_eq!(seen, [Some(4), Some(5)]);
    }

    #[test]
    fn normal_replays_with_step_noise() {
        let mut noise = StepNoise::from_seed(77);
        let a = normal_random(1.0, 2.0, Draw::from(&mut noise).at(10));
        let b = normal_random(1.0, 2.0, Draw::from(&mut noise).at(10));
        assert_eq!(a.to_bits(), b.to_bits());

        let c = normal_random(1.0, 2.0, Draw::from(&mut noise));
        let d = normal_random(1.0, 2.0, Draw::from(&mut noise));
        let e = normal_random(1.0, 2.0, Draw::from(&mut noise).at(0));
        assert_eq!(c.to_bits(), d.to_bits());
        assert_eq!(c.to_bits(), e.to_bits());
        assert_eq!(noise.cursor(), 0);
    }

    #[test]
    fn normal_without_step_reads_steps_zero_and_one() {
        let mut seen = Vec::new();
        let mut source = from_step_fn(|step| {
            seen.push(step);
            0.5
        });
        normal_random(0.0, 1.0, Draw::from(&mut source));
        assert_eq!(seen, [Some(0), Some(1)]);
    }

    #[test]
    fn single_draw_helpers_forward_the_step() {
        let mut seen = Vec::new();
        let mut source = from_step_fn(|step| {
            seen.push(step);
            0.5
        });
        centered_rand(Draw::from(&mut source).at(1));
        rand_range(0.0, 2.0, Draw::from(&mut source).at(2));
        rand_range_int(0, 9, Draw::from(&mut source).at(3));
        uniform_rand_bool(0.5, Draw::from(&mut source).at(4));
        crate::random_hex_color_string(Draw::from(&mut source).at(5));
        centered_rand(Draw::from(&mut source));
        assert_eq!(seen, [Some(1), Some(2), Some(3), Some(4), Some(5), None]);
    }

    #[test]
    fn bool_extremes() {
        let mut seq = Sequence::new([0.0, 0.5, ALMOST_ONE]);
        for _ in 0..3 {
            assert!(!uniform_rand_bool(0.0, Draw::from(&mut seq)));
            assert!(!uniform_rand_bool(-1.0, Draw::from(&mut seq)));
            assert!(!uniform_rand_bool(f64::NAN, Draw::from(&mut seq)));
            assert!(uniform_rand_bool(1.0, Draw::from(&mut seq)));
            assert!(uniform_rand_bool(2.0, Draw::from(&mut seq)));
        }
    }

    #[test]
    fn bool_is_strict() {
        let mut seq = Sequence::new([0.25]);
        assert!(!uniform_rand_bool(0.25, Draw::from(&mut seq)));
        assert!(uniform_rand_bool(0.250_001, Draw::from(&mut seq)));
    }

    #[test]
    fn deterministic_with_fixed_sequence() {
        let values = [0.42, 0.017, 0.9, 0.33];
        let run = || {
            let mut seq = Sequence::new(values);
            [
                centered_rand(Draw::from(&mut seq)),
                rand_range(-1.0, 8.0, Draw::from(&mut seq)),
                rand_range_int(0, 100, Draw::from(&mut seq)) as f64,
                normal_random(5.0, 0.5, Draw::from(&mut seq)),
            ]
        };
        assert_eq!(run().map(f64::to_bits), run().map(f64::to_bits));
    }
}
