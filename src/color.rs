use crate::Draw;

/// The largest 24-bit color, `#ffffff`.
const MAX_COLOR: f64 = 0xFF_FFFF as f64;

/// Returns a random 24-bit color, formatted as lowercase hexadecimal.
///
/// # Remarks
///
/// The string has no leading `#` and is *not* padded: small values yield fewer than six digits
/// (`255` is rendered as `"ff"`, not `"0000ff"`). A draw of `0.0` yields `"0"`, and because the
/// source never returns `1.0`, the largest reachable color is `"fffffe"`.
///
/// Draws outside of `[0.0, 1.0)` saturate: negative values and NaN render as `"0"`.
pub fn random_hex_color_string(mut draw: Draw) -> String {
    let color = (draw.sample() * MAX_COLOR).floor() as u32;
    format!("{color:x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use randkit_rng::source::{from_fn, Sequence};
    use randkit_rng::{DefaultRng, Rng};

    #[test]
    fn boundaries() {
        let mut zero = from_fn(|| 0.0);
        assert_eq!(random_hex_color_string(Draw::from(&mut zero)), "0");

        let mut almost_one = from_fn(|| 1.0 - f64::EPSILON / 2.0);
        assert_eq!(random_hex_color_string(Draw::from(&mut almost_one)), "fffffe");
    }

    #[test]
    fn not_padded() {
        let mut seq = Sequence::new([255.5 / MAX_COLOR, 0.5]);
        assert_eq!(random_hex_color_string(Draw::from(&mut seq)), "ff");
        assert_eq!(random_hex_color_string(Draw::from(&mut seq)), "7fffff");
    }

    #[test]
    fn garbage_saturates() {
        let mut seq = Sequence::new([-0.5, f64::NAN]);
        assert_eq!(random_hex_color_string(Draw::from(&mut seq)), "0");
        assert_eq!(random_hex_color_string(Draw::from(&mut seq)), "0");
    }

    #[test]
    fn always_lowercase_hex() {
        let mut rng = DefaultRng::from_seed(6);
        for _ in 0..1_000 {
            let s = random_hex_color_string(Draw::from(&mut rng));
            assert!((1..=6).contains(&s.len()), "{s}");
            assert!(s.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')), "{s}");
            assert!(u32::from_str_radix(&s, 16).unwrap() < 0xFF_FFFF);
        }
    }
}
