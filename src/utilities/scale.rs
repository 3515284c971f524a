// src/utilities/scale.rs
//
// Progress shaping for the spring/ball animation.
// All functions are total over finite input.

use std::f32::consts::PI;

pub fn inverse(n: usize) -> f32 {
    1.0 / n as f32
}

/// Progress remaining once the first `i` of `n` segments are used up, floored at 0.
pub fn max_scale(x: f32, i: usize, n: usize) -> f32 {
    (x - i as f32 * inverse(n)).max(0.0)
}

/// Splits 0..1 progress into `n` equal segments and returns segment `i`
/// stretched back to 0..1.
pub fn divide_scale(x: f32, i: usize, n: usize) -> f32 {
    max_scale(x, i, n).min(inverse(n)) * n as f32
}

/// Sine ease: 0 at both ends, 1 at the midpoint.
pub fn sinify(x: f32) -> f32 {
    (x * PI).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_inverse() {
        assert_eq!(inverse(2), 0.5);
        assert_eq!(inverse(5), 0.2);
    }

    #[test]
    fn test_max_scale_floors_at_zero() {
        assert_eq!(max_scale(0.2, 1, 2), 0.0);
        assert!((max_scale(0.75, 1, 2) - 0.25).abs() < EPS);
        assert!((max_scale(0.75, 0, 2) - 0.75).abs() < EPS);
    }

    #[test]
    fn test_divide_scale_segments() {
        // first half of progress drives segment 0 only
        assert!((divide_scale(0.25, 0, 2) - 0.5).abs() < EPS);
        assert_eq!(divide_scale(0.25, 1, 2), 0.0);

        // second half saturates segment 0 and drives segment 1
        assert!((divide_scale(0.75, 0, 2) - 1.0).abs() < EPS);
        assert!((divide_scale(0.75, 1, 2) - 0.5).abs() < EPS);

        assert!((divide_scale(1.0, 1, 2) - 1.0).abs() < EPS);
        assert_eq!(divide_scale(0.0, 0, 2), 0.0);
    }

    #[test]
    fn test_divide_scale_stays_in_unit_range() {
        for n in 1..=6 {
            for i in 0..n {
                for step in 0..=100 {
                    let x = step as f32 / 100.0;
                    let value = divide_scale(x, i, n);
                    assert!(
                        (0.0..=1.0 + EPS).contains(&value),
                        "divide_scale({}, {}, {}) = {}",
                        x,
                        i,
                        n,
                        value
                    );
                }
            }
        }
    }

    #[test]
    fn test_sinify_curve() {
        assert!(sinify(0.0).abs() < EPS);
        assert!((sinify(0.5) - 1.0).abs() < EPS);
        assert!(sinify(1.0).abs() < EPS);
        assert!((sinify(0.25) - sinify(0.75)).abs() < EPS);
    }
}
