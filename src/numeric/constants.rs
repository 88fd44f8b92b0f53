// ============================================================================
// Mathematical Constants
// Series approximations of PI and ln(2), evaluated at compile time
// ============================================================================
//
// Area formulas need PI (circular goods) and ln(2) (rectangular goods) as
// `const` values so that catalog capacity can be checked during compilation.
// `f64::sqrt` and `f64::ln` are not `const fn`, so both constants are derived
// from convergent series here.

/// Iteration budget for [`PI`]. Far more than double precision needs; the
/// iteration stops as soon as the estimate saturates.
pub const PI_ITERATIONS: u32 = 5_000_000;

/// Number of series terms for [`LN2`].
///
/// With `x = 1/3` each term shrinks by roughly an order of magnitude, so 24
/// terms drive the remainder below the last bit of an `f64`.
pub const LN2_ITERATIONS: u32 = 24;

/// Approximation of PI, as accurate as `f64` allows.
pub const PI: f64 = pi_approx(PI_ITERATIONS);

/// Approximation of ln(2), as accurate as `f64` allows.
pub const LN2: f64 = ln_approx(2.0, LN2_ITERATIONS);

/// Square root by Newton's method, starting above the root.
///
/// The iterates decrease monotonically; the loop ends on the first step that
/// fails to decrease, which is the floating-point fixed point.
pub(crate) const fn sqrt(x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }

    let mut estimate = if x >= 1.0 { x } else { 1.0 };
    loop {
        let next = 0.5 * (estimate + x / estimate);
        if next >= estimate {
            return estimate;
        }
        estimate = next;
    }
}

#[inline]
const fn abs(x: f64) -> f64 {
    if x < 0.0 {
        -x
    } else {
        x
    }
}

/// Archimedes' method: perimeters of regular polygons inscribed in and
/// circumscribed about the unit circle, starting from hexagons and doubling
/// the side count on every iteration.
///
/// The circumscribed perimeter is refined by the harmonic mean and the
/// inscribed one by the geometric mean. Once the gap between them stops
/// shrinking the representation is saturated and further iterations cannot
/// change the result, so the loop ends early.
pub(crate) const fn pi_approx(iterations: u32) -> f64 {
    let mut inscribed = 6.0;
    let mut circumscribed = 6.0 * 2.0 / sqrt(3.0);
    let mut gap = circumscribed - inscribed;

    let mut i = 0;
    while i < iterations {
        let next_circumscribed = 2.0 * inscribed * circumscribed / (inscribed + circumscribed);
        let next_inscribed = sqrt(inscribed * next_circumscribed);
        let next_gap = abs(next_circumscribed - next_inscribed);
        if next_gap >= gap {
            break;
        }

        circumscribed = next_circumscribed;
        inscribed = next_inscribed;
        gap = next_gap;
        i += 1;
    }

    (circumscribed + inscribed) / 4.0
}

/// `n`-th partial sum of `ln((1 + x) / (1 - x)) = 2 (x + x^3/3 + x^5/5 + ...)`
/// with `x` chosen so that `(1 + x) / (1 - x) = a`.
pub(crate) const fn ln_approx(a: f64, n: u32) -> f64 {
    let x = (a - 1.0) / (a + 1.0);

    let mut power = x;
    let mut sum = 0.0;
    let mut i = 1;
    while i <= n {
        sum += power / (2 * i - 1) as f64;
        power *= x * x;
        i += 1;
    }

    2.0 * sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt() {
        assert_eq!(sqrt(0.0), 0.0);
        assert_eq!(sqrt(-4.0), 0.0);
        assert_eq!(sqrt(1.0), 1.0);
        assert_eq!(sqrt(4.0), 2.0);
        assert!((sqrt(3.0) - 3.0f64.sqrt()).abs() < 1e-15);
        assert!((sqrt(0.25) - 0.5).abs() < 1e-15);
        assert!((sqrt(1e10) - 1e5).abs() < 1e-9);
    }

    #[test]
    fn test_pi_accuracy() {
        assert!((PI - std::f64::consts::PI).abs() < 1e-9);
        assert!((PI - std::f64::consts::PI).abs() < 1e-14);
    }

    #[test]
    fn test_pi_starts_from_hexagons() {
        let hexagons = (6.0 + 12.0 / 3.0f64.sqrt()) / 4.0;
        assert!((pi_approx(0) - hexagons).abs() < 1e-15);
    }

    #[test]
    fn test_pi_converges_monotonically() {
        let mut previous_error = f64::INFINITY;
        for n in 0..16 {
            let error = (pi_approx(n) - std::f64::consts::PI).abs();
            assert!(error < previous_error, "iteration {n}: {error} !< {previous_error}");
            previous_error = error;
        }
    }

    #[test]
    fn test_pi_saturates() {
        assert_eq!(pi_approx(1_000), pi_approx(PI_ITERATIONS));
    }

    #[test]
    fn test_ln2_accuracy() {
        assert!((LN2 - std::f64::consts::LN_2).abs() < 1e-15);
    }

    #[test]
    fn test_ln2_few_terms() {
        // Six terms leave a remainder of about 1e-7.
        let six = ln_approx(2.0, 6);
        assert!((six - std::f64::consts::LN_2).abs() < 1e-6);
        assert!(six < std::f64::consts::LN_2);
    }

    #[test]
    fn test_ln_other_arguments() {
        assert_eq!(ln_approx(1.0, 10), 0.0);
        assert!((ln_approx(1.5, 30) - 1.5f64.ln()).abs() < 1e-15);
    }

    #[test]
    fn test_constants_usable_in_const_context() {
        const UNIT_CIRCLE: f64 = PI * 1.0 * 1.0;
        const HALF_SQUARE: f64 = LN2 * 2.0 * 2.0;
        assert!(UNIT_CIRCLE > 3.14 && UNIT_CIRCLE < 3.15);
        assert!(HALF_SQUARE > 2.77 && HALF_SQUARE < 2.78);
    }
}
