//! Exact ceiling of a non-negative ratio.
//!
//! Whole units must cover a fractional demand, so the quotient always
//! rounds up; an exact multiple must not buy an extra unit when float
//! noise pushes it just past an integer. The quotient is snapped to the
//! nearest integer when within a relative tolerance, then ceiled.

/// Relative tolerance for treating a quotient as an exact integer
const RATIO_TOLERANCE: f64 = 1e-9;

/// Ceiling of `numerator / denominator` as a whole unit count.
///
/// Non-positive or non-finite numerator yields 0; a non-positive or
/// non-finite denominator also yields 0 (callers guard that case themselves,
/// this is the backstop). Saturates at `u32::MAX`.
pub fn ceil_ratio(numerator: f64, denominator: f64) -> u32 {
    if !denominator.is_finite() || denominator <= 0.0 {
        return 0;
    }
    if !numerator.is_finite() || numerator <= 0.0 {
        return 0;
    }

    let quotient = numerator / denominator;
    if !quotient.is_finite() {
        return 0;
    }

    let nearest = quotient.round();
    let units = if (quotient - nearest).abs() <= RATIO_TOLERANCE * nearest.max(1.0) {
        nearest
    } else {
        quotient.ceil()
    };

    if units >= u32::MAX as f64 {
        u32::MAX
    } else {
        units as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(500.0, 1200.0, 1)]
    #[case(1200.0, 1200.0, 1)]
    #[case(2400.0, 1200.0, 2)]
    #[case(2400.1, 1200.0, 3)]
    #[case(110.0, 100.0, 2)]
    #[case(0.5, 1200.0, 1)]
    fn ceil_ratio_cases(#[case] num: f64, #[case] den: f64, #[case] expected: u32) {
        assert_eq!(ceil_ratio(num, den), expected);
    }

    #[test]
    fn exact_multiple_with_float_noise_does_not_buy_an_extra_unit() {
        // 0.1 * 3 is not representable exactly; the naive ceil would say 4
        let numerator = 0.1 + 0.1 + 0.1;
        assert_eq!(ceil_ratio(numerator, 0.1), 3);
    }

    #[test]
    fn genuine_fraction_still_rounds_up() {
        assert_eq!(ceil_ratio(1200.0001, 1200.0), 2);
    }

    #[test]
    fn zero_and_degenerate_inputs_yield_zero() {
        assert_eq!(ceil_ratio(0.0, 100.0), 0);
        assert_eq!(ceil_ratio(-5.0, 100.0), 0);
        assert_eq!(ceil_ratio(100.0, 0.0), 0);
        assert_eq!(ceil_ratio(100.0, -1.0), 0);
        assert_eq!(ceil_ratio(f64::NAN, 100.0), 0);
        assert_eq!(ceil_ratio(100.0, f64::INFINITY), 0);
    }

    #[test]
    fn huge_ratio_saturates() {
        assert_eq!(ceil_ratio(1e30, 1.0), u32::MAX);
    }
}
