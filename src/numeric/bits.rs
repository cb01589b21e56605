// ============================================================================
// Bit Predicates & Power-of-Two Operations
// Parity checks and power-of-two detection/rounding
// ============================================================================

use super::coerce::to_int32;

/// True iff the lowest bit of the 32-bit representation is set.
///
/// Non-finite inputs are never odd.
#[inline]
pub fn is_odd(x: f64) -> bool {
    x.is_finite() && (to_int32(x) & 1) == 1
}

/// True iff the lowest bit of the 32-bit representation is clear.
///
/// Non-finite inputs are never even.
#[inline]
pub fn is_even(x: f64) -> bool {
    x.is_finite() && (to_int32(x) & 1) == 0
}

/// True iff `x` is a power of two under the 32-bit lens.
///
/// Uses the classic `x & (x - 1)` test; the non-zero check is on the f64
/// value. Non-finite inputs are never powers of two.
///
/// # Example
/// ```
/// use bitmath::numeric::is_power_of_two;
///
/// assert!(is_power_of_two(64.0));
/// assert!(!is_power_of_two(48.0));
/// assert!(!is_power_of_two(0.0));
/// ```
#[inline]
pub fn is_power_of_two(x: f64) -> bool {
    x.is_finite() && x != 0.0 && (to_int32(x) & to_int32(x - 1.0)) == 0
}

/// Smallest power of two greater than or equal to `x`.
///
/// Decrements, spreads the high bit down with an OR-shift cascade over bit
/// widths 1, 2, 4, 8, 16, then increments. The final increment happens in
/// f64, so an input just above `2^30` yields `2^31` rather than wrapping.
///
/// Requires `x > 0`; returns NaN otherwise, and NaN for non-finite input.
///
/// # Example
/// ```
/// use bitmath::numeric::next_power_of_two;
///
/// assert_eq!(next_power_of_two(5.0), 8.0);
/// assert_eq!(next_power_of_two(8.0), 8.0);
/// assert!(next_power_of_two(0.0).is_nan());
/// ```
#[inline]
pub fn next_power_of_two(x: f64) -> f64 {
    if !x.is_finite() || x <= 0.0 {
        return f64::NAN;
    }

    let mut v = to_int32(x - 1.0);
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;

    f64::from(v) + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity() {
        assert!(is_odd(3.0));
        assert!(!is_even(3.0));
        assert!(is_even(4.0));
        assert!(!is_odd(4.0));
        assert!(is_even(0.0));
        assert!(is_odd(-3.0));
        assert!(is_even(-4.0));
    }

    #[test]
    fn test_parity_through_lens() {
        // Fractional parts truncate before the bit test
        assert!(is_odd(3.9));
        assert!(is_even(2.9));
    }

    #[test]
    fn test_parity_non_finite() {
        assert!(!is_odd(f64::NAN));
        assert!(!is_even(f64::NAN));
        assert!(!is_odd(f64::INFINITY));
        assert!(!is_even(f64::NEG_INFINITY));
    }

    #[test]
    fn test_is_power_of_two() {
        for p in [1.0, 2.0, 4.0, 8.0, 16.0, 1024.0, 1_073_741_824.0] {
            assert!(is_power_of_two(p), "{p} should be a power of two");
        }
        for n in [3.0, 5.0, 6.0, 7.0, 12.0, 100.0] {
            assert!(!is_power_of_two(n), "{n} should not be a power of two");
        }
        assert!(!is_power_of_two(0.0));
        assert!(!is_power_of_two(f64::NAN));
        assert!(!is_power_of_two(f64::INFINITY));
    }

    #[test]
    fn test_next_power_of_two() {
        assert_eq!(next_power_of_two(1.0), 1.0);
        assert_eq!(next_power_of_two(2.0), 2.0);
        assert_eq!(next_power_of_two(3.0), 4.0);
        assert_eq!(next_power_of_two(5.0), 8.0);
        assert_eq!(next_power_of_two(8.0), 8.0);
        assert_eq!(next_power_of_two(17.0), 32.0);
        assert_eq!(next_power_of_two(1000.0), 1024.0);
    }

    #[test]
    fn test_next_power_of_two_top_of_range() {
        // Spread saturates at 0x7FFF_FFFF; the f64 increment carries past it
        assert_eq!(next_power_of_two(1_073_741_825.0), 2_147_483_648.0);
    }

    #[test]
    fn test_next_power_of_two_rejects_non_positive() {
        assert!(next_power_of_two(0.0).is_nan());
        assert!(next_power_of_two(-8.0).is_nan());
        assert!(next_power_of_two(f64::NAN).is_nan());
        assert!(next_power_of_two(f64::INFINITY).is_nan());
    }
}
