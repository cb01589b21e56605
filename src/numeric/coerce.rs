// ============================================================================
// 32-Bit Coercion
// Truncating conversion from f64 to the signed 32-bit operand domain
// ============================================================================

/// 2^32 as an f64. Exactly representable.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// 2^31 as an f64. Exactly representable.
const TWO_POW_31: f64 = 2_147_483_648.0;

/// Convert an f64 to its 32-bit signed representation.
///
/// This is the lens every bitwise operation in this crate looks through:
/// truncate toward zero, reduce modulo 2^32, and map the residue into
/// `[-2^31, 2^31)`. Magnitudes beyond the 32-bit signed range therefore
/// wrap with two's-complement semantics rather than saturating.
///
/// Non-finite inputs (NaN, positive/negative infinity) and zero map to 0.
///
/// # Example
/// ```
/// use bitmath::numeric::to_int32;
///
/// assert_eq!(to_int32(3.9), 3);
/// assert_eq!(to_int32(-3.9), -3);
/// assert_eq!(to_int32(2_147_483_648.0), i32::MIN); // wraps
/// assert_eq!(to_int32(f64::NAN), 0);
/// ```
#[inline]
pub fn to_int32(x: f64) -> i32 {
    if !x.is_finite() || x == 0.0 {
        return 0;
    }

    // Truncation and the modulo reduction are both exact in f64: trunc
    // produces an integral double, and fmod of integral doubles is exact.
    let m = x.trunc() % TWO_POW_32;

    if m >= TWO_POW_31 {
        (m - TWO_POW_32) as i32
    } else if m < -TWO_POW_31 {
        (m + TWO_POW_32) as i32
    } else {
        m as i32
    }
}

/// True iff every value in the slice is finite.
///
/// Convenience guard for call sites that take multiple operands.
#[inline]
pub(crate) fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_toward_zero() {
        assert_eq!(to_int32(0.0), 0);
        assert_eq!(to_int32(-0.0), 0);
        assert_eq!(to_int32(1.0), 1);
        assert_eq!(to_int32(1.999), 1);
        assert_eq!(to_int32(-1.999), -1);
        assert_eq!(to_int32(42.5), 42);
        assert_eq!(to_int32(-42.5), -42);
    }

    #[test]
    fn test_non_finite_maps_to_zero() {
        assert_eq!(to_int32(f64::NAN), 0);
        assert_eq!(to_int32(f64::INFINITY), 0);
        assert_eq!(to_int32(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn test_boundary_values() {
        assert_eq!(to_int32(2_147_483_647.0), i32::MAX);
        assert_eq!(to_int32(-2_147_483_648.0), i32::MIN);
    }

    #[test]
    fn test_wraparound() {
        // One past each signed boundary
        assert_eq!(to_int32(2_147_483_648.0), i32::MIN);
        assert_eq!(to_int32(-2_147_483_649.0), i32::MAX);

        // Full-period wrap
        assert_eq!(to_int32(4_294_967_296.0), 0);
        assert_eq!(to_int32(4_294_967_301.0), 5);
        assert_eq!(to_int32(-4_294_967_301.0), -5);
    }

    #[test]
    fn test_large_magnitudes() {
        // 2^53 is a multiple of 2^32
        assert_eq!(to_int32(9_007_199_254_740_992.0), 0);
        assert_eq!(to_int32(9_007_199_254_740_992.0 + 7.0), 7);
        // 2^80, itself a multiple of 2^32
        assert_eq!(to_int32(1.2089258196146292e24), 0);
        assert_eq!(to_int32(f64::MAX), 0);
        assert_eq!(to_int32(f64::MIN), 0);
    }

    #[test]
    fn test_subnormals() {
        assert_eq!(to_int32(f64::MIN_POSITIVE), 0);
        assert_eq!(to_int32(5e-324), 0);
    }
}
