// ============================================================================
// Rounding Operations
// Truncation and rounding through the 32-bit lens
// ============================================================================

use super::coerce::to_int32;

/// Truncate a value toward zero via the 32-bit conversion.
///
/// Returns `0.0` if the input is not finite.
///
/// # Example
/// ```
/// use bitmath::numeric::to_integer;
///
/// assert_eq!(to_integer(3.7), 3.0);
/// assert_eq!(to_integer(-3.7), -3.0);
/// assert_eq!(to_integer(f64::NAN), 0.0);
/// ```
#[inline]
pub fn to_integer(x: f64) -> f64 {
    if !x.is_finite() {
        return 0.0;
    }
    f64::from(to_int32(x))
}

/// Round a value to the nearest integer, ties away from negative infinity.
///
/// Adds 0.5 and truncates through the 32-bit lens. Returns `0.0` if the
/// input is not finite.
#[inline]
pub fn round(x: f64) -> f64 {
    if !x.is_finite() {
        return 0.0;
    }
    f64::from(to_int32(x + 0.5))
}

/// Round a value up using the negate-increment-negate identity (`-~x`).
///
/// The complement happens inside the 32-bit lens; the final negation is
/// performed in f64, so `ceil` of `i32::MAX` yields `2^31` rather than
/// wrapping. For integral inputs this identity yields `x + 1`.
///
/// Returns `0.0` if the input is not finite.
#[inline]
pub fn ceil(x: f64) -> f64 {
    if !x.is_finite() {
        return 0.0;
    }
    -f64::from(!to_int32(x))
}

/// Round a value down via 32-bit truncation (`x | 0`).
///
/// Truncates toward zero, so negative non-integers round toward zero
/// rather than toward negative infinity. Returns `0.0` if the input is
/// not finite.
#[inline]
pub fn floor(x: f64) -> f64 {
    if !x.is_finite() {
        return 0.0;
    }
    f64::from(to_int32(x))
}
