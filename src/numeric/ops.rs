// ============================================================================
// Arithmetic & Selection Operations
// Modulo, negation, absolute value, branchless min/max/swap, integer average
// ============================================================================

use super::coerce::{all_finite, to_int32};

/// Positive modulo: `x mod y` with the result in `[0, y)`.
///
/// When `y` reduces to a power of two under the 32-bit lens, the result is
/// computed with a bitmask (`x & (y - 1)`); otherwise the f64 remainder
/// operator is used (sign of the dividend).
///
/// Returns `0.0` if either input is not finite, or if `y <= 0`.
///
/// # Example
/// ```
/// use bitmath::numeric::positive_modulo;
///
/// assert_eq!(positive_modulo(13.0, 8.0), 5.0);
/// assert_eq!(positive_modulo(-3.0, 8.0), 5.0);
/// assert_eq!(positive_modulo(7.0, 0.0), 0.0);
/// ```
#[inline]
pub fn positive_modulo(x: f64, y: f64) -> f64 {
    if !x.is_finite() || !y.is_finite() || y <= 0.0 {
        return 0.0;
    }

    let mask = to_int32(y - 1.0);
    if (to_int32(y) & mask) == 0 {
        f64::from(to_int32(x) & mask)
    } else {
        x % y
    }
}

/// Arithmetic negation (`0 - x`).
///
/// Pure floating-point; the 32-bit lens is not involved. Returns `0.0` if
/// the input is not finite.
#[inline]
pub fn negate(x: f64) -> f64 {
    if x.is_finite() {
        0.0 - x
    } else {
        0.0
    }
}

/// Absolute value via the sign-mask XOR identity (`x ^ (x >> 31)`).
///
/// Operates on the 32-bit representation. For negative inputs the identity
/// yields `-x - 1` (the complement without the increment); that is the
/// contract of this function, kept bit-exact.
///
/// Returns `0.0` if the input is not finite.
#[inline]
pub fn abs(x: f64) -> f64 {
    if !x.is_finite() {
        return 0.0;
    }
    let xi = to_int32(x);
    f64::from(xi ^ (xi >> 31))
}

/// Smaller of two values, selected branchlessly.
///
/// The comparison is performed on the f64 inputs; the selected value passes
/// through the 32-bit lens, so fractional parts are dropped. Returns NaN if
/// either input is not finite.
#[inline]
pub fn min(x: f64, y: f64) -> f64 {
    if !all_finite(&[x, y]) {
        return f64::NAN;
    }
    let (xi, yi) = (to_int32(x), to_int32(y));
    let mask = -i32::from(x < y);
    f64::from(yi ^ ((xi ^ yi) & mask))
}

/// Larger of two values, selected branchlessly.
///
/// Same technique as `min`. Returns NaN if either input is not finite.
#[inline]
pub fn max(x: f64, y: f64) -> f64 {
    if !all_finite(&[x, y]) {
        return f64::NAN;
    }
    let (xi, yi) = (to_int32(x), to_int32(y));
    let mask = -i32::from(x < y);
    f64::from(xi ^ ((xi ^ yi) & mask))
}

/// Return `(y, x)` as an ordered pair via XOR-swap over the 32-bit lens.
///
/// Returns `(NaN, NaN)` if either input is not finite.
///
/// # Example
/// ```
/// use bitmath::numeric::swap;
///
/// assert_eq!(swap(3.0, 7.0), (7.0, 3.0));
/// ```
#[inline]
pub fn swap(x: f64, y: f64) -> (f64, f64) {
    if !all_finite(&[x, y]) {
        return (f64::NAN, f64::NAN);
    }

    let mut xi = to_int32(x);
    let mut yi = to_int32(y);
    xi ^= yi;
    yi ^= xi;
    xi ^= yi;

    (f64::from(xi), f64::from(yi))
}

/// Integer average of two values: `(x + y) >> 1`.
///
/// The sum is taken in f64, coerced through the 32-bit lens, then
/// arithmetic-shifted, giving the floor of the mean. Returns NaN if either
/// input is not finite.
#[inline]
pub fn average(x: f64, y: f64) -> f64 {
    if !all_finite(&[x, y]) {
        return f64::NAN;
    }
    f64::from(to_int32(x + y) >> 1)
}
