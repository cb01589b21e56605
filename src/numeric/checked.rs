// ============================================================================
// Strict Operation Variants
// Result-returning counterparts of the sentinel-based operations
// ============================================================================
//
// The sentinel values (0.0, NaN, false) are all legitimate computed outputs,
// so a caller cannot tell a rejected input from a real result. These
// variants report precondition failures as errors instead. On success the
// value is always identical to what the sentinel-based function returns.

use super::bits;
use super::errors::{NumericError, NumericResult};
use super::ops;
use super::rounding;

/// Reject non-finite operands before dispatching to a core operation.
fn ensure_finite(op: &'static str, values: &[f64]) -> NumericResult<()> {
    for &v in values {
        if !v.is_finite() {
            tracing::trace!(operation = op, value = v, "rejecting non-finite input");
            return Err(NumericError::NonFiniteInput);
        }
    }
    Ok(())
}

/// Strict `to_integer`.
#[inline]
pub fn try_to_integer(x: f64) -> NumericResult<f64> {
    ensure_finite("to_integer", &[x])?;
    Ok(rounding::to_integer(x))
}

/// Strict `round`.
#[inline]
pub fn try_round(x: f64) -> NumericResult<f64> {
    ensure_finite("round", &[x])?;
    Ok(rounding::round(x))
}

/// Strict `ceil`.
#[inline]
pub fn try_ceil(x: f64) -> NumericResult<f64> {
    ensure_finite("ceil", &[x])?;
    Ok(rounding::ceil(x))
}

/// Strict `floor`.
#[inline]
pub fn try_floor(x: f64) -> NumericResult<f64> {
    ensure_finite("floor", &[x])?;
    Ok(rounding::floor(x))
}

/// Strict `positive_modulo`.
///
/// # Errors
/// `NonFiniteInput` for non-finite operands, `NonPositiveDivisor` for
/// `y <= 0`.
#[inline]
pub fn try_positive_modulo(x: f64, y: f64) -> NumericResult<f64> {
    ensure_finite("positive_modulo", &[x, y])?;
    if y <= 0.0 {
        tracing::trace!(divisor = y, "rejecting non-positive divisor");
        return Err(NumericError::NonPositiveDivisor);
    }
    Ok(ops::positive_modulo(x, y))
}

/// Strict `negate`.
#[inline]
pub fn try_negate(x: f64) -> NumericResult<f64> {
    ensure_finite("negate", &[x])?;
    Ok(ops::negate(x))
}

/// Strict `abs`.
#[inline]
pub fn try_abs(x: f64) -> NumericResult<f64> {
    ensure_finite("abs", &[x])?;
    Ok(ops::abs(x))
}

/// Strict `min`.
#[inline]
pub fn try_min(x: f64, y: f64) -> NumericResult<f64> {
    ensure_finite("min", &[x, y])?;
    Ok(ops::min(x, y))
}

/// Strict `max`.
#[inline]
pub fn try_max(x: f64, y: f64) -> NumericResult<f64> {
    ensure_finite("max", &[x, y])?;
    Ok(ops::max(x, y))
}

/// Strict `swap`.
#[inline]
pub fn try_swap(x: f64, y: f64) -> NumericResult<(f64, f64)> {
    ensure_finite("swap", &[x, y])?;
    Ok(ops::swap(x, y))
}

/// Strict `average`.
#[inline]
pub fn try_average(x: f64, y: f64) -> NumericResult<f64> {
    ensure_finite("average", &[x, y])?;
    Ok(ops::average(x, y))
}

/// Strict `is_odd`.
#[inline]
pub fn try_is_odd(x: f64) -> NumericResult<bool> {
    ensure_finite("is_odd", &[x])?;
    Ok(bits::is_odd(x))
}

/// Strict `is_even`.
#[inline]
pub fn try_is_even(x: f64) -> NumericResult<bool> {
    ensure_finite("is_even", &[x])?;
    Ok(bits::is_even(x))
}

/// Strict `is_power_of_two`.
#[inline]
pub fn try_is_power_of_two(x: f64) -> NumericResult<bool> {
    ensure_finite("is_power_of_two", &[x])?;
    Ok(bits::is_power_of_two(x))
}

/// Strict `next_power_of_two`.
///
/// # Errors
/// `NonFiniteInput` for non-finite input, `NonPositiveInput` for `x <= 0`.
#[inline]
pub fn try_next_power_of_two(x: f64) -> NumericResult<f64> {
    ensure_finite("next_power_of_two", &[x])?;
    if x <= 0.0 {
        tracing::trace!(value = x, "rejecting non-positive input");
        return Err(NumericError::NonPositiveInput);
    }
    Ok(bits::next_power_of_two(x))
}
