// ============================================================================
// Bitmath Library
// Branchless numeric helpers over a 32-bit signed integer lens
// ============================================================================

//! # Bitmath
//!
//! A small set of stateless numeric helpers implementing common integer
//! arithmetic (truncation, rounding, modulo, min/max, swap, parity and
//! power-of-two checks) with bitwise tricks.
//!
//! ## Features
//!
//! - **Branchless formulations** for performance-sensitive numeric paths
//! - **32-bit lens**: every bitwise operation interprets its f64 operands
//!   through a truncating two's-complement 32-bit conversion ([`numeric::to_int32`])
//! - **Sentinel semantics**: non-finite inputs never panic; each function
//!   returns a documented sentinel (0.0, NaN, false, or a NaN pair)
//! - **Strict variants**: `try_*` counterparts that report rejected inputs
//!   as [`numeric::NumericError`] instead of folding them into a sentinel
//!
//! ## Example
//!
//! ```rust
//! use bitmath::prelude::*;
//!
//! assert_eq!(to_integer(3.7), 3.0);
//! assert_eq!(positive_modulo(-3.0, 8.0), 5.0);
//! assert_eq!(next_power_of_two(5.0), 8.0);
//! assert_eq!(swap(3.0, 7.0), (7.0, 3.0));
//!
//! // Non-finite inputs yield sentinels, never panics
//! assert_eq!(to_integer(f64::NAN), 0.0);
//! assert!(min(f64::NAN, 5.0).is_nan());
//!
//! // Strict variants surface the rejection instead
//! assert!(try_min(f64::NAN, 5.0).is_err());
//! ```

pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        abs, average, ceil, floor, is_even, is_odd, is_power_of_two, max, min, negate,
        next_power_of_two, positive_modulo, round, swap, to_int32, to_integer, try_abs,
        try_average, try_ceil, try_floor, try_is_even, try_is_odd, try_is_power_of_two, try_max,
        try_min, try_negate, try_next_power_of_two, try_positive_modulo, try_round, try_swap,
        try_to_integer, NumericError, NumericResult,
    };
}
