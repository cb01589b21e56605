// ============================================================================
// Numeric Module
// Branchless integer helpers over a 32-bit signed lens
// ============================================================================
//
// This module provides:
// - to_int32: the truncating f64 -> i32 coercion every bitwise operation uses
// - Sentinel-based helpers: rounding, modulo, min/max/swap, parity, powers of two
// - try_* strict variants that report rejected inputs as NumericError
//
// Design principles:
// - Every entry point guards on finiteness first and never panics
// - Bitwise formulations are bit-exact within the 32-bit signed domain
// - All functions are pure; identical inputs give identical outputs

mod bits;
mod checked;
mod coerce;
mod errors;
mod ops;
mod rounding;

pub use bits::{is_even, is_odd, is_power_of_two, next_power_of_two};
pub use checked::{
    try_abs, try_average, try_ceil, try_floor, try_is_even, try_is_odd, try_is_power_of_two,
    try_max, try_min, try_negate, try_next_power_of_two, try_positive_modulo, try_round,
    try_swap, try_to_integer,
};
pub use coerce::to_int32;
pub use errors::{NumericError, NumericResult};
pub use ops::{abs, average, max, min, negate, positive_modulo, swap};
pub use rounding::{ceil, floor, round, to_integer};
