// ============================================================================
// Basic Usage Example
// ============================================================================

use bitmath::prelude::*;

fn main() {
    println!("=== Bitmath Example ===\n");

    // Rounding through the 32-bit lens
    println!("to_integer(3.7)   = {}", to_integer(3.7));
    println!("round(3.5)        = {}", round(3.5));
    println!("ceil(2.1)         = {}", ceil(2.1));
    println!("floor(-2.1)       = {}\n", floor(-2.1));

    // Modulo: mask path for power-of-two divisors, remainder otherwise
    println!("positive_modulo(13, 8)  = {}", positive_modulo(13.0, 8.0));
    println!("positive_modulo(-3, 8)  = {}", positive_modulo(-3.0, 8.0));
    println!("positive_modulo(13, 5)  = {}\n", positive_modulo(13.0, 5.0));

    // Branchless selection
    println!("min(3, 5) = {}", min(3.0, 5.0));
    println!("max(3, 5) = {}", max(3.0, 5.0));
    println!("swap(3, 7) = {:?}\n", swap(3.0, 7.0));

    // Bit predicates
    println!("is_odd(3)            = {}", is_odd(3.0));
    println!("is_power_of_two(64)  = {}", is_power_of_two(64.0));
    println!("next_power_of_two(5) = {}\n", next_power_of_two(5.0));

    // Non-finite inputs fold into sentinels
    println!("to_integer(NaN)  = {}", to_integer(f64::NAN));
    println!("min(NaN, 5)      = {}", min(f64::NAN, 5.0));

    // Strict variants report the rejection instead
    match try_min(f64::NAN, 5.0) {
        Ok(v) => println!("try_min(NaN, 5)  = {v}"),
        Err(e) => println!("try_min(NaN, 5)  = error: {e}"),
    }
}
