//! Common

#![allow(dead_code)]

use num_traits::Num;
use std::ops::Neg;

/// Use 32-bit precision for floating point numbers.
pub type Float = f32;

/// Default signed integer to 32-bit.
pub type Int = i32;

/// Infinty (∞)
pub const INFINITY: Float = Float::INFINITY;

/// PI (π)
pub const PI: Float = std::f32::consts::PI;

/// PI/2 (π/2)
pub const PI_OVER_TWO: Float = PI * 0.5;

/// 2*PI (2π)
pub const TWO_PI: Float = PI * 2.0;

/// 1/2*PI (1/2π)
pub const INV_TWO_PI: Float = 1.0 / TWO_PI;

/// Returns the absolute value of a number.
///
/// * `n` - The number.
#[inline(always)]
pub fn abs<T>(n: T) -> T
where
    T: Num + Neg<Output = T> + PartialOrd + Copy,
{
    if n < T::zero() {
        -n
    } else {
        n
    }
}

/// Returns the minimum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn min<T>(a: T, b: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the maximum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn max<T>(a: T, b: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if a > b {
        a
    } else {
        b
    }
}

/// Returns -1 for negative values and 1 otherwise. Unlike `f32::signum` zero
/// maps to 1 regardless of its sign bit.
///
/// * `v` - The value.
#[inline(always)]
pub fn signum(v: Float) -> Float {
    if v < 0.0 {
        -1.0
    } else {
        1.0
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn signum_of_zero_is_positive() {
        assert_eq!(signum(0.0), 1.0);
        assert_eq!(signum(-0.0), 1.0);
        assert_eq!(signum(-1e-30), -1.0);
    }

    proptest! {
        #[test]
        fn abs_i32(n in -100..100i32) {
            prop_assert_eq!(abs(n), n.abs());
        }

        #[test]
        fn abs_f32(n in -100.0..100.0f32) {
            prop_assert_eq!(abs(n), n.abs());
        }

        #[test]
        fn min_max_f32(a in -100.0..100.0f32, b in -100.0..100.0f32) {
            prop_assert_eq!(min(a, b), a.min(b));
            prop_assert_eq!(max(a, b), a.max(b));
        }
    }
}
