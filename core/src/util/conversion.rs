//! Numeric conversions between raw generator outputs
//!
//! Generators produce either 32-bit fractions (an `f64` in [0, 1) holding
//! 32 significant bits) or unsigned 32-bit words. This module maps between
//! the two and builds wider values out of them.
//!
//! # Critical Invariants
//!
//! - Every function is total and branch-free on well-formed inputs
//! - Truncation is toward zero, followed by a modulo 2^32 wrap
//! - The arithmetic is done in `f64` exactly as documented: changing the
//!   order of operations changes derived sequences

const SHIFT_LEFT_22: f64 = (1u64 << 22) as f64;
const SHIFT_LEFT_32: f64 = (1u64 << 32) as f64;
const SHIFT_RIGHT_32: f64 = 1.0 / SHIFT_LEFT_32;
const SHIFT_RIGHT_53: f64 = 1.0 / (1u64 << 53) as f64;

const U22_TOP: f64 = ((1u64 << 22) - 1) as f64;

/// Smallest value returned by [`to_safe_integer54`]
pub const I54_BOTTOM: i64 = -(1i64 << 53) + 1;

/// Largest value returned by [`to_safe_integer54`]
pub const I54_TOP: i64 = (1i64 << 53) - 1;

/// Truncate toward zero then wrap modulo 2^32
///
/// # Example
/// ```
/// use replayable_random_core_rs::util::conversion::truncate_to_u32;
///
/// assert_eq!(truncate_to_u32(3.9), 3);
/// assert_eq!(truncate_to_u32(4_294_967_296.5), 0);
/// assert_eq!(truncate_to_u32(-1.5), u32::MAX);
/// ```
#[inline]
pub fn truncate_to_u32(x: f64) -> u32 {
    // Values handled here never exceed 2^34 in magnitude, well inside i64.
    x as i64 as u32
}

/// Map a fraction in [0, 1) to an unsigned 32-bit word
///
/// # Example
/// ```
/// use replayable_random_core_rs::util::conversion::fraction_to_u32;
///
/// assert_eq!(fraction_to_u32(0.0), 0);
/// assert_eq!(fraction_to_u32(0.5), 1 << 31);
/// ```
#[inline]
pub fn fraction_to_u32(f: f64) -> u32 {
    truncate_to_u32(f * SHIFT_LEFT_32)
}

/// Map an unsigned 32-bit word to a fraction in [0, 1)
#[inline]
pub fn u32_to_fraction(u: u32) -> f64 {
    f64::from(u) * SHIFT_RIGHT_32
}

/// Reinterpret the 32 bits of `u` as a two's complement integer
#[inline]
pub fn u32_to_i32(u: u32) -> i32 {
    u as i32
}

/// Map a fraction to `[low, exclusive_high)`
///
/// The caller guarantees `low < exclusive_high`; the bounded distributions
/// check it before reaching this function.
///
/// # Example
/// ```
/// use replayable_random_core_rs::util::conversion::fraction_to_bounded_u32;
///
/// assert_eq!(fraction_to_bounded_u32(10, 20, 0.0), 10);
/// assert_eq!(fraction_to_bounded_u32(10, 20, 0.99), 19);
/// ```
#[inline]
pub fn fraction_to_bounded_u32(low: u32, exclusive_high: u32, f: f64) -> u32 {
    let width = f64::from(exclusive_high) - f64::from(low);
    truncate_to_u32(f * width).wrapping_add(low)
}

/// Signed counterpart of [`fraction_to_bounded_u32`]
#[inline]
pub fn fraction_to_bounded_i32(low: i32, exclusive_high: i32, f: f64) -> i32 {
    let width = f64::from(exclusive_high) - f64::from(low);
    truncate_to_u32(f * width).wrapping_add(low as u32) as i32
}

/// Combine a fraction and a word into a safe 54-bit signed integer
///
/// The word supplies the 32 high bits (as a signed value), the fraction the
/// 22 low bits. The `+ 1` offset excludes `-2^53`, which is not a safe
/// integer, so the result lies in [`I54_BOTTOM`]`..=`[`I54_TOP`].
///
/// # Example
/// ```
/// use replayable_random_core_rs::util::conversion::{to_safe_integer54, I54_BOTTOM};
///
/// assert_eq!(to_safe_integer54(0.0, 0), 1);
/// assert_eq!(to_safe_integer54(0.0, 1 << 31), I54_BOTTOM);
/// ```
#[inline]
pub fn to_safe_integer54(f: f64, u: u32) -> i64 {
    let high = i64::from(u32_to_i32(u)) * SHIFT_LEFT_22 as i64;
    let low = i64::from(truncate_to_u32(f * U22_TOP));
    high + low + 1
}

/// Upgrade a 32-bit fraction to 53 bits of precision
///
/// The 21 high bits of `u` fill the bits below the fraction's 32nd bit.
#[inline]
pub fn to_double_fraction53(u: u32, f: f64) -> f64 {
    f + f64::from(u >> 11) * SHIFT_RIGHT_53
}

/// Is `x` a fraction in [0, 1) carrying at most 32 significant bits?
///
/// Every fraction a generator stores is a multiple of 2^-32, so anything
/// else cannot come from a reachable state.
pub fn is_fract32(x: f64) -> bool {
    x.is_finite() && (0.0..1.0).contains(&x) && (x * SHIFT_LEFT_32).fract() == 0.0
}
