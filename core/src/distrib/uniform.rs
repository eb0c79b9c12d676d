//! Uniform distributions over integers and fractions

use super::{DistribError, Distribution};
use crate::generator::MutRand;
use crate::util::conversion::{
    fraction_to_bounded_i32, fraction_to_bounded_u32, to_double_fraction53, to_safe_integer54,
    u32_to_i32,
};

/// Any unsigned 32-bit integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct U32;

/// Any signed 32-bit integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct I32;

/// Float in [0, 1) with 32 significant bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fract32;

/// Float in [0, 1) with 53 significant bits (two draws)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fract53;

/// Safe integer in `[-(2^53) + 1, 2^53 - 1]` (two draws)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct I54;

impl Distribution<u32> for U32 {
    fn sample_mut<G: MutRand>(&self, g: &mut G) -> u32 {
        g.next_u32()
    }
}

impl Distribution<i32> for I32 {
    fn sample_mut<G: MutRand>(&self, g: &mut G) -> i32 {
        u32_to_i32(g.next_u32())
    }
}

impl Distribution<f64> for Fract32 {
    fn sample_mut<G: MutRand>(&self, g: &mut G) -> f64 {
        g.next_fract32()
    }
}

impl Distribution<f64> for Fract53 {
    fn sample_mut<G: MutRand>(&self, g: &mut G) -> f64 {
        let u = g.next_u32();
        let f = g.next_fract32();
        to_double_fraction53(u, f)
    }
}

impl Distribution<i64> for I54 {
    fn sample_mut<G: MutRand>(&self, g: &mut G) -> i64 {
        let f = g.next_fract32();
        let u = g.next_u32();
        to_safe_integer54(f, u)
    }
}

/// Unsigned integer in `[low, exclusive_high)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct U32Between {
    pub(super) low: u32,
    pub(super) exclusive_high: u32,
}

impl U32Between {
    /// # Errors
    /// `EmptyRange` if `low >= exclusive_high`
    ///
    /// # Example
    /// ```
    /// use replayable_random_core_rs::distrib::{DistribError, U32Between};
    ///
    /// assert!(U32Between::new(0, 1).is_ok());
    /// assert_eq!(
    ///     U32Between::new(5, 5),
    ///     Err(DistribError::EmptyRange { low: 5, high: 5 })
    /// );
    /// ```
    pub fn new(low: u32, exclusive_high: u32) -> Result<Self, DistribError> {
        if low >= exclusive_high {
            return Err(DistribError::EmptyRange {
                low: i64::from(low),
                high: i64::from(exclusive_high),
            });
        }
        Ok(Self {
            low,
            exclusive_high,
        })
    }
}

impl Distribution<u32> for U32Between {
    fn sample_mut<G: MutRand>(&self, g: &mut G) -> u32 {
        fraction_to_bounded_u32(self.low, self.exclusive_high, g.next_fract32())
    }
}

/// Signed integer in `[low, exclusive_high)`
///
/// `i32::MAX` can never be drawn since the upper bound is exclusive; use
/// [`I32`] for the full range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I32Between {
    low: i32,
    exclusive_high: i32,
}

impl I32Between {
    /// # Errors
    /// `EmptyRange` if `low >= exclusive_high`
    pub fn new(low: i32, exclusive_high: i32) -> Result<Self, DistribError> {
        if low >= exclusive_high {
            return Err(DistribError::EmptyRange {
                low: i64::from(low),
                high: i64::from(exclusive_high),
            });
        }
        Ok(Self {
            low,
            exclusive_high,
        })
    }
}

impl Distribution<i32> for I32Between {
    fn sample_mut<G: MutRand>(&self, g: &mut G) -> i32 {
        fraction_to_bounded_i32(self.low, self.exclusive_high, g.next_fract32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{Engine, Kybos, Uhe};

    #[test]
    fn test_i32_reinterprets_u32() {
        let mut a = Uhe::from_bytes(b"i32");
        let mut b = a.clone();
        for _ in 0..100 {
            assert_eq!(I32.sample_mut(&mut a), b.next_u32() as i32);
        }
    }

    #[test]
    fn test_wide_values_consume_two_draws() {
        let mut g = Kybos::from_bytes(b"wide");
        let mut reference = g.clone();
        I54.sample_mut(&mut g);
        Fract53.sample_mut(&mut g);
        for _ in 0..4 {
            reference.next_u32();
        }
        assert_eq!(g, reference);
    }

    #[test]
    fn test_reversed_bounds_are_rejected() {
        assert!(I32Between::new(5, -5).is_err());
        assert!(U32Between::new(10, 3).is_err());
        assert_eq!(
            I32Between::new(0, 0),
            Err(DistribError::EmptyRange { low: 0, high: 0 })
        );
    }

    #[test]
    fn test_full_range_bounds_are_accepted() {
        assert!(I32Between::new(i32::MIN, i32::MAX).is_ok());
        assert!(U32Between::new(0, u32::MAX).is_ok());
    }
}
