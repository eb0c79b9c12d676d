//! Set of 4-bit unsigned integers (hexadecimal digits), stored as a bitmask

/// Set of values in `0..16`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct U4Set(u16);

impl U4Set {
    pub const EMPTY: U4Set = U4Set(0);

    /// Set containing only `n`
    pub fn singleton(n: usize) -> Self {
        Self::EMPTY.with(n)
    }

    /// Is `n` in the set?
    #[inline]
    pub fn contains(self, n: usize) -> bool {
        debug_assert!(n < 16, "U4Set holds values below 16, got {}", n);
        self.0 & (1 << n) != 0
    }

    /// New set that also contains `n`
    #[inline]
    pub fn with(self, n: usize) -> Self {
        debug_assert!(n < 16, "U4Set holds values below 16, got {}", n);
        U4Set(self.0 | (1 << n))
    }

    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}
