//! Byte array distributions

use super::{Distribution, Fill, U32Between};
use crate::generator::MutRand;

/// `n` random bytes
///
/// Draws `ceil(n / 4)` words and keeps the first `n` bytes of their
/// little-endian encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bytes {
    len: usize,
}

impl Bytes {
    pub fn new(len: usize) -> Self {
        Self { len }
    }
}

impl Distribution<Vec<u8>> for Bytes {
    fn sample_mut<G: MutRand>(&self, g: &mut G) -> Vec<u8> {
        let words = self.len.div_ceil(4);
        let mut bytes: Vec<u8> = (0..words)
            .flat_map(|_| g.next_u32().to_le_bytes())
            .collect();
        bytes.truncate(self.len);
        bytes
    }
}

/// `n` random 6-bit values (indices into a base64 alphabet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base64Bytes {
    inner: Fill<U32Between>,
}

impl Base64Bytes {
    pub fn new(len: usize) -> Self {
        let sextet = U32Between {
            low: 0,
            exclusive_high: 64,
        };
        Self {
            inner: Fill::new(sextet, len),
        }
    }
}

impl Distribution<Vec<u8>> for Base64Bytes {
    fn sample_mut<G: MutRand>(&self, g: &mut G) -> Vec<u8> {
        let sextets: Vec<u32> = self.inner.sample_mut(g);
        sextets.into_iter().map(|v| v as u8).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{Alea, Engine};

    #[test]
    fn test_bytes_length_and_layout() {
        let mut g = Alea::from_bytes(b"bytes");
        let mut reference = g;
        let bytes: Vec<u8> = Bytes::new(6).sample_mut(&mut g);
        assert_eq!(bytes.len(), 6);

        let w0 = reference.next_u32().to_le_bytes();
        let w1 = reference.next_u32().to_le_bytes();
        assert_eq!(&bytes[..4], &w0[..]);
        assert_eq!(&bytes[4..], &w1[..2]);
        assert_eq!(g, reference);
    }

    #[test]
    fn test_base64_distributions_compare_by_length() {
        assert_eq!(Base64Bytes::new(12), Base64Bytes::new(12));
        assert_ne!(Base64Bytes::new(12), Base64Bytes::new(13));
    }

    #[test]
    fn test_base64_values_fit_six_bits() {
        let mut g = Alea::from_bytes(b"base64");
        let values: Vec<u8> = Base64Bytes::new(500).sample_mut(&mut g);
        assert_eq!(values.len(), 500);
        assert!(values.iter().all(|&v| v < 64));
    }
}
