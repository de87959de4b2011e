// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Discrete logarithm and antilogarithm tables.

/// Order of the multiplicative group of GF(2^8).
pub(crate) const GROUP_ORDER: usize = 255;

/// Carry-less product of `a` and `b` reduced modulo `x^8 + poly`.
///
/// Bit-serial and slow; only used while building tables.
pub(crate) fn mul_reduce(mut a: u8, mut b: u8, poly: u8) -> u8 {
    let mut acc = 0u8;
    while b != 0 {
        if b & 1 == 1 {
            acc ^= a;
        }
        let carry = a & 0x80 != 0;
        a <<= 1;
        if carry {
            a ^= poly;
        }
        b >>= 1;
    }
    acc
}

/// Returns true if the powers of `generator` reach every nonzero residue
/// modulo `x^8 + poly`. This only happens when the modulus is irreducible
/// and `generator` is primitive.
pub(crate) fn spans_group(poly: u8, generator: u8) -> bool {
    let mut seen = [false; 256];
    let mut x = 1u8;
    for _ in 0..GROUP_ORDER {
        if x == 0 || seen[x as usize] {
            return false;
        }
        seen[x as usize] = true;
        x = mul_reduce(x, generator, poly);
    }
    x == 1
}

/// Lookup tables for one field, immutable once built.
pub(crate) struct Tables {
    pub(crate) poly: u8,
    pub(crate) generator: u8,
    /// `exp[i] = generator^i`, stored twice so that `exp[log(a) + log(b)]`
    /// needs no reduction modulo the group order.
    pub(crate) exp: [u8; 2 * GROUP_ORDER],
    /// `log[a]` for nonzero `a`. `log[0]` is never read.
    pub(crate) log: [u8; 256],
}

impl Tables {
    /// Caller guarantees `spans_group(poly, generator)`.
    pub(crate) fn build(poly: u8, generator: u8) -> Self {
        let mut exp = [0u8; 2 * GROUP_ORDER];
        let mut log = [0u8; 256];
        let mut x = 1u8;
        for i in 0..GROUP_ORDER {
            exp[i] = x;
            exp[i + GROUP_ORDER] = x;
            log[x as usize] = i as u8;
            x = mul_reduce(x, generator, poly);
        }
        Self {
            poly,
            generator,
            exp,
            log,
        }
    }

    /// Smallest primitive element for `x^8 + poly`, if the modulus is
    /// irreducible.
    pub(crate) fn find_generator(poly: u8) -> Option<u8> {
        (2..=u8::MAX).find(|&g| spans_group(poly, g))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_reduce() {
        // x^7 * x = x^8 = x^4 + x^3 + x^2 + 1
        assert_eq!(mul_reduce(0x80, 0x02, 0x1D), 0x1D);
        // FIPS-197 section 4.2
        assert_eq!(mul_reduce(0x57, 0x83, 0x1B), 0xC1);
        assert_eq!(mul_reduce(0x57, 0x13, 0x1B), 0xFE);
        assert_eq!(mul_reduce(0, 0xFF, 0x1D), 0);
        assert_eq!(mul_reduce(0xA7, 1, 0x1D), 0xA7);
    }

    #[test]
    fn test_find_generator() {
        assert_eq!(Tables::find_generator(0x1D), Some(2));
        // x is not primitive in the AES field, 0x03 is
        assert!(!spans_group(0x1B, 2));
        assert_eq!(Tables::find_generator(0x1B), Some(3));
        // x^8 and x^8 + 1 = (x + 1)^8 are reducible
        assert_eq!(Tables::find_generator(0x00), None);
        assert_eq!(Tables::find_generator(0x01), None);
    }

    #[test]
    fn test_tables_are_inverse() {
        let tables = Tables::build(0x1D, 2);
        for a in 1..=255u8 {
            assert_eq!(tables.exp[tables.log[a as usize] as usize], a);
        }
        assert_eq!(tables.exp[0], 1);
        assert_eq!(tables.exp[8], 0x1D);
        assert_eq!(&tables.exp[..GROUP_ORDER], &tables.exp[GROUP_ORDER..]);
    }
}
