// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

use ark_std::rand::Rng;
use jf_gf256::{GaloisField, GfError};
use proptest::prelude::*;

// Schoolbook multiplication modulo x^8 + x^4 + x^3 + x^2 + 1, independent
// of the table-driven implementation.
fn reference_mul(a: u8, b: u8) -> u8 {
    let mut product: u16 = 0;
    for i in 0..8 {
        if (b >> i) & 1 == 1 {
            product ^= (a as u16) << i;
        }
    }
    for bit in (8..15).rev() {
        if (product >> bit) & 1 == 1 {
            product ^= 0x11D << (bit - 8);
        }
    }
    product as u8
}

#[test]
fn mul_matches_schoolbook_for_all_pairs() {
    let field = GaloisField::default();
    for a in 0..=255u8 {
        for b in 0..=255u8 {
            assert_eq!(field.mul(a, b), reference_mul(a, b), "{a} * {b}");
        }
    }
}

#[test]
fn div_inverts_mul_for_all_pairs() {
    let field = GaloisField::default();
    for a in 0..=255u8 {
        assert_eq!(field.div(a, 0), Err(GfError::DivisionByZero));
        for b in 1..=255u8 {
            assert_eq!(field.div(field.mul(a, b), b).unwrap(), a);
        }
    }
}

#[test]
fn random_triples_obey_ring_laws() {
    let field = GaloisField::default();
    let mut rng = ark_std::test_rng();
    for _ in 0..10_000 {
        let (a, b, c): (u8, u8, u8) = (rng.gen(), rng.gen(), rng.gen());
        assert_eq!(
            field.mul(field.mul(a, b), c),
            field.mul(a, field.mul(b, c))
        );
        assert_eq!(
            field.mul(a, field.add(b, c)),
            field.add(field.mul(a, b), field.mul(a, c))
        );
    }
}

proptest! {
    #[test]
    fn add_is_commutative_associative_and_self_inverse(a: u8, b: u8, c: u8) {
        let field = GaloisField::default();
        prop_assert_eq!(field.add(a, b), field.add(b, a));
        prop_assert_eq!(field.add(field.add(a, b), c), field.add(a, field.add(b, c)));
        prop_assert_eq!(field.add(a, a), 0);
        prop_assert_eq!(field.sub(field.add(a, b), b), a);
    }

    #[test]
    fn mul_is_commutative_with_identity_and_annihilator(a: u8, b: u8) {
        let field = GaloisField::default();
        prop_assert_eq!(field.mul(a, b), field.mul(b, a));
        prop_assert_eq!(field.mul(a, 1), a);
        prop_assert_eq!(field.mul(a, 0), 0);
    }

    #[test]
    fn pow_adds_exponents(a: u8, m in 0usize..1000, n in 0usize..1000) {
        let field = GaloisField::default();
        prop_assert_eq!(field.mul(field.pow(a, m), field.pow(a, n)), field.pow(a, m + n));
    }

    #[test]
    fn alternative_moduli_are_fields(a in 1u8..=255, b in 1u8..=255) {
        // 0x1B is the AES modulus, 0x2B and 0x63 are further irreducibles
        for poly in [0x1Bu8, 0x2B, 0x63] {
            let field = GaloisField::new(poly).unwrap();
            let q = field.div(a, b).unwrap();
            prop_assert_eq!(field.mul(q, b), a);
            prop_assert_eq!(field.pow(a, 255), 1);
        }
    }
}
