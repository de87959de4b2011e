// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Arithmetic over the binary extension field GF(2^8).
//!
//! Elements are plain bytes. Addition and subtraction are both bitwise XOR;
//! multiplication, division and exponentiation go through discrete
//! logarithm/antilogarithm tables built once per [`GaloisField`] for a chosen
//! reduction polynomial.
//!
//! ```
//! use jf_gf256::GaloisField;
//!
//! let field = GaloisField::default();
//! let c = field.mul(0x53, 0xCA);
//! assert_eq!(field.div(c, 0xCA).unwrap(), 0x53);
//! assert!(field.div(c, 0).is_err());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
// Temporarily allow warning for nightly compilation with [`displaydoc`].
#![allow(warnings)]
#![deny(missing_docs)]
#[cfg(test)]
extern crate std;

#[doc(hidden)]
extern crate alloc;

mod errors;
mod tables;

pub use errors::GfError;

use alloc::sync::Arc;
use ark_std::{end_timer, fmt, format, start_timer};
use tables::{Tables, GROUP_ORDER};

/// A member of GF(2^8).
pub type FieldElement = u8;

/// Low byte of the default reduction polynomial `x^8 + x^4 + x^3 + x^2 + 1`
/// (`0x11D`). The `x^8` term is implicit.
pub const DEFAULT_POLYNOMIAL: u8 = 0x1D;

/// GF(2^8) defined by a fixed reduction polynomial.
///
/// The lookup tables are built eagerly by the constructor and never mutated
/// afterwards, so a `GaloisField` is a cheap handle: cloning it shares the
/// same tables, and it can be used from several threads at once.
#[derive(Clone)]
pub struct GaloisField {
    tables: Arc<Tables>,
}

impl GaloisField {
    /// Build the field `GF(2)[x] / (x^8 + polynomial)`.
    ///
    /// `polynomial` holds the coefficients of `x^7..x^0`. The constructor
    /// looks for the smallest primitive element and uses it as the base of
    /// the log tables; if there is none the modulus is reducible and a
    /// [`GfError::ConfigurationError`] is returned.
    pub fn new(polynomial: u8) -> Result<Self, GfError> {
        let timer = start_timer!(|| format!("Building GF(2^8) tables for 0x1{:02X}", polynomial));
        let generator = Tables::find_generator(polynomial).ok_or_else(|| {
            GfError::ConfigurationError(format!(
                "x^8 + 0x{:02X} is not irreducible over GF(2)",
                polynomial
            ))
        })?;
        let tables = Tables::build(polynomial, generator);
        end_timer!(timer);
        Ok(Self {
            tables: Arc::new(tables),
        })
    }

    /// Low byte of the reduction polynomial.
    pub fn polynomial(&self) -> u8 {
        self.tables.poly
    }

    /// Primitive element the log tables are based on.
    pub fn generator(&self) -> FieldElement {
        self.tables.generator
    }

    /// Field addition.
    #[inline]
    pub fn add(&self, a: FieldElement, b: FieldElement) -> FieldElement {
        a ^ b
    }

    /// Field subtraction, identical to [`Self::add`] in characteristic 2.
    #[inline]
    pub fn sub(&self, a: FieldElement, b: FieldElement) -> FieldElement {
        a ^ b
    }

    /// Field multiplication.
    #[inline]
    pub fn mul(&self, a: FieldElement, b: FieldElement) -> FieldElement {
        if a == 0 || b == 0 {
            return 0;
        }
        let t = &self.tables;
        t.exp[t.log[a as usize] as usize + t.log[b as usize] as usize]
    }

    /// Returns the unique `c` with `mul(b, c) == a`.
    #[inline]
    pub fn div(&self, a: FieldElement, b: FieldElement) -> Result<FieldElement, GfError> {
        if b == 0 {
            return Err(GfError::DivisionByZero);
        }
        if a == 0 {
            return Ok(0);
        }
        let t = &self.tables;
        Ok(t.exp[t.log[a as usize] as usize + GROUP_ORDER - t.log[b as usize] as usize])
    }

    /// Multiplicative inverse.
    #[inline]
    pub fn inv(&self, a: FieldElement) -> Result<FieldElement, GfError> {
        self.div(1, a)
    }

    /// `a` raised to the `n`-th power, with `pow(a, 0) == 1` for every `a`,
    /// zero included.
    pub fn pow(&self, a: FieldElement, n: usize) -> FieldElement {
        if n == 0 {
            return 1;
        }
        if a == 0 {
            return 0;
        }
        let t = &self.tables;
        let e = (t.log[a as usize] as usize * (n % GROUP_ORDER)) % GROUP_ORDER;
        t.exp[e]
    }

    /// `generator^n`.
    pub fn exp(&self, n: usize) -> FieldElement {
        self.tables.exp[n % GROUP_ORDER]
    }

    /// Discrete logarithm to the base [`Self::generator`], `None` for zero.
    pub fn log(&self, a: FieldElement) -> Option<u8> {
        (a != 0).then(|| self.tables.log[a as usize])
    }

    /// Inner product `sum_i a[i] * b[i]` over the shorter of the two slices.
    pub fn dot(&self, a: &[FieldElement], b: &[FieldElement]) -> FieldElement {
        a.iter()
            .zip(b)
            .fold(0, |acc, (&x, &y)| acc ^ self.mul(x, y))
    }
}

impl Default for GaloisField {
    /// The field reduced by [`DEFAULT_POLYNOMIAL`], where `x` (`0x02`) is
    /// primitive.
    fn default() -> Self {
        Self {
            tables: Arc::new(Tables::build(DEFAULT_POLYNOMIAL, 0x02)),
        }
    }
}

impl PartialEq for GaloisField {
    fn eq(&self, other: &Self) -> bool {
        self.tables.poly == other.tables.poly
    }
}

impl Eq for GaloisField {}

impl fmt::Debug for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaloisField")
            .field("polynomial", &format_args!("0x1{:02X}", self.tables.poly))
            .field("generator", &self.tables.generator)
            .finish()
    }
}
