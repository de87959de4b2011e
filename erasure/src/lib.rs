// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Systematic Reed-Solomon erasure code over GF(2^8).
//!
//! `k` message symbols are extended to a codeword of `n <= 255` symbols such
//! that any `k` of them recover the message. Shard `i` is tied to the
//! evaluation point `i + 1`; parity symbols are values of the degree `< k`
//! polynomial determined by the message, and decoding is Lagrange
//! interpolation on whichever points are available.
//!
//! ```
//! use jf_gf256::GaloisField;
//! use jf_rs_erasure::{Decoder, Encoder};
//!
//! let field = GaloisField::default();
//! let encoder = Encoder::new(&field, 6, 12).unwrap();
//! let decoder = Decoder::new(&field, 6, 18).unwrap();
//!
//! let message = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
//! let codeword = encoder.encode(&message).unwrap();
//! assert_eq!(codeword.data(), &message);
//! assert_eq!(decoder.decode_last_shards(&codeword).unwrap(), message);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
// Temporarily allow warning for nightly compilation with [`displaydoc`].
#![allow(warnings)]
#![deny(missing_docs)]
#[cfg(test)]
extern crate std;

#[doc(hidden)]
extern crate alloc;

mod decoder;
mod encoder;
pub mod errors;
mod lagrange;
pub mod params;
pub mod points;
pub mod shard;

pub use decoder::Decoder;
pub use encoder::{Encoder, Interpolation};
pub use errors::RsError;
pub use jf_gf256::{FieldElement, GaloisField};
pub use params::CodeParams;
pub use points::EvaluationPoints;
pub use shard::{Codeword, Shard};

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{fmt::Debug, vec::Vec};

/// Erasure code trait
pub trait ErasureCode: Sized {
    /// Type for each shard
    type Shard: Debug
        + Clone
        + Eq
        + PartialEq
        + Sync
        + Send
        + CanonicalSerialize
        + CanonicalDeserialize;

    /// Type of an encoded message
    type Codeword: AsRef<[FieldElement]>;

    /// Create a new instance
    ///  * `data_shards`: the minimum number of shards required for
    ///    reconstruction
    ///  * `total_shards`: the block (codeword) length
    fn new(
        field: &GaloisField,
        data_shards: usize,
        total_shards: usize,
    ) -> Result<Self, RsError>;

    /// Encoding
    fn encode(&self, message: &[FieldElement]) -> Result<Self::Codeword, RsError>;

    /// Decoding
    fn decode(&self, shards: &[Self::Shard]) -> Result<Vec<FieldElement>, RsError>;
}

/// Value-form Reed-Solomon code: an [`Encoder`] and a [`Decoder`] built for
/// the same field and dimensions.
#[derive(Clone, Debug)]
pub struct ReedSolomonCode {
    encoder: Encoder,
    decoder: Decoder,
}

impl ReedSolomonCode {
    /// The encoding half.
    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    /// The decoding half.
    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }
}

impl ErasureCode for ReedSolomonCode {
    type Shard = Shard;
    type Codeword = Codeword;

    fn new(
        field: &GaloisField,
        data_shards: usize,
        total_shards: usize,
    ) -> Result<Self, RsError> {
        let params = CodeParams::from_total(data_shards, total_shards)?;
        Ok(Self {
            encoder: Encoder::new(field, params.data_shards(), params.parity_shards())?,
            decoder: Decoder::new(field, data_shards, total_shards)?,
        })
    }

    fn encode(&self, message: &[FieldElement]) -> Result<Codeword, RsError> {
        self.encoder.encode(message)
    }

    fn decode(&self, shards: &[Shard]) -> Result<Vec<FieldElement>, RsError> {
        self.decoder.decode(shards)
    }
}
