// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Evaluation points shared by encoders and decoders.

use crate::{params::MAX_TOTAL_SHARDS, RsError};
use ark_std::{format, vec::Vec};
use jf_gf256::FieldElement;

/// Shard `i` is the evaluation of the code polynomial at the field element
/// `i + 1`.
///
/// The mapping depends on nothing but the codeword length, so an encoder and
/// a decoder built for the same dimensions always agree on it. Points are
/// nonzero and pairwise distinct, which keeps every Lagrange denominator
/// invertible.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct EvaluationPoints(Vec<FieldElement>);

impl EvaluationPoints {
    /// Points for shard indices `0..total_shards`.
    pub fn generate(total_shards: usize) -> Result<Self, RsError> {
        if total_shards == 0 || total_shards > MAX_TOTAL_SHARDS {
            return Err(RsError::ConfigurationError(format!(
                "codeword length must be in 1..={}, got {}",
                MAX_TOTAL_SHARDS, total_shards
            )));
        }
        Ok(Self((1..=total_shards as u8).collect()))
    }

    /// Point of shard `index`, if it is in range.
    pub fn get(&self, index: usize) -> Option<FieldElement> {
        self.0.get(index).copied()
    }

    /// All points in shard order.
    pub fn as_slice(&self) -> &[FieldElement] {
        &self.0
    }

    /// Codeword length the points were generated for.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a successfully generated table.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
