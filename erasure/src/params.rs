// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Code dimensions.

use crate::RsError;
use ark_std::format;
use serde::{Deserialize, Serialize};

/// Largest codeword length: one distinct nonzero evaluation point per shard.
pub const MAX_TOTAL_SHARDS: usize = 255;

/// Validated `(data_shards, parity_shards)` pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CodeParams {
    data_shards: usize,
    parity_shards: usize,
}

impl CodeParams {
    /// Requires `data_shards > 0` and
    /// `data_shards + parity_shards <= MAX_TOTAL_SHARDS`.
    pub fn new(data_shards: usize, parity_shards: usize) -> Result<Self, RsError> {
        if data_shards == 0 {
            return Err(RsError::ConfigurationError(
                "number of data shards must be positive".into(),
            ));
        }
        match data_shards.checked_add(parity_shards) {
            Some(total) if total <= MAX_TOTAL_SHARDS => Ok(Self {
                data_shards,
                parity_shards,
            }),
            _ => Err(RsError::ConfigurationError(format!(
                "{} data + {} parity shards exceed the {} evaluation points of GF(2^8)",
                data_shards, parity_shards, MAX_TOTAL_SHARDS
            ))),
        }
    }

    /// Same as [`Self::new`] but given the codeword length.
    pub fn from_total(data_shards: usize, total_shards: usize) -> Result<Self, RsError> {
        if total_shards < data_shards {
            return Err(RsError::ConfigurationError(format!(
                "total shards {} is less than data shards {}",
                total_shards, data_shards
            )));
        }
        Self::new(data_shards, total_shards - data_shards)
    }

    /// Number of message symbols `k`.
    pub fn data_shards(&self) -> usize {
        self.data_shards
    }

    /// Number of redundancy symbols.
    pub fn parity_shards(&self) -> usize {
        self.parity_shards
    }

    /// Codeword length `n`.
    pub fn total_shards(&self) -> usize {
        self.data_shards + self.parity_shards
    }
}
