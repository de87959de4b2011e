// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Shards and codewords.

use crate::RsError;
use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, Read, SerializationError, Valid, Validate,
};
use ark_std::{format, vec::Vec};
use jf_gf256::FieldElement;
use tagged_base64::tagged;

/// One symbol of a codeword together with its position.
#[tagged("RS_SHARD")]
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    Hash,
    Ord,
    PartialOrd,
    CanonicalSerialize,
    CanonicalDeserialize,
)]
pub struct Shard {
    /// Position of the shard in the codeword, 0-based.
    pub index: usize,
    /// Symbol stored at that position.
    pub value: FieldElement,
}

impl Shard {
    /// Create a new shard
    pub fn new(index: usize, value: FieldElement) -> Self {
        Self { index, value }
    }
}

impl From<(usize, FieldElement)> for Shard {
    fn from((index, value): (usize, FieldElement)) -> Self {
        Self { index, value }
    }
}

/// A systematic codeword: the message symbols followed by the parity
/// symbols.
#[tagged("RS_CODEWORD")]
#[derive(Clone, Debug, Eq, PartialEq, Hash, CanonicalSerialize)]
pub struct Codeword {
    data_shards: usize,
    symbols: Vec<FieldElement>,
}

impl Codeword {
    /// Wrap `symbols` whose first `data_shards` entries are the message.
    pub fn new(data_shards: usize, symbols: Vec<FieldElement>) -> Result<Self, RsError> {
        if !Self::fits(data_shards, symbols.len()) {
            return Err(RsError::ConfigurationError(format!(
                "{} data shards do not fit a codeword of length {}",
                data_shards,
                symbols.len()
            )));
        }
        Ok(Self {
            data_shards,
            symbols,
        })
    }

    fn fits(data_shards: usize, len: usize) -> bool {
        data_shards > 0 && data_shards <= len
    }

    /// Number of leading message symbols.
    pub fn data_shards(&self) -> usize {
        self.data_shards
    }

    /// Codeword length.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: a codeword holds at least one data shard.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The message part.
    pub fn data(&self) -> &[FieldElement] {
        &self.symbols[..self.data_shards]
    }

    /// The redundancy part.
    pub fn parity(&self) -> &[FieldElement] {
        &self.symbols[self.data_shards..]
    }

    /// All symbols in shard order.
    pub fn as_slice(&self) -> &[FieldElement] {
        &self.symbols
    }

    /// Take the symbols out.
    pub fn into_symbols(self) -> Vec<FieldElement> {
        self.symbols
    }

    /// Shard at `index`, if in range.
    pub fn shard(&self, index: usize) -> Option<Shard> {
        self.symbols.get(index).map(|&value| Shard { index, value })
    }

    /// Iterate over every shard in order.
    pub fn shards(&self) -> impl Iterator<Item = Shard> + '_ {
        self.symbols
            .iter()
            .enumerate()
            .map(|(index, &value)| Shard { index, value })
    }

    /// Pick the shards at `indices`, in the given order.
    pub fn select(&self, indices: &[usize]) -> Result<Vec<Shard>, RsError> {
        indices
            .iter()
            .map(|&i| self.shard(i).ok_or(RsError::DuplicateOrInvalidIndex(i)))
            .collect()
    }

    /// The final `data_shards` shards, enough to reconstruct the message.
    pub fn last_shards(&self) -> Vec<Shard> {
        let start = self.symbols.len().saturating_sub(self.data_shards);
        self.shards().skip(start).collect()
    }
}

// Checked even when `validate` is `No`: `data()` and `parity()` slice by
// `data_shards`.
impl CanonicalDeserialize for Codeword {
    fn deserialize_with_mode<R>(
        mut reader: R,
        compress: Compress,
        validate: Validate,
    ) -> Result<Self, SerializationError>
    where
        R: Read,
    {
        let data_shards = usize::deserialize_with_mode(&mut reader, compress, validate)?;
        let symbols = Vec::<FieldElement>::deserialize_with_mode(&mut reader, compress, validate)?;
        let codeword = Self {
            data_shards,
            symbols,
        };
        codeword.check()?;
        Ok(codeword)
    }
}

impl Valid for Codeword {
    fn check(&self) -> Result<(), SerializationError> {
        if Self::fits(self.data_shards, self.symbols.len()) {
            Ok(())
        } else {
            Err(SerializationError::InvalidData)
        }
    }
}

impl AsRef<[FieldElement]> for Codeword {
    fn as_ref(&self) -> &[FieldElement] {
        &self.symbols
    }
}
