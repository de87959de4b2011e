// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Error types.

use ark_std::string::String;
use displaydoc::Display;
use jf_gf256::GfError;

/// A `enum` specifying the possible failure modes of encoding and decoding.
///
/// Every failure is a deterministic consequence of the inputs; none of them
/// is worth retrying.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum RsError {
    /// Input has {got} symbols, expected {expected}
    InvalidInputLength {
        /// Required number of symbols.
        expected: usize,
        /// Number of symbols supplied.
        got: usize,
    },
    /// Insufficient shards for reconstruction: got {got}, need {needed}
    InsufficientShards {
        /// Minimum number of usable shards.
        needed: usize,
        /// Number of usable shards supplied.
        got: usize,
    },
    /// Shard index {0} is duplicated or out of range
    DuplicateOrInvalidIndex(usize),
    /// Division by zero in GF(2^8)
    DivisionByZero,
    /// Bad code configuration, {0}
    ConfigurationError(String),
}

impl From<GfError> for RsError {
    fn from(e: GfError) -> Self {
        match e {
            GfError::DivisionByZero => Self::DivisionByZero,
            GfError::ConfigurationError(msg) => Self::ConfigurationError(msg),
        }
    }
}

impl ark_std::error::Error for RsError {}
