// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Error types.

use ark_std::string::String;
use displaydoc::Display;

/// Failure modes of GF(2^8) arithmetic and field construction.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum GfError {
    /// Division by the zero element
    DivisionByZero,
    /// Invalid field configuration, {0}
    ConfigurationError(String),
}

impl ark_std::error::Error for GfError {}
