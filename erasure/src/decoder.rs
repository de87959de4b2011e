// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Erasure decoder.

use crate::{
    lagrange::LagrangeBasis, params::CodeParams, points::EvaluationPoints, shard::Shard, RsError,
};
use ark_std::{borrow::Borrow, end_timer, format, start_timer, vec::Vec};
use jf_gf256::{FieldElement, GaloisField};

/// Recovers the message from any `data_shards` shards of a codeword.
#[derive(Clone, Debug)]
pub struct Decoder {
    field: GaloisField,
    params: CodeParams,
    points: EvaluationPoints,
}

impl Decoder {
    /// Decoder for codewords of length `total_shards` carrying `data_shards`
    /// message symbols.
    pub fn new(
        field: &GaloisField,
        data_shards: usize,
        total_shards: usize,
    ) -> Result<Self, RsError> {
        let params = CodeParams::from_total(data_shards, total_shards)?;
        Ok(Self {
            field: field.clone(),
            params,
            points: EvaluationPoints::generate(total_shards)?,
        })
    }

    /// Code dimensions.
    pub fn params(&self) -> CodeParams {
        self.params
    }

    /// Evaluation points of every shard.
    pub fn points(&self) -> &EvaluationPoints {
        &self.points
    }

    /// Recover a value-form message.
    ///
    /// Any number of shards `>= data_shards` may be supplied, in any order.
    /// The `data_shards` shards with the lowest indices are used, the rest
    /// are ignored and not checked for consistency.
    ///
    /// Shard values are interpolated on the evaluation points of their own
    /// indices, so any subset of positions works:
    ///
    /// `m_i = sum_j y_j * L_j(point[i])`, with the basis over the supplied
    /// points.
    pub fn decode<I>(&self, shards: I) -> Result<Vec<FieldElement>, RsError>
    where
        I: IntoIterator,
        I::Item: Borrow<Shard>,
    {
        let k = self.params.data_shards();
        let shards = self.select(shards)?;
        let timer = start_timer!(|| format!("Decoding {} data shards", k));

        // all data shards present
        if shards[k - 1].index == k - 1 {
            end_timer!(timer);
            return Ok(shards.iter().map(|s| s.value).collect());
        }

        let nodes = shards
            .iter()
            .map(|s| self.points.as_slice()[s.index])
            .collect();
        let values = shards.iter().map(|s| s.value).collect::<Vec<_>>();
        let basis = LagrangeBasis::new(&self.field, nodes)?;
        let message = self.points.as_slice()[..k]
            .iter()
            .map(|&x| basis.evaluate(&values, x))
            .collect::<Result<Vec<_>, _>>()?;
        end_timer!(timer);
        Ok(message)
    }

    /// [`Self::decode`] over parallel arrays of shard values and their
    /// indices.
    pub fn decode_indexed(
        &self,
        values: &[FieldElement],
        indices: &[usize],
    ) -> Result<Vec<FieldElement>, RsError> {
        if values.len() != indices.len() {
            return Err(RsError::InvalidInputLength {
                expected: indices.len(),
                got: values.len(),
            });
        }
        self.decode(
            indices
                .iter()
                .zip(values)
                .map(|(&index, &value)| Shard { index, value }),
        )
    }

    /// Recover the message from the final `data_shards` positions of a full
    /// codeword.
    pub fn decode_last_shards(
        &self,
        codeword: impl AsRef<[FieldElement]>,
    ) -> Result<Vec<FieldElement>, RsError> {
        let symbols = codeword.as_ref();
        let n = self.params.total_shards();
        if symbols.len() != n {
            return Err(RsError::InvalidInputLength {
                expected: n,
                got: symbols.len(),
            });
        }
        let start = n - self.params.data_shards();
        self.decode(
            symbols[start..]
                .iter()
                .enumerate()
                .map(|(i, &value)| Shard::new(start + i, value)),
        )
    }

    /// Recover a coefficient-form message.
    ///
    /// Data shards of such a codeword are polynomial coefficients rather than
    /// evaluations, so they cannot enter the interpolation. The message is
    /// returned directly when every data shard is present; otherwise at least
    /// `data_shards` parity shards are required and the coefficients are
    /// interpolated from them alone.
    ///
    /// Unlike [`Self::decode`], this is not MDS over mixed shard sets: any
    /// `data_shards` parity shards suffice, but a set of `data_shards` shards
    /// mixing data and parity fails with [`RsError::InsufficientShards`]
    /// whenever a data shard is missing. Present data shards are not used to
    /// reduce the number of parity shards needed.
    pub fn decode_coefficients<I>(&self, shards: I) -> Result<Vec<FieldElement>, RsError>
    where
        I: IntoIterator,
        I::Item: Borrow<Shard>,
    {
        let k = self.params.data_shards();
        let shards = self.validate(shards)?;
        if shards.len() < k {
            return Err(RsError::InsufficientShards {
                needed: k,
                got: shards.len(),
            });
        }
        if shards[k - 1].index == k - 1 {
            return Ok(shards[..k].iter().map(|s| s.value).collect());
        }

        let evaluations = shards
            .iter()
            .filter(|s| s.index >= k)
            .take(k)
            .collect::<Vec<_>>();
        if evaluations.len() < k {
            return Err(RsError::InsufficientShards {
                needed: k,
                got: evaluations.len(),
            });
        }
        let timer = start_timer!(|| format!("Interpolating {} coefficients", k));
        let nodes = evaluations
            .iter()
            .map(|s| self.points.as_slice()[s.index])
            .collect();
        let values = evaluations.iter().map(|s| s.value).collect::<Vec<_>>();
        let coefficients = LagrangeBasis::new(&self.field, nodes)?.coefficients(&values);
        end_timer!(timer);
        Ok(coefficients)
    }

    /// Validated shards sorted by index, truncated to `data_shards`.
    fn select<I>(&self, shards: I) -> Result<Vec<Shard>, RsError>
    where
        I: IntoIterator,
        I::Item: Borrow<Shard>,
    {
        let k = self.params.data_shards();
        let mut shards = self.validate(shards)?;
        if shards.len() < k {
            return Err(RsError::InsufficientShards {
                needed: k,
                got: shards.len(),
            });
        }
        shards.truncate(k);
        Ok(shards)
    }

    /// Every shard sorted by index, rejecting repeated or out-of-range
    /// indices.
    fn validate<I>(&self, shards: I) -> Result<Vec<Shard>, RsError>
    where
        I: IntoIterator,
        I::Item: Borrow<Shard>,
    {
        let n = self.params.total_shards();
        let mut seen = [false; 256];
        let mut shards = shards
            .into_iter()
            .map(|s| {
                let s = *s.borrow();
                if s.index >= n || seen[s.index] {
                    return Err(RsError::DuplicateOrInvalidIndex(s.index));
                }
                seen[s.index] = true;
                Ok(s)
            })
            .collect::<Result<Vec<_>, _>>()?;
        shards.sort_unstable_by_key(|s| s.index);
        Ok(shards)
    }
}
