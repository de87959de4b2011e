// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Systematic encoder.

use crate::{
    lagrange::LagrangeBasis, params::CodeParams, points::EvaluationPoints, shard::Codeword,
    RsError,
};
use ark_std::{end_timer, format, start_timer, vec::Vec};
use jf_gf256::{FieldElement, GaloisField};
use serde::{Deserialize, Serialize};

/// What the message symbols of a codeword stand for.
///
/// Both conventions give systematic codewords that agree on the evaluation
/// points, but they produce different parity for the same message and each
/// needs its own inverse: [`Decoder::decode`](crate::Decoder::decode) for
/// `Values`, [`Decoder::decode_coefficients`](crate::Decoder::decode_coefficients)
/// for `Coefficients`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Interpolation {
    /// Message symbols are the values `p(point[j])` of a polynomial of
    /// degree `< k` at the first `k` points; parity is `p` at the remaining
    /// points.
    #[default]
    Values,
    /// Message symbols are the coefficients `m_0 .. m_{k-1}` of
    /// `p(x) = sum_j m_j x^j`; parity is `p` at the parity points.
    Coefficients,
}

/// Reed-Solomon encoder for one `(data_shards, parity_shards)` configuration.
///
/// Everything derived from the configuration is built by the constructor and
/// read-only afterwards.
#[derive(Clone, Debug)]
pub struct Encoder {
    field: GaloisField,
    params: CodeParams,
    points: EvaluationPoints,
    interpolation: Interpolation,
    // row `p` is [L_0(x), .., L_{k-1}(x)] at x = point[k + p], over the
    // basis of the first `k` points; empty in coefficient form
    parity_matrix: Vec<Vec<FieldElement>>,
}

impl Encoder {
    /// Value-form encoder.
    pub fn new(
        field: &GaloisField,
        data_shards: usize,
        parity_shards: usize,
    ) -> Result<Self, RsError> {
        Self::with_interpolation(field, data_shards, parity_shards, Interpolation::Values)
    }

    /// Encoder using the given convention.
    pub fn with_interpolation(
        field: &GaloisField,
        data_shards: usize,
        parity_shards: usize,
        interpolation: Interpolation,
    ) -> Result<Self, RsError> {
        let params = CodeParams::new(data_shards, parity_shards)?;
        let points = EvaluationPoints::generate(params.total_shards())?;

        let parity_matrix = match interpolation {
            Interpolation::Values => {
                let timer = start_timer!(|| format!(
                    "Precomputing {}x{} parity matrix",
                    parity_shards, data_shards
                ));
                let (data_points, parity_points) = points.as_slice().split_at(data_shards);
                let basis = LagrangeBasis::new(field, data_points.to_vec())?;
                let matrix = parity_points
                    .iter()
                    .map(|&x| basis.basis_at(x))
                    .collect::<Result<Vec<_>, _>>()?;
                end_timer!(timer);
                matrix
            },
            Interpolation::Coefficients => Vec::new(),
        };

        Ok(Self {
            field: field.clone(),
            params,
            points,
            interpolation,
            parity_matrix,
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

    /// Convention this encoder was built with.
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Field the encoder computes in.
    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    /// Encode exactly `data_shards` symbols into a codeword of
    /// `total_shards` symbols whose prefix is `message`.
    pub fn encode(&self, message: &[FieldElement]) -> Result<Codeword, RsError> {
        let k = self.params.data_shards();
        if message.len() != k {
            return Err(RsError::InvalidInputLength {
                expected: k,
                got: message.len(),
            });
        }
        let timer = start_timer!(|| format!(
            "Encoding {} data shards into {}",
            k,
            self.params.total_shards()
        ));
        let mut symbols = Vec::with_capacity(self.params.total_shards());
        symbols.extend_from_slice(message);
        symbols.extend(self.parity(message));
        end_timer!(timer);
        Codeword::new(k, symbols)
    }

    /// Check that the parity part of a full codeword matches its data part.
    pub fn verify(&self, codeword: impl AsRef<[FieldElement]>) -> Result<bool, RsError> {
        let symbols = codeword.as_ref();
        let n = self.params.total_shards();
        if symbols.len() != n {
            return Err(RsError::InvalidInputLength {
                expected: n,
                got: symbols.len(),
            });
        }
        let (data, parity) = symbols.split_at(self.params.data_shards());
        Ok(self.parity(data).eq(parity.iter().copied()))
    }

    // `message.len() == data_shards` is checked by the callers
    fn parity<'a>(
        &'a self,
        message: &'a [FieldElement],
    ) -> impl Iterator<Item = FieldElement> + 'a {
        let k = self.params.data_shards();
        (0..self.params.parity_shards()).map(move |p| match self.interpolation {
            Interpolation::Values => self.field.dot(&self.parity_matrix[p], message),
            Interpolation::Coefficients => {
                let x = self.points.as_slice()[k + p];
                // Horner's rule from the leading coefficient down
                message
                    .iter()
                    .rev()
                    .fold(0, |acc, &m| self.field.add(self.field.mul(acc, x), m))
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::vec::Vec;

    // Direct Lagrange evaluation without the precomputed matrix.
    fn lagrange_parity(field: &GaloisField, message: &[u8], total: usize) -> Vec<u8> {
        let k = message.len();
        let points: Vec<u8> = (1..=total as u8).collect();
        (k..total)
            .map(|i| {
                let mut result = 0;
                for j in 0..k {
                    let mut basis = 1;
                    for m in 0..k {
                        if m != j {
                            let num = field.sub(points[i], points[m]);
                            let den = field.sub(points[j], points[m]);
                            basis = field.mul(basis, field.div(num, den).unwrap());
                        }
                    }
                    result = field.add(result, field.mul(message[j], basis));
                }
                result
            })
            .collect()
    }

    #[test]
    fn test_value_form_matches_direct_interpolation() {
        let field = GaloisField::default();
        let encoder = Encoder::new(&field, 6, 12).unwrap();
        let message = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
        let codeword = encoder.encode(&message).unwrap();
        assert_eq!(codeword.data(), &message);
        assert_eq!(codeword.parity(), lagrange_parity(&field, &message, 18).as_slice());
        assert!(encoder.verify(&codeword).unwrap());
    }

    #[test]
    fn test_coefficient_form_is_polynomial_evaluation() {
        let field = GaloisField::default();
        let encoder =
            Encoder::with_interpolation(&field, 3, 4, Interpolation::Coefficients).unwrap();
        assert_eq!(encoder.interpolation(), Interpolation::Coefficients);
        let message = [7, 0, 1];
        // p(x) = 7 + x^2
        let codeword = encoder.encode(&message).unwrap();
        for (i, &y) in codeword.as_slice().iter().enumerate().skip(3) {
            let x = (i + 1) as u8;
            assert_eq!(y, field.add(7, field.pow(x, 2)));
        }
        assert!(encoder.verify(&codeword).unwrap());
        assert_ne!(
            codeword,
            Encoder::new(&field, 3, 4).unwrap().encode(&message).unwrap()
        );
    }

    #[test]
    fn test_constant_message() {
        // a constant polynomial has the same value everywhere
        let field = GaloisField::default();
        let encoder = Encoder::new(&field, 4, 5).unwrap();
        let codeword = encoder.encode(&[0x42; 4]).unwrap();
        assert_eq!(codeword.as_slice(), &[0x42; 9]);
        assert_eq!(encoder.encode(&[0; 4]).unwrap().as_slice(), &[0; 9]);
    }

    #[test]
    fn test_degenerate_dimensions() {
        let field = GaloisField::default();
        for interpolation in [Interpolation::Values, Interpolation::Coefficients] {
            // a single data shard is replicated
            let encoder = Encoder::with_interpolation(&field, 1, 7, interpolation).unwrap();
            assert_eq!(encoder.encode(&[0x9C]).unwrap().as_slice(), &[0x9C; 8]);

            // no parity shards
            let encoder = Encoder::with_interpolation(&field, 5, 0, interpolation).unwrap();
            let codeword = encoder.encode(&[1, 2, 3, 4, 5]).unwrap();
            assert_eq!(codeword.as_slice(), &[1, 2, 3, 4, 5]);
            assert!(codeword.parity().is_empty());
        }
    }

    #[test]
    fn test_invalid_input() {
        let field = GaloisField::default();
        let encoder = Encoder::new(&field, 4, 2).unwrap();
        assert_eq!(
            encoder.encode(&[1, 2, 3]),
            Err(RsError::InvalidInputLength {
                expected: 4,
                got: 3
            })
        );
        assert!(encoder.encode(&[0; 5]).is_err());
        assert_eq!(
            encoder.verify([1u8, 2, 3]),
            Err(RsError::InvalidInputLength {
                expected: 6,
                got: 3
            })
        );
        let mut codeword = encoder.encode(&[1, 2, 3, 4]).unwrap().into_symbols();
        codeword[5] ^= 1;
        assert!(!encoder.verify(&codeword).unwrap());

        assert!(matches!(
            Encoder::new(&field, 0, 3),
            Err(RsError::ConfigurationError(_))
        ));
        assert!(matches!(
            Encoder::new(&field, 128, 128),
            Err(RsError::ConfigurationError(_))
        ));
        assert!(Encoder::new(&field, 128, 127).is_ok());
    }

    #[test]
    fn test_points_are_shared() {
        let field = GaloisField::default();
        let a = Encoder::new(&field, 6, 12).unwrap();
        let b = Encoder::with_interpolation(&field, 6, 12, Interpolation::Coefficients).unwrap();
        assert_eq!(a.points(), b.points());
        assert_eq!(a.points().as_slice(), (1..=18).collect::<Vec<u8>>());
        assert_eq!(a.params(), b.params());
        assert_eq!(a.field(), &field);
    }
}
