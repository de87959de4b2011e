// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Lagrange interpolation over GF(2^8).

use crate::RsError;
use ark_std::{vec, vec::Vec};
use jf_gf256::{FieldElement, GaloisField};

/// Lagrange basis for a fixed set of distinct interpolation nodes
/// `x_0 .. x_{n-1}`:
///
/// `L_j(x) = prod_{m != j} (x - x_m) / (x_j - x_m)`
///
/// The barycentric weights `w_j = prod_{m != j} 1 / (x_j - x_m)` are computed
/// once, so a full basis row or an interpolated value costs O(n).
pub(crate) struct LagrangeBasis {
    field: GaloisField,
    nodes: Vec<FieldElement>,
    weights: Vec<FieldElement>,
}

impl LagrangeBasis {
    /// Fails with [`RsError::DivisionByZero`] if two nodes coincide.
    pub(crate) fn new(field: &GaloisField, nodes: Vec<FieldElement>) -> Result<Self, RsError> {
        let weights = nodes
            .iter()
            .enumerate()
            .map(|(j, &x_j)| {
                let denom = nodes
                    .iter()
                    .enumerate()
                    .filter(|&(m, _)| m != j)
                    .fold(1, |acc, (_, &x_m)| field.mul(acc, field.sub(x_j, x_m)));
                field.inv(denom).map_err(RsError::from)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            field: field.clone(),
            nodes,
            weights,
        })
    }

    fn node_index(&self, x: FieldElement) -> Option<usize> {
        self.nodes.iter().position(|&x_m| x_m == x)
    }

    /// `l(x) = prod_m (x - x_m)`
    fn node_polynomial(&self, x: FieldElement) -> FieldElement {
        self.nodes
            .iter()
            .fold(1, |acc, &x_m| self.field.mul(acc, self.field.sub(x, x_m)))
    }

    /// `[L_0(x), .., L_{n-1}(x)]`, i.e. one row of the matrix mapping node
    /// values to the value at `x`.
    ///
    /// Off the nodes, `L_j(x) = w_j * l(x) / (x - x_j)`. O(n).
    pub(crate) fn basis_at(&self, x: FieldElement) -> Result<Vec<FieldElement>, RsError> {
        if let Some(i) = self.node_index(x) {
            return Ok((0..self.nodes.len()).map(|j| (i == j) as u8).collect());
        }
        let field = &self.field;
        let l = self.node_polynomial(x);
        self.nodes
            .iter()
            .zip(&self.weights)
            .map(|(&x_j, &w_j)| {
                field
                    .div(field.mul(w_j, l), field.sub(x, x_j))
                    .map_err(RsError::from)
            })
            .collect()
    }

    /// Value at `x` of the unique polynomial of degree `< n` taking
    /// `values[j]` at node `j`.
    ///
    /// `f(x) = l(x) * sum_j y_j * w_j / (x - x_j)`. O(n).
    pub(crate) fn evaluate(
        &self,
        values: &[FieldElement],
        x: FieldElement,
    ) -> Result<FieldElement, RsError> {
        if let Some(i) = self.node_index(x) {
            return Ok(values[i]);
        }
        let field = &self.field;
        let mut sum = 0;
        for ((&x_j, &w_j), &y_j) in self.nodes.iter().zip(&self.weights).zip(values) {
            // a zero value contributes nothing
            if y_j == 0 {
                continue;
            }
            let term = field.div(field.mul(y_j, w_j), field.sub(x, x_j))?;
            sum = field.add(sum, term);
        }
        Ok(field.mul(self.node_polynomial(x), sum))
    }

    /// Coefficients, lowest degree first, of the unique polynomial of degree
    /// `< n` taking `values[j]` at node `j`.
    ///
    ///  1. l(x) = prod_i (x - x_i)
    ///  2. l_i(x) = w_i * l(x) / (x - x_i)
    ///  3. f(x) = sum_i y_i * l_i(x)
    ///
    /// O(n^2).
    pub(crate) fn coefficients(&self, values: &[FieldElement]) -> Vec<FieldElement> {
        let field = &self.field;
        let n = self.nodes.len();

        let mut l = vec![0u8; n + 1];
        l[0] = 1;
        for i in 1..=n {
            let x = self.nodes[i - 1];
            l[i] = 1;
            for j in (1..i).rev() {
                l[j] = field.sub(l[j - 1], field.mul(x, l[j]));
            }
            l[0] = field.mul(x, l[0]);
        }

        let mut f = vec![0u8; n];
        let mut li = vec![0u8; n];
        for ((&x_i, &w_i), &y_i) in self.nodes.iter().zip(&self.weights).zip(values) {
            if y_i == 0 {
                continue;
            }
            // synthetic division of l(x) by (x - x_i)
            li[n - 1] = 1;
            for j in (0..n - 1).rev() {
                li[j] = field.add(l[j + 1], field.mul(x_i, li[j + 1]));
            }
            let weight = field.mul(w_i, y_i);
            for (f_j, &li_j) in f.iter_mut().zip(&li) {
                *f_j = field.add(*f_j, field.mul(weight, li_j));
            }
        }
        f
    }
}
