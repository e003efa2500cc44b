/**
 * BookRank
 * Copyright (C) 2018 Sebastian Schelter
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use crate::error::{Error, Result};
use crate::types::{self, SparseMatrix, SparseVector};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Norm {
    L1,
    L2,
}

/// Settings for the TF-IDF weighting. The defaults give smoothed idf with raw counts as term
/// frequencies and unit length rows.
#[derive(Clone, Debug)]
pub struct TfidfTransformer {
    pub norm: Option<Norm>,
    pub use_idf: bool,
    pub smooth_idf: bool,
    pub sublinear_tf: bool,
}

impl Default for TfidfTransformer {
    fn default() -> Self {
        TfidfTransformer {
            norm: Some(Norm::L2),
            use_idf: true,
            smooth_idf: true,
            sublinear_tf: false,
        }
    }
}

/// Number of rows with a non-zero entry per column
pub fn document_frequencies(counts: &SparseMatrix<i64>) -> Vec<usize> {
    let mut frequencies = vec![0; counts.num_columns()];

    for row in counts.rows() {
        for (column, count) in row.iter() {
            if *count != 0 {
                frequencies[*column as usize] += 1;
            }
        }
    }

    frequencies
}

impl TfidfTransformer {

    /// Learns the inverse document frequencies of the columns of `counts`.
    ///
    /// With smoothing, idf(t) = ln((1 + n) / (1 + df(t))) + 1, which behaves as if an extra
    /// document containing every term had been seen once. Without smoothing,
    /// idf(t) = ln(n / df(t)) + 1.
    pub fn fit(&self, counts: &SparseMatrix<i64>) -> TfidfModel {

        let idf = if self.use_idf {
            let num_documents = counts.num_rows() as f64;
            let offset = if self.smooth_idf { 1.0 } else { 0.0 };

            let idf = document_frequencies(counts).into_iter()
                .map(|df| ((num_documents + offset) / (df as f64 + offset)).ln() + 1.0)
                .collect();

            Some(idf)
        } else {
            None
        };

        TfidfModel { settings: self.clone(), num_columns: counts.num_columns(), idf }
    }

    pub fn fit_transform(&self, counts: &SparseMatrix<i64>) -> Result<SparseMatrix<f64>> {
        self.fit(counts).transform(counts)
    }
}

pub struct TfidfModel {
    settings: TfidfTransformer,
    num_columns: usize,
    idf: Option<Vec<f64>>,
}

impl TfidfModel {

    pub fn idf(&self) -> Option<&[f64]> {
        self.idf.as_ref().map(|idf| idf.as_slice())
    }

    pub fn transform(&self, counts: &SparseMatrix<i64>) -> Result<SparseMatrix<f64>> {

        if counts.num_columns() != self.num_columns {
            return Err(Error::ShapeMismatch {
                expected: self.num_columns,
                found: counts.num_columns(),
            });
        }

        let rows = counts.rows()
            .map(|row| self.weigh(row))
            .collect();

        Ok(SparseMatrix::from_rows(self.num_columns, rows))
    }

    fn weigh(&self, row: &SparseVector<i64>) -> SparseVector<f64> {

        let mut weights = types::new_sparse_vector(row.len());

        for (column, count) in row.iter() {
            let mut weight = *count as f64;

            if self.settings.sublinear_tf && weight > 0.0 {
                weight = weight.ln() + 1.0;
            }

            if let Some(ref idf) = self.idf {
                weight *= idf[*column as usize];
            }

            weights.insert(*column, weight);
        }

        let norm = match self.settings.norm {
            Some(Norm::L1) => weights.values().map(|weight| weight.abs()).sum::<f64>(),
            Some(Norm::L2) => weights.values().map(|weight| weight * weight).sum::<f64>().sqrt(),
            None => 1.0,
        };

        // Rows without tags stay all-zero
        if norm > 0.0 {
            for weight in weights.values_mut() {
                *weight /= norm;
            }
        }

        weights
    }
}
