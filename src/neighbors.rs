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

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde_derive::Serialize;

use crate::types::{SparseMatrix, SparseVector};

/// A row of the weight matrix together with its distance to the query.
#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct Neighbor {
    pub row: usize,
    pub distance: f64,
}

/// Orders by distance first and row second. Our max-heap keeps the largest of the closest rows
/// on top. NaN distances compare as equal.
fn cmp_distance_then_row(a: &Neighbor, b: &Neighbor) -> Ordering {
    match a.distance.partial_cmp(&b.distance) {
        Some(Ordering::Equal) | None => a.row.cmp(&b.row),
        Some(ordering) => ordering,
    }
}

impl Eq for Neighbor {}

impl Ord for Neighbor {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_distance_then_row(self, other)
    }
}

impl PartialOrd for Neighbor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(cmp_distance_then_row(self, other))
    }
}

fn dot(x: &SparseVector<f64>, y: &SparseVector<f64>) -> f64 {
    let (shorter, longer) = if x.len() <= y.len() { (x, y) } else { (y, x) };

    shorter.iter()
        .filter_map(|(column, value)| longer.get(column).map(|other| value * other))
        .sum()
}

fn l2norm(x: &SparseVector<f64>) -> f64 {
    x.values().map(|value| value * value).sum::<f64>().sqrt()
}

/// 1 - cos(x, y). Vectors without any weight are at distance 1 from everything.
pub fn cosine_distance(x: &SparseVector<f64>, y: &SparseVector<f64>) -> f64 {
    let norms = l2norm(x) * l2norm(y);

    if norms == 0.0 {
        return 1.0;
    }

    1.0 - dot(x, y) / norms
}

/// The `num_docs + 1` rows of `weights` closest to `query` in ascending order of cosine distance,
/// ties go to the lower row. When the query is a row of `weights` itself, it is the first entry at
/// distance zero, followed by `num_docs` actual neighbors.
pub fn closest_documents(
    weights: &SparseMatrix<f64>,
    query: &SparseVector<f64>,
    num_docs: usize,
) -> Vec<Neighbor> {

    let k = num_docs.saturating_add(1);
    let query_norm = l2norm(query);

    let mut closest: BinaryHeap<Neighbor> = BinaryHeap::with_capacity(k.min(weights.num_rows()));

    for (row, vector) in weights.rows().enumerate() {

        let norms = query_norm * l2norm(vector);
        let distance = if norms == 0.0 { 1.0 } else { 1.0 - dot(query, vector) / norms };

        let neighbor = Neighbor { row, distance };

        if closest.len() < k {
            closest.push(neighbor);
        } else if let Some(mut top) = closest.peek_mut() {
            if neighbor < *top {
                *top = neighbor;
            }
        }
    }

    closest.into_sorted_vec()
}
