use serde::{Deserialize, Serialize};

use crate::errors::{EntropyError, ErrorInfo};

/// Dense weighted adjacency matrix over `f64` edge weights.
///
/// Entry `[i][j]` is the weight of the edge between node `i` and node `j`;
/// zero means no edge. Construction validates that the matrix is square and
/// that every weight is finite and non-negative; the matrix is immutable
/// afterwards. Symmetry is not enforced, the degree semantics downstream
/// assume an undirected or weighted interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<f64>>", try_from = "Vec<Vec<f64>>")]
pub struct AdjacencyMatrix {
    rows: Vec<Vec<f64>>,
}

impl AdjacencyMatrix {
    /// Creates a matrix from raw rows, validating shape and weights.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, EntropyError> {
        let size = rows.len();
        for (index, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(EntropyError::Matrix(
                    ErrorInfo::new("ragged-matrix", "adjacency matrix must be square")
                        .with_context("rows", size.to_string())
                        .with_context("row", index.to_string())
                        .with_context("width", row.len().to_string()),
                ));
            }
            for (col, weight) in row.iter().enumerate() {
                if !weight.is_finite() {
                    return Err(EntropyError::Matrix(
                        ErrorInfo::new("non-finite-weight", "edge weights must be finite")
                            .with_context("row", index.to_string())
                            .with_context("col", col.to_string()),
                    ));
                }
                if *weight < 0.0 {
                    return Err(EntropyError::Matrix(
                        ErrorInfo::new("negative-weight", "edge weights must be non-negative")
                            .with_context("row", index.to_string())
                            .with_context("col", col.to_string())
                            .with_context("weight", weight.to_string()),
                    ));
                }
            }
        }
        Ok(Self { rows })
    }

    /// Returns the number of nodes N.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns the weight row for the provided node index.
    pub fn row(&self, index: usize) -> Result<&[f64], EntropyError> {
        self.rows.get(index).map(Vec::as_slice).ok_or_else(|| {
            EntropyError::Matrix(
                ErrorInfo::new("node-out-of-range", "node index exceeds matrix size")
                    .with_context("node", index.to_string())
                    .with_context("size", self.rows.len().to_string()),
            )
        })
    }

    /// Returns the weight at `[i][j]`, or `None` when out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Iterates over the weight rows in node order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

impl TryFrom<Vec<Vec<f64>>> for AdjacencyMatrix {
    type Error = EntropyError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<AdjacencyMatrix> for Vec<Vec<f64>> {
    fn from(matrix: AdjacencyMatrix) -> Self {
        matrix.rows
    }
}
