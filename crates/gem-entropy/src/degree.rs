use gem_core::errors::{EntropyError, ErrorInfo};
use gem_core::AdjacencyMatrix;

use serde::{Deserialize, Serialize};

/// Sizing policy for the degree histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HistogramSizing {
    /// Allocate `2N - 1` slots and fail with `degree-overflow` when a
    /// visited node's degree does not fit. This is the default mode.
    Fixed,
    /// Size the histogram to `max(observed degree) + 1`, accommodating
    /// dense or heavily weighted graphs.
    Dynamic,
}

/// Sums every entry of the matrix. Used as the normalizing denominator for
/// per-node probabilities.
pub fn total_degree(matrix: &AdjacencyMatrix) -> f64 {
    matrix.rows().map(|row| row.iter().sum::<f64>()).sum()
}

/// Sums row `i` of the matrix, the weighted degree of node `i`.
pub fn node_degree(index: usize, matrix: &AdjacencyMatrix) -> Result<f64, EntropyError> {
    Ok(matrix.row(index)?.iter().sum())
}

/// Returns `node_degree(i) / total_degree`.
///
/// Fails with `zero-total-degree` when the matrix carries no weight at all.
pub fn node_probability(index: usize, matrix: &AdjacencyMatrix) -> Result<f64, EntropyError> {
    let total = total_degree(matrix);
    if total == 0.0 {
        return Err(EntropyError::Numeric(
            ErrorInfo::new("zero-total-degree", "matrix has zero total weight")
                .with_context("node", index.to_string()),
        ));
    }
    Ok(node_degree(index, matrix)? / total)
}

/// Builds the degree-probability distribution with the default fixed-size
/// histogram of `2N - 1` slots.
///
/// Node indices `0..N-1` are visited exclusive of the last row, so the
/// returned distribution carries mass `(N-1)/N` rather than 1. This is the
/// historical behavior of the measure, kept as-is.
pub fn nodes_probability(matrix: &AdjacencyMatrix) -> Result<Vec<f64>, EntropyError> {
    nodes_probability_sized(matrix, HistogramSizing::Fixed)
}

/// Builds the degree-probability distribution with an explicit histogram
/// sizing policy. Visitation semantics are identical in both modes.
pub fn nodes_probability_sized(
    matrix: &AdjacencyMatrix,
    sizing: HistogramSizing,
) -> Result<Vec<f64>, EntropyError> {
    let size = matrix.size();
    if size == 0 {
        return Ok(Vec::new());
    }

    let mut slots = Vec::with_capacity(size - 1);
    for node in 0..size - 1 {
        let degree = node_degree(node, matrix)?;
        slots.push(degree_slot(node, degree)?);
    }

    let capacity = match sizing {
        HistogramSizing::Fixed => {
            let capacity = 2 * size - 1;
            for (node, slot) in slots.iter().enumerate() {
                if *slot >= capacity {
                    return Err(EntropyError::Degree(
                        ErrorInfo::new("degree-overflow", "node degree exceeds histogram range")
                            .with_context("node", node.to_string())
                            .with_context("degree", slot.to_string())
                            .with_context("capacity", capacity.to_string())
                            .with_hint(
                                "use HistogramSizing::Dynamic for dense or heavily weighted graphs",
                            ),
                    ));
                }
            }
            capacity
        }
        HistogramSizing::Dynamic => slots.iter().copied().max().map_or(0, |max| max + 1),
    };

    let mut histogram = vec![0.0f64; capacity];
    for slot in slots {
        histogram[slot] += 1.0;
    }
    for value in &mut histogram {
        *value /= size as f64;
    }
    Ok(histogram)
}

// Degrees at or above 2^53 lose exact integrality in f64 and cannot index a
// histogram slot.
const MAX_SLOT_DEGREE: f64 = 9_007_199_254_740_992.0;

// The histogram is indexed by integer degree; fractional weighted degrees
// have no slot.
fn degree_slot(node: usize, degree: f64) -> Result<usize, EntropyError> {
    if degree.fract() != 0.0 {
        return Err(EntropyError::Degree(
            ErrorInfo::new("non-integral-degree", "weighted degree is not an integer")
                .with_context("node", node.to_string())
                .with_context("degree", degree.to_string()),
        ));
    }
    if degree >= MAX_SLOT_DEGREE {
        return Err(EntropyError::Degree(
            ErrorInfo::new("degree-overflow", "node degree exceeds representable slot range")
                .with_context("node", node.to_string())
                .with_context("degree", degree.to_string()),
        ));
    }
    Ok(degree as usize)
}
