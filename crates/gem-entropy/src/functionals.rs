//! The seven parametric entropy functionals.
//!
//! Each functional builds the degree-probability distribution via
//! [`nodes_probability`] and folds it down to a scalar. Numeric domain
//! violations surface as structured errors rather than NaN: singular
//! parameter values are rejected with `singular-parameter` before any
//! arithmetic, and any fold that lands outside the finite reals (log of a
//! zero sum, `0^negative` under `s < 0`) fails with `non-finite-result`.

use gem_core::errors::{EntropyError, ErrorInfo};
use gem_core::{AdjacencyMatrix, EntropyParams};

use crate::degree::nodes_probability;

/// Shannon entropy `Σ -p·log(p)` with the convention `0·log(0) := 0`.
///
/// Ignores the tunable exponent entirely.
pub fn shannon_entropy(
    matrix: &AdjacencyMatrix,
    _params: &EntropyParams,
) -> Result<f64, EntropyError> {
    let probs = nodes_probability(matrix)?;
    let entropy = probs
        .iter()
        .map(|&p| if p == 0.0 { 0.0 } else { -p * p.ln() })
        .sum();
    finite("shannon", entropy)
}

/// Rényi entropy `-log(Σ p^s) / (s - 1)`.
///
/// Returns exactly 0 for `s <= 0` or `s = 1`; this degenerate-case fallback
/// is specific to Rényi and deliberately not generalized to the other
/// functionals.
pub fn renyi_entropy(
    matrix: &AdjacencyMatrix,
    params: &EntropyParams,
) -> Result<f64, EntropyError> {
    let s = params.s;
    let probs = nodes_probability(matrix)?;
    if s <= 0.0 || s == 1.0 {
        return Ok(0.0);
    }
    let fold: f64 = probs.iter().map(|&p| p.powf(s)).sum();
    finite("renyi", -(fold.ln() / (s - 1.0)))
}

/// Tsallis entropy `(Σ p^s - 1) / (1 - s)`. Undefined at `s = 1`.
pub fn tsallis_entropy(
    matrix: &AdjacencyMatrix,
    params: &EntropyParams,
) -> Result<f64, EntropyError> {
    let s = params.s;
    if s == 1.0 {
        return Err(singular("tsallis", "s", s));
    }
    let probs = nodes_probability(matrix)?;
    let fold: f64 = probs.iter().map(|&p| p.powf(s)).sum();
    finite("tsallis", (fold - 1.0) / (1.0 - s))
}

/// Havrda-Charvát entropy `Σ (p^s - p) / (1 - s)`. Undefined at `s = 1`.
pub fn havrda_charvat_entropy(
    matrix: &AdjacencyMatrix,
    params: &EntropyParams,
) -> Result<f64, EntropyError> {
    let s = params.s;
    if s == 1.0 {
        return Err(singular("havrda-charvat", "s", s));
    }
    let probs = nodes_probability(matrix)?;
    let entropy = probs
        .iter()
        .map(|&p| (p.powf(s) - p) / (1.0 - s))
        .sum();
    finite("havrda-charvat", entropy)
}

/// Arimoto entropy `((Σ p^(1/s))^s - 1) / (s - 1)`.
///
/// Carries no zero-guard: `p = 0` contributes nothing to the sum for
/// `s > 0`. Undefined at `s = 0`, where the exponent `1/s` divides by zero.
/// At `s = 1` the fold divides by zero and fails with `non-finite-result`,
/// as does a fold driven to infinity by `0^(1/s)` under `s < 0`.
pub fn arimoto_entropy(
    matrix: &AdjacencyMatrix,
    params: &EntropyParams,
) -> Result<f64, EntropyError> {
    let s = params.s;
    if s == 0.0 {
        return Err(singular("arimoto", "s", s));
    }
    let probs = nodes_probability(matrix)?;
    let fold = finite("arimoto", probs.iter().map(|&p| p.powf(1.0 / s)).sum())?;
    finite("arimoto", (fold.powf(s) - 1.0) / (s - 1.0))
}

/// Sharma-Mittal entropy `(exp((s-1)·Σ p·log(p)) - 1) / (1 - s)` with the
/// `0·log(0) := 0` convention. Undefined at `s = 1`.
pub fn sharma_mittal_entropy(
    matrix: &AdjacencyMatrix,
    params: &EntropyParams,
) -> Result<f64, EntropyError> {
    let s = params.s;
    if s == 1.0 {
        return Err(singular("sharma-mittal", "s", s));
    }
    let probs = nodes_probability(matrix)?;
    let inner: f64 = probs
        .iter()
        .map(|&p| if p == 0.0 { 0.0 } else { p * p.ln() })
        .sum();
    finite("sharma-mittal", (((s - 1.0) * inner).exp() - 1.0) / (1.0 - s))
}

/// Varma entropy `log(Σ p^(s - m + 1)) / (m - s)`. Undefined at `s = m`.
///
/// Experimental: the measure was never finished by its originators and is
/// kept in its published form.
pub fn varma_entropy(
    matrix: &AdjacencyMatrix,
    params: &EntropyParams,
) -> Result<f64, EntropyError> {
    let (s, m) = (params.s, params.m);
    if s == m {
        return Err(singular("varma", "s", s));
    }
    let probs = nodes_probability(matrix)?;
    let fold: f64 = probs.iter().map(|&p| p.powf(s - m + 1.0)).sum();
    finite("varma", fold.ln() / (m - s))
}

fn singular(name: &str, parameter: &str, value: f64) -> EntropyError {
    EntropyError::Numeric(
        ErrorInfo::new(
            "singular-parameter",
            format!("{name} entropy is undefined at this parameter value"),
        )
        .with_context(parameter, value.to_string()),
    )
}

fn finite(name: &str, value: f64) -> Result<f64, EntropyError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EntropyError::Numeric(
            ErrorInfo::new(
                "non-finite-result",
                format!("{name} entropy fold left the finite reals"),
            )
            .with_context("value", value.to_string()),
        ))
    }
}
