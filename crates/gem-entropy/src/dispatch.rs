use gem_core::{AdjacencyMatrix, EntropyError, EntropyParams};

use serde::{Deserialize, Serialize};

use crate::functionals::{
    arimoto_entropy, havrda_charvat_entropy, renyi_entropy, shannon_entropy,
    sharma_mittal_entropy, tsallis_entropy, varma_entropy,
};

/// Selects one of the seven entropy functionals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntropyFunctional {
    /// Arimoto entropy.
    Arimoto,
    /// Havrda-Charvát entropy.
    HavrdaCharvat,
    /// Rényi entropy.
    Renyi,
    /// Shannon entropy.
    Shannon,
    /// Sharma-Mittal entropy.
    SharmaMittal,
    /// Tsallis entropy.
    Tsallis,
    /// Varma entropy (experimental).
    Varma,
}

impl EntropyFunctional {
    /// Every functional in canonical order, for batch drivers and sweeps.
    pub const ALL: [EntropyFunctional; 7] = [
        EntropyFunctional::Arimoto,
        EntropyFunctional::HavrdaCharvat,
        EntropyFunctional::Renyi,
        EntropyFunctional::Shannon,
        EntropyFunctional::SharmaMittal,
        EntropyFunctional::Tsallis,
        EntropyFunctional::Varma,
    ];

    /// Stable name used in reports and serialized selections.
    pub fn name(&self) -> &'static str {
        match self {
            EntropyFunctional::Arimoto => "arimoto",
            EntropyFunctional::HavrdaCharvat => "havrda-charvat",
            EntropyFunctional::Renyi => "renyi",
            EntropyFunctional::Shannon => "shannon",
            EntropyFunctional::SharmaMittal => "sharma-mittal",
            EntropyFunctional::Tsallis => "tsallis",
            EntropyFunctional::Varma => "varma",
        }
    }

    /// Computes the selected entropy for the matrix under the given params.
    pub fn compute(
        &self,
        matrix: &AdjacencyMatrix,
        params: &EntropyParams,
    ) -> Result<f64, EntropyError> {
        match self {
            EntropyFunctional::Arimoto => arimoto_entropy(matrix, params),
            EntropyFunctional::HavrdaCharvat => havrda_charvat_entropy(matrix, params),
            EntropyFunctional::Renyi => renyi_entropy(matrix, params),
            EntropyFunctional::Shannon => shannon_entropy(matrix, params),
            EntropyFunctional::SharmaMittal => sharma_mittal_entropy(matrix, params),
            EntropyFunctional::Tsallis => tsallis_entropy(matrix, params),
            EntropyFunctional::Varma => varma_entropy(matrix, params),
        }
    }
}
