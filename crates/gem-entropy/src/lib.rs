#![deny(missing_docs)]

//! Graph entropy measures over adjacency matrices.
//!
//! Two layers: a degree/probability builder that turns an [`AdjacencyMatrix`]
//! into a node-degree probability distribution, and a library of seven
//! parametric entropy functionals that fold that distribution down to a
//! scalar. All computation is synchronous and stateless; the tunable
//! exponent lives in a caller-owned [`EntropyParams`].
//!
//! [`AdjacencyMatrix`]: gem_core::AdjacencyMatrix
//! [`EntropyParams`]: gem_core::EntropyParams

mod degree;
mod dispatch;
pub mod functionals;

pub use degree::{
    node_degree, node_probability, nodes_probability, nodes_probability_sized, total_degree,
    HistogramSizing,
};
pub use dispatch::EntropyFunctional;
pub use functionals::{
    arimoto_entropy, havrda_charvat_entropy, renyi_entropy, shannon_entropy,
    sharma_mittal_entropy, tsallis_entropy, varma_entropy,
};
