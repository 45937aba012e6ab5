#![deny(missing_docs)]

//! Shared foundation for the graph entropy measures workspace: structured
//! errors, the validated adjacency matrix type, and the entropy parameter
//! object.

pub mod errors;
mod matrix;
mod params;

pub use errors::{EntropyError, ErrorInfo};
pub use matrix::AdjacencyMatrix;
pub use params::{EntropyParams, DEFAULT_M, DEFAULT_S};
