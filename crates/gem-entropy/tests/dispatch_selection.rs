use std::collections::BTreeSet;

use gem_core::{AdjacencyMatrix, EntropyParams};
use gem_entropy::{shannon_entropy, tsallis_entropy, EntropyFunctional};

fn two_node_path() -> AdjacencyMatrix {
    AdjacencyMatrix::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap()
}

#[test]
fn all_lists_seven_distinct_functionals() {
    assert_eq!(EntropyFunctional::ALL.len(), 7);
    let names: BTreeSet<&str> = EntropyFunctional::ALL.iter().map(|f| f.name()).collect();
    assert_eq!(names.len(), 7);
}

#[test]
fn dispatch_agrees_with_free_functions() {
    let m = two_node_path();
    let params = EntropyParams::default();
    assert_eq!(
        EntropyFunctional::Shannon.compute(&m, &params).unwrap(),
        shannon_entropy(&m, &params).unwrap()
    );
    assert_eq!(
        EntropyFunctional::Tsallis.compute(&m, &params).unwrap(),
        tsallis_entropy(&m, &params).unwrap()
    );
}

#[test]
fn serde_names_match_report_names() {
    for functional in EntropyFunctional::ALL {
        let json = serde_json::to_string(&functional).unwrap();
        assert_eq!(json, format!("\"{}\"", functional.name()));
        let restored: EntropyFunctional = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, functional);
    }
}
