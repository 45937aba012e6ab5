use gem_core::{AdjacencyMatrix, EntropyError, EntropyParams};
use gem_entropy::{
    arimoto_entropy, havrda_charvat_entropy, renyi_entropy, shannon_entropy,
    sharma_mittal_entropy, tsallis_entropy, varma_entropy,
};

const TOLERANCE: f64 = 1e-12;

fn two_node_path() -> AdjacencyMatrix {
    AdjacencyMatrix::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

// Distribution for the two-node path is [0, 0.5, 0] under default s = 0.5.

#[test]
fn shannon_on_two_node_path() {
    let value = shannon_entropy(&two_node_path(), &EntropyParams::default()).unwrap();
    assert_close(value, 0.5 * std::f64::consts::LN_2);
    assert_close(value, 0.346_573_590_279_972_64);
}

#[test]
fn renyi_on_two_node_path() {
    let value = renyi_entropy(&two_node_path(), &EntropyParams::default()).unwrap();
    assert_close(value, -std::f64::consts::LN_2);
}

#[test]
fn tsallis_on_two_node_path() {
    let value = tsallis_entropy(&two_node_path(), &EntropyParams::default()).unwrap();
    assert_close(value, (0.5f64.sqrt() - 1.0) / 0.5);
}

#[test]
fn havrda_charvat_on_two_node_path() {
    let value = havrda_charvat_entropy(&two_node_path(), &EntropyParams::default()).unwrap();
    assert_close(value, (0.5f64.sqrt() - 0.5) / 0.5);
}

#[test]
fn arimoto_on_two_node_path() {
    // Sum of p^(1/s) is 0.25; 0.25^0.5 - 1 over s - 1 folds to exactly 1.
    let value = arimoto_entropy(&two_node_path(), &EntropyParams::default()).unwrap();
    assert_close(value, 1.0);
}

#[test]
fn sharma_mittal_on_two_node_path() {
    let value = sharma_mittal_entropy(&two_node_path(), &EntropyParams::default()).unwrap();
    let inner = 0.5 * 0.5f64.ln();
    assert_close(value, ((-0.5 * inner).exp() - 1.0) / 0.5);
}

#[test]
fn varma_on_two_node_path() {
    let value = varma_entropy(&two_node_path(), &EntropyParams::default()).unwrap();
    // Exponent s - m + 1 = 0.4, so the fold is 0.5^0.4.
    assert_close(value, (0.4 * 0.5f64.ln()) / 0.6);
}

#[test]
fn shannon_is_non_negative() {
    let matrices = [
        vec![vec![0.0, 1.0], vec![1.0, 0.0]],
        vec![vec![0.0; 3]; 3],
        vec![
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0],
        ],
    ];
    for rows in matrices {
        let m = AdjacencyMatrix::new(rows).unwrap();
        let value = shannon_entropy(&m, &EntropyParams::default()).unwrap();
        assert!(value >= 0.0, "shannon entropy {value} is negative");
    }
}

#[test]
fn shannon_on_all_zero_distribution_is_zero() {
    let m = AdjacencyMatrix::new(vec![vec![0.0]]).unwrap();
    assert_eq!(shannon_entropy(&m, &EntropyParams::default()).unwrap(), 0.0);
}

#[test]
fn shannon_on_zero_matrix_counts_degree_zero_nodes() {
    let m = AdjacencyMatrix::new(vec![vec![0.0; 3]; 3]).unwrap();
    let value = shannon_entropy(&m, &EntropyParams::default()).unwrap();
    let p: f64 = 2.0 / 3.0;
    assert_close(value, -p * p.ln());
}

#[test]
fn singular_parameter_at_s_equal_one() {
    let m = two_node_path();
    let params = EntropyParams::with_s(1.0);
    for result in [
        havrda_charvat_entropy(&m, &params),
        tsallis_entropy(&m, &params),
        sharma_mittal_entropy(&m, &params),
    ] {
        match result.unwrap_err() {
            EntropyError::Numeric(info) => {
                assert_eq!(info.code, "singular-parameter");
                assert_eq!(info.context.get("s"), Some(&"1".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[test]
fn varma_singular_at_s_equal_m() {
    let m = two_node_path();
    let mut params = EntropyParams::default();
    params.set_s(params.m);
    let err = varma_entropy(&m, &params).unwrap_err();
    assert_eq!(err.info().code, "singular-parameter");
}

#[test]
fn renyi_degenerate_parameters_return_zero() {
    let m = two_node_path();
    for s in [1.0, 0.0, -2.0] {
        let value = renyi_entropy(&m, &EntropyParams::with_s(s)).unwrap();
        assert_eq!(value, 0.0);
    }
}

#[test]
fn renyi_on_massless_distribution_is_non_finite() {
    // A single isolated node yields the all-zero distribution [0], so the
    // fold takes log(0).
    let m = AdjacencyMatrix::new(vec![vec![0.0]]).unwrap();
    let err = renyi_entropy(&m, &EntropyParams::default()).unwrap_err();
    assert_eq!(err.info().code, "non-finite-result");
}

#[test]
fn arimoto_singular_at_s_equal_zero() {
    let err = arimoto_entropy(&two_node_path(), &EntropyParams::with_s(0.0)).unwrap_err();
    match err {
        EntropyError::Numeric(info) => {
            assert_eq!(info.code, "singular-parameter");
            assert_eq!(info.context.get("s"), Some(&"0".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn arimoto_fold_diverges_under_negative_s() {
    // Zero-probability slots map to 0^(1/s) = inf when s is negative.
    let err = arimoto_entropy(&two_node_path(), &EntropyParams::with_s(-1.0)).unwrap_err();
    assert_eq!(err.info().code, "non-finite-result");
}

#[test]
fn arimoto_divides_by_zero_at_s_equal_one() {
    let m = two_node_path();
    let err = arimoto_entropy(&m, &EntropyParams::with_s(1.0)).unwrap_err();
    assert_eq!(err.info().code, "non-finite-result");
}

#[test]
fn matrix_errors_propagate_through_functionals() {
    let dense = AdjacencyMatrix::new(vec![vec![2.0, 1.0], vec![1.0, 2.0]]).unwrap();
    let err = shannon_entropy(&dense, &EntropyParams::default()).unwrap_err();
    assert_eq!(err.info().code, "degree-overflow");
}
