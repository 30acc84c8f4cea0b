// Host-side tests for the filter-graph constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

fn matrix(values: &str) -> Vec<f32> {
    values
        .split_whitespace()
        .map(|v| v.parse::<f32>().expect("numeric matrix entry"))
        .collect()
}

#[test]
fn channel_matrices_are_4x5() {
    for m in CHANNEL_MATRICES {
        assert_eq!(matrix(m).len(), 20);
    }
}

#[test]
fn each_matrix_keeps_one_channel_and_alpha() {
    for (i, m) in CHANNEL_MATRICES.iter().enumerate() {
        let m = matrix(m);
        for row in 0..3 {
            let expected = if row == i { 1.0 } else { 0.0 };
            // diagonal entry of the colour row
            assert_eq!(m[row * 5 + row], expected, "matrix {i} row {row}");
            let row_sum: f32 = m[row * 5..row * 5 + 5].iter().sum();
            assert_eq!(row_sum, expected);
        }
        // alpha row passes alpha through
        assert_eq!(&m[15..20], &[0.0, 0.0, 0.0, 1.0, 0.0]);
    }
}

#[test]
fn channel_ids_and_results_are_distinct() {
    let mut all: Vec<&str> = CHANNEL_IDS.iter().chain(CHANNEL_RESULTS.iter()).copied().collect();
    all.push(MAP_RESULT);
    let len = all.len();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), len);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn initial_graph_values_are_sane() {
    assert!(INITIAL_OUTPUT_BLUR >= 0.0);
    assert!(["R", "G", "B"].contains(&INITIAL_SELECTORS.0));
    assert!(["R", "G", "B"].contains(&INITIAL_SELECTORS.1));
    assert!(EFFECT_SELECTOR.starts_with('.'));
}
