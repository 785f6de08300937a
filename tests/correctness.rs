use matmul_lab::blocked::tiled_ijk::matmul_tiled_ijk;
use matmul_lab::blocked::tiled_ikj::matmul_tiled_ikj;
use matmul_lab::blocked::tiled_transposed::{matmul_tiled_at, matmul_tiled_bt};
use matmul_lab::matrix::naive_ikj::matmul_ikj;
use matmul_lab::matrix::transpose::transpose;
use matmul_lab::transposed::at::matmul_at;
use matmul_lab::transposed::bt::matmul_bt;
use matmul_lab::{Elem, Harness, HarnessError, Matrix, Variant, matmul_reference, verify};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn assert_matrices_equal(expected: &[Elem], actual: &[Elem], name: &str) {
    assert_eq!(expected.len(), actual.len(), "{}: length mismatch", name);
    for i in 0..expected.len() {
        assert_eq!(
            expected[i], actual[i],
            "{}: mismatch at index {}: expected {}, got {}",
            name, i, expected[i], actual[i]
        );
    }
}

fn patterned(n: usize, modulus: usize, offset: Elem) -> Vec<Elem> {
    (0..n * n).map(|i| (i % modulus) as Elem - offset).collect()
}

fn reference(a: &[Elem], b: &[Elem], n: usize) -> Vec<Elem> {
    let mut c = vec![0; n * n];
    matmul_reference(a, b, &mut c, n);
    c
}

// ============================================================
// Concrete scenarios
// ============================================================

#[test]
fn test_2x2_every_variant() {
    let a = vec![1, 2, 3, 4];
    let b = vec![5, 6, 7, 8];
    let expected = vec![19, 22, 43, 50];

    assert_eq!(reference(&a, &b, 2), expected);
    for variant in Variant::ALL {
        for tile in [1, 2, 3] {
            let mut c = vec![0; 4];
            variant.run_slices(&a, &b, &mut c, 2, tile);
            assert_matrices_equal(&expected, &c, &format!("{} tile={}", variant, tile));
        }
    }
}

#[test]
fn test_3x3_odd_size_unrolling() {
    let a = vec![2, -1, 3, 0, 4, 1, -2, 5, 6];
    let b = vec![1, 0, 2, 3, -1, 1, 4, 2, 0];
    // Worked by hand.
    let expected = vec![11, 7, 3, 16, -2, 4, 37, 7, 1];

    assert_eq!(reference(&a, &b, 3), expected);
    for variant in [
        Variant::IjkUnrolled,
        Variant::IkjUnrolled,
        Variant::AtUnrolled,
        Variant::BtUnrolled,
    ] {
        let mut c = vec![0; 9];
        variant.run_slices(&a, &b, &mut c, 3, 1);
        assert_matrices_equal(&expected, &c, variant.label());
    }
}

#[test]
fn test_4x4_tile_3_clipped_edge() {
    let n = 4;
    let a = patterned(n, 9, 4);
    let b = patterned(n, 7, 3);

    let mut untiled = vec![0; n * n];
    matmul_ikj(&a, &b, &mut untiled, n);

    let mut c = vec![0; n * n];
    matmul_tiled_ijk(&a, &b, &mut c, n, 3);
    assert_matrices_equal(&untiled, &c, "tiled_ijk T=3");

    matmul_tiled_ikj(&a, &b, &mut c, n, 3);
    assert_matrices_equal(&untiled, &c, "tiled_ikj T=3");

    matmul_tiled_at(&a, &b, &mut c, n, 3);
    assert_matrices_equal(&untiled, &c, "tiled_at T=3");

    matmul_tiled_bt(&a, &b, &mut c, n, 3);
    assert_matrices_equal(&untiled, &c, "tiled_bt T=3");
}

// ============================================================
// Size sweeps
// ============================================================

#[test]
fn test_small_and_odd_sizes() {
    for n in [1, 2, 3, 5, 7, 8, 11, 16, 17] {
        let a = patterned(n, 10, 5);
        let b = patterned(n, 13, 6);
        let expected = reference(&a, &b, n);

        for variant in Variant::ALL {
            let mut c = vec![0; n * n];
            variant.run_slices(&a, &b, &mut c, n, 4);
            assert_matrices_equal(&expected, &c, &format!("{} n={}", variant, n));
        }
    }
}

#[test]
fn test_every_tile_size_matches_untiled() {
    let n = 9;
    let a = patterned(n, 11, 5);
    let b = patterned(n, 8, 2);

    for tiled in [Variant::TiledIjk, Variant::TiledIkj, Variant::TiledAt, Variant::TiledBt] {
        let base = tiled.untiled().unwrap();
        let mut expected = vec![0; n * n];
        base.run_slices(&a, &b, &mut expected, n, 0);

        for tile in 1..=n {
            let mut c = vec![0; n * n];
            tiled.run_slices(&a, &b, &mut c, n, tile);
            assert_matrices_equal(&expected, &c, &format!("{} tile={}", tiled, tile));
        }
    }
}

#[test]
fn test_unrolled_matches_rolled() {
    for n in [4, 5, 32, 33] {
        let a = patterned(n, 17, 8);
        let b = patterned(n, 19, 9);

        for variant in Variant::ALL.into_iter().filter(|v| v.rolled().is_some()) {
            let mut rolled = vec![0; n * n];
            let mut unrolled = vec![0; n * n];
            variant.rolled().unwrap().run_slices(&a, &b, &mut rolled, n, 0);
            variant.run_slices(&a, &b, &mut unrolled, n, 0);
            assert_matrices_equal(&rolled, &unrolled, &format!("{} n={}", variant, n));
        }
    }
}

#[test]
fn test_overflowing_operands_agree() {
    let n = 33;
    let mut rng = StdRng::seed_from_u64(42);
    let a = Matrix::random(n, &mut rng);
    let b = Matrix::random(n, &mut rng);
    let expected = reference(a.as_slice(), b.as_slice(), n);

    for variant in Variant::ALL {
        let c = variant.multiply(&a, &b, 8);
        assert_matrices_equal(&expected, c.as_slice(), variant.label());
    }
}

// ============================================================
// Transposition
// ============================================================

#[test]
fn test_transpose_property() {
    let n = 6;
    let a = patterned(n, 23, 0);
    let mut at = vec![0; n * n];
    transpose(&a, &mut at, n, n);

    for i in 0..n {
        for j in 0..n {
            assert_eq!(at[j * n + i], a[i * n + j]);
        }
    }

    let m = Matrix::from_vec(n, a);
    assert_eq!(m.transposed().transposed(), m);
}

#[test]
fn test_transposed_variants_leave_inputs_alone() {
    let n = 5;
    let a = patterned(n, 7, 3);
    let b = patterned(n, 6, 2);
    let (a0, b0) = (a.clone(), b.clone());

    let mut c = vec![0; n * n];
    matmul_at(&a, &b, &mut c, n);
    matmul_bt(&a, &b, &mut c, n);
    assert_eq!(a, a0);
    assert_eq!(b, b0);
}

// ============================================================
// Idempotence (C is zeroed on every call)
// ============================================================

#[test]
fn test_repeated_calls_identical() {
    let n = 10;
    let a = patterned(n, 9, 4);
    let b = patterned(n, 5, 2);

    for variant in Variant::ALL {
        let mut c = vec![0; n * n];
        variant.run_slices(&a, &b, &mut c, n, 3);
        let first = c.clone();
        variant.run_slices(&a, &b, &mut c, n, 3);
        assert_matrices_equal(&first, &c, &format!("{} second call", variant));
    }
}

#[test]
fn test_stale_output_is_overwritten() {
    let n = 8;
    let a = patterned(n, 10, 5);
    let b = patterned(n, 10, 5);
    let expected = reference(&a, &b, n);

    for variant in Variant::ALL {
        let mut c = vec![12345; n * n];
        variant.run_slices(&a, &b, &mut c, n, 3);
        assert_matrices_equal(&expected, &c, &format!("{} stale C", variant));
    }
}

// ============================================================
// Harness
// ============================================================

#[test]
fn test_harness_verifies_every_repetition() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = Matrix::random(24, &mut rng);
    let b = Matrix::random(24, &mut rng);
    let mut harness = Harness::new(a, b).unwrap();

    for variant in Variant::ALL {
        let timing = harness.run(variant, 5, 2).unwrap();
        assert_eq!(timing.variant, variant);
        assert_eq!(timing.repetitions, 2);
        assert!(timing.to_string().starts_with(&format!("Avg Time for {} Calculation: ", variant)));
        assert_eq!(harness.output(), harness.reference());
    }
}

#[test]
fn test_verify_reports_first_mismatch() {
    let reference = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]);
    let mut c = reference.clone();
    c[(0, 1)] = 0;
    c[(1, 1)] = 0;

    let err = verify(&c, &reference, Variant::At).unwrap_err();
    assert_eq!(
        err,
        HarnessError::Mismatch {
            variant: "AT".to_string(),
            row: 0,
            col: 1,
            expected: 2,
            actual: 0,
        }
    );
    assert_eq!(err.to_string(), "AT: mismatch at (0, 1): expected 2, got 0");
}

#[test]
fn test_verify_rejects_wrong_size() {
    let err = verify(&Matrix::zeros(2), &Matrix::zeros(3), Variant::Ijk).unwrap_err();
    assert_eq!(err, HarnessError::DimensionMismatch { expected: 3, actual: 2 });
}

#[test]
#[should_panic(expected = "B: expected 2x2=4 elements")]
fn test_wrong_slice_length_panics() {
    let mut c = vec![0; 4];
    Variant::Ikj.run_slices(&[1, 2, 3, 4], &[1, 2, 3], &mut c, 2, 1);
}
