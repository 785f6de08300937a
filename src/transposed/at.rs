//! Multiplication through a transposed copy of A.

use crate::matrix::transpose::transposed_square;
use crate::matrix::{Elem, check_dims, mac};

/// `C = A * B` via `AT[k][i] == A[i][k]`.
///
/// The inner `k` loop walks down a column of `AT`, which is the same
/// strided pattern the untransposed i-j-k loop uses on B; the point of
/// this variant is to measure the transpose itself.
pub fn matmul_at(a: &[Elem], b: &[Elem], c: &mut [Elem], n: usize) {
    check_dims(a, b, c, n);
    c.fill(0);
    let at = transposed_square(a, n);

    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                c[i * n + j] = mac(c[i * n + j], at[k * n + i], b[k * n + j]);
            }
        }
    }
}

/// [`matmul_at`] unrolled over `j`: columns `j` and `j + 1` share each
/// `AT[k][i]` load. The second column is skipped when `j + 1 == n`.
pub fn matmul_at_unrolled(a: &[Elem], b: &[Elem], c: &mut [Elem], n: usize) {
    check_dims(a, b, c, n);
    c.fill(0);
    let at = transposed_square(a, n);

    for i in 0..n {
        for j in (0..n).step_by(2) {
            for k in 0..n {
                let aki = at[k * n + i];
                c[i * n + j] = mac(c[i * n + j], aki, b[k * n + j]);
                if j + 1 < n {
                    c[i * n + j + 1] = mac(c[i * n + j + 1], aki, b[k * n + j + 1]);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::reference::matmul_reference;

    #[test]
    fn matches_reference_for_odd_sizes() {
        for n in [1, 3, 5, 8] {
            let a: Vec<Elem> = (0..n * n).map(|i| (i * 3 % 11) as Elem).collect();
            let b: Vec<Elem> = (0..n * n).map(|i| (i * 7 % 13) as Elem - 6).collect();
            let mut expected = vec![0; n * n];
            matmul_reference(&a, &b, &mut expected, n);

            let mut c = vec![0; n * n];
            matmul_at(&a, &b, &mut c, n);
            assert_eq!(c, expected, "at n={}", n);

            let mut c = vec![0; n * n];
            matmul_at_unrolled(&a, &b, &mut c, n);
            assert_eq!(c, expected, "at unrolled n={}", n);
        }
    }
}
