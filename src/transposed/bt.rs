//! Multiplication through a transposed copy of B.

use crate::matrix::transpose::transposed_square;
use crate::matrix::{Elem, check_dims, mac};

/// `C = A * B` via `BT[j][k] == B[k][j]`.
///
/// With B transposed, the inner `k` loop reads row `i` of A and row `j`
/// of BT, both stride 1, so each output cell is a plain dot product.
pub fn matmul_bt(a: &[Elem], b: &[Elem], c: &mut [Elem], n: usize) {
    check_dims(a, b, c, n);
    c.fill(0);
    let bt = transposed_square(b, n);

    for i in 0..n {
        let a_row = &a[i * n..(i + 1) * n];
        for j in 0..n {
            let bt_row = &bt[j * n..(j + 1) * n];
            c[i * n + j] = a_row
                .iter()
                .zip(bt_row)
                .fold(0, |sum, (&x, &y)| mac(sum, x, y));
        }
    }
}

/// [`matmul_bt`] unrolled over `j`: two dot products share each `A[i][k]`
/// load. The second is skipped when `j + 1 == n`.
pub fn matmul_bt_unrolled(a: &[Elem], b: &[Elem], c: &mut [Elem], n: usize) {
    check_dims(a, b, c, n);
    c.fill(0);
    let bt = transposed_square(b, n);

    for i in 0..n {
        for j in (0..n).step_by(2) {
            for k in 0..n {
                let aik = a[i * n + k];
                c[i * n + j] = mac(c[i * n + j], aik, bt[j * n + k]);
                if j + 1 < n {
                    c[i * n + j + 1] = mac(c[i * n + j + 1], aik, bt[(j + 1) * n + k]);
                }
            }
        }
    }
}
