use super::{Elem, check_dims, mac};

/// Cache-friendly matrix multiplication using i-k-j loop order.
///
/// By swapping the j and k loops, the innermost loop now accesses both
/// B and C sequentially (stride 1). Each `C[i][j]` still receives the
/// same set of products, only in a different interleaving, so the result
/// is identical to the i-j-k order.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, zeroed then filled with A * B
/// * `n` - Side length
pub fn matmul_ikj(a: &[Elem], b: &[Elem], c: &mut [Elem], n: usize) {
    check_dims(a, b, c, n);
    c.fill(0);
    ikj_accumulate(a, b, c, n);
}

/// i-k-j order with the `k` loop unrolled by two.
///
/// Two rows of B are folded into the current row of C per pass; the
/// second is skipped on the trailing step when `n` is odd.
pub fn matmul_ikj_unrolled(a: &[Elem], b: &[Elem], c: &mut [Elem], n: usize) {
    check_dims(a, b, c, n);
    c.fill(0);

    for i in 0..n {
        for k in (0..n).step_by(2) {
            let a0 = a[i * n + k];
            for j in 0..n {
                c[i * n + j] = mac(c[i * n + j], a0, b[k * n + j]);
                if k + 1 < n {
                    c[i * n + j] = mac(c[i * n + j], a[i * n + k + 1], b[(k + 1) * n + j]);
                }
            }
        }
    }
}

/// `C += A * B` in i-k-j order, without clearing C first.
///
/// Shared with the Strassen leaves, which accumulate into scratch buffers.
pub(crate) fn ikj_accumulate(a: &[Elem], b: &[Elem], c: &mut [Elem], n: usize) {
    for i in 0..n {
        for k in 0..n {
            let aik = a[i * n + k];
            for j in 0..n {
                c[i * n + j] = mac(c[i * n + j], aik, b[k * n + j]);
            }
        }
    }
}
