use super::{Elem, check_dims, mac};

/// Matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple-loop implementation. It's slow because
/// the innermost loop accesses B with stride `n` (column-wise), causing
/// cache misses on every iteration.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, zeroed then filled with A * B
/// * `n` - Side length
pub fn matmul_ijk(a: &[Elem], b: &[Elem], c: &mut [Elem], n: usize) {
    check_dims(a, b, c, n);
    c.fill(0);

    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                c[i * n + j] = mac(c[i * n + j], a[i * n + k], b[k * n + j]);
            }
        }
    }
}

/// i-j-k order with the `k` loop unrolled by two.
///
/// When `n` is odd the last step has no partner, so the second
/// accumulation is guarded by `k + 1 < n`.
pub fn matmul_ijk_unrolled(a: &[Elem], b: &[Elem], c: &mut [Elem], n: usize) {
    check_dims(a, b, c, n);
    c.fill(0);

    for i in 0..n {
        for j in 0..n {
            for k in (0..n).step_by(2) {
                c[i * n + j] = mac(c[i * n + j], a[i * n + k], b[k * n + j]);
                if k + 1 < n {
                    c[i * n + j] = mac(c[i * n + j], a[i * n + k + 1], b[(k + 1) * n + j]);
                }
            }
        }
    }
}
