use super::{Elem, Matrix, check_dims, mac};

/// Reference multiplication: the canonical i-j-k triple loop.
///
/// Every other variant is checked against this element for element, so
/// it stays deliberately plain. Each output cell starts at zero and
/// accumulates `A[i][k] * B[k][j]` for `k` in order.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Output (n × n), row-major, overwritten
/// * `n` - Side length
pub fn matmul_reference(a: &[Elem], b: &[Elem], c: &mut [Elem], n: usize) {
    check_dims(a, b, c, n);

    for i in 0..n {
        for j in 0..n {
            let mut sum: Elem = 0;
            for k in 0..n {
                sum = mac(sum, a[i * n + k], b[k * n + j]);
            }
            c[i * n + j] = sum;
        }
    }
}

/// Owned-matrix convenience wrapper around [`matmul_reference`].
pub fn reference_product(a: &Matrix, b: &Matrix) -> Matrix {
    assert_eq!(a.size(), b.size(), "operand sizes differ");
    let n = a.size();
    let mut c = Matrix::zeros(n);
    matmul_reference(a.as_slice(), b.as_slice(), c.as_mut_slice(), n);
    c
}
