//! Strassen multiplication.
//!
//! Splits each operand into quadrants and replaces the eight quadrant
//! products of the schoolbook algorithm with seven:
//!
//! ```text
//! S1 = (A12 - A22)(B21 + B22)    C11 = S1 + S2 - S4 + S6
//! S2 = (A11 + A22)(B11 + B22)    C12 = S4 + S5
//! S3 = (A11 - A21)(B11 + B12)    C21 = S6 + S7
//! S4 = (A11 + A12) B22           C22 = S2 - S3 + S5 - S7
//! S5 = A11 (B12 - B22)
//! S6 = A22 (B21 - B11)
//! S7 = (A21 + A22) B11
//! ```
//!
//! These identities hold in any commutative ring, including `i32` with
//! wrapping arithmetic, so the output equals the reference exactly.

use crate::matrix::naive_ikj::ikj_accumulate;
use crate::matrix::{Elem, check_dims};

/// Below this side length the recursion hands off to the i-k-j kernel.
pub const STRASSEN_CUTOFF: usize = 64;

/// `C = A * B` using Strassen's recursion.
///
/// Operands whose size is not a power of two are zero-padded to the
/// next one; padding rows and columns contribute nothing to the result.
pub fn matmul_strassen(a: &[Elem], b: &[Elem], c: &mut [Elem], n: usize) {
    check_dims(a, b, c, n);
    if n == 0 {
        return;
    }

    let padded = n.next_power_of_two();
    if padded == n {
        let product = strassen(a, b, n);
        c.copy_from_slice(&product);
        return;
    }

    let a_pad = pad(a, n, padded);
    let b_pad = pad(b, n, padded);
    let product = strassen(&a_pad, &b_pad, padded);
    for i in 0..n {
        c[i * n..(i + 1) * n].copy_from_slice(&product[i * padded..i * padded + n]);
    }
}

/// Element-wise `a + b` with wrapping.
pub fn add(a: &[Elem], b: &[Elem]) -> Vec<Elem> {
    a.iter().zip(b).map(|(&x, &y)| x.wrapping_add(y)).collect()
}

/// Element-wise `a - b` with wrapping.
pub fn sub(a: &[Elem], b: &[Elem]) -> Vec<Elem> {
    a.iter().zip(b).map(|(&x, &y)| x.wrapping_sub(y)).collect()
}

// n is a power of two here
fn strassen(a: &[Elem], b: &[Elem], n: usize) -> Vec<Elem> {
    if n <= STRASSEN_CUTOFF {
        let mut c = vec![0; n * n];
        ikj_accumulate(a, b, &mut c, n);
        return c;
    }

    let h = n / 2;
    let [a11, a12, a21, a22] = split(a, n);
    let [b11, b12, b21, b22] = split(b, n);

    let s1 = strassen(&sub(&a12, &a22), &add(&b21, &b22), h);
    let s2 = strassen(&add(&a11, &a22), &add(&b11, &b22), h);
    let s3 = strassen(&sub(&a11, &a21), &add(&b11, &b12), h);
    let s4 = strassen(&add(&a11, &a12), &b22, h);
    let s5 = strassen(&a11, &sub(&b12, &b22), h);
    let s6 = strassen(&a22, &sub(&b21, &b11), h);
    let s7 = strassen(&add(&a21, &a22), &b11, h);

    let mut c = vec![0; n * n];
    for i in 0..h {
        for j in 0..h {
            let q = i * h + j;
            c[i * n + j] = s1[q]
                .wrapping_add(s2[q])
                .wrapping_sub(s4[q])
                .wrapping_add(s6[q]);
            c[i * n + j + h] = s4[q].wrapping_add(s5[q]);
            c[(i + h) * n + j] = s6[q].wrapping_add(s7[q]);
            c[(i + h) * n + j + h] = s2[q]
                .wrapping_sub(s3[q])
                .wrapping_add(s5[q])
                .wrapping_sub(s7[q]);
        }
    }
    c
}

// Quadrants in order [11, 12, 21, 22], each (n/2 × n/2).
fn split(m: &[Elem], n: usize) -> [Vec<Elem>; 4] {
    let h = n / 2;
    let quadrant = |row0: usize, col0: usize| {
        let mut q = Vec::with_capacity(h * h);
        for i in row0..row0 + h {
            q.extend_from_slice(&m[i * n + col0..i * n + col0 + h]);
        }
        q
    };
    [quadrant(0, 0), quadrant(0, h), quadrant(h, 0), quadrant(h, h)]
}

fn pad(m: &[Elem], n: usize, padded: usize) -> Vec<Elem> {
    let mut out = vec![0; padded * padded];
    for i in 0..n {
        out[i * padded..i * padded + n].copy_from_slice(&m[i * n..(i + 1) * n]);
    }
    out
}
