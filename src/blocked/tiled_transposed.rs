//! Tiled multiplication through a transposed operand.
//!
//! Index formulas follow the untiled AT/BT variants: `AT[k][i]` stands in
//! for `A[i][k]` and `BT[j][k]` for `B[k][j]`. Tiles and cells are both
//! visited in i-j-k order.

use super::{tile_range, tile_starts};
use crate::matrix::transpose::transposed_square;
use crate::matrix::{Elem, check_dims, mac};

/// Blocked counterpart of [`matmul_at`](crate::transposed::at::matmul_at).
///
/// # Panics
///
/// Panics if `tile == 0` or any slice is not `n × n`.
pub fn matmul_tiled_at(a: &[Elem], b: &[Elem], c: &mut [Elem], n: usize, tile: usize) {
    check_dims(a, b, c, n);
    c.fill(0);
    let at = transposed_square(a, n);

    for ii in tile_starts(n, tile) {
        for jj in tile_starts(n, tile) {
            for kk in tile_starts(n, tile) {
                for i in tile_range(ii, tile, n) {
                    for j in tile_range(jj, tile, n) {
                        let mut sum = c[i * n + j];
                        for k in tile_range(kk, tile, n) {
                            sum = mac(sum, at[k * n + i], b[k * n + j]);
                        }
                        c[i * n + j] = sum;
                    }
                }
            }
        }
    }
}

/// Blocked counterpart of [`matmul_bt`](crate::transposed::bt::matmul_bt).
///
/// # Panics
///
/// Panics if `tile == 0` or any slice is not `n × n`.
pub fn matmul_tiled_bt(a: &[Elem], b: &[Elem], c: &mut [Elem], n: usize, tile: usize) {
    check_dims(a, b, c, n);
    c.fill(0);
    let bt = transposed_square(b, n);

    for ii in tile_starts(n, tile) {
        for jj in tile_starts(n, tile) {
            for kk in tile_starts(n, tile) {
                let depth = tile_range(kk, tile, n);
                for i in tile_range(ii, tile, n) {
                    let a_seg = &a[i * n + depth.start..i * n + depth.end];
                    for j in tile_range(jj, tile, n) {
                        let bt_seg = &bt[j * n + depth.start..j * n + depth.end];
                        c[i * n + j] = a_seg
                            .iter()
                            .zip(bt_seg)
                            .fold(c[i * n + j], |sum, (&x, &y)| mac(sum, x, y));
                    }
                }
            }
        }
    }
}
