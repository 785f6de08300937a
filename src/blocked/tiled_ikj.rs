//! Tiled i-k-j multiplication.

use super::{tile_range, tile_starts};
use crate::matrix::{Elem, check_dims, mac};

/// Blocked counterpart of [`matmul_ikj`](crate::matrix::naive_ikj::matmul_ikj).
///
/// Tiles are visited in i-k-j order; inside a tile triple the innermost
/// loop streams a row segment of B into a row segment of C.
///
/// # Panics
///
/// Panics if `tile == 0` or any slice is not `n × n`.
pub fn matmul_tiled_ikj(a: &[Elem], b: &[Elem], c: &mut [Elem], n: usize, tile: usize) {
    check_dims(a, b, c, n);
    c.fill(0);

    for ii in tile_starts(n, tile) {
        for kk in tile_starts(n, tile) {
            for jj in tile_starts(n, tile) {
                let cols = tile_range(jj, tile, n);
                for i in tile_range(ii, tile, n) {
                    for k in tile_range(kk, tile, n) {
                        let aik = a[i * n + k];
                        let b_row = &b[k * n + cols.start..k * n + cols.end];
                        let c_row = &mut c[i * n + cols.start..i * n + cols.end];
                        for (cij, &bkj) in c_row.iter_mut().zip(b_row) {
                            *cij = mac(*cij, aik, bkj);
                        }
                    }
                }
            }
        }
    }
}
