//! Tiled i-j-k multiplication.

use super::{tile_range, tile_starts};
use crate::matrix::{Elem, check_dims, mac};

/// Blocked counterpart of [`matmul_ijk`](crate::matrix::naive_ijk::matmul_ijk).
///
/// Tiles are visited in i-j-k order and cells within a tile triple in
/// i-j-k order, accumulating `A[i][k] * B[k][j]` into `C[i][j]`.
///
/// # Panics
///
/// Panics if `tile == 0` or any slice is not `n × n`.
pub fn matmul_tiled_ijk(a: &[Elem], b: &[Elem], c: &mut [Elem], n: usize, tile: usize) {
    check_dims(a, b, c, n);
    c.fill(0);

    for ii in tile_starts(n, tile) {
        for jj in tile_starts(n, tile) {
            for kk in tile_starts(n, tile) {
                for i in tile_range(ii, tile, n) {
                    for j in tile_range(jj, tile, n) {
                        let mut sum = c[i * n + j];
                        for k in tile_range(kk, tile, n) {
                            sum = mac(sum, a[i * n + k], b[k * n + j]);
                        }
                        c[i * n + j] = sum;
                    }
                }
            }
        }
    }
}
