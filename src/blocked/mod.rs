//! Cache-blocked (tiled) multiplication.
//!
//! Each variant splits the `i`, `j` and `k` ranges into tiles of `tile`
//! elements. The three outer loops walk tile boundaries and the three
//! inner loops walk the cells of one tile triple, in the same order as
//! the untiled variant they mirror. The last tile in every dimension is
//! clipped to `n`, so `tile` need not divide `n`.
//!
//! Tiling only reorders additions into the same accumulator cell, so for
//! every `tile` in `1..=n` (and beyond) the output is bit-identical to
//! the untiled loop order.
//!
//! Available implementations:
//! - `tiled_ijk`: i-j-k across and within tiles
//! - `tiled_ikj`: i-k-j across and within tiles
//! - `tiled_transposed`: AT and BT variants, i-j-k across and within tiles

pub mod tiled_ijk;
pub mod tiled_ikj;
pub mod tiled_transposed;

use std::iter::StepBy;
use std::ops::Range;

/// Default tile edge used by the benchmark driver.
pub const DEFAULT_TILE: usize = 32;

/// Start index of every tile along one dimension.
///
/// # Panics
///
/// Panics if `tile == 0`.
#[inline]
pub fn tile_starts(n: usize, tile: usize) -> StepBy<Range<usize>> {
    assert!(tile > 0, "tile size must be positive");
    (0..n).step_by(tile)
}

/// Cells covered by the tile starting at `start`, clipped to `n`.
#[inline]
pub fn tile_range(start: usize, tile: usize, n: usize) -> Range<usize> {
    start..(start + tile).min(n)
}

/// Number of tiles along one dimension, counting a clipped last tile.
pub fn tile_count(n: usize, tile: usize) -> usize {
    assert!(tile > 0, "tile size must be positive");
    n.div_ceil(tile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_cover_dimension_exactly_once() {
        for n in [1, 4, 7, 32, 33] {
            for tile in [1, 3, 8, 32, 100] {
                let covered: Vec<usize> = tile_starts(n, tile)
                    .flat_map(|s| tile_range(s, tile, n))
                    .collect();
                assert_eq!(covered, (0..n).collect::<Vec<_>>(), "n={} tile={}", n, tile);
                assert_eq!(tile_starts(n, tile).count(), tile_count(n, tile));
            }
        }
    }

    #[test]
    fn last_tile_is_clipped() {
        let starts: Vec<usize> = tile_starts(4, 3).collect();
        assert_eq!(starts, vec![0, 3]);
        assert_eq!(tile_range(3, 3, 4), 3..4);
    }

    #[test]
    #[should_panic(expected = "tile size must be positive")]
    fn zero_tile_panics() {
        let _ = tile_starts(4, 0);
    }
}
