//! Named multiplication strategies and a single dispatch point.

use crate::blocked::tiled_ijk::matmul_tiled_ijk;
use crate::blocked::tiled_ikj::matmul_tiled_ikj;
use crate::blocked::tiled_transposed::{matmul_tiled_at, matmul_tiled_bt};
use crate::matrix::naive_ijk::{matmul_ijk, matmul_ijk_unrolled};
use crate::matrix::naive_ikj::{matmul_ikj, matmul_ikj_unrolled};
use crate::matrix::{Elem, Matrix};
use crate::recursive::strassen::matmul_strassen;
use crate::transposed::at::{matmul_at, matmul_at_unrolled};
use crate::transposed::bt::{matmul_bt, matmul_bt_unrolled};
use clap::ValueEnum;
use std::fmt;

/// Every multiplication strategy the benchmark can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Variant {
    Ijk,
    IjkUnrolled,
    Ikj,
    IkjUnrolled,
    At,
    AtUnrolled,
    Bt,
    BtUnrolled,
    TiledIjk,
    TiledIkj,
    TiledAt,
    TiledBt,
    Strassen,
}

impl Variant {
    /// All variants in benchmark order.
    pub const ALL: [Variant; 13] = [
        Variant::Ijk,
        Variant::IjkUnrolled,
        Variant::Ikj,
        Variant::IkjUnrolled,
        Variant::At,
        Variant::AtUnrolled,
        Variant::Bt,
        Variant::BtUnrolled,
        Variant::TiledIjk,
        Variant::TiledIkj,
        Variant::TiledAt,
        Variant::TiledBt,
        Variant::Strassen,
    ];

    /// Label used in the `Avg Time for <label> Calculation` report line.
    pub fn label(self) -> &'static str {
        match self {
            Variant::Ijk => "matmul",
            Variant::IjkUnrolled => "matmul Unrolling",
            Variant::Ikj => "matmul_IKJ",
            Variant::IkjUnrolled => "matmul_IKJ Unrolling",
            Variant::At => "AT",
            Variant::AtUnrolled => "AT Unrolling",
            Variant::Bt => "BT",
            Variant::BtUnrolled => "BT Unrolling",
            Variant::TiledIjk => "matmul tiling",
            Variant::TiledIkj => "matmul_IKJ tiling",
            Variant::TiledAt => "AT tiling",
            Variant::TiledBt => "BT tiling",
            Variant::Strassen => "Strassen",
        }
    }

    pub fn is_tiled(self) -> bool {
        matches!(
            self,
            Variant::TiledIjk | Variant::TiledIkj | Variant::TiledAt | Variant::TiledBt
        )
    }

    /// Untiled variant with the same loop order, for tiled variants.
    pub fn untiled(self) -> Option<Variant> {
        match self {
            Variant::TiledIjk => Some(Variant::Ijk),
            Variant::TiledIkj => Some(Variant::Ikj),
            Variant::TiledAt => Some(Variant::At),
            Variant::TiledBt => Some(Variant::Bt),
            _ => None,
        }
    }

    /// Rolled counterpart, for unrolled variants.
    pub fn rolled(self) -> Option<Variant> {
        match self {
            Variant::IjkUnrolled => Some(Variant::Ijk),
            Variant::IkjUnrolled => Some(Variant::Ikj),
            Variant::AtUnrolled => Some(Variant::At),
            Variant::BtUnrolled => Some(Variant::Bt),
            _ => None,
        }
    }

    /// Zeroes `c` and fills it with `a * b` using this strategy.
    ///
    /// `tile` is only read by tiled variants.
    ///
    /// # Panics
    ///
    /// Panics if the slices are not `n × n`, or if a tiled variant gets
    /// `tile == 0`.
    pub fn run_slices(self, a: &[Elem], b: &[Elem], c: &mut [Elem], n: usize, tile: usize) {
        match self {
            Variant::Ijk => matmul_ijk(a, b, c, n),
            Variant::IjkUnrolled => matmul_ijk_unrolled(a, b, c, n),
            Variant::Ikj => matmul_ikj(a, b, c, n),
            Variant::IkjUnrolled => matmul_ikj_unrolled(a, b, c, n),
            Variant::At => matmul_at(a, b, c, n),
            Variant::AtUnrolled => matmul_at_unrolled(a, b, c, n),
            Variant::Bt => matmul_bt(a, b, c, n),
            Variant::BtUnrolled => matmul_bt_unrolled(a, b, c, n),
            Variant::TiledIjk => matmul_tiled_ijk(a, b, c, n, tile),
            Variant::TiledIkj => matmul_tiled_ikj(a, b, c, n, tile),
            Variant::TiledAt => matmul_tiled_at(a, b, c, n, tile),
            Variant::TiledBt => matmul_tiled_bt(a, b, c, n, tile),
            Variant::Strassen => matmul_strassen(a, b, c, n),
        }
    }

    /// [`run_slices`](Self::run_slices) on owned matrices.
    pub fn run(self, a: &Matrix, b: &Matrix, c: &mut Matrix, tile: usize) {
        let n = a.size();
        self.run_slices(a.as_slice(), b.as_slice(), c.as_mut_slice(), n, tile);
    }

    /// Allocates a fresh output and returns `a * b`.
    pub fn multiply(self, a: &Matrix, b: &Matrix, tile: usize) -> Matrix {
        let mut c = Matrix::zeros(a.size());
        self.run(a, b, &mut c, tile);
        c
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
