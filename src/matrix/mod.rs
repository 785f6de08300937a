//! Square integer matrices and the untiled multiplication kernels.
//!
//! Everything here is row-major: element `(i, j)` of an `n × n` matrix
//! lives at `i * n + j`. The reference multiplier and the plain loop-order
//! variants live in submodules and work on raw slices, the same shape the
//! tiled and transposed kernels use.

pub mod naive_ijk;
pub mod naive_ikj;
pub mod reference;
pub mod transpose;

use rand::Rng;
use std::ops::{Index, IndexMut};

/// Matrix element type.
///
/// Accumulation wraps on overflow. Operands drawn from the full positive
/// `i32` range overflow almost immediately, so results are only meaningful
/// modulo 2^32; every variant still agrees exactly with the reference.
pub type Elem = i32;

/// Multiply-accumulate: `acc + x * y` with two's-complement wrapping.
#[inline(always)]
pub fn mac(acc: Elem, x: Elem, y: Elem) -> Elem {
    acc.wrapping_add(x.wrapping_mul(y))
}

/// Owned, row-major `n × n` matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    n: usize,
    data: Vec<Elem>,
}

impl Matrix {
    /// All-zero matrix of size `n × n`.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0; n * n],
        }
    }

    /// Wraps an existing row-major buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != n * n`.
    pub fn from_vec(n: usize, data: Vec<Elem>) -> Self {
        assert_eq!(
            data.len(),
            n * n,
            "expected {}x{}={} elements",
            n,
            n,
            n * n
        );
        Self { n, data }
    }

    /// Builds a matrix from nested rows, e.g. `&[vec![1, 2], vec![3, 4]]`.
    ///
    /// # Panics
    ///
    /// Panics if any row length differs from the number of rows.
    pub fn from_rows(rows: &[Vec<Elem>]) -> Self {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), n, "row {} has {} columns, expected {}", i, row.len(), n);
            data.extend_from_slice(row);
        }
        Self { n, data }
    }

    /// Random matrix with entries in `0..=i32::MAX`, the range of C's `rand()`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let data = (0..n * n).map(|_| rng.gen_range(0..=Elem::MAX)).collect();
        Self { n, data }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> Elem {
        self.data[i * self.n + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: Elem) {
        self.data[i * self.n + j] = value;
    }

    pub fn as_slice(&self) -> &[Elem] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [Elem] {
        &mut self.data
    }

    /// Owned transposed copy: `result[j][i] == self[i][j]`.
    pub fn transposed(&self) -> Self {
        let mut data = vec![0; self.n * self.n];
        transpose::transpose(&self.data, &mut data, self.n, self.n);
        Self { n: self.n, data }
    }

    /// Row-major position and values of the first differing element, if any.
    ///
    /// Returns `(row, col, self_value, other_value)`.
    ///
    /// # Panics
    ///
    /// Panics if the two matrices have different sizes.
    pub fn first_mismatch(&self, other: &Matrix) -> Option<(usize, usize, Elem, Elem)> {
        assert_eq!(self.n, other.n, "size mismatch");
        self.data
            .iter()
            .zip(&other.data)
            .position(|(x, y)| x != y)
            .map(|idx| (idx / self.n, idx % self.n, self.data[idx], other.data[idx]))
    }

    /// Nested-row copy, handy for assertions and printing.
    pub fn to_rows(&self) -> Vec<Vec<Elem>> {
        self.data.chunks(self.n.max(1)).map(|r| r.to_vec()).collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Elem;

    fn index(&self, (i, j): (usize, usize)) -> &Elem {
        &self.data[i * self.n + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Elem {
        &mut self.data[i * self.n + j]
    }
}

/// Checks that `a`, `b` and `c` are all `n × n`.
#[inline]
pub(crate) fn check_dims(a: &[Elem], b: &[Elem], c: &[Elem], n: usize) {
    assert_eq!(a.len(), n * n, "A: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(b.len(), n * n, "B: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(c.len(), n * n, "C: expected {}x{}={} elements", n, n, n * n);
}
