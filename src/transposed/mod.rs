//! Variants that materialize a transposed operand before multiplying.
//!
//! The transpose costs O(n²) and is rebuilt on every call; nothing is
//! cached between invocations.
//!
//! Available implementations:
//! - `at`: builds `AT`, reads `AT[k][i]` in the inner loop
//! - `bt`: builds `BT`, reads both `A[i][*]` and `BT[j][*]` contiguously
//!
//! The unrolled counterparts unroll over `j`, producing two adjacent
//! output columns per pass.

pub mod at;
pub mod bt;
