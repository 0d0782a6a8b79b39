//! Shape errors for distance-matrix conversion.

use thiserror::Error;

/// Errors raised by condensed/square distance-matrix conversion.
///
/// These only occur for malformed inputs; conversion of any valid symmetric
/// zero-diagonal matrix (or any condensed vector produced from one) cannot
/// fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// A row's length differs from the number of rows.
    #[error("matrix is not square: {rows} rows but row {row} has {cols} columns")]
    NotSquare {
        /// Number of rows in the matrix
        rows: usize,
        /// Index of the offending row
        row: usize,
        /// Length of the offending row
        cols: usize,
    },

    /// The condensed vector's length is not `k * (k - 1) / 2` for any `k`.
    #[error("condensed length {len} does not correspond to any square matrix")]
    InvalidCondensedLength {
        /// Length of the condensed vector
        len: usize,
    },

    /// The matrix is not symmetric.
    #[error("matrix is asymmetric at ({row}, {col}): {upper} != {lower}")]
    Asymmetric {
        /// Row of the mismatched pair
        row: usize,
        /// Column of the mismatched pair
        col: usize,
        /// Upper-triangle value
        upper: f64,
        /// Lower-triangle value
        lower: f64,
    },

    /// The matrix has a nonzero diagonal entry.
    #[error("matrix diagonal must be zero, found {value} at index {index}")]
    NonzeroDiagonal {
        /// Index of the offending diagonal entry
        index: usize,
        /// The nonzero value
        value: f64,
    },
}
