//! Condensed/square distance-matrix conversion.
//!
//! A symmetric zero-diagonal `k`×`k` distance matrix carries all of its
//! information in the strict upper triangle, which can be stored as a flat
//! vector of length `k * (k - 1) / 2` in row-major order. The conversion in
//! both directions lets callers store pairwise distances compactly while
//! still performing O(1) lookups by index pair.
//!
//! Round-trip law: `square_form(&condensed_form(&m)?)? == m` for every
//! valid symmetric zero-diagonal matrix `m`.

use crate::error::ShapeError;

/// Length of the condensed form of a `k`×`k` distance matrix.
#[inline]
pub fn condensed_len(k: usize) -> usize {
    k * k.saturating_sub(1) / 2
}

/// Index into a condensed distance vector for the pair `(i, j)` of a
/// `k`×`k` matrix.
///
/// # Panics
///
/// Panics unless `i < j < k`; only the strict upper triangle is stored.
#[inline]
pub fn condensed_index(i: usize, j: usize, k: usize) -> usize {
    assert!(i < j && j < k, "condensed index requires i < j < k, got ({i}, {j}) for k = {k}");
    i * k - i * (i + 1) / 2 + (j - i - 1)
}

/// Expand a condensed pairwise distance vector into the full symmetric
/// matrix with zero diagonal.
///
/// The dimension `k` is inferred from the vector length; lengths that are
/// not `k * (k - 1) / 2` for any `k` are rejected. An empty vector maps to
/// the 1×1 zero matrix (a single item has no pairs).
pub fn square_form(condensed: &[f64]) -> Result<Vec<Vec<f64>>, ShapeError> {
    let k = infer_dimension(condensed.len())?;
    let mut matrix = vec![vec![0.0; k]; k];
    let mut idx = 0;
    for i in 0..k {
        for j in (i + 1)..k {
            matrix[i][j] = condensed[idx];
            matrix[j][i] = condensed[idx];
            idx += 1;
        }
    }
    Ok(matrix)
}

/// Collapse a symmetric zero-diagonal matrix into condensed form.
///
/// Inverse of [`square_form`]. The input must be square, symmetric, and
/// zero on the diagonal; anything else is a [`ShapeError`].
pub fn condensed_form(square: &[Vec<f64>]) -> Result<Vec<f64>, ShapeError> {
    let k = square.len();
    for (i, row) in square.iter().enumerate() {
        if row.len() != k {
            return Err(ShapeError::NotSquare {
                rows: k,
                row: i,
                cols: row.len(),
            });
        }
    }
    for i in 0..k {
        if square[i][i] != 0.0 {
            return Err(ShapeError::NonzeroDiagonal {
                index: i,
                value: square[i][i],
            });
        }
        for j in (i + 1)..k {
            if square[i][j] != square[j][i] {
                return Err(ShapeError::Asymmetric {
                    row: i,
                    col: j,
                    upper: square[i][j],
                    lower: square[j][i],
                });
            }
        }
    }

    let mut condensed = Vec::with_capacity(condensed_len(k));
    for i in 0..k {
        for j in (i + 1)..k {
            condensed.push(square[i][j]);
        }
    }
    Ok(condensed)
}

/// Solve `k * (k - 1) / 2 == len` for `k`.
fn infer_dimension(len: usize) -> Result<usize, ShapeError> {
    if len == 0 {
        return Ok(1);
    }
    // Float solve of the quadratic, then verify exactly to absorb rounding.
    let estimate = (1.0 + (1.0 + 8.0 * len as f64).sqrt()) / 2.0;
    let estimate = estimate as usize;
    for k in estimate.saturating_sub(1)..=estimate + 1 {
        if condensed_len(k) == len {
            return Ok(k);
        }
    }
    Err(ShapeError::InvalidCondensedLength { len })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_matrix() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 0.5, 0.9, 0.2],
            vec![0.5, 0.0, 0.4, 0.7],
            vec![0.9, 0.4, 0.0, 0.3],
            vec![0.2, 0.7, 0.3, 0.0],
        ]
    }

    #[test]
    fn round_trip() {
        let m = sample_matrix();
        let condensed = condensed_form(&m).unwrap();
        assert_eq!(condensed, vec![0.5, 0.9, 0.2, 0.4, 0.7, 0.3]);
        assert_eq!(square_form(&condensed).unwrap(), m);
    }

    #[test]
    fn empty_condensed_is_single_item() {
        assert_eq!(square_form(&[]).unwrap(), vec![vec![0.0]]);
        assert_eq!(condensed_form(&[vec![0.0]]).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn invalid_condensed_length() {
        // 2, 4, 5 are not k(k-1)/2 for any k.
        for len in [2usize, 4, 5, 7, 8, 9] {
            let v = vec![0.0; len];
            assert_eq!(
                square_form(&v),
                Err(ShapeError::InvalidCondensedLength { len })
            );
        }
    }

    #[test]
    fn rejects_non_square() {
        let m = vec![vec![0.0, 1.0], vec![1.0, 0.0, 2.0]];
        assert!(matches!(
            condensed_form(&m),
            Err(ShapeError::NotSquare { row: 1, .. })
        ));
    }

    #[test]
    fn rejects_asymmetric_and_nonzero_diagonal() {
        let m = vec![vec![0.0, 1.0], vec![2.0, 0.0]];
        assert!(matches!(
            condensed_form(&m),
            Err(ShapeError::Asymmetric { row: 0, col: 1, .. })
        ));

        let m = vec![vec![0.1, 1.0], vec![1.0, 0.0]];
        assert!(matches!(
            condensed_form(&m),
            Err(ShapeError::NonzeroDiagonal { index: 0, .. })
        ));
    }

    #[test]
    #[should_panic(expected = "i < j < k")]
    fn condensed_index_rejects_lower_triangle() {
        condensed_index(2, 1, 4);
    }

    #[test]
    fn condensed_index_matches_layout() {
        let m = sample_matrix();
        let condensed = condensed_form(&m).unwrap();
        let k = m.len();
        for i in 0..k {
            for j in (i + 1)..k {
                assert_eq!(condensed[condensed_index(i, j, k)], m[i][j]);
            }
        }
    }
}
