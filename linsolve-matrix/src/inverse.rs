//! Matrix inverse via the adjugate

use linsolve_core::{Matrix, LinsolveError};
use crate::determinant::{det_rows, minor, sign};
use crate::guard::require_invertible;

/// Inverse of a square matrix: transpose of the cofactor matrix divided by
/// the determinant.
///
/// Fails with `SINGULAR_MATRIX` when |det| is below the singularity
/// tolerance or the determinant overflowed.
pub fn inverse(m: &Matrix) -> Result<Matrix, LinsolveError> {
    let rows = m.rows();
    let det = det_rows(rows);
    require_invertible(det, LinsolveError::singular_matrix())?;

    let cof = cofactors(rows);
    let n = rows.len();
    let inv: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| cof[j][i] / det).collect())
        .collect();

    Matrix::from_rows(inv)
}

/// C[i][j] = (-1)^(i+j) * det(minor(i, j))
fn cofactors(rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n = rows.len();
    (0..n)
        .map(|i| (0..n).map(|j| sign(i + j) * det_rows(&minor(rows, i, j))).collect())
        .collect()
}
