//! Square matrix and constant vector types

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::{fixed, LinsolveError};

/// Square coefficient matrix of a linear system
///
/// Invariant: at least one row, every row has exactly `size()` finite
/// entries. Construction is the only place the invariant is checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
}

/// Constant vector (right-hand side) of a linear system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Vector {
    data: Vec<f64>,
}

impl Matrix {
    /// Create a matrix from rows, validating squareness and finiteness
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, LinsolveError> {
        if rows.is_empty() {
            return Err(LinsolveError::empty_system());
        }

        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(LinsolveError::dimension_mismatch(format!(
                    "row {} has {} columns, expected {} for a square matrix",
                    i, row.len(), n
                )));
            }
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Err(LinsolveError::non_finite(i, j));
            }
        }

        Ok(Self { rows })
    }

    /// n×n identity matrix (n ≥ 1)
    pub fn identity(n: usize) -> Result<Self, LinsolveError> {
        let rows = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
            .collect();
        Self::from_rows(rows)
    }

    /// Number of rows (= number of columns)
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Get element at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Borrow the rows
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Copy of this matrix with column `col` replaced by `column`
    pub fn with_column(&self, col: usize, column: &Vector) -> Result<Self, LinsolveError> {
        if column.len() != self.size() {
            return Err(LinsolveError::dimension_mismatch(format!(
                "column has {} entries, matrix has {} rows",
                column.len(), self.size()
            )));
        }
        if col >= self.size() {
            return Err(LinsolveError::dimension_mismatch(format!(
                "column index {} out of range for {}×{} matrix",
                col, self.size(), self.size()
            )));
        }

        let rows = self.rows.iter()
            .zip(column.as_slice())
            .map(|(row, &b)| {
                let mut row = row.clone();
                row[col] = b;
                row
            })
            .collect();
        Ok(Self { rows })
    }

    /// Matrix-vector product
    pub fn mul_vector(&self, v: &Vector) -> Result<Vector, LinsolveError> {
        check_system(self, v)?;
        let data = self.rows.iter()
            .map(|row| row.iter().zip(v.as_slice()).map(|(a, b)| a * b).sum())
            .collect();
        Vector::new(data)
    }

    /// Matrix-matrix product
    pub fn mul_matrix(&self, other: &Matrix) -> Result<Matrix, LinsolveError> {
        if self.size() != other.size() {
            return Err(LinsolveError::dimension_mismatch(format!(
                "cannot multiply {}×{} by {}×{}",
                self.size(), self.size(), other.size(), other.size()
            )));
        }
        let n = self.size();
        let rows = (0..n)
            .map(|i| (0..n).map(|j| (0..n).map(|k| self.rows[i][k] * other.rows[k][j]).sum()).collect())
            .collect();
        Ok(Matrix { rows })
    }

    /// Largest element-wise difference from `other`; infinite on shape mismatch
    pub fn max_abs_diff(&self, other: &Matrix) -> f64 {
        if self.size() != other.size() {
            return f64::INFINITY;
        }
        self.rows.iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

impl Vector {
    /// Create a vector, rejecting non-finite entries
    pub fn new(data: Vec<f64>) -> Result<Self, LinsolveError> {
        if let Some(i) = data.iter().position(|v| !v.is_finite()) {
            return Err(LinsolveError::non_finite(i, 0));
        }
        Ok(Self { data })
    }

    /// Get length of vector
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }
}

/// Check that `b` has one constant per row of `a`
pub fn check_system(a: &Matrix, b: &Vector) -> Result<(), LinsolveError> {
    if a.size() != b.len() {
        return Err(LinsolveError::dimension_mismatch(format!(
            "matrix is {}×{} but vector has {} entries",
            a.size(), a.size(), b.len()
        )));
    }
    Ok(())
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = LinsolveError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Matrix::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        m.rows
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = LinsolveError;

    fn try_from(data: Vec<f64>) -> Result<Self, Self::Error> {
        Vector::new(data)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Self {
        v.data
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, val) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", fixed(*val, 4))?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, val) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", fixed(*val, 4))?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;

    #[test]
    fn test_matrix_creation() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.size(), 2);
        assert_eq!(m.get(0, 1), Some(2.0));
        assert_eq!(m.get(1, 1), Some(4.0));
        assert_eq!(m.get(2, 2), None);
    }

    #[test]
    fn test_matrix_rejects_bad_shapes() {
        let err = Matrix::from_rows(vec![]).unwrap_err();
        assert_eq!(err.code, codes::EMPTY_SYSTEM);

        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(err.code, codes::DIMENSION_MISMATCH);

        let err = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap_err();
        assert_eq!(err.code, codes::DIMENSION_MISMATCH);

        let err = Matrix::from_rows(vec![vec![1.0, f64::NAN], vec![0.0, 1.0]]).unwrap_err();
        assert_eq!(err.code, codes::NON_FINITE);
    }

    #[test]
    fn test_with_column_leaves_source_untouched() {
        let m = Matrix::from_rows(vec![vec![2.0, 3.0], vec![1.0, -1.0]]).unwrap();
        let b = Vector::new(vec![7.0, 1.0]).unwrap();
        let replaced = m.with_column(1, &b).unwrap();
        assert_eq!(replaced.rows(), &[vec![2.0, 7.0], vec![1.0, 1.0]]);
        assert_eq!(m.rows(), &[vec![2.0, 3.0], vec![1.0, -1.0]]);
    }

    #[test]
    fn test_mul_vector() {
        let m = Matrix::from_rows(vec![vec![2.0, 3.0], vec![1.0, -1.0]]).unwrap();
        let x = Vector::new(vec![2.0, 1.0]).unwrap();
        assert_eq!(m.mul_vector(&x).unwrap().as_slice(), &[7.0, 1.0]);

        let short = Vector::new(vec![1.0]).unwrap();
        assert!(m.mul_vector(&short).is_err());
    }

    #[test]
    fn test_mul_vector_overflow() {
        let m = Matrix::from_rows(vec![vec![1e200, 1e200], vec![1.0, 1.0]]).unwrap();
        let x = Vector::new(vec![1e200, 1e200]).unwrap();
        assert_eq!(m.mul_vector(&x).unwrap_err().code, codes::NON_FINITE);
    }

    #[test]
    fn test_mul_matrix_identity() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let i = Matrix::identity(2).unwrap();
        assert_eq!(m.mul_matrix(&i).unwrap(), m);
        assert_eq!(m.max_abs_diff(&m), 0.0);
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_rows(vec![vec![1.0, -0.5], vec![0.0, 2.0]]).unwrap();
        assert_eq!(m.to_string(), "[[1.0000, -0.5000], [0.0000, 2.0000]]");
        let v = Vector::new(vec![8.0, -11.0]).unwrap();
        assert_eq!(v.to_string(), "[8.0000, -11.0000]");
    }

    #[test]
    fn test_serde_validates() {
        let m: Matrix = serde_json::from_str("[[1.0, 2.0], [3.0, 4.0]]").unwrap();
        assert_eq!(m.size(), 2);
        assert!(serde_json::from_str::<Matrix>("[[1.0, 2.0]]").is_err());
        let v: Vector = serde_json::from_str("[1.0, 2.0]").unwrap();
        assert_eq!(serde_json::to_string(&v).unwrap(), "[1.0,2.0]");
    }
}
