//! Determinant by cofactor (Laplace) expansion

use linsolve_core::Matrix;

/// Determinant of a square matrix.
///
/// Expands along the first row, recursing on minors. Exponential in n,
/// which is fine for the 2×2 to 4×4 systems this crate targets. Never
/// fails; a singular matrix simply yields zero.
pub fn determinant(m: &Matrix) -> f64 {
    det_rows(m.rows())
}

/// Determinant of a square block of rows. The empty block has determinant 1,
/// which makes the 1×1 inverse fall out of the cofactor formula.
pub(crate) fn det_rows(rows: &[Vec<f64>]) -> f64 {
    match rows.len() {
        0 => 1.0,
        1 => rows[0][0],
        2 => rows[0][0] * rows[1][1] - rows[0][1] * rows[1][0],
        n => (0..n)
            .map(|i| sign(i) * rows[0][i] * det_rows(&minor(rows, 0, i)))
            .sum(),
    }
}

/// Submatrix with `skip_row` and `skip_col` removed
pub(crate) fn minor(rows: &[Vec<f64>], skip_row: usize, skip_col: usize) -> Vec<Vec<f64>> {
    rows.iter()
        .enumerate()
        .filter(|(r, _)| *r != skip_row)
        .map(|(_, row)| {
            row.iter()
                .enumerate()
                .filter(|(c, _)| *c != skip_col)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}

/// (-1)^k
pub(crate) fn sign(k: usize) -> f64 {
    if k % 2 == 0 { 1.0 } else { -1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DMatrix;

    fn m(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_base_cases() {
        assert_eq!(determinant(&m(vec![vec![-7.5]])), -7.5);
        assert_eq!(determinant(&m(vec![vec![2.0, 3.0], vec![1.0, -1.0]])), -5.0);
    }

    #[test]
    fn test_identity() {
        for n in 1..=5 {
            assert_eq!(determinant(&Matrix::identity(n).unwrap()), 1.0);
        }
    }

    #[test]
    fn test_scenario_matrix() {
        let a = m(vec![
            vec![2.0, 1.0, -1.0],
            vec![-3.0, -1.0, 2.0],
            vec![-2.0, 1.0, 2.0],
        ]);
        assert!((determinant(&a) - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_singular_is_zero() {
        assert_eq!(determinant(&m(vec![vec![1.0, 1.0], vec![1.0, 1.0]])), 0.0);
        let a = m(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ]);
        assert!(determinant(&a).abs() < 1e-10);
    }

    #[test]
    fn test_row_scaling_scales_det() {
        let rows = vec![
            vec![1.0, 2.0, -1.0, 3.0],
            vec![2.0, -1.0, 1.0, 1.0],
            vec![1.0, 1.0, 1.0, 1.0],
            vec![3.0, 1.0, 2.0, -1.0],
        ];
        let base = determinant(&m(rows.clone()));
        for row in 0..4 {
            let mut scaled = rows.clone();
            scaled[row].iter_mut().for_each(|v| *v *= 2.5);
            assert!((determinant(&m(scaled)) - 2.5 * base).abs() < 1e-9);
        }
    }

    #[test]
    fn test_row_swap_negates_det() {
        let rows = vec![
            vec![1.0, 2.0, -1.0, 3.0],
            vec![2.0, -1.0, 1.0, 1.0],
            vec![1.0, 1.0, 1.0, 1.0],
            vec![3.0, 1.0, 2.0, -1.0],
        ];
        let base = determinant(&m(rows.clone()));
        let mut swapped = rows.clone();
        swapped.swap(0, 3);
        assert!((determinant(&m(swapped)) + base).abs() < 1e-9);
    }

    #[test]
    fn test_matches_nalgebra() {
        let rows = vec![
            vec![4.0, -2.0, 1.0, 0.5],
            vec![3.0, 6.0, -4.0, 2.0],
            vec![2.0, 1.0, 8.0, -3.0],
            vec![1.0, 0.0, 2.0, 5.0],
        ];
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        let expected = DMatrix::from_row_slice(4, 4, &flat).determinant();
        assert!((determinant(&m(rows)) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_minor() {
        let rows = vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ];
        assert_eq!(minor(&rows, 1, 1), vec![vec![1.0, 3.0], vec![7.0, 9.0]]);
        assert_eq!(minor(&rows, 0, 2), vec![vec![4.0, 5.0], vec![7.0, 8.0]]);
    }
}
