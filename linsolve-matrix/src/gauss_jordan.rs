//! Gauss-Jordan elimination with partial pivoting
//!
//! Works on a private augmented copy `[A | b]`. Each pivot column is
//! processed in three moves (pick pivot, normalize, clear the column above
//! and below) and every structural change is followed by a snapshot of the
//! whole augmented matrix in the trace.

use linsolve_core::{
    Matrix, Vector, Solution, TraceEvent, MethodKind, LinsolveError,
    check_system, is_degenerate, SINGULARITY_TOLERANCE,
};
use crate::guard::finite_solution;

/// Solve Ax = b by reducing `[A | b]` to reduced row-echelon form
pub fn solve_by_gauss_jordan(a: &Matrix, b: &Vector) -> Result<Solution, LinsolveError> {
    check_system(a, b)?;

    let mut elim = Elimination::new(a, b);
    for col in 0..elim.n {
        elim.pivot(col)?;
    }

    let variables = elim.rows.iter().map(|row| row[elim.n]).collect();
    Ok(Solution {
        variables: finite_solution(variables)?,
        trace: elim.trace,
        determinant: None,
        method: MethodKind::GaussJordan,
    })
}

struct Elimination {
    n: usize,
    rows: Vec<Vec<f64>>,
    trace: Vec<TraceEvent>,
}

impl Elimination {
    fn new(a: &Matrix, b: &Vector) -> Self {
        let rows: Vec<Vec<f64>> = a.rows().iter()
            .zip(b.as_slice())
            .map(|(row, &rhs)| {
                let mut row = row.clone();
                row.push(rhs);
                row
            })
            .collect();

        let mut elim = Self {
            n: a.size(),
            rows,
            trace: vec![
                TraceEvent::Title { method: MethodKind::GaussJordan },
                TraceEvent::AugmentedMatrixHeader,
            ],
        };
        elim.snapshot();
        elim
    }

    fn snapshot(&mut self) {
        self.trace.push(TraceEvent::MatrixSnapshot { rows: self.rows.clone() });
    }

    /// One forward step on column `col`
    fn pivot(&mut self, col: usize) -> Result<(), LinsolveError> {
        // Stable scan: only a strictly larger magnitude replaces the candidate
        let mut max_row = col;
        for k in (col + 1)..self.n {
            if self.rows[k][col].abs() > self.rows[max_row][col].abs() {
                max_row = k;
            }
        }

        if max_row != col {
            self.rows.swap(col, max_row);
            self.trace.push(TraceEvent::RowSwapped { first: col, second: max_row });
            self.snapshot();
        }

        let pivot = self.rows[col][col];
        if is_degenerate(pivot) {
            return Err(LinsolveError::singular_system().at_pivot(col));
        }

        for v in self.rows[col].iter_mut() {
            *v /= pivot;
        }
        self.trace.push(TraceEvent::RowScaled { row: col, divisor: pivot });
        self.snapshot();

        // Rows above the pivot are cleared too, on every pass
        for k in 0..self.n {
            if k == col || self.rows[k][col].abs() <= SINGULARITY_TOLERANCE {
                continue;
            }
            let factor = self.rows[k][col];
            let pivot_row = self.rows[col].clone();
            for (v, p) in self.rows[k].iter_mut().zip(&pivot_row) {
                *v -= factor * p;
            }
            self.trace.push(TraceEvent::RowEliminated { target: k, pivot_row: col, factor });
            self.snapshot();
        }

        Ok(())
    }
}
