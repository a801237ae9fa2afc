//! Cramer's rule

use linsolve_core::{
    Matrix, Vector, Solution, TraceEvent, MethodKind, LinsolveError,
    check_system,
};
use crate::determinant;
use crate::guard::{finite_solution, require_invertible};

/// Solve Ax = b with x_i = det(A_i) / det(A), where A_i is A with column i
/// replaced by b
pub fn solve_by_cramer(a: &Matrix, b: &Vector) -> Result<Solution, LinsolveError> {
    check_system(a, b)?;

    let mut trace = vec![TraceEvent::Title { method: MethodKind::Cramer }];

    let main_det = determinant(a);
    trace.push(TraceEvent::DeterminantComputed { method: MethodKind::Cramer, value: main_det });
    require_invertible(main_det, LinsolveError::singular_system_det())?;

    let mut variables = Vec::with_capacity(a.size());
    for i in 0..a.size() {
        let det_i = determinant(&a.with_column(i, b)?);
        let value = det_i / main_det;
        variables.push(value);
        trace.push(TraceEvent::CramerRatio {
            variable: i,
            numerator: det_i,
            denominator: main_det,
            value,
        });
    }

    Ok(Solution {
        variables: finite_solution(variables)?,
        trace,
        determinant: Some(main_det),
        method: MethodKind::Cramer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use linsolve_core::{codes, Narrator, Language};

    fn system(rows: Vec<Vec<f64>>, b: Vec<f64>) -> (Matrix, Vector) {
        (Matrix::from_rows(rows).unwrap(), Vector::new(b).unwrap())
    }

    #[test]
    fn test_2x2_steps() {
        // 2x + 3y = 7, x - y = 1
        let (a, b) = system(vec![vec![2.0, 3.0], vec![1.0, -1.0]], vec![7.0, 1.0]);
        let s = solve_by_cramer(&a, &b).unwrap();
        assert_eq!(s.variables, vec![2.0, 1.0]);
        assert_eq!(s.determinant, Some(-5.0));
        assert_eq!(
            s.steps(&Narrator::default()),
            vec![
                "Cramer's Rule",
                "Det(A) = -5.0000",
                "x1 = Det(A1)/Det(A) = -10.0000/-5.0000 = 2.0000",
                "x2 = Det(A2)/Det(A) = -5.0000/-5.0000 = 1.0000",
            ]
        );
    }

    #[test]
    fn test_3x3() {
        let (a, b) = system(
            vec![vec![2.0, 1.0, -1.0], vec![-3.0, -1.0, 2.0], vec![-2.0, 1.0, 2.0]],
            vec![8.0, -11.0, -3.0],
        );
        let s = solve_by_cramer(&a, &b).unwrap();
        for (got, want) in s.variables.iter().zip([2.0, 3.0, -1.0]) {
            assert!((got - want).abs() < 1e-9);
        }
        let ratios = s.trace.iter()
            .filter(|e| matches!(e, TraceEvent::CramerRatio { .. }))
            .count();
        assert_eq!(ratios, 3);
    }

    #[test]
    fn test_spanish_heading() {
        let (a, b) = system(vec![vec![1.0, 0.0], vec![0.0, 1.0]], vec![5.0, 6.0]);
        let s = solve_by_cramer(&a, &b).unwrap();
        let steps = s.steps(&Narrator::new(Language::Spanish));
        assert_eq!(steps[0], "Método de Cramer");
        assert_eq!(steps[1], "Determinante principal = 1.0000");
        assert_eq!(steps[2], "x1 = Det(A1) / Det(A) = 5.0000 / 1.0000 = 5.0000");
    }

    #[test]
    fn test_singular() {
        let (a, b) = system(vec![vec![1.0, 1.0], vec![1.0, 1.0]], vec![2.0, 2.0]);
        let err = solve_by_cramer(&a, &b).unwrap_err();
        assert_eq!(err.code, codes::SINGULAR_SYSTEM);
    }

    #[test]
    fn test_singular_with_overflowing_determinant() {
        let (a, b) = system(vec![vec![1e200, 1e200], vec![1e200, 1e200]], vec![1.0, 1.0]);
        let err = solve_by_cramer(&a, &b).unwrap_err();
        assert_eq!(err.code, codes::SINGULAR_SYSTEM);
        assert!(err.is_unsolvable());
    }

    #[test]
    fn test_overflowing_ratio() {
        // det(A) = 1e200 is fine, det(A2) = 1e200 * 1e200 is not
        let (a, b) = system(vec![vec![1e200, 0.0], vec![0.0, 1.0]], vec![1e200, 1e200]);
        let err = solve_by_cramer(&a, &b).unwrap_err();
        assert_eq!(err.code, codes::NON_FINITE);
    }
}
