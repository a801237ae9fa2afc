//! Linsolve Matrix - Square linear system solvers
//!
//! Provides the linear algebra behind Linsolve:
//! - Determinant by cofactor expansion
//! - Matrix inverse via the adjugate
//! - Inverse-matrix method (x = A⁻¹·b)
//! - Cramer's rule
//! - Gauss-Jordan elimination with partial pivoting
//! - Residual verification
//!
//! Every solver returns a `Solution` carrying a structured trace of the
//! derivation and fails fast on singular input.

mod determinant;
mod inverse;
mod inverse_method;
mod cramer;
mod gauss_jordan;
mod verify;
mod methods;
mod guard;

pub use determinant::determinant;
pub use inverse::inverse;
pub use inverse_method::solve_by_inverse;
pub use cramer::solve_by_cramer;
pub use gauss_jordan::solve_by_gauss_jordan;
pub use verify::{verify, to_dmatrix, Verification, VERIFY_TOLERANCE};
pub use methods::{InverseFn, CramerFn, GaussJordanFn};

use linsolve_plugin::MethodRegistry;

/// Load the solving methods into registry
pub fn load_solver_library(registry: MethodRegistry) -> MethodRegistry {
    registry
        .with_method(InverseFn)
        .with_method(CramerFn)
        .with_method(GaussJordanFn)
}

/// Registry with every built-in method
pub fn standard_registry() -> MethodRegistry {
    load_solver_library(MethodRegistry::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use linsolve_core::{codes, Matrix, Vector, MethodKind};

    fn system(rows: Vec<Vec<f64>>, b: Vec<f64>) -> (Matrix, Vector) {
        (Matrix::from_rows(rows).unwrap(), Vector::new(b).unwrap())
    }

    fn fixtures() -> Vec<(Matrix, Vector)> {
        vec![
            system(vec![vec![2.0, 3.0], vec![1.0, -1.0]], vec![7.0, 1.0]),
            system(
                vec![vec![2.0, 1.0, -1.0], vec![-3.0, -1.0, 2.0], vec![-2.0, 1.0, 2.0]],
                vec![8.0, -11.0, -3.0],
            ),
            system(
                vec![
                    vec![1.0, 2.0, -1.0, 3.0],
                    vec![2.0, -1.0, 1.0, 1.0],
                    vec![1.0, 1.0, 1.0, 1.0],
                    vec![3.0, 1.0, 2.0, -1.0],
                ],
                vec![6.0, 5.0, 4.0, 8.0],
            ),
            system(
                vec![vec![0.0, 1.0, 1.0], vec![1.0, 0.0, 1.0], vec![1.0, 1.0, 0.0]],
                vec![5.0, 4.0, 3.0],
            ),
            system(vec![vec![-4.0]], vec![2.0]),
        ]
    }

    #[test]
    fn test_load_solver_library() {
        let registry = standard_registry();
        assert!(registry.get_method("inverse").is_some());
        assert!(registry.get_method("cramer").is_some());
        assert!(registry.get_method("gauss-jordan").is_some());
        assert!(registry.get_method("Gauss_Jordan").is_some());
        assert!(registry.get_method("gauss").is_some());
        assert_eq!(registry.method_names(), vec!["cramer", "gauss-jordan", "inverse"]);
    }

    #[test]
    fn test_methods_agree() {
        let registry = standard_registry();
        for (a, b) in fixtures() {
            let results: Vec<Vec<f64>> = MethodKind::ALL.iter()
                .map(|kind| registry.solve(kind.id(), &a, &b).unwrap().variables)
                .collect();
            for other in &results[1..] {
                for (x, y) in results[0].iter().zip(other) {
                    assert!((x - y).abs() < 1e-6, "{:?}", results);
                }
            }
            assert!(verify(&a, &b, &results[0]).unwrap().passes_default());
        }
    }

    #[test]
    fn test_methods_report_their_kind() {
        let registry = standard_registry();
        let (a, b) = fixtures().remove(0);
        for kind in MethodKind::ALL {
            let s = registry.solve(kind.id(), &a, &b).unwrap();
            assert_eq!(s.method, kind);
            assert_eq!(s.determinant.is_some(), kind != MethodKind::GaussJordan);
        }
    }

    #[test]
    fn test_singular_fails_everywhere() {
        let registry = standard_registry();
        let (a, b) = system(vec![vec![1.0, 1.0], vec![1.0, 1.0]], vec![2.0, 2.0]);
        for kind in MethodKind::ALL {
            let err = registry.solve(kind.id(), &a, &b).unwrap_err();
            assert_eq!(err.code, codes::SINGULAR_SYSTEM);
            assert!(err.is_unsolvable());
            assert_eq!(err.context.unwrap().method.as_deref(), Some(kind.id()));
        }
    }

    #[test]
    fn test_singular_3x3_fails_everywhere() {
        let registry = standard_registry();
        let (a, b) = system(
            vec![vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 6.0], vec![1.0, 0.0, 1.0]],
            vec![1.0, 2.0, 3.0],
        );
        for kind in MethodKind::ALL {
            assert!(registry.solve(kind.id(), &a, &b).is_err());
        }
    }

    #[test]
    fn test_overflowing_singular_fails_everywhere() {
        // Finite entries whose determinant overflows to NaN
        let registry = standard_registry();
        let (a, b) = system(vec![vec![1e200, 1e200], vec![1e200, 1e200]], vec![1.0, 1.0]);
        for kind in MethodKind::ALL {
            let err = registry.solve(kind.id(), &a, &b).unwrap_err();
            assert_eq!(err.code, codes::SINGULAR_SYSTEM, "{}", kind);
        }
    }

    #[test]
    fn test_scenario_determinant() {
        let (a, _) = fixtures().remove(1);
        assert!((determinant(&a) + 1.0).abs() < 1e-12);
    }
}
