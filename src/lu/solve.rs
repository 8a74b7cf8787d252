use crate::dense::matrix::DenseMatrix;
use crate::errors::LinAlgError;
use crate::extras::norm::{NormType, vector_norm};
use crate::lu::factorize::LUDecomposition;
use crate::lu::substitution::solve_lu;
use crate::numcomp;
use log::{debug, warn};
use nalgebra::DVector;

/// Outcome of solving a linear system Ax = b.
///
/// On success it owns the factorization, the solution vector and the
/// relative residual. On failure (singular matrix) it only carries the
/// tolerance that was attempted; asking for the solution or the
/// factorization then fails with `InvalidState` instead of handing out a
/// default vector.
pub struct SolveResult {
    success: bool,
    lu: Option<LUDecomposition>,
    solution: Option<DVector<f64>>,
    residual: f64,
    tol: f64,
}

impl SolveResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn solution(&self) -> Result<&DVector<f64>, LinAlgError> {
        self.solution
            .as_ref()
            .ok_or(LinAlgError::InvalidState("solution requested from a failed solve"))
    }

    pub fn lu(&self) -> Result<&LUDecomposition, LinAlgError> {
        self.lu
            .as_ref()
            .ok_or(LinAlgError::InvalidState("factorization requested from a failed solve"))
    }

    /// relative residual ||Ax - b||_inf / ||x||_inf (0.0 on failure)
    pub fn residual(&self) -> f64 {
        self.residual
    }

    /// the tolerance the factorization was attempted with
    pub fn tol(&self) -> f64 {
        self.tol
    }
}

/// Solve the linear system Ax = b through LU factorization with scaled
/// partial pivoting. A singular matrix yields a failed `SolveResult`
/// carrying the attempted tolerance; a mismatched right-hand side is an
/// error of the call itself and propagates as `DimensionMismatch`.
pub fn solve(A: &DenseMatrix, b: &DVector<f64>, tol: f64) -> Result<SolveResult, LinAlgError> {
    match LUDecomposition::new(A, tol) {
        Ok(lu_obj) => {
            let x = solve_lu(&lu_obj, b)?;
            let res = residual(A, &x, b)?;
            debug!("solved {}x{} system, residual = {:.2e}", A.size(), A.size(), res);
            Ok(SolveResult {
                success: true,
                lu: Some(lu_obj),
                solution: Some(x),
                residual: res,
                tol,
            })
        }
        Err(LinAlgError::SingularMatrix { tol }) => {
            warn!("matrix is singular (tol = {:.2e})", tol);
            Ok(SolveResult {
                success: false,
                lu: None,
                solution: None,
                residual: 0.0,
                tol,
            })
        }
        Err(e) => Err(e),
    }
}

/// `solve` with the default tolerance
pub fn solve_default(A: &DenseMatrix, b: &DVector<f64>) -> Result<SolveResult, LinAlgError> {
    solve(A, b, numcomp::DEFAULT_TOL)
}

/// Relative residual ||Ax - b||_inf / ||x||_inf of an approximate solution.
/// When x is the zero vector the absolute residual is returned instead.
pub fn residual(A: &DenseMatrix, x: &DVector<f64>, b: &DVector<f64>) -> Result<f64, LinAlgError> {
    if b.len() != A.size() {
        return Err(LinAlgError::DimensionMismatch {
            expected: A.size(),
            found: b.len(),
        });
    }
    let diff = A.matvec(x)? - b;
    let num = vector_norm(&diff, NormType::Inf);
    let den = vector_norm(x, NormType::Inf);
    if den == 0.0 { Ok(num) } else { Ok(num / den) }
}
