use crate::dense::matrix::DenseMatrix;
use crate::errors::LinAlgError;
use crate::lu::factorize::LUDecomposition;
use crate::lu::substitution::solve_lu;
use crate::numcomp;
use nalgebra::DVector;

/// i-th standard basis vector of dimension n
pub fn basis_vector(i: usize, n: usize) -> DVector<f64> {
    let mut e = DVector::zeros(n);
    e[i] = 1.0;
    e
}

/// Inverse of the matrix behind an existing factorization. Inverting A is
/// solving A*b = e_i for every column e_i of the unit matrix; all n solves
/// share the one factorization.
pub fn inverse_lu(lu_obj: &LUDecomposition) -> Result<DenseMatrix, LinAlgError> {
    let n = lu_obj.size();
    let mut inv = DenseMatrix::zeros(n);
    for i in 0..n {
        let column = solve_lu(lu_obj, &basis_vector(i, n))?;
        for j in 0..n {
            inv.set(j, i, column[j])?;
        }
    }
    Ok(inv)
}

/// Matrix inverse; fails with `SingularMatrix` when A has none
pub fn inverse(A: &DenseMatrix) -> Result<DenseMatrix, LinAlgError> {
    inverse_lu(&LUDecomposition::new(A, numcomp::DEFAULT_TOL)?)
}
