use crate::dense::matrix::DenseMatrix;
use crate::errors::LinAlgError;
use crate::lu::factorize::LUDecomposition;
use crate::numcomp;

/// Determinant from an existing factorization: the product of the combined
/// factor matrix's diagonal, signed by the permutation parity.
pub fn determinant_lu(lu_obj: &LUDecomposition) -> f64 {
    let mat = lu_obj.decomp_matrix();
    let mut prod = 1.0;
    for i in 0..mat.size() {
        prod *= mat.row(i)[i];
    }
    prod * lu_obj.perm().sign()
}

/// Matrix determinant through LU decomposition; a singular matrix has
/// determinant 0.0
pub fn determinant(A: &DenseMatrix) -> f64 {
    match LUDecomposition::new(A, numcomp::DEFAULT_TOL) {
        Ok(lu_obj) => determinant_lu(&lu_obj),
        Err(_) => 0.0,
    }
}
