use crate::dense::matrix::DenseMatrix;
use crate::errors::LinAlgError;
use crate::lu::factorize::LUDecomposition;
use nalgebra::DVector;

/// Forward substitution: solves L*y = P*b over the combined factor matrix,
/// reading the permuted right-hand side through the permutation vector.
/// L's diagonal is implicitly 1 and never read.
pub fn solve_lower(lu: &DenseMatrix, b: &DVector<f64>, perm: &[usize]) -> DVector<f64> {
    let n = lu.size();
    let mut y = DVector::zeros(n);
    for i in 0..n {
        let row = lu.row(i);
        let mut elem = b[perm[i]];
        for j in 0..i {
            elem -= row[j] * y[j];
        }
        y[i] = elem;
    }
    y
}

/// Backward substitution: solves U*x = y over the combined factor matrix
pub fn solve_upper(lu: &DenseMatrix, y: &DVector<f64>) -> DVector<f64> {
    let n = lu.size();
    let mut x = DVector::zeros(n);
    for i in (0..n).rev() {
        let row = lu.row(i);
        let mut elem = y[i];
        for j in i + 1..n {
            elem -= row[j] * x[j];
        }
        x[i] = elem / row[i];
    }
    x
}

/// Solve Ax = b given the LU factorization of A: forward then backward
/// substitution. Fails with `DimensionMismatch` if the right-hand side's
/// length differs from the factorization's dimension.
pub fn solve_lu(lu_obj: &LUDecomposition, b: &DVector<f64>) -> Result<DVector<f64>, LinAlgError> {
    let n = lu_obj.size();
    if b.len() != n {
        return Err(LinAlgError::DimensionMismatch {
            expected: n,
            found: b.len(),
        });
    }

    let decomp = lu_obj.decomp_matrix();
    let y = solve_lower(decomp, b, lu_obj.perm().vector());
    Ok(solve_upper(decomp, &y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn mat(rows: Vec<Vec<f64>>) -> DenseMatrix {
        DenseMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_identity() {
        let lu = LUDecomposition::with_default_tol(&DenseMatrix::identity(2)).unwrap();
        let x = solve_lu(&lu, &DVector::from_vec(vec![3.14, 2.78])).unwrap();
        assert_eq!(x, DVector::from_vec(vec![3.14, 2.78]));
        let x = solve_lu(&lu, &DVector::from_vec(vec![0.0, 0.0])).unwrap();
        assert_eq!(x, DVector::zeros(2));
    }

    #[test]
    fn test_upper_triangular_system() {
        let lu = LUDecomposition::with_default_tol(&mat(vec![vec![1.0, 1.0], vec![0.0, 1.0]]))
            .unwrap();
        let x = solve_lu(&lu, &DVector::from_vec(vec![2.0, 3.0])).unwrap();
        assert_relative_eq!(x[0], -1.0);
        assert_relative_eq!(x[1], 3.0);
    }

    #[test]
    fn test_permuted_system() {
        // zero pivot forces a row swap before substitution
        let lu = LUDecomposition::with_default_tol(&mat(vec![vec![0.0, 1.0], vec![1.0, 1.0]]))
            .unwrap();
        let x = solve_lu(&lu, &DVector::from_vec(vec![2.0, 3.0])).unwrap();
        assert_relative_eq!(x[0], 1.0);
        assert_relative_eq!(x[1], 2.0);
    }

    #[test]
    fn test_exact_fractions() {
        let lu = LUDecomposition::with_default_tol(&mat(vec![vec![3.0, 5.0], vec![-2.0, 1.4]]))
            .unwrap();
        let x = solve_lu(&lu, &DVector::from_vec(vec![1.0, 0.0])).unwrap();
        assert_relative_eq!(x[0], 7.0 / 71.0, epsilon = 1e-14);
        assert_relative_eq!(x[1], 10.0 / 71.0, epsilon = 1e-14);
    }

    #[test]
    fn test_rhs_length_mismatch() {
        let lu = LUDecomposition::with_default_tol(&DenseMatrix::identity(3)).unwrap();
        let res = solve_lu(&lu, &DVector::from_vec(vec![1.0, 2.0]));
        assert!(matches!(
            res,
            Err(LinAlgError::DimensionMismatch { expected: 3, found: 2 })
        ));
    }
}
