use crate::dense::matrix::DenseMatrix;
use crate::errors::LinAlgError;
use crate::extras::inverse::inverse_lu;
use crate::lu::factorize::LUDecomposition;
use crate::numcomp;
use nalgebra::DVector;

/// Norm selector, dispatched by exhaustive match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormType {
    L1,
    L2,
    Inf,
}

pub fn vector_norm(vec: &DVector<f64>, nt: NormType) -> f64 {
    match nt {
        NormType::L1 => vec.iter().map(|v| v.abs()).sum(),
        NormType::L2 => vec.iter().map(|v| v * v).sum::<f64>().sqrt(),
        NormType::Inf => vec.iter().fold(0.0_f64, |max, v| max.max(v.abs())),
    }
}

/// Matrix norm: L1 is the maximum column absolute sum, Inf the maximum row
/// absolute sum. There is no general matrix L2 norm here; requesting it is
/// an invalid value.
pub fn matrix_norm(A: &DenseMatrix, nt: NormType) -> Result<f64, LinAlgError> {
    let n = A.size();
    match nt {
        NormType::L1 => {
            let mut col_sums = vec![0.0_f64; n];
            for i in 0..n {
                let row = A.row(i);
                for (j, sum) in col_sums.iter_mut().enumerate() {
                    *sum += row[j].abs();
                }
            }
            Ok(col_sums.into_iter().fold(0.0_f64, f64::max))
        }
        NormType::Inf => {
            let mut max_sum = 0.0_f64;
            for i in 0..n {
                max_sum = max_sum.max(A.row(i).iter().map(|v| v.abs()).sum());
            }
            Ok(max_sum)
        }
        NormType::L2 => Err(LinAlgError::InvalidValue(
            "unknown matrix norm: L2".to_string(),
        )),
    }
}

/// Condition number norm(A) * norm(A^-1) of a matrix given its inverse
pub fn condition_number_with_inverse(
    A: &DenseMatrix,
    AInv: &DenseMatrix,
    nt: NormType,
) -> Result<f64, LinAlgError> {
    Ok(matrix_norm(A, nt)? * matrix_norm(AInv, nt)?)
}

/// Condition number of a matrix given its LU factorization
pub fn condition_number_lu(
    A: &DenseMatrix,
    lu_obj: &LUDecomposition,
    nt: NormType,
) -> Result<f64, LinAlgError> {
    condition_number_with_inverse(A, &inverse_lu(lu_obj)?, nt)
}

/// Condition number of a matrix. Factorizes once; fails with
/// `SingularMatrix` when the matrix has no inverse.
pub fn condition_number(A: &DenseMatrix, nt: NormType) -> Result<f64, LinAlgError> {
    condition_number_lu(A, &LUDecomposition::new(A, numcomp::DEFAULT_TOL)?, nt)
}
