//! Compatibility adapter around the old flat-array calling convention.
//! Everything here only translates between caller-provided row storage and
//! the core types; the core itself never owns or frees caller memory.
use crate::dense::matrix::DenseMatrix;
use crate::errors::LinAlgError;
use crate::lu::factorize::LUDecomposition;
use crate::lu::solve::solve;
use crate::lu::substitution::{solve_lower, solve_upper};
use nalgebra::DVector;

/// LU-factorize the rows of `a` in place (combined factor matrix written
/// back) and fill `perm` with the permutation vector.
///
/// Returns `1` on success with even parity, `-1` on success with odd
/// parity, `0` on a singular matrix — in which case the row storage is
/// released, as the old convention demands.
pub fn lu_flat(a: &mut Vec<Vec<f64>>, perm: &mut [usize], tol: f64) -> i32 {
    let n = a.len();
    let mat = match DenseMatrix::from_rows(a.clone()) {
        Ok(mat) => mat,
        Err(_) => return 0, // ragged storage cannot be factorized
    };
    match LUDecomposition::new(&mat, tol) {
        Ok(lu_obj) => {
            for i in 0..n {
                a[i].copy_from_slice(lu_obj.decomp_matrix().row(i));
            }
            perm[..n].copy_from_slice(lu_obj.perm().vector());
            if lu_obj.perm().parity() { -1 } else { 1 }
        }
        Err(_) => {
            a.clear(); // old contract: the callee releases the input storage
            0
        }
    }
}

/// Back-substitute over rows already factorized by [lu_flat]: writes the
/// solution of the original system into `x`.
pub fn resol_flat(
    a: &[Vec<f64>],
    x: &mut [f64],
    b: &[f64],
    perm: &[usize],
) -> Result<(), LinAlgError> {
    let mat = DenseMatrix::from_rows(a.to_vec())?;
    let n = mat.size();
    if b.len() != n || x.len() != n || perm.len() != n {
        return Err(LinAlgError::DimensionMismatch {
            expected: n,
            found: b.len().min(x.len()).min(perm.len()),
        });
    }
    let b_ = DVector::from_column_slice(b);
    let y = solve_lower(&mat, &b_, perm);
    let x_ = solve_upper(&mat, &y);
    x.copy_from_slice(x_.as_slice());
    Ok(())
}

/// One-shot flat solve of Ax = b. Returns `1` on success and `0` on a
/// singular matrix (or malformed storage); `x` is only written on success.
pub fn sistema_flat(a: &[Vec<f64>], x: &mut [f64], b: &[f64], tol: f64) -> i32 {
    let mat = match DenseMatrix::from_rows(a.to_vec()) {
        Ok(mat) => mat,
        Err(_) => return 0,
    };
    let b_ = DVector::from_column_slice(b);
    match solve(&mat, &b_, tol) {
        Ok(result) if result.is_success() => match result.solution() {
            Ok(solution) => {
                x.copy_from_slice(solution.as_slice());
                1
            }
            Err(_) => 0,
        },
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numcomp;
    use approx::assert_relative_eq;

    #[test]
    fn test_lu_then_resol() {
        let mut a = vec![vec![1.0, 1.0], vec![0.0, 1.0]];
        let mut perm = [0_usize; 2];
        let code = lu_flat(&mut a, &mut perm, numcomp::DEFAULT_TOL);
        assert_eq!(code, 1); // no swap needed, even parity

        let b = [2.0, 3.0];
        let mut x = [0.0; 2];
        resol_flat(&a, &mut x, &b, &perm).unwrap();
        assert_relative_eq!(x[0], -1.0);
        assert_relative_eq!(x[1], 3.0);
    }

    #[test]
    fn test_lu_flat_odd_parity() {
        let mut a = vec![vec![2.0, 5.0], vec![-1.0, 1.0]];
        let mut perm = [0_usize; 2];
        let code = lu_flat(&mut a, &mut perm, numcomp::DEFAULT_TOL);
        assert_eq!(code, -1);
        assert_eq!(perm, [1, 0]);
        // combined factor matrix written back in place
        assert_relative_eq!(a[0][0], -1.0);
        assert_relative_eq!(a[1][0], -2.0);
        assert_relative_eq!(a[1][1], 7.0);
    }

    #[test]
    fn test_lu_flat_singular_releases_storage() {
        let mut a = vec![vec![0.0, 0.0], vec![0.0, 0.0]];
        let mut perm = [0_usize; 2];
        let code = lu_flat(&mut a, &mut perm, numcomp::DEFAULT_TOL);
        assert_eq!(code, 0);
        assert!(a.is_empty());
    }

    #[test]
    fn test_sistema_flat() {
        let a = vec![vec![3.0, 5.0], vec![-2.0, 1.4]];
        let b = [1.0, 0.0];
        let mut x = [0.0; 2];
        assert_eq!(sistema_flat(&a, &mut x, &b, numcomp::DEFAULT_TOL), 1);
        assert_relative_eq!(x[0], 7.0 / 71.0, epsilon = 1e-14);
        assert_relative_eq!(x[1], 10.0 / 71.0, epsilon = 1e-14);

        let singular = vec![vec![1.0, 1.0], vec![1.0, 1.0]];
        let mut x = [9.0; 2];
        assert_eq!(sistema_flat(&singular, &mut x, &b, numcomp::DEFAULT_TOL), 0);
        // x untouched on failure
        assert_eq!(x, [9.0, 9.0]);
    }
}
