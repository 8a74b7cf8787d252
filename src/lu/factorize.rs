use crate::dense::matrix::DenseMatrix;
use crate::dense::permutation::Permutation;
use crate::dense::triangular::{MatrixLayout, TriangularMatrix};
use crate::errors::LinAlgError;
use crate::numcomp;
use log::debug;

/// LU decomposition with scaled partial (row) pivoting of a square matrix.
///
/// The result is a combined factor matrix: the strict lower triangle holds
/// the elimination multipliers (the L factor, whose unit diagonal is never
/// stored), the diagonal and upper triangle hold U. The permutation records
/// which original row ended up in each position, so that P*A = L*U.
///
/// The algorithm works column by column. At every pivot position the
/// candidate rows below it are ranked by |row[k]| divided by the largest
/// absolute value in the remaining part of the row (the scale factor), which
/// keeps a row with huge entries from winning the pivot on raw magnitude
/// alone. If any candidate's scale factor falls below the tolerance the
/// whole remaining sub-row is negligible and the matrix is reported singular.
pub struct LUDecomposition {
    mat: DenseMatrix,
    perm: Permutation,
    tol: f64,
}

impl LUDecomposition {
    /// Factorize `mat` (copied, not aliased) with the given tolerance.
    /// Fails with `SingularMatrix` and returns no partial factor if a pivot
    /// step finds a negligible candidate row.
    pub fn new(mat: &DenseMatrix, tol: f64) -> Result<LUDecomposition, LinAlgError> {
        let mut lu = LUDecomposition {
            mat: mat.clone(),
            perm: Permutation::identity(mat.size()),
            tol,
        };
        lu.decompose()?;
        Ok(lu)
    }

    /// Factorize with the default machine-scale tolerance
    pub fn with_default_tol(mat: &DenseMatrix) -> Result<LUDecomposition, LinAlgError> {
        LUDecomposition::new(mat, numcomp::DEFAULT_TOL)
    }

    fn decompose(&mut self) -> Result<(), LinAlgError> {
        let n = self.mat.size();

        // The last index runs the pivot scan too: elimination below it is
        // empty, but a negligible final row must still report singularity.
        for pivot_index in 0..n {
            // Swap rows if necessary, and get the pivot:
            self.scaled_partial_pivoting(pivot_index)?;
            let pivot = self.mat.row(pivot_index)[pivot_index];

            // Update the rows below the pivot row:
            for i in pivot_index + 1..n {
                let (pivot_row, row) = self.mat.pivot_and_row_mut(pivot_index, i);
                let multiplier = row[pivot_index] / pivot;
                // Subtract a multiple of the pivot row from the current row:
                for j in pivot_index + 1..n {
                    row[j] -= multiplier * pivot_row[j];
                }
                row[pivot_index] = multiplier; // multiplier goes to the lower triangle
            }
        }

        debug!("LU factorization finished, perm = {:?}", self.perm.vector());
        Ok(())
    }

    /// Swaps the row at `pivot_index` with the row holding the (relatively)
    /// largest pivot, recording the transposition in the permutation.
    fn scaled_partial_pivoting(&mut self, pivot_index: usize) -> Result<(), LinAlgError> {
        let n = self.mat.size();
        // running maximum starts at zero on the current index, so ties keep
        // the lowest-indexed row
        let mut max_pivot = (0.0_f64, pivot_index);

        for i in pivot_index..n {
            let row = self.mat.row(i);
            // scale factor: largest absolute value in the remaining columns
            let scale = row[pivot_index..]
                .iter()
                .fold(0.0_f64, |max, v| max.max(v.abs()));
            // if the scale factor is negligible the whole remaining row is,
            // so the matrix is singular:
            if numcomp::isnull(scale, self.tol) {
                return Err(LinAlgError::SingularMatrix { tol: self.tol });
            }
            let scaled_pivot = row[pivot_index].abs() / scale;
            if scaled_pivot > max_pivot.0 {
                max_pivot = (scaled_pivot, i);
            }
        }

        self.perm.permute(pivot_index, max_pivot.1);
        self.mat.swap_rows(pivot_index, max_pivot.1); // constant complexity; just swaps row handles
        Ok(())
    }

    /// the combined factor matrix (L below the diagonal, U on and above it)
    pub fn decomp_matrix(&self) -> &DenseMatrix {
        &self.mat
    }

    pub fn perm(&self) -> &Permutation {
        &self.perm
    }

    pub fn tol(&self) -> f64 {
        self.tol
    }

    pub fn size(&self) -> usize {
        self.mat.size()
    }

    /// extract L (unit diagonal filled in) into triangular storage
    pub fn l(&self) -> TriangularMatrix {
        let n = self.mat.size();
        let mut lower = TriangularMatrix::zeros(n, MatrixLayout::Lower);
        for i in 0..n {
            for j in 0..i {
                // indices stay inside the triangle
                let _ = lower.set(i, j, self.mat.row(i)[j]);
            }
            let _ = lower.set(i, i, 1.0);
        }
        lower
    }

    /// extract U into triangular storage
    pub fn u(&self) -> TriangularMatrix {
        let n = self.mat.size();
        let mut upper = TriangularMatrix::zeros(n, MatrixLayout::Upper);
        for i in 0..n {
            for j in i..n {
                let _ = upper.set(i, j, self.mat.row(i)[j]);
            }
        }
        upper
    }

    /// the original matrix with its rows reordered by the permutation
    pub fn permuted(&self, original: &DenseMatrix) -> Result<DenseMatrix, LinAlgError> {
        let n = self.mat.size();
        if original.size() != n {
            return Err(LinAlgError::DimensionMismatch {
                expected: n,
                found: original.size(),
            });
        }
        let mut permuted = DenseMatrix::zeros(n);
        for i in 0..n {
            for j in 0..n {
                permuted.set(i, j, original.get(self.perm.vector()[i], j)?)?;
            }
        }
        Ok(permuted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn mat(rows: Vec<Vec<f64>>) -> DenseMatrix {
        DenseMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_2x2_combined_factors_and_swap() {
        // pivoting prefers row 1: |−1|/1 = 1 beats |2|/5 = 0.4
        let A = mat(vec![vec![2.0, 5.0], vec![-1.0, 1.0]]);
        let lu = LUDecomposition::with_default_tol(&A).unwrap();

        let m = lu.decomp_matrix();
        assert_relative_eq!(m.get(0, 0).unwrap(), -1.0);
        assert_relative_eq!(m.get(0, 1).unwrap(), 1.0);
        assert_relative_eq!(m.get(1, 0).unwrap(), -2.0);
        assert_relative_eq!(m.get(1, 1).unwrap(), 7.0);
        assert_eq!(lu.perm().vector(), &[1, 0]);
        assert!(lu.perm().parity());
    }

    #[test]
    fn test_pa_equals_lu() {
        let A = mat(vec![
            vec![1.0, -1.0, 3.0],
            vec![4.0, 5.0, 2.0],
            vec![3.0, 1.0, 2.0],
        ]);
        let lu = LUDecomposition::with_default_tol(&A).unwrap();

        let reconstructed = lu.l().to_dense().matmul(&lu.u().to_dense()).unwrap();
        let permuted = lu.permuted(&A).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(
                    reconstructed.get(i, j).unwrap(),
                    permuted.get(i, j).unwrap(),
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_matches_nalgebra_lu() {
        // same cross-check the banded solver uses: reconstruction must agree
        // with nalgebra's own partial-pivoting LU up to the determinant
        let A = mat(vec![
            vec![2.0, 1.0, 1.0, 0.0],
            vec![4.0, 3.0, 3.0, 1.0],
            vec![8.0, 7.0, 9.0, 5.0],
            vec![6.0, 7.0, 9.0, 8.0],
        ]);
        let lu = LUDecomposition::with_default_tol(&A).unwrap();
        let det_ours: f64 = (0..4).map(|i| lu.decomp_matrix().get(i, i).unwrap()).product::<f64>()
            * lu.perm().sign();
        let det_nalgebra = A.to_dmatrix().lu().determinant();
        assert_relative_eq!(det_ours, det_nalgebra, epsilon = 1e-9);
    }

    #[test]
    fn test_singular_all_zero() {
        let A = DenseMatrix::zeros(3);
        let res = LUDecomposition::with_default_tol(&A);
        assert!(matches!(res, Err(LinAlgError::SingularMatrix { .. })));
    }

    #[test]
    fn test_singular_1x1_zero() {
        // the final-index scan must catch this one
        let A = DenseMatrix::zeros(1);
        let res = LUDecomposition::with_default_tol(&A);
        assert!(matches!(res, Err(LinAlgError::SingularMatrix { .. })));
    }

    #[test]
    fn test_singular_identical_rows() {
        let A = mat(vec![
            vec![1.0, 2.0, 3.0],
            vec![1.0, 2.0, 3.0],
            vec![0.0, 1.0, 4.0],
        ]);
        let res = LUDecomposition::with_default_tol(&A);
        assert!(matches!(res, Err(LinAlgError::SingularMatrix { tol }) if tol == numcomp::DEFAULT_TOL));
    }

    #[test]
    fn test_near_null_row_is_singular() {
        // every entry of the second row is below the tolerance scale
        let A = mat(vec![vec![1.0, 1.0], vec![0.9e-12, 0.9e-12]]);
        let res = LUDecomposition::with_default_tol(&A);
        assert!(matches!(res, Err(LinAlgError::SingularMatrix { .. })));
    }

    #[test]
    fn test_small_pivot_large_row_is_not_singular() {
        // the pivot entry is tiny but the row scale is large, so the
        // row-scale check must not flag this matrix
        let A = mat(vec![vec![-1e-20, 1.0], vec![2.0, 1.0]]);
        let lu = LUDecomposition::with_default_tol(&A);
        assert!(lu.is_ok());
    }

    #[test]
    fn test_ties_keep_lowest_row() {
        // both rows score 1.0; the first occurrence must win, so no swap
        let A = mat(vec![vec![2.0, 1.0], vec![1.0, 0.5000001]]);
        let lu = LUDecomposition::with_default_tol(&A).unwrap();
        assert_eq!(lu.perm().vector(), &[0, 1]);
        assert!(!lu.perm().parity());
    }
}
