use crate::errors::LinAlgError;
use itertools::Itertools;
use nalgebra::{DMatrix, DVector};
use std::fmt;

/// Representation of a square n*n matrix.
///
/// Each row is its own heap allocation, so swapping two rows during pivoting
/// exchanges the row handles and never copies elements.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    n: usize,
    rows: Vec<Vec<f64>>,
}

impl DenseMatrix {
    /// Create an n*n matrix filled with zeros
    pub fn zeros(n: usize) -> DenseMatrix {
        DenseMatrix {
            n,
            rows: vec![vec![0.0; n]; n],
        }
    }

    /// Build a matrix from a nested literal. Every row must have exactly
    /// `rows.len()` entries, otherwise the init data is badly shaped.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<DenseMatrix, LinAlgError> {
        let n = rows.len();
        for row in &rows {
            if row.len() != n {
                return Err(LinAlgError::DimensionMismatch {
                    expected: n,
                    found: row.len(),
                });
            }
        }
        Ok(DenseMatrix { n, rows })
    }

    pub fn identity(n: usize) -> DenseMatrix {
        let mut id = DenseMatrix::zeros(n);
        for i in 0..n {
            id.rows[i][i] = 1.0;
        }
        id
    }

    pub fn size(&self) -> usize {
        self.n
    }

    fn check_bounds(&self, i: usize, j: usize) -> Result<(), LinAlgError> {
        if i >= self.n || j >= self.n {
            return Err(LinAlgError::IndexOutOfRange { i, j, n: self.n });
        }
        Ok(())
    }

    pub fn get(&self, i: usize, j: usize) -> Result<f64, LinAlgError> {
        self.check_bounds(i, j)?;
        Ok(self.rows[i][j])
    }

    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<(), LinAlgError> {
        self.check_bounds(i, j)?;
        self.rows[i][j] = value;
        Ok(())
    }

    /// row slice without bounds checking; for the factorization hot loops
    pub(crate) fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    /// Swap two rows. Constant complexity; just swaps the row handles.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }

    /// Simultaneous access to the pivot row and a row below it.
    /// `pivot < i` must hold.
    pub(crate) fn pivot_and_row_mut(&mut self, pivot: usize, i: usize) -> (&[f64], &mut [f64]) {
        let (head, tail) = self.rows.split_at_mut(i);
        (&head[pivot], &mut tail[0])
    }

    pub fn add(&self, other: &DenseMatrix) -> Result<DenseMatrix, LinAlgError> {
        self.elementwise(other, |a, b| a + b)
    }

    pub fn sub(&self, other: &DenseMatrix) -> Result<DenseMatrix, LinAlgError> {
        self.elementwise(other, |a, b| a - b)
    }

    fn elementwise(
        &self,
        other: &DenseMatrix,
        op: impl Fn(f64, f64) -> f64,
    ) -> Result<DenseMatrix, LinAlgError> {
        if other.n != self.n {
            return Err(LinAlgError::DimensionMismatch {
                expected: self.n,
                found: other.n,
            });
        }
        let mut res = DenseMatrix::zeros(self.n);
        for i in 0..self.n {
            for j in 0..self.n {
                res.rows[i][j] = op(self.rows[i][j], other.rows[i][j]);
            }
        }
        Ok(res)
    }

    /// matrix * vector product
    pub fn matvec(&self, v: &DVector<f64>) -> Result<DVector<f64>, LinAlgError> {
        if v.len() != self.n {
            return Err(LinAlgError::DimensionMismatch {
                expected: self.n,
                found: v.len(),
            });
        }
        let mut res = DVector::zeros(self.n);
        for i in 0..self.n {
            let row = &self.rows[i];
            let mut sum = 0.0;
            for j in 0..self.n {
                sum += row[j] * v[j];
            }
            res[i] = sum;
        }
        Ok(res)
    }

    /// matrix * matrix product
    pub fn matmul(&self, other: &DenseMatrix) -> Result<DenseMatrix, LinAlgError> {
        if other.n != self.n {
            return Err(LinAlgError::DimensionMismatch {
                expected: self.n,
                found: other.n,
            });
        }
        let mut res = DenseMatrix::zeros(self.n);
        for i in 0..self.n {
            for k in 0..self.n {
                let a_ik = self.rows[i][k];
                if a_ik == 0.0 {
                    continue;
                }
                for j in 0..self.n {
                    res.rows[i][j] += a_ik * other.rows[k][j];
                }
            }
        }
        Ok(res)
    }

    pub fn to_dmatrix(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.n, self.n, |i, j| self.rows[i][j])
    }

    pub fn from_dmatrix(mat: &DMatrix<f64>) -> Result<DenseMatrix, LinAlgError> {
        let (nrows, ncols) = mat.shape();
        if nrows != ncols {
            return Err(LinAlgError::DimensionMismatch {
                expected: nrows,
                found: ncols,
            });
        }
        let rows = (0..nrows)
            .map(|i| (0..ncols).map(|j| mat[(i, j)]).collect())
            .collect();
        Ok(DenseMatrix { n: nrows, rows })
    }
}

impl fmt::Display for DenseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "[{}]", row.iter().map(|v| format!("{:>12.6}", v)).join(" "))?;
        }
        Ok(())
    }
}
