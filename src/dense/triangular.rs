use crate::dense::matrix::DenseMatrix;
use crate::errors::LinAlgError;

/// Storage layout of a [TriangularMatrix]; each variant has its own flat
/// index function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixLayout {
    General,
    Lower,
    Upper,
}

/// Square matrix over one flat buffer. The `Lower`/`Upper` layouts store
/// only their triangle (diagonal included); reads outside it return 0.0 and
/// writing a non-zero value there is rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangularMatrix {
    n: usize,
    layout: MatrixLayout,
    data: Vec<f64>,
}

impl TriangularMatrix {
    pub fn zeros(n: usize, layout: MatrixLayout) -> TriangularMatrix {
        let len = match layout {
            MatrixLayout::General => n * n,
            // triangle with diagonal
            MatrixLayout::Lower | MatrixLayout::Upper => n * (n + 1) / 2,
        };
        TriangularMatrix {
            n,
            layout,
            data: vec![0.0; len],
        }
    }

    /// Build from full n*n row data; entries outside the stored triangle
    /// must be zero.
    pub fn from_rows(rows: &[Vec<f64>], layout: MatrixLayout) -> Result<TriangularMatrix, LinAlgError> {
        let n = rows.len();
        let mut mat = TriangularMatrix::zeros(n, layout);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(LinAlgError::DimensionMismatch {
                    expected: n,
                    found: row.len(),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                mat.set(i, j, value)?;
            }
        }
        Ok(mat)
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn layout(&self) -> MatrixLayout {
        self.layout
    }

    fn check_bounds(&self, i: usize, j: usize) -> Result<(), LinAlgError> {
        if i >= self.n || j >= self.n {
            return Err(LinAlgError::IndexOutOfRange { i, j, n: self.n });
        }
        Ok(())
    }

    /// flat index of (i, j) if the layout stores that position
    fn index(&self, i: usize, j: usize) -> Option<usize> {
        match self.layout {
            MatrixLayout::General => Some(i * self.n + j),
            MatrixLayout::Lower => {
                if j <= i {
                    Some(i * (i + 1) / 2 + j)
                } else {
                    None
                }
            }
            MatrixLayout::Upper => {
                if j >= i {
                    // row i starts after the i shrinking rows above it
                    Some(i * (2 * self.n - i + 1) / 2 + (j - i))
                } else {
                    None
                }
            }
        }
    }

    pub fn get(&self, i: usize, j: usize) -> Result<f64, LinAlgError> {
        self.check_bounds(i, j)?;
        Ok(match self.index(i, j) {
            Some(idx) => self.data[idx],
            None => 0.0,
        })
    }

    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<(), LinAlgError> {
        self.check_bounds(i, j)?;
        match self.index(i, j) {
            Some(idx) => {
                self.data[idx] = value;
                Ok(())
            }
            None if value == 0.0 => Ok(()),
            None => Err(LinAlgError::InvalidValue(format!(
                "non-zero entry ({}, {}) outside the stored triangle",
                i, j
            ))),
        }
    }

    /// expand into a general dense matrix (for products and comparisons)
    pub fn to_dense(&self) -> DenseMatrix {
        let mut mat = DenseMatrix::zeros(self.n);
        for i in 0..self.n {
            for j in 0..self.n {
                if let Some(idx) = self.index(i, j) {
                    // bounds are valid by construction
                    let _ = mat.set(i, j, self.data[idx]);
                }
            }
        }
        mat
    }
}
