use std::fmt;

/// Error types for the dense linear algebra routines
#[derive(Debug, Clone, PartialEq)]
pub enum LinAlgError {
    /// a pivot candidate's scaled row magnitude fell below the tolerance;
    /// carries the tolerance that was used
    SingularMatrix { tol: f64 },
    /// operand sizes disagree in an arithmetic or solve operation
    DimensionMismatch { expected: usize, found: usize },
    /// subscript outside [0, n)
    IndexOutOfRange { i: usize, j: usize, n: usize },
    /// solution or derived quantity requested from a failed SolveResult
    InvalidState(&'static str),
    InvalidValue(String),
    BadFormat(String),
    IoError(String),
}

impl fmt::Display for LinAlgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinAlgError::SingularMatrix { tol } => {
                write!(f, "singular matrix (tol = {:.2e})", tol)
            }
            LinAlgError::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {}, found {}", expected, found)
            }
            LinAlgError::IndexOutOfRange { i, j, n } => {
                write!(f, "matrix subscript out of range: ({}, {}) for dimension {}", i, j, n)
            }
            LinAlgError::InvalidState(msg) => write!(f, "invalid state: {}", msg),
            LinAlgError::InvalidValue(msg) => write!(f, "invalid value: {}", msg),
            LinAlgError::BadFormat(msg) => write!(f, "bad input format: {}", msg),
            LinAlgError::IoError(msg) => write!(f, "unable to access file: {}", msg),
        }
    }
}

impl std::error::Error for LinAlgError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = LinAlgError::SingularMatrix { tol: 1e-12 };
        assert_eq!(e.to_string(), "singular matrix (tol = 1.00e-12)");
        let e = LinAlgError::DimensionMismatch { expected: 3, found: 2 };
        assert_eq!(e.to_string(), "dimension mismatch: expected 3, found 2");
    }
}
