//! quantities derived from the LU factorization
#![allow(non_snake_case)]
/// matrix determinant through the factorization's diagonal and parity
pub mod determinant;
/// matrix inverse via repeated triangular solves
pub mod inverse;
/// vector and matrix norms, condition number
pub mod norm;
