// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
pub mod Utils;
/// dense matrix data model: square matrices with O(1) row swap, triangular
/// storage variants and the permutation vector used by the pivoting
pub mod dense;
pub mod errors;
/// quantities derived from the LU factorization: norms, condition number,
/// inverse and determinant
pub mod extras;
/// plain-text sparse-triple input/output boundary
pub mod io;
/// compatibility adapter around the old flat-array calling convention
pub mod legacy;
/// LU factorization with scaled partial pivoting and the triangular solves
pub mod lu;
pub mod numcomp;
