//! LU factorization with scaled partial pivoting and the solves built on it
#![allow(non_snake_case)]
/// the factorization itself: pivot selection, elimination, permutation bookkeeping
pub mod factorize;
/// forward and backward substitution over the combined factor matrix
pub mod substitution;
/// one-shot solve of Ax = b with residual computation
pub mod solve;
