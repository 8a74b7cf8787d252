//! dense square matrix data model
#![allow(non_snake_case)]
/// square matrix with row-handle storage (constant-time row swap)
pub mod matrix;
/// row permutation vector with parity tracking
pub mod permutation;
/// triangular storage variants sharing one flat buffer
pub mod triangular;
