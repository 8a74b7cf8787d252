//! text-format boundary: sparse triple lists in, solution reports out
#![allow(non_snake_case)]
pub mod sparse_text;
