#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
extern crate ark_std;

mod error;
pub mod ops;
pub mod triangular_matrix;

pub use error::MatrixError;
pub use ops::Integral;
pub use triangular_matrix::UpperTriangularMatrix;

/// Largest dimension an [`UpperTriangularMatrix`] may be created with.
pub const MAX_MATRIX_SIZE: usize = 10_000;
