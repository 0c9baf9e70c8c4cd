use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MatrixError {
    /// Construction requested with a negative dimension.
    #[error("Invalid matrix size: {0}")]
    InvalidSize(i128),
    /// Construction requested with a dimension above [`crate::MAX_MATRIX_SIZE`].
    #[error("Matrix size {size} exceeds the maximum of {max}")]
    SizeTooLarge { size: usize, max: usize },
    /// Element access outside the stored upper-triangular region.
    #[error("Index ({row}, {col}) is out of range for a matrix of size {size}")]
    IndexOutOfRange { row: i128, col: i128, size: usize },
    /// Fail due to operations on matrices of unexpected differing sizes.
    #[error("Unexpected different sizes: {0} and {1}")]
    DimensionMismatch(usize, usize),
}
