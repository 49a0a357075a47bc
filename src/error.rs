//! Error type for coordinate-wise operations.

use thiserror::Error;

/// Errors raised by the strict (`try_*`) operations.
///
/// Construction never fails; the only way to get one of these is to combine
/// two operands whose axis counts differ.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GeometryError {
    /// Operands have a different number of axes.
    #[error("dimension mismatch: left operand has {left} axes, right operand has {right}")]
    DimensionMismatch {
        /// Axis count of the left-hand operand
        left: usize,
        /// Axis count of the right-hand operand
        right: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeometryError>;
