use thiserror::Error;

use crate::signal::interp::InterpError;
use crate::traits::ElementKind;

/// Errors reported by array operations.
///
/// Every variant is raised before the operation writes anything, so a failed
/// call leaves its receiver untouched.
///
/// ```
/// use labmath::{ArrayError, RealArray};
///
/// let mut a = RealArray::from_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// let err = a.set_shape(4, 4).unwrap_err();
/// assert_eq!(err, ArrayError::CapacityExceeded { requested: 16, capacity: 6 });
/// assert_eq!(a.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ArrayError {
    /// Operand dimensions disagree.
    #[error("shape mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .got.0, .got.1)]
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// Element or index counts disagree.
    #[error("length mismatch: expected {expected} elements, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// Operands hold different element kinds.
    #[error("type mismatch: expected {expected} array, found {found}")]
    TypeMismatch {
        expected: ElementKind,
        found: ElementKind,
    },

    /// An index or range end lies beyond the array extent.
    #[error("index {index} out of range for extent {extent}")]
    OutOfRange { index: usize, extent: usize },

    /// A reshape would need more elements than the buffer holds.
    #[error("reshape to {requested} elements exceeds allocated capacity of {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },

    /// The numeric problem has no well-defined answer for these arguments.
    #[error("ill-posed: {0}")]
    IllPosed(&'static str),

    /// Interpolant construction failed.
    #[error(transparent)]
    Interp(#[from] InterpError),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, ArrayError>;

/// Check that `index` lies inside `0..extent`.
#[inline]
pub(crate) fn check_index(index: usize, extent: usize) -> Result<()> {
    if index < extent {
        Ok(())
    } else {
        Err(ArrayError::OutOfRange { index, extent })
    }
}

/// Check that a half-open range fits inside `0..extent`.
#[inline]
pub(crate) fn check_range(range: &core::ops::Range<usize>, extent: usize) -> Result<()> {
    if range.start > range.end {
        return Err(ArrayError::OutOfRange {
            index: range.start,
            extent: range.end,
        });
    }
    if range.end > extent {
        return Err(ArrayError::OutOfRange {
            index: range.end,
            extent,
        });
    }
    Ok(())
}
