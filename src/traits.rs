use core::fmt::{self, Debug};

use num_complex::Complex;

/// The element kind an array is built over. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `f64` elements.
    Real,
    /// `usize` elements, used for positions and counts.
    Integer,
    /// `Complex<f64>` elements.
    Complex,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Real => write!(f, "real"),
            ElementKind::Integer => write!(f, "integer"),
            ElementKind::Complex => write!(f, "complex"),
        }
    }
}

/// Trait for types that can be stored in an [`Array`](crate::Array).
///
/// Shape, indexing and search algorithms are written once against this trait.
/// `is_zero` is the only predicate they rely on: [`find`](crate::Array::find)
/// and friends report the positions where it returns `false`.
///
/// Implemented for `f64` (exact `0.0`, no tolerance), `usize` and `Complex<f64>`
/// (`0 + 0i`).
pub trait Element: Copy + PartialEq + Debug + Send + Sync + 'static {
    /// Kind tag reported by arrays of this element type.
    const KIND: ElementKind;

    /// The additive identity, used for zero fill.
    fn zero() -> Self;

    /// Whether this value counts as zero for search purposes.
    fn is_zero(&self) -> bool;
}

impl Element for f64 {
    const KIND: ElementKind = ElementKind::Real;

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

impl Element for usize {
    const KIND: ElementKind = ElementKind::Integer;

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == 0
    }
}

impl Element for Complex<f64> {
    const KIND: ElementKind = ElementKind::Complex;

    #[inline]
    fn zero() -> Self {
        Complex::new(0.0, 0.0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}
