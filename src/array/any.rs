use core::ops::Range;

use crate::error::{ArrayError, Result};
use crate::traits::ElementKind;

use super::{ComplexArray, IntArray, RealArray};

/// An array whose element kind is only known at run time.
///
/// Operations that combine two `AnyArray`s require both to hold the same
/// kind and report [`ArrayError::TypeMismatch`] otherwise. Statically typed
/// code should use [`Array`](super::Array) directly, where mixing kinds
/// cannot compile.
///
/// ```
/// use labmath::{AnyArray, ArrayError, ElementKind, IntArray, RealArray};
/// let mut a = AnyArray::from(RealArray::zeros(2, 2));
/// let b = AnyArray::from(IntArray::zeros(1, 1));
/// let err = a.set_subarray(0..1, 0..1, &b).unwrap_err();
/// assert!(matches!(
///     err,
///     ArrayError::TypeMismatch { expected: ElementKind::Real, found: ElementKind::Integer }
/// ));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AnyArray {
    /// `f64` elements.
    Real(RealArray),
    /// `usize` elements.
    Int(IntArray),
    /// `Complex<f64>` elements.
    Complex(ComplexArray),
}

/// Dispatch a method with identical signature across all three variants.
macro_rules! each {
    ($self:expr, $a:ident => $body:expr) => {
        match $self {
            AnyArray::Real($a) => $body,
            AnyArray::Int($a) => $body,
            AnyArray::Complex($a) => $body,
        }
    };
}

impl AnyArray {
    /// Element kind of the wrapped array.
    pub fn kind(&self) -> ElementKind {
        each!(self, a => a.kind())
    }

    /// `(nrows, ncols)`.
    pub fn shape(&self) -> (usize, usize) {
        each!(self, a => a.shape())
    }

    /// True when the array has exactly one row or exactly one column.
    pub fn is_vector(&self) -> bool {
        each!(self, a => a.is_vector())
    }

    /// Reinterpret the buffer as `nrows x ncols`; see [`Array::set_shape`](super::Array::set_shape).
    pub fn set_shape(&mut self, nrows: usize, ncols: usize) -> Result<()> {
        each!(self, a => a.set_shape(nrows, ncols))
    }

    /// Transposed copy of the same kind.
    pub fn transpose(&self) -> AnyArray {
        each!(self, a => a.transpose().into())
    }

    /// Copy with the row order reversed.
    pub fn flipud(&self) -> AnyArray {
        each!(self, a => a.flipud().into())
    }

    /// Linear indices of every nonzero element.
    pub fn find(&self) -> IntArray {
        each!(self, a => a.find())
    }

    /// Linear indices of the first `how_many` nonzero elements.
    pub fn find_first(&self, how_many: usize) -> IntArray {
        each!(self, a => a.find_first(how_many))
    }

    /// Linear indices of the last `how_many` nonzero elements, ascending.
    pub fn find_last(&self, how_many: usize) -> IntArray {
        each!(self, a => a.find_last(how_many))
    }

    /// Copy of the block `rows x cols`.
    pub fn subarray(&self, rows: Range<usize>, cols: Range<usize>) -> Result<AnyArray> {
        each!(self, a => a.subarray(rows, cols).map(Into::into))
    }

    /// Copy of the rows and columns picked by `rows` and `cols`.
    pub fn subarray_with_indices(&self, rows: &IntArray, cols: &IntArray) -> Result<AnyArray> {
        each!(self, a => a.subarray_with_indices(rows, cols).map(Into::into))
    }

    /// Gather the elements at linear `indices`.
    pub fn elements_with_indices(&self, indices: &IntArray) -> Result<AnyArray> {
        each!(self, a => a.elements_with_indices(indices).map(Into::into))
    }

    /// Copy `src` into the block `rows x cols`; `src` must be of the same kind.
    pub fn set_subarray(&mut self, rows: Range<usize>, cols: Range<usize>, src: &AnyArray) -> Result<()> {
        match (self, src) {
            (AnyArray::Real(a), AnyArray::Real(s)) => a.set_subarray(rows, cols, s),
            (AnyArray::Int(a), AnyArray::Int(s)) => a.set_subarray(rows, cols, s),
            (AnyArray::Complex(a), AnyArray::Complex(s)) => a.set_subarray(rows, cols, s),
            (a, s) => Err(mismatch(a.kind(), s.kind())),
        }
    }

    /// Scatter `src` to `indices`; `src` must be of the same kind.
    pub fn set_elements_with_indices(&mut self, indices: &IntArray, src: &AnyArray) -> Result<()> {
        match (self, src) {
            (AnyArray::Real(a), AnyArray::Real(s)) => a.set_elements_with_indices(indices, s),
            (AnyArray::Int(a), AnyArray::Int(s)) => a.set_elements_with_indices(indices, s),
            (AnyArray::Complex(a), AnyArray::Complex(s)) => a.set_elements_with_indices(indices, s),
            (a, s) => Err(mismatch(a.kind(), s.kind())),
        }
    }

    /// Scatter `src` over the `rows x cols` grid; `src` must be of the same kind.
    pub fn set_elements_with_row_indices(
        &mut self,
        rows: &IntArray,
        cols: &IntArray,
        src: &AnyArray,
    ) -> Result<()> {
        match (self, src) {
            (AnyArray::Real(a), AnyArray::Real(s)) => a.set_elements_with_row_indices(rows, cols, s),
            (AnyArray::Int(a), AnyArray::Int(s)) => a.set_elements_with_row_indices(rows, cols, s),
            (AnyArray::Complex(a), AnyArray::Complex(s)) => {
                a.set_elements_with_row_indices(rows, cols, s)
            }
            (a, s) => Err(mismatch(a.kind(), s.kind())),
        }
    }

    /// Join column vectors side by side. All inputs must share the first one's kind.
    ///
    /// An empty list yields an empty real array.
    pub fn concatenate_column_vectors(columns: &[&AnyArray]) -> Result<AnyArray> {
        let Some(first) = columns.first() else {
            return Ok(RealArray::zeros(0, 0).into());
        };
        match first {
            AnyArray::Real(_) => {
                let cols = same_kind(ElementKind::Real, columns, AnyArray::as_real)?;
                RealArray::concatenate_column_vectors(&cols).map(Into::into)
            }
            AnyArray::Int(_) => {
                let cols = same_kind(ElementKind::Integer, columns, AnyArray::as_int)?;
                IntArray::concatenate_column_vectors(&cols).map(Into::into)
            }
            AnyArray::Complex(_) => {
                let cols = same_kind(ElementKind::Complex, columns, AnyArray::as_complex)?;
                ComplexArray::concatenate_column_vectors(&cols).map(Into::into)
            }
        }
    }

    /// Append column vectors of the same kind; see [`Array::add_columns`](super::Array::add_columns).
    pub fn add_columns(&self, columns: &[&AnyArray]) -> Result<AnyArray> {
        match self {
            AnyArray::Real(a) => {
                let cols = same_kind(ElementKind::Real, columns, AnyArray::as_real)?;
                a.add_columns(&cols).map(Into::into)
            }
            AnyArray::Int(a) => {
                let cols = same_kind(ElementKind::Integer, columns, AnyArray::as_int)?;
                a.add_columns(&cols).map(Into::into)
            }
            AnyArray::Complex(a) => {
                let cols = same_kind(ElementKind::Complex, columns, AnyArray::as_complex)?;
                a.add_columns(&cols).map(Into::into)
            }
        }
    }

    /// The wrapped real array, if this holds one.
    pub fn as_real(&self) -> Option<&RealArray> {
        match self {
            AnyArray::Real(a) => Some(a),
            _ => None,
        }
    }

    /// The wrapped integer array, if this holds one.
    pub fn as_int(&self) -> Option<&IntArray> {
        match self {
            AnyArray::Int(a) => Some(a),
            _ => None,
        }
    }

    /// The wrapped complex array, if this holds one.
    pub fn as_complex(&self) -> Option<&ComplexArray> {
        match self {
            AnyArray::Complex(a) => Some(a),
            _ => None,
        }
    }
}

fn mismatch(expected: ElementKind, found: ElementKind) -> ArrayError {
    ArrayError::TypeMismatch { expected, found }
}

fn same_kind<'a, A>(
    expected: ElementKind,
    columns: &[&'a AnyArray],
    pick: impl Fn(&'a AnyArray) -> Option<&'a A>,
) -> Result<Vec<&'a A>> {
    columns
        .iter()
        .map(|&c| pick(c).ok_or_else(|| mismatch(expected, c.kind())))
        .collect()
}

impl From<RealArray> for AnyArray {
    fn from(a: RealArray) -> Self {
        AnyArray::Real(a)
    }
}

impl From<IntArray> for AnyArray {
    fn from(a: IntArray) -> Self {
        AnyArray::Int(a)
    }
}

impl From<ComplexArray> for AnyArray {
    fn from(a: ComplexArray) -> Self {
        AnyArray::Complex(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn dispatch_keeps_kind() {
        let a: AnyArray = IntArray::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]).into();
        assert_eq!(a.kind(), ElementKind::Integer);
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.kind(), ElementKind::Integer);
        assert_eq!(t.as_int().unwrap()[(2, 1)], 6);
    }

    #[test]
    fn same_kind_scatter() {
        let mut a: AnyArray = RealArray::zeros(2, 2).into();
        let src: AnyArray = RealArray::row_vector(&[7.0, 8.0]).into();
        a.set_elements_with_indices(&IntArray::row_vector(&[0, 3]), &src)
            .unwrap();
        assert_eq!(a.as_real().unwrap().as_slice(), &[7.0, 0.0, 0.0, 8.0]);
    }

    #[test]
    fn mixed_scatter_is_type_mismatch() {
        let mut a: AnyArray = RealArray::zeros(2, 2).into();
        let before = a.clone();
        let src: AnyArray = ComplexArray::filled(1, 1, Complex::new(1.0, 1.0)).into();
        let err = a
            .set_elements_with_indices(&IntArray::row_vector(&[0]), &src)
            .unwrap_err();
        assert!(matches!(
            err,
            ArrayError::TypeMismatch { expected: ElementKind::Real, found: ElementKind::Complex }
        ));
        assert_eq!(a, before);
    }

    #[test]
    fn concatenate_mixed_kinds() {
        let r: AnyArray = RealArray::column_vector(&[1.0, 2.0]).into();
        let i: AnyArray = IntArray::column_vector(&[1, 2]).into();
        assert!(matches!(
            AnyArray::concatenate_column_vectors(&[&r, &i]),
            Err(ArrayError::TypeMismatch { expected: ElementKind::Real, found: ElementKind::Integer })
        ));
        let joined = AnyArray::concatenate_column_vectors(&[&r, &r]).unwrap();
        assert_eq!(joined.shape(), (2, 2));
    }

    #[test]
    fn find_across_kinds() {
        let c: AnyArray = ComplexArray::from_slice(
            1,
            3,
            &[Complex::new(0.0, 0.0), Complex::new(0.0, 2.0), Complex::new(0.0, 0.0)],
        )
        .into();
        assert_eq!(c.find().as_slice(), &[1]);
    }

    #[test]
    fn row_index_scatter_checks_kind() {
        let mut a: AnyArray = IntArray::zeros(3, 3).into();
        let rows = IntArray::row_vector(&[0, 2]);
        let cols = IntArray::row_vector(&[1]);
        let wrong: AnyArray = RealArray::row_vector(&[1.0, 2.0]).into();
        assert!(matches!(
            a.set_elements_with_row_indices(&rows, &cols, &wrong),
            Err(ArrayError::TypeMismatch { expected: ElementKind::Integer, found: ElementKind::Real })
        ));
        assert_eq!(a, AnyArray::from(IntArray::zeros(3, 3)));

        let src: AnyArray = IntArray::row_vector(&[5, 6]).into();
        a.set_elements_with_row_indices(&rows, &cols, &src).unwrap();
        let m = a.as_int().unwrap();
        assert_eq!(m[(0, 1)], 5);
        assert_eq!(m[(2, 1)], 6);

        let picked = a.subarray_with_indices(&rows, &cols).unwrap();
        assert_eq!(picked.as_int().unwrap().as_slice(), &[5, 6]);
        assert_eq!(a.find_first(1).as_slice(), &[3]);
        assert_eq!(a.find_last(1).as_slice(), &[5]);
    }

    #[test]
    fn add_columns_checks_kind() {
        let acc: AnyArray = RealArray::zeros(0, 0).into();
        let col: AnyArray = RealArray::column_vector(&[1.0, 2.0]).into();
        let m = acc.add_columns(&[&col, &col]).unwrap();
        assert_eq!(m.shape(), (2, 2));
        let bad: AnyArray = ComplexArray::zeros(2, 1).into();
        assert!(matches!(
            m.add_columns(&[&bad]),
            Err(ArrayError::TypeMismatch { expected: ElementKind::Real, found: ElementKind::Complex })
        ));
    }
}
