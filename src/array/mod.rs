mod any;
mod block;
mod complex;
mod concat;
mod index;
mod int;
mod linalg;
mod real;
mod reduce;
#[cfg(feature = "fft")]
mod spectral;
mod util;

pub use any::AnyArray;

use core::ops::{Index, IndexMut};

use num_complex::Complex;

use crate::error::{ArrayError, Result};
use crate::traits::{Element, ElementKind};

/// Array of `f64` values.
pub type RealArray = Array<f64>;

/// Array of `usize` values, used for positions, counts and index sets.
pub type IntArray = Array<usize>;

/// Array of `Complex<f64>` values.
pub type ComplexArray = Array<Complex<f64>>;

/// Dense two-dimensional array with column-major storage.
///
/// Element `(row, col)` lives at linear offset `col * nrows + row`. The
/// backing buffer may hold more elements than the logical `nrows x ncols`
/// extent; that spare capacity is what [`set_shape`](Array::set_shape) is
/// allowed to grow into. Nothing ever grows the buffer after construction.
///
/// Every extraction (`subarray`, `elements_with_indices`, `transpose`, ...)
/// returns a fresh array with its own buffer, so mutating a result never
/// affects its source.
///
/// # Examples
///
/// ```
/// use labmath::RealArray;
///
/// // Column-major: col0=[1,2], col1=[3,4], col2=[5,6]
/// let a = RealArray::from_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// assert_eq!(a[(1, 0)], 2.0);
/// assert_eq!(a[(0, 2)], 5.0);
/// assert_eq!(a[3], 4.0);
/// assert_eq!(a.shape(), (2, 3));
/// ```
#[derive(Debug, Clone)]
pub struct Array<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Element> Array<T> {
    /// Create an `nrows x ncols` array of zeros.
    ///
    /// ```
    /// use labmath::RealArray;
    /// let m = RealArray::zeros(2, 3);
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::filled(nrows, ncols, T::zero())
    }

    /// Create an array with every element set to `value`.
    ///
    /// Panics if `nrows * ncols` overflows `usize`.
    pub fn filled(nrows: usize, ncols: usize, value: T) -> Self {
        let len = nrows.checked_mul(ncols).expect("array size overflows usize");
        Self {
            data: vec![value; len],
            nrows,
            ncols,
        }
    }

    /// Create a zero-filled array whose buffer holds `capacity` elements.
    ///
    /// The spare room lets a later [`set_shape`](Array::set_shape) grow the
    /// logical extent up to `capacity` elements. A shape whose element count
    /// overflows `usize` is reported as [`ArrayError::CapacityExceeded`].
    ///
    /// ```
    /// use labmath::RealArray;
    /// let mut m = RealArray::with_capacity(2, 2, 12).unwrap();
    /// assert!(m.set_shape(3, 4).is_ok());
    /// assert_eq!(m.len(), 12);
    /// ```
    pub fn with_capacity(nrows: usize, ncols: usize, capacity: usize) -> Result<Self> {
        let requested = nrows.checked_mul(ncols).unwrap_or(usize::MAX);
        if requested > capacity {
            return Err(ArrayError::CapacityExceeded {
                requested,
                capacity,
            });
        }
        Ok(Self {
            data: vec![T::zero(); capacity],
            nrows,
            ncols,
        })
    }

    /// Create an array from a flat slice in column-major order.
    ///
    /// Panics if `slice.len() != nrows * ncols`.
    pub fn from_slice(nrows: usize, ncols: usize, slice: &[T]) -> Self {
        assert_eq!(
            slice.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} array",
            slice.len(),
            nrows,
            ncols,
        );
        Self {
            data: slice.to_vec(),
            nrows,
            ncols,
        }
    }

    /// Create an array from an owned `Vec<T>` in column-major order.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "vec length {} does not match {}x{} array",
            data.len(),
            nrows,
            ncols,
        );
        Self { data, nrows, ncols }
    }

    /// Create an array from a flat slice in row-major order.
    ///
    /// ```
    /// use labmath::RealArray;
    /// let m = RealArray::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Self {
        assert_eq!(
            row_major.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} array",
            row_major.len(),
            nrows,
            ncols,
        );
        Self::from_fn(nrows, ncols, |i, j| row_major[i * ncols + j])
    }

    /// `1 x n` array holding `values`.
    pub fn row_vector(values: &[T]) -> Self {
        Self::from_slice(1, values.len(), values)
    }

    /// `n x 1` array holding `values`.
    pub fn column_vector(values: &[T]) -> Self {
        Self::from_slice(values.len(), 1, values)
    }
}

impl<T> Array<T> {
    /// Create an array by calling `f(row, col)` for each element.
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for j in 0..ncols {
            for i in 0..nrows {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Wrap column-major data without checking it; callers guarantee the length.
    #[inline]
    pub(crate) fn from_parts(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), nrows * ncols);
        Self { data, nrows, ncols }
    }
}

// ── Shape ───────────────────────────────────────────────────────────

impl<T> Array<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Logical element count, `nrows * ncols`.
    #[inline]
    pub fn len(&self) -> usize {
        self.nrows * self.ncols
    }

    /// Whether the array has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of elements the buffer can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Size of one element in bytes.
    #[inline]
    pub fn type_size(&self) -> usize {
        core::mem::size_of::<T>()
    }

    /// Size of the allocated buffer in bytes.
    #[inline]
    pub fn allocated_size(&self) -> usize {
        self.capacity() * self.type_size()
    }

    /// True when the array has exactly one row or exactly one column.
    ///
    /// ```
    /// use labmath::RealArray;
    /// assert!(RealArray::zeros(1, 5).is_vector());
    /// assert!(RealArray::zeros(5, 1).is_vector());
    /// assert!(!RealArray::zeros(2, 2).is_vector());
    /// ```
    #[inline]
    pub fn is_vector(&self) -> bool {
        self.nrows == 1 || self.ncols == 1
    }

    /// Reinterpret the buffer as `nrows x ncols` without moving any data.
    ///
    /// Succeeds iff the new extent fits in the allocated capacity; on
    /// failure the shape is left unchanged. Never reallocates.
    ///
    /// ```
    /// use labmath::RealArray;
    /// let mut m = RealArray::from_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// m.set_shape(3, 2).unwrap();
    /// assert_eq!(m[(0, 1)], 4.0);
    /// assert!(m.set_shape(7, 1).is_err());
    /// assert_eq!(m.shape(), (3, 2));
    /// ```
    pub fn set_shape(&mut self, nrows: usize, ncols: usize) -> Result<()> {
        let requested = nrows
            .checked_mul(ncols)
            .ok_or(ArrayError::CapacityExceeded {
                requested: usize::MAX,
                capacity: self.capacity(),
            })?;
        if requested > self.capacity() {
            log::debug!(
                "rejecting reshape {}x{} -> {}x{}: capacity is {} elements",
                self.nrows,
                self.ncols,
                nrows,
                ncols,
                self.capacity()
            );
            return Err(ArrayError::CapacityExceeded {
                requested,
                capacity: self.capacity(),
            });
        }
        self.nrows = nrows;
        self.ncols = ncols;
        Ok(())
    }

    /// Whether this is a `1 x n` array; reductions run along the row then.
    #[inline]
    pub(crate) fn is_row_vector(&self) -> bool {
        self.nrows == 1
    }
}

impl<T: Element> Array<T> {
    /// Element kind of this array.
    #[inline]
    pub fn kind(&self) -> ElementKind {
        T::KIND
    }
}

// ── Element access ──────────────────────────────────────────────────

impl<T> Array<T> {
    /// The logical elements as a column-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.nrows * self.ncols]
    }

    /// The logical elements as a mutable column-major slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.nrows * self.ncols;
        &mut self.data[..len]
    }

    /// Column `j` as a contiguous slice.
    ///
    /// Panics if `j >= ncols`.
    #[inline]
    pub fn col_slice(&self, j: usize) -> &[T] {
        assert!(j < self.ncols, "column {} out of range for {} columns", j, self.ncols);
        let start = j * self.nrows;
        &self.data[start..start + self.nrows]
    }

    /// Element at `(row, col)`, or `None` when outside the extent.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.nrows && col < self.ncols {
            Some(&self.data[col * self.nrows + row])
        } else {
            None
        }
    }

    /// Iterate over the logical elements in column-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over the logical elements in column-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Consume the array, returning its logical elements in column-major order.
    pub fn into_vec(mut self) -> Vec<T> {
        let len = self.len();
        self.data.truncate(len);
        self.data
    }
}

impl<T> Index<(usize, usize)> for Array<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} array",
            row,
            col,
            self.nrows,
            self.ncols,
        );
        &self.data[col * self.nrows + row]
    }
}

impl<T> IndexMut<(usize, usize)> for Array<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} array",
            row,
            col,
            self.nrows,
            self.ncols,
        );
        &mut self.data[col * self.nrows + row]
    }
}

impl<T> Index<usize> for Array<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.as_slice()[i]
    }
}

impl<T> IndexMut<usize> for Array<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.as_mut_slice()[i]
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    /// Arrays compare equal when shapes and logical elements agree;
    /// spare capacity is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.as_slice() == other.as_slice()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
