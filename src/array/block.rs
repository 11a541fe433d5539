use core::ops::Range;

use crate::error::{check_index, check_range, ArrayError, Result};
use crate::traits::Element;

use super::{Array, IntArray};

impl<T: Element> Array<T> {
    /// Copy the contiguous block `rows x cols` into a new array.
    ///
    /// ```
    /// use labmath::RealArray;
    /// let m = RealArray::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
    /// let b = m.subarray(1..3, 1..3).unwrap();
    /// assert_eq!(b[(0, 0)], 4.0);
    /// assert_eq!(b[(1, 1)], 8.0);
    /// assert!(m.subarray(2..4, 0..1).is_err());
    /// ```
    pub fn subarray(&self, rows: Range<usize>, cols: Range<usize>) -> Result<Self> {
        check_range(&rows, self.nrows)?;
        check_range(&cols, self.ncols)?;
        let mut data = Vec::with_capacity(rows.len() * cols.len());
        for j in cols.clone() {
            let start = j * self.nrows;
            data.extend_from_slice(&self.data[start + rows.start..start + rows.end]);
        }
        Ok(Array::from_parts(rows.len(), cols.len(), data))
    }

    /// Gather the rows in `rows` and the columns in `cols` into a new array.
    ///
    /// Indices may be unordered and may repeat; result element `(i, j)` is
    /// `self[(rows[i], cols[j])]`.
    ///
    /// ```
    /// use labmath::{IntArray, RealArray};
    /// let m = RealArray::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let rows = IntArray::row_vector(&[1, 0]);
    /// let cols = IntArray::row_vector(&[2, 2]);
    /// let g = m.subarray_with_indices(&rows, &cols).unwrap();
    /// assert_eq!(g, RealArray::from_rows(2, 2, &[6.0, 6.0, 3.0, 3.0]));
    /// ```
    pub fn subarray_with_indices(&self, rows: &IntArray, cols: &IntArray) -> Result<Self> {
        for &r in rows.iter() {
            check_index(r, self.nrows)?;
        }
        for &c in cols.iter() {
            check_index(c, self.ncols)?;
        }
        let mut data = Vec::with_capacity(rows.len() * cols.len());
        for &c in cols.iter() {
            let base = c * self.nrows;
            data.extend(rows.iter().map(|&r| self.data[base + r]));
        }
        Ok(Array::from_parts(rows.len(), cols.len(), data))
    }

    /// Overwrite the block `rows x cols` with `src`.
    ///
    /// `src` must be exactly `rows.len() x cols.len()`. Nothing is written
    /// unless every check passes.
    ///
    /// ```
    /// use labmath::RealArray;
    /// let mut m = RealArray::zeros(3, 3);
    /// let patch = RealArray::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// m.set_subarray(1..3, 0..2, &patch).unwrap();
    /// assert_eq!(m[(1, 0)], 1.0);
    /// assert_eq!(m[(2, 1)], 4.0);
    /// ```
    pub fn set_subarray(&mut self, rows: Range<usize>, cols: Range<usize>, src: &Self) -> Result<()> {
        check_range(&rows, self.nrows)?;
        check_range(&cols, self.ncols)?;
        if src.shape() != (rows.len(), cols.len()) {
            return Err(ArrayError::ShapeMismatch {
                expected: (rows.len(), cols.len()),
                got: src.shape(),
            });
        }
        let nrows = self.nrows;
        for (k, j) in cols.enumerate() {
            let start = j * nrows;
            self.data[start + rows.start..start + rows.end].copy_from_slice(src.col_slice(k));
        }
        Ok(())
    }

    /// Scatter `src` onto every `(rows[i], cols[j])` pair.
    ///
    /// `src` is read as a flat column-major sequence regardless of its own
    /// shape: its `k`-th element goes to the `k`-th pair of the cartesian
    /// product enumerated with the row index varying fastest. Only the total
    /// count `rows.len() * cols.len()` must equal `src.len()`.
    ///
    /// ```
    /// use labmath::{IntArray, RealArray};
    /// let mut m = RealArray::zeros(3, 3);
    /// let rows = IntArray::row_vector(&[0, 2]);
    /// let cols = IntArray::row_vector(&[1, 2]);
    /// // a 1x4 source fills a 2x2 pattern
    /// let src = RealArray::row_vector(&[1.0, 2.0, 3.0, 4.0]);
    /// m.set_elements_with_row_indices(&rows, &cols, &src).unwrap();
    /// assert_eq!(m[(0, 1)], 1.0);
    /// assert_eq!(m[(2, 1)], 2.0);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(2, 2)], 4.0);
    /// ```
    pub fn set_elements_with_row_indices(
        &mut self,
        rows: &IntArray,
        cols: &IntArray,
        src: &Self,
    ) -> Result<()> {
        let expected = rows.len() * cols.len();
        if expected != src.len() {
            return Err(ArrayError::LengthMismatch {
                expected,
                found: src.len(),
            });
        }
        for &r in rows.iter() {
            check_index(r, self.nrows)?;
        }
        for &c in cols.iter() {
            check_index(c, self.ncols)?;
        }
        let nrows = self.nrows;
        let mut values = src.iter();
        for &c in cols.iter() {
            for &r in rows.iter() {
                if let Some(&v) = values.next() {
                    self.data[c * nrows + r] = v;
                }
            }
        }
        Ok(())
    }
}
