use crate::error::{ArrayError, Result};
use crate::traits::Element;

use super::Array;

impl<T: Element> Array<T> {
    /// Join column vectors side by side.
    ///
    /// Every input must be `n x 1` for one common `n`. The result is
    /// `n x columns.len()`; an empty list gives a `0 x 0` array.
    ///
    /// ```
    /// use labmath::RealArray;
    /// let a = RealArray::column_vector(&[1.0, 2.0]);
    /// let b = RealArray::column_vector(&[3.0, 4.0]);
    /// let m = RealArray::concatenate_column_vectors(&[&a, &b]).unwrap();
    /// assert_eq!(m.shape(), (2, 2));
    /// assert_eq!(m[(0, 1)], 3.0);
    /// ```
    pub fn concatenate_column_vectors(columns: &[&Self]) -> Result<Self> {
        let Some(first) = columns.first() else {
            return Ok(Array::from_parts(0, 0, Vec::new()));
        };
        let nrows = first.nrows;
        for col in columns {
            if col.shape() != (nrows, 1) {
                return Err(ArrayError::ShapeMismatch {
                    expected: (nrows, 1),
                    got: col.shape(),
                });
            }
        }
        let mut data = Vec::with_capacity(nrows * columns.len());
        for col in columns {
            data.extend_from_slice(col.as_slice());
        }
        Ok(Array::from_parts(nrows, columns.len(), data))
    }

    /// Append column vectors to the columns of `self`, returning a new array.
    ///
    /// Like [`concatenate_column_vectors`](Array::concatenate_column_vectors)
    /// but any array with zero rows, `self` included, is an empty placeholder
    /// and is skipped. The non-empty inputs must share a row count, and each
    /// appended input must be a single column.
    ///
    /// ```
    /// use labmath::RealArray;
    /// let acc = RealArray::zeros(0, 0);
    /// let a = RealArray::column_vector(&[1.0, 2.0]);
    /// let b = RealArray::column_vector(&[3.0, 4.0]);
    /// let m = acc.add_columns(&[&a, &RealArray::zeros(0, 1), &b]).unwrap();
    /// assert_eq!(m.shape(), (2, 2));
    /// let m = m.add_columns(&[&a]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// ```
    pub fn add_columns(&self, columns: &[&Self]) -> Result<Self> {
        let base: Option<&Self> = (self.nrows > 0).then_some(self);
        let mut nrows = base.map(|b| b.nrows);
        let mut count = base.map_or(0, |b| b.ncols);
        for col in columns.iter().filter(|c| c.nrows > 0) {
            let expected_rows = *nrows.get_or_insert(col.nrows);
            if col.shape() != (expected_rows, 1) {
                return Err(ArrayError::ShapeMismatch {
                    expected: (expected_rows, 1),
                    got: col.shape(),
                });
            }
            count += 1;
        }
        let Some(nrows) = nrows else {
            return Ok(Array::from_parts(0, 0, Vec::new()));
        };
        let mut data = Vec::with_capacity(nrows * count);
        if let Some(b) = base {
            data.extend_from_slice(b.as_slice());
        }
        for col in columns.iter().filter(|c| c.nrows > 0) {
            data.extend_from_slice(col.as_slice());
        }
        Ok(Array::from_parts(nrows, count, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IntArray, RealArray};

    #[test]
    fn concatenate() {
        let a = IntArray::column_vector(&[1, 2, 3]);
        let b = IntArray::column_vector(&[4, 5, 6]);
        let c = IntArray::column_vector(&[7, 8, 9]);
        let m = IntArray::concatenate_column_vectors(&[&a, &b, &c]).unwrap();
        assert_eq!(m.shape(), (3, 3));
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn concatenate_rejects_wide_input() {
        let a = RealArray::column_vector(&[1.0, 2.0]);
        let b = RealArray::zeros(2, 2);
        assert_eq!(
            RealArray::concatenate_column_vectors(&[&a, &b]),
            Err(ArrayError::ShapeMismatch {
                expected: (2, 1),
                got: (2, 2)
            })
        );
    }

    #[test]
    fn concatenate_rejects_row_mismatch() {
        let a = RealArray::column_vector(&[1.0, 2.0]);
        let b = RealArray::column_vector(&[1.0, 2.0, 3.0]);
        assert!(RealArray::concatenate_column_vectors(&[&a, &b]).is_err());
    }

    #[test]
    fn concatenate_empty_list() {
        let m = RealArray::concatenate_column_vectors(&[]).unwrap();
        assert_eq!(m.shape(), (0, 0));
    }

    #[test]
    fn add_columns_to_matrix() {
        let m = IntArray::from_slice(2, 2, &[1, 2, 3, 4]);
        let c = IntArray::column_vector(&[5, 6]);
        let r = m.add_columns(&[&c]).unwrap();
        assert_eq!(r.shape(), (2, 3));
        assert_eq!(r.as_slice(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(m.shape(), (2, 2));
    }

    #[test]
    fn add_columns_skips_placeholders() {
        let empty = IntArray::zeros(0, 0);
        let c = IntArray::column_vector(&[5, 6]);
        let r = empty.add_columns(&[&empty, &c, &IntArray::zeros(0, 3)]).unwrap();
        assert_eq!(r.shape(), (2, 1));
        let all_empty = empty.add_columns(&[&empty]).unwrap();
        assert_eq!(all_empty.shape(), (0, 0));
    }

    #[test]
    fn add_columns_row_mismatch() {
        let m = IntArray::zeros(3, 1);
        let c = IntArray::column_vector(&[5, 6]);
        assert_eq!(
            m.add_columns(&[&c]),
            Err(ArrayError::ShapeMismatch {
                expected: (3, 1),
                got: (2, 1)
            })
        );
    }
}
