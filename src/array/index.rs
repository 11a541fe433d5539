use crate::error::{check_index, ArrayError, Result};
use crate::traits::Element;

use super::{Array, IntArray};

impl<T: Element> Array<T> {
    /// Linear indices of all non-zero elements, in ascending order.
    ///
    /// A row-vector receiver yields a row vector; anything else yields a
    /// column vector.
    ///
    /// ```
    /// use labmath::RealArray;
    /// let m = RealArray::from_slice(2, 2, &[0.0, 3.0, 0.0, -1.0]);
    /// assert_eq!(m.find().as_slice(), &[1, 3]);
    /// ```
    pub fn find(&self) -> IntArray {
        let hits: Vec<usize> = self.nonzero_positions().collect();
        self.index_vector(hits)
    }

    /// The first `how_many` entries of [`find`](Array::find).
    pub fn find_first(&self, how_many: usize) -> IntArray {
        let hits: Vec<usize> = self.nonzero_positions().take(how_many).collect();
        self.index_vector(hits)
    }

    /// The last `how_many` entries of [`find`](Array::find), still ascending.
    ///
    /// ```
    /// use labmath::IntArray;
    /// let m = IntArray::row_vector(&[4, 0, 5, 6, 0, 7]);
    /// assert_eq!(m.find_first(2).as_slice(), &[0, 2]);
    /// assert_eq!(m.find_last(2).as_slice(), &[3, 5]);
    /// ```
    pub fn find_last(&self, how_many: usize) -> IntArray {
        let mut hits: Vec<usize> = self
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, v)| !v.is_zero())
            .map(|(i, _)| i)
            .take(how_many)
            .collect();
        hits.reverse();
        self.index_vector(hits)
    }

    /// Gather elements by linear index. The result takes the shape of `indices`.
    ///
    /// ```
    /// use labmath::{IntArray, RealArray};
    /// let m = RealArray::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let g = m.elements_with_indices(&IntArray::column_vector(&[3, 0, 3])).unwrap();
    /// assert_eq!(g.shape(), (3, 1));
    /// assert_eq!(g.as_slice(), &[4.0, 1.0, 4.0]);
    /// ```
    pub fn elements_with_indices(&self, indices: &IntArray) -> Result<Self> {
        let len = self.len();
        for &i in indices.iter() {
            check_index(i, len)?;
        }
        let data = indices.iter().map(|&i| self.data[i]).collect();
        Ok(Array::from_parts(indices.nrows(), indices.ncols(), data))
    }

    /// Scatter `src` to the linear positions in `indices`.
    ///
    /// Counts must match exactly; shapes need not. When an index repeats the
    /// last write wins.
    pub fn set_elements_with_indices(&mut self, indices: &IntArray, src: &Self) -> Result<()> {
        if indices.len() != src.len() {
            return Err(ArrayError::LengthMismatch {
                expected: indices.len(),
                found: src.len(),
            });
        }
        let len = self.len();
        for &i in indices.iter() {
            check_index(i, len)?;
        }
        for (&i, &v) in indices.iter().zip(src.iter()) {
            self.data[i] = v;
        }
        Ok(())
    }

    fn nonzero_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter()
            .enumerate()
            .filter(|(_, v)| !v.is_zero())
            .map(|(i, _)| i)
    }

    fn index_vector(&self, hits: Vec<usize>) -> IntArray {
        let n = hits.len();
        if self.is_row_vector() {
            Array::from_parts(1, n, hits)
        } else {
            Array::from_parts(n, 1, hits)
        }
    }
}
