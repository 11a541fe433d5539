use crate::error::{ArrayError, Result};
use crate::vmath;

use super::{Array, RealArray};

impl RealArray {
    /// Matrix product `self * rhs`.
    ///
    /// Fails with [`ArrayError::ShapeMismatch`] unless `self.ncols() == rhs.nrows()`.
    ///
    /// ```
    /// use labmath::RealArray;
    /// let a = RealArray::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let b = RealArray::from_rows(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
    /// let c = a.matmult(&b).unwrap();
    /// assert_eq!(c, RealArray::from_rows(2, 2, &[58.0, 64.0, 139.0, 154.0]));
    /// assert!(a.matmult(&a).is_err());
    /// ```
    pub fn matmult(&self, rhs: &RealArray) -> Result<RealArray> {
        if self.ncols != rhs.nrows {
            return Err(ArrayError::ShapeMismatch {
                expected: (self.ncols, rhs.ncols),
                got: rhs.shape(),
            });
        }
        let (m, n, p) = (self.nrows, self.ncols, rhs.ncols);
        let mut out = vec![0.0; m * p];
        vmath::matmul(self.as_slice(), rhs.as_slice(), &mut out, m, n, p);
        Ok(Array::from_parts(m, p, out))
    }

    /// MATLAB `diag`: a vector becomes a square matrix with it on the
    /// diagonal; a matrix yields its main diagonal as a column vector.
    ///
    /// ```
    /// use labmath::RealArray;
    /// let d = RealArray::row_vector(&[1.0, 2.0]).diag();
    /// assert_eq!(d, RealArray::from_rows(2, 2, &[1.0, 0.0, 0.0, 2.0]));
    /// assert_eq!(d.diag().as_slice(), &[1.0, 2.0]);
    /// ```
    pub fn diag(&self) -> RealArray {
        if self.is_vector() {
            let v = self.as_slice();
            let n = v.len();
            let mut out = RealArray::zeros(n, n);
            for (i, &x) in v.iter().enumerate() {
                out[(i, i)] = x;
            }
            out
        } else {
            let n = self.nrows.min(self.ncols);
            let data = (0..n).map(|i| self[(i, i)]).collect();
            Array::from_parts(n, 1, data)
        }
    }
}
