use crate::vmath::fft;

use super::{Array, ComplexArray, RealArray};

impl RealArray {
    /// Discrete Fourier transform, unnormalized.
    ///
    /// A row vector is transformed along its row; any other shape is
    /// transformed column by column. The result has the same shape.
    ///
    /// ```
    /// use labmath::RealArray;
    /// let x = RealArray::column_vector(&[1.0, 1.0, 1.0, 1.0]);
    /// let f = x.fft();
    /// assert_eq!(f.shape(), (4, 1));
    /// assert!((f[0].re - 4.0).abs() < 1e-12);
    /// assert!(f[1].norm() < 1e-12);
    /// ```
    pub fn fft(&self) -> ComplexArray {
        let (lane_len, _) = self.lanes();
        let data = fft::forward_real_lanes(self.as_slice(), lane_len);
        Array::from_parts(self.nrows, self.ncols, data)
    }
}
