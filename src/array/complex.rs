use super::{ComplexArray, RealArray};

impl ComplexArray {
    /// Element-wise magnitude `|z|`.
    ///
    /// ```
    /// use labmath::ComplexArray;
    /// use num_complex::Complex;
    /// let z = ComplexArray::row_vector(&[Complex::new(3.0, 4.0), Complex::new(0.0, -2.0)]);
    /// assert_eq!(z.abs().as_slice(), &[5.0, 2.0]);
    /// ```
    pub fn abs(&self) -> RealArray {
        self.map(|z| z.norm())
    }

    /// Element-wise real part.
    pub fn re(&self) -> RealArray {
        self.map(|z| z.re)
    }

    /// Element-wise imaginary part.
    pub fn im(&self) -> RealArray {
        self.map(|z| z.im)
    }
}
