use core::ops::Range;

use crate::error::{check_index, check_range, ArrayError, Result};
use crate::vmath::{self, Unary};

use super::{Array, IntArray, RealArray};

// ── Constructors ────────────────────────────────────────────────────

impl RealArray {
    /// Row vector `start, start + step, ...` up to and including `cap`.
    ///
    /// Empty (`1 x 0`) when `step` is zero, NaN, or points away from `cap`.
    ///
    /// ```
    /// use labmath::RealArray;
    /// let v = RealArray::row_vector_with_step(0.0, 0.25, 1.0);
    /// assert_eq!(v.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    /// let down = RealArray::row_vector_with_step(3.0, -1.0, 1.0);
    /// assert_eq!(down.as_slice(), &[3.0, 2.0, 1.0]);
    /// ```
    pub fn row_vector_with_step(start: f64, step: f64, cap: f64) -> Self {
        let span = (cap - start) / step;
        if !span.is_finite() || span < 0.0 {
            return Array::from_parts(1, 0, Vec::new());
        }
        // a few ulps of slack so an endpoint lost to rounding is kept
        let n = (span * (1.0 + 4.0 * f64::EPSILON)).floor() as usize + 1;
        let mut data = (0..n).map(|i| start + i as f64 * step).collect::<Vec<_>>();
        if let Some(last) = data.last_mut() {
            if (step > 0.0 && *last > cap) || (step < 0.0 && *last < cap) {
                *last = cap;
            }
        }
        Array::from_parts(1, n, data)
    }
}

// ── Functional application ──────────────────────────────────────────

impl RealArray {
    /// Apply `f` to every element.
    pub fn apply(&self, f: impl Fn(f64) -> f64) -> Self {
        self.map(f)
    }

    /// Combine with a same-shaped array element by element.
    ///
    /// ```
    /// use labmath::RealArray;
    /// let a = RealArray::row_vector(&[1.0, 2.0, 3.0]);
    /// let b = RealArray::row_vector(&[4.0, 5.0, 6.0]);
    /// let c = a.apply_with(&b, |x, y| x * y + 1.0).unwrap();
    /// assert_eq!(c.as_slice(), &[5.0, 11.0, 19.0]);
    /// ```
    pub fn apply_with(&self, other: &RealArray, f: impl Fn(f64, f64) -> f64) -> Result<Self> {
        self.zip_map(other, f)
    }

    /// Apply a real-to-integer function to every element.
    pub fn apply_int(&self, f: impl Fn(f64) -> usize) -> IntArray {
        self.map(f)
    }

    /// Combine with a same-shaped real array into an integer array.
    pub fn apply_int_with(
        &self,
        other: &RealArray,
        f: impl Fn(f64, f64) -> usize,
    ) -> Result<IntArray> {
        self.zip_map(other, f)
    }

    /// Combine with a same-shaped integer array.
    pub fn apply_with_int(&self, other: &IntArray, f: impl Fn(f64, usize) -> f64) -> Result<Self> {
        self.zip_map(other, f)
    }

    fn unary(&self, op: Unary) -> Self {
        Array::from_parts(self.nrows, self.ncols, vmath::unary(op, self.as_slice()))
    }
}

// ── Element-wise math ───────────────────────────────────────────────

impl RealArray {
    /// `|x|`
    pub fn abs(&self) -> Self {
        self.unary(Unary::Abs)
    }

    /// Round half away from zero.
    pub fn round(&self) -> Self {
        self.unary(Unary::Round)
    }

    /// `x²`
    pub fn square(&self) -> Self {
        self.unary(Unary::Square)
    }

    /// `√x`; negative inputs give NaN.
    pub fn sqrt(&self) -> Self {
        self.unary(Unary::Sqrt)
    }

    /// `sin(x)`
    pub fn sin(&self) -> Self {
        self.unary(Unary::Sin)
    }

    /// `sin(πx)`
    pub fn sinpi(&self) -> Self {
        self.unary(Unary::SinPi)
    }

    /// `sin(f(x))`
    pub fn sin_with(&self, f: impl Fn(f64) -> f64) -> Self {
        self.map(f).sin()
    }

    /// `cos(x)`
    pub fn cos(&self) -> Self {
        self.unary(Unary::Cos)
    }

    /// `cos(πx)`
    pub fn cospi(&self) -> Self {
        self.unary(Unary::CosPi)
    }

    /// `cos(f(x))`
    pub fn cos_with(&self, f: impl Fn(f64) -> f64) -> Self {
        self.map(f).cos()
    }

    /// Four-quadrant arctangent `atan2(self, x)`, element by element.
    pub fn atan2(&self, x: &RealArray) -> Result<Self> {
        self.zip_map(x, f64::atan2)
    }

    /// Natural logarithm.
    pub fn log(&self) -> Self {
        self.unary(Unary::Ln)
    }

    /// Base-2 logarithm.
    pub fn log2(&self) -> Self {
        self.unary(Unary::Log2)
    }

    /// Base-10 logarithm.
    pub fn log10(&self) -> Self {
        self.unary(Unary::Log10)
    }

    /// `2^x`
    pub fn exp2(&self) -> Self {
        self.unary(Unary::Exp2)
    }

    /// `x^exponent`
    pub fn pow(&self, exponent: f64) -> Self {
        self.unary(Unary::Powf(exponent))
    }

    /// `1/x`
    pub fn one_over_x(&self) -> Self {
        self.unary(Unary::Recip)
    }
}

// ── Scalar broadcasts ───────────────────────────────────────────────

impl RealArray {
    /// `x * factor`
    pub fn multiply(&self, factor: f64) -> Self {
        self.map(|x| x * factor)
    }

    /// `x / denominator`
    pub fn divide(&self, denominator: f64) -> Self {
        self.map(|x| x / denominator)
    }

    /// `numerator / x`
    pub fn under(&self, numerator: f64) -> Self {
        self.map(|x| numerator / x)
    }

    /// `x + addend`
    pub fn add(&self, addend: f64) -> Self {
        self.map(|x| x + addend)
    }

    /// `x - subtrahend`
    pub fn subtract(&self, subtrahend: f64) -> Self {
        self.map(|x| x - subtrahend)
    }

    /// `minuend - x`
    pub fn subtract_from(&self, minuend: f64) -> Self {
        self.map(|x| minuend - x)
    }

    /// Element-wise quotient of two same-shaped arrays.
    pub fn divide_elementwise(&self, denominators: &RealArray) -> Result<Self> {
        self.zip_map(denominators, |a, b| a / b)
    }

    /// Divide rows `rows` of `self` by row `row` of `denominators`.
    ///
    /// Returns a `rows.len() x ncols` array whose element `(i, j)` is
    /// `self[(rows.start + i, j)] / denominators[(row, j)]`. The reference
    /// row must be as long as `self` is wide.
    ///
    /// ```
    /// use labmath::RealArray;
    /// let x = RealArray::from_rows(3, 2, &[2.0, 9.0, 4.0, 6.0, 8.0, 3.0]);
    /// let d = RealArray::from_rows(2, 2, &[1.0, 1.0, 2.0, 3.0]);
    /// let q = x.divide_rows(1..3, 1, &d).unwrap();
    /// assert_eq!(q, RealArray::from_rows(2, 2, &[2.0, 2.0, 4.0, 1.0]));
    /// ```
    pub fn divide_rows(&self, rows: Range<usize>, row: usize, denominators: &RealArray) -> Result<Self> {
        check_range(&rows, self.nrows)?;
        check_index(row, denominators.nrows)?;
        if denominators.ncols != self.ncols {
            return Err(ArrayError::LengthMismatch {
                expected: self.ncols,
                found: denominators.ncols,
            });
        }
        let start = rows.start;
        Ok(Array::from_fn(rows.len(), self.ncols, |i, j| {
            self[(start + i, j)] / denominators[(row, j)]
        }))
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::PI;

    use super::*;

    #[test]
    fn step_vectors() {
        assert_eq!(RealArray::row_vector_with_step(1.0, 1.0, 1.0).as_slice(), &[1.0]);
        assert_eq!(RealArray::row_vector_with_step(1.0, 1.0, 0.0).shape(), (1, 0));
        assert_eq!(RealArray::row_vector_with_step(1.0, 0.0, 5.0).shape(), (1, 0));
        let v = RealArray::row_vector_with_step(0.0, 0.1, 1.0);
        assert_eq!(v.len(), 11);
        assert!((v[10] - 1.0).abs() < 1e-12);
        assert_eq!(RealArray::row_vector_with_step(0.0, 2.0, 5.0).as_slice(), &[0.0, 2.0, 4.0]);
    }

    #[test]
    fn step_vector_never_passes_cap() {
        let v = RealArray::row_vector_with_step(0.0, 1.0, 0.9999999999995);
        assert_eq!(v.as_slice(), &[0.0]);
        let down = RealArray::row_vector_with_step(0.0, -1.0, -0.9999999999995);
        assert_eq!(down.as_slice(), &[0.0]);

        // 0.3 / 0.1 rounds just below 3, the endpoint is still kept and pinned
        let w = RealArray::row_vector_with_step(0.0, 0.1, 0.3);
        assert_eq!(w.len(), 4);
        assert_eq!(w[3], 0.3);
        for k in 1..=50 {
            let cap = k as f64 * 0.1;
            let v = RealArray::row_vector_with_step(0.0, 0.1, cap);
            assert!(v.iter().all(|&x| x <= cap));
        }
    }

    #[test]
    fn transcendentals_keep_shape() {
        let m = RealArray::from_slice(2, 2, &[0.0, 0.5, 1.0, 2.0]);
        let s = m.sinpi();
        assert_eq!(s.shape(), (2, 2));
        assert!((s[1] - 1.0).abs() < 1e-15);
        assert!((m.cos_with(|x| x * PI)[2] + 1.0).abs() < 1e-15);
        assert!((m.sin_with(|x| x * PI / 2.0)[2] - 1.0).abs() < 1e-15);
        let e = m.exp2();
        assert_eq!((e[0], e[2], e[3]), (1.0, 2.0, 4.0));
        assert!((e[1] - 2.0_f64.sqrt()).abs() < 1e-15);
        assert_eq!(m.pow(2.0), m.square());
        assert_eq!(m.log2()[3], 1.0);
        assert_eq!(RealArray::row_vector(&[100.0]).log10()[0], 2.0);
        assert!((RealArray::row_vector(&[1.0]).log()[0]).abs() < 1e-15);
    }

    #[test]
    fn ieee_results_are_not_masked() {
        let m = RealArray::row_vector(&[-4.0, 0.0]);
        let r = m.sqrt();
        assert!(r[0].is_nan());
        assert_eq!(m.one_over_x()[1], f64::INFINITY);
        assert_eq!(m.log()[1], f64::NEG_INFINITY);
    }

    #[test]
    fn scalar_broadcasts() {
        let m = RealArray::row_vector(&[1.0, 2.0, 4.0]);
        assert_eq!(m.multiply(2.0).as_slice(), &[2.0, 4.0, 8.0]);
        assert_eq!(m.divide(2.0).as_slice(), &[0.5, 1.0, 2.0]);
        assert_eq!(m.under(8.0).as_slice(), &[8.0, 4.0, 2.0]);
        assert_eq!(m.add(1.0).as_slice(), &[2.0, 3.0, 5.0]);
        assert_eq!(m.subtract(1.0).as_slice(), &[0.0, 1.0, 3.0]);
        assert_eq!(m.subtract_from(1.0).as_slice(), &[0.0, -1.0, -3.0]);
    }

    #[test]
    fn abs_round() {
        let m = RealArray::row_vector(&[-1.5, 2.5, -0.4]);
        assert_eq!(m.abs().as_slice(), &[1.5, 2.5, 0.4]);
        assert_eq!(m.round().as_slice(), &[-2.0, 3.0, -0.0]);
    }

    #[test]
    fn atan2_quadrants() {
        let y = RealArray::row_vector(&[1.0, -1.0]);
        let x = RealArray::row_vector(&[-1.0, -1.0]);
        let a = y.atan2(&x).unwrap();
        assert!((a[0] - 3.0 * PI / 4.0).abs() < 1e-15);
        assert!((a[1] + 3.0 * PI / 4.0).abs() < 1e-15);
        assert!(y.atan2(&RealArray::zeros(2, 1)).is_err());
    }

    #[test]
    fn apply_variants() {
        let a = RealArray::row_vector(&[0.2, 1.7, 2.5]);
        let floors = a.apply_int(|x| x.floor() as usize);
        assert_eq!(floors.as_slice(), &[0, 1, 2]);
        let b = RealArray::row_vector(&[1.0, 1.0, 3.0]);
        let gt = a.apply_int_with(&b, |x, y| usize::from(x > y)).unwrap();
        assert_eq!(gt.as_slice(), &[0, 1, 0]);
        let scaled = a.apply_with_int(&floors, |x, n| x * n as f64).unwrap();
        assert_eq!(scaled.as_slice(), &[0.0, 1.7, 5.0]);
        assert_eq!(a.apply(|x| -x)[2], -2.5);
    }

    #[test]
    fn divide_elementwise_shape() {
        let a = RealArray::from_slice(2, 1, &[4.0, 9.0]);
        let b = RealArray::from_slice(2, 1, &[2.0, 3.0]);
        assert_eq!(a.divide_elementwise(&b).unwrap().as_slice(), &[2.0, 3.0]);
        assert!(a.divide_elementwise(&b.transpose()).is_err());
    }

    #[test]
    fn divide_rows_checks() {
        let x = RealArray::zeros(3, 2);
        let d = RealArray::zeros(2, 3);
        assert_eq!(
            x.divide_rows(0..1, 0, &d),
            Err(ArrayError::LengthMismatch {
                expected: 2,
                found: 3
            })
        );
        let d = RealArray::filled(2, 2, 1.0);
        assert!(x.divide_rows(0..4, 0, &d).is_err());
        assert!(x.divide_rows(0..1, 2, &d).is_err());
        assert_eq!(x.divide_rows(1..1, 0, &d).unwrap().shape(), (0, 2));
    }
}
