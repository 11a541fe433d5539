use num_traits::Float;

use super::{check_knots, segment, InterpError};

/// Piecewise linear interpolant.
///
/// Needs at least two strictly increasing knots. Queries beyond either end
/// continue the outermost segment.
///
/// ```
/// use labmath::signal::LinearInterp;
///
/// let f = LinearInterp::new(vec![0.0, 1.0, 3.0], vec![0.0, 2.0, 2.0]).unwrap();
/// assert_eq!(f.eval(0.25), 0.5);
/// assert_eq!(f.eval(2.0), 2.0);
/// assert_eq!(f.eval(-1.0), -2.0);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterp<T> {
    xs: Vec<T>,
    ys: Vec<T>,
}

impl<T: Float> LinearInterp<T> {
    pub fn new(xs: Vec<T>, ys: Vec<T>) -> Result<Self, InterpError> {
        check_knots(&xs, &ys, 2)?;
        Ok(Self { xs, ys })
    }

    pub fn eval(&self, x: T) -> T {
        let i = segment(&self.xs, x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);
        let t = (x - x0) / (x1 - x0);
        y0 + t * (y1 - y0)
    }

    /// Slope of the segment containing `x`.
    pub fn slope(&self, x: T) -> T {
        let i = segment(&self.xs, x);
        (self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i])
    }

    pub fn xs(&self) -> &[T] {
        &self.xs
    }
}
