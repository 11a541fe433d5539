use num_traits::Float;

use super::{check_knots, segment, InterpError};

/// Natural cubic spline (zero second derivative at both ends).
///
/// Construction solves the tridiagonal system for the knot second
/// derivatives `m`; evaluation uses the two-sided form
///
/// ```text
/// S(x) = (m[i] (x[i+1]-x)^3 + m[i+1] (x-x[i])^3) / 6h
///      + (y[i]/h - m[i] h/6) (x[i+1]-x) + (y[i+1]/h - m[i+1] h/6) (x-x[i])
/// ```
///
/// Needs at least three strictly increasing knots.
///
/// ```
/// use labmath::signal::CubicSpline;
///
/// let s: CubicSpline<f64> = CubicSpline::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 0.0, 1.0]).unwrap();
/// assert!((s.eval(2.0) - 0.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline<T> {
    xs: Vec<T>,
    ys: Vec<T>,
    m: Vec<T>,
}

impl<T: Float> CubicSpline<T> {
    pub fn new(xs: Vec<T>, ys: Vec<T>) -> Result<Self, InterpError> {
        check_knots(&xs, &ys, 3)?;
        let n = xs.len();
        let six = T::from(6.0).unwrap_or_else(T::one);
        let two = T::one() + T::one();

        let h: Vec<T> = xs.windows(2).map(|w| w[1] - w[0]).collect();
        let slope: Vec<T> = (0..n - 1).map(|i| (ys[i + 1] - ys[i]) / h[i]).collect();

        // interior rows 1..n-1 of the system; ends are pinned to zero
        let k = n - 2;
        let sub: Vec<T> = (0..k).map(|r| h[r]).collect();
        let diag: Vec<T> = (0..k).map(|r| two * (h[r] + h[r + 1])).collect();
        let sup: Vec<T> = (0..k).map(|r| h[r + 1]).collect();
        let rhs: Vec<T> = (0..k).map(|r| six * (slope[r + 1] - slope[r])).collect();
        let interior = solve_tridiagonal(&sub, &diag, &sup, rhs);

        let mut m = Vec::with_capacity(n);
        m.push(T::zero());
        m.extend(interior);
        m.push(T::zero());
        Ok(Self { xs, ys, m })
    }

    pub fn eval(&self, x: T) -> T {
        let i = segment(&self.xs, x);
        let six = T::from(6.0).unwrap_or_else(T::one);
        let h = self.xs[i + 1] - self.xs[i];
        let left = self.xs[i + 1] - x;
        let right = x - self.xs[i];
        let (m0, m1) = (self.m[i], self.m[i + 1]);
        (m0 * left * left * left + m1 * right * right * right) / (six * h)
            + (self.ys[i] / h - m0 * h / six) * left
            + (self.ys[i + 1] / h - m1 * h / six) * right
    }

    /// Second derivative at each knot.
    pub fn second_derivatives(&self) -> &[T] {
        &self.m
    }

    pub fn xs(&self) -> &[T] {
        &self.xs
    }
}

/// Thomas algorithm. `sub[0]` and `sup[k-1]` are ignored.
fn solve_tridiagonal<T: Float>(sub: &[T], diag: &[T], sup: &[T], mut rhs: Vec<T>) -> Vec<T> {
    let k = diag.len();
    if k == 0 {
        return rhs;
    }
    let mut c = vec![T::zero(); k];
    let mut pivot = diag[0];
    c[0] = sup[0] / pivot;
    rhs[0] = rhs[0] / pivot;
    for r in 1..k {
        pivot = diag[r] - sub[r] * c[r - 1];
        c[r] = sup[r] / pivot;
        rhs[r] = (rhs[r] - sub[r] * rhs[r - 1]) / pivot;
    }
    for r in (0..k - 1).rev() {
        rhs[r] = rhs[r] - c[r] * rhs[r + 1];
    }
    rhs
}
