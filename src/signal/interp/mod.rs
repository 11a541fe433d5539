//! One-dimensional interpolation of tabulated data.
//!
//! [`LinearInterp`] and [`CubicSpline`] are the kernels, built once from
//! strictly increasing knots and evaluated at any number of points. They are
//! generic over [`num_traits::Float`]. [`interp1`] is the MATLAB-style entry
//! point over [`RealArray`]s: it accepts decreasing knots as well, and
//! replaces queries outside the knot range by a caller-supplied constant.
//!
//! ```
//! use labmath::{interp1, Interp1Method, RealArray};
//!
//! let x = RealArray::row_vector(&[0.0, 1.0, 2.0]);
//! let v = RealArray::row_vector(&[0.0, 10.0, 20.0]);
//! let xq = RealArray::row_vector(&[0.5, 1.5, 3.0]);
//! let vq = interp1(&x, &v, &xq, Interp1Method::Linear, -1.0).unwrap();
//! assert_eq!(vq.as_slice(), &[5.0, 15.0, -1.0]);
//! ```

mod linear;
mod spline;


pub use linear::LinearInterp;
pub use spline::CubicSpline;

use num_traits::Float;
use thiserror::Error;

use crate::array::{Array, RealArray};
use crate::error::{ArrayError, Result};

/// Errors from interpolant construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InterpError {
    /// Fewer knots than the method needs.
    #[error("not enough data points for interpolation")]
    TooFewPoints,
    /// Knots repeat or change direction.
    #[error("x values must be strictly monotonic")]
    NotSorted,
    /// Knot and value counts differ.
    #[error("x and y must have the same length")]
    LengthMismatch,
}

/// Interpolation method for [`interp1`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interp1Method {
    /// Piecewise linear between neighbouring knots.
    #[default]
    Linear,
    /// Natural cubic spline; two knots degrade to linear.
    Spline,
}

pub(crate) fn check_knots<T: Float>(xs: &[T], ys: &[T], min_points: usize) -> core::result::Result<(), InterpError> {
    if xs.len() != ys.len() {
        return Err(InterpError::LengthMismatch);
    }
    if xs.len() < min_points {
        return Err(InterpError::TooFewPoints);
    }
    // NaN knots fail the comparison too
    if xs.windows(2).all(|w| w[0] < w[1]) {
        Ok(())
    } else {
        Err(InterpError::NotSorted)
    }
}

/// Segment `i` with `xs[i] <= x < xs[i + 1]`, clamped to the first and last segment.
pub(crate) fn segment<T: Float>(xs: &[T], x: T) -> usize {
    debug_assert!(xs.len() >= 2);
    let last = xs.len() - 2;
    // partition_point counts knots <= x
    xs.partition_point(|&k| k <= x).saturating_sub(1).min(last)
}

/// Interpolate `(x, v)` at the points `xq`, MATLAB `interp1(x, v, xq, method, extrap)`.
///
/// `x` must be strictly increasing or strictly decreasing and have as many
/// elements as `v`. Queries outside `[min(x), max(x)]` evaluate to
/// `extrapolation`; NaN queries evaluate to NaN. The result has the shape
/// of `xq`.
pub fn interp1(
    x: &RealArray,
    v: &RealArray,
    xq: &RealArray,
    method: Interp1Method,
    extrapolation: f64,
) -> Result<RealArray> {
    if x.len() != v.len() {
        return Err(ArrayError::LengthMismatch {
            expected: x.len(),
            found: v.len(),
        });
    }
    let mut xs = x.as_slice().to_vec();
    let mut ys = v.as_slice().to_vec();
    if xs.len() >= 2 && xs[0] > xs[1] {
        xs.reverse();
        ys.reverse();
    }

    let eval: Box<dyn Fn(f64) -> f64> = match method {
        Interp1Method::Spline if xs.len() > 2 => {
            let s = CubicSpline::new(xs.clone(), ys)?;
            Box::new(move |q| s.eval(q))
        }
        _ => {
            let l = LinearInterp::new(xs.clone(), ys)?;
            Box::new(move |q| l.eval(q))
        }
    };

    let (lo, hi) = (xs[0], xs[xs.len() - 1]);
    let data = xq
        .iter()
        .map(|&q| {
            if q.is_nan() {
                f64::NAN
            } else if q < lo || q > hi {
                extrapolation
            } else {
                eval(q)
            }
        })
        .collect();
    Ok(Array::from_parts(xq.nrows(), xq.ncols(), data))
}
