//! MATLAB-style array constructors.

use crate::array::{Array, RealArray};
use crate::traits::Element;

/// `nrows x ncols` array of `0.0`.
pub fn zeros(nrows: usize, ncols: usize) -> RealArray {
    RealArray::zeros(nrows, ncols)
}

/// `nrows x ncols` array of `1.0`.
pub fn ones(nrows: usize, ncols: usize) -> RealArray {
    RealArray::filled(nrows, ncols, 1.0)
}

/// `nrows x ncols` array of NaN, the usual "missing" placeholder.
pub fn nan(nrows: usize, ncols: usize) -> RealArray {
    RealArray::filled(nrows, ncols, f64::NAN)
}

/// Row vector of `n` evenly spaced points from `start` to `end` inclusive.
///
/// `n == 1` yields `[end]` and `n == 0` an empty `1 x 0` vector, as in MATLAB.
///
/// ```
/// use labmath::linspace;
/// let v = linspace(0.0, 1.0, 5);
/// assert_eq!(v.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(3.0, 7.0, 1).as_slice(), &[7.0]);
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> RealArray {
    match n {
        0 => RealArray::zeros(1, 0),
        1 => RealArray::row_vector(&[end]),
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut v: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            // pin the endpoint against accumulated rounding
            v[n - 1] = end;
            RealArray::from_vec(1, n, v)
        }
    }
}

/// Tile `a` into an `(m * a.nrows()) x (n * a.ncols())` array.
///
/// Panics if either tiled dimension overflows `usize`.
///
/// ```
/// use labmath::{repmat, IntArray};
/// let a = IntArray::column_vector(&[1, 2]);
/// let t = repmat(&a, 2, 2);
/// assert_eq!(t.shape(), (4, 2));
/// assert_eq!(t.as_slice(), &[1, 2, 1, 2, 1, 2, 1, 2]);
/// ```
pub fn repmat<T: Element>(a: &Array<T>, m: usize, n: usize) -> Array<T> {
    let (r, c) = a.shape();
    let rows = r.checked_mul(m).expect("array size overflows usize");
    let cols = c.checked_mul(n).expect("array size overflows usize");
    if r == 0 || c == 0 {
        return Array::zeros(rows, cols);
    }
    Array::from_fn(rows, cols, |i, j| a[(i % r, j % c)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "array size overflows usize")]
    fn repmat_panics_on_overflowing_tiling() {
        let _ = repmat(&ones(2, 1), usize::MAX, 1);
    }

    #[test]
    fn filled_constructors() {
        assert!(zeros(2, 3).iter().all(|&x| x == 0.0));
        assert_eq!(ones(3, 1).as_slice(), &[1.0, 1.0, 1.0]);
        let n = nan(2, 2);
        assert_eq!(n.shape(), (2, 2));
        assert!(n.iter().all(|x| x.is_nan()));
    }

    #[test]
    fn linspace_edges() {
        assert_eq!(linspace(0.0, 1.0, 0).shape(), (1, 0));
        let v = linspace(1.0, -1.0, 3);
        assert_eq!(v.as_slice(), &[1.0, 0.0, -1.0]);
        let w = linspace(0.0, 0.3, 4);
        assert_eq!(w[3], 0.3);
    }

    #[test]
    fn repmat_matrix() {
        let a = RealArray::from_rows(1, 2, &[1.0, 2.0]);
        let t = repmat(&a, 2, 3);
        assert_eq!(t.shape(), (2, 6));
        assert_eq!(t[(1, 4)], 1.0);
        assert_eq!(t[(0, 5)], 2.0);
        assert_eq!(repmat(&a, 0, 3).shape(), (0, 6));
    }
}
