//! Descriptive statistics and polynomial fitting.
//!
//! - [`quantile`] — sample quantiles with MATLAB's interpolation rule
//! - [`sortrows`] — stable row sort of a table by one column
//! - [`polyfit`], [`polyval`] — least-squares polynomial fit and evaluation
//!
//! Per-column reductions (`mean`, `median`, `var`, `iqr`, ...) live on
//! [`RealArray`] itself.

mod poly;


pub use poly::{polyfit, polyval};

use crate::array::{Array, RealArray};
use crate::error::{check_index, ArrayError, Result};

/// Quantile of already sorted, NaN-free, non-empty data.
///
/// The `k`-th smallest of `n` samples sits at probability `(k + 0.5) / n`;
/// values between those points are linearly interpolated and values
/// outside them are clamped to the extremes.
pub(crate) fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let n = sorted.len();
    let pos = p * n as f64 - 0.5;
    if pos <= 0.0 {
        return sorted[0];
    }
    if pos >= (n - 1) as f64 {
        return sorted[n - 1];
    }
    let i = pos.floor() as usize;
    let frac = pos - i as f64;
    sorted[i] + frac * (sorted[i + 1] - sorted[i])
}

/// Non-NaN values of `lane`, ascending.
pub(crate) fn sorted_finite(lane: &[f64]) -> Vec<f64> {
    let mut s: Vec<f64> = lane.iter().copied().filter(|x| !x.is_nan()).collect();
    s.sort_by(f64::total_cmp);
    s
}

/// Quantiles of `x` at each probability in `p`, MATLAB `quantile(x, p)`.
///
/// NaNs in `x` are treated as missing. A vector `x` yields a result shaped
/// like `p`; a matrix yields `p.len() x ncols`, one column of quantiles per
/// column of `x`. A lane with no data yields NaN.
///
/// ```
/// use labmath::{quantile, RealArray};
/// let x = RealArray::row_vector(&[3.0, 1.0, 4.0, 2.0]);
/// let q = quantile(&x, &RealArray::row_vector(&[0.0, 0.5, 0.75])).unwrap();
/// assert_eq!(q.as_slice(), &[1.0, 2.5, 3.5]);
/// ```
pub fn quantile(x: &RealArray, p: &RealArray) -> Result<RealArray> {
    if p.iter().any(|&pk| !(0.0..=1.0).contains(&pk)) {
        return Err(ArrayError::IllPosed("probabilities must lie in [0, 1]"));
    }
    let at = |lane: &[f64]| -> Vec<f64> {
        let s = sorted_finite(lane);
        p.iter()
            .map(|&pk| if s.is_empty() { f64::NAN } else { quantile_sorted(&s, pk) })
            .collect()
    };
    if x.is_vector() {
        return Ok(Array::from_parts(p.nrows(), p.ncols(), at(x.as_slice())));
    }
    let mut data = Vec::with_capacity(p.len() * x.ncols());
    for j in 0..x.ncols() {
        data.extend(at(x.col_slice(j)));
    }
    Ok(Array::from_parts(p.len(), x.ncols(), data))
}

/// Rows of `table` stably sorted ascending by the values in `column`.
///
/// NaN keys sort after every number. Fails with
/// [`ArrayError::OutOfRange`] if `column` is not a column of `table`.
///
/// ```
/// use labmath::{sortrows, RealArray};
/// let t = RealArray::from_rows(3, 2, &[3.0, 0.0, 1.0, 1.0, 3.0, 2.0]);
/// let s = sortrows(&t, 0).unwrap();
/// assert_eq!(s, RealArray::from_rows(3, 2, &[1.0, 1.0, 3.0, 0.0, 3.0, 2.0]));
/// ```
pub fn sortrows(table: &RealArray, column: usize) -> Result<RealArray> {
    check_index(column, table.ncols())?;
    let key = table.col_slice(column);
    let mut order: Vec<usize> = (0..table.nrows()).collect();
    order.sort_by(|&a, &b| nan_last(key[a]).total_cmp(&nan_last(key[b])));
    Ok(Array::from_fn(table.nrows(), table.ncols(), |i, j| table[(order[i], j)]))
}

#[inline]
fn nan_last(x: f64) -> f64 {
    if x.is_nan() {
        f64::NAN.copysign(1.0)
    } else {
        x
    }
}
