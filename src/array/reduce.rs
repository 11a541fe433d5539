//! Reductions for real arrays.
//!
//! Orientation follows MATLAB: a `1 x n` array is reduced along its single
//! row into a `1 x 1` result; any other shape is reduced down each column
//! into a `1 x ncols` result. The exception is [`sum2`](Array::sum2), which
//! always sums across rows.

use crate::stats::{quantile_sorted, sorted_finite};
use crate::vmath;

use super::{Array, IntArray, RealArray};

// ── Lanes ───────────────────────────────────────────────────────────

impl<T> Array<T> {
    /// `(lane_len, lane_count)`: the single row of a row vector, else the columns.
    #[inline]
    pub(crate) fn lanes(&self) -> (usize, usize) {
        if self.is_row_vector() {
            (self.ncols, 1)
        } else {
            (self.nrows, self.ncols)
        }
    }

    /// Lane `k` as a contiguous slice.
    #[inline]
    pub(crate) fn lane(&self, k: usize) -> &[T] {
        let (len, _) = self.lanes();
        &self.as_slice()[k * len..(k + 1) * len]
    }

    /// One value per lane, laid out as `1 x lane_count`.
    pub(crate) fn reduce_lanes<U>(&self, f: impl Fn(&[T]) -> U) -> Array<U> {
        let (_, count) = self.lanes();
        let data = (0..count).map(|k| f(self.lane(k))).collect();
        Array::from_parts(1, count, data)
    }
}

impl RealArray {
    /// Same-orientation output built lane by lane; `shrink` rows are dropped per lane.
    fn scan_lanes(&self, shrink: usize, f: impl Fn(&[f64], &mut Vec<f64>)) -> Self {
        let (len, count) = self.lanes();
        let out_len = len.saturating_sub(shrink);
        let mut data = Vec::with_capacity(out_len * count);
        for k in 0..count {
            f(self.lane(k), &mut data);
        }
        if self.is_row_vector() {
            Array::from_parts(1, out_len, data)
        } else {
            Array::from_parts(out_len, self.ncols, data)
        }
    }

    fn extremum(&self, better: impl Fn(f64, f64) -> bool) -> (RealArray, IntArray) {
        if self.is_empty() {
            return (Array::from_parts(1, 0, Vec::new()), Array::from_parts(1, 0, Vec::new()));
        }
        let picks = self.reduce_lanes(|lane| {
            // NaNs are skipped; an all-NaN lane reports NaN at position 0
            let mut best: Option<(f64, usize)> = None;
            for (i, &x) in lane.iter().enumerate() {
                if x.is_nan() {
                    continue;
                }
                match best {
                    Some((b, _)) if !better(x, b) => {}
                    _ => best = Some((x, i)),
                }
            }
            best.unwrap_or((f64::NAN, 0))
        });
        (picks.map(|(v, _)| v), picks.map(|(_, i)| i))
    }
}

// ── Extrema ─────────────────────────────────────────────────────────

impl RealArray {
    /// Minimum of each lane.
    pub fn min(&self) -> RealArray {
        self.min_and_indices().0
    }

    /// Minimum of each lane and its position within the lane.
    ///
    /// Ties resolve to the first occurrence. NaNs are ignored unless a lane
    /// holds nothing else. An empty array gives two `1 x 0` results.
    ///
    /// ```
    /// use labmath::RealArray;
    /// let m = RealArray::from_rows(3, 2, &[4.0, 1.0, 2.0, 1.0, 2.0, 0.0]);
    /// let (v, i) = m.min_and_indices();
    /// assert_eq!(v.as_slice(), &[2.0, 0.0]);
    /// assert_eq!(i.as_slice(), &[1, 2]);
    /// ```
    pub fn min_and_indices(&self) -> (RealArray, IntArray) {
        self.extremum(|x, best| x < best)
    }

    /// Maximum of each lane.
    pub fn max(&self) -> RealArray {
        self.max_and_indices().0
    }

    /// Maximum of each lane and its position within the lane.
    pub fn max_and_indices(&self) -> (RealArray, IntArray) {
        self.extremum(|x, best| x > best)
    }
}

// ── Moments and order statistics ────────────────────────────────────

impl RealArray {
    /// Sum of each lane.
    pub fn sum(&self) -> RealArray {
        self.reduce_lanes(vmath::sum)
    }

    /// Sum across each row, `nrows x 1`. MATLAB `sum(x, 2)`.
    ///
    /// ```
    /// use labmath::RealArray;
    /// let m = RealArray::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m.sum2().as_slice(), &[6.0, 15.0]);
    /// assert_eq!(m.sum().as_slice(), &[5.0, 7.0, 9.0]);
    /// ```
    pub fn sum2(&self) -> RealArray {
        let mut data = vec![0.0; self.nrows];
        for j in 0..self.ncols {
            for (acc, &x) in data.iter_mut().zip(self.col_slice(j)) {
                *acc += x;
            }
        }
        Array::from_parts(self.nrows, 1, data)
    }

    /// Arithmetic mean of each lane; NaN for an empty lane.
    pub fn mean(&self) -> RealArray {
        self.reduce_lanes(|lane| vmath::sum(lane) / lane.len() as f64)
    }

    /// Median of each lane; NaN when the lane is empty or holds a NaN.
    pub fn median(&self) -> RealArray {
        self.reduce_lanes(|lane| match sorted(lane) {
            None => f64::NAN,
            Some(s) if s.is_empty() => f64::NAN,
            Some(s) => {
                let mid = s.len() / 2;
                if s.len() % 2 == 1 {
                    s[mid]
                } else {
                    0.5 * (s[mid - 1] + s[mid])
                }
            }
        })
    }

    /// Sample variance of each lane (normalized by `n - 1`, or `1` when `n == 1`).
    pub fn var(&self) -> RealArray {
        self.reduce_lanes(|lane| {
            let n = lane.len();
            if n == 0 {
                return f64::NAN;
            }
            let mean = vmath::sum(lane) / n as f64;
            let ss: f64 = lane.iter().map(|&x| (x - mean) * (x - mean)).sum();
            ss / (n.max(2) - 1) as f64
        })
    }

    /// Interquartile range of each lane, using [`quantile`](crate::stats::quantile)
    /// positions. NaNs are treated as missing.
    pub fn iqr(&self) -> RealArray {
        self.reduce_lanes(|lane| {
            let s = sorted_finite(lane);
            if s.is_empty() {
                f64::NAN
            } else {
                quantile_sorted(&s, 0.75) - quantile_sorted(&s, 0.25)
            }
        })
    }

    /// Euclidean norm of all elements (Frobenius norm for matrices).
    pub fn norm(&self) -> f64 {
        vmath::dot(self.as_slice(), self.as_slice()).sqrt()
    }

    /// Running sum along each lane; same shape as `self`.
    pub fn cumsum(&self) -> RealArray {
        self.scan_lanes(0, |lane, out| {
            let mut acc = 0.0;
            out.extend(lane.iter().map(|&x| {
                acc += x;
                acc
            }));
        })
    }

    /// First differences along each lane; one element shorter per lane.
    ///
    /// ```
    /// use labmath::RealArray;
    /// let v = RealArray::row_vector(&[1.0, 4.0, 9.0, 16.0]);
    /// assert_eq!(v.diff().as_slice(), &[3.0, 5.0, 7.0]);
    /// ```
    pub fn diff(&self) -> RealArray {
        self.scan_lanes(1, |lane, out| {
            out.extend(lane.windows(2).map(|w| w[1] - w[0]));
        })
    }
}

/// Sorted copy of `lane`, or `None` if it holds a NaN.
fn sorted(lane: &[f64]) -> Option<Vec<f64>> {
    if lane.iter().any(|x| x.is_nan()) {
        return None;
    }
    let mut s = lane.to_vec();
    s.sort_by(f64::total_cmp);
    Some(s)
}
