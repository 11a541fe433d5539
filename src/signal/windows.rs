use core::f64::consts::PI;

use crate::array::RealArray;

/// Symmetric Hamming window of length `n`, as a column vector.
///
/// `w[k] = 0.54 - 0.46 cos(2πk / (n - 1))` for `k = 0..n`. A one-point
/// window is `[1.0]`.
///
/// ```
/// use labmath::hamming;
/// let w = hamming(5);
/// assert_eq!(w.shape(), (5, 1));
/// assert!((w[0] - 0.08).abs() < 1e-12);
/// assert!((w[2] - 1.0).abs() < 1e-12);
/// ```
pub fn hamming(n: usize) -> RealArray {
    if n == 1 {
        return RealArray::column_vector(&[1.0]);
    }
    let denom = n.saturating_sub(1) as f64;
    let w: Vec<f64> = (0..n)
        .map(|k| 0.54 - 0.46 * (2.0 * PI * k as f64 / denom).cos())
        .collect();
    RealArray::from_vec(n, 1, w)
}

/// Hann window of length `n` in the MATLAB `hanning` form, as a column vector.
///
/// `w[k] = 0.5 (1 - cos(2πk / (n + 1)))` for `k = 1..=n`, so neither end
/// is zero.
pub fn hanning(n: usize) -> RealArray {
    let denom = (n + 1) as f64;
    let w: Vec<f64> = (1..=n)
        .map(|k| 0.5 * (1.0 - (2.0 * PI * k as f64 / denom).cos()))
        .collect();
    RealArray::from_vec(n, 1, w)
}
