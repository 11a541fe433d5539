//! Signal-processing functions built on [`Array`](crate::Array).
//!
//! - [`buffer`] — overlapping frames of a signal as matrix columns
//! - [`hamming`], [`hanning`] — tapering windows
//! - [`specgram`] — short-time Fourier transform (requires the `fft` feature)
//! - [`interp1`] — 1-D interpolation with [`LinearInterp`] and [`CubicSpline`] kernels

pub mod interp;
#[cfg(feature = "fft")]
mod specgram;
mod windows;

#[cfg(test)]
mod tests;

pub use interp::{interp1, CubicSpline, Interp1Method, InterpError, LinearInterp};
#[cfg(feature = "fft")]
pub use specgram::{specgram, Specgram};
pub use windows::{hamming, hanning};

use crate::array::{Array, RealArray};
use crate::buffer::{buffer_overlap, frame_count};
use crate::error::Result;

/// Frame the elements of `x` into an `n x k` matrix whose columns overlap
/// by `p` samples, MATLAB `buffer(x, n, p)`.
///
/// ```
/// use labmath::{buffer, RealArray};
/// let x = RealArray::row_vector(&[1.0, 2.0, 3.0, 4.0, 5.0]);
/// let b = buffer(&x, 4, 2).unwrap();
/// assert_eq!(b.shape(), (4, 3));
/// assert_eq!(b.col_slice(2), &[3.0, 4.0, 5.0, 0.0]);
/// ```
pub fn buffer(x: &RealArray, n: usize, p: usize) -> Result<RealArray> {
    let columns = frame_count(x.len(), n, p)?;
    let mut out = vec![0.0; columns * n];
    buffer_overlap(&mut out, x.as_slice(), n, p)?;
    Ok(Array::from_parts(n, columns, out))
}
