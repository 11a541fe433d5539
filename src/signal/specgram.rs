use crate::array::{Array, ComplexArray, RealArray};
use crate::error::{ArrayError, Result};
use crate::vmath::fft;

use super::{buffer, hanning};

/// Short-time Fourier transform of a signal, see [`specgram`].
#[derive(Debug, Clone, PartialEq)]
pub struct Specgram {
    /// One-sided spectrum, one row per frequency and one column per frame.
    pub spectrum: ComplexArray,
    /// Frequency of each row in Hz, column vector.
    pub frequencies: RealArray,
    /// Start time of each frame in seconds, column vector.
    pub times: RealArray,
}

impl Specgram {
    /// `|spectrum|`, element by element.
    pub fn magnitude(&self) -> RealArray {
        self.spectrum.abs()
    }
}

/// Spectrogram of `x`, MATLAB `specgram(x, nfft, fs, window, overlap)`.
///
/// `x` is framed into `window_size`-sample columns overlapping by `overlap`
/// samples (see [`buffer_overlap`](crate::buffer::buffer_overlap)), each
/// column is multiplied by `window` and transformed, and only the
/// non-negative frequency rows `0..=window_size/2` are kept. The window
/// defaults to [`hanning`]`(window_size)` and must otherwise have
/// `window_size` elements.
///
/// ```
/// use labmath::{specgram, RealArray};
///
/// let fs = 8.0;
/// let x = RealArray::from_fn(1, 32, |_, k| (2.0 * std::f64::consts::PI * 2.0 * k as f64 / fs).sin());
/// let s = specgram(&x, 8, fs, None, 4).unwrap();
/// assert_eq!(s.spectrum.shape(), (5, 8));
/// assert_eq!(s.frequencies.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(s.times[1], 0.5);
/// ```
pub fn specgram(
    x: &RealArray,
    window_size: usize,
    sampling_rate: f64,
    window: Option<&RealArray>,
    overlap: usize,
) -> Result<Specgram> {
    let default_window;
    let window = match window {
        Some(w) => w,
        None => {
            default_window = hanning(window_size);
            &default_window
        }
    };
    if window.len() != window_size {
        return Err(ArrayError::LengthMismatch {
            expected: window_size,
            found: window.len(),
        });
    }

    let frames = buffer(x, window_size, overlap)?;
    let ncols = frames.ncols();
    log::debug!(
        "specgram: {} samples, {} frames of {} at {} Hz",
        x.len(),
        ncols,
        window_size,
        sampling_rate
    );

    let taper = window.as_slice();
    let windowed: Vec<f64> = frames
        .as_slice()
        .chunks(window_size)
        .flat_map(|frame| frame.iter().zip(taper).map(|(&s, &w)| s * w))
        .collect();
    // transform by column even when a frame is a single sample
    let full = Array::from_parts(window_size, ncols, fft::forward_real_lanes(&windowed, window_size));
    let nfreq = window_size / 2 + 1;
    let spectrum = full.subarray(0..nfreq.min(window_size), 0..ncols)?;

    let bin = sampling_rate / window_size as f64;
    let frequencies = Array::from_fn(spectrum.nrows(), 1, |k, _| k as f64 * bin);
    let hop = (window_size - overlap) as f64 / sampling_rate;
    let times = Array::from_fn(ncols, 1, |k, _| k as f64 * hop);

    Ok(Specgram {
        spectrum,
        frequencies,
        times,
    })
}
