//! Overlapping frame buffering on flat sample buffers.
//!
//! [`buffer_overlap`] packs a 1-D signal into a column-major matrix of
//! `framelen`-long columns, where each column repeats the last `overlap`
//! samples of the previous one. It is the framing step of a short-time
//! Fourier transform and matches MATLAB `buffer(x, n, p)`:
//!
//! - the first column starts with `overlap` zeros, as if a column of silence
//!   preceded the signal;
//! - each column then takes `framelen - overlap` new samples;
//! - the column in which the input runs out is zero-filled to its end.
//!
//! The caller pre-allocates the output with [`frame_count`] columns. Input
//! and output are distinct slices, which the borrow checker guarantees.
//!
//! ```
//! use labmath::buffer::{buffer_overlap, frame_count};
//!
//! let x: Vec<f64> = (1..=5).map(f64::from).collect();
//! let cols = frame_count(x.len(), 4, 2).unwrap();
//! let mut out = vec![f64::NAN; cols * 4];
//! buffer_overlap(&mut out, &x, 4, 2).unwrap();
//! assert_eq!(out, [0.0, 0.0, 1.0, 2.0, 1.0, 2.0, 3.0, 4.0, 3.0, 4.0, 5.0, 0.0]);
//! ```

use crate::error::{ArrayError, Result};

/// Number of columns [`buffer_overlap`] produces: `ceil(input_len / (framelen - overlap))`.
///
/// Fails with [`ArrayError::IllPosed`] when `framelen` is zero or `overlap`
/// is not smaller than `framelen`, since no new samples would ever be consumed.
pub fn frame_count(input_len: usize, framelen: usize, overlap: usize) -> Result<usize> {
    if framelen == 0 {
        return Err(ArrayError::IllPosed("frame length must be positive"));
    }
    if overlap >= framelen {
        return Err(ArrayError::IllPosed("overlap must be smaller than the frame length"));
    }
    Ok(input_len.div_ceil(framelen - overlap))
}

/// Frame `input` into `out` as overlapping columns of `framelen` samples.
///
/// Returns the number of columns written. `out` must hold at least
/// `frame_count(input.len(), framelen, overlap) * framelen` values; only
/// that prefix is written, every position exactly once.
///
/// An empty input produces zero columns and leaves `out` untouched, as
/// `ceil(0 / (framelen - overlap))` is zero. No all-zero leading column is
/// emitted for it, whatever the overlap.
pub fn buffer_overlap(out: &mut [f64], input: &[f64], framelen: usize, overlap: usize) -> Result<usize> {
    let columns = frame_count(input.len(), framelen, overlap)?;
    let needed = columns * framelen;
    if out.len() < needed {
        return Err(ArrayError::LengthMismatch {
            expected: needed,
            found: out.len(),
        });
    }
    let frameinc = framelen - overlap;
    log::debug!(
        "buffer: {} samples into {} columns of {} (overlap {})",
        input.len(),
        columns,
        framelen,
        overlap
    );

    let mut samples = input.chunks(frameinc);
    for col in 0..columns {
        let start = col * framelen;
        if col == 0 {
            out[..overlap].fill(0.0);
        } else {
            // tail of the previous column becomes this column's head
            out.copy_within(start - overlap..start, start);
        }
        let body = &mut out[start + overlap..start + framelen];
        let fresh = samples.next().unwrap_or(&[]);
        body[..fresh.len()].copy_from_slice(fresh);
        body[fresh.len()..].fill(0.0);
    }
    Ok(columns)
}

/// [`buffer_overlap`] with no overlap: consecutive non-overlapping frames.
pub fn buffer_nooverlap(out: &mut [f64], input: &[f64], framelen: usize) -> Result<usize> {
    buffer_overlap(out, input, framelen, 0)
}
