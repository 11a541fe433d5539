//! # labmath
//!
//! Column-major, MATLAB-style numeric arrays with a small signal-processing
//! and statistics toolbox on top.
//!
//! ## Quick start
//!
//! ```
//! use labmath::{RealArray, linspace};
//!
//! // Column-major: (row, col) lives at col * nrows + row
//! let a = RealArray::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! assert_eq!(a.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
//!
//! // Reductions run down columns, like MATLAB
//! assert_eq!(a.sum().as_slice(), &[5.0, 7.0, 9.0]);
//!
//! let t = linspace(0.0, 1.0, 3);
//! assert_eq!(t.square().as_slice(), &[0.0, 0.25, 1.0]);
//! ```
//!
//! ## Modules
//!
//! - [`array`] — the generic [`Array<T>`] with [`RealArray`], [`IntArray`]
//!   and [`ComplexArray`] aliases, plus [`AnyArray`] when the element kind is
//!   only known at run time. Reshape within capacity, sub-array copies,
//!   gather/scatter by index, search, element-wise math, reductions.
//!
//! - [`buffer`](mod@buffer) — [`buffer_overlap`](buffer::buffer_overlap) frames a flat
//!   signal into overlapping columns in a caller-provided buffer.
//!
//! - [`signal`] — [`buffer`](signal::buffer), windows, [`specgram`] and
//!   [`interp1`].
//!
//! - [`stats`] — [`quantile`], [`sortrows`], [`polyfit`] and [`polyval`].
//!
//! - [`construct`] — [`zeros`], [`ones`], [`nan`], [`linspace`], [`repmat`].
//!
//! ## Errors
//!
//! Fallible operations return [`Result`] with an [`ArrayError`]. Checks run
//! before anything is written, so a failed call leaves its receiver as it
//! was. Floating-point edge cases are not errors: `log(-1)` is NaN.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade. No logger is installed by the
//! library.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `fft`   | yes     | `RealArray::fft` and `specgram` via `rustfft` |

pub mod array;
pub mod buffer;
pub mod construct;
pub mod error;
pub mod signal;
pub mod stats;
pub mod traits;

mod vmath;

pub use array::{AnyArray, Array, ComplexArray, IntArray, RealArray};
pub use buffer::{buffer_nooverlap, buffer_overlap};
pub use construct::{linspace, nan, ones, repmat, zeros};
pub use error::{ArrayError, Result};
pub use signal::{buffer, hamming, hanning, interp1, Interp1Method};
#[cfg(feature = "fft")]
pub use signal::{specgram, Specgram};
pub use stats::{polyfit, polyval, quantile, sortrows};
pub use traits::{Element, ElementKind};

pub use num_complex::Complex;
