//! Vector-math provider: the numeric kernels typed array operations delegate to.
//!
//! This module is private. Each entry point is a pure function of its
//! inputs with no shared state, so callers never need to coordinate. The
//! array layer does not intercept IEEE special values produced here: `ln`
//! of a negative number is NaN, `1/0` is infinity, and so on.
//!
//! - [`unary`] — element-wise transcendental and arithmetic kernels
//! - [`sum`], [`dot`] — reductions
//! - [`matmul`] — column-major matrix product (register-blocked, see `gemm`)
//! - `fft` — complex FFT over contiguous lanes (requires the `fft` feature)

#[cfg(feature = "fft")]
pub(crate) mod fft;
mod gemm;

pub(crate) use gemm::matmul;

use core::f64::consts::PI;

/// Element-wise kernels offered by the provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Unary {
    Abs,
    Round,
    Square,
    Sqrt,
    Sin,
    SinPi,
    Cos,
    CosPi,
    Ln,
    Log2,
    Log10,
    Exp2,
    Recip,
    Powf(f64),
}

impl Unary {
    #[inline]
    fn eval(self, x: f64) -> f64 {
        match self {
            Unary::Abs => x.abs(),
            Unary::Round => x.round(),
            Unary::Square => x * x,
            Unary::Sqrt => x.sqrt(),
            Unary::Sin => x.sin(),
            Unary::SinPi => (PI * x).sin(),
            Unary::Cos => x.cos(),
            Unary::CosPi => (PI * x).cos(),
            Unary::Ln => x.ln(),
            Unary::Log2 => x.log2(),
            Unary::Log10 => x.log10(),
            Unary::Exp2 => x.exp2(),
            Unary::Recip => 1.0 / x,
            Unary::Powf(e) => x.powf(e),
        }
    }
}

/// Apply `op` to every element of `src`.
#[inline]
pub(crate) fn unary(op: Unary, src: &[f64]) -> Vec<f64> {
    log::trace!("vmath::unary {:?} over {} elements", op, src.len());
    src.iter().map(|&x| op.eval(x)).collect()
}

/// Sum of a slice; `0.0` when empty.
#[inline]
pub(crate) fn sum(a: &[f64]) -> f64 {
    // Four independent partial sums let the compiler vectorize the loop.
    let mut acc = [0.0; 4];
    let chunks = a.chunks_exact(4);
    let tail = chunks.remainder();
    for c in chunks {
        acc[0] += c[0];
        acc[1] += c[1];
        acc[2] += c[2];
        acc[3] += c[3];
    }
    let mut s = (acc[0] + acc[1]) + (acc[2] + acc[3]);
    for &x in tail {
        s += x;
    }
    s
}

/// Dot product of two equal-length slices.
#[inline]
pub(crate) fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(&x, &y)| x * y).sum()
}
