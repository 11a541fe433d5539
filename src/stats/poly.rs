use crate::array::{Array, RealArray};
use crate::error::{ArrayError, Result};

/// Householder QR of the column-major `m x n` matrix `a` (m >= n), in place.
///
/// On return the upper triangle holds R and the part below the diagonal of
/// column `k` holds reflector `k` scaled so its leading entry is an
/// implicit 1. `tau[k]` is the matching reflector scale, so
/// `H_k = I - tau[k] v v^T`.
fn householder_qr(a: &mut [f64], m: usize, n: usize, tau: &mut [f64]) -> Result<()> {
    debug_assert!(m >= n && tau.len() == n);
    let scale = a.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
    // columns this small relative to the data are numerically dependent
    let tiny = scale * m as f64 * 1e-13;

    for k in 0..n {
        let col = k * m;
        let norm = a[col + k..col + m].iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm <= tiny || norm == 0.0 {
            return Err(ArrayError::IllPosed("polynomial fit is rank deficient"));
        }
        let head = a[col + k];
        // reflect onto -sigma e1 with sigma sharing head's sign to avoid cancellation
        let sigma = if head < 0.0 { -norm } else { norm };
        let v0 = head + sigma;
        tau[k] = v0 / sigma;
        for x in &mut a[col + k + 1..col + m] {
            *x /= v0;
        }

        for j in k + 1..n {
            let cj = j * m;
            let mut w = a[cj + k];
            for i in k + 1..m {
                w += a[col + i] * a[cj + i];
            }
            w *= tau[k];
            a[cj + k] -= w;
            for i in k + 1..m {
                a[cj + i] -= w * a[col + i];
            }
        }
        a[col + k] = -sigma;
    }
    Ok(())
}

/// Least-squares solution of `A x = b` from the packed factors of [`householder_qr`].
fn qr_solve(qr: &[f64], tau: &[f64], m: usize, n: usize, mut b: Vec<f64>) -> Vec<f64> {
    // b <- Q^T b
    for k in 0..n {
        let col = k * m;
        let mut w = b[k];
        for i in k + 1..m {
            w += qr[col + i] * b[i];
        }
        w *= tau[k];
        b[k] -= w;
        for i in k + 1..m {
            b[i] -= w * qr[col + i];
        }
    }
    // back substitution on R
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut s = b[i];
        for j in i + 1..n {
            s -= qr[j * m + i] * x[j];
        }
        x[i] = s / qr[i * m + i];
    }
    x
}

/// Least-squares polynomial of degree `order` through `(x, y)`, MATLAB `polyfit`.
///
/// Returns a `1 x (order + 1)` row of coefficients, highest power first.
/// `x` and `y` must be vectors with the same number of elements, and there
/// must be more samples than `order`.
///
/// ```
/// use labmath::{polyfit, RealArray};
/// let x = RealArray::row_vector(&[0.0, 1.0, 2.0, 3.0]);
/// let y = x.apply(|t| 2.0 * t * t - t + 3.0);
/// let c = polyfit(&x, &y, 2).unwrap();
/// for (got, want) in c.iter().zip([2.0, -1.0, 3.0]) {
///     assert!((got - want).abs() < 1e-10);
/// }
/// ```
pub fn polyfit(x: &RealArray, y: &RealArray, order: usize) -> Result<RealArray> {
    if !(x.is_vector() || x.is_empty()) || !(y.is_vector() || y.is_empty()) {
        return Err(ArrayError::IllPosed("polyfit needs vector inputs"));
    }
    if x.len() != y.len() {
        return Err(ArrayError::LengthMismatch {
            expected: x.len(),
            found: y.len(),
        });
    }
    let m = x.len();
    let n = order + 1;
    if order >= m {
        return Err(ArrayError::IllPosed("polynomial order must be less than the sample count"));
    }
    log::debug!("polyfit: degree {} through {} samples", order, m);

    // Vandermonde, column j holds x^(order - j)
    let xs = x.as_slice();
    let mut a = vec![0.0; m * n];
    for j in (0..n).rev() {
        let power = order - j;
        for i in 0..m {
            a[j * m + i] = if power == 0 { 1.0 } else { a[(j + 1) * m + i] * xs[i] };
        }
    }

    let mut tau = vec![0.0; n];
    householder_qr(&mut a, m, n, &mut tau)?;
    let coeffs = qr_solve(&a, &tau, m, n, y.as_slice().to_vec());
    Ok(Array::from_parts(1, n, coeffs))
}

/// Evaluate the polynomial with coefficients `c` (highest power first) at
/// every element of `x` by Horner's rule. The result has the shape of `x`;
/// empty `c` is the zero polynomial.
///
/// ```
/// use labmath::{polyval, RealArray};
/// let c = RealArray::row_vector(&[1.0, 0.0, -2.0]);
/// let y = polyval(&c, &RealArray::column_vector(&[0.0, 2.0, 3.0]));
/// assert_eq!(y.as_slice(), &[-2.0, 2.0, 7.0]);
/// ```
pub fn polyval(c: &RealArray, x: &RealArray) -> RealArray {
    let coeffs = c.as_slice();
    x.map(|t| coeffs.iter().fold(0.0, |acc, &ck| acc * t + ck))
}
