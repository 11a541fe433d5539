use core::fmt::{self, Write as _};

use crate::error::{ArrayError, Result};
use crate::traits::Element;

use super::Array;

// ── Map ─────────────────────────────────────────────────────────────

impl<T: Copy> Array<T> {
    /// Apply a function to every element, producing a new array.
    ///
    /// ```
    /// use labmath::RealArray;
    /// let m = RealArray::from_slice(2, 2, &[1.0, 4.0, 9.0, 16.0]);
    /// let r = m.map(|x| x.sqrt());
    /// assert_eq!(r[(1, 1)], 4.0);
    /// let n = m.map(|x| x as usize);
    /// assert_eq!(n[(1, 0)], 4);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Array<U> {
        let data = self.iter().map(|&x| f(x)).collect();
        Array::from_parts(self.nrows, self.ncols, data)
    }

    /// Combine two same-shaped arrays element by element.
    pub fn zip_map<U: Copy, V>(&self, other: &Array<U>, f: impl Fn(T, U) -> V) -> Result<Array<V>> {
        if self.shape() != other.shape() {
            return Err(ArrayError::ShapeMismatch {
                expected: self.shape(),
                got: other.shape(),
            });
        }
        let data = self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Array::from_parts(self.nrows, self.ncols, data))
    }
}

// ── Reordering ──────────────────────────────────────────────────────

impl<T: Element> Array<T> {
    /// Swap rows and columns, reordering the data so the result is the
    /// column-major layout of the transposed matrix.
    ///
    /// ```
    /// use labmath::RealArray;
    /// let m = RealArray::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let t = m.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// ```
    pub fn transpose(&self) -> Self {
        Array::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }

    /// Reverse the order of rows within each column.
    ///
    /// ```
    /// use labmath::RealArray;
    /// let m = RealArray::from_rows(3, 1, &[1.0, 2.0, 3.0]);
    /// assert_eq!(m.flipud().as_slice(), &[3.0, 2.0, 1.0]);
    /// ```
    pub fn flipud(&self) -> Self {
        let last = self.nrows.saturating_sub(1);
        Array::from_fn(self.nrows, self.ncols, |i, j| self[(last - i, j)])
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.nrows;
        let n = self.ncols;

        let mut widths = vec![0; n];
        for (j, width) in widths.iter_mut().enumerate() {
            for i in 0..m {
                let w = WriteCounting::count(|wc| write!(wc, "{}", self[(i, j)]));
                *width = (*width).max(w);
            }
        }

        for i in 0..m {
            write!(f, "│")?;
            for (j, width) in widths.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", self[(i, j)], width = width)?;
            }
            write!(f, "│")?;
            if i + 1 < m {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}
