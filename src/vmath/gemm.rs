//! Column-major matrix multiply, `C += A * B`.
//!
//! A 4x4 register tile accumulates the full k-block before touching `C`,
//! with k-blocking (`KC`) to keep the A panel in cache. Edge rows and
//! columns that do not fill a tile fall back to axpy-style loops.

const MR: usize = 4;
const NR: usize = 4;
const KC: usize = 256;

/// `c += a * b` where `a` is `m x n`, `b` is `n x p`, `c` is `m x p`,
/// all flat column-major slices. `c` is usually zero on entry.
pub(crate) fn matmul(a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, p: usize) {
    debug_assert_eq!(a.len(), m * n);
    debug_assert_eq!(b.len(), n * p);
    debug_assert_eq!(c.len(), m * p);
    log::trace!("vmath::matmul {}x{} * {}x{}", m, n, n, p);

    let m_tiled = m - m % MR;
    let p_tiled = p - p % NR;

    for k0 in (0..n).step_by(KC) {
        let k1 = (k0 + KC).min(n);

        for j0 in (0..p_tiled).step_by(NR) {
            for i0 in (0..m_tiled).step_by(MR) {
                let mut tile = [[0.0_f64; MR]; NR];
                for k in k0..k1 {
                    let a_col = &a[k * m + i0..k * m + i0 + MR];
                    for (jj, acc) in tile.iter_mut().enumerate() {
                        let b_kj = b[(j0 + jj) * n + k];
                        for (ii, slot) in acc.iter_mut().enumerate() {
                            *slot += a_col[ii] * b_kj;
                        }
                    }
                }
                for (jj, acc) in tile.iter().enumerate() {
                    let c_col = &mut c[(j0 + jj) * m + i0..(j0 + jj) * m + i0 + MR];
                    for (dst, &v) in c_col.iter_mut().zip(acc) {
                        *dst += v;
                    }
                }
            }

            // rows left over below the last full tile
            for j in j0..j0 + NR {
                for k in k0..k1 {
                    let b_kj = b[j * n + k];
                    for i in m_tiled..m {
                        c[j * m + i] += a[k * m + i] * b_kj;
                    }
                }
            }
        }

        // columns left over right of the last full tile
        for j in p_tiled..p {
            for k in k0..k1 {
                let b_kj = b[j * n + k];
                for i in 0..m {
                    c[j * m + i] += a[k * m + i] * b_kj;
                }
            }
        }
    }
}
