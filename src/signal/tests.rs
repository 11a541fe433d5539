use super::*;
use crate::error::ArrayError;

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!((a - b).abs() < tol, "{msg}: {a} vs {b}");
}

// ── Windows ─────────────────────────────────────────────────────────

#[test]
fn hamming_is_symmetric() {
    let w = hamming(7);
    assert_eq!(w.shape(), (7, 1));
    for k in 0..7 {
        assert_near(w[k], w[6 - k], 1e-15, "symmetry");
    }
    assert_near(w[0], 0.08, 1e-12, "end");
    assert_near(w[3], 1.0, 1e-12, "peak");
}

#[test]
fn hamming_degenerate_lengths() {
    assert_eq!(hamming(0).shape(), (0, 1));
    assert_eq!(hamming(1).as_slice(), &[1.0]);
}

#[test]
fn hanning_matlab_form() {
    let w = hanning(3);
    // k = 1..3 over n + 1 = 4: 0.5, 1.0, 0.5
    assert_near(w[0], 0.5, 1e-15, "w0");
    assert_near(w[1], 1.0, 1e-15, "w1");
    assert_near(w[2], 0.5, 1e-15, "w2");
    assert!(hanning(16).iter().all(|&x| x > 0.0));
}

// ── buffer ──────────────────────────────────────────────────────────

#[test]
fn buffer_matrix_shape() {
    let x = RealArray::column_vector(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
    let b = buffer(&x, 4, 2).unwrap();
    assert_eq!(b.shape(), (4, 5));
    assert_eq!(b.col_slice(0), &[0.0, 0.0, 1.0, 2.0]);
    assert_eq!(b.col_slice(4), &[7.0, 8.0, 9.0, 10.0]);
}

#[test]
fn buffer_empty_and_errors() {
    let empty = RealArray::zeros(1, 0);
    assert_eq!(buffer(&empty, 4, 1).unwrap().shape(), (4, 0));
    let x = RealArray::row_vector(&[1.0, 2.0]);
    assert!(matches!(buffer(&x, 2, 2), Err(ArrayError::IllPosed(_))));
}

// ── specgram ────────────────────────────────────────────────────────

#[cfg(feature = "fft")]
mod spectral {
    use super::*;
    use core::f64::consts::PI;

    #[test]
    fn tone_lands_in_its_bin() {
        let fs = 64.0;
        let x = RealArray::from_fn(1, 256, |_, k| (2.0 * PI * 8.0 * k as f64 / fs).cos());
        let s = specgram(&x, 16, fs, None, 0).unwrap();
        assert_eq!(s.spectrum.shape(), (9, 16));
        assert_eq!(s.frequencies.shape(), (9, 1));
        assert_eq!(s.frequencies[2], 8.0);
        let mag = s.magnitude();
        // every full frame peaks at 8 Hz
        let (_, rows) = mag.max_and_indices();
        assert!(rows.iter().all(|&r| r == 2));
    }

    #[test]
    fn axes_follow_hop() {
        let x = RealArray::row_vector(&[1.0; 20]);
        let s = specgram(&x, 8, 100.0, None, 6).unwrap();
        assert_eq!(s.times.len(), 10);
        assert_near(s.times[3], 0.06, 1e-15, "t3");
        assert_eq!(s.frequencies.len(), 5);
        assert_near(s.frequencies[4], 50.0, 1e-12, "nyquist");
    }

    #[test]
    fn odd_window_keeps_half_plus_one() {
        let x = RealArray::row_vector(&[0.5; 14]);
        let w = hamming(7);
        let s = specgram(&x, 7, 7.0, Some(&w), 0).unwrap();
        assert_eq!(s.spectrum.shape(), (4, 2));
    }

    #[test]
    fn rectangular_window_dc() {
        let x = RealArray::row_vector(&[2.0; 8]);
        let ones = RealArray::filled(4, 1, 1.0);
        let s = specgram(&x, 4, 1.0, Some(&ones), 0).unwrap();
        for j in 0..2 {
            assert_near(s.spectrum[(0, j)].re, 8.0, 1e-12, "dc");
            assert!(s.spectrum[(1, j)].norm() < 1e-12);
        }
    }

    #[test]
    fn window_length_checked() {
        let x = RealArray::row_vector(&[1.0; 8]);
        let w = hamming(3);
        assert_eq!(
            specgram(&x, 4, 1.0, Some(&w), 0),
            Err(ArrayError::LengthMismatch { expected: 4, found: 3 })
        );
    }
}
