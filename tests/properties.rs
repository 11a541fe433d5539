use labmath::{
    buffer_overlap, interp1, ArrayError, ComplexArray, Complex, IntArray, Interp1Method, RealArray,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Deterministic pseudo-random fill so the sweeps below cover varied data.
fn lcg_array(nrows: usize, ncols: usize, seed: u64) -> RealArray {
    let mut state = seed;
    let data: Vec<f64> = (0..nrows * ncols)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            // a third of the values are exact zeros
            match (state >> 33) % 3 {
                0 => 0.0,
                r => r as f64 * ((state >> 40) % 17) as f64 - 8.0,
            }
        })
        .collect();
    RealArray::from_vec(nrows, ncols, data)
}

const SHAPES: [(usize, usize); 8] = [(0, 0), (0, 3), (1, 1), (1, 7), (5, 1), (3, 4), (4, 3), (6, 6)];

// ── Reshape ─────────────────────────────────────────────────────────

#[test]
fn reshape_within_capacity_is_exact() {
    init_logging();
    let mut a = RealArray::with_capacity(2, 3, 12).unwrap();
    for r in 0..=12 {
        for c in 0..=12 {
            let before = a.shape();
            let res = a.set_shape(r, c);
            if r * c <= 12 {
                assert!(res.is_ok());
                assert_eq!(a.shape(), (r, c));
            } else {
                assert_eq!(
                    res,
                    Err(ArrayError::CapacityExceeded { requested: r * c, capacity: 12 })
                );
                assert_eq!(a.shape(), before);
            }
        }
    }
}

// ── Transpose ───────────────────────────────────────────────────────

#[test]
fn transpose_is_an_involution() {
    for (k, &(r, c)) in SHAPES.iter().enumerate() {
        let a = lcg_array(r, c, k as u64);
        let t = a.transpose();
        assert_eq!(t.shape(), (c, r));
        assert_eq!(t.transpose(), a);
    }
    let z = ComplexArray::from_fn(2, 3, |i, j| Complex::new(i as f64, j as f64));
    assert_eq!(z.transpose().transpose(), z);
}

// ── Concatenation ───────────────────────────────────────────────────

#[test]
fn concatenate_column_vectors_shape_and_failures() {
    let cols: Vec<RealArray> = (0..4).map(|k| lcg_array(5, 1, 10 + k)).collect();
    let refs: Vec<&RealArray> = cols.iter().collect();
    let joined = RealArray::concatenate_column_vectors(&refs).unwrap();
    assert_eq!(joined.shape(), (5, 4));
    for (k, col) in cols.iter().enumerate() {
        assert_eq!(joined.col_slice(k), col.as_slice());
    }

    let wide = RealArray::zeros(5, 2);
    assert!(matches!(
        RealArray::concatenate_column_vectors(&[&cols[0], &wide]),
        Err(ArrayError::ShapeMismatch { .. })
    ));
    let short = RealArray::zeros(4, 1);
    assert!(matches!(
        RealArray::concatenate_column_vectors(&[&cols[0], &short]),
        Err(ArrayError::ShapeMismatch { .. })
    ));
}

// ── Search and gather ───────────────────────────────────────────────

#[test]
fn find_then_gather_yields_nonzeros_in_order() {
    for (k, &(r, c)) in SHAPES.iter().enumerate() {
        let a = lcg_array(r, c, 100 + k as u64);
        let idx = a.find();
        let picked = a.elements_with_indices(&idx).unwrap();
        let expected: Vec<f64> = a.iter().copied().filter(|&x| x != 0.0).collect();
        assert_eq!(picked.as_slice(), expected.as_slice());
        assert!(idx.as_slice().windows(2).all(|w| w[0] < w[1]));

        let all = idx.as_slice();
        for n in 0..=all.len() + 1 {
            let first = a.find_first(n);
            let last = a.find_last(n);
            let take = n.min(all.len());
            assert_eq!(first.as_slice(), &all[..take]);
            assert_eq!(last.as_slice(), &all[all.len() - take..]);
        }
    }
}

// ── Frame buffering ─────────────────────────────────────────────────

#[test]
fn buffer_overlap_exact_multiple() {
    init_logging();
    let input: Vec<f64> = (1..=10).map(f64::from).collect();
    let mut out = vec![-1.0; 20];
    let cols = buffer_overlap(&mut out, &input, 4, 2).unwrap();
    assert_eq!(cols, 5);
    let expected = [
        [0.0, 0.0, 1.0, 2.0],
        [1.0, 2.0, 3.0, 4.0],
        [3.0, 4.0, 5.0, 6.0],
        [5.0, 6.0, 7.0, 8.0],
        [7.0, 8.0, 9.0, 10.0],
    ];
    for (k, col) in out.chunks(4).enumerate() {
        assert_eq!(col, &expected[k]);
    }
}

#[test]
fn buffer_overlap_partial_last_column() {
    let input = [1.0, 2.0, 3.0, 4.0, 5.0];
    let mut out = vec![-1.0; 12];
    assert_eq!(buffer_overlap(&mut out, &input, 4, 2).unwrap(), 3);
    assert_eq!(&out[..4], &[0.0, 0.0, 1.0, 2.0]);
    assert_eq!(&out[4..8], &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(&out[8..], &[3.0, 4.0, 5.0, 0.0]);
}

// ── Extrema ─────────────────────────────────────────────────────────

#[test]
fn extrema_indices_point_at_first_tie() {
    for (k, &(r, c)) in SHAPES.iter().enumerate() {
        let a = lcg_array(r, c, 200 + k as u64);
        if a.is_empty() {
            continue;
        }
        let (mins, imin) = a.min_and_indices();
        let (maxs, imax) = a.max_and_indices();
        let lanes: Vec<Vec<f64>> = if r == 1 {
            vec![a.as_slice().to_vec()]
        } else {
            (0..c).map(|j| a.col_slice(j).to_vec()).collect()
        };
        for (j, lane) in lanes.iter().enumerate() {
            let lo = lane.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = lane.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            assert_eq!(mins[j], lo);
            assert_eq!(maxs[j], hi);
            assert_eq!(imin[j], lane.iter().position(|&x| x == lo).unwrap());
            assert_eq!(imax[j], lane.iter().position(|&x| x == hi).unwrap());
        }
    }
}

// ── Matrix product ──────────────────────────────────────────────────

#[test]
fn matmult_spot_check_and_mismatch() {
    let a = RealArray::from_rows(2, 3, &[1.0, -2.0, 0.5, 3.0, 0.0, 4.0]);
    let b = RealArray::from_rows(3, 2, &[2.0, 1.0, 1.0, -1.0, 4.0, 2.0]);
    let c = a.matmult(&b).unwrap();
    assert_eq!(c, RealArray::from_rows(2, 2, &[2.0, 4.0, 22.0, 11.0]));

    let err = a.matmult(&RealArray::zeros(2, 2)).unwrap_err();
    assert!(matches!(err, ArrayError::ShapeMismatch { .. }));
}

// ── Interpolation ───────────────────────────────────────────────────

#[test]
fn interp1_linear_and_extrapolation_constant() {
    let x = RealArray::row_vector(&[0.0, 1.0, 2.0]);
    let v = RealArray::row_vector(&[0.0, 10.0, 20.0]);
    let inside = interp1(&x, &v, &RealArray::row_vector(&[0.5, 1.5]), Interp1Method::Linear, 0.0).unwrap();
    assert_eq!(inside.as_slice(), &[5.0, 15.0]);
    let outside = interp1(&x, &v, &RealArray::row_vector(&[-1.0, 3.0]), Interp1Method::Linear, -7.5).unwrap();
    assert_eq!(outside.as_slice(), &[-7.5, -7.5]);
}

// ── Failures leave the receiver untouched ──────────────────────────

#[test]
fn failed_scatter_writes_nothing() {
    let mut a = IntArray::from_slice(2, 2, &[1, 2, 3, 4]);
    let before = a.clone();
    let idx = IntArray::row_vector(&[0, 9]);
    let src = IntArray::row_vector(&[7, 8]);
    assert!(a.set_elements_with_indices(&idx, &src).is_err());
    assert_eq!(a, before);
}
