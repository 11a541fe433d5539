use num_complex::Complex;
use rustfft::FftPlanner;

/// Forward FFT of every `lane_len`-long lane of `data`, in place.
///
/// `data.len()` must be a multiple of `lane_len`. One plan serves all lanes.
pub(crate) fn forward_lanes(data: &mut [Complex<f64>], lane_len: usize) {
    if lane_len == 0 || data.is_empty() {
        return;
    }
    debug_assert_eq!(data.len() % lane_len, 0);
    log::trace!(
        "vmath::fft {} lanes of length {}",
        data.len() / lane_len,
        lane_len
    );
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(lane_len);
    // rustfft treats a buffer longer than the plan as consecutive transforms
    fft.process(data);
}

/// Forward FFT of real lanes, returning complex output of the same layout.
pub(crate) fn forward_real_lanes(data: &[f64], lane_len: usize) -> Vec<Complex<f64>> {
    let mut buf: Vec<Complex<f64>> = data.iter().map(|&x| Complex::new(x, 0.0)).collect();
    forward_lanes(&mut buf, lane_len);
    buf
}
