//! Small-tip prediction of the excitation magnitude.
//!
//! For low flip angles and the constant-gradient convention of
//! [`crate::pulse::gradient::constant_gradient`], `|mxy(x)|` is the magnitude
//! of the Fourier transform of the RF envelope evaluated at `x` cycles.

use ndarray::{Array1, ArrayView1};
use num_complex::Complex64;
use rustfft::FftPlanner;
use std::f64::consts::PI;

use crate::error::{Result, SlrError};

/// `|FFT(rf)|` zero-padded to `n_fft` bins.
///
/// Bin `k` predicts `|mxy|` at `x = k·N/n_fft`; see [`spectrum_axis`].
pub fn small_tip_spectrum(rf: &ArrayView1<Complex64>, n_fft: usize) -> Result<Array1<f64>> {
    if rf.is_empty() {
        return Err(SlrError::invalid("rf is empty"));
    }
    if n_fft < rf.len() {
        return Err(SlrError::invalid(format!(
            "n_fft ({n_fft}) is shorter than the pulse ({})",
            rf.len()
        )));
    }

    let mut buffer: Vec<Complex64> = rf
        .iter()
        .copied()
        .chain(std::iter::repeat(Complex64::new(0.0, 0.0)))
        .take(n_fft)
        .collect();
    let fft = FftPlanner::<f64>::new().plan_fft_forward(n_fft);
    fft.process(&mut buffer);

    Ok(buffer.iter().map(|v| v.norm()).collect())
}

/// Dimensionless position of every bin of [`small_tip_spectrum`]. Bins past
/// the middle wrap to negative positions.
pub fn spectrum_axis(n_samples: usize, n_fft: usize) -> Array1<f64> {
    let half = (n_fft + 1) / 2;
    let step = n_samples as f64 / n_fft as f64;
    (0..n_fft)
        .map(|k| {
            let k = if k >= half { k as f64 - n_fft as f64 } else { k as f64 };
            k * step
        })
        .collect()
}

/// `|Σ rf_n·exp(-i·2π·x·n/N)|` at arbitrary positions.
pub fn small_tip_profile(rf: &ArrayView1<Complex64>, x: &ArrayView1<f64>) -> Result<Array1<f64>> {
    if rf.is_empty() {
        return Err(SlrError::invalid("rf is empty"));
    }
    let n = rf.len() as f64;
    Ok(x.mapv(|xv| {
        rf.iter()
            .enumerate()
            .map(|(i, &r)| r * Complex64::from_polar(1.0, -2.0 * PI * xv * i as f64 / n))
            .sum::<Complex64>()
            .norm()
    }))
}
