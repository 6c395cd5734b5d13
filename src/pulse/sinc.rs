use ndarray::Array1;
use num_complex::Complex64;
use std::f64::consts::PI;

use crate::error::{Result, SlrError};

/// Apodisation applied on top of the sinc lobe:
/// `w(t) = (1-α) + α·cos(π·(bw/(tbw/2))·(t - T/2))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Window {
    Rectangular,
    /// α = 0.46
    Hamming,
    /// α = 0.5
    Hanning,
    Custom(f64),
}

impl Window {
    pub fn alpha(&self) -> f64 {
        match *self {
            Window::Rectangular => 0.0,
            Window::Hamming => 0.46,
            Window::Hanning => 0.5,
            Window::Custom(alpha) => alpha,
        }
    }
}

/// Normalised sinc, `sin(πu)/(πu)` with `sinc(0) = 1`.
pub fn sinc(u: f64) -> f64 {
    if u == 0.0 {
        1.0
    } else {
        let pu = PI * u;
        pu.sin() / pu
    }
}

/// Windowed sinc excitation envelope scaled to a flip angle.
#[derive(Debug, Clone, PartialEq)]
pub struct SincPulse {
    pub n_samples: usize,
    pub duration_ms: f64,
    /// Time-bandwidth product.
    pub tbw: f64,
    pub flip_angle_rad: f64,
    pub window: Window,
}

impl Default for SincPulse {
    fn default() -> Self {
        Self {
            n_samples: 256,
            duration_ms: 4.0,
            tbw: 4.0,
            flip_angle_rad: PI / 6.0,
            window: Window::Rectangular,
        }
    }
}

impl SincPulse {
    pub fn new(n_samples: usize, duration_ms: f64, tbw: f64, flip_angle_rad: f64) -> Self {
        Self {
            n_samples,
            duration_ms,
            tbw,
            flip_angle_rad,
            window: Window::Rectangular,
        }
    }

    pub fn with_window(mut self, window: Window) -> Self {
        self.window = window;
        self
    }

    pub fn bandwidth_khz(&self) -> f64 {
        self.tbw / self.duration_ms
    }

    /// Sample times spanning `[0, T]` inclusive.
    pub fn time_axis_ms(&self) -> Array1<f64> {
        Array1::linspace(0.0, self.duration_ms, self.n_samples)
    }

    /// Unscaled windowed sinc.
    pub fn envelope(&self) -> Result<Array1<f64>> {
        self.validate()?;
        let bw = self.bandwidth_khz();
        let alpha = self.window.alpha();
        let half = self.duration_ms / 2.0;
        let window_rate = bw / (self.tbw / 2.0);
        Ok(self.time_axis_ms().mapv(|t| {
            let w = (1.0 - alpha) + alpha * (PI * window_rate * (t - half)).cos();
            w * sinc(bw * (t - half))
        }))
    }

    /// RF samples whose sum is the flip angle.
    pub fn samples(&self) -> Result<Array1<f64>> {
        let envelope = self.envelope()?;
        let area = envelope.sum();
        if area == 0.0 || !area.is_finite() {
            return Err(SlrError::invalid(format!(
                "envelope area is {area}, cannot scale to a flip angle"
            )));
        }
        tracing::trace!(
            n = self.n_samples,
            tbw = self.tbw,
            alpha = self.window.alpha(),
            "sinc envelope"
        );
        Ok(envelope * (self.flip_angle_rad / area))
    }

    pub fn samples_complex(&self) -> Result<Array1<Complex64>> {
        Ok(self.samples()?.mapv(|v| Complex64::new(v, 0.0)))
    }

    fn validate(&self) -> Result<()> {
        if self.n_samples == 0 {
            return Err(SlrError::invalid("sinc pulse needs at least one sample"));
        }
        if !(self.duration_ms > 0.0) {
            return Err(SlrError::invalid(format!(
                "duration must be positive, got {} ms",
                self.duration_ms
            )));
        }
        if !(self.tbw > 0.0) {
            return Err(SlrError::invalid(format!(
                "time-bandwidth product must be positive, got {}",
                self.tbw
            )));
        }
        let alpha = self.window.alpha();
        if !(0.0..=1.0).contains(&alpha) {
            return Err(SlrError::invalid(format!(
                "window coefficient must lie in [0, 1], got {alpha}"
            )));
        }
        Ok(())
    }
}
