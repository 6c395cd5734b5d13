//! Conversions between the simulator's dimensionless axis and physical units.

use ndarray::{Array, Array1, ArrayView, ArrayView1, Dimension};

use crate::config::PhysicalConstants;
use crate::error::{Result, SlrError};

fn check_positive(name: &str, value: f64) -> Result<()> {
    if !(value > 0.0) || !value.is_finite() {
        return Err(SlrError::invalid(format!(
            "{name} must be finite and positive, got {value}"
        )));
    }
    Ok(())
}

/// Dimensionless position to cm for a gradient of `g` G/cm played for `t` ms:
/// `x / (γ̄·G·T)`.
pub fn gt2cm<D: Dimension>(
    x: &ArrayView<f64, D>,
    g_gauss_per_cm: f64,
    t_ms: f64,
    constants: &PhysicalConstants,
) -> Result<Array<f64, D>> {
    check_positive("gradient strength", g_gauss_per_cm)?;
    check_positive("pulse duration", t_ms)?;
    let scale = constants.gamma_bar_khz_per_gauss * g_gauss_per_cm * t_ms;
    Ok(x.mapv(|v| v / scale))
}

/// Inverse of [`gt2cm`].
pub fn cm2gt<D: Dimension>(
    z_cm: &ArrayView<f64, D>,
    g_gauss_per_cm: f64,
    t_ms: f64,
    constants: &PhysicalConstants,
) -> Result<Array<f64, D>> {
    check_positive("gradient strength", g_gauss_per_cm)?;
    check_positive("pulse duration", t_ms)?;
    let scale = constants.gamma_bar_khz_per_gauss * g_gauss_per_cm * t_ms;
    Ok(z_cm.mapv(|v| v * scale))
}

/// Scales an RF waveform whose sum is the flip angle to Gauss, for a pulse
/// lasting `t_ms`.
pub fn rfscaleg(
    rf: &ArrayView1<f64>,
    t_ms: f64,
    constants: &PhysicalConstants,
) -> Result<Array1<f64>> {
    if rf.is_empty() {
        return Err(SlrError::invalid("rf is empty"));
    }
    check_positive("pulse duration", t_ms)?;
    let dt = t_ms / rf.len() as f64;
    let scale = constants.gamma_rad_per_ms_per_gauss() * dt;
    Ok(rf.mapv(|v| v / scale))
}

/// Excited slab width `bw / (γ̄·G)` in cm.
pub fn slice_thickness_cm(
    bandwidth_khz: f64,
    g_gauss_per_cm: f64,
    constants: &PhysicalConstants,
) -> Result<f64> {
    check_positive("gradient strength", g_gauss_per_cm)?;
    Ok(bandwidth_khz / (constants.gamma_bar_khz_per_gauss * g_gauss_per_cm))
}
