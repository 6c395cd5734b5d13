//! Two-slice Hadamard multiband excitation.
//!
//! The envelope is modulated by `exp(-i·ρ·t)` with `ρ = 2π·γ̄·(G/bands)·z0`.
//! Its real (cos) part excites both slices in phase and its imaginary (sin)
//! part excites them out of phase; summing and differencing the two
//! acquisitions separates the slices again.

use ndarray::{Array, Array1, ArrayD, ArrayView, ArrayView1, ArrayViewD, Axis, Dimension, Zip};
use std::f64::consts::{FRAC_1_SQRT_2, PI};

use crate::config::PhysicalConstants;
use crate::error::{Result, SlrError};

/// Cos/sin modulated copies of `rf` for a slice offset of `z0_cm`.
pub fn hadamard_pair(
    rf: &ArrayView1<f64>,
    t_ms: &ArrayView1<f64>,
    g_gauss_per_cm: f64,
    n_bands: usize,
    z0_cm: f64,
    constants: &PhysicalConstants,
) -> Result<(Array1<f64>, Array1<f64>)> {
    if rf.len() != t_ms.len() {
        return Err(SlrError::invalid(format!(
            "rf has {} samples but the time axis has {}",
            rf.len(),
            t_ms.len()
        )));
    }
    if n_bands == 0 {
        return Err(SlrError::invalid("n_bands must be at least 1"));
    }
    let rho =
        2.0 * PI * constants.gamma_bar_khz_per_gauss * g_gauss_per_cm / n_bands as f64 * z0_cm;

    let rf_cos = Zip::from(rf)
        .and(t_ms)
        .map_collect(|&r, &t| r * (rho * t).cos());
    let rf_sin = Zip::from(rf)
        .and(t_ms)
        .map_collect(|&r, &t| -r * (rho * t).sin());
    Ok((rf_cos, rf_sin))
}

/// `((s1 + s2)/√2, (s1 - s2)/√2)`
pub fn hadamard_encode<D: Dimension>(
    s1: &ArrayView<f64, D>,
    s2: &ArrayView<f64, D>,
) -> Result<(Array<f64, D>, Array<f64, D>)> {
    if s1.shape() != s2.shape() {
        return Err(SlrError::invalid(format!(
            "encodes differ in shape: {:?} vs {:?}",
            s1.shape(),
            s2.shape()
        )));
    }
    let sum = Zip::from(s1)
        .and(s2)
        .map_collect(|&a, &b| FRAC_1_SQRT_2 * (a + b));
    let diff = Zip::from(s1)
        .and(s2)
        .map_collect(|&a, &b| FRAC_1_SQRT_2 * (a - b));
    Ok((sum, diff))
}

/// Inverse of [`hadamard_encode`]. The normalised 2x2 Hadamard matrix is its
/// own inverse.
pub fn hadamard_decode<D: Dimension>(
    e1: &ArrayView<f64, D>,
    e2: &ArrayView<f64, D>,
) -> Result<(Array<f64, D>, Array<f64, D>)> {
    hadamard_encode(e1, e2)
}

/// Decodes two encodes stacked along the last axis (length 2).
pub fn hadamard_decode_stacked(encodes: &ArrayViewD<f64>) -> Result<ArrayD<f64>> {
    let last = match encodes.ndim() {
        0 => return Err(SlrError::invalid("encodes must have at least one axis")),
        n => Axis(n - 1),
    };
    if encodes.len_of(last) != 2 {
        return Err(SlrError::invalid(format!(
            "expected 2 encodes along the last axis, found {}",
            encodes.len_of(last)
        )));
    }
    let (s1, s2) = hadamard_decode(
        &encodes.index_axis(last, 0),
        &encodes.index_axis(last, 1),
    )?;
    ndarray::stack(last, &[s1.view(), s2.view()])
        .map_err(|err| SlrError::invalid(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{arr1, arr2, Array3};

    #[test]
    fn test_pair_without_offset() {
        let rf = arr1(&[0.1, 0.2, 0.1]);
        let t = arr1(&[0.0, 1.0, 2.0]);
        let (c, s) =
            hadamard_pair(&rf.view(), &t.view(), 0.5, 2, 0.0, &PhysicalConstants::default())
                .unwrap();
        assert_eq!(c, rf);
        assert!(s.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_pair_is_quadrature() {
        let rf = arr1(&[0.3, 0.2, 0.5, 0.1]);
        let t = arr1(&[0.0, 0.5, 1.0, 1.5]);
        let (c, s) =
            hadamard_pair(&rf.view(), &t.view(), 0.5, 2, 5.0, &PhysicalConstants::default())
                .unwrap();
        let rho = 2.0 * PI * 4.257 * 0.5 / 2.0 * 5.0;
        for i in 0..rf.len() {
            assert_relative_eq!(c[i].hypot(s[i]), rf[i], epsilon = 1e-14);
            // rf·exp(-iρt): cos 쪽은 +, sin 쪽은 - 부호
            assert_relative_eq!(c[i], rf[i] * (rho * t[i]).cos(), epsilon = 1e-14);
            assert_relative_eq!(s[i], -rf[i] * (rho * t[i]).sin(), epsilon = 1e-14);
        }
        assert!(hadamard_pair(&rf.view(), &t.view(), 0.5, 0, 5.0, &PhysicalConstants::default())
            .is_err());
        assert!(hadamard_pair(
            &rf.view(),
            &t.slice(ndarray::s![..2]),
            0.5,
            2,
            5.0,
            &PhysicalConstants::default()
        )
        .is_err());
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let s1 = arr2(&[[1.0, 2.0], [3.0, 4.0]]);
        let s2 = arr2(&[[-1.0, 0.5], [0.0, 8.0]]);
        let (e1, e2) = hadamard_encode(&s1.view(), &s2.view()).unwrap();
        let (d1, d2) = hadamard_decode(&e1.view(), &e2.view()).unwrap();
        assert_relative_eq!(d1, s1, epsilon = 1e-12);
        assert_relative_eq!(d2, s2, epsilon = 1e-12);
    }

    #[test]
    fn test_decode_stacked() {
        let mut encodes = Array3::<f64>::zeros((2, 3, 2));
        encodes.index_axis_mut(Axis(2), 0).fill(2.0);
        encodes.index_axis_mut(Axis(2), 1).fill(1.0);
        let slices = hadamard_decode_stacked(&encodes.into_dyn().view()).unwrap();
        assert_eq!(slices.shape(), &[2, 3, 2]);
        assert_relative_eq!(slices[[0, 0, 0]], 3.0 * FRAC_1_SQRT_2, epsilon = 1e-15);
        assert_relative_eq!(slices[[1, 2, 1]], FRAC_1_SQRT_2, epsilon = 1e-15);

        let bad = Array3::<f64>::zeros((2, 2, 3)).into_dyn();
        assert!(hadamard_decode_stacked(&bad.view()).is_err());
    }
}
