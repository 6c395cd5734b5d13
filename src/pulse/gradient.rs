use ndarray::{Array1, ArrayView1, Zip};
use num_complex::Complex64;
use std::f64::consts::PI;

use crate::error::{Result, SlrError};

/// Constant slice-select gradient, `2π/n` per sample, so that one unit of
/// dimensionless position accumulates one full cycle over the pulse.
pub fn constant_gradient(n_samples: usize) -> Result<Array1<f64>> {
    if n_samples == 0 {
        return Err(SlrError::invalid("gradient needs at least one sample"));
    }
    Ok(Array1::from_elem(n_samples, 2.0 * PI / n_samples as f64))
}

pub fn constant_gradient_complex(n_samples: usize) -> Result<Array1<Complex64>> {
    Ok(constant_gradient(n_samples)?.mapv(|v| Complex64::new(v, 0.0)))
}

/// Packs x and y gradient components into one complex waveform, `gx + i·gy`.
pub fn gradient_2d(gx: &ArrayView1<f64>, gy: &ArrayView1<f64>) -> Result<Array1<Complex64>> {
    if gx.len() != gy.len() {
        return Err(SlrError::invalid(format!(
            "gx has {} samples but gy has {}",
            gx.len(),
            gy.len()
        )));
    }
    Ok(Zip::from(gx)
        .and(gy)
        .map_collect(|&x, &y| Complex64::new(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::arr1;

    #[test]
    fn test_constant_gradient_area() {
        let g = constant_gradient(256).unwrap();
        assert_eq!(g.len(), 256);
        assert_relative_eq!(g.sum(), 2.0 * PI, epsilon = 1e-12);
        assert!(constant_gradient(0).is_err());
        assert_eq!(constant_gradient_complex(4).unwrap()[0].im, 0.0);
    }

    #[test]
    fn test_gradient_2d() {
        let g = gradient_2d(&arr1(&[1.0, 2.0]).view(), &arr1(&[-1.0, 0.5]).view()).unwrap();
        assert_eq!(g[1], Complex64::new(2.0, 0.5));
        assert!(gradient_2d(&arr1(&[1.0]).view(), &arr1(&[1.0, 2.0]).view()).is_err());
    }
}
