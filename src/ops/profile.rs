use ndarray::{Array, ArrayView, Dimension, Zip};
use num_complex::Complex64;

use crate::error::{Result, SlrError};

/// Transverse magnetisation `2·conj(a)·b`.
#[inline]
pub fn excitation(a: Complex64, b: Complex64) -> Complex64 {
    2.0 * a.conj() * b
}

/// Longitudinal magnetisation `1 - 2·conj(b)·b`.
#[inline]
pub fn inversion(_a: Complex64, b: Complex64) -> f64 {
    1.0 - 2.0 * b.norm_sqr()
}

/// Excitation profile of every element of `a`, `b`.
pub fn ab2ex<D: Dimension>(
    a: &ArrayView<Complex64, D>,
    b: &ArrayView<Complex64, D>,
) -> Result<Array<Complex64, D>> {
    check_shapes(a, b)?;
    Ok(Zip::from(a).and(b).par_map_collect(|&a, &b| excitation(a, b)))
}

/// Inversion profile of every element of `b`. `a` only fixes the shape.
pub fn ab2inv<D: Dimension>(
    a: &ArrayView<Complex64, D>,
    b: &ArrayView<Complex64, D>,
) -> Result<Array<f64, D>> {
    check_shapes(a, b)?;
    Ok(Zip::from(a).and(b).par_map_collect(|&a, &b| inversion(a, b)))
}

fn check_shapes<D: Dimension>(
    a: &ArrayView<Complex64, D>,
    b: &ArrayView<Complex64, D>,
) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(SlrError::invalid(format!(
            "alpha has shape {:?} but beta has shape {:?}",
            a.shape(),
            b.shape()
        )));
    }
    Ok(())
}
