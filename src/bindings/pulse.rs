use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::create_axis_binding;
use crate::pulse::{constant_gradient, SincPulse, Window};
use crate::units;

create_axis_binding!(gt2cm, units::gt2cm);
create_axis_binding!(cm2gt, units::cm2gt);

#[pyfunction]
#[pyo3(signature = (rf, t, gamma_bar = None))]
pub fn rfscaleg<'py>(
    py: Python<'py>,
    rf: PyReadonlyArray1<f64>,
    t: f64,
    gamma_bar: Option<f64>,
) -> PyResult<&'py PyArray1<f64>> {
    let constants = super::constants(gamma_bar)?;
    let result = units::rfscaleg(&rf.as_array(), t, &constants)?;
    Ok(result.into_pyarray(py))
}

/// `sinc_pulse(n, t, tbw, flip, alpha=0.0)`; `alpha` 0.46 gives Hamming.
#[pyfunction]
#[pyo3(signature = (n, t, tbw, flip, alpha = 0.0))]
pub fn sinc_pulse<'py>(
    py: Python<'py>,
    n: usize,
    t: f64,
    tbw: f64,
    flip: f64,
    alpha: f64,
) -> PyResult<&'py PyArray1<f64>> {
    let pulse = SincPulse::new(n, t, tbw, flip).with_window(Window::Custom(alpha));
    Ok(pulse.samples()?.into_pyarray(py))
}

#[pyfunction]
pub fn slice_select_gradient<'py>(py: Python<'py>, n: usize) -> PyResult<&'py PyArray1<f64>> {
    Ok(constant_gradient(n)?.into_pyarray(py))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(gt2cm, m)?)?;
    m.add_function(wrap_pyfunction!(cm2gt, m)?)?;
    m.add_function(wrap_pyfunction!(rfscaleg, m)?)?;
    m.add_function(wrap_pyfunction!(sinc_pulse, m)?)?;
    m.add_function(wrap_pyfunction!(slice_select_gradient, m)?)?;
    Ok(())
}
