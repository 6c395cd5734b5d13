use numpy::{Complex64, IntoPyArray, PyArray2, PyReadonlyArray1, PyReadonlyArray2};
use pyo3::prelude::*;

use crate::config::SimulatorConfig;
use crate::ops::{profile, CayleyKleinSimulator, Samples, Waveform};

/// float64 or complex128 waveform channel.
#[derive(FromPyObject)]
pub enum PySamples<'py> {
    Real(PyReadonlyArray1<'py, f64>),
    Complex(PyReadonlyArray1<'py, Complex64>),
}

impl From<PySamples<'_>> for Samples {
    fn from(samples: PySamples<'_>) -> Self {
        match samples {
            PySamples::Real(v) => Samples::Real(v.as_array().to_owned()),
            PySamples::Complex(v) => Samples::Complex(v.as_array().to_owned()),
        }
    }
}

/// `a, b = abrm(rf, g, x, y=None)`
#[pyfunction]
#[pyo3(signature = (rf, g, x, y = None))]
pub fn abrm<'py>(
    py: Python<'py>,
    rf: PySamples<'py>,
    g: PySamples<'py>,
    x: PyReadonlyArray1<f64>,
    y: Option<PyReadonlyArray1<f64>>,
) -> PyResult<(&'py PyArray2<Complex64>, &'py PyArray2<Complex64>)> {
    let waveform = Waveform::from_samples(rf.into(), g.into())?;
    let x_arr = x.as_array();
    let y_arr = y.as_ref().map(|y| y.as_array());

    let simulator = CayleyKleinSimulator::new(SimulatorConfig::default().with_env_overrides()?);
    let field = py.allow_threads(|| {
        simulator.simulate_waveform(&waveform, &x_arr, y_arr.as_ref())
    })?;
    let (a, b) = field.into_parts();
    Ok((a.into_pyarray(py), b.into_pyarray(py)))
}

#[pyfunction]
pub fn ab2ex<'py>(
    py: Python<'py>,
    a: PyReadonlyArray2<Complex64>,
    b: PyReadonlyArray2<Complex64>,
) -> PyResult<&'py PyArray2<Complex64>> {
    let result = profile::ab2ex(&a.as_array(), &b.as_array())?;
    Ok(result.into_pyarray(py))
}

#[pyfunction]
pub fn ab2inv<'py>(
    py: Python<'py>,
    a: PyReadonlyArray2<Complex64>,
    b: PyReadonlyArray2<Complex64>,
) -> PyResult<&'py PyArray2<f64>> {
    let result = profile::ab2inv(&a.as_array(), &b.as_array())?;
    Ok(result.into_pyarray(py))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(abrm, m)?)?;
    m.add_function(wrap_pyfunction!(ab2ex, m)?)?;
    m.add_function(wrap_pyfunction!(ab2inv, m)?)?;
    Ok(())
}
