mod pulse;
mod simulation;

#[macro_use]
mod macros;

use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::config::PhysicalConstants;

pub(crate) fn constants(gamma_bar: Option<f64>) -> PyResult<PhysicalConstants> {
    Ok(match gamma_bar {
        Some(value) => PhysicalConstants::new(value)?,
        None => PhysicalConstants::default(),
    })
}

/// Forward SLR pulse simulation
#[pymodule]
pub fn slr_profile(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    // forward simulation and profiles
    simulation::register(m)?;
    // pulse shapes and unit scaling
    pulse::register(m)?;
    Ok(())
}
