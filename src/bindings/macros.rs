// src/bindings/macros.rs

/// Binds an axis conversion of the form `f(&x, g, t, &constants)`.
///
/// `create_axis_binding!(python_name, rust_fn_path);`
#[macro_export]
macro_rules! create_axis_binding {
    ($py_fn_name:ident, $rust_fn:path) => {
        #[pyo3::prelude::pyfunction]
        #[pyo3(signature = (x, g, t, gamma_bar = None))]
        fn $py_fn_name<'py>(
            py: pyo3::prelude::Python<'py>,
            x: numpy::PyReadonlyArray1<f64>,
            g: f64,
            t: f64,
            gamma_bar: Option<f64>,
        ) -> pyo3::prelude::PyResult<&'py numpy::PyArray1<f64>> {
            let constants = $crate::bindings::constants(gamma_bar)?;
            let result = $rust_fn(&x.as_array(), g, t, &constants)?;
            Ok(numpy::IntoPyArray::into_pyarray(result, py))
        }
    };
}
