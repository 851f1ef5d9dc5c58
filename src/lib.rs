use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::define_stub_info_gatherer;

use matrix::{find_routes_one_to_many, travel_time_matrix};
use model::{
    PyTransitModel, process_document, py_create_transit_model, py_transit_model_from_json,
};
use routing::find_route;

pub mod matrix;
pub mod model;
pub mod routing;

/// A Python module implemented in Rust.
#[pymodule]
fn transport_catalogue(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_class::<PyTransitModel>()?;
    m.add_function(wrap_pyfunction!(py_create_transit_model, m)?)?;
    m.add_function(wrap_pyfunction!(py_transit_model_from_json, m)?)?;
    m.add_function(wrap_pyfunction!(process_document, m)?)?;

    m.add_function(wrap_pyfunction!(find_route, m)?)?;
    m.add_function(wrap_pyfunction!(find_routes_one_to_many, m)?)?;
    m.add_function(wrap_pyfunction!(travel_time_matrix, m)?)?;
    Ok(())
}

#[cfg(feature = "stubgen")]
define_stub_info_gatherer!(stub_info);
