use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::gen_stub_pyfunction;

use crate::model::PyTransitModel;
use crate::routing::optional_route_to_py;

#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction]
pub fn find_routes_one_to_many(
    py: Python<'_>,
    transit_model: &PyTransitModel,
    from_stop: &str,
    to_stops: Vec<String>,
) -> PyResult<Vec<Py<PyAny>>> {
    let router = transit_model.model.router();
    let routes = py.detach(|| router.build_routes_one_to_many(from_stop, &to_stops));

    routes
        .iter()
        .map(|route| optional_route_to_py(py, route.as_ref()))
        .collect()
}

/// Total travel times in minutes between every ordered pair of stops,
/// None where a stop is unknown or unreachable
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction]
pub fn travel_time_matrix(
    py: Python<'_>,
    transit_model: &PyTransitModel,
    stops: Vec<String>,
) -> Vec<Vec<Option<f64>>> {
    let router = transit_model.model.router();
    py.detach(|| router.travel_time_matrix(&stops))
}
