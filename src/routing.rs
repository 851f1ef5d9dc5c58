use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::gen_stub_pyfunction;
use transport_catalogue_core::prelude::*;

use crate::model::PyTransitModel;

fn segment_to_py<'py>(py: Python<'py>, segment: &RouteSegment) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    match segment {
        RouteSegment::Wait { stop_name, time } => {
            dict.set_item("type", "Wait")?;
            dict.set_item("stop_name", stop_name)?;
            dict.set_item("time", time)?;
        }
        RouteSegment::Ride {
            bus_name,
            span_count,
            time,
        } => {
            dict.set_item("type", "Bus")?;
            dict.set_item("bus", bus_name)?;
            dict.set_item("span_count", span_count)?;
            dict.set_item("time", time)?;
        }
    }
    Ok(dict)
}

/// Convert an Option<RouteResult> to a Python dictionary or None
pub(crate) fn optional_route_to_py(
    py: Python<'_>,
    route: Option<&RouteResult>,
) -> PyResult<Py<PyAny>> {
    let Some(route) = route else {
        return Ok(py.None());
    };

    let items = route
        .segments
        .iter()
        .map(|segment| segment_to_py(py, segment))
        .collect::<PyResult<Vec<_>>>()?;

    let dict = PyDict::new(py);
    dict.set_item("total_time", route.total_time)?;
    dict.set_item("items", PyList::new(py, items)?)?;
    Ok(dict.into_any().unbind())
}

#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction]
pub fn find_route(
    py: Python<'_>,
    transit_model: &PyTransitModel,
    from_stop: &str,
    to_stop: &str,
) -> PyResult<Py<PyAny>> {
    let route = transit_model.model.find_route(from_stop, to_stop);
    optional_route_to_py(py, route.as_ref())
}
