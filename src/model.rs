use std::path::PathBuf;

use pyo3::prelude::*;
use pyo3::types::PyDict;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pyfunction, gen_stub_pymethods};
use transport_catalogue_core::loading::{json::parse_document, transit_model_from_document};
use transport_catalogue_core::prelude::*;

use crate::routing::optional_route_to_py;

/// TransitModel
///
/// Catalogue of stops and buses together with the routing graph built
/// from it.
///
/// Every stop is represented by a pair of graph vertices joined by a wait
/// edge, and every bus contributes ride edges between all stops reachable
/// on it without changing. Routes minimise total travel time in minutes.
///
/// Example:
///
/// .. code-block:: python
///
///     model = create_transit_model("path/to/catalogue.json")
///     route = model.find_route("Biryulyovo Zapadnoye", "Universam")
#[cfg_attr(feature = "stubgen", gen_stub_pyclass)]
#[pyclass(name = "TransitModel")]
pub struct PyTransitModel {
    pub(crate) model: TransitModel,
}

#[cfg_attr(feature = "stubgen", gen_stub_pymethods)]
#[pymethods]
impl PyTransitModel {
    pub fn stop_count(&self) -> usize {
        self.model.stop_count()
    }

    pub fn bus_count(&self) -> usize {
        self.model.bus_count()
    }

    /// Fastest route between two stops as a dict, or None
    pub fn find_route(
        &self,
        py: Python<'_>,
        from_stop: &str,
        to_stop: &str,
    ) -> PyResult<Py<PyAny>> {
        optional_route_to_py(py, self.model.find_route(from_stop, to_stop).as_ref())
    }

    /// Statistics of a bus as a dict, or None for an unknown bus
    pub fn bus_stats(&self, py: Python<'_>, bus_name: &str) -> PyResult<Py<PyAny>> {
        let Some(stats) = self.model.bus_stats(bus_name) else {
            return Ok(py.None());
        };
        let dict = PyDict::new(py);
        dict.set_item("stop_count", stats.stop_count)?;
        dict.set_item("unique_stop_count", stats.unique_stop_count)?;
        dict.set_item("route_length", stats.route_length)?;
        dict.set_item("geographic_length", stats.geographic_length)?;
        dict.set_item("curvature", stats.curvature)?;
        Ok(dict.into_any().unbind())
    }

    /// Sorted names of buses through a stop, or None for an unknown stop
    pub fn buses_for_stop(&self, stop_name: &str) -> Option<Vec<String>> {
        self.model
            .buses_for_stop(stop_name)
            .map(|buses| buses.into_iter().map(str::to_string).collect())
    }

    /// Answers a JSON array of stat requests with a JSON array of responses
    pub fn handle_stat_requests(&self, requests_json: &str) -> PyResult<String> {
        let requests: Vec<StatRequest> = serde_json::from_str(requests_json).map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("Invalid stat requests: {e}"))
        })?;
        responses_to_json(&self.model.handle_stat_requests(&requests))
    }

    fn __repr__(&self) -> String {
        self.model.summary()
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

fn responses_to_json(responses: &[StatResponse]) -> PyResult<String> {
    serde_json::to_string(responses).map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
            "Failed to serialize responses: {e}"
        ))
    })
}

fn model_error(e: &Error) -> PyErr {
    match e {
        Error::IoError(_) | Error::JsonError(_) | Error::InvalidData(_) => {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Failed to create transit model: {e}"
            ))
        }
        _ => PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "Failed to create transit model: {e}"
        )),
    }
}

/// Create a transit model from a JSON document on disk
///
/// The document holds ``base_requests`` (stops with road distances and
/// buses) and ``routing_settings`` (``bus_wait_time`` in minutes and
/// ``bus_velocity`` in km/h).
///
/// Parameters
/// ----------
/// path : str
///     Path to the JSON document
///
/// Returns
/// -------
/// TransitModel
///
/// Raises
/// ------
/// RuntimeError
///     If the document cannot be read or parsed
/// ValueError
///     If the document references unknown stops or has invalid settings
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction(name = "create_transit_model")]
pub fn py_create_transit_model(path: &str) -> PyResult<PyTransitModel> {
    let config = TransitModelConfig {
        input_path: PathBuf::from(path),
    };
    let model = create_transit_model(&config).map_err(|e| model_error(&e))?;
    Ok(PyTransitModel { model })
}

/// Create a transit model from a JSON document given as a string
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction(name = "transit_model_from_json")]
pub fn py_transit_model_from_json(document: &str) -> PyResult<PyTransitModel> {
    let document = parse_document(document).map_err(|e| model_error(&e))?;
    let model = transit_model_from_document(&document).map_err(|e| model_error(&e))?;
    Ok(PyTransitModel { model })
}

/// Build a model from a JSON document and answer its own ``stat_requests``
///
/// Parameters
/// ----------
/// document : str
///     JSON document with ``base_requests``, ``routing_settings`` and
///     ``stat_requests``
///
/// Returns
/// -------
/// str
///     JSON array of responses, in request order. ``Map`` requests are
///     answered with ``"not found"`` and unknown request types are skipped.
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction]
pub fn process_document(document: &str) -> PyResult<String> {
    let document = parse_document(document).map_err(|e| model_error(&e))?;
    let model = transit_model_from_document(&document).map_err(|e| model_error(&e))?;
    responses_to_json(&model.handle_document_requests(&document))
}
