//! Python extension module.
//!
//! Validates JSON payloads and hands the result back as plain dicts, so the
//! Python side keeps working with native types. Failures raise `ValueError`
//! with a `"<path>: <reason>"` message.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::codec::{decode_with, DecodeError};
use crate::logging::structured::LogContext;
use crate::schema::{json_schema_for, Item, ItemData, ItemId, ItemList, Shape, SHAPE_NAMES};

fn python_context(shape: &str) -> LogContext {
    LogContext::new(shape).with_source("python")
}

fn to_py_err(err: DecodeError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn decode_payload<T: Shape>(payload: &str) -> PyResult<T> {
    crate::init_logger();
    decode_with(&python_context(T::NAME), payload).map_err(to_py_err)
}

fn item_to_dict<'py>(py: Python<'py>, item: &Item) -> PyResult<&'py PyDict> {
    let dict = PyDict::new(py);
    dict.set_item("id", &item.id)?;
    dict.set_item("name", &item.name)?;
    Ok(dict)
}

/// Validate an `Item` payload.
#[pyfunction]
fn validate_item(py: Python<'_>, payload: String) -> PyResult<Py<PyAny>> {
    let item: Item = decode_payload(&payload)?;
    Ok(item_to_dict(py, &item)?.into())
}

/// Validate an `ItemData` payload.
#[pyfunction]
fn validate_item_data(py: Python<'_>, payload: String) -> PyResult<Py<PyAny>> {
    let data: ItemData = decode_payload(&payload)?;
    let dict = PyDict::new(py);
    dict.set_item("name", &data.name)?;
    Ok(dict.into())
}

/// Validate an `ItemId` payload.
#[pyfunction]
fn validate_item_id(py: Python<'_>, payload: String) -> PyResult<Py<PyAny>> {
    let id: ItemId = decode_payload(&payload)?;
    let dict = PyDict::new(py);
    dict.set_item("id", &id.id)?;
    Ok(dict.into())
}

/// Validate an `ItemList` payload.
///
/// Returns `{"has_more": bool, "members": [{"id": ..., "name": ...}, ...]}`
/// with members in input order.
#[pyfunction]
fn validate_item_list(py: Python<'_>, payload: String) -> PyResult<Py<PyAny>> {
    let list: ItemList = decode_payload(&payload)?;

    let members = PyList::empty(py);
    for item in &list.members {
        members.append(item_to_dict(py, item)?)?;
    }

    let dict = PyDict::new(py);
    dict.set_item("has_more", list.has_more)?;
    dict.set_item("members", members)?;
    Ok(dict.into())
}

/// JSON Schema document for a shape, as JSON text.
#[pyfunction]
fn json_schema(shape: String) -> PyResult<String> {
    let schema = json_schema_for(&shape).ok_or_else(|| {
        PyValueError::new_err(format!(
            "unknown shape {:?}, expected one of {:?}",
            shape, SHAPE_NAMES
        ))
    })?;
    serde_json::to_string(&schema).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Python module definition
#[pymodule]
fn itemschema_core(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(validate_item, m)?)?;
    m.add_function(wrap_pyfunction!(validate_item_data, m)?)?;
    m.add_function(wrap_pyfunction!(validate_item_id, m)?)?;
    m.add_function(wrap_pyfunction!(validate_item_list, m)?)?;
    m.add_function(wrap_pyfunction!(json_schema, m)?)?;
    Ok(())
}
