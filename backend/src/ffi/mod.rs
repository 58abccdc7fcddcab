//! Python bindings
//!
//! Only compiled with the `pyo3` feature.

pub mod generator;
