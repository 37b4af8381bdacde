//! Configuration types for the production planner.

use pyo3::prelude::*;

/// Configuration for planner diagnostics.
#[pyclass]
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    /// Verbosity level: 0=silent, 1=stages, 2=checks, 3=trace.
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { verbosity: 0 }
    }
}

#[pymethods]
impl PlannerConfig {
    #[new]
    #[pyo3(signature = (verbosity=None))]
    fn new(verbosity: Option<u8>) -> Self {
        let defaults = Self::default();
        Self {
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!("PlannerConfig(verbosity={})", self.verbosity)
    }
}
