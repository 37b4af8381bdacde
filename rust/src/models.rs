//! Core data types for the production planner.

use pyo3::prelude::*;

/// A production task as supplied by callers.
///
/// Every field is optional: the record shape of upstream callers is loose,
/// so a record with a missing or undefined field must survive construction
/// and be rejected by validation rather than at the boundary. Dependencies
/// are positions in the overall task list; `duration` and the dependency
/// entries are signed so that negative values reach the validator.
#[pyclass]
#[derive(Clone, Debug)]
pub struct Product {
    #[pyo3(get, set)]
    pub label: Option<String>,
    #[pyo3(get, set)]
    pub duration: Option<i64>,
    #[pyo3(get, set)]
    pub dependencies: Option<Vec<i64>>,
}

#[pymethods]
impl Product {
    #[new]
    #[pyo3(signature = (label=None, duration=None, dependencies=None))]
    fn new(label: Option<String>, duration: Option<i64>, dependencies: Option<Vec<i64>>) -> Self {
        Self {
            label,
            duration,
            dependencies,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Product(label={:?}, duration={:?}, deps={})",
            self.label,
            self.duration,
            self.dependencies.as_ref().map_or(0, |d| d.len())
        )
    }
}

/// Result of planning a production run.
///
/// `completion_times` is indexed by task position. `critical_tasks` holds
/// the positions of zero-slack tasks in ascending order.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductionPlan {
    /// Makespan: the latest completion time across all tasks.
    #[pyo3(get, set)]
    pub total_time: u64,
    /// Sum of all task durations.
    #[pyo3(get, set)]
    pub total_work: u64,
    /// Earliest completion time per task.
    #[pyo3(get, set)]
    pub completion_times: Vec<u64>,
    /// Tasks on a longest weighted path through the graph.
    #[pyo3(get, set)]
    pub critical_tasks: Vec<usize>,
}

#[pymethods]
impl ProductionPlan {
    #[new]
    #[pyo3(signature = (total_time=0, total_work=0, completion_times=None, critical_tasks=None))]
    fn new(
        total_time: u64,
        total_work: u64,
        completion_times: Option<Vec<u64>>,
        critical_tasks: Option<Vec<usize>>,
    ) -> Self {
        Self {
            total_time,
            total_work,
            completion_times: completion_times.unwrap_or_default(),
            critical_tasks: critical_tasks.unwrap_or_default(),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "ProductionPlan(total_time={}, total_work={}, tasks={})",
            self.total_time,
            self.total_work,
            self.completion_times.len()
        )
    }
}
