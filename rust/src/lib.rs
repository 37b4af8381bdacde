//! Rust implementation of the prodplan scheduling core.
//!
//! This module provides the data types and algorithms for computing
//! production completion times over task dependency graphs.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

pub mod completion;
mod config;
pub mod cycle;
pub mod logging;
mod models;
pub mod planner;
pub mod validation;

pub use completion::{completion_times, evaluate, PlanTimings, TaskTiming};
pub use config::PlannerConfig;
pub use cycle::contains_cycle;
pub use models::{Product, ProductionPlan};
pub use planner::{compute_production_time, plan_production, PlanError};
pub use validation::{validate, ValidatedTask, ValidationError};

/// Compute the minimum total production time for a task list.
///
/// Stages run in strict sequence: structural validation, cycle detection,
/// completion-time evaluation.
///
/// # Arguments
/// * `products` - List of production tasks; dependencies are list indices
///
/// # Returns
/// * Total production time in whole time units (0 for an empty list)
///
/// # Raises
/// * ValueError for a malformed record or a cyclic dependency graph
#[pyfunction]
#[pyo3(name = "compute_production_time")]
fn py_compute_production_time(products: Vec<Product>) -> PyResult<u64> {
    match planner::compute_production_time(&products) {
        Ok(total_time) => Ok(total_time),
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
    }
}

/// Plan a production run and report per-task timing.
///
/// Same pipeline as `compute_production_time`, returning the full plan:
/// makespan, total work, per-task completion times, and the indices of
/// critical (zero slack) tasks.
///
/// # Arguments
/// * `products` - List of production tasks; dependencies are list indices
/// * `config` - Planner configuration (verbosity); defaults to silent
///
/// # Returns
/// * ProductionPlan with timing detail
///
/// # Raises
/// * ValueError for a malformed record or a cyclic dependency graph
#[pyfunction]
#[pyo3(name = "plan_production", signature = (products, config=None))]
fn py_plan_production(
    products: Vec<Product>,
    config: Option<PlannerConfig>,
) -> PyResult<ProductionPlan> {
    let config = config.unwrap_or_default();
    match planner::plan_production(&products, &config) {
        Ok(plan) => Ok(plan),
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
    }
}

/// The prodplan.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<Product>()?;
    m.add_class::<ProductionPlan>()?;

    // Config types
    m.add_class::<PlannerConfig>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(py_compute_production_time, m)?)?;
    m.add_function(wrap_pyfunction!(py_plan_production, m)?)?;

    Ok(())
}
