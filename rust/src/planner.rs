//! Planner pipeline: validate, detect cycles, evaluate.
//!
//! Each call is a pure computation over one task list; all traversal and
//! memo state is allocated inside the call, so concurrent calls need no
//! coordination.

use thiserror::Error;

use crate::completion::{completion_times, evaluate};
use crate::config::PlannerConfig;
use crate::cycle::contains_cycle;
use crate::log_stages;
use crate::models::{Product, ProductionPlan};
use crate::validation::{validate, ValidationError};

/// Errors that can occur when planning a production run.
///
/// Both outcomes are terminal for the call; the input must be fixed and the
/// computation re-invoked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// A task record is malformed: missing field, negative duration, or a
    /// dependency index outside the task list.
    #[error("Invalid task record in input")]
    InvalidInput,
    /// The dependency relation of a well-formed input is not acyclic.
    #[error("Circular dependency detected in task graph")]
    CycleDetected,
}

impl From<ValidationError> for PlanError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MalformedTask => PlanError::InvalidInput,
        }
    }
}

/// Compute the minimum total time to complete all tasks.
///
/// Validation runs first, so an out-of-range dependency index is reported
/// as [`PlanError::InvalidInput`] and never reaches cycle detection. The
/// empty list is a valid input and completes in zero time units.
pub fn compute_production_time(products: &[Product]) -> Result<u64, PlanError> {
    let config = PlannerConfig::default();
    let tasks = validate(products, config.verbosity)?;
    if contains_cycle(&tasks, config.verbosity) {
        return Err(PlanError::CycleDetected);
    }
    Ok(completion_times(&tasks).into_iter().max().unwrap_or(0))
}

/// Run the full pipeline and report per-task timing.
///
/// Same stage ordering as [`compute_production_time`], but the evaluation
/// also performs the backward pass, so the plan carries completion times,
/// total work, and the critical task set.
pub fn plan_production(
    products: &[Product],
    config: &PlannerConfig,
) -> Result<ProductionPlan, PlanError> {
    let verbosity = config.verbosity;

    let tasks = validate(products, verbosity)?;
    log_stages!(verbosity, "validated {} task records", tasks.len());

    if contains_cycle(&tasks, verbosity) {
        log_stages!(verbosity, "dependency graph is cyclic");
        return Err(PlanError::CycleDetected);
    }

    let timings = evaluate(&tasks, verbosity);
    log_stages!(
        verbosity,
        "makespan {} across {} tasks",
        timings.makespan,
        tasks.len()
    );

    let mut critical_tasks: Vec<usize> = timings.critical_tasks.iter().copied().collect();
    critical_tasks.sort_unstable();

    Ok(ProductionPlan {
        total_time: timings.makespan,
        total_work: timings.total_work,
        completion_times: timings.timings.iter().map(|t| t.earliest_finish).collect(),
        critical_tasks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(label: &str, duration: i64, deps: Vec<i64>) -> Product {
        Product {
            label: Some(label.to_string()),
            duration: Some(duration),
            dependencies: Some(deps),
        }
    }

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(compute_production_time(&[]), Ok(0));
    }

    #[test]
    fn test_single_task_without_dependencies() {
        let products = vec![make_product("A", 12, vec![])];
        assert_eq!(compute_production_time(&products), Ok(12));
    }

    #[test]
    fn test_independent_tasks_take_longest_duration() {
        let products = vec![
            make_product("A", 10, vec![]),
            make_product("B", 5, vec![]),
            make_product("C", 7, vec![]),
        ];
        assert_eq!(compute_production_time(&products), Ok(10));
    }

    #[test]
    fn test_dependency_chain_makespan() {
        let products = vec![
            make_product("A", 10, vec![]),
            make_product("B", 5, vec![0]),
            make_product("C", 7, vec![0]),
            make_product("A", 3, vec![1, 2]),
            make_product("B", 8, vec![3]),
            make_product("C", 4, vec![4]),
        ];
        assert_eq!(compute_production_time(&products), Ok(32));
    }

    #[test]
    fn test_direct_two_cycle() {
        let products = vec![
            make_product("A", 10, vec![1]),
            make_product("B", 5, vec![0]),
        ];
        assert_eq!(compute_production_time(&products), Err(PlanError::CycleDetected));
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let products = vec![make_product("A", 10, vec![0])];
        assert_eq!(compute_production_time(&products), Err(PlanError::CycleDetected));
    }

    #[test]
    fn test_out_of_range_dependency_is_invalid_input() {
        // Index equal to the list length: rejected before cycle detection.
        let products = vec![
            make_product("A", 10, vec![2]),
            make_product("B", 5, vec![]),
        ];
        assert_eq!(compute_production_time(&products), Err(PlanError::InvalidInput));
    }

    #[test]
    fn test_missing_dependencies_field_is_invalid_input() {
        let products = vec![
            Product {
                label: Some("A".to_string()),
                duration: Some(10),
                dependencies: None,
            },
            make_product("B", 5, vec![]),
        ];
        assert_eq!(compute_production_time(&products), Err(PlanError::InvalidInput));
    }

    #[test]
    fn test_negative_duration_is_invalid_input() {
        let products = vec![make_product("A", -3, vec![])];
        assert_eq!(compute_production_time(&products), Err(PlanError::InvalidInput));
    }

    #[test]
    fn test_repeated_calls_are_idempotent() {
        let products = vec![
            make_product("A", 10, vec![]),
            make_product("B", 5, vec![0]),
            make_product("C", 7, vec![0]),
            make_product("A", 3, vec![1, 2]),
        ];
        let first = compute_production_time(&products);
        let second = compute_production_time(&products);
        assert_eq!(first, second);
        assert_eq!(first, Ok(20));
    }

    #[test]
    fn test_plan_reports_timing_detail() {
        let products = vec![
            make_product("A", 10, vec![]),
            make_product("B", 5, vec![0]),
            make_product("C", 7, vec![0]),
            make_product("A", 3, vec![1, 2]),
            make_product("B", 8, vec![3]),
            make_product("C", 4, vec![4]),
        ];
        let plan = plan_production(&products, &PlannerConfig::default()).unwrap();

        assert_eq!(plan.total_time, 32);
        assert_eq!(plan.total_work, 37);
        assert_eq!(plan.completion_times, vec![10, 15, 17, 20, 28, 32]);
        assert_eq!(plan.critical_tasks, vec![0, 2, 3, 4, 5]);
    }

    #[test]
    fn test_plan_on_diamond_shares_prerequisite() {
        let products = vec![
            make_product("a", 2, vec![]),
            make_product("b", 3, vec![0]),
            make_product("c", 5, vec![0]),
            make_product("d", 1, vec![1, 2]),
        ];
        let plan = plan_production(&products, &PlannerConfig::default()).unwrap();

        assert_eq!(plan.total_time, 8);
        assert_eq!(plan.completion_times, vec![2, 5, 7, 8]);
        assert_eq!(plan.critical_tasks, vec![0, 2, 3]);
    }

    #[test]
    fn test_plan_propagates_errors() {
        let config = PlannerConfig::default();
        let cyclic = vec![
            make_product("A", 1, vec![1]),
            make_product("B", 1, vec![0]),
        ];
        assert_eq!(
            plan_production(&cyclic, &config),
            Err(PlanError::CycleDetected)
        );

        let malformed = vec![make_product("A", 1, vec![-1])];
        assert_eq!(
            plan_production(&malformed, &config),
            Err(PlanError::InvalidInput)
        );
    }

    #[test]
    fn test_error_display_strings() {
        assert_eq!(
            PlanError::InvalidInput.to_string(),
            "Invalid task record in input"
        );
        assert_eq!(
            PlanError::CycleDetected.to_string(),
            "Circular dependency detected in task graph"
        );
    }
}
