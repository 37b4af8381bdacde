//! Structural validation of caller-supplied product records.

use crate::log_checks;
use crate::models::Product;

/// Errors produced by input validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A record is missing a field or carries an out-of-range value.
    MalformedTask,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MalformedTask => {
                write!(f, "Malformed task record in input")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// A structurally valid task, safe to traverse.
///
/// Produced only by [`validate`]; every dependency index is within
/// `[0, n)` for the list it was validated against, so downstream stages
/// index the list directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedTask {
    pub label: String,
    pub duration: u64,
    pub dependencies: Vec<usize>,
}

/// Validate caller-supplied records into tasks safe for graph traversal.
///
/// The empty list is valid. Every record must carry all three fields, a
/// non-negative duration, and dependency indices within `[0, n)`. Which
/// field failed is logged at CHECKS verbosity; the surfaced contract is the
/// single error kind.
pub fn validate(
    products: &[Product],
    verbosity: u8,
) -> Result<Vec<ValidatedTask>, ValidationError> {
    let n = products.len();
    let mut tasks: Vec<ValidatedTask> = Vec::with_capacity(n);

    for (index, product) in products.iter().enumerate() {
        let Some(label) = product.label.as_ref() else {
            log_checks!(verbosity, "task {}: missing label", index);
            return Err(ValidationError::MalformedTask);
        };

        let Some(duration) = product.duration else {
            log_checks!(verbosity, "task {}: missing duration", index);
            return Err(ValidationError::MalformedTask);
        };
        if duration < 0 {
            log_checks!(verbosity, "task {}: negative duration {}", index, duration);
            return Err(ValidationError::MalformedTask);
        }

        let Some(dependencies) = product.dependencies.as_ref() else {
            log_checks!(verbosity, "task {}: missing dependencies", index);
            return Err(ValidationError::MalformedTask);
        };

        let mut deps: Vec<usize> = Vec::with_capacity(dependencies.len());
        for &dep in dependencies {
            if dep < 0 || dep as usize >= n {
                log_checks!(
                    verbosity,
                    "task {}: dependency index {} outside [0, {})",
                    index,
                    dep,
                    n
                );
                return Err(ValidationError::MalformedTask);
            }
            deps.push(dep as usize);
        }

        tasks.push(ValidatedTask {
            label: label.clone(),
            duration: duration as u64,
            dependencies: deps,
        });
    }

    Ok(tasks)
}
