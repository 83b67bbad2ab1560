//! Rust implementation of the Cadence priority-queue core.
//!
//! This module provides the binary heap, k-way merge, and cooldown scheduling
//! algorithms behind the task-queue system.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;
use std::collections::HashMap;

use rustc_hash::FxHashMap;

mod config;
pub mod cooldown;
pub mod heap;
mod interner;
pub mod logging;
pub mod merge;
mod models;

pub use config::ScheduleConfig;
pub use cooldown::{count_tasks, min_slots, schedule, ScheduleError};
pub use heap::{BinaryHeap, HeapError, OrdComparator};
pub use interner::{TaskIdInt, TaskInterner};
pub use merge::merge_sorted;
pub use models::ScheduleReport;

/// Merge pre-sorted lists of integers into one sorted list.
///
/// # Arguments
/// * `sources` - Lists each sorted ascending; sortedness is not validated
///
/// # Returns
/// * Single sorted list containing every input element
#[pyfunction]
fn merge_sorted_ints(sources: Vec<Vec<i64>>) -> Vec<i64> {
    merge_sorted(sources)
}

/// Merge pre-sorted lists of strings into one sorted list.
///
/// # Arguments
/// * `sources` - Lists each sorted ascending; sortedness is not validated
///
/// # Returns
/// * Single sorted list containing every input element
#[pyfunction]
fn merge_sorted_strs(sources: Vec<Vec<String>>) -> Vec<String> {
    merge_sorted(sources)
}

/// Schedule a list of task ids under a cooldown constraint via simulation.
///
/// # Arguments
/// * `tasks` - Task ids; identical ids must be separated by `cooldown` slots
/// * `cooldown` - Minimum slots between two executions of the same id
/// * `config` - Scheduling configuration (verbosity)
///
/// # Returns
/// * ScheduleReport with total, busy, and idle slot counts
///
/// # Raises
/// * ValueError if `cooldown` is negative
#[pyfunction]
#[pyo3(signature = (tasks, cooldown, config=None))]
fn schedule_tasks(
    tasks: Vec<String>,
    cooldown: i64,
    config: Option<ScheduleConfig>,
) -> PyResult<ScheduleReport> {
    let counts = count_tasks(tasks.iter().map(|id| id.as_str()));
    let config = config.unwrap_or_default();

    match schedule(&counts, cooldown, &config) {
        Ok(report) => Ok(report),
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
    }
}

/// Compute the minimum slot count from pre-counted task frequencies using
/// the closed-form formula (no simulation).
///
/// # Arguments
/// * `counts` - Dict mapping task id to execution count
/// * `cooldown` - Minimum slots between two executions of the same id
///
/// # Returns
/// * Minimum number of slots to finish all tasks
///
/// # Raises
/// * ValueError if `cooldown` or any count is negative
#[pyfunction]
fn min_slots_from_counts(counts: HashMap<String, i64>, cooldown: i64) -> PyResult<u64> {
    // Convert std HashMap from the Python interface to FxHashMap
    let counts: FxHashMap<String, i64> = counts.into_iter().collect();

    match min_slots(&counts, cooldown) {
        Ok(total) => Ok(total),
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
    }
}

/// The cadence.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core data types
    m.add_class::<ScheduleReport>()?;

    // Config types
    m.add_class::<ScheduleConfig>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(merge_sorted_ints, m)?)?;
    m.add_function(wrap_pyfunction!(merge_sorted_strs, m)?)?;
    m.add_function(wrap_pyfunction!(schedule_tasks, m)?)?;
    m.add_function(wrap_pyfunction!(min_slots_from_counts, m)?)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_tasks_wrapper() {
        let tasks = vec![
            "A".to_string(),
            "A".to_string(),
            "A".to_string(),
            "B".to_string(),
            "B".to_string(),
            "B".to_string(),
        ];
        let report = schedule_tasks(tasks, 2, None).unwrap();
        assert_eq!(report.total_slots, 8);
        assert_eq!(report.busy_slots, 6);
        assert_eq!(report.idle_slots, 2);
    }

    #[test]
    fn test_schedule_tasks_negative_cooldown_is_value_error() {
        let result = schedule_tasks(vec!["A".to_string()], -1, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_min_slots_wrapper() {
        let counts = HashMap::from([("A".to_string(), 5)]);
        assert_eq!(min_slots_from_counts(counts, 2).unwrap(), 13);
    }

    #[test]
    fn test_merge_wrappers() {
        assert_eq!(
            merge_sorted_ints(vec![vec![1, 4, 5], vec![1, 3, 4], vec![2, 6]]),
            vec![1, 1, 2, 3, 4, 4, 5, 6]
        );
        assert_eq!(
            merge_sorted_strs(vec![vec!["b".to_string()], vec!["a".to_string()]]),
            vec!["a", "b"]
        );
    }
}
