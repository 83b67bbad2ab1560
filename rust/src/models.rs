//! Boundary data types for the scheduling core.

use pyo3::prelude::*;

/// Result of a cooldown scheduling run.
///
/// `total_slots` is the contract value (minimum slots to finish all tasks);
/// `busy_slots` and `idle_slots` break it down and always sum to the total.
#[pyclass]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScheduleReport {
    /// Total time slots consumed, including idle slots.
    #[pyo3(get, set)]
    pub total_slots: u64,
    /// Slots in which a task actually executed.
    #[pyo3(get, set)]
    pub busy_slots: u64,
    /// Slots spent waiting for a cooldown to expire.
    #[pyo3(get, set)]
    pub idle_slots: u64,
}

#[pymethods]
impl ScheduleReport {
    #[new]
    #[pyo3(signature = (total_slots=0, busy_slots=0, idle_slots=0))]
    fn new(total_slots: u64, busy_slots: u64, idle_slots: u64) -> Self {
        Self {
            total_slots,
            busy_slots,
            idle_slots,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "ScheduleReport(total_slots={}, busy_slots={}, idle_slots={})",
            self.total_slots, self.busy_slots, self.idle_slots
        )
    }
}
