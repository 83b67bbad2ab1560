//! Configuration types for the scheduling core.

use pyo3::prelude::*;

/// Configuration for the cooldown scheduler.
#[pyclass]
#[derive(Clone, Debug)]
pub struct ScheduleConfig {
    /// Verbosity for simulation logging: 0=silent, 1=cycles, 2=slots, 3=debug
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self { verbosity: 0 }
    }
}

#[pymethods]
impl ScheduleConfig {
    #[new]
    #[pyo3(signature = (verbosity=None))]
    fn new(verbosity: Option<u8>) -> Self {
        let defaults = Self::default();
        Self {
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!("ScheduleConfig(verbosity={})", self.verbosity)
    }
}
