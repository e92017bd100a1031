//! Task (workload item) model.
//!
//! A task is a unit of compute work with a fixed resource demand and a
//! processing length. Tasks are immutable once loaded; the optimizer only
//! decides *where* each one runs.

use serde::{Deserialize, Serialize};

/// A compute task to be placed on a VM.
///
/// # Units
/// `cpu` and `mem` are in the same abstract units as VM/host capacities.
/// `length` is processing duration in abstract time units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Task identifier.
    pub id: u64,
    /// Compute demand.
    pub cpu: f64,
    /// Memory demand.
    pub mem: f64,
    /// Processing duration.
    pub length: f64,
    /// Arrival offset. Advisory only: the batch model does not gate on it.
    pub arrival: f64,
}

impl Task {
    /// Creates a task with the given demand and length, arriving at t=0.
    pub fn new(id: u64, cpu: f64, mem: f64, length: f64) -> Self {
        Self {
            id,
            cpu,
            mem,
            length,
            arrival: 0.0,
        }
    }

    /// Sets the arrival offset.
    pub fn with_arrival(mut self, arrival: f64) -> Self {
        self.arrival = arrival;
        self
    }
}

/// A raw workload record as delivered by a trace source.
///
/// Every numeric field is optional on the wire; missing values fall back
/// to cpu=100, mem=128, length=1000, arrival=0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Explicit id. When absent, the record's position is used.
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default = "TaskRecord::default_cpu")]
    pub cpu: f64,
    #[serde(default = "TaskRecord::default_mem")]
    pub mem: f64,
    #[serde(default = "TaskRecord::default_length")]
    pub length: f64,
    #[serde(default)]
    pub arrival: f64,
}

impl Default for TaskRecord {
    fn default() -> Self {
        Self {
            id: None,
            cpu: Self::default_cpu(),
            mem: Self::default_mem(),
            length: Self::default_length(),
            arrival: 0.0,
        }
    }
}

impl TaskRecord {
    fn default_cpu() -> f64 {
        100.0
    }

    fn default_mem() -> f64 {
        128.0
    }

    fn default_length() -> f64 {
        1000.0
    }

    /// Converts to a task, using `position` as the id if none was given.
    pub fn into_task(self, position: usize) -> Task {
        Task {
            id: self.id.unwrap_or(position as u64),
            cpu: self.cpu,
            mem: self.mem,
            length: self.length,
            arrival: self.arrival,
        }
    }

    /// Converts an ordered record sequence into tasks.
    pub fn into_tasks(records: impl IntoIterator<Item = TaskRecord>) -> Vec<Task> {
        records
            .into_iter()
            .enumerate()
            .map(|(i, r)| r.into_task(i))
            .collect()
    }
}
