//! Cluster cost model.
//!
//! Turns an assignment into makespan, energy, utilization and SLA metrics
//! by simulating it on a fresh [`Cluster`] snapshot.
//!
//! # Model
//!
//! - VMs are placed round-robin on hosts (VM `i` → host `i % H`).
//! - Each VM is a single serial processor: its busy time is the sum of
//!   its tasks' lengths.
//! - Host power is linear in utilization between idle and max power.
//!
//! # Example
//!
//! ```
//! use u_placement::cluster::CostModel;
//! use u_placement::models::{Assignment, Host, Infrastructure, Task, Vm};
//!
//! let infra = Infrastructure::new(
//!     vec![Vm::new(0, 500.0, 1024.0)],
//!     vec![Host::new(0, 2000.0, 8192.0)],
//! ).unwrap();
//! let tasks = vec![Task::new(0, 100.0, 128.0, 400.0)];
//!
//! let metrics = CostModel::default()
//!     .evaluate(&infra, &tasks, &Assignment::new(vec![Some(0)]))
//!     .unwrap();
//! assert_eq!(metrics.makespan, 400.0);
//! assert_eq!(metrics.sla_violations, 0);
//! ```

mod metrics;
mod snapshot;

pub use metrics::ClusterMetrics;
pub use snapshot::Cluster;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Assignment, Infrastructure, Task};

/// Default task length above which a placed task counts as an SLA violation.
pub const DEFAULT_SLA_THRESHOLD: f64 = 1000.0;

/// Parameters of the cluster simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    /// Task length above which a placed task violates its SLA.
    pub sla_threshold: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            sla_threshold: DEFAULT_SLA_THRESHOLD,
        }
    }
}

impl CostModel {
    /// Sets the SLA length threshold.
    pub fn with_sla_threshold(mut self, threshold: f64) -> Self {
        self.sla_threshold = threshold;
        self
    }

    /// Simulates `assignment` and returns its metrics.
    ///
    /// Builds a throwaway snapshot; `infra` and `tasks` are only read.
    ///
    /// # Errors
    /// [`PlacementError::AssignmentLength`](crate::PlacementError::AssignmentLength)
    /// if the assignment does not have one gene per task.
    pub fn evaluate(
        &self,
        infra: &Infrastructure,
        tasks: &[Task],
        assignment: &Assignment,
    ) -> Result<ClusterMetrics> {
        let mut cluster = Cluster::new(infra, tasks);
        cluster.apply(assignment)?;
        Ok(ClusterMetrics::calculate(&cluster, self.sla_threshold))
    }
}
