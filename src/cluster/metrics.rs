//! Cluster quality metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Max over VMs of summed task length |
//! | Energy | Sum over hosts of linear power draw |
//! | Avg Utilization | Mean of per-host min(1, cpu load / cpu capacity) |
//! | SLA Violations | Placed tasks over the length threshold + unassigned tasks |
//! | Unassigned Tasks | Genes with no valid VM |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Cluster;

/// Metric breakdown for one evaluated assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterMetrics {
    pub makespan: f64,
    pub energy: f64,
    pub avg_utilization: f64,
    pub sla_violations: usize,
    pub unassigned_tasks: usize,
}

impl ClusterMetrics {
    /// Computes metrics from a populated snapshot.
    pub fn calculate(cluster: &Cluster<'_>, sla_threshold: f64) -> Self {
        Self {
            makespan: cluster.makespan(),
            energy: cluster.total_energy(),
            avg_utilization: cluster.avg_utilization(),
            sla_violations: cluster.sla_violations(sla_threshold),
            unassigned_tasks: cluster.unassigned_tasks(),
        }
    }

    /// Metric name → value, for reporting.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        BTreeMap::from([
            ("makespan".to_string(), self.makespan),
            ("energy".to_string(), self.energy),
            ("avg_utilization".to_string(), self.avg_utilization),
            ("sla_violations".to_string(), self.sla_violations as f64),
            ("unassigned_tasks".to_string(), self.unassigned_tasks as f64),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignment, Host, Infrastructure, Task, Vm};

    #[test]
    fn test_to_map_keys() {
        let m = ClusterMetrics {
            makespan: 10.0,
            energy: 20.0,
            avg_utilization: 0.5,
            sla_violations: 2,
            unassigned_tasks: 1,
        };
        let map = m.to_map();
        assert_eq!(map.len(), 5);
        assert!((map["makespan"] - 10.0).abs() < 1e-10);
        assert!((map["sla_violations"] - 2.0).abs() < 1e-10);
        assert!(map.contains_key("energy"));
        assert!(map.contains_key("avg_utilization"));
        assert!(map.contains_key("unassigned_tasks"));
    }

    #[test]
    fn test_calculate() {
        let infra = Infrastructure::new(
            vec![Vm::new(0, 500.0, 1024.0), Vm::new(1, 500.0, 1024.0)],
            vec![Host::new(0, 2000.0, 8192.0)],
        )
        .unwrap();
        let tasks = vec![
            Task::new(0, 100.0, 128.0, 1000.0),
            Task::new(1, 200.0, 256.0, 1500.0),
            Task::new(2, 150.0, 128.0, 1200.0),
        ];
        let mut cluster = Cluster::new(&infra, &tasks);
        cluster
            .apply(&Assignment::new(vec![Some(0), Some(0), Some(1)]))
            .unwrap();

        let m = ClusterMetrics::calculate(&cluster, 1000.0);
        assert!((m.makespan - 2500.0).abs() < 1e-10);
        // 450 / 2000 = 0.225 → 100 + 150 * 0.225
        assert!((m.avg_utilization - 0.225).abs() < 1e-10);
        assert!((m.energy - 133.75).abs() < 1e-10);
        // lengths 1500 and 1200 exceed 1000; 1000 does not
        assert_eq!(m.sla_violations, 2);
        assert_eq!(m.unassigned_tasks, 0);
    }
}
