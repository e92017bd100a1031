//! Weighted scalar fitness over cluster metrics.
//!
//! Collapses the metric breakdown into one score (lower = better):
//!
//! ```text
//! fitness = w_makespan * makespan
//!         + w_energy   * energy
//!         + w_util     * avg_utilization     (w_util is negative: rewarded)
//!         + w_sla      * sla_violations
//! ```
//!
//! Metrics are not normalized; weights carry the scale.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cluster::{ClusterMetrics, CostModel};
use crate::error::{PlacementError, Result};
use crate::models::{Assignment, Infrastructure, Task};

/// Signed linear coefficients per metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitnessWeights {
    pub makespan: f64,
    pub energy: f64,
    /// Negative by default so higher utilization lowers the score.
    pub utilization: f64,
    pub sla: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            makespan: 0.4,
            energy: 0.3,
            utilization: -0.2,
            sla: 0.1,
        }
    }
}

impl FitnessWeights {
    /// Builds weights from a metric name → coefficient map.
    ///
    /// Names not present keep their default coefficient. Accepted names:
    /// `makespan`, `energy`, `utilization` (alias `avg_utilization`),
    /// `sla` (alias `sla_violations`).
    ///
    /// `util` is a reward magnitude: its value is stored negated, so
    /// `util = 0.2` gives the default `utilization = -0.2`.
    ///
    /// # Errors
    /// [`PlacementError::InvalidConfig`] on an unknown name or non-finite value.
    pub fn from_map<'a>(entries: impl IntoIterator<Item = (&'a str, f64)>) -> Result<Self> {
        let mut weights = Self::default();
        for (name, value) in entries {
            if !value.is_finite() {
                return Err(PlacementError::InvalidConfig(format!(
                    "weight '{name}' is not finite: {value}"
                )));
            }
            match name {
                "makespan" => weights.makespan = value,
                "energy" => weights.energy = value,
                "utilization" | "avg_utilization" => weights.utilization = value,
                "util" => weights.utilization = -value,
                "sla" | "sla_violations" => weights.sla = value,
                other => {
                    return Err(PlacementError::InvalidConfig(format!(
                        "unknown fitness weight '{other}'"
                    )))
                }
            }
        }
        Ok(weights)
    }

    pub fn with_makespan(mut self, w: f64) -> Self {
        self.makespan = w;
        self
    }

    pub fn with_energy(mut self, w: f64) -> Self {
        self.energy = w;
        self
    }

    pub fn with_utilization(mut self, w: f64) -> Self {
        self.utilization = w;
        self
    }

    pub fn with_sla(mut self, w: f64) -> Self {
        self.sla = w;
        self
    }

    /// Weighted sum of the metrics.
    pub fn combine(&self, metrics: &ClusterMetrics) -> f64 {
        self.makespan * metrics.makespan
            + self.energy * metrics.energy
            + self.utilization * metrics.avg_utilization
            + self.sla * metrics.sla_violations as f64
    }
}

/// Scalar fitness together with the metric breakdown that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessReport {
    pub fitness: f64,
    pub metrics: ClusterMetrics,
}

impl FitnessReport {
    /// Metrics map with the scalar added under `fitness`.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        let mut map = self.metrics.to_map();
        map.insert("fitness".to_string(), self.fitness);
        map
    }
}

/// Scores assignments against a fixed cost model and weight set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FitnessEvaluator {
    pub weights: FitnessWeights,
    pub cost_model: CostModel,
}

impl FitnessEvaluator {
    pub fn new(weights: FitnessWeights) -> Self {
        Self {
            weights,
            cost_model: CostModel::default(),
        }
    }

    /// Sets the cost model.
    pub fn with_cost_model(mut self, cost_model: CostModel) -> Self {
        self.cost_model = cost_model;
        self
    }

    /// Evaluates one assignment.
    ///
    /// Pure: each call simulates on its own snapshot, so calls may run
    /// concurrently against the same infrastructure.
    pub fn score(
        &self,
        assignment: &Assignment,
        tasks: &[Task],
        infra: &Infrastructure,
    ) -> Result<FitnessReport> {
        let metrics = self.cost_model.evaluate(infra, tasks, assignment)?;
        Ok(FitnessReport {
            fitness: self.weights.combine(&metrics),
            metrics,
        })
    }
}

/// Scores an assignment with the default cost model and the given (or default) weights.
pub fn evaluate_assignment(
    assignment: &Assignment,
    tasks: &[Task],
    infra: &Infrastructure,
    weights: Option<FitnessWeights>,
) -> Result<FitnessReport> {
    FitnessEvaluator::new(weights.unwrap_or_default()).score(assignment, tasks, infra)
}
