//! Baseline-vs-GA comparison.
//!
//! Runs the greedy heuristics and the GA on the same workload and
//! infrastructure with the same fitness evaluator, and collects a
//! serializable report. Persisting or plotting the report is left to the
//! caller.
//!
//! # Example
//!
//! ```
//! use u_placement::experiment::Experiment;
//! use u_placement::ga::GaConfig;
//! use u_placement::workload::SyntheticWorkload;
//!
//! let tasks = SyntheticWorkload::default().with_num_tasks(20).generate_seeded(42).unwrap();
//! let infra = Experiment::default_infrastructure().unwrap();
//! let config = GaConfig::default()
//!     .with_population_size(10)
//!     .with_max_generations(5)
//!     .with_seed(42);
//!
//! let report = Experiment::new(&tasks, &infra).with_config(config).run().unwrap();
//! assert_eq!(report.ga.best.len(), 20);
//! ```

use serde::Serialize;
use tracing::info;

use crate::baseline::Heuristic;
use crate::error::Result;
use crate::fitness::{FitnessEvaluator, FitnessReport};
use crate::ga::{GaConfig, PlacementProblem, PlacementResult};
use crate::models::{Assignment, Infrastructure, Task};

/// One heuristic's assignment and score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaselineOutcome {
    pub heuristic: Heuristic,
    pub assignment: Assignment,
    pub report: FitnessReport,
}

/// Full comparison result.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentReport {
    /// Reference heuristics, in the order they were run.
    pub baselines: Vec<BaselineOutcome>,
    /// GA outcome.
    pub ga: PlacementResult,
}

impl ExperimentReport {
    /// Baseline outcome for a heuristic, if it was run.
    pub fn baseline(&self, heuristic: Heuristic) -> Option<&BaselineOutcome> {
        self.baselines.iter().find(|b| b.heuristic == heuristic)
    }

    /// `baseline fitness - GA fitness`; positive when the GA did better.
    pub fn improvement_over(&self, heuristic: Heuristic) -> Option<f64> {
        self.baseline(heuristic)
            .map(|b| b.report.fitness - self.ga.best_fitness)
    }
}

/// A configured comparison run.
#[derive(Debug, Clone)]
pub struct Experiment<'a> {
    tasks: &'a [Task],
    infra: &'a Infrastructure,
    config: GaConfig,
    evaluator: FitnessEvaluator,
    heuristics: Vec<Heuristic>,
}

impl<'a> Experiment<'a> {
    /// Creates an experiment with default GA settings (seed 42), default
    /// weights, and both heuristics.
    pub fn new(tasks: &'a [Task], infra: &'a Infrastructure) -> Self {
        Self {
            tasks,
            infra,
            config: GaConfig::default()
                .with_population_size(30)
                .with_max_generations(50)
                .with_seed(42),
            evaluator: FitnessEvaluator::default(),
            heuristics: vec![Heuristic::FirstFit, Heuristic::RoundRobin],
        }
    }

    /// Reference infrastructure: 10 VMs (cpu 1000, mem 2048) on 3 hosts
    /// (cpu 10000, mem 32768, 100-250 W).
    pub fn default_infrastructure() -> Result<Infrastructure> {
        Infrastructure::uniform(10, 1000.0, 2048.0, 3, 10_000.0, 32_768.0)
    }

    pub fn with_config(mut self, config: GaConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_evaluator(mut self, evaluator: FitnessEvaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn with_heuristics(mut self, heuristics: Vec<Heuristic>) -> Self {
        self.heuristics = heuristics;
        self
    }

    /// Runs every heuristic, then the GA.
    pub fn run(&self) -> Result<ExperimentReport> {
        let problem =
            PlacementProblem::new(self.tasks, self.infra)?.with_evaluator(self.evaluator);

        let baselines = self
            .heuristics
            .iter()
            .map(|&heuristic| -> Result<BaselineOutcome> {
                let assignment = heuristic.assign(self.tasks, self.infra.vms());
                let report = problem.score(&assignment)?;
                info!(
                    heuristic = heuristic.name(),
                    fitness = report.fitness,
                    makespan = report.metrics.makespan,
                    energy = report.metrics.energy,
                    sla_violations = report.metrics.sla_violations,
                    "baseline evaluated"
                );
                Ok(BaselineOutcome {
                    heuristic,
                    assignment,
                    report,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let ga = problem.solve(&self.config)?;
        info!(
            fitness = ga.best_fitness,
            makespan = ga.best_evaluation.metrics.makespan,
            energy = ga.best_evaluation.metrics.energy,
            sla_violations = ga.best_evaluation.metrics.sla_violations,
            "GA evaluated"
        );

        Ok(ExperimentReport { baselines, ga })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::SyntheticWorkload;

    #[test]
    fn test_default_infrastructure() {
        let infra = Experiment::default_infrastructure().unwrap();
        assert_eq!(infra.vm_count(), 10);
        assert_eq!(infra.host_count(), 3);
        assert!((infra.hosts()[0].power_model.max_power - 250.0).abs() < 1e-10);
    }

    #[test]
    fn test_run_reports_all_parts() {
        let tasks = SyntheticWorkload::default()
            .with_num_tasks(30)
            .generate_seeded(42)
            .unwrap();
        let infra = Experiment::default_infrastructure().unwrap();
        let config = GaConfig::default()
            .with_population_size(12)
            .with_max_generations(8)
            .with_seed(1);

        let report = Experiment::new(&tasks, &infra)
            .with_config(config)
            .run()
            .unwrap();

        assert_eq!(report.baselines.len(), 2);
        let ff = report.baseline(Heuristic::FirstFit).unwrap();
        assert_eq!(ff.assignment.len(), 30);
        assert!(ff.report.fitness.is_finite());
        assert_eq!(report.ga.history.len(), 8);
        assert!(report.improvement_over(Heuristic::RoundRobin).is_some());

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["ga"]["best_evaluation"]["metrics"]["energy"].is_number());
        assert_eq!(json["baselines"][0]["heuristic"], "FirstFit");
    }

    #[test]
    fn test_heuristic_subset() {
        let tasks = SyntheticWorkload::default()
            .with_num_tasks(5)
            .generate_seeded(3)
            .unwrap();
        let infra = Experiment::default_infrastructure().unwrap();
        let report = Experiment::new(&tasks, &infra)
            .with_config(GaConfig::default().with_population_size(4).with_max_generations(2).with_seed(3))
            .with_heuristics(vec![Heuristic::RoundRobin])
            .run()
            .unwrap();
        assert!(report.baseline(Heuristic::FirstFit).is_none());
        assert!(report.improvement_over(Heuristic::FirstFit).is_none());
    }
}
