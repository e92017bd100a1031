//! Task placement as a GA problem.
//!
//! Bridges the domain models (tasks, infrastructure) and the fitness
//! function to the generic [`GaRunner`].

use rand::Rng;

use super::chromosome::{random_assignment, single_point_crossover, uniform_mutation};
use super::repair::repair;
use super::runner::{GaProblem, GaResult, GaRunner};
use super::GaConfig;
use crate::error::{PlacementError, Result};
use crate::fitness::{FitnessEvaluator, FitnessReport};
use crate::models::{Assignment, Infrastructure, Task};
use crate::validation::validate_tasks;

/// Result of a placement GA run.
pub type PlacementResult = GaResult<Assignment, FitnessReport>;

impl PlacementResult {
    /// Plain `(assignment, fitness, report)` triple for result sinks.
    pub fn into_parts(self) -> (Assignment, f64, FitnessReport) {
        (self.best, self.best_fitness, self.best_evaluation)
    }
}

/// GA problem: assign each task to a VM.
///
/// # Example
/// ```
/// use u_placement::ga::{GaConfig, PlacementProblem};
/// use u_placement::models::{Host, Infrastructure, Task, Vm};
///
/// let infra = Infrastructure::new(
///     vec![Vm::new(0, 500.0, 1024.0), Vm::new(1, 500.0, 1024.0)],
///     vec![Host::new(0, 2000.0, 8192.0)],
/// ).unwrap();
/// let tasks = vec![
///     Task::new(0, 100.0, 128.0, 1000.0),
///     Task::new(1, 200.0, 256.0, 1500.0),
/// ];
///
/// let problem = PlacementProblem::new(&tasks, &infra).unwrap();
/// let config = GaConfig::default()
///     .with_population_size(10)
///     .with_max_generations(5)
///     .with_seed(42);
/// let result = problem.solve(&config).unwrap();
/// assert_eq!(result.best.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct PlacementProblem<'a> {
    tasks: &'a [Task],
    infra: &'a Infrastructure,
    evaluator: FitnessEvaluator,
}

impl<'a> PlacementProblem<'a> {
    /// Creates a problem with default weights and cost model.
    ///
    /// # Errors
    /// [`PlacementError::InvalidInput`] if the tasks fail validation.
    pub fn new(tasks: &'a [Task], infra: &'a Infrastructure) -> Result<Self> {
        validate_tasks(tasks).map_err(PlacementError::InvalidInput)?;
        Ok(Self {
            tasks,
            infra,
            evaluator: FitnessEvaluator::default(),
        })
    }

    /// Sets the fitness evaluator (weights and cost model).
    pub fn with_evaluator(mut self, evaluator: FitnessEvaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks
    }

    pub fn infrastructure(&self) -> &Infrastructure {
        self.infra
    }

    pub fn evaluator(&self) -> &FitnessEvaluator {
        &self.evaluator
    }

    /// Scores a single assignment with this problem's evaluator.
    pub fn score(&self, assignment: &Assignment) -> Result<FitnessReport> {
        self.evaluator.score(assignment, self.tasks, self.infra)
    }

    /// Runs the GA and returns the best assignment ever evaluated.
    pub fn solve(&self, config: &GaConfig) -> Result<PlacementResult> {
        GaRunner::run(self, config)
    }
}

impl GaProblem for PlacementProblem<'_> {
    type Individual = Assignment;
    type Evaluation = FitnessReport;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Assignment {
        random_assignment(self.tasks.len(), self.infra.vm_count(), rng)
    }

    fn evaluate(&self, individual: &Assignment) -> Result<(f64, FitnessReport)> {
        let report = self.score(individual)?;
        Ok((report.fitness, report))
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &Assignment,
        parent2: &Assignment,
        rng: &mut R,
    ) -> Result<(Assignment, Assignment)> {
        single_point_crossover(parent1, parent2, rng)
    }

    fn mutate<R: Rng>(&self, individual: &mut Assignment, rate: f64, rng: &mut R) {
        uniform_mutation(individual, self.infra.vm_count(), rate, rng);
    }

    fn repair(&self, individual: &mut Assignment) {
        repair(individual, self.tasks, self.infra.vms());
    }
}
