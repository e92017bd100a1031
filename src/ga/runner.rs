//! Generic generational GA.
//!
//! # Algorithm
//!
//! 1. Create `P` individuals.
//! 2. For each generation: evaluate the whole population (optionally in
//!    parallel), update the global best, then build the next population:
//!    elites first, then select → crossover → mutate → repair until full.
//! 3. Stop after `max_generations` evaluated generations and return the
//!    best individual ever evaluated.
//!
//! All randomness is drawn on the calling thread from one seeded RNG, so a
//! run is reproducible regardless of `parallel`.
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::selection::{elite_indices, tournament_select};
use super::GaConfig;
use crate::error::{PlacementError, Result};

/// Problem definition consumed by [`GaRunner`].
///
/// Fitness is minimized. `evaluate` must be pure so a population can be
/// scored concurrently.
pub trait GaProblem: Sync {
    /// Chromosome type.
    type Individual: Clone + Send + Sync;
    /// Extra detail kept alongside the scalar fitness.
    type Evaluation: Clone + Send;

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Scores an individual. Returns the scalar fitness and its detail.
    fn evaluate(&self, individual: &Self::Individual) -> Result<(f64, Self::Evaluation)>;

    /// Recombines two parents into two children.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        rng: &mut R,
    ) -> Result<(Self::Individual, Self::Individual)>;

    /// Mutates an individual in place at the given per-gene rate.
    fn mutate<R: Rng>(&self, individual: &mut Self::Individual, rate: f64, rng: &mut R);

    /// Feasibility pass applied to every offspring. Default: no-op.
    fn repair(&self, _individual: &mut Self::Individual) {}
}

/// Per-generation convergence record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// 1-based generation number.
    pub generation: usize,
    /// Best fitness in this generation.
    pub best_fitness: f64,
    /// Mean fitness in this generation.
    pub mean_fitness: f64,
    /// Best fitness seen in any generation so far.
    pub global_best: f64,
}

/// Outcome of a GA run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaResult<I, E> {
    /// Best individual ever evaluated.
    pub best: I,
    /// Its fitness.
    pub best_fitness: f64,
    /// Its evaluation detail.
    pub best_evaluation: E,
    /// Generations evaluated.
    pub generations: usize,
    /// Total individual evaluations.
    pub evaluations: usize,
    /// Convergence history, one entry per generation.
    pub history: Vec<GenerationStats>,
    /// Seed the run's RNG was built from. Drawn from OS entropy when the
    /// config leaves it unset; passing it back reproduces the run.
    pub seed: u64,
}

/// Runs a [`GaProblem`] under a [`GaConfig`].
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA to completion.
    ///
    /// # Errors
    /// - [`PlacementError::InvalidConfig`](crate::PlacementError::InvalidConfig)
    ///   if the configuration is out of range.
    /// - Any error from [`GaProblem::evaluate`] or [`GaProblem::crossover`].
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual, P::Evaluation>> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = SmallRng::seed_from_u64(seed);
        info!(
            population = config.population_size,
            generations = config.max_generations,
            seed,
            seeded = config.seed.is_some(),
            parallel = config.parallel,
            "starting GA run"
        );

        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();

        let mut best: Option<(f64, P::Individual, P::Evaluation)> = None;
        let mut history = Vec::with_capacity(config.max_generations);
        let mut evaluations = 0;

        for generation in 1..=config.max_generations {
            // Barrier: the whole generation is scored before any selection.
            let scored = Self::evaluate_population(problem, &population, config.parallel)?;
            evaluations += scored.len();

            let fitnesses: Vec<f64> = scored.iter().map(|(f, _)| *f).collect();
            for (individual, (fitness, evaluation)) in population.iter().zip(scored) {
                let improves = best.as_ref().map_or(true, |(b, _, _)| fitness < *b);
                if improves {
                    best = Some((fitness, individual.clone(), evaluation));
                }
            }

            let gen_best = fitnesses.iter().copied().fold(f64::INFINITY, f64::min);
            let mean = fitnesses.iter().sum::<f64>() / fitnesses.len() as f64;
            let global_best = best.as_ref().map_or(f64::INFINITY, |(b, _, _)| *b);
            debug!(
                generation,
                total = config.max_generations,
                gen_best_fitness = gen_best,
                global_best,
                "generation evaluated"
            );
            history.push(GenerationStats {
                generation,
                best_fitness: gen_best,
                mean_fitness: mean,
                global_best,
            });

            if generation < config.max_generations {
                population = Self::next_generation(problem, config, &population, &fitnesses, &mut rng)?;
            }
        }

        let (best_fitness, best, best_evaluation) = best.ok_or_else(|| {
            PlacementError::InvalidConfig("no individual was evaluated".to_string())
        })?;
        info!(best_fitness, evaluations, "GA run finished");

        Ok(GaResult {
            best,
            best_fitness,
            best_evaluation,
            generations: config.max_generations,
            evaluations,
            history,
            seed,
        })
    }

    fn evaluate_population<P: GaProblem>(
        problem: &P,
        population: &[P::Individual],
        parallel: bool,
    ) -> Result<Vec<(f64, P::Evaluation)>> {
        if parallel {
            population.par_iter().map(|ind| problem.evaluate(ind)).collect()
        } else {
            population.iter().map(|ind| problem.evaluate(ind)).collect()
        }
    }

    fn next_generation<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        population: &[P::Individual],
        fitnesses: &[f64],
        rng: &mut R,
    ) -> Result<Vec<P::Individual>> {
        let size = config.population_size;
        let mut next: Vec<P::Individual> = elite_indices(fitnesses, config.elite_count())
            .into_iter()
            .map(|i| population[i].clone())
            .collect();

        while next.len() < size {
            let p1 = &population[tournament_select(fitnesses, config.tournament_size, rng)];
            let p2 = &population[tournament_select(fitnesses, config.tournament_size, rng)];

            let (mut c1, mut c2) = if rng.random::<f64>() < config.crossover_rate {
                problem.crossover(p1, p2, rng)?
            } else {
                (p1.clone(), p2.clone())
            };

            problem.mutate(&mut c1, config.mutation_rate, rng);
            problem.mutate(&mut c2, config.mutation_rate, rng);
            problem.repair(&mut c1);
            problem.repair(&mut c2);

            next.push(c1);
            if next.len() < size {
                next.push(c2);
            }
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimize the sum of a fixed-length bit vector.
    struct OneMax {
        len: usize,
    }

    impl GaProblem for OneMax {
        type Individual = Vec<u8>;
        type Evaluation = usize;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> Vec<u8> {
            (0..self.len).map(|_| rng.random_range(0..2)).collect()
        }

        fn evaluate(&self, individual: &Vec<u8>) -> Result<(f64, usize)> {
            let ones = individual.iter().filter(|&&b| b == 1).count();
            Ok((ones as f64, ones))
        }

        fn crossover<R: Rng>(
            &self,
            p1: &Vec<u8>,
            p2: &Vec<u8>,
            rng: &mut R,
        ) -> Result<(Vec<u8>, Vec<u8>)> {
            let cut = rng.random_range(1..self.len);
            let c1 = [&p1[..cut], &p2[cut..]].concat();
            let c2 = [&p2[..cut], &p1[cut..]].concat();
            Ok((c1, c2))
        }

        fn mutate<R: Rng>(&self, individual: &mut Vec<u8>, rate: f64, rng: &mut R) {
            for bit in individual.iter_mut() {
                if rng.random::<f64>() < rate {
                    *bit ^= 1;
                }
            }
        }
    }

    #[test]
    fn test_converges_on_onemax() {
        let problem = OneMax { len: 20 };
        let config = GaConfig::default()
            .with_population_size(30)
            .with_max_generations(60)
            .with_seed(42);

        let result = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.generations, 60);
        assert_eq!(result.evaluations, 30 * 60);
        assert_eq!(result.history.len(), 60);
        assert!(result.best_fitness <= result.history[0].best_fitness);
        assert_eq!(result.best_evaluation as f64, result.best_fitness);
    }

    #[test]
    fn test_global_best_never_worsens() {
        let problem = OneMax { len: 16 };
        let config = GaConfig::default()
            .with_population_size(12)
            .with_max_generations(25)
            .with_seed(7);
        let result = GaRunner::run(&problem, &config).unwrap();

        for pair in result.history.windows(2) {
            assert!(pair[1].global_best <= pair[0].global_best);
            // the elite carries the previous generation's best forward
            assert!(pair[1].best_fitness <= pair[0].best_fitness);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let problem = OneMax { len: 24 };
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(10)
            .with_seed(123);

        let seq = GaRunner::run(&problem, &config).unwrap();
        let par = GaRunner::run(&problem, &config.clone().with_parallel(true)).unwrap();
        assert_eq!(seq.best, par.best);
        assert_eq!(seq.best_fitness, par.best_fitness);
        assert_eq!(seq.history, par.history);
    }

    #[test]
    fn test_unseeded_run_reports_replayable_seed() {
        let problem = OneMax { len: 18 };
        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_generations(6);
        assert!(config.seed.is_none());

        let first = GaRunner::run(&problem, &config).unwrap();
        let replay = GaRunner::run(&problem, &config.clone().with_seed(first.seed)).unwrap();
        assert_eq!(replay.seed, first.seed);
        assert_eq!(replay.best, first.best);
        assert_eq!(replay.history, first.history);
    }

    #[test]
    fn test_seeded_run_reports_its_seed() {
        let problem = OneMax { len: 8 };
        let config = GaConfig::default()
            .with_population_size(6)
            .with_max_generations(2)
            .with_seed(99);
        assert_eq!(GaRunner::run(&problem, &config).unwrap().seed, 99);
    }

    #[test]
    fn test_offspring_copy_parents_without_crossover() {
        let problem = OneMax { len: 6 };
        let config = GaConfig::default()
            .with_population_size(8)
            .with_crossover_rate(0.0)
            .with_mutation_rate(0.0)
            .with_seed(17);
        let population: Vec<Vec<u8>> = (0..8u8)
            .map(|i| (0..6).map(|bit| (i >> (bit % 3)) & 1).collect())
            .collect();
        let fitnesses: Vec<f64> = population
            .iter()
            .map(|ind| problem.evaluate(ind).unwrap().0)
            .collect();
        let mut rng = SmallRng::seed_from_u64(17);

        let next =
            GaRunner::next_generation(&problem, &config, &population, &fitnesses, &mut rng).unwrap();
        assert_eq!(next.len(), 8);
        for child in &next {
            assert!(population.contains(child));
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let problem = OneMax { len: 4 };
        let config = GaConfig::default().with_max_generations(0);
        assert!(GaRunner::run(&problem, &config).is_err());
    }
}
