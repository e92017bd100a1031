//! GA run configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PlacementError, Result};

/// Parameters of one GA run. Every field is independently settable.
///
/// # Example
/// ```
/// use u_placement::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_max_generations(50)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.elite_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Individuals per generation.
    pub population_size: usize,
    /// Generations to evaluate. The only termination criterion.
    pub max_generations: usize,
    /// Probability that a selected pair is recombined.
    pub crossover_rate: f64,
    /// Per-gene re-randomization probability.
    pub mutation_rate: f64,
    /// Fraction of the population copied unchanged into the next generation.
    pub elitism_frac: f64,
    /// Individuals sampled per tournament.
    pub tournament_size: usize,
    /// RNG seed. `None` seeds from OS entropy (non-reproducible).
    pub seed: Option<u64>,
    /// Evaluate each generation on the rayon thread pool.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            crossover_rate: 0.8,
            mutation_rate: 0.05,
            elitism_frac: 0.05,
            tournament_size: 3,
            seed: None,
            parallel: false,
        }
    }
}

impl GaConfig {
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    pub fn with_max_generations(mut self, generations: usize) -> Self {
        self.max_generations = generations;
        self
    }

    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn with_elitism_frac(mut self, frac: f64) -> Self {
        self.elitism_frac = frac;
        self
    }

    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Number of elites: `max(1, floor(elitism_frac * population_size))`,
    /// capped at the population size.
    pub fn elite_count(&self) -> usize {
        let n = (self.elitism_frac * self.population_size as f64).floor() as usize;
        n.max(1).min(self.population_size)
    }

    /// Checks that all parameters are in range.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();
        if self.population_size == 0 {
            problems.push("population_size must be at least 1".to_string());
        }
        if self.max_generations == 0 {
            problems.push("max_generations must be at least 1".to_string());
        }
        if self.tournament_size == 0 {
            problems.push("tournament_size must be at least 1".to_string());
        }
        for (name, value) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
            ("elitism_frac", self.elitism_frac),
        ] {
            if !(0.0..=1.0).contains(&value) {
                problems.push(format!("{name} must be in [0, 1], got {value}"));
            }
        }
        if problems.is_empty() {
            Ok(())
        } else {
            Err(PlacementError::InvalidConfig(problems.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GaConfig::default();
        assert_eq!(c.population_size, 50);
        assert_eq!(c.max_generations, 100);
        assert!((c.crossover_rate - 0.8).abs() < 1e-10);
        assert!((c.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(c.tournament_size, 3);
        assert_eq!(c.seed, None);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_elite_count() {
        assert_eq!(GaConfig::default().elite_count(), 2); // 0.05 * 50
        assert_eq!(GaConfig::default().with_population_size(10).elite_count(), 1);
        assert_eq!(GaConfig::default().with_elitism_frac(0.0).elite_count(), 1);
        assert_eq!(
            GaConfig::default()
                .with_population_size(4)
                .with_elitism_frac(1.0)
                .elite_count(),
            4
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let err = GaConfig::default()
            .with_population_size(0)
            .with_max_generations(0)
            .with_mutation_rate(1.5)
            .validate()
            .unwrap_err();
        match err {
            PlacementError::InvalidConfig(msg) => {
                assert!(msg.contains("population_size"));
                assert!(msg.contains("max_generations"));
                assert!(msg.contains("mutation_rate"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_deserialize_partial() {
        let c: GaConfig =
            serde_json::from_str(r#"{"population_size": 10, "seed": 7, "parallel": true}"#).unwrap();
        assert_eq!(c.population_size, 10);
        assert_eq!(c.seed, Some(7));
        assert!(c.parallel);
        assert_eq!(c.max_generations, 100);
    }
}
