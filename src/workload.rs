//! Seeded synthetic workload generation.
//!
//! Produces trace-like task batches for experiments when no recorded
//! trace is at hand:
//! - arrivals form a Poisson process (exponential inter-arrival times)
//! - cpu and mem are drawn from small discrete menus
//! - length is a uniform integer range

use rand::prelude::IndexedRandom;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp};
use serde::{Deserialize, Serialize};

use crate::error::{PlacementError, Result};
use crate::models::Task;

/// Synthetic trace parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticWorkload {
    /// Tasks to generate.
    pub num_tasks: usize,
    /// Mean time between arrivals.
    pub mean_interarrival: f64,
    /// CPU demand menu.
    pub cpu_choices: Vec<f64>,
    /// Memory demand menu.
    pub mem_choices: Vec<f64>,
    /// Inclusive task length range.
    pub length_range: (u32, u32),
}

impl Default for SyntheticWorkload {
    fn default() -> Self {
        Self {
            num_tasks: 100,
            mean_interarrival: 10.0,
            cpu_choices: vec![500.0, 750.0, 1000.0, 1200.0, 1500.0],
            mem_choices: vec![512.0, 1024.0, 2048.0, 4096.0],
            length_range: (60, 600),
        }
    }
}

impl SyntheticWorkload {
    pub fn with_num_tasks(mut self, n: usize) -> Self {
        self.num_tasks = n;
        self
    }

    pub fn with_mean_interarrival(mut self, mean: f64) -> Self {
        self.mean_interarrival = mean;
        self
    }

    pub fn with_cpu_choices(mut self, choices: Vec<f64>) -> Self {
        self.cpu_choices = choices;
        self
    }

    pub fn with_mem_choices(mut self, choices: Vec<f64>) -> Self {
        self.mem_choices = choices;
        self
    }

    pub fn with_length_range(mut self, min: u32, max: u32) -> Self {
        self.length_range = (min, max);
        self
    }

    /// Generates tasks with ids `1..=num_tasks` and increasing arrivals.
    ///
    /// # Errors
    /// [`PlacementError::InvalidConfig`] on an empty menu, an inverted
    /// length range, or a non-positive mean inter-arrival time.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Vec<Task>> {
        let (min_len, max_len) = self.length_range;
        if min_len > max_len {
            return Err(PlacementError::InvalidConfig(format!(
                "length range is inverted: {min_len} > {max_len}"
            )));
        }
        if self.cpu_choices.is_empty() || self.mem_choices.is_empty() {
            return Err(PlacementError::InvalidConfig(
                "cpu and mem choice lists must be non-empty".to_string(),
            ));
        }
        let interarrival = Exp::new(1.0 / self.mean_interarrival)
            .ok()
            .filter(|_| self.mean_interarrival > 0.0)
            .ok_or_else(|| {
                PlacementError::InvalidConfig(format!(
                    "mean inter-arrival must be positive, got {}",
                    self.mean_interarrival
                ))
            })?;

        let mut arrival = 0.0;
        let mut tasks = Vec::with_capacity(self.num_tasks);
        for id in 1..=self.num_tasks as u64 {
            arrival += interarrival.sample(rng);
            let cpu = self.cpu_choices.choose(rng).copied().unwrap_or_default();
            let mem = self.mem_choices.choose(rng).copied().unwrap_or_default();
            let length = rng.random_range(min_len..=max_len) as f64;
            tasks.push(Task::new(id, cpu, mem, length).with_arrival((arrival * 100.0).round() / 100.0));
        }
        Ok(tasks)
    }

    /// Generates with a fresh RNG seeded from `seed`.
    pub fn generate_seeded(&self, seed: u64) -> Result<Vec<Task>> {
        self.generate(&mut SmallRng::seed_from_u64(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_trace_shape() {
        let gen = SyntheticWorkload::default();
        let tasks = gen.generate_seeded(42).unwrap();
        assert_eq!(tasks.len(), 100);
        assert_eq!(tasks[0].id, 1);
        assert_eq!(tasks[99].id, 100);
        for t in &tasks {
            assert!(gen.cpu_choices.contains(&t.cpu));
            assert!(gen.mem_choices.contains(&t.mem));
            assert!((60.0..=600.0).contains(&t.length));
            assert_eq!(t.length.fract(), 0.0);
        }
        assert!(tasks.windows(2).all(|w| w[1].arrival >= w[0].arrival));
    }

    #[test]
    fn test_seed_reproducible() {
        let gen = SyntheticWorkload::default().with_num_tasks(20);
        assert_eq!(gen.generate_seeded(7).unwrap(), gen.generate_seeded(7).unwrap());
        assert_ne!(gen.generate_seeded(7).unwrap(), gen.generate_seeded(8).unwrap());
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(SyntheticWorkload::default()
            .with_length_range(10, 5)
            .generate_seeded(1)
            .is_err());
        assert!(SyntheticWorkload::default()
            .with_cpu_choices(vec![])
            .generate_seeded(1)
            .is_err());
        assert!(SyntheticWorkload::default()
            .with_mean_interarrival(0.0)
            .generate_seeded(1)
            .is_err());
    }

    #[test]
    fn test_empty_workload() {
        let tasks = SyntheticWorkload::default()
            .with_num_tasks(0)
            .generate_seeded(1)
            .unwrap();
        assert!(tasks.is_empty());
    }
}
