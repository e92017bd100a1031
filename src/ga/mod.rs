//! GA-based placement optimization.
//!
//! A small generational GA framework ([`GaProblem`], [`GaConfig`],
//! [`GaRunner`]) and the placement problem built on it.
//!
//! # Encoding
//!
//! One gene per task holding the VM index it runs on (see
//! [`Assignment`](crate::models::Assignment)). Hosts are not encoded.
//!
//! # Operators
//!
//! - Initialization: uniform random VM per task, no repair
//! - Selection: tournament of size `k` without replacement
//! - Crossover: single-point, with probability `crossover_rate`
//! - Mutation: per-gene re-draw with probability `mutation_rate`
//! - Repair: greedy relocation of the largest tasks off overloaded VMs
//! - Replacement: generational with elitism
//!
//! # Submodules
//!
//! - [`selection`]: tournament selection and elite ranking

mod chromosome;
mod config;
mod problem;
mod repair;
mod runner;
pub mod selection;

pub use chromosome::{random_assignment, single_point_crossover, uniform_mutation};
pub use config::GaConfig;
pub use problem::{PlacementProblem, PlacementResult};
pub use repair::repair;
pub use runner::{GaProblem, GaResult, GaRunner, GenerationStats};
