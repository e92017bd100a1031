//! Task-to-VM placement optimization.
//!
//! Searches for a near-optimal assignment of a batch of compute tasks onto
//! a fixed pool of VMs hosted on physical machines, minimizing a weighted
//! blend of makespan, energy, utilization, and SLA-violation penalties.
//! Offline and batch-oriented: the whole workload is known up front.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Vm`, `Host`, `Infrastructure`, `Assignment`
//! - **`cluster`**: Cost model — per-evaluation `Cluster` snapshot and `ClusterMetrics`
//! - **`fitness`**: Weighted scalar fitness over the metrics
//! - **`ga`**: Generational GA with tournament selection, single-point
//!   crossover, per-gene mutation, capacity repair, and elitism
//! - **`baseline`**: First-fit and round-robin reference heuristics
//! - **`workload`**: Seeded synthetic trace generation
//! - **`experiment`**: Baseline-vs-GA comparison report
//! - **`validation`**: Input integrity checks
//!
//! # Architecture
//!
//! Tasks, VMs and hosts are immutable tables. Every fitness evaluation
//! builds its own index-based `Cluster` snapshot over them, so candidate
//! evaluations are independent and may run in parallel. Loading traces,
//! persisting results, and plotting are the caller's concern.
//!
//! # References
//!
//! - Beloglazov & Buyya (2012), "Optimal online deterministic algorithms and
//!   adaptive heuristics for energy and performance efficient dynamic
//!   consolidation of virtual machines"
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"

pub mod baseline;
pub mod cluster;
pub mod error;
pub mod experiment;
pub mod fitness;
pub mod ga;
pub mod models;
pub mod validation;
pub mod workload;

pub use error::{PlacementError, Result};
