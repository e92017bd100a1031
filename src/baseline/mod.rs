//! Greedy reference heuristics.
//!
//! Produce the same [`Assignment`](crate::models::Assignment) representation
//! the GA searches over, so their fitness is directly comparable.
//!
//! # Algorithms
//!
//! - **First-fit**: input order, lowest-index VM with room, else unassigned.
//! - **Round-robin**: task `i` → VM `i mod m`, capacity ignored.
//!
//! # References
//!
//! - Johnson (1974), "Fast algorithms for bin packing"

mod greedy;

pub use greedy::{first_fit, round_robin, Heuristic};
