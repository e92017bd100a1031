//! First-fit and round-robin placement.
//!
//! # Complexity
//! First-fit is O(n * m) for n tasks and m VMs; round-robin is O(n).

use serde::{Deserialize, Serialize};

use crate::models::{Assignment, Task, Vm};

/// First-fit: each task, in input order, goes to the lowest-index VM whose
/// running cpu and mem load still fits it. Tasks that fit nowhere are left
/// unassigned.
///
/// Loads are tracked locally; `vms` is only read.
///
/// # Example
///
/// ```
/// use u_placement::baseline::first_fit;
/// use u_placement::models::{Task, Vm};
///
/// let tasks = vec![
///     Task::new(0, 100.0, 128.0, 1000.0),
///     Task::new(1, 200.0, 256.0, 1500.0),
///     Task::new(2, 150.0, 128.0, 1200.0),
/// ];
/// let vms = vec![Vm::new(0, 500.0, 1024.0), Vm::new(1, 500.0, 1024.0)];
/// assert_eq!(first_fit(&tasks, &vms).to_indices(), vec![0, 0, 0]);
/// ```
pub fn first_fit(tasks: &[Task], vms: &[Vm]) -> Assignment {
    let mut cpu = vec![0.0; vms.len()];
    let mut mem = vec![0.0; vms.len()];
    let mut assignment = Assignment::unassigned(tasks.len());

    for (i, task) in tasks.iter().enumerate() {
        let target = vms
            .iter()
            .enumerate()
            .position(|(j, vm)| vm.fits(cpu[j], mem[j], task.cpu, task.mem));
        if let Some(j) = target {
            cpu[j] += task.cpu;
            mem[j] += task.mem;
            assignment.set(i, Some(j));
        }
    }
    assignment
}

/// Round-robin: task `i` goes to VM `i % vm_count`, ignoring capacity.
///
/// With no VMs every task is unassigned.
pub fn round_robin(tasks: &[Task], vms: &[Vm]) -> Assignment {
    if vms.is_empty() {
        return Assignment::unassigned(tasks.len());
    }
    (0..tasks.len())
        .map(|i| Some(i % vms.len()))
        .collect::<Vec<_>>()
        .into()
}

/// Baseline heuristic selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heuristic {
    FirstFit,
    RoundRobin,
}

impl Heuristic {
    /// Builds an assignment with this heuristic.
    pub fn assign(&self, tasks: &[Task], vms: &[Vm]) -> Assignment {
        match self {
            Heuristic::FirstFit => first_fit(tasks, vms),
            Heuristic::RoundRobin => round_robin(tasks, vms),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::FirstFit => "first-fit",
            Heuristic::RoundRobin => "round-robin",
        }
    }
}
