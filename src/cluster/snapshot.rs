//! Evaluation-scoped cluster snapshot.
//!
//! A [`Cluster`] borrows the immutable task/VM/host tables and keeps all
//! per-evaluation state (VM→host topology, per-VM task lists and loads) in
//! its own index arrays. Templates are never mutated, so snapshots built
//! concurrently from the same infrastructure cannot interfere.

use crate::error::{PlacementError, Result};
use crate::models::{Assignment, Infrastructure, Task};

/// Disposable simulation state for one assignment.
#[derive(Debug, Clone)]
pub struct Cluster<'a> {
    infra: &'a Infrastructure,
    tasks: &'a [Task],
    /// Host index of each VM.
    vm_host: Vec<usize>,
    /// Task indices placed on each VM, in placement order.
    vm_tasks: Vec<Vec<usize>>,
    vm_cpu: Vec<f64>,
    vm_mem: Vec<f64>,
    vm_busy: Vec<f64>,
    unassigned: usize,
}

impl<'a> Cluster<'a> {
    /// Builds an empty snapshot with VMs placed round-robin over hosts.
    ///
    /// VM `i` lands on host `i % host_count`. Host placement is fixed
    /// infrastructure setup, not part of the optimized decision space.
    pub fn new(infra: &'a Infrastructure, tasks: &'a [Task]) -> Self {
        let vm_count = infra.vm_count();
        let host_count = infra.host_count();
        Self {
            infra,
            tasks,
            vm_host: (0..vm_count).map(|i| i % host_count).collect(),
            vm_tasks: vec![Vec::new(); vm_count],
            vm_cpu: vec![0.0; vm_count],
            vm_mem: vec![0.0; vm_count],
            vm_busy: vec![0.0; vm_count],
            unassigned: 0,
        }
    }

    /// Places task `task` on VM `vm`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn assign_task(&mut self, task: usize, vm: usize) {
        let t = &self.tasks[task];
        self.vm_tasks[vm].push(task);
        self.vm_cpu[vm] += t.cpu;
        self.vm_mem[vm] += t.mem;
        self.vm_busy[vm] += t.length;
    }

    /// Applies a whole assignment.
    ///
    /// Genes that are `None` or point past the VM list count as unassigned.
    pub fn apply(&mut self, assignment: &Assignment) -> Result<()> {
        if assignment.len() != self.tasks.len() {
            return Err(PlacementError::AssignmentLength {
                expected: self.tasks.len(),
                actual: assignment.len(),
            });
        }
        let vm_count = self.vm_count();
        for (task, gene) in assignment.genes().iter().enumerate() {
            match *gene {
                Some(vm) if vm < vm_count => self.assign_task(task, vm),
                _ => self.unassigned += 1,
            }
        }
        Ok(())
    }

    pub fn vm_count(&self) -> usize {
        self.vm_host.len()
    }

    pub fn host_count(&self) -> usize {
        self.infra.host_count()
    }

    /// Host index the VM runs on.
    pub fn host_of(&self, vm: usize) -> usize {
        self.vm_host[vm]
    }

    /// VM indices placed on a host.
    pub fn vms_on(&self, host: usize) -> impl Iterator<Item = usize> + '_ {
        self.vm_host
            .iter()
            .enumerate()
            .filter(move |&(_, &h)| h == host)
            .map(|(vm, _)| vm)
    }

    /// Task indices placed on a VM.
    pub fn tasks_on(&self, vm: usize) -> &[usize] {
        &self.vm_tasks[vm]
    }

    pub fn vm_cpu_load(&self, vm: usize) -> f64 {
        self.vm_cpu[vm]
    }

    pub fn vm_mem_load(&self, vm: usize) -> f64 {
        self.vm_mem[vm]
    }

    /// Serial processing time of a VM (sum of assigned task lengths).
    pub fn vm_busy_time(&self, vm: usize) -> f64 {
        self.vm_busy[vm]
    }

    /// Whether a VM's load exceeds its cpu or mem ceiling.
    pub fn is_overloaded(&self, vm: usize) -> bool {
        self.infra.vms()[vm].is_overloaded(self.vm_cpu[vm], self.vm_mem[vm])
    }

    /// Aggregate CPU load of all VMs on a host.
    pub fn host_cpu_load(&self, host: usize) -> f64 {
        self.vms_on(host).map(|vm| self.vm_cpu[vm]).sum()
    }

    /// Host utilization, capped at 1.0.
    pub fn host_utilization(&self, host: usize) -> f64 {
        self.infra.hosts()[host].utilization(self.host_cpu_load(host))
    }

    /// Host power under the linear idle/max model.
    pub fn host_power(&self, host: usize) -> f64 {
        self.infra.hosts()[host].power(self.host_cpu_load(host))
    }

    /// Number of tasks that were not placed on a valid VM.
    pub fn unassigned_tasks(&self) -> usize {
        self.unassigned
    }

    /// Number of tasks placed on a valid VM.
    pub fn assigned_tasks(&self) -> usize {
        self.vm_tasks.iter().map(Vec::len).sum()
    }

    /// Maximum per-VM busy time. Each VM is a single serial processor.
    pub fn makespan(&self) -> f64 {
        self.vm_busy.iter().copied().fold(0.0, f64::max)
    }

    /// Sum of host power draws.
    pub fn total_energy(&self) -> f64 {
        (0..self.host_count()).map(|h| self.host_power(h)).sum()
    }

    /// Mean host utilization.
    pub fn avg_utilization(&self) -> f64 {
        let total: f64 = (0..self.host_count()).map(|h| self.host_utilization(h)).sum();
        total / self.host_count() as f64
    }

    /// Placed tasks longer than `threshold`, plus every unassigned task.
    pub fn sla_violations(&self, threshold: f64) -> usize {
        let long_running = self
            .vm_tasks
            .iter()
            .flatten()
            .filter(|&&t| self.tasks[t].length > threshold)
            .count();
        long_running + self.unassigned
    }
}
