//! Assignment (chromosome) model.
//!
//! An assignment maps each task, by position, to a VM index or to
//! "unassigned". It is the only artifact the optimizer manipulates and
//! holds no reference to hosts.

use serde::{Deserialize, Serialize};

/// Task-to-VM assignment. Gene `i` is the VM index for task `i`.
///
/// A `Some(index)` gene may still point past the VM list (e.g. when built
/// from external data); the cost model treats such genes as unassigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment {
    genes: Vec<Option<usize>>,
}

impl Assignment {
    /// Wraps a gene vector.
    pub fn new(genes: Vec<Option<usize>>) -> Self {
        Self { genes }
    }

    /// An assignment of `len` tasks, none placed.
    pub fn unassigned(len: usize) -> Self {
        Self {
            genes: vec![None; len],
        }
    }

    /// Builds from the integer form where any negative value means unassigned.
    pub fn from_indices(indices: &[i64]) -> Self {
        Self {
            genes: indices
                .iter()
                .map(|&i| usize::try_from(i).ok())
                .collect(),
        }
    }

    /// Integer form with `-1` for unassigned tasks.
    pub fn to_indices(&self) -> Vec<i64> {
        self.genes
            .iter()
            .map(|g| g.map_or(-1, |vm| vm as i64))
            .collect()
    }

    /// Number of genes (tasks).
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Gene slice.
    pub fn genes(&self) -> &[Option<usize>] {
        &self.genes
    }

    /// Mutable gene slice.
    pub fn genes_mut(&mut self) -> &mut [Option<usize>] {
        &mut self.genes
    }

    /// VM index of a task, if placed and `task` is in range.
    pub fn vm_of(&self, task: usize) -> Option<usize> {
        self.genes.get(task).copied().flatten()
    }

    /// Places (or unplaces) a task.
    ///
    /// # Panics
    /// Panics if `task` is out of range.
    pub fn set(&mut self, task: usize, vm: Option<usize>) {
        self.genes[task] = vm;
    }

    /// Task indices assigned to `vm`, in task order.
    pub fn tasks_on(&self, vm: usize) -> Vec<usize> {
        self.genes
            .iter()
            .enumerate()
            .filter(|(_, g)| **g == Some(vm))
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of genes pointing at a VM below `num_vms`.
    pub fn valid_count(&self, num_vms: usize) -> usize {
        self.genes
            .iter()
            .filter(|g| matches!(g, Some(vm) if *vm < num_vms))
            .count()
    }
}

impl From<Vec<Option<usize>>> for Assignment {
    fn from(genes: Vec<Option<usize>>) -> Self {
        Self::new(genes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_interop() {
        let a = Assignment::from_indices(&[0, -1, 2, -7]);
        assert_eq!(a.genes(), &[Some(0), None, Some(2), None]);
        assert_eq!(a.to_indices(), vec![0, -1, 2, -1]);
    }

    #[test]
    fn test_tasks_on_and_counts() {
        let a = Assignment::new(vec![Some(0), Some(1), Some(0), None, Some(5)]);
        assert_eq!(a.tasks_on(0), vec![0, 2]);
        assert_eq!(a.tasks_on(1), vec![1]);
        assert_eq!(a.valid_count(2), 3);
        assert_eq!(a.vm_of(3), None);
        assert_eq!(a.vm_of(99), None);
    }

    #[test]
    fn test_unassigned() {
        let a = Assignment::unassigned(4);
        assert_eq!(a.len(), 4);
        assert_eq!(a.valid_count(10), 0);
        assert_eq!(a.to_indices(), vec![-1; 4]);
    }

    #[test]
    fn test_serde_transparent() {
        let a = Assignment::new(vec![Some(1), None]);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "[1,null]");
        let back: Assignment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
