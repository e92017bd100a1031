//! Validated infrastructure description (VM and host templates).

use serde::Serialize;

use super::{Host, Vm};
use crate::error::{PlacementError, Result};
use crate::validation::validate_infrastructure;

/// Ordered VM and host templates.
///
/// Construction validates that both lists are non-empty and capacities are
/// positive, so the cost model can divide by VM/host counts and capacities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Infrastructure {
    vms: Vec<Vm>,
    hosts: Vec<Host>,
}

impl Infrastructure {
    /// Validates and wraps VM and host templates.
    pub fn new(vms: Vec<Vm>, hosts: Vec<Host>) -> Result<Self> {
        validate_infrastructure(&vms, &hosts).map_err(PlacementError::InvalidInput)?;
        Ok(Self { vms, hosts })
    }

    /// `vm_count` identical VMs and `host_count` identical hosts, ids from 0.
    pub fn uniform(
        vm_count: usize,
        vm_cpu: f64,
        vm_mem: f64,
        host_count: usize,
        host_cpu: f64,
        host_mem: f64,
    ) -> Result<Self> {
        let vms = (0..vm_count)
            .map(|i| Vm::new(i as u64, vm_cpu, vm_mem))
            .collect();
        let hosts = (0..host_count)
            .map(|i| Host::new(i as u64, host_cpu, host_mem))
            .collect();
        Self::new(vms, hosts)
    }

    pub fn vms(&self) -> &[Vm] {
        &self.vms
    }

    pub fn hosts(&self) -> &[Host] {
        &self.hosts
    }

    pub fn vm_count(&self) -> usize {
        self.vms.len()
    }

    pub fn host_count(&self) -> usize {
        self.hosts.len()
    }
}
