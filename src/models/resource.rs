//! Infrastructure models: VMs and physical hosts.
//!
//! Both are immutable templates. Per-evaluation load lives in the
//! [`Cluster`](crate::cluster::Cluster) snapshot, never on these types.

use serde::{Deserialize, Serialize};

/// A virtual machine with hard capacity ceilings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vm {
    /// VM identifier.
    pub id: u64,
    /// CPU ceiling.
    pub cpu_capacity: f64,
    /// Memory ceiling.
    pub mem_capacity: f64,
}

impl Vm {
    /// Creates a VM template.
    pub fn new(id: u64, cpu_capacity: f64, mem_capacity: f64) -> Self {
        Self {
            id,
            cpu_capacity,
            mem_capacity,
        }
    }

    /// Whether additional load fits on top of the given current load.
    pub fn fits(&self, cpu_load: f64, mem_load: f64, cpu: f64, mem: f64) -> bool {
        cpu_load + cpu <= self.cpu_capacity && mem_load + mem <= self.mem_capacity
    }

    /// Whether the given load exceeds either ceiling.
    pub fn is_overloaded(&self, cpu_load: f64, mem_load: f64) -> bool {
        cpu_load > self.cpu_capacity || mem_load > self.mem_capacity
    }
}

/// Linear power model: `idle + (max - idle) * utilization`.
///
/// Utilization is expected in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearPowerModel {
    /// Power draw at 0% utilization (W).
    pub idle_power: f64,
    /// Power draw at 100% utilization (W).
    pub max_power: f64,
}

impl Default for LinearPowerModel {
    fn default() -> Self {
        Self {
            idle_power: 100.0,
            max_power: 250.0,
        }
    }
}

impl LinearPowerModel {
    pub fn new(idle_power: f64, max_power: f64) -> Self {
        Self {
            idle_power,
            max_power,
        }
    }

    /// Power draw at the given utilization.
    pub fn power(&self, utilization: f64) -> f64 {
        self.idle_power + (self.max_power - self.idle_power) * utilization
    }
}

/// A physical machine hosting VMs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
    /// Host identifier.
    pub id: u64,
    /// CPU capacity.
    pub cpu_capacity: f64,
    /// Memory capacity.
    pub mem_capacity: f64,
    /// Power characteristics.
    #[serde(default)]
    pub power_model: LinearPowerModel,
}

impl Host {
    /// Creates a host with the default power model (100 W idle, 250 W max).
    pub fn new(id: u64, cpu_capacity: f64, mem_capacity: f64) -> Self {
        Self {
            id,
            cpu_capacity,
            mem_capacity,
            power_model: LinearPowerModel::default(),
        }
    }

    /// Sets idle and peak power.
    pub fn with_power(mut self, idle_power: f64, max_power: f64) -> Self {
        self.power_model = LinearPowerModel::new(idle_power, max_power);
        self
    }

    /// Utilization for an aggregate CPU load, capped at 1.0.
    pub fn utilization(&self, cpu_load: f64) -> f64 {
        (cpu_load / self.cpu_capacity).min(1.0)
    }

    /// Power draw for an aggregate CPU load.
    pub fn power(&self, cpu_load: f64) -> f64 {
        self.power_model.power(self.utilization(cpu_load))
    }
}
