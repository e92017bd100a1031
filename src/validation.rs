//! Input validation for placement problems.
//!
//! Checks structural integrity of tasks, VMs, and hosts before any
//! evaluation. Detects:
//! - Empty VM or host lists
//! - Duplicate VM or host IDs
//! - Non-positive or non-finite capacities
//! - Negative or non-finite task demands
//! - Power models whose idle draw exceeds peak draw
//!
//! Every check runs; all problems are reported together.

use crate::models::{Host, Task, Vm};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No VMs or no hosts were supplied.
    EmptyInfrastructure,
    /// Two entities of the same kind share an ID.
    DuplicateId,
    /// A VM or host capacity is zero, negative, or not finite.
    InvalidCapacity,
    /// A task demand or length is negative or not finite.
    InvalidDemand,
    /// A host's idle power exceeds its peak power.
    InvalidPowerModel,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Validates VM and host templates.
///
/// Checks:
/// 1. At least one VM and one host
/// 2. No duplicate VM IDs, no duplicate host IDs
/// 3. All capacities positive and finite
/// 4. Host idle power ≤ max power
pub fn validate_infrastructure(vms: &[Vm], hosts: &[Host]) -> ValidationResult {
    let mut errors = Vec::new();

    if vms.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInfrastructure,
            "At least one VM is required",
        ));
    }
    if hosts.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInfrastructure,
            "At least one host is required",
        ));
    }

    let mut vm_ids = HashSet::new();
    for vm in vms {
        if !vm_ids.insert(vm.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate VM ID: {}", vm.id),
            ));
        }
        if !positive(vm.cpu_capacity) || !positive(vm.mem_capacity) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCapacity,
                format!(
                    "VM {} has invalid capacity (cpu={}, mem={})",
                    vm.id, vm.cpu_capacity, vm.mem_capacity
                ),
            ));
        }
    }

    let mut host_ids = HashSet::new();
    for host in hosts {
        if !host_ids.insert(host.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate host ID: {}", host.id),
            ));
        }
        if !positive(host.cpu_capacity) || !positive(host.mem_capacity) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCapacity,
                format!(
                    "Host {} has invalid capacity (cpu={}, mem={})",
                    host.id, host.cpu_capacity, host.mem_capacity
                ),
            ));
        }
        let pm = host.power_model;
        if !non_negative(pm.idle_power) || !pm.max_power.is_finite() || pm.idle_power > pm.max_power
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPowerModel,
                format!(
                    "Host {} has idle power {} above max power {}",
                    host.id, pm.idle_power, pm.max_power
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a workload.
///
/// Checks that cpu, mem and length are finite and non-negative. Task IDs
/// are labels only; genes address tasks by position, so repeated IDs are
/// accepted.
pub fn validate_tasks(tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();

    for task in tasks {
        if !non_negative(task.cpu) || !non_negative(task.mem) || !non_negative(task.length) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDemand,
                format!(
                    "Task {} has invalid demand (cpu={}, mem={}, length={})",
                    task.id, task.cpu, task.mem, task.length
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a workload together with its infrastructure.
pub fn validate_input(tasks: &[Task], vms: &[Vm], hosts: &[Host]) -> ValidationResult {
    let mut errors = Vec::new();
    if let Err(mut e) = validate_tasks(tasks) {
        errors.append(&mut e);
    }
    if let Err(mut e) = validate_infrastructure(vms, hosts) {
        errors.append(&mut e);
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vms() -> Vec<Vm> {
        vec![Vm::new(0, 500.0, 1024.0), Vm::new(1, 500.0, 1024.0)]
    }

    fn sample_hosts() -> Vec<Host> {
        vec![Host::new(0, 2000.0, 8192.0)]
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new(0, 100.0, 128.0, 1000.0),
            Task::new(1, 200.0, 256.0, 1500.0),
            Task::new(2, 150.0, 128.0, 1200.0),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_tasks(), &sample_vms(), &sample_hosts()).is_ok());
    }

    #[test]
    fn test_empty_infrastructure() {
        let errors = validate_infrastructure(&[], &[]).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::EmptyInfrastructure)
                .count(),
            2
        );
    }

    #[test]
    fn test_duplicate_vm_id() {
        let vms = vec![Vm::new(0, 500.0, 1024.0), Vm::new(0, 500.0, 1024.0)];
        let errors = validate_infrastructure(&vms, &sample_hosts()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("VM")));
    }

    #[test]
    fn test_zero_capacity_host() {
        let hosts = vec![Host::new(0, 0.0, 8192.0)];
        let errors = validate_infrastructure(&sample_vms(), &hosts).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidCapacity));
    }

    #[test]
    fn test_inverted_power_model() {
        let hosts = vec![Host::new(0, 2000.0, 8192.0).with_power(300.0, 250.0)];
        let errors = validate_infrastructure(&sample_vms(), &hosts).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidPowerModel));
    }

    #[test]
    fn test_invalid_task_demand() {
        let tasks = vec![Task::new(0, -1.0, 128.0, 1000.0), Task::new(1, 1.0, f64::NAN, 1.0)];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::InvalidDemand));
    }

    #[test]
    fn test_duplicate_task_ids_accepted() {
        let tasks = vec![Task::new(7, 1.0, 1.0, 1.0), Task::new(7, 2.0, 2.0, 2.0)];
        assert!(validate_tasks(&tasks).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let tasks = vec![Task::new(0, -1.0, 1.0, 1.0)];
        let errors = validate_input(&tasks, &[], &sample_hosts()).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
