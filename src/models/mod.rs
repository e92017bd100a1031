//! Placement domain models.
//!
//! Immutable descriptions of the workload and the infrastructure, plus the
//! assignment that the optimizer searches over.
//!
//! # Domain Mappings
//!
//! | u-placement | Cloud | Batch cluster |
//! |-------------|-------|---------------|
//! | Task | Cloudlet / request | Job |
//! | Vm | Virtual machine | Slot / container |
//! | Host | Physical server | Node |
//! | Assignment | Placement plan | Allocation |

mod assignment;
mod infrastructure;
mod resource;
mod task;

pub use assignment::Assignment;
pub use infrastructure::Infrastructure;
pub use resource::{Host, LinearPowerModel, Vm};
pub use task::{Task, TaskRecord};
