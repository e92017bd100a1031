//! Best-effort capacity repair.
//!
//! For every overloaded VM, moves its largest-cpu task to the first other
//! VM that can take it, and repeats until a full pass makes no move. A VM
//! that cannot be unloaded stays overloaded; the fitness penalty handles it.
//!
//! Tasks only move *into* VMs that stay within capacity, and only *out of*
//! overloaded VMs, so the loop terminates.

use tracing::trace;

use crate::models::{Assignment, Task, Vm};

/// Repairs `assignment` in place. Returns the number of tasks moved.
///
/// Unassigned and out-of-range genes are left untouched, as are genes past
/// the end of `tasks`. Running repair on an assignment with no overloaded
/// VM changes nothing.
pub fn repair(assignment: &mut Assignment, tasks: &[Task], vms: &[Vm]) -> usize {
    let n = vms.len();
    let mut cpu = vec![0.0; n];
    let mut mem = vec![0.0; n];
    for (gene, task) in assignment.genes().iter().zip(tasks) {
        if let Some(vm) = gene.filter(|&vm| vm < n) {
            cpu[vm] += task.cpu;
            mem[vm] += task.mem;
        }
    }

    let mut moves = 0;
    let mut changed = true;
    while changed {
        changed = false;
        for source in 0..n {
            if !vms[source].is_overloaded(cpu[source], mem[source]) {
                continue;
            }

            let mut resident = assignment.tasks_on(source);
            resident.retain(|&task| task < tasks.len());
            resident.sort_by(|&a, &b| tasks[b].cpu.total_cmp(&tasks[a].cpu));

            let relocation = resident.iter().find_map(|&task| {
                let t = &tasks[task];
                (0..n)
                    .filter(|&target| target != source)
                    .find(|&target| vms[target].fits(cpu[target], mem[target], t.cpu, t.mem))
                    .map(|target| (task, target))
            });

            match relocation {
                Some((task, target)) => {
                    let t = &tasks[task];
                    assignment.set(task, Some(target));
                    cpu[source] -= t.cpu;
                    mem[source] -= t.mem;
                    cpu[target] += t.cpu;
                    mem[target] += t.mem;
                    moves += 1;
                    changed = true;
                }
                None => trace!(vm = source, "overloaded VM has no relocatable task"),
            }
        }
    }
    moves
}
