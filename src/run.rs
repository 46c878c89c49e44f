//! Fan-out entry points: run a batch of tasks in parallel and wait for all.

use std::thread;

use log::{debug, trace};

use crate::gate::Gate;

/// Run every task on its own thread and wait for the whole batch to finish.
///
/// Threads start in input order but tasks may complete in any order. The call
/// returns only once every task has finished; no thread from this call
/// outlives it. An empty batch returns immediately.
///
/// A panicking task does not stop the rest of the batch: the remaining tasks
/// still run to completion, and the panic resurfaces from this call once the
/// whole batch is done. There is no channel for reporting task failures back
/// to the caller; a task that wants the batch to tolerate its faults must
/// catch them itself.
pub fn run<'env, I, F>(tasks: I)
where
    I: IntoIterator<Item = F>,
    F: FnOnce() + Send + 'env,
{
    let tasks: Vec<F> = tasks.into_iter().collect();
    debug!("fan-out: running {} tasks unbounded", tasks.len());

    thread::scope(|scope| {
        for task in tasks {
            scope.spawn(task);
        }
    });
}

/// Run tasks in parallel, never letting more than `limit` run at once.
///
/// A slot is acquired on the calling thread before each task starts, in input
/// order: when every slot is held, submission of the next task waits for a
/// running task to finish. Each task's thread frees its slot when the task
/// ends, normally or by panic, so a faulting task never wedges the batch.
/// Completion order is unconstrained. Same completion and fault contract as
/// [`run`].
///
/// Panics if `limit` is 0, before any task is started (empty batch included).
pub fn run_with_limit<'env, I, F>(limit: usize, tasks: I)
where
    I: IntoIterator<Item = F>,
    F: FnOnce() + Send + 'env,
{
    assert!(limit > 0, "run_with_limit: limit must be greater than 0");

    let tasks: Vec<F> = tasks.into_iter().collect();
    debug!(
        "fan-out: running {} tasks, at most {} at once",
        tasks.len(),
        limit
    );

    let gate = Gate::new(limit);
    thread::scope(|scope| {
        for task in tasks {
            let slot = gate.acquire();
            trace!("slot acquired, starting task");
            scope.spawn(move || {
                let _slot = slot;
                task();
            });
        }
    });
}

/// A reasonable `limit` for CPU-bound batches: one slot per logical CPU,
/// and at least one.
pub fn default_limit() -> usize {
    num_cpus::get().max(1)
}
