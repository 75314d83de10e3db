/*!
# Worker-Pool Abstraction

The parallel traversal engine does not care what kind of pool runs its batch tasks.
It only needs one capability: *submit a set of tasks, wait for all of them, and get
their outputs back in submission order*. The [`Executor`] trait captures exactly that,
so the engine never special-cases the pool flavor.

Two implementations are provided:
- [`ScopedThreads`]: spawns one OS thread per task via [`std::thread::scope`]. No
  setup cost, no reuse; reasonable when tasks are few and long.
- [`RayonPool`]: dispatches onto a fixed-size work-stealing [`rayon::ThreadPool`];
  the pool is built once and reused across calls (and across traversal levels).

Tasks may borrow from the caller's stack: both implementations join all tasks before
returning, so no task outlives the `run_batch` call.
*/

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

/// Structured fan-out/fan-in over a set of independent tasks.
pub trait Executor: Sync {
    /// Runs all `tasks`, blocks until every one of them has completed, and returns
    /// their outputs in the order the tasks were submitted (regardless of the order
    /// in which they finished).
    fn run_batch<T, F>(&self, tasks: Vec<F>) -> Vec<T>
    where
        F: FnOnce() -> T + Send,
        T: Send;
}

/// Executor spawning one scoped OS thread per task.
#[derive(Debug, Default, Copy, Clone)]
pub struct ScopedThreads;

impl Executor for ScopedThreads {
    fn run_batch<T, F>(&self, tasks: Vec<F>) -> Vec<T>
    where
        F: FnOnce() -> T + Send,
        T: Send,
    {
        std::thread::scope(|scope| {
            let handles: Vec<_> = tasks.into_iter().map(|task| scope.spawn(task)).collect();

            handles
                .into_iter()
                // a scoped thread only fails to join if the task panicked
                .map(|handle| handle.join().unwrap())
                .collect()
        })
    }
}

/// Executor dispatching tasks onto a fixed-size work-stealing [`rayon::ThreadPool`]
pub struct RayonPool {
    pool: ThreadPool,
}

impl RayonPool {
    /// Builds a pool with the given number of worker threads
    pub fn new(num_threads: usize) -> Result<Self, ThreadPoolBuildError> {
        Ok(Self {
            pool: ThreadPoolBuilder::new().num_threads(num_threads).build()?,
        })
    }

    /// Returns the number of worker threads in the pool
    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl From<ThreadPool> for RayonPool {
    fn from(pool: ThreadPool) -> Self {
        Self { pool }
    }
}

impl Executor for RayonPool {
    fn run_batch<T, F>(&self, tasks: Vec<F>) -> Vec<T>
    where
        F: FnOnce() -> T + Send,
        T: Send,
    {
        let mut slots: Vec<Option<T>> = Vec::new();
        slots.resize_with(tasks.len(), || None);

        self.pool.scope(|scope| {
            for (slot, task) in slots.iter_mut().zip(tasks) {
                scope.spawn(move |_| *slot = Some(task()));
            }
        });

        // the scope guarantees every task ran to completion
        slots.into_iter().map(|slot| slot.unwrap()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outputs_in_submission_order<E: Executor>(executor: &E) {
        let tasks: Vec<_> = (0..32).map(|i| move || i * i).collect();
        let results = executor.run_batch(tasks);
        assert_eq!(results, (0..32).map(|i| i * i).collect::<Vec<_>>());
    }

    fn tasks_may_borrow_stack<E: Executor>(executor: &E) {
        let data: Vec<u64> = (0..100).collect();
        let chunks: Vec<_> = data.chunks(13).collect();

        let tasks: Vec<_> = chunks
            .into_iter()
            .map(|chunk| move || chunk.iter().sum::<u64>())
            .collect();

        let total: u64 = executor.run_batch(tasks).into_iter().sum();
        assert_eq!(total, 99 * 100 / 2);
    }

    #[test]
    fn scoped_threads() {
        let executor = ScopedThreads;
        outputs_in_submission_order(&executor);
        tasks_may_borrow_stack(&executor);
        assert!(executor.run_batch(Vec::<fn() -> ()>::new()).is_empty());
    }

    #[test]
    fn rayon_pool() {
        let executor = RayonPool::new(4).unwrap();
        outputs_in_submission_order(&executor);
        tasks_may_borrow_stack(&executor);
        assert!(executor.run_batch(Vec::<fn() -> ()>::new()).is_empty());
    }
}
