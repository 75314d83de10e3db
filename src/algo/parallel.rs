/*!
Level-synchronous parallel breadth-first traversal.

The engine expands one BFS level at a time. Every level, the current frontier is cut
into contiguous batches, one task per non-empty batch is dispatched onto the caller's
[`Executor`], and the engine blocks exactly once: on the barrier that joins all of the
level's tasks. Each task scans its batch, tries to atomically claim every neighbor it
sees, and returns the neighbors it won. The per-task outputs are merged in
worker-index order into the next frontier, so the recorded sequence is reproducible
even though task completion order is not.

Exactly-once discovery needs no locks: a claim is a single compare-and-set on the
traversal-owned [`AtomicVisitSet`], so among all workers racing for the same neighbor
(from the same or different batches) precisely one wins and enqueues it. Level `k + 1`
is never dispatched before level `k`'s barrier, which makes all claims of level `k`
visible before any node of level `k + 1` is expanded.
*/

use thiserror::Error;

use super::visit::{AtomicVisitSet, VisitMark};
use crate::{executor::Executor, prelude::*};

/// Errors reported by [`ParallelBfs`] before any concurrent work is scheduled.
///
/// The configuration variants ([`InvalidWorkerCount`](TraversalError::InvalidWorkerCount),
/// [`StartOutOfBounds`](TraversalError::StartOutOfBounds)) reject a run up front;
/// [`MarksNotRetained`](TraversalError::MarksNotRetained) signals a violated
/// precondition when reading results. Concurrency faults (duplicate or missed visits)
/// are no error condition: the claim protocol rules them out structurally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TraversalError {
    /// The worker budget must be a positive number of workers
    #[error("worker budget must be positive")]
    InvalidWorkerCount,

    /// The start node does not exist in the graph
    #[error("start node {start} is out of range for a graph with {num_nodes} nodes")]
    StartOutOfBounds {
        /// Requested start node
        start: Node,
        /// Number of nodes in the traversed graph
        num_nodes: NumNodes,
    },

    /// The visitation marks were requested but no retaining traversal has completed
    #[error("no traversal with retained marks has completed on this engine")]
    MarksNotRetained,
}

/// Splits a frontier of `frontier_len` nodes among at most `worker_budget` workers.
///
/// Returns `(batch_size, active_workers)` with
/// `batch_size = max(1, ceil(frontier_len / worker_budget))` and
/// `active_workers = min(ceil(frontier_len / batch_size), worker_budget)`.
///
/// `active_workers` is capped by the number of non-empty batches, so a small frontier
/// never spawns idle tasks, while a large frontier spreads evenly over the full
/// budget (no two batches differ by more than one underfull tail batch).
///
/// ** Panics in debug builds if `frontier_len == 0 || worker_budget == 0` **
pub fn partition_frontier(frontier_len: usize, worker_budget: usize) -> (usize, usize) {
    debug_assert!(frontier_len > 0);
    debug_assert!(worker_budget > 0);

    let batch_size = frontier_len.div_ceil(worker_budget).max(1);
    let active_workers = frontier_len.div_ceil(batch_size).min(worker_budget);

    (batch_size, active_workers)
}

/// Selects how a worker claims a discovered neighbor.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ClaimMode {
    /// Single compare-and-set per claim; exactly-once discovery (the only mode real
    /// traversals should use)
    #[default]
    Atomic,
    /// Check-then-increment without atomicity between the check and the write; racing
    /// workers may claim the same node twice. Diagnostic contrast case, see
    /// [`AtomicVisitSet::claim_unsynced`]
    Unsynced,
}

/// Configurable level-synchronous parallel BFS.
///
/// Follows the crate's builder pattern: configure, then run on a graph. The engine
/// value owns the visitation marks of its most recent retaining run, so results can
/// be read back after the traversal without the graph itself carrying any state.
///
/// # Examples
/// ```
/// use pargraphs::{prelude::*, algo::*, executor::ScopedThreads};
///
/// let graph = AdjArray::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)].iter());
///
/// let mut engine = ParallelBfs::new().workers(2).retain_marks(true);
/// engine.run(&graph, 0, &ScopedThreads).unwrap();
///
/// assert_eq!(engine.visited().unwrap(), &[1, 1, 1, 1]);
/// ```
#[derive(Debug, Default)]
pub struct ParallelBfs {
    workers: usize,
    retain_marks: bool,
    claim_mode: ClaimMode,
    marks: Option<Vec<VisitMark>>,
}

impl ParallelBfs {
    /// Creates a new engine with an unset worker budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the worker budget, i.e. the maximum number of concurrently dispatched tasks
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Sets whether a run materializes its visitation marks for later reads
    pub fn retain_marks(mut self, retain: bool) -> Self {
        self.retain_marks = retain;
        self
    }

    /// Sets the claim mode. Defaults to [`ClaimMode::Atomic`]
    pub fn claim_mode(mut self, mode: ClaimMode) -> Self {
        self.claim_mode = mode;
        self
    }

    /// Traverses all nodes reachable from `start`, visiting each exactly once.
    ///
    /// Fails without scheduling any work if the worker budget is zero or `start` is
    /// out of range. With [`retain_marks`](ParallelBfs::retain_marks) set, the final
    /// marks replace the engine's retained result; otherwise the traversal's only
    /// observable effect is its completion.
    pub fn run<G, E>(&mut self, graph: &G, start: Node, executor: &E) -> Result<(), TraversalError>
    where
        G: AdjacencyList + Sync,
        E: Executor,
    {
        self.expand(graph, start, executor, |_| {})
    }

    /// Like [`run`](ParallelBfs::run), but additionally records every level's frontier,
    /// including the final empty one.
    pub fn run_levels<G, E>(
        &mut self,
        graph: &G,
        start: Node,
        executor: &E,
    ) -> Result<Vec<Vec<Node>>, TraversalError>
    where
        G: AdjacencyList + Sync,
        E: Executor,
    {
        let mut levels = Vec::new();
        self.expand(graph, start, executor, |frontier| {
            levels.push(frontier.to_vec())
        })?;
        Ok(levels)
    }

    /// Returns the visitation marks of the most recent retaining run: one claim count
    /// per node, `1` for every node reachable from the start and `0` otherwise.
    ///
    /// Fails with [`TraversalError::MarksNotRetained`] if no retaining run completed.
    pub fn visited(&self) -> Result<&[VisitMark], TraversalError> {
        self.marks.as_deref().ok_or(TraversalError::MarksNotRetained)
    }

    /// Moves the retained visitation marks out of the engine.
    ///
    /// Fails with [`TraversalError::MarksNotRetained`] if no retaining run completed.
    pub fn take_visited(&mut self) -> Result<Vec<VisitMark>, TraversalError> {
        self.marks.take().ok_or(TraversalError::MarksNotRetained)
    }

    fn expand<G, E>(
        &mut self,
        graph: &G,
        start: Node,
        executor: &E,
        mut on_level: impl FnMut(&[Node]),
    ) -> Result<(), TraversalError>
    where
        G: AdjacencyList + Sync,
        E: Executor,
    {
        let num_nodes = graph.number_of_nodes();

        if self.workers == 0 {
            return Err(TraversalError::InvalidWorkerCount);
        }
        if start >= num_nodes {
            return Err(TraversalError::StartOutOfBounds { start, num_nodes });
        }

        // one exclusively-owned visit set per invocation, dropped or materialized below
        let visited = AtomicVisitSet::new(num_nodes);
        let claim: fn(&AtomicVisitSet, Node) -> bool = match self.claim_mode {
            ClaimMode::Atomic => AtomicVisitSet::claim,
            ClaimMode::Unsynced => AtomicVisitSet::claim_unsynced,
        };

        claim(&visited, start);
        let mut frontier = vec![start];
        let mut level = 0usize;

        loop {
            on_level(&frontier);
            if frontier.is_empty() {
                break;
            }

            let (batch_size, active_workers) = partition_frontier(frontier.len(), self.workers);
            log::trace!(
                "level {level}: {} frontier nodes over {active_workers} workers (batch size {batch_size})",
                frontier.len()
            );

            let frontier_ref = &frontier;
            let visited_ref = &visited;
            let tasks: Vec<_> = (0..active_workers)
                .map(|worker| {
                    move || {
                        let lo = worker * batch_size;
                        let hi = frontier_ref.len().min(lo + batch_size);

                        let mut discovered = Vec::new();
                        for &u in &frontier_ref[lo..hi] {
                            for v in graph.neighbors_of(u) {
                                if claim(visited_ref, v) {
                                    discovered.push(v);
                                }
                            }
                        }
                        discovered
                    }
                })
                .collect();

            // the level barrier: run_batch joins every task before we merge
            let outputs = executor.run_batch(tasks);

            // merge in worker-index order for a reproducible frontier sequence
            frontier = outputs.into_iter().flatten().collect();
            level += 1;
        }

        if self.retain_marks {
            self.marks = Some(visited.into_marks());
        }

        Ok(())
    }
}

/// Exposes the parallel traversal directly as a method on graphs
pub trait ParTraversal: AdjacencyList + Sync + Sized {
    /// Runs a level-synchronous parallel BFS from `start` with the given worker budget
    /// and returns the visitation marks.
    ///
    /// # Examples
    /// ```
    /// use pargraphs::{prelude::*, algo::*, executor::ScopedThreads};
    ///
    /// let g = AdjArray::from_edges(3, [(0, 1)].iter());
    ///
    /// let marks = g.par_bfs(0, &ScopedThreads, 4).unwrap();
    /// assert_eq!(marks, vec![1, 1, 0]);
    /// ```
    fn par_bfs<E: Executor>(
        &self,
        start: Node,
        executor: &E,
        workers: usize,
    ) -> Result<Vec<VisitMark>, TraversalError> {
        let mut engine = ParallelBfs::new().workers(workers).retain_marks(true);
        engine.run(self, start, executor)?;
        engine.take_visited()
    }
}

impl<G> ParTraversal for G where G: AdjacencyList + Sync + Sized {}
