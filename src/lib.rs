/*!
`pargraphs` is a graph data structure & traversal library for **directed** graphs
whose focus is breadth-first search in two flavors:

- a classic single-threaded BFS used as the correctness oracle and performance baseline,
- a **level-synchronous parallel BFS** that splits every frontier into fixed-size
  batches, expands the batches concurrently on a caller-supplied worker pool, and
  guarantees exactly-once discovery through atomic claims instead of locks.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in
the graph. As most common graphs do not exceed `2^32` nodes, this saves space compared
to `u64/usize`. For **edges**, we use a simple tuple-struct `Edge(Node, Node)` whose
orientation matters: `Edge(u, v)` is the edge FROM `u` TO `v`.

The only storage backend is [`AdjArray`](crate::repr::AdjArray), an adjacency array
with one `Vec<Node>` per node. Adjacency is built once via edge insertions and is
immutable during any traversal; a graph may be traversed any number of times.

# Design

Algorithms are provided as configurable structs that one can alter to their needs using
the *Builder* / *Setter* pattern before running them on a provided graph. Commonly used
functionality is additionally exposed via traits on the graph itself, e.g.
`graph.bfs(start)` for the serial traversal.

The parallel engine ([`ParallelBfs`](crate::algo::ParallelBfs)) is agnostic to the kind
of worker pool: it only consumes the [`Executor`](crate::executor::Executor) capability
("submit a set of tasks, wait for all of them"). Two executors ship with the crate:
[`ScopedThreads`](crate::executor::ScopedThreads) (one thread per task) and
[`RayonPool`](crate::executor::RayonPool) (fixed-size work-stealing pool).

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, and the
  adjacency-array representation,
- [`algo`] includes the traversal algorithms: the serial BFS iterator and the
  level-synchronous parallel engine with its visitation state,
- [`executor`] includes the worker-pool abstraction consumed by the parallel engine,
- [`gens`] includes a uniform random graph generator for tests and benchmarks.

In most use-cases, `use pargraphs::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod executor;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use node::*;

/// `pargraphs::prelude` includes definitions for nodes and edges, all basic graph
/// operation traits as well as the adjacency-array representation.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
