/*!
# Graph Traversals

This module provides **breadth-first traversals** built on top of the graph
representations in this crate. All algorithms are re-exported at the top level of this
module, so you can simply do:
```rust
use pargraphs::algo::*;
```

[`Traversal`] offers the serial BFS as a lazy iterator and serves as the oracle for
the level-synchronous parallel engine [`ParallelBfs`], which fans each frontier out
over a caller-supplied [`Executor`](crate::executor::Executor).
*/

mod parallel;
mod traversal;
mod visit;

pub use parallel::*;
pub use traversal::*;
pub use visit::*;
