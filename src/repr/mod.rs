/*!
# Graph Representations

This module defines the storage backend for directed graphs.

Currently the single provided representation is [`AdjArray`], an adjacency array
with one `Vec<Node>` of out-neighbors per node. It favors cheap construction and
fast sequential neighbor scans, which is exactly the access pattern of the BFS
algorithms in [`crate::algo`].
*/

mod adj_array;

pub use adj_array::*;
