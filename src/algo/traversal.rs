/*!
Serial graph traversal.

This module provides the classic single-threaded BFS as a lazy iterator together with
the [`Traversal`] trait that exposes it directly as a method on graph data structures.
It has no concurrency concerns: the visited state is a plain [`NodeBitSet`] and the
frontier is a FIFO queue. The parallel engine in [`crate::algo::parallel`] uses this
traversal as its correctness oracle and performance baseline.
*/

use std::collections::VecDeque;

use crate::prelude::*;

/// A lazy breadth-first traversal iterator, yielding nodes reachable from the start
/// node in BFS order. Every reachable node is yielded exactly once.
pub struct Bfs<'a, G> {
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<Node>,
}

impl<'a, G> Bfs<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new BFS iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(start < graph.number_of_nodes());

        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);

        Self {
            graph,
            visited,
            queue: VecDeque::from(vec![start]),
        }
    }

    /// Consumes the iterator and returns the set of visited nodes
    pub fn into_visited(mut self) -> NodeBitSet {
        self.by_ref().for_each(|_| {});
        self.visited
    }
}

impl<G> Iterator for Bfs<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.graph.len() - self.visited.cardinality() as usize + self.queue.len()),
        )
    }
}

/// Provides convenient serial traversal methods directly on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use pargraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(3, [(0, 1), (1, 2)].iter());
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: Node) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }

    /// Runs a BFS from `start` to completion and returns the visited set.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use pargraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(3, [(0, 1)].iter());
    ///
    /// let visited = g.bfs_visited(0);
    /// assert!(visited.get_bit(1));
    /// assert!(!visited.get_bit(2));
    /// ```
    fn bfs_visited(&self, start: Node) -> NodeBitSet {
        self.bfs(start).into_visited()
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = AdjArray::from_edges(
            6,
            [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)].iter(),
        );

        let order: Vec<Node> = graph.bfs(1).collect();
        assert_eq!(order.len(), 6);

        assert_eq!(order[0], 1);
        assert!((order[1] == 2 && order[2] == 0) || (order[2] == 2 && order[1] == 0));
        assert!((order[3] == 4 && order[4] == 5) || (order[4] == 4 && order[3] == 5));
        assert_eq!(order[5], 3);
    }

    #[test]
    fn bfs_respects_orientation() {
        let graph = AdjArray::from_edges(4, [(0, 1), (1, 2), (2, 3)].iter());

        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(graph.bfs(2).collect_vec(), vec![2, 3]);
        assert_eq!(graph.bfs(3).collect_vec(), vec![3]);
    }

    #[test]
    fn bfs_visits_each_node_once() {
        // diamond: both 1 and 2 reach 3
        let graph = AdjArray::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)].iter());

        let order = graph.bfs(0).collect_vec();
        assert_eq!(order.len(), 4);
        assert_eq!(order.iter().unique().count(), 4);

        let visited = graph.bfs_visited(0);
        assert_eq!(visited.cardinality(), 4);
    }

    #[test]
    fn node_without_out_edges_is_a_fixpoint() {
        let graph = AdjArray::new(3);
        assert_eq!(graph.bfs(1).collect_vec(), vec![1]);
    }

    #[test]
    #[should_panic]
    fn bfs_start_out_of_range_panics() {
        let graph = AdjArray::new(2);
        let _ = graph.bfs(2);
    }
}
