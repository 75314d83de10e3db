use crate::{prelude::*, testing::test_graph_ops};

/// A directed graph storing one out-neighborhood per node as a `Vec<Node>`.
///
/// Edge insertion performs a linear scan of the source's neighborhood to skip
/// duplicates. This is O(degree) per insertion which is intentionally kept simple:
/// graph construction is not on the hot path of the traversals in this crate.
///
/// Neighborhoods preserve insertion order, so neighbor iteration is deterministic
/// for a fixed construction sequence.
#[derive(Clone)]
pub struct AdjArray {
    nbs: Vec<Vec<Node>>,
    num_edges: NumEdges,
}

impl GraphNodeOrder for AdjArray {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }
}

impl GraphEdgeOrder for AdjArray {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjArray {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl AdjacencyTest for AdjArray {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        assert!(v < self.number_of_nodes());
        self.nbs[u as usize].contains(&v)
    }
}

impl NeighborsSlice for AdjArray {
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        &self.nbs[u as usize]
    }
}

impl GraphNew for AdjArray {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }
}

impl GraphEdgeEditing for AdjArray {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if self.has_edge(u, v) {
            return false;
        }

        self.nbs[u as usize].push(v);
        self.num_edges += 1;
        true
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_adj_array,
    AdjArray,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_edges_are_skipped() {
        let mut graph = AdjArray::new(3);
        assert!(graph.try_add_edge(0, 1));
        assert!(!graph.try_add_edge(0, 1));
        graph.add_edge(0, 1);

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.as_neighbors_slice(0), &[1]);
    }

    #[test]
    fn neighbor_order_follows_insertion() {
        let graph = AdjArray::from_edges(4, [(0, 2), (0, 1), (0, 3)].iter());
        assert_eq!(graph.as_neighbors_slice(0), &[2, 1, 3]);
    }

    #[test]
    #[should_panic]
    fn add_edge_out_of_range_panics() {
        let mut graph = AdjArray::new(2);
        graph.add_edge(0, 2);
    }
}
