use std::fmt::Debug;

use super::*;

/// An undirected multigraph stored as adjacency arrays
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AdjArray {
    nbs: Vec<Vec<Node>>,
    num_edges: NumEdges,
}

impl AdjArray {
    /// Panics with a readable message if `u` is not a node of the graph
    #[inline]
    fn assert_node(&self, u: Node) {
        assert!(
            (u as usize) < self.nbs.len(),
            "node {u} out of range for graph with {} nodes",
            self.nbs.len()
        );
    }
}

impl Debug for AdjArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AdjArray(n={}, m={}, edges={:?})",
            self.number_of_nodes(),
            self.number_of_edges(),
            self.ordered_edges(true).collect::<Vec<_>>()
        )
    }
}

impl GraphNodeOrder for AdjArray {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjArray {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjArray {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.as_neighbors_slice(u).iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.as_neighbors_slice(u).len() as NumNodes
    }
}

impl NeighborsSlice for AdjArray {
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        self.assert_node(u);
        &self.nbs[u as usize]
    }
}

impl AdjacencyTest for AdjArray {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.assert_node(v);
        self.as_neighbors_slice(u).contains(&v)
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

impl GraphNodeEditing for AdjArray {
    fn add_node(&mut self) -> Node {
        let u = self.number_of_nodes();
        assert_ne!(u, INVALID_NODE, "graph cannot hold more nodes");
        self.nbs.push(Vec::new());
        u
    }
}

impl GraphEdgeEditing for AdjArray {
    fn add_edge(&mut self, u: Node, v: Node) {
        self.assert_node(u);
        self.assert_node(v);

        self.nbs[u as usize].push(v);
        self.nbs[v as usize].push(u);
        self.num_edges += 1;
    }
}
