//! Graphs with known structure shared by the unit tests

use crate::{gens::*, prelude::*};

/// Three cells `A = {0, 1}`, `B = {2..6}` and `C = {6..14}` where every pair of cells induces a
/// disjoint union of stars:
/// each node of `A` has two leaves in `B` and four leaves in `C`, each node of `B` has two leaves
/// in `C`. All cells induce empty graphs, so only the cycle `A - B - C - A` of nontrivial pairs
/// prevents amenability.
pub fn three_cell_cycle() -> AdjArray {
    let mut graph = AdjArray::new(14);

    graph.connect_star(0, [2, 3]);
    graph.connect_star(1, [4, 5]);

    graph.connect_star(0, 6..10);
    graph.connect_star(1, 10..14);

    for b in 2..6 {
        let first_leaf = 6 + 2 * (b - 2);
        graph.connect_star(b, [first_leaf, first_leaf + 1]);
    }

    graph
}

/// Disjoint union of `centers` stars with `leaves` leaves each; centers come first
pub fn disjoint_stars(centers: NumNodes, leaves: NumNodes) -> AdjArray {
    let mut graph = AdjArray::new(centers * (leaves + 1));
    for c in 0..centers {
        let first_leaf = centers + c * leaves;
        graph.connect_star(c, first_leaf..first_leaf + leaves);
    }
    graph
}

/// Complement of a graph without self-loops
pub fn complement<G: AdjacencyTest + GraphNodeOrder>(graph: &G) -> AdjArray {
    let n = graph.number_of_nodes();
    let mut result = AdjArray::new(n);
    for u in 0..n {
        for v in (u + 1)..n {
            if !graph.has_edge(u, v) {
                result.add_edge(u, v);
            }
        }
    }
    result
}
