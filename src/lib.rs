/*!
`amenability` decides whether **color refinement** (the 1-dimensional Weisfeiler-Leman algorithm)
identifies a given graph, i.e. whether every graph that color refinement cannot distinguish from it
is isomorphic to it. Such graphs are called **amenable**.

The decision procedure follows Arvind, Köbler, Rattan & Verbitsky, *On the Power of Color
Refinement* (FCT 2015) and runs in time roughly linear in the size of the graph plus the square of
the number of color classes.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`. All graphs are undirected and
unlabelled; [`AdjArray`](crate::repr::AdjArray) stores them as adjacency arrays.

# Usage

There are *4* submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations and [`repr::AdjArray`],
- [`algo`] includes the amenability test and its building blocks (color refinement, cell graph,
  classification of cells, anisotropic components),
- [`gens`] includes deterministic substructures (paths, cycles, cliques, stars, matchings) and
  random graphs,
- [`io`] includes readers for the TU Dataset benchmark collections and a simple edge-list format.

In most use-cases, `use amenability::{prelude::*, algo::*};` suffices:
```rust
use amenability::{prelude::*, algo::*};

let path = AdjArray::from_edges(4, [Edge(0, 1), Edge(1, 2), Edge(2, 3)].into_iter());
assert!(path.is_amenable());

let mut hexagon = AdjArray::new(6);
hexagon.add_edges((0..6).map(|u| Edge(u, (u + 1) % 6)));
assert!(!hexagon.is_amenable());
assert!(matches!(
    hexagon.amenability(),
    Verdict::NotAmenable(Violation::CellStructure { size: 6, .. })
));
```
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use node::*;

/// `amenability::prelude` includes definitions for nodes and edges, all basic graph operation traits
/// as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
