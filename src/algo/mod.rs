/*!
# Amenability Test

This module implements the decision procedure of Arvind, Köbler, Rattan & Verbitsky
("On the Power of Color Refinement", FCT 2015) which decides whether color refinement
distinguishes a graph from every non-isomorphic graph. The procedure is a pipeline:

1. [`ColorRefinement`] computes the stable coloring of the graph,
2. [`CellGraph`] builds the quotient over its cells,
3. [`LocalLabels`] classifies every cell and every pair of cells (properties A and B),
4. [`AnisotropicComponents`] groups cells along nontrivial pairs and verifies that every
   component is a tree with a single heterogeneous root of minimum size (properties G and H).

Most users only need the [`Amenability`] trait:
```rust
use amenability::{prelude::*, algo::*, gens::*};

let mut c5 = AdjArray::new(5);
c5.connect_cycle(0..5);
assert!(c5.is_amenable());

let mut triangles = AdjArray::new(6);
triangles.connect_cycle(0..3);
triangles.connect_cycle(3..6);
assert!(!triangles.is_amenable());
```
*/

mod amenability;
mod cell_graph;
mod classify;
mod components;
mod refinement;
mod verdict;

use itertools::Itertools;

use crate::prelude::*;

pub use amenability::*;
pub use cell_graph::*;
pub use classify::*;
pub use components::*;
pub use refinement::*;
pub use verdict::*;
