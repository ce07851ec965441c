/*!
# Graph Representations

The amenability test only ever needs to walk adjacency lists and to grow a graph while it is being
built, so a single representation suffices:

- [`AdjArray`]: one `Vec<Node>` per node holding the (unsorted) neighbors.
  Parallel edges are kept as repeated entries and a self-loop occupies two entries of its node's list,
  i.e. the list of `u` is exactly the multiset of edge endpoints opposite to `u`.

Both the input graphs and the cell graphs built by [`crate::algo::CellGraph`] use this representation.
*/

use crate::{ops::*, *};

mod adj_array;

pub use adj_array::*;
