/*!
# Substructure Generators

Methods to add common motifs to an already existing graph:

- **Paths** and **Cycles**
- **Cliques**
- **Stars**
- **Matchings**

They are mostly used to build the families of graphs whose amenability is known, e.g. cycles
(amenable exactly for length 3, 4 and 5) or disjoint unions of stars.

# Example

```rust
use amenability::{prelude::*, gens::*};

let mut g = AdjArray::new(6);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);
g.connect_star(5, [0, 4]);

assert_eq!(
    g.ordered_edges(true).collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(0, 5), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4), Edge(4, 5)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** inside an already existing graph.
///
/// None of the methods checks for existing edges: adding a motif twice creates parallel edges.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**: consecutive nodes are connected by edges and
    /// the last node is connected back to the first.
    ///
    /// A single node receives a self-loop; two nodes receive two parallel edges.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique** without self-loops.
    ///
    /// # Example
    /// ```rust
    /// use amenability::{prelude::*, gens::*};
    ///
    /// let mut g = AdjArray::new(4);
    /// g.connect_clique([0, 1, 3]);
    ///
    /// assert!(g.has_edge(0, 1));
    /// assert!(g.has_edge(1, 3));
    /// assert!(g.has_edge(0, 3));
    /// assert_eq!(g.degree_of(2), 0);
    /// ```
    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects `center` to every leaf
    fn connect_star<L>(&mut self, center: Node, leaves: L)
    where
        L: IntoIterator<Item = Node>;

    /// Adds an edge for every given pair
    fn connect_matching<M>(&mut self, pairs: M)
    where
        M: IntoIterator<Item = (Node, Node)>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // avoids cloning the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge(prev, cur);
                prev = cur;
            }

            self.add_edge(prev, first);
        }
    }

    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().collect_vec();
        for (&u, &v) in nodes.iter().tuple_combinations() {
            self.add_edge(u, v);
        }
    }

    fn connect_star<L>(&mut self, center: Node, leaves: L)
    where
        L: IntoIterator<Item = Node>,
    {
        for leaf in leaves {
            self.add_edge(center, leaf);
        }
    }

    fn connect_matching<M>(&mut self, pairs: M)
    where
        M: IntoIterator<Item = (Node, Node)>,
    {
        for (u, v) in pairs {
            self.add_edge(u, v);
        }
    }
}
