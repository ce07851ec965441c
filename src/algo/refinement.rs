/*!
# Color Refinement

Computes the **stable coloring** of a graph: starting from a uniform (or caller supplied) coloring,
every round recolors each node by its own color together with the *sorted multiset* of its
neighbors' colors. Refinement stops in the first round that does not increase the number of
distinct colors.

Colors are opaque `u64` labels obtained by folding the sorted neighbor colors into the node's own
color with [`pairing`]. Labels of different rounds must never be compared with each other; only the
equality structure within one round is meaningful.

The classes of the stable coloring are called **cells**. Cells are numbered `0..k` in the order in
which their colors first appear when scanning the nodes `0..n`.

# Example
```rust
use amenability::{prelude::*, algo::*};

// star with center 0 and leaves 1..=4
let graph = AdjArray::from_edges(5, [Edge(0, 1), Edge(0, 2), Edge(0, 3), Edge(0, 4)].into_iter());
let coloring = ColorRefinement::new().refine(&graph);

assert_eq!(coloring.number_of_cells(), 2);
assert_eq!(coloring.members_of(0), &[0]);
assert_eq!(coloring.members_of(1), &[1, 2, 3, 4]);
```
*/

use fxhash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use tracing::{trace, warn};

use super::*;

/// Label assigned to a node by color refinement
pub type Color = u64;

/// Index of a cell (class of the stable coloring)
pub type Cell = NumNodes;

/// Color every node starts with when no initial coloring is given.
/// It must be non-zero as `pairing(0, 0) == 0` would hide all neighbors.
pub const UNIFORM_COLOR: Color = 1;

/// Combines two labels into one.
///
/// This is the elegant pairing function `a >= b ? a² + a + b : a + b²` evaluated in wrapping
/// 64-bit arithmetic. The argument order matters: the accumulated label goes first.
#[inline]
pub const fn pairing(a: Color, b: Color) -> Color {
    if a >= b {
        a.wrapping_mul(a).wrapping_add(a).wrapping_add(b)
    } else {
        a.wrapping_add(b.wrapping_mul(b))
    }
}

/// Configurable color refinement.
///
/// By default refinement runs until the number of colors is stable. As this number grows in every
/// non-final round and is bounded by `n`, this takes at most `n + 1` rounds which is also used as
/// the default cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorRefinement {
    max_rounds: Option<usize>,
}

impl ColorRefinement {
    /// Creates a new refinement with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of rounds. The coloring of the last executed round is returned if the cap
    /// is hit before the coloring is stable.
    /// ** Panics if `rounds == 0` **
    pub fn max_rounds(mut self, rounds: usize) -> Self {
        assert!(rounds > 0, "at least one round is required");
        self.max_rounds = Some(rounds);
        self
    }

    /// Computes the stable coloring starting with the uniform coloring
    pub fn refine<G: AdjacencyList>(&self, graph: &G) -> StableColoring {
        self.refine_from(graph, vec![UNIFORM_COLOR; graph.len()])
    }

    /// Computes the stable coloring starting with the given coloring.
    /// ** Panics if `initial.len() != n` **
    pub fn refine_from<G: AdjacencyList>(&self, graph: &G, initial: Vec<Color>) -> StableColoring {
        assert_eq!(
            initial.len(),
            graph.len(),
            "initial coloring must assign a color to every node"
        );

        let max_rounds = self.max_rounds.unwrap_or(graph.len() + 1);

        let mut coloring = initial;
        let mut next_coloring = vec![0 as Color; graph.len()];
        let mut num_colors = coloring.iter().collect::<FxHashSet<_>>().len();

        let mut new_colors = FxHashSet::default();
        let mut buffer: SmallVec<[Color; 16]> = SmallVec::new();

        let mut rounds = 0;
        loop {
            rounds += 1;
            new_colors.clear();

            for u in graph.vertices() {
                buffer.clear();
                buffer.extend(graph.neighbors_of(u).map(|v| coloring[v as usize]));
                buffer.sort_unstable();

                let color = buffer
                    .iter()
                    .fold(coloring[u as usize], |acc, &c| pairing(acc, c));

                next_coloring[u as usize] = color;
                new_colors.insert(color);
            }

            std::mem::swap(&mut coloring, &mut next_coloring);

            let stable = new_colors.len() == num_colors;
            num_colors = new_colors.len();
            trace!(round = rounds, colors = num_colors, "refinement round");

            if stable {
                break;
            }

            if rounds >= max_rounds {
                warn!(rounds, colors = num_colors, "color refinement stopped before stabilizing");
                break;
            }
        }

        StableColoring::new(coloring, rounds)
    }
}

/// The result of [`ColorRefinement`]: a color per node, the distinct colors and the cells they
/// induce.
#[derive(Debug, Clone)]
pub struct StableColoring {
    node_colors: Vec<Color>,
    colors: Vec<Color>,
    cell_of_color: FxHashMap<Color, Cell>,
    cell_of_node: Vec<Cell>,
    members: Vec<Vec<Node>>,
    rounds: usize,
}

impl StableColoring {
    fn new(node_colors: Vec<Color>, rounds: usize) -> Self {
        let mut colors = Vec::new();
        let mut cell_of_color = FxHashMap::default();
        let mut members: Vec<Vec<Node>> = Vec::new();

        let cell_of_node = node_colors
            .iter()
            .enumerate()
            .map(|(u, &color)| {
                let cell = *cell_of_color.entry(color).or_insert_with(|| {
                    colors.push(color);
                    members.push(Vec::new());
                    (colors.len() - 1) as Cell
                });
                members[cell as usize].push(u as Node);
                cell
            })
            .collect();

        Self {
            node_colors,
            colors,
            cell_of_color,
            cell_of_node,
            members,
            rounds,
        }
    }

    /// Returns the distinct colors; the i-th color is the color of cell i
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Returns the color of every node
    pub fn node_colors(&self) -> &[Color] {
        &self.node_colors
    }

    /// Returns the color of a node
    /// ** Panics if `u >= n` **
    pub fn color_of(&self, u: Node) -> Color {
        self.node_colors[u as usize]
    }

    /// Returns all nodes with the given color (empty if the color does not occur)
    pub fn nodes_with_color(&self, color: Color) -> &[Node] {
        self.cell_of_color
            .get(&color)
            .map_or(&[][..], |&cell| self.members_of(cell))
    }

    /// Returns the cell holding the nodes of the given color, if any
    pub fn cell_of_color(&self, color: Color) -> Option<Cell> {
        self.cell_of_color.get(&color).copied()
    }

    /// Returns the number of cells (= number of distinct colors)
    pub fn number_of_cells(&self) -> NumNodes {
        self.colors.len() as NumNodes
    }

    /// Returns the cell of a node
    /// ** Panics if `u >= n` **
    pub fn cell_of(&self, u: Node) -> Cell {
        self.cell_of_node[u as usize]
    }

    /// Returns the cell of every node.
    ///
    /// As cells are numbered by first appearance, two colorings induce the same partition
    /// exactly if these slices are equal.
    pub fn partition(&self) -> &[Cell] {
        &self.cell_of_node
    }

    /// Returns the members of a cell in increasing order
    /// ** Panics if `cell >= k` **
    pub fn members_of(&self, cell: Cell) -> &[Node] {
        &self.members[cell as usize]
    }

    /// Returns the number of nodes in a cell
    /// ** Panics if `cell >= k` **
    pub fn size_of(&self, cell: Cell) -> NumNodes {
        self.members[cell as usize].len() as NumNodes
    }

    /// Returns the node standing in for its cell, namely its smallest member
    /// ** Panics if `cell >= k` **
    pub fn representative_of(&self, cell: Cell) -> Node {
        self.members[cell as usize][0]
    }

    /// Returns *true* if every node has a color of its own
    pub fn is_discrete(&self) -> bool {
        self.colors.len() == self.node_colors.len()
    }

    /// Returns the number of executed refinement rounds (including the final, confirming one)
    pub fn rounds(&self) -> usize {
        self.rounds
    }
}
