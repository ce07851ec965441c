/*!
# Cell Graph

The quotient of a graph by its stable coloring. Every cell becomes one node of an [`AdjArray`];
`edge_count(i, j)` counts the neighbors that the representative of cell `i` has in cell `j`.

Since the coloring is stable, every member of a cell has the same number of neighbors in every other
cell, so sampling one representative per cell yields the counts for all members.
*/

use tracing::debug;

use super::*;

/// Quotient multigraph over the cells of a [`StableColoring`]
#[derive(Debug, Clone)]
pub struct CellGraph {
    sizes: Vec<NumNodes>,
    representatives: Vec<Node>,
    /// Row-major `k x k` matrix
    edge_counts: Vec<NumNodes>,
    graph: AdjArray,
}

impl CellGraph {
    /// Builds the cell graph of `graph` with respect to its stable coloring
    pub fn new<G: AdjacencyList>(graph: &G, coloring: &StableColoring) -> Self {
        let k = coloring.number_of_cells();

        let sizes = (0..k).map(|cell| coloring.size_of(cell)).collect_vec();
        let representatives = (0..k)
            .map(|cell| coloring.representative_of(cell))
            .collect_vec();

        let mut edge_counts = vec![0; (k as usize) * (k as usize)];
        let mut cell_graph = AdjArray::new(k);

        for (cell, &rep) in representatives.iter().enumerate() {
            let row = &mut edge_counts[cell * k as usize..(cell + 1) * k as usize];
            for v in graph.neighbors_of(rep) {
                let other = coloring.cell_of(v);
                let count = &mut row[other as usize];
                if *count == 0 {
                    cell_graph.add_edge(cell as Cell, other);
                }
                *count += 1;
            }
        }

        debug!(
            cells = k,
            edges = cell_graph.number_of_edges(),
            "built cell graph"
        );

        Self {
            sizes,
            representatives,
            edge_counts,
            graph: cell_graph,
        }
    }

    /// Returns the number of cells
    pub fn number_of_cells(&self) -> NumNodes {
        self.sizes.len() as NumNodes
    }

    /// Returns an iterator over all cells
    pub fn cells(&self) -> std::ops::Range<Cell> {
        0..self.number_of_cells()
    }

    /// Returns the number of nodes in a cell
    pub fn size_of(&self, cell: Cell) -> NumNodes {
        self.sizes[cell as usize]
    }

    /// Returns the node sampled for a cell
    pub fn representative_of(&self, cell: Cell) -> Node {
        self.representatives[cell as usize]
    }

    /// Returns the number of neighbors each node of cell `i` has in cell `j`.
    /// For `i == j` this is the degree within the cell.
    pub fn edge_count(&self, i: Cell, j: Cell) -> NumNodes {
        let k = self.number_of_cells() as usize;
        assert!((i as usize) < k && (j as usize) < k, "cell out of range");
        self.edge_counts[i as usize * k + j as usize]
    }

    /// Returns the unweighted cell graph.
    ///
    /// An edge `{i, j}` is inserted once from each side whose count is non-zero, so adjacent
    /// distinct cells appear twice in each others lists and a cell with inner edges has a self-loop.
    pub fn graph(&self) -> &AdjArray {
        &self.graph
    }

    /// Returns the distinct cells adjacent to `cell` (excluding `cell` itself)
    pub fn adjacent_cells(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.graph
            .neighbors_of(cell)
            .filter(move |&other| other != cell)
            .unique()
    }
}
