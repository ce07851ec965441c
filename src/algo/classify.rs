/*!
# Local Structure of Cells

Classifies the subgraph induced by each cell (*property A*) and the bipartite graph between each
pair of cells (*property B*). For an amenable graph, every cell induces one of

- an empty or a complete graph (**homogeneous**),
- a 5-cycle, a perfect matching or the complement of a perfect matching (**heterogeneous**),

and every pair of cells induces one of

- an empty or a complete bipartite graph (**trivial**),
- a disjoint union of stars or its bipartite complement (**nontrivial**).

All of these are recognized from the counts of the [`CellGraph`] alone.
*/

use tracing::debug;

use super::*;

/// Structure of the subgraph induced by a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStructure {
    Empty,
    Complete,
    FiveCycle,
    Matching,
    CoMatching,
}

impl CellStructure {
    /// Recognizes the structure of a cell from its size and the inner degree of its members
    pub fn classify(size: NumNodes, inner_degree: NumNodes) -> Option<Self> {
        if inner_degree + 1 == size {
            Some(Self::Complete)
        } else if inner_degree == 0 {
            Some(Self::Empty)
        } else if inner_degree == 2 && size == 5 {
            Some(Self::FiveCycle)
        } else if inner_degree == 1 && size >= 4 {
            Some(Self::Matching)
        } else if size >= 4 && inner_degree == size - 2 {
            Some(Self::CoMatching)
        } else {
            None
        }
    }

    /// Returns *true* for the heterogeneous structures (vertex label 1)
    pub fn is_heterogeneous(&self) -> bool {
        matches!(self, Self::FiveCycle | Self::Matching | Self::CoMatching)
    }
}

/// One side of an ordered cell pair `(i, j)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

/// Structure of the bipartite graph between two cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossStructure {
    Empty,
    CompleteBipartite,
    /// Disjoint union of stars whose leaves lie on the given side
    Stars { leaves: Side },
    /// Bipartite complement of a disjoint union of stars whose leaves lie on the given side
    CoStars { leaves: Side },
}

impl CrossStructure {
    /// Recognizes the structure between cells `i` and `j` of sizes `si` and `sj` where every node
    /// of `i` has `c` neighbors in `j` and every node of `j` has `d` neighbors in `i`.
    pub fn classify(si: NumNodes, sj: NumNodes, c: NumNodes, d: NumNodes) -> Option<Self> {
        if c == 0 {
            return Some(Self::Empty);
        }

        if c == sj {
            return Some(Self::CompleteBipartite);
        }

        if sj % c == 0 && d == 1 && c as u64 * si as u64 == sj as u64 {
            return Some(Self::Stars {
                leaves: Side::Second,
            });
        }

        if d != 0 && si % d == 0 && c == 1 && d as u64 * sj as u64 == si as u64 {
            return Some(Self::Stars {
                leaves: Side::First,
            });
        }

        if sj % si == 0 {
            let r = sj / si;
            (c == sj - r && d == si - 1).then_some(Self::CoStars {
                leaves: Side::Second,
            })
        } else if si % sj == 0 {
            let r = si / sj;
            (d == si - r && c == sj - 1).then_some(Self::CoStars {
                leaves: Side::First,
            })
        } else {
            None
        }
    }

    /// Returns *true* for the nontrivial structures (edge label 1)
    pub fn is_nontrivial(&self) -> bool {
        matches!(self, Self::Stars { .. } | Self::CoStars { .. })
    }

    /// Returns the orientation `(i, j)` or `(j, i)` that carries the nontrivial label of the pair
    /// `(i, j)`, or `None` for trivial structures.
    ///
    /// Stars are recorded on `(i, j)` regardless of where the leaves lie; the complement of stars
    /// is recorded from the side of the smaller cell.
    pub fn labelled_pair(&self, i: Cell, j: Cell) -> Option<(Cell, Cell)> {
        match self {
            Self::Empty | Self::CompleteBipartite => None,
            Self::Stars { .. } | Self::CoStars { leaves: Side::Second } => Some((i, j)),
            Self::CoStars { leaves: Side::First } => Some((j, i)),
        }
    }
}

/// Vertex and edge labels of a [`CellGraph`]
#[derive(Debug, Clone)]
pub struct LocalLabels {
    cells: Vec<CellStructure>,
    /// Row-major `k x k` matrix of oriented edge labels
    edge_labels: Vec<bool>,
}

impl LocalLabels {
    /// Checks properties A and B for all cells and ordered pairs of distinct cells.
    ///
    /// Cells are processed in increasing order; for each cell its own structure is checked before
    /// the pairs it forms with all other cells. The first failing check is reported.
    pub fn classify(cell_graph: &CellGraph) -> Result<Self, Violation> {
        let k = cell_graph.number_of_cells();
        let mut cells = Vec::with_capacity(k as usize);
        let mut edge_labels = vec![false; (k as usize) * (k as usize)];

        for i in cell_graph.cells() {
            let size = cell_graph.size_of(i);
            let inner_degree = cell_graph.edge_count(i, i);
            let structure = CellStructure::classify(size, inner_degree).ok_or(
                Violation::CellStructure {
                    cell: i,
                    size,
                    inner_degree,
                },
            )?;
            cells.push(structure);

            for j in cell_graph.cells().filter(|&j| j != i) {
                let sizes = (size, cell_graph.size_of(j));
                let counts = (cell_graph.edge_count(i, j), cell_graph.edge_count(j, i));

                let cross = CrossStructure::classify(sizes.0, sizes.1, counts.0, counts.1).ok_or(
                    Violation::CrossStructure {
                        cells: (i, j),
                        sizes,
                        counts,
                    },
                )?;

                if let Some((a, b)) = cross.labelled_pair(i, j) {
                    edge_labels[(a as usize) * (k as usize) + b as usize] = true;
                }
            }
        }

        debug!(
            heterogeneous = cells.iter().filter(|s| s.is_heterogeneous()).count(),
            nontrivial_labels = edge_labels.iter().filter(|&&l| l).count(),
            "classified cells"
        );

        Ok(Self { cells, edge_labels })
    }

    /// Returns the number of labelled cells
    pub fn number_of_cells(&self) -> NumNodes {
        self.cells.len() as NumNodes
    }

    /// Returns the structure of a cell
    pub fn structure_of(&self, cell: Cell) -> CellStructure {
        self.cells[cell as usize]
    }

    /// Returns the vertex label of a cell: *true* if it is heterogeneous
    pub fn is_heterogeneous(&self, cell: Cell) -> bool {
        self.cells[cell as usize].is_heterogeneous()
    }

    /// Returns the oriented edge label of `(i, j)`
    pub fn edge_label(&self, i: Cell, j: Cell) -> bool {
        self.edge_labels[(i as usize) * self.cells.len() + j as usize]
    }

    /// Returns *true* if the pair `{i, j}` is nontrivial in either orientation
    pub fn is_nontrivial_pair(&self, i: Cell, j: Cell) -> bool {
        self.edge_label(i, j) || self.edge_label(j, i)
    }
}
