/*!
# Anisotropic Components

Cells connected through nontrivial cell pairs form **anisotropic components**.
An amenable graph requires every component to

- be a tree (*property G*),
- have all cells at least as large as its root, the component's smallest cell (*property G*),
- contain no heterogeneous cell other than its root (*property H*).
*/

use std::collections::VecDeque;

use tracing::debug;

use super::*;

/// Partition of the cells into anisotropic components, each with a designated root
#[derive(Debug, Clone)]
pub struct AnisotropicComponents {
    /// Distinct nontrivial neighbors of every cell
    adjacency: Vec<Vec<Cell>>,
    component_of: Vec<NumNodes>,
    roots: Vec<Cell>,
}

impl AnisotropicComponents {
    /// Discovers all components by breadth-first search along nontrivial cell pairs.
    ///
    /// The root of a component is a cell of minimum size. Among several cells of minimum size a
    /// heterogeneous one is preferred, otherwise the one found first is kept.
    pub fn discover(cell_graph: &CellGraph, labels: &LocalLabels) -> Self {
        let k = cell_graph.number_of_cells();
        debug_assert_eq!(labels.number_of_cells(), k, "labels belong to another cell graph");

        let adjacency = cell_graph
            .cells()
            .map(|cell| {
                cell_graph
                    .adjacent_cells(cell)
                    .filter(|&other| labels.is_nontrivial_pair(cell, other))
                    .collect_vec()
            })
            .collect_vec();

        let mut component_of = vec![INVALID_NODE; k as usize];
        let mut roots: Vec<Cell> = Vec::new();

        let prefer = |candidate: Cell, root: Cell| {
            let (sc, sr) = (cell_graph.size_of(candidate), cell_graph.size_of(root));
            sc < sr
                || (sc == sr && labels.is_heterogeneous(candidate) && !labels.is_heterogeneous(root))
        };

        let mut queue = VecDeque::new();
        for start in cell_graph.cells() {
            if component_of[start as usize] != INVALID_NODE {
                continue;
            }

            let id = roots.len() as NumNodes;
            roots.push(start);
            component_of[start as usize] = id;
            queue.push_back(start);

            while let Some(cell) = queue.pop_front() {
                for &other in &adjacency[cell as usize] {
                    if component_of[other as usize] != INVALID_NODE {
                        continue;
                    }

                    component_of[other as usize] = id;
                    queue.push_back(other);

                    let root = &mut roots[id as usize];
                    if prefer(other, *root) {
                        *root = other;
                    }
                }
            }
        }

        debug!(
            components = roots.len(),
            nontrivial = adjacency.iter().filter(|a| !a.is_empty()).count(),
            "discovered anisotropic components"
        );

        Self {
            adjacency,
            component_of,
            roots,
        }
    }

    /// Returns the number of components
    pub fn number_of_components(&self) -> NumNodes {
        self.roots.len() as NumNodes
    }

    /// Returns the component of a cell
    pub fn component_of(&self, cell: Cell) -> NumNodes {
        self.component_of[cell as usize]
    }

    /// Returns the root of a component
    pub fn root_of(&self, component: NumNodes) -> Cell {
        self.roots[component as usize]
    }

    /// Returns the cells of a component in increasing order
    pub fn members_of(&self, component: NumNodes) -> impl Iterator<Item = Cell> + '_ {
        self.component_of
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == component)
            .map(|(cell, _)| cell as Cell)
    }

    /// Returns the distinct cells joined to `cell` by a nontrivial pair
    pub fn nontrivial_neighbors_of(&self, cell: Cell) -> &[Cell] {
        &self.adjacency[cell as usize]
    }

    /// Checks properties G and H by a breadth-first search from the root of every component.
    pub fn verify(&self, cell_graph: &CellGraph, labels: &LocalLabels) -> Result<(), Violation> {
        let k = self.component_of.len();
        let mut visited = vec![false; k];
        let mut parent: Vec<Option<OptionalNode>> = vec![None; k];
        let mut queue = VecDeque::new();

        for &root in &self.roots {
            let root_size = cell_graph.size_of(root);
            visited[root as usize] = true;
            queue.push_back(root);

            while let Some(cell) = queue.pop_front() {
                for &other in &self.adjacency[cell as usize] {
                    if !visited[other as usize] {
                        if labels.is_heterogeneous(other) {
                            return Err(Violation::NontrivialNonRoot { root, cell: other });
                        }

                        if cell_graph.size_of(other) < root_size {
                            return Err(Violation::NonMonotone { root, cell: other });
                        }

                        visited[other as usize] = true;
                        parent[other as usize] = OptionalNode::new(cell);
                        queue.push_back(other);
                    } else if parent[cell as usize].map(|p| p.get()) != Some(other) {
                        return Err(Violation::NotATree {
                            cell,
                            neighbor: other,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
