use std::fmt::Display;

use super::*;

/// The reason why a graph is not amenable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// The subgraph induced by a cell is none of: empty, complete, 5-cycle, matching, co-matching
    CellStructure {
        cell: Cell,
        size: NumNodes,
        inner_degree: NumNodes,
    },
    /// The bipartite graph between two cells is none of: empty, complete, disjoint stars,
    /// bipartite complement of disjoint stars
    CrossStructure {
        cells: (Cell, Cell),
        sizes: (NumNodes, NumNodes),
        counts: (NumNodes, NumNodes),
    },
    /// A cell of an anisotropic component is smaller than the component's root.
    ///
    /// [`AnisotropicComponents::discover`] always picks a root of minimum size, so this is never
    /// reported for its components. [`AnisotropicComponents::verify`] still checks monotonicity
    /// and reports it before [`Violation::NotATree`].
    NonMonotone { root: Cell, cell: Cell },
    /// A heterogeneous cell of an anisotropic component is not its root
    NontrivialNonRoot { root: Cell, cell: Cell },
    /// An anisotropic component contains a cycle
    NotATree { cell: Cell, neighbor: Cell },
}

impl Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::CellStructure {
                cell,
                size,
                inner_degree,
            } => write!(
                f,
                "cell {cell} of size {size} has inner degree {inner_degree}"
            ),
            Violation::CrossStructure {
                cells: (i, j),
                sizes: (si, sj),
                counts: (c, d),
            } => write!(
                f,
                "cells {i} (size {si}) and {j} (size {sj}) are joined by counts {c}/{d}"
            ),
            Violation::NonMonotone { root, cell } => {
                write!(f, "cell {cell} is smaller than its component root {root}")
            }
            Violation::NontrivialNonRoot { root, cell } => write!(
                f,
                "heterogeneous cell {cell} is not the component root {root}"
            ),
            Violation::NotATree { cell, neighbor } => {
                write!(f, "edge {{{cell}, {neighbor}}} closes a cycle in a component")
            }
        }
    }
}

/// Outcome of the amenability test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Amenable,
    NotAmenable(Violation),
}

impl Verdict {
    /// Returns *true* if color refinement identifies the graph
    pub fn is_amenable(&self) -> bool {
        matches!(self, Verdict::Amenable)
    }

    /// Returns the violated property, if any
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Verdict::Amenable => None,
            Verdict::NotAmenable(violation) => Some(violation),
        }
    }
}

impl From<Result<(), Violation>> for Verdict {
    fn from(value: Result<(), Violation>) -> Self {
        match value {
            Ok(()) => Verdict::Amenable,
            Err(violation) => Verdict::NotAmenable(violation),
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Amenable => write!(f, "amenable"),
            Verdict::NotAmenable(violation) => write!(f, "not amenable: {violation}"),
        }
    }
}
