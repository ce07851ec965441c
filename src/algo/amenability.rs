use rayon::prelude::*;
use tracing::{debug, debug_span};

use super::*;

/// Configurable amenability test.
///
/// Every run is independent of every other run and only reads the graph, so collections of graphs
/// can be processed in parallel with [`AmenabilityTest::run_all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AmenabilityTest {
    refinement: ColorRefinement,
}

impl AmenabilityTest {
    /// Creates a new test with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the color refinement used to compute the stable coloring
    pub fn refinement(mut self, refinement: ColorRefinement) -> Self {
        self.refinement = refinement;
        self
    }

    /// Decides whether a graph is amenable
    pub fn run<G: AdjacencyList>(&self, graph: &G) -> Verdict {
        let _span = debug_span!("amenability", nodes = graph.number_of_nodes()).entered();
        self.decide(graph, self.refinement.refine(graph))
    }

    /// Decides whether a vertex-colored graph is amenable, i.e. whether color refinement started
    /// from `colors` identifies it among all graphs with the same vertex colors.
    ///
    /// # Panics
    /// Panics if `colors` does not hold exactly one color per node.
    pub fn run_with_colors<G: AdjacencyList>(&self, graph: &G, colors: Vec<Color>) -> Verdict {
        let _span = debug_span!("amenability", nodes = graph.number_of_nodes()).entered();
        self.decide(graph, self.refinement.refine_from(graph, colors))
    }

    fn decide<G: AdjacencyList>(&self, graph: &G, coloring: StableColoring) -> Verdict {
        debug!(
            cells = coloring.number_of_cells(),
            rounds = coloring.rounds(),
            "computed stable coloring"
        );

        let cell_graph = CellGraph::new(graph, &coloring);

        let labels = match LocalLabels::classify(&cell_graph) {
            Ok(labels) => labels,
            Err(violation) => {
                debug!(%violation, "local properties violated");
                return Verdict::NotAmenable(violation);
            }
        };

        let components = AnisotropicComponents::discover(&cell_graph, &labels);
        let verdict = Verdict::from(components.verify(&cell_graph, &labels));

        debug!(%verdict, "finished");
        verdict
    }

    /// Decides for every graph whether it is amenable; graphs are processed in parallel.
    /// The i-th verdict belongs to the i-th graph.
    pub fn run_all<G>(&self, graphs: &[G]) -> Vec<Verdict>
    where
        G: AdjacencyList + Sync,
    {
        graphs.par_iter().map(|graph| self.run(graph)).collect()
    }

    /// Like [`AmenabilityTest::run_all`] for vertex-colored graphs
    pub fn run_all_with_colors<G>(&self, graphs: &[(G, Vec<Color>)]) -> Vec<Verdict>
    where
        G: AdjacencyList + Sync,
    {
        graphs
            .par_iter()
            .map(|(graph, colors)| self.run_with_colors(graph, colors.clone()))
            .collect()
    }

    /// Runs the test on every graph and only keeps the counts
    pub fn summarize<G>(&self, graphs: &[G]) -> AmenabilitySummary
    where
        G: AdjacencyList + Sync,
    {
        AmenabilitySummary::from_verdicts(&self.run_all(graphs))
    }
}

/// Number of amenable graphs within a collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AmenabilitySummary {
    pub graphs: usize,
    pub amenable: usize,
}

impl AmenabilitySummary {
    /// Counts the amenable verdicts
    pub fn from_verdicts(verdicts: &[Verdict]) -> Self {
        Self {
            graphs: verdicts.len(),
            amenable: verdicts.iter().filter(|v| v.is_amenable()).count(),
        }
    }

    /// Returns the percentage of amenable graphs (`0.0` for an empty collection)
    pub fn percentage(&self) -> f64 {
        if self.graphs == 0 {
            0.0
        } else {
            self.amenable as f64 / self.graphs as f64 * 100.0
        }
    }
}

/// The amenability test as methods on the graph itself
pub trait Amenability: AdjacencyList {
    /// Runs the amenability test with default settings
    fn amenability(&self) -> Verdict {
        AmenabilityTest::new().run(self)
    }

    /// Returns *true* if color refinement identifies the graph up to isomorphism
    fn is_amenable(&self) -> bool {
        self.amenability().is_amenable()
    }
}

impl<G: AdjacencyList> Amenability for G {}
