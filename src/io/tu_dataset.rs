//! # TU Dataset
//!
//! Reader for the text format of the graph-kernel benchmark collections (TU Dortmund).
//! A collection `{name}` consists of (at least) two files in the directory `{root}/{name}`:
//!
//! - `{name}_A.txt`: one line `u, v` per directed edge with nodes numbered globally from `1`.
//!   Undirected edges usually appear in both directions.
//! - `{name}_graph_indicator.txt`: line `i` holds the graph (numbered from `1`) of node `i`.
//!
//! - `{name}_node_labels.txt` (optional): line `i` holds the integer label of node `i`.
//!
//! Every graph of the collection is relabelled to nodes `0..n_i` in the order in which its nodes
//! appear in the indicator file. Both directions of an edge are merged into one undirected edge and
//! self-loops are dropped, so that every produced graph is simple.

use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind},
    path::{Path, PathBuf},
};

use fxhash::FxHashSet;
use tracing::{debug, warn};

use super::*;
use crate::algo::{Color, UNIFORM_COLOR};

/// All graphs of a collection in the order of their ids
pub type GraphDatabase<G = AdjArray> = Vec<G>;

/// All graphs of a collection together with the initial coloring given by their node labels
pub type LabelledDatabase<G = AdjArray> = Vec<(G, Vec<Color>)>;

/// Reader for collections in the TU Dataset format
#[derive(Debug, Clone)]
pub struct TuDatasetReader {
    /// Directory containing one sub-directory per collection
    root: PathBuf,
}

impl Default for TuDatasetReader {
    fn default() -> Self {
        Self {
            root: PathBuf::from("datasets"),
        }
    }
}

impl TuDatasetReader {
    /// Creates a new reader looking for collections in `./datasets`
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the directory containing the collections
    pub fn root_dir<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.root = root.into();
        self
    }

    /// Returns the path of a file `{root}/{name}/{name}_{suffix}`
    pub fn path_of(&self, name: &str, suffix: &str) -> PathBuf {
        self.root.join(name).join(format!("{name}_{suffix}"))
    }

    /// Reads the collection `name` from the root directory
    ///
    /// # Errors
    /// Returns an error if one of the files cannot be opened or is malformed.
    pub fn try_read_dataset<G>(&self, name: &str) -> Result<GraphDatabase<G>>
    where
        G: GraphFromScratch,
    {
        let graphs = self.try_read_from(
            Self::open(self.path_of(name, "A.txt"))?,
            Self::open(self.path_of(name, "graph_indicator.txt"))?,
        )?;

        debug!(dataset = name, graphs = graphs.len(), "loaded collection");
        Ok(graphs)
    }

    /// Reads the collection `name` together with the node labels in `{name}_node_labels.txt`.
    /// The labels of every graph are returned as an initial coloring for
    /// [`ColorRefinement::refine_from`](crate::algo::ColorRefinement::refine_from).
    ///
    /// # Errors
    /// Returns an error if one of the files cannot be opened or is malformed.
    pub fn try_read_labelled_dataset<G>(&self, name: &str) -> Result<LabelledDatabase<G>>
    where
        G: GraphFromScratch,
    {
        let graphs = self.try_read_labelled_from(
            Self::open(self.path_of(name, "A.txt"))?,
            Self::open(self.path_of(name, "graph_indicator.txt"))?,
            Self::open(self.path_of(name, "node_labels.txt"))?,
        )?;

        debug!(dataset = name, graphs = graphs.len(), "loaded labelled collection");
        Ok(graphs)
    }

    /// Returns *true* if the collection `name` ships node labels
    pub fn has_node_labels(&self, name: &str) -> bool {
        self.path_of(name, "node_labels.txt").is_file()
    }

    fn open(path: PathBuf) -> Result<BufReader<File>> {
        File::open(&path).map(BufReader::new).map_err(|e| {
            io_error!(
                e.kind(),
                format!("Cannot open {}: {e}", path.display())
            )
        })
    }

    /// Reads a collection from an edge file and a graph indicator file
    ///
    /// # Errors
    /// Returns an error if the input is malformed, i.e. if a line cannot be parsed, an edge refers
    /// to an unknown node, or an edge joins nodes of different graphs.
    pub fn try_read_from<G, E, I>(&self, edges: E, indicator: I) -> Result<GraphDatabase<G>>
    where
        G: GraphFromScratch,
        E: BufRead,
        I: BufRead,
    {
        let indicator = Indicator::read(indicator)?;
        Self::read_edges(edges, &indicator)
    }

    /// Reads a collection from an edge file, a graph indicator file and a node label file with
    /// one integer label per node.
    ///
    /// # Errors
    /// Returns an error if the input is malformed or if the number of labels differs from the
    /// number of nodes.
    pub fn try_read_labelled_from<G, E, I, L>(
        &self,
        edges: E,
        indicator: I,
        labels: L,
    ) -> Result<LabelledDatabase<G>>
    where
        G: GraphFromScratch,
        E: BufRead,
        I: BufRead,
        L: BufRead,
    {
        let indicator = Indicator::read(indicator)?;
        let colors = indicator.read_colors(labels)?;
        let graphs = Self::read_edges(edges, &indicator)?;
        Ok(graphs.into_iter().zip(colors).collect())
    }

    fn read_edges<G, E>(edges: E, indicator: &Indicator) -> Result<GraphDatabase<G>>
    where
        G: GraphFromScratch,
        E: BufRead,
    {
        let Indicator {
            graph_of,
            local_id,
            graph_sizes,
        } = indicator;

        let mut graph_edges: Vec<Vec<Edge>> = vec![Vec::new(); graph_sizes.len()];
        let mut seen: FxHashSet<Edge> = FxHashSet::default();
        let mut self_loops = 0usize;

        for (line_number, line) in edges.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let mut parts = line.split(',');
            let u: Node = parse_next_value!(parts, format!("source node in line {}", line_number + 1));
            let v: Node = parse_next_value!(parts, format!("target node in line {}", line_number + 1));

            let num_nodes = graph_of.len() as Node;
            raise_error_unless!(
                (1..=num_nodes).contains(&u) && (1..=num_nodes).contains(&v),
                ErrorKind::InvalidData,
                format!(
                    "Edge ({u}, {v}) in line {} refers to an unknown node",
                    line_number + 1
                )
            );

            let (u, v) = (u - 1, v - 1);
            let graph = graph_of[u as usize];
            raise_error_unless!(
                graph == graph_of[v as usize],
                ErrorKind::InvalidData,
                format!(
                    "Edge ({}, {}) in line {} joins different graphs",
                    u + 1,
                    v + 1,
                    line_number + 1
                )
            );

            if u == v {
                self_loops += 1;
                continue;
            }

            if seen.insert(Edge(u, v).normalized()) {
                graph_edges[graph].push(Edge(local_id[u as usize], local_id[v as usize]));
            }
        }

        if self_loops > 0 {
            warn!(self_loops, "dropped self-loops while reading collection");
        }

        Ok(graph_sizes
            .iter()
            .zip(graph_edges)
            .map(|(&n, edges)| G::from_edges(n, edges.into_iter()))
            .collect())
    }
}

/// Content of a graph indicator file
struct Indicator {
    /// Graph (numbered from `0`) of every node
    graph_of: Vec<usize>,
    /// Index of every node within its graph
    local_id: Vec<Node>,
    /// Number of nodes of every graph
    graph_sizes: Vec<NumNodes>,
}

impl Indicator {
    fn read<I: BufRead>(indicator: I) -> Result<Self> {
        let mut graph_of = Vec::new();
        let mut local_id = Vec::new();
        let mut graph_sizes: Vec<NumNodes> = Vec::new();

        for (line_number, line) in indicator.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let mut parts = std::iter::once(line.as_str());
            let id: usize = parse_next_value!(parts, format!("graph id in line {}", line_number + 1));
            raise_error_unless!(
                id >= 1,
                ErrorKind::InvalidData,
                format!("Graph ids start at 1 (line {})", line_number + 1)
            );

            // ids may interleave but every new id is the successor of the largest one seen so far
            let graph = id - 1;
            raise_error_unless!(
                graph <= graph_sizes.len(),
                ErrorKind::InvalidData,
                format!(
                    "Graph id {id} in line {} skips graph {}",
                    line_number + 1,
                    graph_sizes.len() + 1
                )
            );
            if graph == graph_sizes.len() {
                graph_sizes.push(0);
            }

            graph_of.push(graph);
            local_id.push(graph_sizes[graph]);
            graph_sizes[graph] += 1;
        }

        Ok(Self {
            graph_of,
            local_id,
            graph_sizes,
        })
    }

    /// Reads one integer label per node and splits them into one initial coloring per graph
    fn read_colors<L: BufRead>(&self, labels: L) -> Result<Vec<Vec<Color>>> {
        let mut colors: Vec<Vec<Color>> = self
            .graph_sizes
            .iter()
            .map(|&n| Vec::with_capacity(n as usize))
            .collect();

        let mut node = 0usize;
        for (line_number, line) in labels.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            raise_error_unless!(
                node < self.graph_of.len(),
                ErrorKind::InvalidData,
                format!("Label in line {} has no node", line_number + 1)
            );

            let mut parts = std::iter::once(line.as_str());
            let label: i64 = parse_next_value!(parts, format!("node label in line {}", line_number + 1));
            colors[self.graph_of[node]].push(label_color(label));
            node += 1;
        }

        raise_error_unless!(
            node == self.graph_of.len(),
            ErrorKind::InvalidData,
            format!("Found {node} node labels for {} nodes", self.graph_of.len())
        );

        Ok(colors)
    }
}

/// Maps a node label to an initial color; distinct labels get distinct colors
fn label_color(label: i64) -> Color {
    UNIFORM_COLOR.wrapping_add(label as u64)
}

/// Shorthand for reading a collection with default settings
pub trait TuDatasetRead: Sized {
    /// Reads the collection `name` from `{root}/{name}`
    fn try_read_tu_dataset<P: AsRef<Path>>(root: P, name: &str) -> Result<GraphDatabase<Self>>;
}

impl<G: GraphFromScratch> TuDatasetRead for G {
    fn try_read_tu_dataset<P: AsRef<Path>>(root: P, name: &str) -> Result<GraphDatabase<Self>> {
        TuDatasetReader::new()
            .root_dir(root.as_ref())
            .try_read_dataset(name)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    const EDGES: &str = "1, 2\n2, 1\n2, 3\n3, 2\n4, 5\n5, 4\n5, 5\n6, 4\n";
    const INDICATOR: &str = "1\n1\n1\n2\n2\n2\n";

    fn read(edges: &str, indicator: &str) -> Result<GraphDatabase> {
        TuDatasetReader::new().try_read_from(edges.as_bytes(), indicator.as_bytes())
    }

    #[test]
    fn splits_collection_into_graphs() {
        let graphs = read(EDGES, INDICATOR).unwrap();
        assert_eq!(graphs.len(), 2);

        assert_eq!(graphs[0].number_of_nodes(), 3);
        assert_eq!(
            graphs[0].ordered_edges(true).collect_vec(),
            vec![Edge(0, 1), Edge(1, 2)]
        );

        // the self-loop at global node 5 is dropped
        assert_eq!(graphs[1].number_of_nodes(), 3);
        assert_eq!(
            graphs[1].ordered_edges(true).collect_vec(),
            vec![Edge(0, 1), Edge(0, 2)]
        );
    }

    #[test]
    fn graphs_without_edges_are_kept() {
        let graphs = read("1, 2\n", "1\n1\n2\n3\n3\n").unwrap();
        assert_eq!(graphs.len(), 3);
        assert_eq!(graphs[1].number_of_nodes(), 1);
        assert_eq!(graphs[2].number_of_edges(), 0);
    }

    #[test]
    fn non_contiguous_indicator() {
        let graphs = read("1, 3\n2, 4\n", "1\n2\n1\n2\n").unwrap();
        assert_eq!(graphs.len(), 2);
        assert!(graphs[0].has_edge(0, 1));
        assert!(graphs[1].has_edge(0, 1));
    }

    #[test]
    fn malformed_collections() {
        let kind = |edges: &str, indicator: &str| read(edges, indicator).unwrap_err().kind();

        assert_eq!(kind("1, 7\n", INDICATOR), ErrorKind::InvalidData);
        assert_eq!(kind("0, 1\n", INDICATOR), ErrorKind::InvalidData);
        assert_eq!(kind("1, 4\n", INDICATOR), ErrorKind::InvalidData);
        assert_eq!(kind("1 2\n", INDICATOR), ErrorKind::InvalidData);
        assert_eq!(kind("1, x\n", INDICATOR), ErrorKind::InvalidData);
        assert_eq!(kind("", "1\n0\n"), ErrorKind::InvalidData);
        assert_eq!(kind("", "1\nfoo\n"), ErrorKind::InvalidData);
        assert_eq!(kind("", "1\n3\n"), ErrorKind::InvalidData);
        assert_eq!(kind("", "4000000000\n"), ErrorKind::InvalidData);
    }

    #[test]
    fn node_labels_become_initial_colors() {
        let graphs: LabelledDatabase = TuDatasetReader::new()
            .try_read_labelled_from(
                EDGES.as_bytes(),
                INDICATOR.as_bytes(),
                "0\n1\n0\n2\n2\n2\n".as_bytes(),
            )
            .unwrap();

        assert_eq!(graphs.len(), 2);
        assert_eq!(graphs[0].0.number_of_edges(), 2);
        assert_eq!(graphs[0].1, vec![1, 2, 1]);
        assert_eq!(graphs[1].1, vec![3, 3, 3]);
    }

    #[test]
    fn node_labels_follow_interleaved_graphs() {
        let graphs: LabelledDatabase = TuDatasetReader::new()
            .try_read_labelled_from(
                "1, 3\n2, 4\n".as_bytes(),
                "1\n2\n1\n2\n".as_bytes(),
                "5\n6\n7\n-1\n".as_bytes(),
            )
            .unwrap();

        assert_eq!(graphs[0].1, vec![6, 8]);
        assert_eq!(graphs[1].1, vec![7, 0]);
    }

    #[test]
    fn node_label_count_must_match() {
        let kind = |labels: &str| {
            TuDatasetReader::new()
                .try_read_labelled_from::<AdjArray, _, _, _>(
                    EDGES.as_bytes(),
                    INDICATOR.as_bytes(),
                    labels.as_bytes(),
                )
                .unwrap_err()
                .kind()
        };

        assert_eq!(kind("0\n1\n"), ErrorKind::InvalidData);
        assert_eq!(kind("0\n0\n0\n0\n0\n0\n0\n"), ErrorKind::InvalidData);
        assert_eq!(kind("0\n0\nx\n0\n0\n0\n"), ErrorKind::InvalidData);
    }

    #[test]
    fn missing_files() {
        let err = TuDatasetReader::new()
            .root_dir("/nonexistent/collections")
            .try_read_dataset::<AdjArray>("NONE")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(!TuDatasetReader::new()
            .root_dir("/nonexistent/collections")
            .has_node_labels("NONE"));
    }

    #[test]
    fn paths() {
        let reader = TuDatasetReader::new().root_dir("/data");
        assert_eq!(
            reader.path_of("NCI1", "A.txt"),
            PathBuf::from("/data/NCI1/NCI1_A.txt")
        );
    }
}
