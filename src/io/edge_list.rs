//! # EdgeList
//!
//! The EdgeList-Format consists of a header `p {problem} {n} {m}`, followed by `m` non-comment-lines
//! `u v` representing an undirected edge `Edge(u - 1, v - 1)`. Lines starting with the comment
//! identifier (`c` by default) and empty lines are skipped.

use std::{
    fs::File,
    io::{BufRead, BufWriter, ErrorKind, Lines, Write},
    path::Path,
};

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "c".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl<G: GraphFromScratch> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut edges_reader = EdgeListEdgesReader::try_new(reader, &self.comment_identifier)?;
        let n = edges_reader.number_of_nodes();

        // the announced number of edges is not trusted before the edges are actually read
        let mut edges = Vec::with_capacity((edges_reader.number_of_edges() as usize).min(1 << 20));
        while let Some(edge) = edges_reader.parse_edge_line()? {
            edges.push(edge);
        }

        raise_error_unless!(
            edges.len() == edges_reader.number_of_edges() as usize,
            ErrorKind::InvalidData,
            format!(
                "Header announces {} edges but {} were found",
                edges_reader.number_of_edges(),
                edges.len()
            )
        );

        Ok(G::from_edges(n, edges.into_iter()))
    }
}

/// Trait for creating graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphFromScratch,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// Line-based parser of the EdgeList-Format
struct EdgeListEdgesReader<'a, R> {
    /// Lines in the reader
    lines: Lines<R>,
    /// Number of nodes parsed from header
    number_of_nodes: NumNodes,
    /// Number of edges parsed from header
    number_of_edges: NumEdges,
    /// Comment identifier
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> EdgeListEdgesReader<'a, R> {
    /// Creates a new EdgeListEdgesReader and tries to parse the first non-comment-line as the header
    fn try_new(reader: R, comment_identifier: &'a str) -> Result<Self> {
        let mut edge_list_reader = Self {
            lines: reader.lines(),
            number_of_nodes: 0,
            number_of_edges: 0,
            comment_identifier,
        };

        let header = edge_list_reader
            .next_non_comment_line()?
            .ok_or(io_error!(ErrorKind::NotFound, "Header not found"))?;

        let mut parts = header.split_whitespace();
        raise_error_unless!(
            parts.next() == Some("p"),
            ErrorKind::InvalidData,
            "Header must start with 'p'"
        );
        raise_error_unless!(
            parts.next().is_some(),
            ErrorKind::InvalidData,
            "Header misses the problem descriptor"
        );

        edge_list_reader.number_of_nodes = parse_next_value!(parts, "Header>Number of nodes");
        edge_list_reader.number_of_edges = parse_next_value!(parts, "Header>Number of edges");

        Ok(edge_list_reader)
    }

    /// Returns the parsed number of edges in the graph
    fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    /// Returns the parsed number of nodes in the graph
    fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    /// Returns the next non-comment-line if it exists or propagate an error
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            let line = self.lines.next();
            match line {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line))
                    if line.trim().is_empty() || line.starts_with(self.comment_identifier) =>
                {
                    continue;
                }
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }

    /// Tries to parse an edge from the next non-comment-line
    fn parse_edge_line(&mut self) -> Result<Option<Edge>> {
        let Some(line) = self.next_non_comment_line()? else {
            return Ok(None);
        };

        let mut parts = line.split_whitespace();

        let from: Node = parse_next_value!(parts, "Source node");
        let dest: Node = parse_next_value!(parts, "Target node");

        let n = self.number_of_nodes;
        raise_error_unless!(
            (1..=n).contains(&from) && (1..=n).contains(&dest),
            ErrorKind::InvalidData,
            format!("Edge ({from}, {dest}) is out of range 1..={n}")
        );

        Ok(Some(Edge(from - 1, dest - 1)))
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListWriter {
    /// Problem descriptor written as second header token
    problem: String,
}

impl Default for EdgeListWriter {
    fn default() -> Self {
        Self {
            problem: "edge".to_string(),
        }
    }
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the problem descriptor of the header
    pub fn problem<S: Into<String>>(mut self, problem: S) -> EdgeListWriter {
        self.problem = problem.into();
        self
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(
            writer,
            "p {} {} {}",
            self.problem,
            graph.number_of_nodes(),
            graph.number_of_edges()
        )?;

        // a self-loop is listed twice in its own adjacency list
        let mut skip_loop = false;
        for Edge(u, v) in graph.ordered_edges(true) {
            if u == v {
                skip_loop = !skip_loop;
                if !skip_loop {
                    continue;
                }
            }
            writeln!(writer, "{} {}", u + 1, v + 1)?;
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}
