use std::fs;

use amenability::{algo::*, gens::*, io::*, prelude::*};
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

fn graph_from(n: NumNodes, edges: &[(Node, Node)]) -> AdjArray {
    AdjArray::from_edges(n, edges.iter())
}

fn random_tree<R: Rng>(rng: &mut R, n: NumNodes) -> AdjArray {
    let mut tree = AdjArray::new(n);
    for u in 1..n {
        let parent = rng.random_range(0..u);
        tree.add_edge(parent, u);
    }
    tree
}

#[test]
fn trivial_graphs() {
    assert!(AdjArray::new(0).is_amenable());
    assert!(AdjArray::new(1).is_amenable());
}

#[test]
fn complete_graphs() {
    for n in 2..12 {
        let mut graph = AdjArray::new(n);
        graph.connect_clique(0..n);

        let coloring = ColorRefinement::new().refine(&graph);
        assert_eq!(coloring.number_of_cells(), 1);
        assert_eq!(CellGraph::new(&graph, &coloring).edge_count(0, 0), n - 1);
        assert!(graph.is_amenable());
    }
}

#[test]
fn five_cycle() {
    let graph = graph_from(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);

    let coloring = ColorRefinement::new().refine(&graph);
    let cells = CellGraph::new(&graph, &coloring);
    assert_eq!(cells.number_of_cells(), 1);
    assert_eq!(cells.edge_count(0, 0), 2);

    let labels = LocalLabels::classify(&cells).unwrap();
    assert!(labels.is_heterogeneous(0));
    assert_eq!(labels.structure_of(0), CellStructure::FiveCycle);

    assert_eq!(graph.amenability(), Verdict::Amenable);
}

#[test]
fn two_disjoint_triangles() {
    let graph = graph_from(6, &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)]);

    assert_eq!(ColorRefinement::new().refine(&graph).number_of_cells(), 1);

    let verdict = graph.amenability();
    assert!(!verdict.is_amenable());
    assert!(matches!(
        verdict.violation(),
        Some(Violation::CellStructure {
            size: 6,
            inner_degree: 2,
            ..
        })
    ));
}

#[test]
fn star_with_four_leaves() {
    let graph = graph_from(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]);

    let coloring = ColorRefinement::new().refine(&graph);
    let cells = CellGraph::new(&graph, &coloring);
    assert_eq!(cells.number_of_cells(), 2);
    assert_eq!(cells.edge_count(0, 1), 4);

    let labels = LocalLabels::classify(&cells).unwrap();
    assert!(!labels.is_heterogeneous(0));
    assert!(!labels.is_heterogeneous(1));
    assert!(!labels.is_nontrivial_pair(0, 1));

    assert!(graph.is_amenable());
}

#[test]
fn small_cycles() {
    for n in 3..10 {
        let mut cycle = AdjArray::new(n);
        cycle.connect_cycle(0..n);
        assert_eq!(cycle.is_amenable(), n <= 5, "C_{n}");
    }
}

#[test]
fn disjoint_paths_share_a_heterogeneous_root() {
    let mut graph = AdjArray::new(8);
    graph.connect_path(0..4);
    graph.connect_path(4..8);
    assert!(graph.is_amenable());
}

#[test]
fn random_trees_are_amenable() {
    let rng = &mut Pcg64Mcg::seed_from_u64(6);
    for n in [2, 5, 10, 30, 100] {
        for _ in 0..10 {
            let tree = random_tree(rng, n);
            assert!(tree.is_amenable(), "{tree:?}");
        }
    }
}

#[test]
fn verdict_is_deterministic() {
    let rng = &mut Pcg64Mcg::seed_from_u64(1);
    for _ in 0..30 {
        let graph = AdjArray::gnp(rng, 15, 0.25);
        let first = graph.amenability();
        for _ in 0..3 {
            assert_eq!(graph.amenability(), first);
        }
    }
}

#[test]
fn isomorphism_invariance() {
    let rng = &mut Pcg64Mcg::seed_from_u64(2);

    for n in [4, 8, 12, 20] {
        for p in [0.1, 0.25, 0.5, 0.8] {
            for _ in 0..5 {
                let graph = AdjArray::gnp(rng, n, p);
                let expected = graph.is_amenable();
                let cells = ColorRefinement::new().refine(&graph).number_of_cells();

                for _ in 0..4 {
                    let permuted = graph.relabelled(&random_permutation(rng, n));
                    assert_eq!(permuted.is_amenable(), expected, "{graph:?}");
                    assert_eq!(
                        ColorRefinement::new().refine(&permuted).number_of_cells(),
                        cells
                    );
                }
            }
        }
    }
}

/// Relabels `graph` many times and checks that the verdict and the cell sizes never change
fn assert_invariant_under_relabelling(graph: &AdjArray, expected: bool, seed: u64) {
    let rng = &mut Pcg64Mcg::seed_from_u64(seed);
    let cell_sizes = |g: &AdjArray| {
        let cells = CellGraph::new(g, &ColorRefinement::new().refine(g));
        cells.cells().map(|c| cells.size_of(c)).sorted().collect_vec()
    };
    let sizes = cell_sizes(graph);

    assert_eq!(graph.is_amenable(), expected, "{graph:?}");
    for _ in 0..200 {
        let permutation = random_permutation(rng, graph.number_of_nodes());
        let permuted = graph.relabelled(&permutation);
        assert_eq!(permuted.is_amenable(), expected, "{permutation:?}");
        assert_eq!(cell_sizes(&permuted), sizes);
    }
}

#[test]
fn relabelling_keeps_tied_roots_amenable() {
    let mut paths = AdjArray::new(8);
    paths.connect_path(0..4);
    paths.connect_path(4..8);
    assert_invariant_under_relabelling(&paths, true, 8);

    // perfect matching between two cells of four nodes, one of them also matched inside
    let mut matched = AdjArray::new(8);
    matched.connect_matching((0..4).map(|u| (u, u + 4)));
    matched.connect_matching([(4, 5), (6, 7)]);
    assert_invariant_under_relabelling(&matched, true, 9);
}

#[test]
fn relabelling_keeps_rejections() {
    let mut hexagon = AdjArray::new(6);
    hexagon.connect_cycle(0..6);
    assert_invariant_under_relabelling(&hexagon, false, 10);

    // two centers with three leaves each, leaves of different centers are matched
    let mut graph = AdjArray::new(8);
    graph.connect_star(0, [2, 3, 4]);
    graph.connect_star(1, [5, 6, 7]);
    graph.connect_matching([(2, 5), (3, 6), (4, 7)]);
    assert_invariant_under_relabelling(&graph, false, 12);
}

#[test]
fn refinement_is_idempotent() {
    let rng = &mut Pcg64Mcg::seed_from_u64(3);

    for _ in 0..30 {
        let n = rng.random_range(1..30);
        let graph = AdjArray::gnp(rng, n, 0.2);

        let first = ColorRefinement::new().refine(&graph);
        let second = ColorRefinement::new().refine_from(&graph, first.node_colors().to_vec());

        assert_eq!(first.number_of_cells(), second.number_of_cells());
        assert_eq!(first.partition(), second.partition());
    }
}

#[test]
fn batch_evaluation_matches_single_runs() {
    let rng = &mut Pcg64Mcg::seed_from_u64(4);
    let graphs = (0..50)
        .map(|i| AdjArray::gnp(rng, 5 + i % 10, 0.3))
        .collect_vec();

    let verdicts = AmenabilityTest::new().run_all(&graphs);
    assert_eq!(verdicts.len(), graphs.len());
    for (graph, verdict) in graphs.iter().zip(&verdicts) {
        assert_eq!(graph.amenability(), *verdict);
    }

    let summary = AmenabilitySummary::from_verdicts(&verdicts);
    assert_eq!(summary.graphs, 50);
    assert_eq!(
        summary.amenable,
        verdicts.iter().filter(|v| v.is_amenable()).count()
    );
}

#[test]
fn tu_dataset_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let collection = dir.path().join("TOY");
    fs::create_dir(&collection).unwrap();

    // triangle, two triangles, 5-cycle, isolated node
    let graphs: Vec<(NumNodes, Vec<(Node, Node)>)> = vec![
        (3, vec![(0, 1), (1, 2), (2, 0)]),
        (6, vec![(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]),
        (5, vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]),
        (1, vec![]),
    ];

    let mut edges = String::new();
    let mut indicator = String::new();
    let mut offset = 1;
    for (id, (n, graph_edges)) in graphs.iter().enumerate() {
        for (u, v) in graph_edges {
            edges.push_str(&format!("{}, {}\n", u + offset, v + offset));
            edges.push_str(&format!("{}, {}\n", v + offset, u + offset));
        }
        for _ in 0..*n {
            indicator.push_str(&format!("{}\n", id + 1));
        }
        offset += n;
    }

    fs::write(collection.join("TOY_A.txt"), edges).unwrap();
    fs::write(collection.join("TOY_graph_indicator.txt"), indicator).unwrap();

    let database: GraphDatabase = TuDatasetReader::new()
        .root_dir(dir.path())
        .try_read_dataset("TOY")
        .unwrap();

    assert_eq!(database.len(), 4);
    for (graph, (n, graph_edges)) in database.iter().zip(&graphs) {
        assert_eq!(graph.number_of_nodes(), *n);
        assert_eq!(graph.number_of_edges() as usize, graph_edges.len());
    }

    let verdicts = AmenabilityTest::new().run_all(&database);
    assert_eq!(
        verdicts.iter().map(Verdict::is_amenable).collect_vec(),
        vec![true, false, true, true]
    );

    let summary = AmenabilityTest::new().summarize(&database);
    assert_eq!(summary.amenable, 3);
    assert!((summary.percentage() - 75.0).abs() < 1e-9);

    // labelling the two triangles apart makes the second graph amenable
    let reader = TuDatasetReader::new().root_dir(dir.path());
    assert!(!reader.has_node_labels("TOY"));
    let labels = [0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0]
        .iter()
        .map(|l| format!("{l}\n"))
        .collect::<String>();
    fs::write(collection.join("TOY_node_labels.txt"), labels).unwrap();
    assert!(reader.has_node_labels("TOY"));

    let labelled: LabelledDatabase = reader.try_read_labelled_dataset("TOY").unwrap();
    assert_eq!(labelled.len(), 4);
    assert_eq!(labelled[1].1, vec![2, 2, 2, 1, 1, 1]);
    assert!(
        AmenabilityTest::new()
            .run_all_with_colors(&labelled)
            .iter()
            .all(Verdict::is_amenable)
    );
}

#[test]
fn edge_list_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.txt");

    let rng = &mut Pcg64Mcg::seed_from_u64(5);
    let graph = AdjArray::gnp(rng, 25, 0.2);
    graph.try_write_edge_list_file(&path).unwrap();

    let read = AdjArray::try_read_edge_list_file(&path).unwrap();
    assert_eq!(read, graph);
    assert_eq!(read.is_amenable(), graph.is_amenable());
}
