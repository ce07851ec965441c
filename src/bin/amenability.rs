//! Evaluates the amenability test on a benchmark collection.
//!
//! ```text
//! amenability <dataset-name> [<root-dir>]
//! amenability --edge-list <file>
//! ```
//!
//! Collections are read from `<root-dir>/<dataset-name>` (default root: `datasets`). If the
//! collection ships `<dataset-name>_node_labels.txt`, the labels are used as initial coloring.
//! Prints the percentage of amenable graphs and the mean running time per graph in seconds.
//! Logging is controlled by `RUST_LOG`.

use std::{env, process::ExitCode, time::Instant};

use amenability::{algo::*, io::*, prelude::*};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: amenability <dataset-name> [<root-dir>] | amenability --edge-list <file>";

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "amenability=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Loads the graphs together with their initial colorings. Collections shipping node labels start
/// from those, all other graphs from the uniform coloring.
fn load(args: &[String]) -> std::io::Result<LabelledDatabase> {
    let reader = match args {
        [flag, file] if flag == "--edge-list" => {
            let graph = AdjArray::try_read_edge_list_file(file)?;
            let colors = vec![UNIFORM_COLOR; graph.len()];
            return Ok(vec![(graph, colors)]);
        }
        [_] => TuDatasetReader::new(),
        [_, root] => TuDatasetReader::new().root_dir(root),
        _ => return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, USAGE)),
    };

    let name = &args[0];
    if reader.has_node_labels(name) {
        info!(dataset = %name, "using node labels as initial coloring");
        return reader.try_read_labelled_dataset(name);
    }

    Ok(reader
        .try_read_dataset::<AdjArray>(name)?
        .into_iter()
        .map(|graph| {
            let colors = vec![UNIFORM_COLOR; graph.len()];
            (graph, colors)
        })
        .collect())
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let graphs = match load(&args) {
        Ok(graphs) => graphs,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    info!(graphs = graphs.len(), "graph database loaded");

    let start = Instant::now();
    let summary =
        AmenabilitySummary::from_verdicts(&AmenabilityTest::new().run_all_with_colors(&graphs));
    let elapsed = start.elapsed().as_secs_f64();

    info!(
        graphs = summary.graphs,
        amenable = summary.amenable,
        "finished amenability test"
    );

    println!("{}", summary.percentage());
    println!(
        "Running time [s]: {}",
        if summary.graphs == 0 {
            0.0
        } else {
            elapsed / summary.graphs as f64
        }
    );

    ExitCode::SUCCESS
}
