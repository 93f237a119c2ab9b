use std::fmt::Display;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fringe::paths::{all_pairs_shortest_paths, shortest_paths_from, Graph};
use fringe::{fringe, has_same_fringe, level_order, prune, Tree};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Builds binary search trees and compares their fringes
#[derive(Parser, Debug)]
#[command(name = "fringe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Raise the log level (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare the fringes of the two sample trees
    Demo,

    /// Compare the fringes of two trees built from comma separated values
    Compare {
        /// Values inserted, in order, into the first tree
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        left: Vec<i64>,

        /// Values inserted, in order, into the second tree
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        right: Vec<i64>,
    },

    /// Show a tree level by level before and after stripping its leaves
    Prune {
        /// Values inserted, in order, into the tree
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Single source shortest paths on the sample five vertex graph
    Dijkstra {
        /// Vertex to search from
        #[arg(long, default_value_t = 0)]
        source: usize,
    },

    /// All pairs shortest paths on the sample four vertex weight matrix
    Floyd,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => compare(
            &[14, 11, 17, 9, 13, 53],
            &[11, 9, 13, 14, 17, 53],
            ("T", "U"),
        ),
        Commands::Compare { left, right } => compare(&left, &right, ("left", "right")),
        Commands::Prune { values } => {
            let tree: Tree<_> = values.into_iter().collect();
            println!("Levels:{}", spaced(levels_of(&tree)));
            println!("Pruned:{}", spaced(levels_of(&prune(&tree))));
        }
        Commands::Dijkstra { source } => dijkstra(source)?,
        Commands::Floyd => floyd()?,
    }

    Ok(())
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn compare(left: &[i64], right: &[i64], names: (&str, &str)) {
    let a: Tree<_> = left.iter().copied().collect();
    let b: Tree<_> = right.iter().copied().collect();

    println!("Fringe of {}:{}", names.0, spaced(&fringe(&a)));
    println!("Fringe of {}:{}", names.1, spaced(&fringe(&b)));
    println!(
        "Same fringe? {}",
        if has_same_fringe(&a, &b) { "yes" } else { "no" }
    );
}

fn dijkstra(source: usize) -> Result<()> {
    let mut graph = Graph::new(5);
    for (a, b, w) in [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 3, 5), (3, 4, 3)] {
        graph.add_edge(a, b, w)?;
    }

    let paths = shortest_paths_from(&graph, source)
        .with_context(|| format!("searching from vertex {source}"))?;

    println!("Shortest distances from node {source}:");
    for (vertex, distance) in paths.distances().iter().enumerate() {
        println!("to {vertex} = {}", or_inf(*distance));
    }
    Ok(())
}

fn floyd() -> Result<()> {
    let weights = vec![
        vec![Some(0), Some(3), None, Some(5)],
        vec![Some(2), Some(0), None, Some(4)],
        vec![None, Some(1), Some(0), None],
        vec![None, None, Some(2), Some(0)],
    ];

    let distances = all_pairs_shortest_paths(&weights).context("sample weight matrix")?;

    println!("All-pairs shortest path matrix:");
    for row in &distances {
        let cells: Vec<_> = row.iter().map(|d| or_inf(*d)).collect();
        println!("{}", cells.join(" "));
    }
    Ok(())
}

fn levels_of(tree: &Tree<i64>) -> Vec<i64> {
    let mut out = Vec::new();
    level_order(tree, |x| out.push(*x));
    out
}

fn spaced<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    values.into_iter().map(|v| format!(" {v}")).collect()
}

fn or_inf(distance: Option<u64>) -> String {
    distance.map_or_else(|| "INF".to_string(), |d| d.to_string())
}
