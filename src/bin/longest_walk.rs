use std::{path::PathBuf, time::Instant};

use clap::Parser;
use longest_paths::{
    graphs::{contracted_graph::ContractedGraph, grid_graph::GridGraph, Graph},
    grid::Maze,
    search::{
        directed::longest_directed_path,
        longest_path::{longest_path_par, longest_path_with},
    },
    utility::get_progressspinner,
};

/// Longest simple path through a slope maze, with and without one-way rules
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maze file: '#' wall, '.' open, '^v<>' slopes
    #[arg(short, long)]
    maze: PathBuf,

    /// Explore independent branches on separate worker threads
    #[arg(short, long)]
    parallel: bool,
}

fn main() {
    let args = Args::parse();

    let maze = Maze::from_file(&args.maze).unwrap();
    let graph = GridGraph::from_maze(&maze).unwrap();

    let start = Instant::now();
    let directed = longest_directed_path(&graph).unwrap();
    println!(
        "Longest slope-respecting path: {} steps ({:?})",
        directed,
        start.elapsed()
    );

    let start = Instant::now();
    let contracted = ContractedGraph::contract(&graph, graph.source(), graph.target());
    println!(
        "Contracted {} vertices down to {} junctions ({:?})",
        graph.number_of_vertices(),
        contracted.junctions().len(),
        start.elapsed()
    );

    let spinner = get_progressspinner("searching ignoring slopes");
    let start = Instant::now();
    let best = if args.parallel {
        longest_path_par(&contracted, graph.source(), graph.target(), |weight| {
            spinner.println(format!("New best: {} steps", weight));
        })
    } else {
        longest_path_with(&contracted, graph.source(), graph.target(), |path| {
            spinner.println(format!("New best: {} steps", path.weight));
        })
    }
    .unwrap();
    spinner.finish_and_clear();
    println!(
        "Longest path ignoring slopes: {} steps ({:?})",
        best.weight,
        start.elapsed()
    );
}
