use std::path::PathBuf;

use clap::Parser;
use longest_paths::{
    graphs::{contracted_graph::ContractedGraph, grid_graph::GridGraph, Graph},
    grid::Maze,
};

/// Prints how far contraction shrinks a maze graph
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maze file: '#' wall, '.' open, '^v<>' slopes
    #[arg(short, long)]
    maze: PathBuf,
}

fn main() {
    let args = Args::parse();

    let maze = Maze::from_file(&args.maze).unwrap();
    let graph = GridGraph::from_maze(&maze).unwrap();
    let contracted = ContractedGraph::contract(&graph, graph.source(), graph.target());

    println!("vertices:         {}", graph.number_of_vertices());
    println!("raw edges:        {}", graph.number_of_edges());
    println!("junctions:        {}", contracted.junctions().len());
    println!("contracted edges: {}", contracted.number_of_edges());
}
