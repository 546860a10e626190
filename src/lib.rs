use thiserror::Error;

use graphs::{
    contracted_graph::ContractedGraph,
    grid_graph::{EndpointError, GridGraph},
    Distance,
};
use grid::{Maze, MazeError};
use search::{directed::longest_directed_path, longest_path::longest_path, PathError};

pub mod graphs;
pub mod grid;
pub mod search;
pub mod utility;

/// Any failure of the parse -> build -> search pipeline.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Maze(#[from] MazeError),

    #[error(transparent)]
    Endpoint(#[from] EndpointError),

    #[error(transparent)]
    Path(#[from] PathError),
}

/// Longest-path lengths for both rule sets, counted in steps taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeSolution {
    /// Longest simple path when slopes force their exit direction.
    pub directed: Distance,
    /// Longest simple path when slopes are treated as open tiles.
    pub undirected: Distance,
}

/// Runs the whole pipeline on a maze text: parse, build the grid graph,
/// enumerate slope-respecting paths, then contract and search ignoring
/// slopes.
pub fn solve_maze(input: &str) -> Result<MazeSolution, Error> {
    let maze: Maze = input.parse()?;
    let graph = GridGraph::from_maze(&maze)?;

    let directed = longest_directed_path(&graph)?;

    let contracted = ContractedGraph::contract(&graph, graph.source(), graph.target());
    let undirected = longest_path(&contracted, graph.source(), graph.target())?.weight;

    Ok(MazeSolution {
        directed,
        undirected,
    })
}
