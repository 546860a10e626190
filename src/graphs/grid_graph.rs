use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Distance, Edge, Graph, Vertex, WeightedEdge};
use crate::grid::{Direction, Maze, Tile};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EndpointError {
    #[error("row {row} has no open tile to serve as a path endpoint")]
    Missing { row: usize },

    #[error("row {row} has more than one open tile, the endpoint is ambiguous")]
    Ambiguous { row: usize },
}

/// Adjacency view of a maze: one dense vertex per non-wall cell, assigned
/// row-major during construction.
///
/// The stored adjacency is symmetric because every tile may be entered from
/// any side. Slopes restrict exits only; they are kept per vertex and
/// consulted by the slope-respecting enumeration at traversal time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridGraph {
    neighbors: Vec<Vec<(Direction, Vertex)>>,
    slopes: Vec<Option<Direction>>,
    positions: Vec<(usize, usize)>,
    source: Vertex,
    target: Vertex,
}

impl GridGraph {
    /// Builds the graph and identifies the start (single open tile of the top
    /// row) and end (single open tile of the bottom row).
    pub fn from_maze(maze: &Maze) -> Result<GridGraph, EndpointError> {
        let width = maze.width();
        let height = maze.height();

        let mut vertex_of = vec![None; width * height];
        let mut positions = Vec::new();
        let mut slopes = Vec::new();
        for y in 0..height {
            for x in 0..width {
                match maze.tile(x, y) {
                    Tile::Wall => {}
                    tile => {
                        vertex_of[y * width + x] = Some(positions.len() as Vertex);
                        positions.push((x, y));
                        slopes.push(match tile {
                            Tile::Slope(direction) => Some(direction),
                            _ => None,
                        });
                    }
                }
            }
        }

        let mut neighbors = vec![Vec::new(); positions.len()];
        for (vertex, &(x, y)) in positions.iter().enumerate() {
            for direction in Direction::ALL {
                if let Some((x, y)) = direction.offset(x, y, width, height) {
                    if let Some(neighbor) = vertex_of[y * width + x] {
                        neighbors[vertex].push((direction, neighbor));
                    }
                }
            }
        }

        let source = boundary_endpoint(maze, 0, &vertex_of)?;
        let target = boundary_endpoint(maze, height - 1, &vertex_of)?;

        Ok(GridGraph {
            neighbors,
            slopes,
            positions,
            source,
            target,
        })
    }

    pub fn source(&self) -> Vertex {
        self.source
    }

    pub fn target(&self) -> Vertex {
        self.target
    }

    /// The forced exit direction of `vertex`, if it sits on a slope.
    pub fn slope(&self, vertex: Vertex) -> Option<Direction> {
        self.slopes[vertex as usize]
    }

    /// All orthogonally adjacent non-wall vertices, labeled with the
    /// direction taken to reach them.
    pub fn neighbors(&self, vertex: Vertex) -> &[(Direction, Vertex)] {
        &self.neighbors[vertex as usize]
    }

    /// The grid cell a vertex was assigned from.
    pub fn position(&self, vertex: Vertex) -> (usize, usize) {
        self.positions[vertex as usize]
    }
}

impl Graph for GridGraph {
    fn number_of_vertices(&self) -> u32 {
        self.neighbors.len() as u32
    }

    fn edges(&self, tail: Vertex) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        Box::new(
            self.neighbors[tail as usize]
                .iter()
                .map(move |&(_, head)| WeightedEdge {
                    tail,
                    head,
                    weight: 1,
                }),
        )
    }

    fn get_weight(&self, edge: &Edge) -> Option<Distance> {
        let neighbors = self.neighbors.get(edge.tail as usize)?;
        neighbors
            .iter()
            .any(|&(_, head)| head == edge.head)
            .then_some(1)
    }
}

fn boundary_endpoint(
    maze: &Maze,
    row: usize,
    vertex_of: &[Option<Vertex>],
) -> Result<Vertex, EndpointError> {
    let mut endpoint = None;
    for x in 0..maze.width() {
        if maze.tile(x, row) == Tile::Open {
            if endpoint.is_some() {
                return Err(EndpointError::Ambiguous { row });
            }
            endpoint = vertex_of[row * maze.width() + x];
        }
    }

    endpoint.ok_or(EndpointError::Missing { row })
}
