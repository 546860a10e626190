use super::PathError;
use crate::graphs::{grid_graph::GridGraph, Distance, Graph, Vertex};

/// Length in steps of the longest simple path from the maze entrance to its
/// exit when every slope must be left along its forced direction.
///
/// This runs on the uncontracted graph: a one-way restriction in the middle
/// of a corridor cannot be folded into a single undirected weight, so chains
/// must stay expanded here.
pub fn longest_directed_path(graph: &GridGraph) -> Result<Distance, PathError> {
    let mut visited = vec![false; graph.number_of_vertices() as usize];
    let mut best = None;

    explore(graph, graph.source(), 0, &mut visited, &mut best);

    best.ok_or(PathError::NoPathFound {
        source: graph.source(),
        target: graph.target(),
    })
}

fn explore(
    graph: &GridGraph,
    vertex: Vertex,
    steps: Distance,
    visited: &mut [bool],
    best: &mut Option<Distance>,
) {
    if vertex == graph.target() {
        *best = (*best).max(Some(steps));
        return;
    }

    visited[vertex as usize] = true;
    let forced = graph.slope(vertex);
    for &(direction, neighbor) in graph.neighbors(vertex) {
        if forced.is_some_and(|exit| exit != direction) {
            continue;
        }
        if !visited[neighbor as usize] {
            explore(graph, neighbor, steps + 1, visited, best);
        }
    }
    visited[vertex as usize] = false;
}
