use std::sync::atomic::{AtomicU32, Ordering};

use itertools::Itertools;
use rayon::prelude::*;

use super::{Frontier, Path, PathError, SearchQueueElement};
use crate::graphs::{Distance, Graph, Vertex};

/// Maximum-weight simple path from `source` to `target`.
///
/// Exhaustive search: expanding the heaviest frontier entry first surfaces
/// good candidates early, but weight-so-far bounds nothing about what a
/// lighter branch may still collect, so the search only ends once the
/// frontier is empty.
pub fn longest_path(graph: &dyn Graph, source: Vertex, target: Vertex) -> Result<Path, PathError> {
    longest_path_with(graph, source, target, |_| {})
}

/// Like [`longest_path`], invoking `on_improved` every time the running best
/// answer improves. On long runs a near-optimal answer tends to appear well
/// before exhaustion, so callers can report progress instead of staying
/// silent for minutes.
pub fn longest_path_with(
    graph: &dyn Graph,
    source: Vertex,
    target: Vertex,
    mut on_improved: impl FnMut(&Path),
) -> Result<Path, PathError> {
    let mut frontier = Frontier::new();
    frontier.push(SearchQueueElement::start(source, graph.number_of_vertices()));

    let mut best: Option<Path> = None;
    while let Some(element) = frontier.pop() {
        expand(graph, target, element, &mut frontier, |path| {
            if best.as_ref().map_or(true, |best| path.weight > best.weight) {
                on_improved(&path);
                best = Some(path);
            }
        });
    }

    best.ok_or(PathError::NoPathFound { source, target })
}

/// Parallel variant of [`longest_path`]: the branches leaving `source` are
/// explored on separate worker threads, each with its own frontier and local
/// best. Workers reconcile through a shared best-so-far weight, so
/// `on_improved` fires only for global improvements. The result is identical
/// to the serial search.
pub fn longest_path_par(
    graph: &dyn Graph,
    source: Vertex,
    target: Vertex,
    on_improved: impl Fn(Distance) + Send + Sync,
) -> Result<Path, PathError> {
    if source == target {
        return Ok(Path {
            vertices: vec![source],
            weight: 0,
        });
    }

    let mut start = SearchQueueElement::start(source, graph.number_of_vertices());
    start.visited.insert(source as usize);
    start.vertices.push(source);

    let seeds = graph
        .edges(source)
        .map(|edge| {
            let mut seed = start.clone();
            seed.weight += edge.weight;
            seed.vertex = edge.head;
            seed
        })
        .collect_vec();

    let best_weight = AtomicU32::new(0);
    let best = seeds
        .into_par_iter()
        .filter_map(|seed| explore_branch(graph, target, seed, &best_weight, &on_improved))
        .max_by_key(|path| path.weight);

    best.ok_or(PathError::NoPathFound { source, target })
}

fn explore_branch(
    graph: &dyn Graph,
    target: Vertex,
    seed: SearchQueueElement,
    best_weight: &AtomicU32,
    on_improved: &(impl Fn(Distance) + Send + Sync),
) -> Option<Path> {
    let mut frontier = Frontier::new();
    frontier.push(seed);

    let mut best: Option<Path> = None;
    while let Some(element) = frontier.pop() {
        expand(graph, target, element, &mut frontier, |path| {
            let previous = best_weight.fetch_max(path.weight, Ordering::Relaxed);
            if path.weight > previous {
                on_improved(path.weight);
            }
            if best.as_ref().map_or(true, |best| path.weight > best.weight) {
                best = Some(path);
            }
        });
    }

    best
}

/// Expands one frontier entry: a completed branch is handed to `on_complete`,
/// anything else forks one child per unvisited neighbor.
fn expand(
    graph: &dyn Graph,
    target: Vertex,
    mut element: SearchQueueElement,
    frontier: &mut Frontier,
    mut on_complete: impl FnMut(Path),
) {
    element.visited.insert(element.vertex as usize);
    element.vertices.push(element.vertex);

    if element.vertex == target {
        on_complete(Path {
            vertices: element.vertices,
            weight: element.weight,
        });
        return;
    }

    for edge in graph.edges(element.vertex) {
        if !element.visited.contains(edge.head as usize) {
            let mut child = element.clone();
            child.weight += edge.weight;
            child.vertex = edge.head;
            frontier.push(child);
        }
    }
}
