use std::{cmp::Ordering, collections::BinaryHeap, fmt};

use fixedbitset::FixedBitSet;
use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Vertex};

pub mod directed;
pub mod longest_path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    NoPathFound { source: Vertex, target: Vertex },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::NoPathFound { source, target } => {
                write!(f, "no path from {source} to {target}")
            }
        }
    }
}

impl std::error::Error for PathError {}

/// A simple path through a graph and its total weight in raw steps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<Vertex>,
    pub weight: Distance,
}

/// One frontier entry of the best-first search: the accumulated weight, the
/// vertex to expand next, and this branch's private view of the path walked
/// so far. Forking a branch clones `visited` and `vertices`, so siblings can
/// never corrupt each other.
#[derive(Clone)]
pub struct SearchQueueElement {
    pub weight: Distance,
    pub vertex: Vertex,
    pub visited: FixedBitSet,
    pub vertices: Vec<Vertex>,
}

impl SearchQueueElement {
    pub fn start(vertex: Vertex, number_of_vertices: u32) -> SearchQueueElement {
        SearchQueueElement {
            weight: 0,
            vertex,
            visited: FixedBitSet::with_capacity(number_of_vertices as usize),
            vertices: Vec::new(),
        }
    }
}

// The priority queue depends on `Ord`. std's BinaryHeap is a max-heap, which
// is exactly what a longest-path frontier wants: the entry with the highest
// accumulated weight is expanded first, so no ordering flip is needed.
// In case of a tie we compare vertices - this step is necessary to make the
// implementations of `PartialEq` and `Ord` consistent.
impl Ord for SearchQueueElement {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for SearchQueueElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchQueueElement {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchQueueElement {}

/// Max-heap frontier of search branches.
pub struct Frontier {
    heap: BinaryHeap<SearchQueueElement>,
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, element: SearchQueueElement) {
        self.heap.push(element)
    }

    pub fn pop(&mut self) -> Option<SearchQueueElement> {
        self.heap.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
