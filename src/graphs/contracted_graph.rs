use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{Distance, Edge, Graph, TaillessEdge, Vertex, WeightedEdge};

/// Junction-only view of a graph: every chain of degree-2 vertices between
/// two junctions is collapsed into a single edge weighted with the chain's
/// total step count.
///
/// Vertex ids are shared with the input graph. Collapsed vertices are not
/// renumbered away; they simply keep an empty adjacency row, so the structure
/// is built fresh and never mutated mid-iteration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ContractedGraph {
    edges: Vec<Vec<TaillessEdge>>,
    junctions: Vec<Vertex>,
}

impl ContractedGraph {
    pub fn new(number_of_vertices: u32) -> ContractedGraph {
        ContractedGraph {
            edges: vec![Vec::new(); number_of_vertices as usize],
            junctions: Vec::new(),
        }
    }

    /// Collapses `graph` to its junctions.
    ///
    /// A vertex is a junction if its degree is not 2, or if it is `source` or
    /// `target`: the endpoints must survive contraction whatever their degree
    /// so they remain addressable as path endpoints.
    ///
    /// Chains looping back onto their own junction are discarded (a simple
    /// path cannot use them), and when two distinct chains connect the same
    /// pair of junctions only the heavier one is kept, since a simple path
    /// can traverse at most one of them.
    pub fn contract(graph: &dyn Graph, source: Vertex, target: Vertex) -> ContractedGraph {
        let number_of_vertices = graph.number_of_vertices();

        let junctions = (0..number_of_vertices)
            .filter(|&vertex| {
                vertex == source || vertex == target || graph.edges(vertex).len() != 2
            })
            .collect_vec();

        let mut is_junction = vec![false; number_of_vertices as usize];
        for &junction in &junctions {
            is_junction[junction as usize] = true;
        }

        let mut contracted = ContractedGraph::new(number_of_vertices);
        for &junction in &junctions {
            for first_edge in graph.edges(junction) {
                if let Some(chain) = walk_chain(graph, &is_junction, junction, first_edge) {
                    if chain.weight > contracted.get_weight(&chain.remove_weight()).unwrap_or(0) {
                        contracted.set_weight(&chain);
                    }
                }
            }
        }
        contracted.junctions = junctions;

        contracted
    }

    pub fn junctions(&self) -> &[Vertex] {
        &self.junctions
    }

    /// Connects or updates a single directed edge.
    pub fn set_weight(&mut self, edge: &WeightedEdge) {
        // Ensure both endpoints are within the bounds of self.edges.
        let max_edge_endpoint = std::cmp::max(edge.tail, edge.head) as usize;
        if max_edge_endpoint >= self.edges.len() {
            self.edges.resize(max_edge_endpoint + 1, Vec::new());
        }

        let edges_sharing_tail = &mut self.edges[edge.tail as usize];
        match edges_sharing_tail.binary_search_by_key(&edge.head, |other| other.head) {
            Ok(index) => edges_sharing_tail[index].weight = edge.weight,
            Err(index) => edges_sharing_tail.insert(
                index,
                TaillessEdge {
                    head: edge.head,
                    weight: edge.weight,
                },
            ),
        }
    }
}

impl Graph for ContractedGraph {
    fn number_of_vertices(&self) -> u32 {
        self.edges.len() as u32
    }

    fn edges(&self, tail: Vertex) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        Box::new(
            self.edges[tail as usize]
                .iter()
                .map(move |edge| edge.set_tail(tail)),
        )
    }

    fn get_weight(&self, edge: &Edge) -> Option<Distance> {
        let edges_sharing_tail = self.edges.get(edge.tail as usize)?;

        let edge_index = edges_sharing_tail
            .binary_search_by_key(&edge.head, |other| other.head)
            .ok()?;

        Some(edges_sharing_tail[edge_index].weight)
    }
}

/// Follows the chain entered through `first_edge` until the next junction,
/// summing weights. Returns `None` when the chain loops back onto the
/// junction it started from.
fn walk_chain(
    graph: &dyn Graph,
    is_junction: &[bool],
    junction: Vertex,
    first_edge: WeightedEdge,
) -> Option<WeightedEdge> {
    let mut previous = junction;
    let mut current = first_edge.head;
    let mut weight = first_edge.weight;

    while !is_junction[current as usize] {
        let mut edges = graph.edges(current);
        let degree = edges.len();
        assert!(
            degree == 2,
            "vertex {} inside a chain has degree {}",
            current,
            degree
        );

        let next = edges
            .find(|edge| edge.head != previous)
            .unwrap_or_else(|| panic!("chain vertex {} only connects back to {}", current, previous));

        previous = current;
        current = next.head;
        weight += next.weight;
    }

    WeightedEdge::new(junction, current, weight)
}
