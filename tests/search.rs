use longest_paths::{
    graphs::{
        add_edge_bidirectional, contracted_graph::ContractedGraph, grid_graph::GridGraph, Vertex,
        WeightedEdge,
    },
    grid::Maze,
    search::{
        directed::longest_directed_path,
        longest_path::{longest_path, longest_path_par, longest_path_with},
        PathError,
    },
    solve_maze, MazeSolution,
};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

const EXAMPLE: &str = "
#.#####################
#.......#########...###
#######.#########.#.###
###.....#.>.>.###.#.###
###v#####.#v#.###.#.###
###.>...#.#.#.....#...#
###v###.#.#.#########.#
###...#.#.#.......#...#
#####.#.#.#######.#.###
#.....#.#.#.......#...#
#.#####.#.#.#########v#
#.#...#...#...###...>.#
#.#.#v#######v###.###v#
#...#.>.#...>.>.#.###.#
#####v#.#.###v#.#.###.#
#.....#...#...#.#.#...#
#.#########.###.#.#.###
#...###...#...#...#.###
###.###.#.###v#####v###
#...#...#.#.>.>.#.>.###
#.###.###.#.###.#.#v###
#.....###...###...#...#
#####################.#
";

fn grid_graph(input: &str) -> GridGraph {
    let maze: Maze = input.parse().unwrap();
    GridGraph::from_maze(&maze).unwrap()
}

#[test]
fn solves_the_worked_example() {
    assert_eq!(
        solve_maze(EXAMPLE).unwrap(),
        MazeSolution {
            directed: 94,
            undirected: 154,
        }
    );
}

// Contraction must not change what the search can reach or how far it can
// walk: searching the raw grid graph directly yields the same answer as
// searching its contraction.
#[test]
fn contraction_preserves_the_longest_path() {
    let graph = grid_graph(EXAMPLE);
    let contracted = ContractedGraph::contract(&graph, graph.source(), graph.target());

    let raw = longest_path(&graph, graph.source(), graph.target()).unwrap();
    let reduced = longest_path(&contracted, graph.source(), graph.target()).unwrap();

    assert_eq!(raw.weight, 154);
    assert_eq!(reduced.weight, 154);
    assert_eq!(raw.vertices.first(), reduced.vertices.first());
    assert_eq!(raw.vertices.last(), reduced.vertices.last());
}

#[test]
fn parallel_search_agrees_with_serial() {
    let graph = grid_graph(EXAMPLE);
    let contracted = ContractedGraph::contract(&graph, graph.source(), graph.target());

    let serial = longest_path(&contracted, graph.source(), graph.target()).unwrap();
    let parallel = longest_path_par(&contracted, graph.source(), graph.target(), |_| {}).unwrap();

    assert_eq!(serial.weight, parallel.weight);
}

#[test]
fn straight_corridor_has_length_height_minus_one() {
    assert_eq!(
        solve_maze("#.#\n#.#\n#.#").unwrap(),
        MazeSolution {
            directed: 2,
            undirected: 2,
        }
    );
}

// A slope in the long corridor makes it one-way towards the entrance, so the
// slope-respecting walk has to settle for the short corridor while the
// undirected walk still takes the long one.
#[test]
fn slope_forces_the_detour() {
    let blocked = "\
#.#####\n\
#..<..#\n\
#.###.#\n\
#.###.#\n\
#.###.#\n\
#.....#\n\
###.###";

    assert_eq!(
        solve_maze(blocked).unwrap(),
        MazeSolution {
            directed: 8,
            undirected: 12,
        }
    );

    let open = blocked.replace('<', ".");
    assert_eq!(
        solve_maze(&open).unwrap(),
        MazeSolution {
            directed: 12,
            undirected: 12,
        }
    );
}

#[test]
fn single_path_graph_returns_its_exact_weight() {
    let mut graph = ContractedGraph::default();
    add_edge_bidirectional(&mut graph, &WeightedEdge::new(0, 1, 7).unwrap());
    add_edge_bidirectional(&mut graph, &WeightedEdge::new(1, 2, 5).unwrap());

    let path = longest_path(&graph, 0, 2).unwrap();

    assert_eq!(path.weight, 12);
    assert_eq!(path.vertices, [0, 1, 2]);
}

#[test]
fn disconnected_maze_reports_no_path() {
    let graph = grid_graph("#.#\n###\n#.#");
    let contracted = ContractedGraph::contract(&graph, graph.source(), graph.target());

    let expected = PathError::NoPathFound {
        source: graph.source(),
        target: graph.target(),
    };
    assert_eq!(longest_directed_path(&graph).unwrap_err(), expected);
    assert_eq!(
        longest_path(&contracted, graph.source(), graph.target()).unwrap_err(),
        expected
    );
}

#[test]
fn improvement_reports_climb_to_the_final_answer() {
    let graph = grid_graph(EXAMPLE);
    let contracted = ContractedGraph::contract(&graph, graph.source(), graph.target());

    let mut reported = Vec::new();
    let best = longest_path_with(&contracted, graph.source(), graph.target(), |path| {
        reported.push(path.weight)
    })
    .unwrap();

    assert!(reported.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(reported.last(), Some(&best.weight));
}

// https://jlazarsfeld.github.io/ch.150.project/img/contraction/contract-full-1.png
fn relabeled_graph(permutation: &[Vertex]) -> ContractedGraph {
    let edges: [(usize, usize, u32); 20] = [
        (0, 1, 3),
        (0, 2, 5),
        (0, 10, 3),
        (1, 2, 3),
        (1, 3, 5),
        (2, 3, 2),
        (2, 9, 2),
        (3, 4, 7),
        (3, 9, 4),
        (4, 5, 6),
        (4, 9, 3),
        (5, 6, 4),
        (5, 7, 2),
        (6, 7, 3),
        (6, 8, 5),
        (7, 8, 3),
        (7, 9, 2),
        (8, 9, 4),
        (8, 10, 6),
        (9, 10, 3),
    ];

    let mut graph = ContractedGraph::default();
    for (tail, head, weight) in edges {
        let edge = WeightedEdge::new(permutation[tail], permutation[head], weight).unwrap();
        add_edge_bidirectional(&mut graph, &edge);
    }
    graph
}

// Relabeling the vertices permutes every adjacency row, so the frontier
// expands neighbors in a different order. The maximum must not care.
#[test]
fn best_weight_is_invariant_under_relabeling() {
    let identity: Vec<Vertex> = (0..11).collect();
    let reference = longest_path(&relabeled_graph(&identity), 0, 8)
        .unwrap()
        .weight;

    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..5 {
        let mut permutation = identity.clone();
        permutation.shuffle(&mut rng);

        let graph = relabeled_graph(&permutation);
        let weight = longest_path(&graph, permutation[0], permutation[8])
            .unwrap()
            .weight;

        assert_eq!(weight, reference);
    }
}
