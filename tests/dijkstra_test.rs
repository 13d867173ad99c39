use indexed_paths::{
    graphs::{
        random_graph::random_complete_graph, vec_vec_graph::VecVecGraph, Graph, WeightedEdge,
        INFINITY,
    },
    search::dijkstra::{dijkstra_eager, dijkstra_lazy},
};
use rand::{rngs::StdRng, SeedableRng};

fn get_small_graph() -> VecVecGraph {
    VecVecGraph::from_edges(&[
        WeightedEdge::new(0, 1, 0.5),
        WeightedEdge::new(1, 2, 0.5),
        WeightedEdge::new(0, 2, 2.0),
    ])
}

/// Quadratic Dijkstra that picks the closest unvisited vertex by a linear
/// scan and counts every strict improvement.
fn count_improvements(graph: &dyn Graph, source: u32) -> (Vec<f64>, u64) {
    let number_of_vertices = graph.number_of_vertices() as usize;
    let mut distances = vec![INFINITY; number_of_vertices];
    let mut visited = vec![false; number_of_vertices];
    let mut improvements = 0;
    distances[source as usize] = 0.0;

    loop {
        let closest = (0..number_of_vertices)
            .filter(|&vertex| !visited[vertex] && distances[vertex] < INFINITY)
            .min_by(|&first, &second| distances[first].total_cmp(&distances[second]));
        let Some(tail) = closest else {
            break;
        };

        visited[tail] = true;
        for edge in graph.edges(tail as u32) {
            let alternative = distances[tail] + edge.weight;
            if alternative < distances[edge.head as usize] {
                distances[edge.head as usize] = alternative;
                improvements += 1;
            }
        }
    }

    (distances, improvements)
}

#[test]
fn shortest_path_beats_direct_edge() {
    let graph = get_small_graph();

    let eager = dijkstra_eager(&graph, 0);
    assert_eq!(eager.distances, vec![0.0, 0.5, 1.0]);

    let lazy = dijkstra_lazy(&graph, 0);
    assert_eq!(lazy.distances, vec![0.0, 0.5, 1.0]);

    // 0 -> 1, 0 -> 2 and then 1 -> 2 improve.
    assert_eq!(eager.decrease_key_count, 3);
    assert_eq!(lazy.decrease_key_count, 3);
}

#[test]
fn single_vertex() {
    let graph = random_complete_graph(1, &mut StdRng::seed_from_u64(0));

    for result in [dijkstra_eager(&graph, 0), dijkstra_lazy(&graph, 0)] {
        assert_eq!(result.distances, vec![0.0]);
        assert_eq!(result.decrease_key_count, 0);
    }
}

#[test]
fn eager_and_lazy_agree_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(2024);

    for number_of_vertices in [2, 3, 5, 17, 64] {
        for _ in 0..10 {
            let graph = random_complete_graph(number_of_vertices, &mut rng);
            for source in [0, number_of_vertices - 1] {
                let eager = dijkstra_eager(&graph, source);
                let lazy = dijkstra_lazy(&graph, source);

                assert_eq!(eager.distances, lazy.distances);
                assert_eq!(eager.distances[source as usize], 0.0);
                assert!(eager.distances.iter().all(|distance| *distance < INFINITY));
            }
        }
    }
}

#[test]
fn eager_count_matches_strict_improvements() {
    let mut rng = StdRng::seed_from_u64(7);

    for number_of_vertices in [1, 4, 10, 40] {
        let graph = random_complete_graph(number_of_vertices, &mut rng);

        let eager = dijkstra_eager(&graph, 0);
        let (distances, improvements) = count_improvements(&graph, 0);

        assert_eq!(eager.distances, distances);
        assert_eq!(eager.decrease_key_count, improvements);
        assert!(eager.decrease_key_count >= number_of_vertices as u64 - 1);
    }
}

#[test]
fn distances_respect_every_edge() {
    let graph = random_complete_graph(30, &mut StdRng::seed_from_u64(11));
    let result = dijkstra_eager(&graph, 0);

    for tail in 0..graph.number_of_vertices() {
        for edge in graph.edges(tail) {
            assert!(
                result.distances[edge.head as usize]
                    <= result.distances[tail as usize] + edge.weight
            );
        }
    }
}
