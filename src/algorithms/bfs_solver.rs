use std::collections::VecDeque;

use log::debug;

use crate::graph::Graph;
use crate::label::VertexLabelling;

/// Shortest path between two vertices by breadth-first traversal.
///
/// Distance is the unweighted edge count. Every dequeued vertex gets its
/// 0-based dequeue rank written to the labelling sink, which is what a
/// visualization replays as the visitation order.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsSolver;

impl BfsSolver {
    /// Returns the vertices of a shortest path from `source` to
    /// `destination`, both inclusive, or an empty vector when
    /// `destination` is unreachable.
    ///
    /// Both ids must be valid for `graph`. The traversal stops as soon
    /// as `destination` is dequeued; which shortest path is found when
    /// several exist follows the topology's neighbor order.
    pub fn solve<G, L>(
        &self,
        graph: &G,
        source: usize,
        destination: usize,
        labels: &mut L,
    ) -> Vec<usize>
    where
        G: Graph,
        L: VertexLabelling<usize>,
    {
        let vertices = graph.vertex_count();
        assert!(
            source < vertices,
            "source vertex {source} out of range (vertex count {vertices})"
        );
        assert!(
            destination < vertices,
            "destination vertex {destination} out of range (vertex count {vertices})"
        );

        let mut visited = vec![false; vertices];
        let mut parents: Vec<Option<usize>> = vec![None; vertices];
        let mut frontier = VecDeque::new();
        let mut rank = 0;

        visited[source] = true;
        frontier.push_back(source);

        while let Some(current) = frontier.pop_front() {
            labels.set_label(current, rank);
            rank += 1;

            if current == destination {
                break;
            }

            for neighbor in graph.neighbors(current) {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    parents[neighbor] = Some(current);
                    frontier.push_back(neighbor);
                }
            }
        }

        if !visited[destination] {
            debug!("no path from {source} to {destination}, dequeued {rank} vertices");
            return Vec::new();
        }

        let mut path = Vec::new();
        let mut at = Some(destination);
        while let Some(vertex) = at {
            path.push(vertex);
            at = parents[vertex];
        }
        path.reverse();

        debug!(
            "found path from {source} to {destination} with {} edges",
            path.len() - 1
        );

        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GridGraph, Neighbors};
    use crate::label::Labels;
    use crate::maze::Maze;

    /// Adjacency-list fixture for non-grid topologies.
    struct ListGraph(Vec<Vec<usize>>);

    impl Graph for ListGraph {
        fn vertex_count(&self) -> usize {
            self.0.len()
        }

        fn neighbors(&self, vertex: usize) -> Neighbors {
            self.0[vertex].iter().copied().collect()
        }
    }

    #[test]
    fn source_equals_destination() {
        let graph = ListGraph(vec![vec![1], vec![0]]);
        let mut labels = Labels::new(2);

        assert_eq!(BfsSolver.solve(&graph, 0, 0, &mut labels), vec![0]);
        assert_eq!(labels.get(0), Some(&0));
        assert!(!labels.is_set(1));
    }

    #[test]
    fn unreachable_destination_is_an_empty_path() {
        // two isolated components, {0, 1} and {2, 3}
        let graph = ListGraph(vec![vec![1], vec![0], vec![3], vec![2]]);
        let mut labels = Labels::new(4);

        assert!(BfsSolver.solve(&graph, 0, 3, &mut labels).is_empty());

        // only the source component gets labelled
        assert!(labels.is_set(0));
        assert!(labels.is_set(1));
        assert!(!labels.is_set(2));
        assert!(!labels.is_set(3));
    }

    #[test]
    fn labels_are_dequeue_ranks() {
        let graph = ListGraph(vec![vec![1, 2], vec![0, 3], vec![0, 3], vec![1, 2]]);
        let mut labels = Labels::new(4);

        BfsSolver.solve(&graph, 0, 3, &mut labels);

        let mut ranks: Vec<usize> = (0..4).filter_map(|v| labels.get(v)).copied().collect();
        ranks.sort_unstable();
        // gapless, no repeats, starting at zero
        assert_eq!(ranks, (0..ranks.len()).collect::<Vec<_>>());
        assert_eq!(labels.get(0), Some(&0));
        assert_eq!(labels.get(3), Some(&3));
    }

    #[test]
    fn shortest_path_on_open_grid() {
        let grid = GridGraph::new(4, 3).unwrap();
        let maze = Maze::fully_open(grid);

        let path = BfsSolver.solve(&maze, 0, 11, &mut ());

        // manhattan distance across the grid
        assert_eq!(path.len(), 6);
        assert_eq!(path[0], 0);
        assert_eq!(path[5], 11);
        for pair in path.windows(2) {
            assert!(maze.is_open(pair[0], pair[1]));
        }
    }

    #[test]
    fn path_length_matches_independent_bfs() {
        let graph = ListGraph(vec![
            vec![1, 3],
            vec![0, 2],
            vec![1, 5],
            vec![0, 4],
            vec![3, 5],
            vec![2, 4],
        ]);

        // plain distance computation without early exit or labelling
        let mut dist = vec![usize::MAX; 6];
        dist[0] = 0;
        let mut queue = VecDeque::from([0usize]);
        while let Some(v) = queue.pop_front() {
            for n in graph.neighbors(v) {
                if dist[n] == usize::MAX {
                    dist[n] = dist[v] + 1;
                    queue.push_back(n);
                }
            }
        }

        for target in 0..6 {
            let path = BfsSolver.solve(&graph, 0, target, &mut ());
            assert_eq!(path.len() - 1, dist[target]);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn rejects_out_of_range_destination() {
        let graph = ListGraph(vec![vec![]]);
        BfsSolver.solve(&graph, 0, 1, &mut ());
    }
}
