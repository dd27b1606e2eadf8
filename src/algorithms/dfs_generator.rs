use log::{debug, trace};
use rand::seq::SliceRandom as _;

use super::{Random, WallPolicy};
use crate::graph::Graph;
use crate::label::Progression;
use crate::maze::MazeBuilder;

/// Carves a perfect maze by incremental randomized depth-first traversal.
///
/// The traversal discovers a spanning tree of the component containing
/// the start vertex; the [`WallPolicy`] decides whether tree edges are
/// opened on the spot or non-tree edges are walled off afterwards. Either
/// way the open edges end up being exactly the tree edges, so any two
/// reachable cells are connected by a unique simple path.
#[derive(Debug, Clone, Copy)]
pub struct DfsGenerator {
    require_walls: bool,
}

impl DfsGenerator {
    pub fn new(require_walls: bool) -> DfsGenerator {
        DfsGenerator { require_walls }
    }

    /// True if the builder must start fully walled, false if it must
    /// start with no walls at all.
    pub fn require_walls(&self) -> bool {
        self.require_walls
    }

    /// Carves the maze reachable from `from`.
    ///
    /// `from` must be a valid vertex id of the builder's topology. The
    /// traversal visits one unvisited neighbor per stack-top inspection
    /// and keeps the current vertex on the stack until its whole
    /// neighborhood is exhausted.
    pub fn generate<B: MazeBuilder>(&self, builder: &mut B, from: usize, rng: &mut Random) {
        let vertices = builder.topology().vertex_count();
        assert!(
            from < vertices,
            "start vertex {from} out of range (vertex count {vertices})"
        );

        let policy = WallPolicy::for_require_walls(self.require_walls);

        let mut visited = vec![false; vertices];
        let mut parents: Vec<Option<usize>> = vec![None; vertices];
        let mut stack = Vec::with_capacity(vertices);

        visited[from] = true;
        stack.push(from);
        builder.set_progression(from, Progression::Processing);

        while let Some(&current) = stack.last() {
            let mut neighbors = builder.topology().neighbors(current);
            // Reshuffled on every visit to the stack top, not once at push
            // time, so each return after backtracking draws a fresh order.
            neighbors.shuffle(rng);

            match neighbors.into_iter().find(|&n| !visited[n]) {
                Some(next) => {
                    visited[next] = true;
                    parents[next] = Some(current);
                    builder.set_progression(next, Progression::Processing);
                    stack.push(next);
                    policy.on_tree_edge(builder, current, next);
                }
                None => {
                    trace!("backtracking from {current}");
                    builder.set_progression(current, Progression::Processed);
                    stack.pop();
                }
            }
        }

        policy.finalize(builder, &parents);

        debug!(
            "carved maze with {:?}: {} of {vertices} vertices reachable from {from}",
            policy,
            visited.iter().filter(|&&v| v).count(),
        );
    }
}
