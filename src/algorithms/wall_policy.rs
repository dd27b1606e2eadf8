use crate::graph::Graph;
use crate::maze::MazeBuilder;

/// How wall state gets reconciled with the spanning tree the generator
/// discovers. Exactly two variants exist, chosen once per generator from
/// its `require_walls` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallPolicy {
    /// Maze starts fully walled; each tree edge has its wall knocked out
    /// the moment the child is discovered. Nothing left to do at the end.
    OpenAsYouGo,
    /// Maze starts with no walls; traversal only records the tree, and
    /// finalization walls off every edge that is not part of it.
    CloseTheRest,
}

impl WallPolicy {
    pub fn for_require_walls(require_walls: bool) -> WallPolicy {
        if require_walls {
            WallPolicy::OpenAsYouGo
        } else {
            WallPolicy::CloseTheRest
        }
    }

    /// Called once per discovered tree edge, parent first.
    pub fn on_tree_edge<B: MazeBuilder>(self, builder: &mut B, parent: usize, child: usize) {
        match self {
            WallPolicy::OpenAsYouGo => builder.remove_wall(parent, child),
            WallPolicy::CloseTheRest => {}
        }
    }

    /// Called once after the frontier empties, with the completed parent
    /// array. Each edge is considered once, from its lower endpoint.
    pub fn finalize<B: MazeBuilder>(self, builder: &mut B, parents: &[Option<usize>]) {
        match self {
            WallPolicy::OpenAsYouGo => {}
            WallPolicy::CloseTheRest => {
                for v in 0..builder.topology().vertex_count() {
                    let neighbors = builder.topology().neighbors(v);

                    for n in neighbors {
                        let tree_edge = parents[v] == Some(n) || parents[n] == Some(v);
                        if v < n && !tree_edge {
                            builder.add_wall(v, n);
                        }
                    }
                }
            }
        }
    }
}
