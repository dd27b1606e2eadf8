use crate::dims::Dims;
use crate::graph::{Graph, GridGraph, Neighbors};
use crate::label::{Labels, Progression, VertexLabelling};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    pub fn offset(self) -> Dims {
        match self {
            Self::Left => Dims(-1, 0),
            Self::Right => Dims(1, 0),
            Self::Top => Dims(0, -1),
            Self::Bottom => Dims(0, 1),
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }

    /// Side of `from` facing `to`, if the two cells are grid-adjacent.
    pub fn between(from: Dims, to: Dims) -> Option<Side> {
        match to - from {
            Dims(-1, 0) => Some(Self::Left),
            Dims(1, 0) => Some(Self::Right),
            Dims(0, -1) => Some(Self::Top),
            Dims(0, 1) => Some(Self::Bottom),
            _ => None,
        }
    }
}

/// Passage flags of one cell; `true` means open (no wall on that side).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    left: bool,
    right: bool,
    top: bool,
    bottom: bool,
}

impl Cell {
    pub const fn closed() -> Cell {
        Cell {
            left: false,
            right: false,
            top: false,
            bottom: false,
        }
    }

    pub const fn open() -> Cell {
        Cell {
            left: true,
            right: true,
            top: true,
            bottom: true,
        }
    }

    pub fn is_open(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
            Side::Top => self.top,
            Side::Bottom => self.bottom,
        }
    }

    fn set(&mut self, side: Side, open: bool) {
        match side {
            Side::Left => self.left = open,
            Side::Right => self.right = open,
            Side::Top => self.top = open,
            Side::Bottom => self.bottom = open,
        }
    }
}

/// Wall state over a grid topology.
///
/// Both cells of a shared wall are kept in sync, so `is_open(u, v)` and
/// `is_open(v, u)` always agree. As a [`Graph`], a maze reports only the
/// neighbors reachable through open passages, which is the view the
/// solver runs on after generation.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: GridGraph,
    cells: Vec<Cell>,
}

impl Maze {
    pub fn fully_walled(grid: GridGraph) -> Maze {
        Maze {
            grid,
            cells: vec![Cell::closed(); grid.vertex_count()],
        }
    }

    pub fn fully_open(grid: GridGraph) -> Maze {
        Maze {
            grid,
            cells: vec![Cell::open(); grid.vertex_count()],
        }
    }

    pub fn grid(&self) -> &GridGraph {
        &self.grid
    }

    pub fn cell(&self, vertex: usize) -> &Cell {
        &self.cells[vertex]
    }

    fn set_between(&mut self, u: usize, v: usize, open: bool) {
        let side = Side::between(self.grid.pos_of(u), self.grid.pos_of(v))
            .unwrap_or_else(|| panic!("cells {u} and {v} are not adjacent"));

        self.cells[u].set(side, open);
        self.cells[v].set(side.opposite(), open);
    }

    pub fn open_between(&mut self, u: usize, v: usize) {
        self.set_between(u, v, true);
    }

    pub fn close_between(&mut self, u: usize, v: usize) {
        self.set_between(u, v, false);
    }

    pub fn is_open(&self, u: usize, v: usize) -> bool {
        match Side::between(self.grid.pos_of(u), self.grid.pos_of(v)) {
            Some(side) => self.cells[u].is_open(side),
            None => false,
        }
    }

    /// Number of open passages, each counted once.
    pub fn open_edge_count(&self) -> usize {
        (0..self.grid.vertex_count())
            .map(|v| {
                self.grid
                    .neighbors(v)
                    .into_iter()
                    .filter(|&n| v < n && self.is_open(v, n))
                    .count()
            })
            .sum()
    }
}

impl Graph for Maze {
    fn vertex_count(&self) -> usize {
        self.grid.vertex_count()
    }

    fn neighbors(&self, vertex: usize) -> Neighbors {
        self.grid
            .neighbors(vertex)
            .into_iter()
            .filter(|&n| self.is_open(vertex, n))
            .collect()
    }
}

/// Mutable surface the generator carves through: topology access, the
/// two wall operations, and the per-vertex progression sink.
///
/// Wall operations are symmetric and idempotent; calling them on a
/// non-adjacent pair is a contract violation.
pub trait MazeBuilder {
    type Topology: Graph;

    fn topology(&self) -> &Self::Topology;

    fn add_wall(&mut self, u: usize, v: usize);

    fn remove_wall(&mut self, u: usize, v: usize);

    fn set_progression(&mut self, vertex: usize, state: Progression);
}

/// [`MazeBuilder`] over a [`GridGraph`].
///
/// `require_walls` picks the starting wall state: `true` starts fully
/// walled (the generator opens tree edges as it goes), `false` starts
/// fully open (the generator walls off non-tree edges at the end).
#[derive(Debug, Clone)]
pub struct GridMazeBuilder {
    maze: Maze,
    progressions: Labels<Progression>,
}

impl GridMazeBuilder {
    pub fn new(grid: GridGraph, require_walls: bool) -> GridMazeBuilder {
        let maze = if require_walls {
            Maze::fully_walled(grid)
        } else {
            Maze::fully_open(grid)
        };

        GridMazeBuilder {
            progressions: Labels::new(grid.vertex_count()),
            maze,
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn progressions(&self) -> &Labels<Progression> {
        &self.progressions
    }

    pub fn into_maze(self) -> Maze {
        self.maze
    }
}

impl MazeBuilder for GridMazeBuilder {
    type Topology = GridGraph;

    fn topology(&self) -> &GridGraph {
        self.maze.grid()
    }

    fn add_wall(&mut self, u: usize, v: usize) {
        self.maze.close_between(u, v);
    }

    fn remove_wall(&mut self, u: usize, v: usize) {
        self.maze.open_between(u, v);
    }

    fn set_progression(&mut self, vertex: usize, state: Progression) {
        self.progressions.set_label(vertex, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_are_symmetric() {
        let grid = GridGraph::new(2, 2).unwrap();
        let mut maze = Maze::fully_walled(grid);

        assert!(!maze.is_open(0, 1));
        maze.open_between(0, 1);
        assert!(maze.is_open(0, 1));
        assert!(maze.is_open(1, 0));

        maze.close_between(1, 0);
        assert!(!maze.is_open(0, 1));
    }

    #[test]
    fn non_adjacent_cells_are_never_open() {
        let grid = GridGraph::new(3, 3).unwrap();
        let maze = Maze::fully_open(grid);

        assert!(maze.is_open(0, 1));
        assert!(!maze.is_open(0, 2));
        assert!(!maze.is_open(0, 4)); // diagonal
    }

    #[test]
    fn open_edge_count_matches_grid() {
        let grid = GridGraph::new(3, 2).unwrap();

        assert_eq!(Maze::fully_walled(grid).open_edge_count(), 0);
        // 3x2 grid: 2 horizontal walls per row * 2 rows + 3 vertical
        assert_eq!(Maze::fully_open(grid).open_edge_count(), 7);
    }

    #[test]
    fn graph_view_follows_passages() {
        let grid = GridGraph::new(2, 2).unwrap();
        let mut maze = Maze::fully_walled(grid);

        assert!(maze.neighbors(0).is_empty());

        maze.open_between(0, 2);
        assert_eq!(maze.neighbors(0).as_slice(), &[2]);
        assert_eq!(maze.neighbors(2).as_slice(), &[0]);
        assert_eq!(maze.vertex_count(), 4);
    }

    #[test]
    fn builder_starting_state() {
        let grid = GridGraph::new(3, 3).unwrap();

        let walled = GridMazeBuilder::new(grid, true);
        assert_eq!(walled.maze().open_edge_count(), 0);

        let open = GridMazeBuilder::new(grid, false);
        assert_eq!(open.maze().open_edge_count(), 12);
        assert!((0..9).all(|v| !open.progressions().is_set(v)));
    }
}
