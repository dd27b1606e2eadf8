pub mod algorithms;
pub mod dims;
pub mod graph;
pub mod label;
pub mod maze;

pub use algorithms::{BfsSolver, DfsGenerator, Random, WallPolicy};
pub use dims::Dims;
pub use graph::{Graph, GridGraph, MazeError};
pub use label::{Labels, Progression, VertexLabelling};
pub use maze::{GridMazeBuilder, Maze, MazeBuilder};
