use smallvec::SmallVec;
use thiserror::Error;

use crate::dims::Dims;

/// Grid cells have at most four neighbors, so the list fits inline.
pub type Neighbors = SmallVec<[usize; 4]>;

/// Read-only view of an undirected graph with dense `usize` vertex ids.
///
/// `neighbors` must report the same sequence for the same vertex across
/// calls; traversals rely on that order being stable.
pub trait Graph {
    fn vertex_count(&self) -> usize;

    fn neighbors(&self, vertex: usize) -> Neighbors;
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    #[error("invalid maze size: {0:?}")]
    InvalidSize(Dims),
}

/// Four-connected rectangular grid. Vertex ids are assigned row-major,
/// so cell `(x, y)` is vertex `y * width + x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGraph {
    width: usize,
    height: usize,
}

impl GridGraph {
    const NEIGHBOR_OFFSETS: [Dims; 4] = [Dims(-1, 0), Dims(1, 0), Dims(0, -1), Dims(0, 1)];

    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidSize(Dims(width as i32, height as i32)));
        }

        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        0 <= pos.0 && pos.0 < self.width as i32 && 0 <= pos.1 && pos.1 < self.height as i32
    }

    pub fn vertex_at(&self, pos: Dims) -> Option<usize> {
        if !self.is_in_bounds(pos) {
            return None;
        }

        Some(pos.1 as usize * self.width + pos.0 as usize)
    }

    pub fn pos_of(&self, vertex: usize) -> Dims {
        assert!(
            vertex < self.vertex_count(),
            "vertex {vertex} out of range (vertex count {})",
            self.vertex_count()
        );

        Dims((vertex % self.width) as i32, (vertex / self.width) as i32)
    }
}

impl Graph for GridGraph {
    fn vertex_count(&self) -> usize {
        self.width * self.height
    }

    fn neighbors(&self, vertex: usize) -> Neighbors {
        let pos = self.pos_of(vertex);

        Self::NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(|off| self.vertex_at(pos + off))
            .collect()
    }
}
