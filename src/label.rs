/// Sink for per-vertex algorithmic state, consumed by visualizations.
///
/// Writes are side-effecting only; traversals never read a label back.
pub trait VertexLabelling<T> {
    fn set_label(&mut self, vertex: usize, label: T);
}

/// Discards every label. Handy when the caller only wants the result.
impl<T> VertexLabelling<T> for () {
    fn set_label(&mut self, _vertex: usize, _label: T) {}
}

/// Where a vertex stands in the generator's traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Progression {
    #[default]
    NotStarted,
    /// On the stack, subtree not yet exhausted.
    Processing,
    /// Popped for good after backtracking.
    Processed,
}

/// Vector-backed label store; `None` means the vertex was never labelled.
#[derive(Debug, Clone)]
pub struct Labels<T> {
    labels: Vec<Option<T>>,
}

impl<T> Labels<T> {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            labels: (0..vertex_count).map(|_| None).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, vertex: usize) -> Option<&T> {
        self.labels.get(vertex).and_then(|l| l.as_ref())
    }

    pub fn is_set(&self, vertex: usize) -> bool {
        self.get(vertex).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&T>> {
        self.labels.iter().map(|l| l.as_ref())
    }
}

impl<T> VertexLabelling<T> for Labels<T> {
    fn set_label(&mut self, vertex: usize, label: T) {
        self.labels[vertex] = Some(label);
    }
}
