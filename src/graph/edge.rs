/// A directed weighted edge `from -> to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<V, W> {
    from: V,
    to: V,
    weight: W,
}

impl<V, W: Copy> Edge<V, W> {
    /// Creates a new edge
    pub fn new(from: V, to: V, weight: W) -> Self {
        Edge { from, to, weight }
    }

    /// Returns the tail vertex
    pub fn from(&self) -> &V {
        &self.from
    }

    /// Returns the head vertex
    pub fn to(&self) -> &V {
        &self.to
    }

    /// Returns the edge weight
    pub fn weight(&self) -> W {
        self.weight
    }
}
