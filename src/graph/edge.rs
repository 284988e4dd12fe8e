use crate::{NodeId, Vec2};

/// A weighted, directed connection between two Nodes.
///
/// Undirected connectivity is represented as two Edges, one per direction,
/// each caching its own derived data. The weight is never set directly: it
/// is always the Euclidean distance between the endpoints' current
/// positions, recomputed by [`invalidate`](Edge::invalidate) whenever an
/// endpoint moves.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    origin: NodeId,
    target: NodeId,
    weight: f32,
    midpoint: Vec2,
}

impl Edge {
    pub(crate) fn new(origin: NodeId, origin_pos: Vec2, target: NodeId, target_pos: Vec2) -> Edge {
        let mut edge = Edge {
            origin,
            target,
            weight: 0.0,
            midpoint: Vec2::ZERO,
        };
        edge.invalidate(origin_pos, target_pos);
        edge
    }

    /// the Node this Edge starts from
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    /// the Node this Edge leads to
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// the cached traversal cost: the distance between the endpoints
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// the cached point halfway along the Edge, where a label would sit
    pub fn midpoint(&self) -> Vec2 {
        self.midpoint
    }

    /// Recomputes the cached weight and midpoint from the endpoints'
    /// current positions.
    pub(crate) fn invalidate(&mut self, origin_pos: Vec2, target_pos: Vec2) {
        self.weight = origin_pos.distance(target_pos);
        self.midpoint = origin_pos.midpoint(target_pos);
    }
}
