use super::Edge;
use crate::{NodeId, NodeIdMap, Vec2};

/// A named point in the [`Graph`](crate::Graph), owning its outgoing Edges.
///
/// The key is the Node's identity and never changes; the position may. No
/// pathfinding scratch state lives here: the solver keeps distances and
/// parents in its own per-query map, so Nodes can never carry stale search
/// data between solves.
#[derive(Clone, Debug)]
pub struct Node {
    key: String,
    position: Vec2,
    edges: NodeIdMap<Edge>,
}

impl Node {
    pub(crate) fn new(key: String, position: Vec2) -> Node {
        Node {
            key,
            position,
            edges: NodeIdMap::default(),
        }
    }

    /// the unique key identifying this Node
    pub fn key(&self) -> &str {
        &self.key
    }

    /// the Node's current position in world units
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// the number of outgoing Edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the outgoing Edge to `target`, if the Nodes are connected.
    pub fn edge_to(&self, target: NodeId) -> Option<&Edge> {
        self.edges.get(&target)
    }

    /// Returns an Iterator over the outgoing Edges, in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values()
    }

    pub(crate) fn edges_mut(&mut self) -> impl Iterator<Item = &mut Edge> + '_ {
        self.edges.values_mut()
    }

    /// Inserts an Edge to `target`. Already connected is a no-op, so the
    /// cached weight of an existing Edge is left alone.
    pub(crate) fn add_edge(&mut self, edge: Edge) {
        self.edges.entry(edge.target()).or_insert(edge);
    }

    pub(crate) fn remove_edge(&mut self, target: NodeId) {
        self.edges.remove(&target);
    }
}
