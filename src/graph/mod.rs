//! The graph data model: Nodes, Edges, and the aggregate that owns them.

mod node;
pub use self::node::Node;

mod edge;
pub use self::edge::Edge;

mod dijkstra;
pub use self::dijkstra::dijkstra_search;

use crate::{NodeId, NodeIdMap, Path, Vec2};
use hashbrown::HashMap;
use slab::Slab;

/// A weighted, undirected graph of positioned, string-keyed Nodes.
///
/// The Graph owns every Node and, transitively, every Edge. Nodes live in an
/// arena and are referenced by [`NodeId`]; a key index maps the stable
/// string identity to the current arena slot. Connecting two Nodes inserts a
/// directed Edge in each direction, and both keep cached weights that the
/// Graph re-derives whenever a position changes.
///
/// Lookup operations are deliberately permissive: connecting or moving an
/// unknown key is a silent no-op, and [`get_or_create`](Graph::get_or_create)
/// will invent a Node at the origin rather than fail.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Slab<Node>,
    keys: HashMap<String, NodeId>,
    order: Vec<NodeId>,
}

impl Graph {
    /// Creates an empty Graph.
    pub fn new() -> Graph {
        Graph::default()
    }

    /// the number of Nodes in the Graph
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// `true` if the Graph has no Nodes
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the id of the Node with the given key.
    pub fn node_id(&self, key: &str) -> Option<NodeId> {
        self.keys.get(key).copied()
    }

    /// Returns the Node with the given id.
    ///
    /// ## Panics
    /// Panics if `id` does not refer to a Node in this Graph.
    #[track_caller]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Returns the Node with the given id, or `None` for a stale id.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Returns an Iterator over all Nodes in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.order.iter().map(move |&id| (id, &self.nodes[id]))
    }

    /// Returns the id of the Node with the given key, inserting a new Node
    /// at the origin if the key is unknown.
    pub fn get_or_create(&mut self, key: &str) -> NodeId {
        match self.keys.get(key) {
            Some(&id) => id,
            None => self.add_node(key, Vec2::ZERO),
        }
    }

    /// Inserts a Node with the given key and position.
    ///
    /// Re-using a key replaces the old Node: the previous arena slot is
    /// freed and every Edge that referenced it is dropped. Callers that
    /// replace a connected Node must re-connect it afterwards.
    pub fn add_node(&mut self, key: impl Into<String>, position: Vec2) -> NodeId {
        let key = key.into();
        if let Some(&old) = self.keys.get(&key) {
            self.remove(old);
        }
        let id = self.nodes.insert(Node::new(key.clone(), position));
        self.keys.insert(key, id);
        self.order.push(id);
        id
    }

    fn remove(&mut self, id: NodeId) {
        let node = self.nodes.remove(id);
        for edge in node.edges() {
            let other = edge.target();
            if other != id {
                self.nodes[other].remove_edge(id);
            }
        }
        self.keys.remove(node.key());
        self.order.retain(|&n| n != id);
    }

    /// Connects the Nodes with the given keys with an Edge in each
    /// direction.
    ///
    /// A no-op if either key is unknown or the Nodes are already connected.
    /// Connecting a key to itself is legal and produces a zero-weight self
    /// Edge.
    pub fn connect(&mut self, origin_key: &str, target_key: &str) {
        let (origin, target) = match (self.node_id(origin_key), self.node_id(target_key)) {
            (Some(o), Some(t)) => (o, t),
            _ => return,
        };
        let origin_pos = self.nodes[origin].position();
        let target_pos = self.nodes[target].position();

        self.nodes[origin].add_edge(Edge::new(origin, origin_pos, target, target_pos));
        self.nodes[target].add_edge(Edge::new(target, target_pos, origin, origin_pos));
    }

    /// Moves the Node with the given key and re-derives all cached Edge
    /// data.
    ///
    /// A no-op if the key is unknown. The whole Graph is invalidated, not
    /// just the Edges touching the moved Node; on graphs of this size the
    /// simpler full pass has never shown up in a profile.
    pub fn set_node_position(&mut self, key: &str, position: Vec2) {
        let id = match self.node_id(key) {
            Some(id) => id,
            None => return,
        };
        self.nodes[id].set_position(position);
        self.invalidate_all_edges();
    }

    /// Recomputes every Edge's weight and midpoint from the current Node
    /// positions.
    ///
    /// Called automatically after a position change; callers only need it
    /// after mutating positions in bulk through other means.
    pub fn invalidate_all_edges(&mut self) {
        let positions: NodeIdMap<Vec2> = self
            .nodes
            .iter()
            .map(|(id, node)| (id, node.position()))
            .collect();

        for (_, node) in self.nodes.iter_mut() {
            for edge in node.edges_mut() {
                let (origin, target) = (edge.origin(), edge.target());
                edge.invalidate(positions[&origin], positions[&target]);
            }
        }
    }

    /// Returns the first Node within `radius` of `position`, if any.
    ///
    /// Used for pointer hit-testing. Iteration order is unspecified, so with
    /// several Nodes in range this is "a Node within radius", not "the
    /// nearest Node".
    pub fn find_node_near(&self, position: Vec2, radius: f32) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, node)| node.position().distance(position) < radius)
            .map(|(id, _)| id)
    }

    /// Computes the shortest Path between two Nodes.
    ///
    /// Returns `None` if the target is unreachable from the origin. See
    /// [`dijkstra_search`] for the algorithm's contract.
    pub fn find_path(&self, origin: NodeId, target: NodeId) -> Option<Path<NodeId>> {
        dijkstra_search(self, origin, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut graph = Graph::new();
        graph.add_node("A", Vec2::new(0.0, 0.0));
        graph.add_node("B", Vec2::new(10.0, 0.0));
        graph.add_node("C", Vec2::new(0.0, 10.0));
        graph.connect("A", "B");
        graph.connect("B", "C");
        graph.connect("C", "A");
        graph
    }

    #[test]
    fn connect_is_undirected() {
        let graph = triangle();
        let a = graph.node_id("A").unwrap();
        let b = graph.node_id("B").unwrap();

        assert_eq!(graph.node(a).edge_to(b).unwrap().weight(), 10.0);
        assert_eq!(graph.node(b).edge_to(a).unwrap().weight(), 10.0);
    }

    #[test]
    fn connect_unknown_key_is_noop() {
        let mut graph = triangle();
        graph.connect("A", "Z");
        graph.connect("Z", "A");

        let a = graph.node_id("A").unwrap();
        assert_eq!(graph.node(a).edge_count(), 2);
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn self_edge_has_zero_weight() {
        let mut graph = triangle();
        graph.connect("A", "A");

        let a = graph.node_id("A").unwrap();
        assert_eq!(graph.node(a).edge_to(a).unwrap().weight(), 0.0);
    }

    #[test]
    fn get_or_create_inserts_at_origin() {
        let mut graph = Graph::new();
        let id = graph.get_or_create("X");

        assert_eq!(graph.node(id).position(), Vec2::ZERO);
        assert_eq!(graph.get_or_create("X"), id);
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn replacing_a_node_drops_its_edges() {
        let mut graph = triangle();
        graph.add_node("B", Vec2::new(50.0, 50.0));

        let a = graph.node_id("A").unwrap();
        let b = graph.node_id("B").unwrap();
        let c = graph.node_id("C").unwrap();

        assert!(graph.node(a).edge_to(b).is_none());
        assert!(graph.node(c).edge_to(b).is_none());
        assert_eq!(graph.node(b).edge_count(), 0);
        // the A-C edge is untouched
        assert!(graph.node(a).edge_to(c).is_some());
    }

    #[test]
    fn move_recomputes_weights_and_midpoints() {
        let mut graph = triangle();
        graph.set_node_position("B", Vec2::new(3.0, 4.0));

        let a = graph.node_id("A").unwrap();
        let b = graph.node_id("B").unwrap();
        let edge = graph.node(a).edge_to(b).unwrap();

        assert_eq!(edge.weight(), 5.0);
        assert_eq!(edge.midpoint(), Vec2::new(1.5, 2.0));
        assert_eq!(graph.node(b).edge_to(a).unwrap().weight(), 5.0);
    }

    #[test]
    fn move_unknown_key_is_noop() {
        let mut graph = triangle();
        graph.set_node_position("Z", Vec2::new(1.0, 1.0));

        assert_eq!(graph.len(), 3);
        assert!(graph.node_id("Z").is_none());
    }

    #[test]
    fn find_node_near_respects_radius() {
        let graph = triangle();
        let b = graph.node_id("B").unwrap();

        assert_eq!(graph.find_node_near(Vec2::new(10.5, 0.5), 2.0), Some(b));
        assert_eq!(graph.find_node_near(Vec2::new(100.0, 100.0), 2.0), None);
    }
}
