//! The tick-driven simulation: a Graph, a follower chasing a tracker, and
//! the drag / persistence / render surfaces the embedding platform calls.

use crate::codec::{self, DecodeError};
use crate::{Graph, NodeId, Path, PathFollower, SimConfig, TargetTracker, Vec2};

use log::{debug, warn};
use rand::Rng;
use thiserror::Error;

/// The sprite-like handle passed to [`Renderer::actor`], identifying which
/// actor is being drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActorKind {
    /// the path-walking actor
    Follower,
    /// the actor marking the current target Node
    Tracker,
}

/// Drawing callbacks implemented by the embedding platform.
///
/// [`Simulation::render`] calls these once per frame: all Edges, then all
/// Nodes, then the actors, so that actors layer on top.
pub trait Renderer {
    /// Draws one Edge. The cached midpoint is where its weight label goes.
    fn edge(&mut self, edge: &crate::Edge);
    /// Draws one Node.
    fn node(&mut self, node: &crate::Node);
    /// Draws one actor at its current position.
    fn actor(&mut self, position: Vec2, kind: ActorKind);
}

/// The reason a [`Simulation::load`] call was rejected.
#[derive(Debug, Error)]
pub enum LoadError {
    /// the graph text did not parse
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// the text parsed but described a graph with no Nodes, which cannot
    /// host the actors
    #[error("serialized graph has no nodes")]
    EmptyGraph,
}

/// A Graph plus the actors living on it, advanced by an external
/// fixed-interval tick.
///
/// Everything here is single-threaded by design: one [`tick`](Simulation::tick)
/// per timer interval, one render pass per frame, and the drag surface in
/// between. A solve is run synchronously inside
/// [`choose_new_target`](Simulation::choose_new_target) and has finished by
/// the time it returns, so nothing ever observes a solve in progress.
#[derive(Debug)]
pub struct Simulation {
    graph: Graph,
    follower: PathFollower,
    tracker: TargetTracker,
    config: SimConfig,
    dragged: Option<String>,
}

impl Simulation {
    /// Creates a Simulation over the given Graph.
    ///
    /// The follower starts on the first Node in creation order; returns
    /// `None` for an empty Graph, which has nowhere to put it.
    pub fn new(graph: Graph, config: SimConfig) -> Option<Simulation> {
        let start = graph.nodes().next().map(|(id, _)| id)?;
        let follower = PathFollower::new(&graph, start, config);
        Some(Simulation {
            graph,
            follower,
            tracker: TargetTracker::new(),
            config,
            dragged: None,
        })
    }

    /// the underlying Graph
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// the path-walking actor
    pub fn follower(&self) -> &PathFollower {
        &self.follower
    }

    /// the target-marking actor
    pub fn tracker(&self) -> &TargetTracker {
        &self.tracker
    }

    /// Advances the world by one simulation step: the follower walks, the
    /// tracker re-snaps to its Node.
    pub fn tick(&mut self) {
        self.follower.advance(&self.graph);
        self.tracker.sync(&self.graph);
    }

    /// Pauses the follower in place.
    pub fn pause(&mut self) {
        self.follower.set_active(false);
    }

    /// Resumes the follower.
    pub fn resume(&mut self) {
        self.follower.set_active(true);
    }

    /// Moves the tracker to a random Node and sends the follower after it.
    ///
    /// The Node is drawn uniformly from all Nodes except the follower's
    /// last-visited one, by indexing directly into the eligible set. The
    /// shortest Path from the follower's last-visited Node is computed and
    /// assigned; if the target is unreachable the follower gets an empty
    /// Path and goes idle rather than keeping stale steps. Any Path still
    /// in progress is simply replaced.
    ///
    /// Returns `false` without dispatching when the Graph has fewer than
    /// two Nodes, since excluding the follower's Node would leave nothing
    /// to choose from.
    pub fn choose_new_target(&mut self) -> bool {
        let origin = self.follower.last_visited();
        let eligible: Vec<NodeId> = self
            .graph
            .nodes()
            .map(|(id, _)| id)
            .filter(|&id| id != origin)
            .collect();

        if eligible.is_empty() {
            warn!("cannot pick a target: graph has no node besides the follower's");
            return false;
        }

        let target = eligible[rand::thread_rng().gen_range(0..eligible.len())];
        debug!("new target: {}", self.graph.node(target).key());

        self.tracker.set_target(Some(target));
        let path = self
            .graph
            .find_path(origin, target)
            .unwrap_or_else(Path::empty);
        self.follower.set_path(path);
        true
    }

    /// Starts a pointer drag at the given position.
    ///
    /// Hit-tests the Nodes with the configured touch radius; on a hit the
    /// Node is grabbed and the follower pauses so it does not animate into
    /// a Graph whose positions are mid-change. Returns whether a Node was
    /// grabbed.
    pub fn drag_started(&mut self, position: Vec2) -> bool {
        match self.graph.find_node_near(position, self.config.touch_radius) {
            Some(id) => {
                self.dragged = Some(self.graph.node(id).key().to_string());
                self.pause();
                true
            }
            None => false,
        }
    }

    /// Moves the grabbed Node (if any) to the given position, re-deriving
    /// Edge caches.
    pub fn drag_moved(&mut self, position: Vec2) {
        if let Some(key) = &self.dragged {
            self.graph.set_node_position(key, position);
        }
    }

    /// Ends the drag and resumes the follower.
    pub fn drag_ended(&mut self) {
        if self.dragged.take().is_some() {
            self.resume();
        }
    }

    /// Replaces the whole world with the graph described by `text`.
    ///
    /// The replacement is atomic: on any error the current Graph and actors
    /// are untouched, so the caller can fall back to whatever it was
    /// showing. On success the actors are rebuilt (follower on the first
    /// Node, as after construction) and a first target is dispatched.
    pub fn load(&mut self, text: &str) -> Result<(), LoadError> {
        let graph = codec::decode(text)?;
        let mut replacement =
            Simulation::new(graph, self.config).ok_or(LoadError::EmptyGraph)?;
        replacement.choose_new_target();
        *self = replacement;
        Ok(())
    }

    /// Serializes the current Graph for persistence.
    pub fn save(&self) -> String {
        codec::encode(&self.graph)
    }

    /// Draws the world: Edges first, Nodes on top of them, actors last.
    pub fn render<R: Renderer>(&self, renderer: &mut R) {
        for (_, node) in self.graph.nodes() {
            for edge in node.edges() {
                renderer.edge(edge);
            }
        }
        for (_, node) in self.graph.nodes() {
            renderer.node(node);
        }
        renderer.actor(self.tracker.position(), ActorKind::Tracker);
        renderer.actor(self.follower.position(), ActorKind::Follower);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_sim() -> Simulation {
        let mut graph = Graph::new();
        graph.add_node("A", Vec2::new(0.0, 0.0));
        graph.add_node("B", Vec2::new(40.0, 0.0));
        graph.add_node("C", Vec2::new(40.0, 40.0));
        graph.add_node("D", Vec2::new(0.0, 40.0));
        graph.connect("A", "B");
        graph.connect("B", "C");
        graph.connect("C", "D");
        graph.connect("D", "A");
        Simulation::new(graph, SimConfig::default()).unwrap()
    }

    #[test]
    fn empty_graph_has_no_simulation() {
        assert!(Simulation::new(Graph::new(), SimConfig::default()).is_none());
    }

    #[test]
    fn target_excludes_followers_node() {
        let mut sim = square_sim();
        for _ in 0..50 {
            assert!(sim.choose_new_target());
            let target = sim.tracker.target().unwrap();
            assert_ne!(target, sim.follower.last_visited());
        }
    }

    #[test]
    fn single_node_graph_cannot_dispatch() {
        let mut graph = Graph::new();
        graph.add_node("A", Vec2::ZERO);
        let mut sim = Simulation::new(graph, SimConfig::default()).unwrap();

        assert!(!sim.choose_new_target());
        assert_eq!(sim.tracker().target(), None);
    }

    #[test]
    fn drag_pauses_and_moves() {
        let mut sim = square_sim();

        assert!(sim.drag_started(Vec2::new(1.0, 1.0))); // grabs A
        assert!(!sim.follower().is_active());

        sim.drag_moved(Vec2::new(5.0, 5.0));
        let a = sim.graph().node_id("A").unwrap();
        assert_eq!(sim.graph().node(a).position(), Vec2::new(5.0, 5.0));

        sim.drag_ended();
        assert!(sim.follower().is_active());
    }

    #[test]
    fn drag_miss_grabs_nothing() {
        let mut sim = square_sim();

        assert!(!sim.drag_started(Vec2::new(20.0, 20.0)));
        sim.drag_moved(Vec2::new(99.0, 99.0));

        let a = sim.graph().node_id("A").unwrap();
        assert_eq!(sim.graph().node(a).position(), Vec2::ZERO);
        assert!(sim.follower().is_active());
    }

    #[test]
    fn load_failure_keeps_current_world() {
        let mut sim = square_sim();
        let before = sim.save();

        assert!(sim.load("3\nA zero zero\n").is_err());
        assert_eq!(sim.save(), before);
        assert_eq!(sim.graph().len(), 4);
    }

    #[test]
    fn load_empty_graph_is_rejected() {
        let mut sim = square_sim();
        assert!(matches!(sim.load("0"), Err(LoadError::EmptyGraph)));
        assert_eq!(sim.graph().len(), 4);
    }

    #[test]
    fn load_replaces_world_and_dispatches() {
        let mut sim = square_sim();
        sim.load("2\nX 0 0\nY 20 0\n1 Y\n0\n").unwrap();

        assert_eq!(sim.graph().len(), 2);
        let x = sim.graph().node_id("X").unwrap();
        assert_eq!(sim.follower().last_visited(), x);
        // with two nodes the dispatched target is always the other one
        assert_eq!(sim.tracker().target(), sim.graph().node_id("Y"));
    }

    #[test]
    fn render_layers_actors_last() {
        #[derive(Default)]
        struct Recording {
            calls: Vec<&'static str>,
        }
        impl Renderer for Recording {
            fn edge(&mut self, _: &crate::Edge) {
                self.calls.push("edge");
            }
            fn node(&mut self, _: &crate::Node) {
                self.calls.push("node");
            }
            fn actor(&mut self, _: Vec2, _: ActorKind) {
                self.calls.push("actor");
            }
        }

        let sim = square_sim();
        let mut recording = Recording::default();
        sim.render(&mut recording);

        assert_eq!(recording.calls.iter().filter(|c| **c == "edge").count(), 8);
        assert_eq!(recording.calls.iter().filter(|c| **c == "node").count(), 4);
        assert_eq!(&recording.calls[recording.calls.len() - 2..], ["actor", "actor"]);
        let first_node = recording.calls.iter().position(|c| *c == "node").unwrap();
        assert!(recording.calls[..first_node].iter().all(|c| *c == "edge"));
    }
}
