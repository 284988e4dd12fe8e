#![warn(
	missing_docs,
	missing_debug_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! Shortest paths on a mutable spatial graph, with path-following actors.
//!
//! ## Introduction
//! `waygraph` models a weighted, undirected graph whose Nodes sit at 2D
//! positions that can change at runtime. Edge weights are not free values:
//! every Edge caches the Euclidean distance between its endpoints (and the
//! midpoint, for labelling) and is recomputed whenever a Node moves. On top
//! of that sits a Dijkstra-style solver that answers single origin/target
//! queries, a line-oriented text codec for persisting the whole graph, and a
//! small simulation layer that walks an actor along a computed Path one tick
//! at a time.
//!
//! ## Examples
//! Building a graph and finding a path:
//! ```
//! use waygraph::{Graph, Vec2};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_node("A", Vec2::new(0.0, 0.0));
//! let b = graph.add_node("B", Vec2::new(10.0, 0.0));
//! let c = graph.add_node("C", Vec2::new(10.0, 10.0));
//! graph.connect("A", "B");
//! graph.connect("B", "C");
//!
//! let path = graph.find_path(a, c).unwrap();
//! assert_eq!(path.cost(), 20.0);
//! assert_eq!(path[0], a);
//! assert_eq!(path[2], c);
//! ```
//!
//! Moving a Node re-derives every cached weight:
//! ```
//! # use waygraph::{Graph, Vec2};
//! # let mut graph = Graph::new();
//! # graph.add_node("A", Vec2::new(0.0, 0.0));
//! # graph.add_node("B", Vec2::new(10.0, 0.0));
//! # graph.connect("A", "B");
//! graph.set_node_position("B", Vec2::new(3.0, 4.0));
//!
//! let a = graph.node_id("A").unwrap();
//! let b = graph.node_id("B").unwrap();
//! assert_eq!(graph.node(a).edge_to(b).unwrap().weight(), 5.0);
//! ```
//!
//! Running the simulation:
//! ```
//! use waygraph::{Graph, SimConfig, Simulation, Vec2};
//!
//! let mut graph = Graph::new();
//! graph.add_node("A", Vec2::new(0.0, 0.0));
//! graph.add_node("B", Vec2::new(50.0, 0.0));
//! graph.connect("A", "B");
//!
//! let mut sim = Simulation::new(graph, SimConfig::default()).unwrap();
//! sim.choose_new_target();
//! for _ in 0..100 {
//!     sim.tick();
//! }
//! ```
//!
//! ## Persistence
//! [`codec::encode`] and [`codec::decode`] translate a [`Graph`] to and from
//! a whitespace-separated text format. Decoding is atomic: a malformed input
//! yields a [`codec::DecodeError`] and no graph, never a half-built one.

/// The type used to reference a Node inside a [`Graph`].
///
/// Ids are arena slots: stable for the lifetime of the Node, reusable after
/// a Node is removed or replaced. Serialized data always uses the Node key
/// instead, so ids never leave the process.
pub type NodeId = usize;

/// A specialized [`HashMap`](hashbrown::HashMap) keyed by [`NodeId`]
pub type NodeIdMap<V> = hashbrown::HashMap<NodeId, V>;
/// A specialized [`HashSet`](hashbrown::HashSet) of [`NodeId`]s
pub type NodeIdSet = hashbrown::HashSet<NodeId>;

mod vector;
pub use self::vector::Vec2;

mod path;
pub use self::path::Path;

mod graph;
pub use self::graph::{dijkstra_search, Edge, Graph, Node};

pub mod codec;

mod config;
pub use self::config::SimConfig;

mod actor;
pub use self::actor::{PathFollower, TargetTracker};

mod sim;
pub use self::sim::{ActorKind, LoadError, Renderer, Simulation};
