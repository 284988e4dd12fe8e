//! Text serialization of a [`Graph`].
//!
//! The format is a whitespace-separated token stream, conventionally laid
//! out line by line:
//!
//! ```text
//! <nodeCount>
//! <key> <x> <y>           (nodeCount times, in creation order)
//! <edgeCount> <targetKey>...  (nodeCount times, same order as above)
//! ```
//!
//! Example:
//!
//! ```text
//! 3
//! A 0 0
//! B 10 0
//! C 10 10
//! 2 B C
//! 1 A
//! 1 A
//! ```
//!
//! Each Node's out-edge list is written in full, so an undirected connection
//! normally appears once per endpoint. Decoding routes every entry through
//! [`Graph::connect`], which creates both directions and ignores
//! duplicates, so a graph whose writer emitted each connection only once
//! round-trips to the same undirected edge set.
//!
//! There is no version field; changes to the format are breaking.

use crate::{Graph, Vec2};

use log::debug;
use thiserror::Error;

/// The reason a graph text failed to [`decode`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// the token stream ended before the structure was complete
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd {
        /// what the next token should have been
        expected: &'static str,
    },
    /// a count field was not a non-negative integer
    #[error("invalid count {token:?}")]
    InvalidCount {
        /// the offending token
        token: String,
    },
    /// a coordinate field was not a number
    #[error("invalid coordinate {token:?}")]
    InvalidCoordinate {
        /// the offending token
        token: String,
    },
}

struct Tokens<'a> {
    iter: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Tokens<'a> {
        Tokens {
            iter: text.split_whitespace(),
        }
    }

    fn next(&mut self, expected: &'static str) -> Result<&'a str, DecodeError> {
        self.iter
            .next()
            .ok_or(DecodeError::UnexpectedEnd { expected })
    }

    fn count(&mut self, expected: &'static str) -> Result<usize, DecodeError> {
        let token = self.next(expected)?;
        token.parse().map_err(|_| DecodeError::InvalidCount {
            token: token.to_string(),
        })
    }

    fn coordinate(&mut self, expected: &'static str) -> Result<f32, DecodeError> {
        let token = self.next(expected)?;
        token.parse().map_err(|_| DecodeError::InvalidCoordinate {
            token: token.to_string(),
        })
    }
}

/// Parses a serialized graph into a new [`Graph`].
///
/// Decoding is atomic: the graph is built up in a scratch instance and only
/// returned once the whole input parsed, so a malformed text never leaves a
/// partial graph behind. All Edge caches are derived before returning;
/// trailing tokens after a complete graph are ignored.
///
/// Edge entries naming an unknown key are skipped silently, matching the
/// permissive [`Graph::connect`] they are fed through.
pub fn decode(text: &str) -> Result<Graph, DecodeError> {
    let mut tokens = Tokens::new(text);
    let mut graph = Graph::new();

    let node_count = tokens.count("node count")?;

    // first block: key + position per node, in creation order
    let mut keys = Vec::with_capacity(node_count);
    for _ in 0..node_count {
        let key = tokens.next("node key")?;
        let x = tokens.coordinate("node x")?;
        let y = tokens.coordinate("node y")?;
        graph.add_node(key, Vec2::new(x, y));
        keys.push(key);
    }

    // second block: out-degree + target keys, same node order
    for origin in &keys {
        let edge_count = tokens.count("edge count")?;
        for _ in 0..edge_count {
            let target = tokens.next("edge target key")?;
            graph.connect(origin, target);
        }
    }

    graph.invalidate_all_edges();
    debug!("decoded graph with {} nodes", graph.len());
    Ok(graph)
}

/// Serializes a [`Graph`] into the text format accepted by [`decode`].
///
/// Nodes are written in creation order; both blocks use the same order so
/// the edge lists re-associate with their origin Nodes on decode.
pub fn encode(graph: &Graph) -> String {
    let mut node_block = String::new();
    let mut edge_block = String::new();

    node_block.push_str(&graph.len().to_string());
    node_block.push('\n');

    for (_, node) in graph.nodes() {
        node_block.push_str(&format!(
            "{} {} {}\n",
            node.key(),
            node.position().x,
            node.position().y
        ));

        edge_block.push_str(&node.edge_count().to_string());
        for edge in node.edges() {
            edge_block.push(' ');
            edge_block.push_str(graph.node(edge.target()).key());
        }
        edge_block.push('\n');
    }

    node_block.push_str(&edge_block);
    node_block
}
