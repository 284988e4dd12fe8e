//! Simulation actors that live on top of a [`Graph`].
//!
//! A [`PathFollower`] walks a computed Path one Node at a time at constant
//! speed, while a [`TargetTracker`] simply snaps to whichever Node it was
//! pointed at. Both only ever read from the Graph; positions of the actors
//! themselves are the only state they mutate.

use crate::{Graph, NodeId, Path, SimConfig, Vec2};

use std::collections::VecDeque;

/// An actor that walks a Path of Nodes at constant speed.
///
/// Per tick the follower is in one of three states:
/// - *idle*: no target Node (or paused via [`set_active`](PathFollower::set_active)) — nothing happens
/// - *travelling*: moves straight toward the target by `follower_speed`
/// - *arrived*: within `arrival_tolerance` of the target — the next queued
///   step becomes the new target; with the queue empty the target is kept
///   as the final destination and the follower settles there
#[derive(Clone, Debug)]
pub struct PathFollower {
    position: Vec2,
    last_visited: NodeId,
    target: Option<NodeId>,
    steps: VecDeque<NodeId>,
    active: bool,
    config: SimConfig,
}

impl PathFollower {
    /// Creates a follower standing on the given Node, idle and active.
    pub fn new(graph: &Graph, start: NodeId, config: SimConfig) -> PathFollower {
        PathFollower {
            position: graph.node(start).position(),
            last_visited: start,
            target: None,
            steps: VecDeque::new(),
            active: true,
            config,
        }
    }

    /// the follower's current position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// the Node the follower most recently stood on
    pub fn last_visited(&self) -> NodeId {
        self.last_visited
    }

    /// the Node currently being moved toward, if any
    pub fn target(&self) -> Option<NodeId> {
        self.target
    }

    /// the number of queued steps not yet travelled
    pub fn remaining_steps(&self) -> usize {
        self.steps.len()
    }

    /// `false` pauses the follower in place; `true` resumes it.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// whether the follower is currently allowed to move
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Replaces whatever the follower was doing with a new Path.
    ///
    /// The first step (normally the Node the follower already stands on)
    /// becomes the immediate target. An empty Path leaves the follower
    /// idle, which is how an unreachable target is handed over: no stale
    /// steps survive.
    pub fn set_path(&mut self, path: Path<NodeId>) {
        self.steps = path.into_steps().into();
        self.target = self.steps.pop_front();
    }

    /// Advances the follower by one tick.
    ///
    /// Reads Node positions from the Graph but never mutates it.
    pub fn advance(&mut self, graph: &Graph) {
        let target = match self.target {
            Some(target) if self.active => target,
            _ => return,
        };
        // a stale id means the Node was replaced under us; go idle
        let target_pos = match graph.get(target) {
            Some(node) => node.position(),
            None => {
                self.target = None;
                return;
            }
        };

        if self.position.distance(target_pos) < self.config.arrival_tolerance {
            // arrived: advance to the next step, or settle here
            if let Some(next) = self.steps.pop_front() {
                self.target = Some(next);
                self.last_visited = next;
            }
            return;
        }

        let direction = (target_pos - self.position).normalized();
        self.position += direction * self.config.follower_speed;
    }
}

/// An actor that instantly relocates to its designated Node.
#[derive(Clone, Copy, Debug, Default)]
pub struct TargetTracker {
    position: Vec2,
    target: Option<NodeId>,
}

impl TargetTracker {
    /// Creates a tracker with no target, sitting at the origin.
    pub fn new() -> TargetTracker {
        TargetTracker::default()
    }

    /// the tracker's current position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// the Node the tracker is pinned to, if any
    pub fn target(&self) -> Option<NodeId> {
        self.target
    }

    /// Pins the tracker to a Node. It snaps there on the next sync.
    pub fn set_target(&mut self, target: Option<NodeId>) {
        self.target = target;
    }

    /// Snaps the tracker onto its target Node's current position.
    pub fn sync(&mut self, graph: &Graph) {
        if let Some(node) = self.target.and_then(|id| graph.get(id)) {
            self.position = node.position();
        }
    }
}
