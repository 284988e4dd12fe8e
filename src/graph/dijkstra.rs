use super::Graph;
use crate::{NodeId, NodeIdMap, NodeIdSet, Path};

use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A queue entry: a Node and its candidate distance from the origin.
/// Ordered by distance only, reversed so that `BinaryHeap` pops the minimum.
#[derive(PartialEq)]
struct Element(NodeId, f32);
impl Eq for Element {}
impl PartialOrd for Element {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for Element {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.1.total_cmp(&self.1)
    }
}

/// Searches a [`Graph`] for the shortest Path between two Nodes using
/// [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
///
/// All search state lives in maps local to this call, keyed by [`NodeId`];
/// nothing is written to the Graph, so no reset step is needed between
/// queries and a query can never observe leftovers of a previous one.
///
/// The search stops as soon as the goal's distance is final, so distances to
/// Nodes not yet expanded at that point are *not* guaranteed correct — this
/// is a single-pair query, not a single-source solve. Edge weights are
/// distances and therefore never negative, which is what makes the early
/// exit sound. Zero-weight Edges (coincident Nodes) are fine: a Node's
/// distance is fixed once it is dequeued and it is never expanded again.
///
/// ## Returns
/// The Path from `start` to `goal` (inclusive on both ends) with the total
/// distance, or `None` if the goal is unreachable. `start == goal` yields a
/// single-step Path of cost 0.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use waygraph::{dijkstra_search, Graph, Vec2};
/// // B--10--A--15--C      D (not connected)
/// let mut graph = Graph::new();
/// let a = graph.add_node("A", Vec2::new(0.0, 0.0));
/// let b = graph.add_node("B", Vec2::new(10.0, 0.0));
/// let c = graph.add_node("C", Vec2::new(0.0, 15.0));
/// graph.connect("A", "B");
/// graph.connect("A", "C");
///
/// let path = dijkstra_search(&graph, b, c).unwrap();
/// assert_eq!(path.cost(), 25.0);
/// assert_eq!(path, vec![b, a, c]);
///
/// let lonely = graph.add_node("D", Vec2::new(99.0, 99.0));
/// assert!(dijkstra_search(&graph, a, lonely).is_none());
/// ```
pub fn dijkstra_search(graph: &Graph, start: NodeId, goal: NodeId) -> Option<Path<NodeId>> {
    // best known (distance, parent) per Node; doubles as the visited set
    let mut visited: NodeIdMap<(f32, NodeId)> = NodeIdMap::default();
    let mut completed = NodeIdSet::default();
    let mut next = BinaryHeap::new();
    next.push(Element(start, 0.0));
    visited.insert(start, (0.0, start));

    while let Some(Element(current_id, current_cost)) = next.pop() {
        match current_cost.total_cmp(&visited[&current_id].0) {
            Ordering::Greater => continue, // stale duplicate entry
            Ordering::Equal => {}
            Ordering::Less => unreachable!("heap produced a cost below the stored best"),
        }
        if !completed.insert(current_id) {
            continue;
        }
        if current_id == goal {
            break;
        }

        for edge in graph.node(current_id).edges() {
            let other_id = edge.target();
            if completed.contains(&other_id) {
                continue;
            }
            let other_cost = current_cost + edge.weight();

            let mut needs_visit = true;
            if let Some((prev_cost, prev_id)) = visited.get_mut(&other_id) {
                if *prev_cost > other_cost {
                    *prev_cost = other_cost;
                    *prev_id = current_id;
                } else {
                    needs_visit = false;
                }
            } else {
                visited.insert(other_id, (other_cost, current_id));
            }

            if needs_visit {
                next.push(Element(other_id, other_cost));
            }
        }
    }

    let &(cost, _) = visited.get(&goal)?;

    let steps = {
        let mut steps = vec![];
        let mut current = goal;

        while current != start {
            steps.push(current);
            let (_, prev) = visited[&current];
            current = prev;
        }
        steps.push(start);
        steps.reverse();
        steps
    };

    debug!(
        "path {} -> {}: {} steps, distance {}",
        graph.node(start).key(),
        graph.node(goal).key(),
        steps.len(),
        cost
    );
    Some(Path::new(steps, cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec2;

    #[test]
    fn start_equals_goal() {
        let mut graph = Graph::new();
        let a = graph.add_node("A", Vec2::new(1.0, 2.0));

        let path = dijkstra_search(&graph, a, a).unwrap();
        assert_eq!(path, vec![a]);
        assert_eq!(path.cost(), 0.0);
    }

    #[test]
    fn zero_weight_edges_terminate() {
        // three coincident nodes in a cycle
        let mut graph = Graph::new();
        let a = graph.add_node("A", Vec2::ZERO);
        graph.add_node("B", Vec2::ZERO);
        let c = graph.add_node("C", Vec2::ZERO);
        graph.connect("A", "B");
        graph.connect("B", "C");
        graph.connect("C", "A");

        let path = dijkstra_search(&graph, a, c).unwrap();
        assert_eq!(path.cost(), 0.0);
    }

    #[test]
    fn picks_shorter_route() {
        // two routes from A to B: over C (flat) or over D (a wide arc)
        let mut graph = Graph::new();
        let a = graph.add_node("A", Vec2::new(0.0, 0.0));
        let b = graph.add_node("B", Vec2::new(10.0, 0.0));
        let c = graph.add_node("C", Vec2::new(5.0, 1.0));
        let d = graph.add_node("D", Vec2::new(5.0, 8.0));
        graph.connect("A", "C");
        graph.connect("C", "B");
        graph.connect("A", "D");
        graph.connect("D", "B");

        let path = dijkstra_search(&graph, a, b).unwrap();
        assert_eq!(path, vec![a, c, b]);

        let via_c = 2.0 * Vec2::new(5.0, 1.0).length();
        assert!((path.cost() - via_c).abs() < 1e-4);
    }
}
