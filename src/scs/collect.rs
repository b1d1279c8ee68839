//! Reachability collection of nodes across nested contours

use std::collections::HashSet;

use crate::types::{ElementId, ScgGraph, Shape};

/// Collect every node and link reachable from `scope`, descending into
/// nested contours.
///
/// A contour is marked in `visited` before it is entered and is never
/// entered again while the same set is in use. Nodes come out in
/// depth-first encounter order, each at most once.
pub fn collect_nodes(
    graph: &ScgGraph,
    scope: &[ElementId],
    visited: &mut HashSet<ElementId>,
) -> Vec<ElementId> {
    let mut nodes = Vec::new();
    let mut seen = HashSet::new();
    collect_into(graph, scope, visited, &mut nodes, &mut seen);
    nodes
}

fn collect_into(
    graph: &ScgGraph,
    scope: &[ElementId],
    visited: &mut HashSet<ElementId>,
    nodes: &mut Vec<ElementId>,
    seen: &mut HashSet<ElementId>,
) {
    for &handle in scope {
        match &graph.get(handle).shape {
            Shape::Node | Shape::Link { .. } => {
                if seen.insert(handle) {
                    nodes.push(handle);
                }
            }
            Shape::Contour(contour) => {
                if visited.insert(handle) {
                    collect_into(graph, &contour.children, visited, nodes, seen);
                }
            }
            Shape::Connector(_) | Shape::Bus => {}
        }
    }
}

/// Nodes and links directly in `scope`, without descending
pub fn scope_nodes(graph: &ScgGraph, scope: &[ElementId]) -> Vec<ElementId> {
    scope
        .iter()
        .copied()
        .filter(|&handle| graph.get(handle).is_node())
        .collect()
}
