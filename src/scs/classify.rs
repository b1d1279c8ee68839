//! Detection of connectors that are the target of another connector
//!
//! `a2: n3 -> a1` where `a1: n1 -> n2` is written as the single ternary
//! statement `n1 -> n3: n2;;`. `a1` is the complex arc, `a2` the attribute
//! arc consumed by it.

use std::collections::HashSet;

use crate::types::{ElementId, ScgGraph};

#[derive(Debug, Default)]
pub struct EdgeClassification {
    /// Connectors targeted by another connector of the scope
    pub complex_arcs: HashSet<ElementId>,
    /// Connectors whose target is a connector
    pub attribute_arcs: HashSet<ElementId>,
}

impl EdgeClassification {
    /// Single pass over the connectors of `scope`
    pub fn classify(graph: &ScgGraph, scope: &[ElementId]) -> Self {
        let mut result = Self::default();
        for &handle in scope {
            let Some(connector) = graph.get(handle).as_connector() else {
                continue;
            };
            if graph.get(connector.target).as_connector().is_some() {
                result.complex_arcs.insert(connector.target);
                result.attribute_arcs.insert(handle);
            }
        }
        result
    }

    pub fn is_complex(&self, handle: ElementId) -> bool {
        self.complex_arcs.contains(&handle)
    }

    pub fn is_attribute(&self, handle: ElementId) -> bool {
        self.attribute_arcs.contains(&handle)
    }
}

/// First connector of `scope` other than `complex` that targets it
pub fn find_incident_arc(
    graph: &ScgGraph,
    scope: &[ElementId],
    complex: ElementId,
) -> Option<ElementId> {
    scope.iter().copied().find(|&handle| {
        handle != complex
            && graph
                .get(handle)
                .as_connector()
                .is_some_and(|c| c.target == complex)
    })
}
