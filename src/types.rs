//! Type definitions for SCg element graphs

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};

/// Stable index of an element inside a [`ScgGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    pub fn index(self) -> usize {
        self.0
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }
}

/// Element kind as seen by the translator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Node,
    Link,
    Arc,
    Pair,
    Contour,
    Bus,
}

/// Directed (arc) or undirected (pair) connector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorKind {
    Arc,
    Pair,
}

/// Which end of a connector is the subject of its relation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// source => relation: target
    #[default]
    Forward,
    /// target <= relation: source
    Reverse,
}

#[derive(Debug, Clone)]
pub struct Connector {
    pub kind: ConnectorKind,
    pub source: ElementId,
    pub target: ElementId,
    pub orientation: Orientation,
}

/// A contour groups elements without owning them
#[derive(Debug, Clone, Default)]
pub struct Contour {
    pub children: Vec<ElementId>,
}

/// Tag-specific payload of an element
#[derive(Debug, Clone)]
pub enum Shape {
    Node,
    Link { content: String },
    Connector(Connector),
    Contour(Contour),
    Bus,
}

/// One element of an SCg graph
#[derive(Debug, Clone)]
pub struct Element {
    /// Stable id from the source document
    pub id: String,
    /// Raw identifier, possibly empty or natural-language text
    pub identifier: String,
    /// SCg type descriptor, e.g. `node/const/perm/general`
    pub element_type: String,
    pub shape: Shape,
}

impl Element {
    pub fn tag(&self) -> Tag {
        match &self.shape {
            Shape::Node => Tag::Node,
            Shape::Link { .. } => Tag::Link,
            Shape::Connector(c) => match c.kind {
                ConnectorKind::Arc => Tag::Arc,
                ConnectorKind::Pair => Tag::Pair,
            },
            Shape::Contour(_) => Tag::Contour,
            Shape::Bus => Tag::Bus,
        }
    }

    /// Nodes and links are both declared as nodes
    pub fn is_node(&self) -> bool {
        matches!(self.shape, Shape::Node | Shape::Link { .. })
    }

    pub fn as_connector(&self) -> Option<&Connector> {
        match &self.shape {
            Shape::Connector(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_contour(&self) -> Option<&Contour> {
        match &self.shape {
            Shape::Contour(c) => Some(c),
            _ => None,
        }
    }
}

/// Arena owning every element of a graph.
///
/// Connectors and contours refer to other elements by [`ElementId`], so an
/// element may be grouped by a contour and referenced from anywhere else.
#[derive(Debug, Clone, Default)]
pub struct ScgGraph {
    elements: Vec<Element>,
    by_id: HashMap<String, ElementId>,
}

impl ScgGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element, rejecting a repeated string id
    pub fn push(&mut self, element: Element) -> Result<ElementId> {
        if self.by_id.contains_key(&element.id) {
            return Err(Error::DuplicateId { id: element.id });
        }
        let handle = ElementId(self.elements.len());
        self.by_id.insert(element.id.clone(), handle);
        self.elements.push(element);
        Ok(handle)
    }

    pub fn add_node(&mut self, id: &str, identifier: &str, element_type: &str) -> Result<ElementId> {
        self.push(element(id, identifier, element_type, Shape::Node))
    }

    pub fn add_link(
        &mut self,
        id: &str,
        identifier: &str,
        element_type: &str,
        content: &str,
    ) -> Result<ElementId> {
        let shape = Shape::Link {
            content: content.to_string(),
        };
        self.push(element(id, identifier, element_type, shape))
    }

    pub fn add_arc(
        &mut self,
        id: &str,
        element_type: &str,
        source: ElementId,
        target: ElementId,
    ) -> Result<ElementId> {
        self.add_connector(id, element_type, ConnectorKind::Arc, source, target, Orientation::Forward)
    }

    pub fn add_pair(
        &mut self,
        id: &str,
        element_type: &str,
        source: ElementId,
        target: ElementId,
    ) -> Result<ElementId> {
        self.add_connector(id, element_type, ConnectorKind::Pair, source, target, Orientation::Forward)
    }

    pub fn add_connector(
        &mut self,
        id: &str,
        element_type: &str,
        kind: ConnectorKind,
        source: ElementId,
        target: ElementId,
        orientation: Orientation,
    ) -> Result<ElementId> {
        let shape = Shape::Connector(Connector {
            kind,
            source,
            target,
            orientation,
        });
        self.push(element(id, "", element_type, shape))
    }

    pub fn add_contour(&mut self, id: &str, identifier: &str, element_type: &str) -> Result<ElementId> {
        self.push(element(id, identifier, element_type, Shape::Contour(Contour::default())))
    }

    pub fn add_bus(&mut self, id: &str, identifier: &str, element_type: &str) -> Result<ElementId> {
        self.push(element(id, identifier, element_type, Shape::Bus))
    }

    /// Group `child` under `contour`
    pub fn add_to_contour(&mut self, contour: ElementId, child: ElementId) -> Result<()> {
        let target = &mut self.elements[contour.0];
        match &mut target.shape {
            Shape::Contour(c) => {
                if !c.children.contains(&child) {
                    c.children.push(child);
                }
                Ok(())
            }
            _ => Err(Error::NotAContour {
                id: target.id.clone(),
            }),
        }
    }

    pub fn get(&self, handle: ElementId) -> &Element {
        &self.elements[handle.0]
    }

    /// Look up an element by its document id
    pub fn find(&self, id: &str) -> Option<ElementId> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(i, e)| (ElementId(i), e))
    }

    /// Elements not grouped by any contour, in insertion order
    pub fn roots(&self) -> Vec<ElementId> {
        let nested: HashSet<ElementId> = self
            .elements
            .iter()
            .filter_map(Element::as_contour)
            .flat_map(|c| c.children.iter().copied())
            .collect();

        self.iter()
            .map(|(handle, _)| handle)
            .filter(|handle| !nested.contains(handle))
            .collect()
    }

    /// Reject contours that transitively contain themselves
    pub fn validate(&self) -> Result<()> {
        let mut done = HashSet::new();
        for (handle, element) in self.iter() {
            if element.as_contour().is_some() {
                let mut path = HashSet::new();
                self.check_contour(handle, &mut path, &mut done)?;
            }
        }
        Ok(())
    }

    fn check_contour(
        &self,
        contour: ElementId,
        path: &mut HashSet<ElementId>,
        done: &mut HashSet<ElementId>,
    ) -> Result<()> {
        if done.contains(&contour) {
            return Ok(());
        }
        if !path.insert(contour) {
            return Err(Error::CyclicContour {
                id: self.get(contour).id.clone(),
            });
        }
        if let Some(c) = self.get(contour).as_contour() {
            for &child in &c.children {
                if self.get(child).as_contour().is_some() {
                    self.check_contour(child, path, done)?;
                }
            }
        }
        path.remove(&contour);
        done.insert(contour);
        Ok(())
    }
}

fn element(id: &str, identifier: &str, element_type: &str, shape: Shape) -> Element {
    Element {
        id: id.to_string(),
        identifier: identifier.to_string(),
        element_type: element_type.to_string(),
        shape,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roots_exclude_contour_children() {
        let mut graph = ScgGraph::new();
        let n1 = graph.add_node("n1", "n1", "node/const/perm/general").unwrap();
        let n2 = graph.add_node("n2", "n2", "node/const/perm/general").unwrap();
        let c = graph.add_contour("c1", "", "contour").unwrap();
        graph.add_to_contour(c, n2).unwrap();

        assert_eq!(graph.roots(), vec![n1, c]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut graph = ScgGraph::new();
        graph.add_node("n1", "", "").unwrap();
        let err = graph.add_node("n1", "", "").unwrap_err();
        assert!(matches!(err, Error::DuplicateId { ref id } if id == "n1"));
    }

    #[test]
    fn test_add_to_non_contour() {
        let mut graph = ScgGraph::new();
        let n1 = graph.add_node("n1", "", "").unwrap();
        let n2 = graph.add_node("n2", "", "").unwrap();
        assert!(matches!(
            graph.add_to_contour(n1, n2),
            Err(Error::NotAContour { .. })
        ));
    }

    #[test]
    fn test_validate_detects_cycle() {
        let mut graph = ScgGraph::new();
        let outer = graph.add_contour("outer", "", "").unwrap();
        let inner = graph.add_contour("inner", "", "").unwrap();
        graph.add_to_contour(outer, inner).unwrap();
        assert!(graph.validate().is_ok());

        graph.add_to_contour(inner, outer).unwrap();
        assert!(matches!(graph.validate(), Err(Error::CyclicContour { .. })));
    }

    #[test]
    fn test_validate_allows_shared_contour() {
        let mut graph = ScgGraph::new();
        let a = graph.add_contour("a", "", "").unwrap();
        let b = graph.add_contour("b", "", "").unwrap();
        let shared = graph.add_contour("shared", "", "").unwrap();
        graph.add_to_contour(a, shared).unwrap();
        graph.add_to_contour(b, shared).unwrap();
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn test_tags() {
        let mut graph = ScgGraph::new();
        let n = graph.add_node("n", "", "").unwrap();
        let l = graph.add_link("l", "", "", "text").unwrap();
        let a = graph.add_arc("a", "", n, l).unwrap();
        let p = graph.add_pair("p", "", n, l).unwrap();
        assert_eq!(graph.get(n).tag(), Tag::Node);
        assert_eq!(graph.get(l).tag(), Tag::Link);
        assert!(graph.get(l).is_node());
        assert_eq!(graph.get(a).tag(), Tag::Arc);
        assert_eq!(graph.get(p).tag(), Tag::Pair);
    }
}
