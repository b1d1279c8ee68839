//! JSON element model loader
//!
//! The document is a flat list of elements. Connector endpoints and contour
//! children refer to other elements by id and may point forward in the list.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{
    Connector, ConnectorKind, Contour, Element, ElementId, Orientation, ScgGraph, Shape,
};

/// Top-level JSON document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScgDocument {
    pub elements: Vec<ScgElementDoc>,
}

/// Element kind in the JSON document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScgTag {
    Node,
    Link,
    Arc,
    Pair,
    Contour,
    Bus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScgElementDoc {
    pub tag: ScgTag,
    pub id: String,
    #[serde(default)]
    pub identifier: String,
    #[serde(default, rename = "type")]
    pub element_type: String,
    /// Link payload
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    /// Relation asserted from the target's side
    #[serde(default)]
    pub reversed: bool,
    #[serde(default)]
    pub children: Vec<String>,
}

/// Parse a JSON element model into a graph
pub fn parse_scg_json(text: &str) -> Result<ScgGraph> {
    let doc: ScgDocument = serde_json::from_str(text)?;
    build_graph(&doc)
}

/// Build a graph from an already deserialized document
pub fn build_graph(doc: &ScgDocument) -> Result<ScgGraph> {
    // Element ids are positional, so references can be resolved up front
    let mut index = std::collections::HashMap::new();
    for (i, e) in doc.elements.iter().enumerate() {
        if index.insert(e.id.as_str(), i).is_some() {
            return Err(Error::DuplicateId { id: e.id.clone() });
        }
    }

    let resolve = |owner: &ScgElementDoc, reference: Option<&String>| -> Result<ElementId> {
        let reference = reference.map(String::as_str).unwrap_or_default();
        index
            .get(reference)
            .map(|&i| ElementId::from_index(i))
            .ok_or_else(|| Error::UnknownReference {
                element: owner.id.clone(),
                reference: reference.to_string(),
            })
    };

    let mut graph = ScgGraph::new();
    for e in &doc.elements {
        let shape = match e.tag {
            ScgTag::Node => Shape::Node,
            ScgTag::Link => Shape::Link {
                content: e.content.clone(),
            },
            ScgTag::Arc | ScgTag::Pair => Shape::Connector(Connector {
                kind: if e.tag == ScgTag::Arc {
                    ConnectorKind::Arc
                } else {
                    ConnectorKind::Pair
                },
                source: resolve(e, e.source.as_ref())?,
                target: resolve(e, e.target.as_ref())?,
                orientation: if e.reversed {
                    Orientation::Reverse
                } else {
                    Orientation::Forward
                },
            }),
            ScgTag::Contour => {
                let children = e
                    .children
                    .iter()
                    .map(|child| resolve(e, Some(child)))
                    .collect::<Result<Vec<_>>>()?;
                Shape::Contour(Contour { children })
            }
            ScgTag::Bus => Shape::Bus,
        };

        graph.push(Element {
            id: e.id.clone(),
            identifier: e.identifier.clone(),
            element_type: e.element_type.clone(),
            shape,
        })?;
    }

    log::debug!(elements = graph.len(); "Loaded element model");
    Ok(graph)
}
