//! SCs identifier resolution
//!
//! Every element gets a system identifier that is legal in SCs. Raw
//! identifiers written in natural language are moved to a separate main
//! identifier and the system identifier is made up from the element id.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::keywords::{Prefixes, VAR_MARKER};
use crate::types::{Element, ElementId, ScgGraph, Tag};

lazy_static! {
    static ref RE_SYSTEM_IDTF: Regex = Regex::new(r"^[0-9a-zA-Z_]*$").unwrap();
    static ref RE_NATURAL_IDTF: Regex =
        Regex::new(r"^[0-9a-zA-Z_\x{0400}-\x{045F}*' ]*$").unwrap();
}

/// Output-side identifiers of one element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScsIdentifier {
    /// Legal SCs identifier (an alias for connectors)
    pub system: String,
    /// Natural-language label, kept verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
}

/// Whether `identifier` can be written as an SCs identifier as is
pub fn is_system_identifier(identifier: &str) -> bool {
    RE_SYSTEM_IDTF.is_match(identifier)
}

/// Whether `identifier` looks like natural-language text
pub fn is_natural_identifier(identifier: &str) -> bool {
    RE_NATURAL_IDTF.is_match(identifier)
}

pub fn is_variable(element_type: &str) -> bool {
    element_type.contains(VAR_MARKER)
}

/// Replace every character that is not legal in an identifier with `_`
pub fn sanitize_id(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// `##<prefix>_<id>`
pub fn make_alias(prefix: &str, element_id: &str) -> String {
    format!("{}{}_{}", Prefixes::ALIAS, prefix, sanitize_id(element_id))
}

fn generated_prefix(tag: Tag) -> &'static str {
    match tag {
        Tag::Node | Tag::Link => Prefixes::NODE,
        Tag::Contour => Prefixes::CONTOUR,
        Tag::Bus => Prefixes::BUS,
        Tag::Arc | Tag::Pair => Prefixes::CONNECTOR,
    }
}

fn generate_identifier(tag: Tag, element_id: &str, is_var: bool) -> String {
    let var = if is_var { Prefixes::VARIABLE } else { "" };
    format!("{}{}_{}", var, generated_prefix(tag), sanitize_id(element_id))
}

/// Compute the output-side identifiers of `element`
pub fn resolve_identifier(element: &Element) -> ScsIdentifier {
    let tag = element.tag();
    let is_var = is_variable(&element.element_type);

    let mut candidate = element.identifier.clone();
    let mut main = None;
    if !is_system_identifier(&candidate) {
        if is_natural_identifier(&candidate) {
            main = Some(candidate.clone());
        }
        candidate.clear();
    }

    let mut system = if candidate.is_empty() {
        generate_identifier(tag, &element.id, is_var)
    } else if is_var && !candidate.starts_with(Prefixes::VARIABLE) {
        format!("{}{}", Prefixes::VARIABLE, candidate)
    } else {
        candidate
    };

    // Connectors are always anonymous
    if matches!(tag, Tag::Arc | Tag::Pair) {
        system = make_alias(Prefixes::CONNECTOR, &element.id);
        main = None;
    }

    ScsIdentifier { system, main }
}

/// Identifiers of every element of a graph, indexed by [`ElementId`]
#[derive(Debug, Clone, Default)]
pub struct ResolvedIdentifiers {
    entries: Vec<ScsIdentifier>,
}

impl ResolvedIdentifiers {
    pub fn resolve(graph: &ScgGraph) -> Self {
        Self {
            entries: graph.iter().map(|(_, e)| resolve_identifier(e)).collect(),
        }
    }

    pub fn get(&self, handle: ElementId) -> &ScsIdentifier {
        &self.entries[handle.index()]
    }

    /// The system identifier, or `<kind>_<id>` when it is empty
    pub fn name_or(&self, graph: &ScgGraph, handle: ElementId, kind: &str) -> String {
        let system = &self.get(handle).system;
        if system.is_empty() {
            format!("{}_{}", kind, graph.get(handle).id)
        } else {
            system.clone()
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &ScsIdentifier)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, idtf)| (ElementId::from_index(i), idtf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Shape;

    fn node(id: &str, identifier: &str, element_type: &str) -> Element {
        Element {
            id: id.to_string(),
            identifier: identifier.to_string(),
            element_type: element_type.to_string(),
            shape: Shape::Node,
        }
    }

    #[test]
    fn test_legal_identifier_kept() {
        let idtf = resolve_identifier(&node("1", "concept_set", "node/const/perm/class"));
        assert_eq!(idtf.system, "concept_set");
        assert_eq!(idtf.main, None);
    }

    #[test]
    fn test_natural_language_routed_to_main() {
        let idtf = resolve_identifier(&node("42", "Пример", "node/const/perm/general"));
        assert_eq!(idtf.system, "node_42");
        assert_eq!(idtf.main.as_deref(), Some("Пример"));
    }

    #[test]
    fn test_natural_language_with_spaces() {
        let idtf = resolve_identifier(&node("7", "ёжик в тумане", "node/const/perm/general"));
        assert_eq!(idtf.system, "node_7");
        assert_eq!(idtf.main.as_deref(), Some("ёжик в тумане"));
    }

    #[test]
    fn test_illegal_non_text_dropped() {
        let idtf = resolve_identifier(&node("9", "a+b", "node/const/perm/general"));
        assert_eq!(idtf.system, "node_9");
        assert_eq!(idtf.main, None);
    }

    #[test]
    fn test_empty_identifier_generated_with_dashes_replaced() {
        let idtf = resolve_identifier(&node("ab-12-cd", "", "node/const/perm/general"));
        assert_eq!(idtf.system, "node_ab_12_cd");
    }

    #[test]
    fn test_variable_prefixing() {
        let idtf = resolve_identifier(&node("5", "x1", "node/var/perm/general"));
        assert_eq!(idtf.system, "_x1");

        let idtf = resolve_identifier(&node("5", "_x1", "node/var/perm/general"));
        assert_eq!(idtf.system, "_x1");

        let idtf = resolve_identifier(&node("5", "", "node/var/perm/general"));
        assert_eq!(idtf.system, "_node_5");
    }

    #[test]
    fn test_connector_alias() {
        let mut graph = ScgGraph::new();
        let n1 = graph.add_node("n1", "n1", "").unwrap();
        let n2 = graph.add_node("n2", "n2", "").unwrap();
        let a = graph.add_arc("a-1", "pair/const/pos/perm/orient/membership", n1, n2).unwrap();

        let idtf = resolve_identifier(graph.get(a));
        assert_eq!(idtf.system, "##connector_a_1");
        assert_eq!(idtf.main, None);
    }

    #[test]
    fn test_connector_never_gets_main_identifier() {
        let element = Element {
            id: "p1".to_string(),
            identifier: "связь".to_string(),
            element_type: String::new(),
            shape: Shape::Connector(crate::types::Connector {
                kind: crate::types::ConnectorKind::Pair,
                source: ElementId::from_index(0),
                target: ElementId::from_index(0),
                orientation: Default::default(),
            }),
        };
        let idtf = resolve_identifier(&element);
        assert_eq!(idtf.system, "##connector_p1");
        assert_eq!(idtf.main, None);
    }

    #[test]
    fn test_generated_identifiers_are_legal() {
        for id in ["a.b", "x-y-z", "ж1", "{uuid}"] {
            let idtf = resolve_identifier(&node(id, "", ""));
            assert!(is_system_identifier(&idtf.system), "{}", idtf.system);
        }
    }

    #[test]
    fn test_name_or_fallback() {
        let mut graph = ScgGraph::new();
        let n = graph.add_node("n1", "", "").unwrap();
        let resolved = ResolvedIdentifiers::resolve(&graph);
        assert_eq!(resolved.name_or(&graph, n, "node"), "node_n1");
        assert_eq!(resolved.get(n).system, "node_n1");
    }
}
