//! Output properties checked over a graph mixing every element kind

use std::collections::HashMap;

use scg2scs::scs::identifier::{is_system_identifier, resolve_identifier};
use scg2scs::{translate, ScgGraph, ScsWriteOptions, Tag};

const NODE: &str = "node/const/perm/general";
const VAR_NODE: &str = "node/var/perm/general";
const MEMBERSHIP: &str = "pair/const/pos/perm/orient/membership";

/// Two contours sharing a third one, natural-language and variable
/// identifiers, a ternary arc and a named relation.
fn sample_graph() -> ScgGraph {
    let mut graph = ScgGraph::new();
    let n1 = graph.add_node("n1", "concept_a", NODE).unwrap();
    let n2 = graph.add_node("n2", "Понятие", NODE).unwrap();
    let n3 = graph.add_node("n-3", "", NODE).unwrap();
    let v1 = graph.add_node("v1", "x1", VAR_NODE).unwrap();
    let l1 = graph.add_link("l1", "", NODE, "some text").unwrap();

    let left = graph.add_contour("left", "", "").unwrap();
    let right = graph.add_contour("right", "", "").unwrap();
    let shared = graph.add_contour("shared", "shared_part", "").unwrap();
    graph.add_to_contour(left, shared).unwrap();
    graph.add_to_contour(right, shared).unwrap();
    graph.add_to_contour(shared, n3).unwrap();
    graph.add_to_contour(shared, l1).unwrap();
    graph.add_to_contour(left, n1).unwrap();
    graph.add_to_contour(right, n1).unwrap();

    let a1 = graph.add_arc("a1", MEMBERSHIP, n1, n2).unwrap();
    graph.add_arc("a2", MEMBERSHIP, v1, a1).unwrap();
    graph.add_arc("a3", "nrel_part", n2, v1).unwrap();
    let inner = graph.add_arc("a4", MEMBERSHIP, n3, l1).unwrap();
    graph.add_to_contour(shared, inner).unwrap();
    graph.add_bus("b1", "", "bus").unwrap();
    graph
}

/// Identifiers on declaration lines: a line followed by an indented `<- type;;`
fn declared_identifiers(scs: &str) -> Vec<String> {
    let lines: Vec<&str> = scs.lines().collect();
    lines
        .windows(2)
        .filter(|pair| pair[1].trim_start().starts_with("<- "))
        .map(|pair| pair[0].trim().to_string())
        .collect()
}

#[test]
fn every_element_is_declared_once() {
    let graph = sample_graph();
    for hoist_nested_nodes in [true, false] {
        let options = ScsWriteOptions {
            hoist_nested_nodes,
            ..Default::default()
        };
        let scs = translate(&graph, Some(options)).unwrap();

        let mut counts: HashMap<String, usize> = HashMap::new();
        for idtf in declared_identifiers(&scs) {
            *counts.entry(idtf).or_default() += 1;
        }
        for (idtf, count) in &counts {
            assert_eq!(*count, 1, "{} declared {} times in:\n{}", idtf, count, scs);
        }
        assert_eq!(scs.matches("shared_part = [*").count(), 1, "{}", scs);
        // five nodes and one bus
        assert_eq!(counts.len(), 6, "{}", scs);
    }
}

#[test]
fn declared_identifiers_are_legal() {
    let scs = translate(&sample_graph(), None).unwrap();
    for idtf in declared_identifiers(&scs) {
        assert!(is_system_identifier(&idtf), "illegal identifier {:?}", idtf);
    }
}

#[test]
fn natural_language_text_is_only_a_main_identifier() {
    let scs = translate(&sample_graph(), None).unwrap();
    assert!(!declared_identifiers(&scs).iter().any(|i| i == "Понятие"));
    assert!(scs.contains("\nnode_n2\n\t<= nrel_main_idtf: [Понятие];;\n"), "{}", scs);
}

#[test]
fn variables_start_with_underscore() {
    let graph = sample_graph();
    for (_, element) in graph.iter() {
        if element.element_type.contains("/var/") {
            assert!(resolve_identifier(element).system.starts_with('_'));
        }
    }
    let scs = translate(&graph, None).unwrap();
    assert!(declared_identifiers(&scs).contains(&"_x1".to_string()));
}

#[test]
fn connectors_are_anonymous() {
    let graph = sample_graph();
    for (_, element) in graph.iter() {
        if matches!(element.tag(), Tag::Arc | Tag::Pair) {
            let idtf = resolve_identifier(element);
            assert_eq!(idtf.system, format!("##connector_{}", element.id));
            assert!(idtf.main.is_none());
        }
    }
}

#[test]
fn ternary_arc_consumes_attribute_arc() {
    let scs = translate(&sample_graph(), None).unwrap();
    assert_eq!(scs.matches("concept_a -> _x1: node_n2;;").count(), 1, "{}", scs);
    assert!(!scs.contains("_x1 -> "), "{}", scs);
    assert!(!scs.contains("##connector"), "{}", scs);
}

#[test]
fn named_relation_and_nested_connector() {
    let scs = translate(&sample_graph(), None).unwrap();
    assert!(scs.contains("node_n2 => nrel_part: _x1;;\n"), "{}", scs);
    assert!(scs.contains("\t\tnode_n_3 -> node_l1;;\n"), "{}", scs);
}
