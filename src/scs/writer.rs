//! SCs writer - emits the linear notation for one scope and recurses into
//! nested contours.
//!
//! Per scope: node declarations, then connectors, then contours and buses.
//! A single write-once set is threaded through the whole recursion so no
//! element is declared twice, however many contours reach it.

use std::collections::HashSet;

use log::{debug, trace, warn};

use super::classify::{find_incident_arc, EdgeClassification};
use super::collect::{collect_nodes, scope_nodes};
use super::identifier::ResolvedIdentifiers;
use super::keywords::{
    Arrows, Brackets, Prefixes, DEFAULT_NODE_TYPE, ELEMENT_END, NREL_MAIN_IDTF,
    RELATION_PREFIXES,
};
use super::types_converter::TypeConverter;
use crate::types::{Connector, ElementId, Orientation, ScgGraph, Shape};
use crate::ScsWriteOptions;

/// Output text accumulated during one translation
#[derive(Debug, Default)]
pub struct Buffer {
    text: String,
}

impl Buffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_tabs(&mut self, depth: usize) -> &mut Self {
        for _ in 0..depth {
            self.text.push('\t');
        }
        self
    }

    pub fn push(&mut self, s: &str) -> &mut Self {
        self.text.push_str(s);
        self
    }

    /// Indented line terminated by a newline
    pub fn line(&mut self, depth: usize, s: &str) -> &mut Self {
        self.add_tabs(depth).push(s).push("\n")
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Sets shared by every scope of one top-level write
#[derive(Debug, Default)]
pub struct WriteState {
    pub written: HashSet<ElementId>,
    pub visited_contours: HashSet<ElementId>,
}

impl WriteState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub struct ScsWriter<'a> {
    graph: &'a ScgGraph,
    identifiers: &'a ResolvedIdentifiers,
    converter: &'a dyn TypeConverter,
    options: &'a ScsWriteOptions,
}

impl<'a> ScsWriter<'a> {
    pub fn new(
        graph: &'a ScgGraph,
        identifiers: &'a ResolvedIdentifiers,
        converter: &'a dyn TypeConverter,
        options: &'a ScsWriteOptions,
    ) -> Self {
        Self {
            graph,
            identifiers,
            converter,
            options,
        }
    }

    /// Write `scope` at `depth`, skipping anything already in `state.written`
    pub fn write(
        &self,
        scope: &[ElementId],
        depth: usize,
        state: &mut WriteState,
        buffer: &mut Buffer,
    ) {
        debug!(depth = depth, elements = scope.len(); "Writing scope");

        // 1. Node declarations
        let nodes = if self.options.hoist_nested_nodes {
            collect_nodes(self.graph, scope, &mut state.visited_contours)
        } else {
            scope_nodes(self.graph, scope)
        };
        for node in nodes {
            if !state.written.insert(node) {
                trace!(id = self.graph.get(node).id.as_str(); "Node already written");
                continue;
            }
            self.write_node(node, depth, buffer);
        }

        // 2-3. Connectors of this scope only
        let classes = EdgeClassification::classify(self.graph, scope);
        for &handle in scope {
            let Some(connector) = self.graph.get(handle).as_connector() else {
                continue;
            };
            if classes.is_attribute(handle) {
                trace!(id = self.graph.get(handle).id.as_str(); "Attribute arc consumed by its target");
                continue;
            }
            if !state.written.insert(handle) {
                continue;
            }
            self.write_connector(handle, connector, scope, &classes, state, depth, buffer);
        }

        // 4. Contours and buses
        for &handle in scope {
            let element = self.graph.get(handle);
            match &element.shape {
                Shape::Contour(contour) => {
                    if !state.written.insert(handle) {
                        continue;
                    }
                    let name = self.identifiers.name_or(self.graph, handle, Prefixes::CONTOUR);
                    buffer.line(depth, &format!("{} = {}", name, Brackets::CONTOUR_OPEN));
                    self.write(&contour.children, depth + 1, state, buffer);
                    buffer.line(
                        depth,
                        &format!("{}{}", Brackets::CONTOUR_CLOSE, ELEMENT_END),
                    );
                }
                Shape::Bus => {
                    if !state.written.insert(handle) {
                        continue;
                    }
                    let name = self.identifiers.name_or(self.graph, handle, Prefixes::BUS);
                    let keyword = self
                        .converter
                        .node_keyword(&element.element_type)
                        .map(str::to_string)
                        .filter(|k| !k.is_empty())
                        .unwrap_or_else(|| {
                            if element.element_type.is_empty() {
                                DEFAULT_NODE_TYPE.to_string()
                            } else {
                                element.element_type.clone()
                            }
                        });
                    buffer.line(depth, &name);
                    self.write_type_line(&keyword, depth + 1, buffer);
                }
                _ => {}
            }
        }
    }

    fn write_node(&self, node: ElementId, depth: usize, buffer: &mut Buffer) {
        let element = self.graph.get(node);
        let name = self.identifiers.name_or(self.graph, node, Prefixes::NODE);
        let keyword = match self.converter.node_keyword(&element.element_type) {
            Some(k) if !k.is_empty() => k,
            _ => {
                if !element.element_type.is_empty() {
                    warn!(id = element.id.as_str(), element_type = element.element_type.as_str(); "Unknown node type");
                }
                DEFAULT_NODE_TYPE
            }
        };

        buffer.line(depth, &name);
        self.write_type_line(keyword, depth + 1, buffer);

        if let Shape::Link { content } = &element.shape {
            if !content.is_empty() {
                buffer.line(
                    depth + 1,
                    &format!(
                        "{} {}{}{}{}",
                        Arrows::CONTENT,
                        Brackets::CONTENT_OPEN,
                        content,
                        Brackets::CONTENT_CLOSE,
                        ELEMENT_END
                    ),
                );
            }
        }
    }

    fn write_type_line(&self, keyword: &str, depth: usize, buffer: &mut Buffer) {
        buffer.line(depth, &format!("{} {}{}", Arrows::TYPE_OF, keyword, ELEMENT_END));
    }

    #[allow(clippy::too_many_arguments)]
    fn write_connector(
        &self,
        handle: ElementId,
        connector: &Connector,
        scope: &[ElementId],
        classes: &EdgeClassification,
        state: &mut WriteState,
        depth: usize,
        buffer: &mut Buffer,
    ) {
        let element_type = &self.graph.get(handle).element_type;
        let source = self.endpoint_name(connector.source);
        let target = self.endpoint_name(connector.target);

        if RELATION_PREFIXES.iter().any(|p| element_type.starts_with(p)) {
            let statement = match connector.orientation {
                Orientation::Forward => format!(
                    "{} {} {}: {}{}",
                    source,
                    Arrows::RELATION_FORWARD,
                    element_type,
                    target,
                    ELEMENT_END
                ),
                Orientation::Reverse => format!(
                    "{} {} {}: {}{}",
                    target,
                    Arrows::RELATION_REVERSE,
                    element_type,
                    source,
                    ELEMENT_END
                ),
            };
            buffer.line(depth, &statement);
            return;
        }

        let symbol = self.designation(element_type);

        if classes.is_complex(handle) {
            let incident = find_incident_arc(self.graph, scope, handle).and_then(|arc| {
                self.graph
                    .get(arc)
                    .as_connector()
                    .map(|c| (arc, c.source))
            });
            match incident {
                Some((arc, incident_source)) => {
                    state.written.insert(arc);
                    let statement = format!(
                        "{} {} {}: {}{}",
                        source,
                        symbol,
                        self.endpoint_name(incident_source),
                        target,
                        ELEMENT_END
                    );
                    buffer.line(depth, &statement);
                    return;
                }
                None => {
                    warn!(id = self.graph.get(handle).id.as_str(); "Complex arc without incident arc, writing binary form");
                }
            }
        }

        buffer.line(
            depth,
            &format!("{} {} {}{}", source, symbol, target, ELEMENT_END),
        );
    }

    fn endpoint_name(&self, handle: ElementId) -> String {
        self.identifiers.name_or(self.graph, handle, Prefixes::NODE)
    }

    fn designation(&self, element_type: &str) -> &str {
        match self.converter.connector_designation(element_type) {
            Some(symbol) if !symbol.is_empty() => symbol,
            _ => Arrows::DEFAULT_CONNECTOR,
        }
    }
}

/// Append the natural-language label block of one element:
/// a blank line, the identifier, and `<= nrel_main_idtf: [text];;`.
pub fn write_main_identifier(
    buffer: &mut Buffer,
    depth: usize,
    system_identifier: &str,
    main_identifier: &str,
) {
    buffer.push("\n");
    buffer.line(depth, system_identifier);
    buffer.line(
        depth + 1,
        &format!(
            "{} {}: {}{}{}{}",
            Arrows::RELATION_REVERSE,
            NREL_MAIN_IDTF,
            Brackets::CONTENT_OPEN,
            main_identifier,
            Brackets::CONTENT_CLOSE,
            ELEMENT_END
        ),
    );
}
