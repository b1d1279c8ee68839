//! scg2scs - Translate SCg semantic-network graphs into SCs linear notation
//!
//! This library takes an already parsed SCg graph (nodes, arcs, pairs,
//! contours and buses) and writes the equivalent SCs text.
//!
//! # Example
//!
//! ```rust
//! use scg2scs::{translate, ScgGraph};
//!
//! let mut graph = ScgGraph::new();
//! let n1 = graph.add_node("n1", "n1", "node/const/perm/general").unwrap();
//! let n2 = graph.add_node("n2", "n2", "node/const/perm/general").unwrap();
//! graph.add_arc("a1", "nrel_foo", n1, n2).unwrap();
//!
//! let scs = translate(&graph, None).unwrap();
//! assert!(scs.contains("n1 => nrel_foo: n2;;"));
//! ```
//!
//! # Output
//!
//! - Node declarations (`n1` / `<- sc_node;;`), with link content
//! - Named relations (`n1 => nrel_foo: n2;;`), binary and ternary connectors
//! - Contours as `[* ... *]` blocks, buses
//! - `nrel_main_idtf` blocks for natural-language identifiers

pub mod error;
pub mod parser;
pub mod scs;
pub mod types;

pub use error::{Error, Result};
pub use parser::parse_scg;
pub use scs::{DefaultTypeConverter, ScsIdentifier, TypeConverter};
pub use types::*;

/// Translate a graph to SCs text using the built-in type tables.
///
/// # Example
/// ```rust
/// let mut graph = scg2scs::ScgGraph::new();
/// graph.add_node("n1", "Пример", "node/const/perm/general").unwrap();
/// let scs = scg2scs::translate(&graph, None).unwrap();
/// assert!(scs.contains("nrel_main_idtf: [Пример];;"));
/// ```
pub fn translate(graph: &ScgGraph, options: Option<ScsWriteOptions>) -> Result<String> {
    let opts = options.unwrap_or_default();
    scs::write_scs(graph, &DefaultTypeConverter, &opts)
}

/// Load a JSON element model and translate it to SCs text.
///
/// # Example
/// ```rust
/// let input = r#"{ "elements": [ { "tag": "node", "id": "n1", "identifier": "n1" } ] }"#;
/// let scs = scg2scs::translate_json(input, None).unwrap();
/// assert_eq!(scs, "n1\n\t<- sc_node;;\n");
/// ```
pub fn translate_json(input: &str, options: Option<ScsWriteOptions>) -> Result<String> {
    let graph = parse_scg(input)?;
    translate(&graph, options)
}

/// Resolved identifiers keyed by element id, as pretty JSON
pub fn identifiers_json(graph: &ScgGraph) -> Result<String> {
    let resolved = scs::ResolvedIdentifiers::resolve(graph);
    let table: std::collections::BTreeMap<&str, &ScsIdentifier> = resolved
        .iter()
        .map(|(handle, idtf)| (graph.get(handle).id.as_str(), idtf))
        .collect();
    Ok(serde_json::to_string_pretty(&table)?)
}

/// Configuration options for SCs output
#[derive(Debug, Clone)]
pub struct ScsWriteOptions {
    /// true = declare nodes of nested contours in the owning scope,
    /// false = declare them inside their contour body. Default: true
    pub hoist_nested_nodes: bool,
    /// Append `nrel_main_idtf` blocks for natural-language identifiers. Default: true
    pub write_main_identifiers: bool,
}

impl Default for ScsWriteOptions {
    fn default() -> Self {
        Self {
            hoist_nested_nodes: true,
            write_main_identifiers: true,
        }
    }
}
