//! Loaders that build an [`ScgGraph`] from an external representation

pub mod json;

use crate::error::Result;
use crate::types::ScgGraph;

/// Parse a JSON element model and check it for contour cycles
pub fn parse_scg(text: &str) -> Result<ScgGraph> {
    let graph = json::parse_scg_json(text)?;
    graph.validate()?;
    Ok(graph)
}
