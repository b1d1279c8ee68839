//! SCs translation - converts an SCg element graph into SCs text.
//!
//! - Identifier resolution (identifier)
//! - Node reachability across contours (collect)
//! - Ternary arc detection (classify)
//! - Scope writer and main identifier blocks (writer)
//!
//! Pure string building over a read-only graph.

pub mod classify;
pub mod collect;
pub mod identifier;
pub mod keywords;
pub mod types_converter;
pub mod writer;

pub use identifier::{resolve_identifier, ResolvedIdentifiers, ScsIdentifier};
pub use types_converter::{DefaultTypeConverter, TypeConverter};
pub use writer::{write_main_identifier, Buffer, ScsWriter, WriteState};

use log::debug;

use crate::error::Result;
use crate::types::ScgGraph;
use crate::ScsWriteOptions;

/// Translate a whole graph: root scope first, then one main identifier
/// block per element that carries a natural-language label.
pub fn write_scs(
    graph: &ScgGraph,
    converter: &dyn TypeConverter,
    options: &ScsWriteOptions,
) -> Result<String> {
    graph.validate()?;

    let identifiers = ResolvedIdentifiers::resolve(graph);
    let writer = ScsWriter::new(graph, &identifiers, converter, options);

    let mut state = WriteState::new();
    let mut buffer = Buffer::new();
    writer.write(&graph.roots(), 0, &mut state, &mut buffer);

    if options.write_main_identifiers {
        for (_, idtf) in identifiers.iter() {
            if let Some(main) = idtf.main.as_deref().filter(|m| !m.is_empty()) {
                write_main_identifier(&mut buffer, 0, &idtf.system, main);
            }
        }
    }

    debug!(elements = graph.len(), written = state.written.len(); "SCs translation finished");
    Ok(buffer.into_string())
}
