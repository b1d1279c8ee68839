//! Error types for loading and translating element models.
//!
//! Translation itself degrades to fallbacks instead of failing; errors only
//! come from reading the model, resolving its references, or rejecting a
//! structurally invalid graph.

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid element model JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate element id `{id}`")]
    DuplicateId { id: String },

    #[error("Element `{element}` references unknown element `{reference}`")]
    UnknownReference { element: String, reference: String },

    #[error("Element `{id}` is not a contour")]
    NotAContour { id: String },

    #[error("Contour `{id}` contains itself")]
    CyclicContour { id: String },
}
