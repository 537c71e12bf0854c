//! Extraction collaborator interface.
//!
//! Parsing binary office formats lives outside this workspace; drivers hand
//! the engine an ordered paragraph view per file. The engine treats an
//! extraction failure as fatal for that document only.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unreadable source document: {0}")]
    Unreadable(String),
    #[error("corrupt source document: {0}")]
    Corrupt(String),
}

/// Produces the ordered paragraph text of an uploaded file.
pub trait TextExtractor {
    /// Handle type identifying the file for the implementation (path, blob
    /// id, in-memory buffer). Opaque to the engine.
    type Handle;

    fn extract(&self, handle: &Self::Handle) -> Result<Vec<String>, ExtractionError>;
}
