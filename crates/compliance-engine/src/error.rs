use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Caller supplied a batch and a classification list of different
    /// lengths. Aborts the request rather than silently dropping data.
    #[error("batch/classification mismatch: {batch} documents but {types} type labels")]
    InputMismatch { batch: usize, types: usize },

    /// The annotator was asked to mark a block or phrase that does not
    /// exist in the document. Aborts the annotation step only.
    #[error("markup target not found: {0}")]
    MarkupTargetNotFound(String),
}
