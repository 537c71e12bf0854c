pub mod extract;
pub mod types;

pub use extract::{ExtractionError, TextExtractor};
pub use types::{
    ComplianceReport, DocumentBody, DocumentType, Issue, Process, Severity, UploadedDocument,
};
