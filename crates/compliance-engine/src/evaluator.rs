//! Checklist completeness evaluation

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use shared_types::{ComplianceReport, DocumentType, Issue, Process, UploadedDocument};

use crate::checklist::required_documents;
use crate::error::EngineError;
use crate::process::classify_process;

/// The checklist half of a [`ComplianceReport`]; issues are filled in by the
/// caller from rule-engine output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistSummary {
    pub process: Process,
    pub documents_uploaded: usize,
    pub required_documents: usize,
    pub missing_documents: Vec<DocumentType>,
    pub is_complete: bool,
}

impl ChecklistSummary {
    pub fn into_report(self, issues: Vec<Issue>) -> ComplianceReport {
        ComplianceReport {
            process: self.process,
            documents_uploaded: self.documents_uploaded,
            required_documents: self.required_documents,
            missing_documents: self.missing_documents,
            is_complete: self.is_complete,
            issues,
        }
    }
}

/// Evaluate checklist completeness for a classified batch.
///
/// `classified_types[i]` must be the type of `batch[i]`; mismatched lengths
/// are a caller error and abort the request.
pub fn evaluate(
    batch: &[UploadedDocument],
    classified_types: &[DocumentType],
) -> Result<ChecklistSummary, EngineError> {
    if batch.len() != classified_types.len() {
        return Err(EngineError::InputMismatch {
            batch: batch.len(),
            types: classified_types.len(),
        });
    }
    Ok(summarize(batch, classified_types))
}

/// Infallible core of [`evaluate`], for callers that classified the batch
/// themselves and hold the lengths equal by construction.
pub(crate) fn summarize(
    batch: &[UploadedDocument],
    classified_types: &[DocumentType],
) -> ChecklistSummary {
    let process = classify_process(batch);
    let required = required_documents(process);

    // Set semantics: duplicates of a type satisfy its requirement once.
    let present: HashSet<DocumentType> = classified_types.iter().copied().collect();
    let missing: Vec<DocumentType> = required
        .iter()
        .copied()
        .filter(|document_type| !present.contains(document_type))
        .collect();

    ChecklistSummary {
        process,
        documents_uploaded: batch.len(),
        required_documents: required.len(),
        is_complete: missing.is_empty(),
        missing_documents: missing,
    }
}
