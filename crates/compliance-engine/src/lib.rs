//! Document compliance analysis for ADGM formation and licensing packets
//!
//! Classifies a batch of uploaded documents, evaluates the regulatory
//! checklist for the inferred process, and runs red-flag rules over each
//! document's extracted text. All components are pure over their inputs and
//! the report is deterministic for a given batch: documents are evaluated in
//! upload order and rules in registration order.

pub mod annotator;
pub mod checklist;
pub mod doctype;
pub mod error;
pub mod evaluator;
pub mod extractors;
pub mod patterns;
pub mod process;
pub mod rules;

use tracing::debug;

use shared_types::{
    ComplianceReport, DocumentBody, DocumentType, Issue, Severity, UploadedDocument,
};

use crate::annotator::AnnotatedBlock;
use crate::error::EngineError;
use crate::rules::{RuleSet, TriggeredIssue};

/// Per-document result, kept for the markup step
#[derive(Debug, Clone)]
pub struct DocumentAnalysis {
    pub filename: String,
    pub document_type: DocumentType,
    pub triggered: Vec<TriggeredIssue>,
}

/// Batch result: the report plus per-document detail
#[derive(Debug, Clone)]
pub struct BatchAnalysis {
    pub report: ComplianceReport,
    pub documents: Vec<DocumentAnalysis>,
}

/// ComplianceEngine entry point
pub struct ComplianceEngine {
    rules: RuleSet,
}

impl ComplianceEngine {
    pub fn new() -> Self {
        Self {
            rules: RuleSet::adgm(),
        }
    }

    /// Engine with a caller-assembled rule set
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Classify one document, preferring the filename and falling back to
    /// the extracted text when the filename alone is inconclusive. Total:
    /// never fails, degrading to `DocumentType::Unknown`.
    pub fn classify(&self, document: &UploadedDocument) -> DocumentType {
        match doctype::classify_document(&document.filename) {
            DocumentType::Unknown => match document.text() {
                Some(text) => doctype::classify_document(&text),
                None => DocumentType::Unknown,
            },
            document_type => document_type,
        }
    }

    /// Analyse a batch and produce the compliance report
    pub fn analyze(&self, batch: &[UploadedDocument]) -> ComplianceReport {
        self.analyze_detailed(batch).report
    }

    /// Analyse a batch, keeping per-document triggers for annotation
    pub fn analyze_detailed(&self, batch: &[UploadedDocument]) -> BatchAnalysis {
        let classified: Vec<DocumentType> =
            batch.iter().map(|document| self.classify(document)).collect();
        let summary = evaluator::summarize(batch, &classified);

        let mut documents = Vec::with_capacity(batch.len());
        let mut issues = Vec::new();

        for (document, document_type) in batch.iter().zip(classified) {
            let triggered = match &document.body {
                DocumentBody::Extracted(paragraphs) => {
                    self.rules.run(&paragraphs.join("\n"), document_type)
                }
                DocumentBody::Unavailable(reason) => {
                    // recovered locally: the batch keeps processing
                    issues.push(text_unavailable_issue(&document.filename, reason));
                    Vec::new()
                }
            };
            issues.extend(triggered.iter().map(|item| item.issue.clone()));
            documents.push(DocumentAnalysis {
                filename: document.filename.clone(),
                document_type,
                triggered,
            });
        }

        debug!(
            documents = batch.len(),
            process = %summary.process,
            issues = issues.len(),
            "analysed upload batch"
        );

        BatchAnalysis {
            report: summary.into_report(issues),
            documents,
        }
    }

    /// Annotate one analysed document with its triggered issues
    pub fn annotate_document(
        &self,
        document: &UploadedDocument,
        triggered: &[TriggeredIssue],
    ) -> Result<Vec<AnnotatedBlock>, EngineError> {
        match &document.body {
            DocumentBody::Extracted(paragraphs) => annotator::annotate(paragraphs, triggered),
            DocumentBody::Unavailable(reason) => Err(EngineError::MarkupTargetNotFound(format!(
                "no extracted text for {}: {reason}",
                document.filename
            ))),
        }
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn text_unavailable_issue(filename: &str, reason: &str) -> Issue {
    Issue {
        section: "Document Text".to_string(),
        issue: format!("Document text unavailable: {filename} ({reason})"),
        severity: Severity::Low,
        suggestion: "Re-upload a readable copy of the document".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Process;

    fn doc(filename: &str, paragraphs: &[&str]) -> UploadedDocument {
        UploadedDocument::extracted(
            filename,
            paragraphs.iter().map(|p| p.to_string()).collect(),
        )
    }

    fn full_incorporation_batch() -> Vec<UploadedDocument> {
        vec![
            doc(
                "Articles of Association.docx",
                &[
                    "ARTICLES OF ASSOCIATION",
                    "1. Name: Example Company Ltd.",
                    "2. Jurisdiction: ADGM Courts",
                    "Signed for and on behalf of the company.",
                ],
            ),
            doc(
                "Memorandum of Association.docx",
                &[
                    "MEMORANDUM OF ASSOCIATION",
                    "The subscribers wish to form a company under the jurisdiction of ADGM.",
                    "Signed by each subscriber.",
                ],
            ),
            doc(
                "Board Resolution.docx",
                &[
                    "BOARD RESOLUTION",
                    "Resolved, that the company be incorporated in ADGM.",
                    "Signature of the chairperson.",
                ],
            ),
            doc(
                "Incorporation Application Form.docx",
                &["Application for incorporation in ADGM."],
            ),
            doc(
                "Register of Members and Directors.docx",
                &["Member 1: Example Holding Ltd."],
            ),
        ]
    }

    #[test]
    fn test_complete_compliant_batch_produces_clean_report() {
        let engine = ComplianceEngine::new();
        let report = engine.analyze(&full_incorporation_batch());

        assert_eq!(report.process, Process::CompanyIncorporation);
        assert_eq!(report.documents_uploaded, 5);
        assert_eq!(report.required_documents, 5);
        assert_eq!(report.missing_documents, Vec::new());
        assert!(report.is_complete);
        assert_eq!(report.issues, Vec::new());
    }

    #[test]
    fn test_single_memorandum_flags_jurisdiction_and_missing_documents() {
        let engine = ComplianceEngine::new();
        let report = engine.analyze(&[doc(
            "Memorandum of Association.docx",
            &[
                "MEMORANDUM OF ASSOCIATION",
                "1. Name: Test Company",
                "2. No jurisdiction specified",
            ],
        )]);

        assert_eq!(report.process, Process::CompanyIncorporation);
        assert!(!report.is_complete);
        assert_eq!(report.missing_documents.len(), 4);

        let high: Vec<&Issue> = report
            .issues
            .iter()
            .filter(|issue| issue.severity == Severity::High)
            .collect();
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].issue, "Jurisdiction not specified as ADGM");
        assert_eq!(high[0].suggestion, "Specify ADGM as the governing jurisdiction");
    }

    #[test]
    fn test_extraction_failure_degrades_to_low_severity_issue() {
        let engine = ComplianceEngine::new();
        let batch = vec![
            UploadedDocument::unavailable("Articles of Association.docx", "corrupt file"),
            doc("Board Resolution.docx", &[
                "BOARD RESOLUTION",
                "Signed by the chairperson.",
            ]),
        ];
        let report = engine.analyze(&batch);

        // the unreadable document still counts for the checklist via its filename
        assert_eq!(report.process, Process::CompanyIncorporation);
        assert!(!report
            .missing_documents
            .contains(&DocumentType::ArticlesOfAssociation));

        let unavailable: Vec<&Issue> = report
            .issues
            .iter()
            .filter(|issue| issue.issue.starts_with("Document text unavailable"))
            .collect();
        assert_eq!(unavailable.len(), 1);
        assert_eq!(unavailable[0].severity, Severity::Low);
    }

    #[test]
    fn test_classification_falls_back_to_document_text() {
        let engine = ComplianceEngine::new();
        let document = doc("scan001.docx", &["ARTICLES OF ASSOCIATION", "1. Name"]);
        assert_eq!(engine.classify(&document), DocumentType::ArticlesOfAssociation);
    }

    #[test]
    fn test_reports_are_byte_identical_across_runs() {
        let engine = ComplianceEngine::new();
        let batch = vec![doc(
            "Memorandum of Association.docx",
            &["MEMORANDUM OF ASSOCIATION", "No jurisdiction specified"],
        )];

        let first = serde_json::to_vec(&engine.analyze(&batch)).unwrap();
        let second = serde_json::to_vec(&engine.analyze(&batch)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_issue_order_follows_upload_then_registration_order() {
        let engine = ComplianceEngine::new();
        let batch = vec![
            doc("Articles of Association.docx", &[
                "ARTICLES OF ASSOCIATION",
                "Disputes go to the UAE Federal Courts.",
                "Signed for and on behalf of the company.",
            ]),
            doc("Memorandum of Association.docx", &[
                "MEMORANDUM OF ASSOCIATION",
                "No jurisdiction specified.",
                "Signed by each subscriber.",
            ]),
        ];
        let report = engine.analyze(&batch);

        // first document's forum issue precedes second document's
        // jurisdiction issue, in upload order
        assert_eq!(report.issues.len(), 2);
        assert_eq!(report.issues[0].section, "Dispute Resolution");
        assert_eq!(report.issues[1].section, "Jurisdiction Clause");
    }

    #[test]
    fn test_detailed_analysis_feeds_annotation() {
        let engine = ComplianceEngine::new();
        let batch = vec![doc(
            "Memorandum of Association.docx",
            &[
                "MEMORANDUM OF ASSOCIATION",
                "1. Name: Test Company",
                "2. No jurisdiction specified",
                "Signed by each subscriber.",
            ],
        )];
        let analysis = engine.analyze_detailed(&batch);
        assert_eq!(analysis.documents.len(), 1);

        let annotated = engine
            .annotate_document(&batch[0], &analysis.documents[0].triggered)
            .unwrap();
        assert_eq!(annotated.len(), 4);
        assert_eq!(annotated[2].markers.len(), 1);
    }

    #[test]
    fn test_annotating_unextracted_document_fails_cleanly() {
        let engine = ComplianceEngine::new();
        let document = UploadedDocument::unavailable("broken.docx", "unreadable");
        let err = engine.annotate_document(&document, &[]).unwrap_err();
        assert!(matches!(err, EngineError::MarkupTargetNotFound(_)));
    }
}
