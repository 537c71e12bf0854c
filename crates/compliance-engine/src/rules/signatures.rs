use crate::patterns::{contains_any, SIGNATURE_KEYWORDS};
use crate::rules::{MarkTarget, Rule, TriggeredIssue};
use shared_types::{DocumentType, Issue, Severity};

/// Constitutional documents must carry an execution section
const REQUIRES_SIGNATURE: &[DocumentType] = &[
    DocumentType::ArticlesOfAssociation,
    DocumentType::MemorandumOfAssociation,
    DocumentType::BoardResolution,
];

/// Flags constitutional documents with no signature block
pub struct SignatureBlockRule;

impl Rule for SignatureBlockRule {
    fn name(&self) -> &'static str {
        "signature-block"
    }

    fn check(&self, text: &str, document_type: DocumentType) -> Vec<TriggeredIssue> {
        let mut flagged = Vec::new();

        if REQUIRES_SIGNATURE.contains(&document_type) && !contains_any(text, SIGNATURE_KEYWORDS) {
            flagged.push(TriggeredIssue {
                // absence has no phrase to point at; anchor to the heading block
                target: MarkTarget::Block(0),
                issue: Issue {
                    section: "Execution".to_string(),
                    issue: format!("{document_type} has no signature section"),
                    severity: Severity::Medium,
                    suggestion: "Add a signature block for the authorised signatories"
                        .to_string(),
                },
            });
        }

        flagged
    }
}
