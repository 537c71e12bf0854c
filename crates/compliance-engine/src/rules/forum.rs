use crate::patterns::{matched_keywords, FOREIGN_FORUM_KEYWORDS};
use crate::rules::{MarkTarget, Rule, TriggeredIssue};
use shared_types::{DocumentType, Issue, Severity};

/// Flags references to dispute forums outside the ADGM Courts
pub struct ForumRule;

impl Rule for ForumRule {
    fn name(&self) -> &'static str {
        "dispute-forum"
    }

    fn check(&self, text: &str, _document_type: DocumentType) -> Vec<TriggeredIssue> {
        matched_keywords(text, FOREIGN_FORUM_KEYWORDS)
            .into_iter()
            .map(|forum| TriggeredIssue {
                target: MarkTarget::Phrase(forum.to_string()),
                issue: Issue {
                    section: "Dispute Resolution".to_string(),
                    issue: "Incorrect jurisdiction referenced".to_string(),
                    severity: Severity::High,
                    suggestion: "Update to ADGM Courts".to_string(),
                },
            })
            .collect()
    }
}
