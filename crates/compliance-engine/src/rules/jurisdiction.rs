use crate::patterns::{contains_any, ADGM_KEYWORDS, JURISDICTION_KEYWORDS};
use crate::rules::{MarkTarget, Rule, TriggeredIssue};
use shared_types::{DocumentType, Issue, Severity};

/// Flags documents that speak about jurisdiction without naming ADGM
pub struct JurisdictionRule;

impl Rule for JurisdictionRule {
    fn name(&self) -> &'static str {
        "jurisdiction-clause"
    }

    fn check(&self, text: &str, _document_type: DocumentType) -> Vec<TriggeredIssue> {
        let mut flagged = Vec::new();

        if contains_any(text, JURISDICTION_KEYWORDS) && !contains_any(text, ADGM_KEYWORDS) {
            flagged.push(TriggeredIssue {
                target: MarkTarget::Phrase("jurisdiction".to_string()),
                issue: Issue {
                    section: "Jurisdiction Clause".to_string(),
                    issue: "Jurisdiction not specified as ADGM".to_string(),
                    severity: Severity::High,
                    suggestion: "Specify ADGM as the governing jurisdiction".to_string(),
                },
            });
        }

        flagged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Vec<TriggeredIssue> {
        JurisdictionRule.check(text, DocumentType::MemorandumOfAssociation)
    }

    #[test]
    fn test_flags_jurisdiction_without_adgm() {
        let flagged = run("2. No jurisdiction specified");
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].issue.severity, Severity::High);
        assert!(flagged[0].issue.suggestion.contains("ADGM"));
    }

    #[test]
    fn test_accepts_adgm_jurisdiction_any_case() {
        assert!(run("2. Jurisdiction: ADGM Courts").is_empty());
        assert!(run("jurisdiction rests with adgm").is_empty());
        assert!(run("jurisdiction of the Abu Dhabi Global Market").is_empty());
    }

    #[test]
    fn test_silent_documents_are_not_flagged() {
        assert!(run("1. Name: Example Company Ltd.").is_empty());
    }

    #[test]
    fn test_trigger_points_at_the_jurisdiction_mention() {
        let flagged = run("The jurisdiction for disputes is left open.");
        assert_eq!(
            flagged[0].target,
            MarkTarget::Phrase("jurisdiction".to_string())
        );
    }
}
