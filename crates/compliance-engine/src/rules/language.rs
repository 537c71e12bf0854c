use crate::patterns::{matched_keywords, WEAK_LANGUAGE_KEYWORDS};
use crate::rules::{MarkTarget, Rule, TriggeredIssue};
use shared_types::{DocumentType, Issue, Severity};

/// Flags non-binding obligation phrasing
pub struct BindingLanguageRule;

impl Rule for BindingLanguageRule {
    fn name(&self) -> &'static str {
        "binding-language"
    }

    fn check(&self, text: &str, _document_type: DocumentType) -> Vec<TriggeredIssue> {
        matched_keywords(text, WEAK_LANGUAGE_KEYWORDS)
            .into_iter()
            .map(|phrase| TriggeredIssue {
                target: MarkTarget::Phrase(phrase.to_string()),
                issue: Issue {
                    section: "Obligations".to_string(),
                    issue: format!("Non-binding obligation language: \"{phrase}\""),
                    severity: Severity::Low,
                    suggestion: "Use binding language such as \"shall\" or \"must\"".to_string(),
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Vec<TriggeredIssue> {
        BindingLanguageRule.check(text, DocumentType::CompliancePolicy)
    }

    #[test]
    fn test_flags_each_weak_phrase() {
        let flagged = run(
            "The company shall use best endeavours to file returns as soon as possible.",
        );
        assert_eq!(flagged.len(), 2);
        assert!(flagged.iter().all(|f| f.issue.severity == Severity::Low));
    }

    #[test]
    fn test_binding_drafting_passes() {
        assert!(run("The company shall file annual returns within 30 days.").is_empty());
    }
}
