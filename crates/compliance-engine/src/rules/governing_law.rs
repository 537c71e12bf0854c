use crate::extractors::clauses::extract_governing_law;
use crate::rules::{MarkTarget, Rule, TriggeredIssue};
use shared_types::{DocumentType, Issue, Severity};

/// Flags governing-law clauses that name a body of law other than ADGM
pub struct GoverningLawRule;

impl Rule for GoverningLawRule {
    fn name(&self) -> &'static str {
        "governing-law"
    }

    fn check(&self, text: &str, _document_type: DocumentType) -> Vec<TriggeredIssue> {
        let mut flagged = Vec::new();

        if let Some(law) = extract_governing_law(text) {
            let names_adgm = law.contains("adgm") || law.contains("abu dhabi global market");
            if !names_adgm {
                flagged.push(TriggeredIssue {
                    target: MarkTarget::Phrase(law.clone()),
                    issue: Issue {
                        section: "Governing Law Clause".to_string(),
                        issue: format!("Governing law specified as \"{law}\" instead of ADGM"),
                        severity: Severity::High,
                        suggestion: "Amend the governing-law clause to ADGM".to_string(),
                    },
                });
            }
        }

        flagged
    }
}
