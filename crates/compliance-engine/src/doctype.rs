//! Document-type classification
//!
//! One classifier for the whole workspace: an ordered phrase table matched
//! case-insensitively against a filename or extracted text, first match
//! wins. Adding a type means adding a table row, not a branch.

use shared_types::DocumentType;

/// Ordered classification table. Longer phrases come before their prefixes
/// ("memorandum of association" before the "memorandum" filename shorthand)
/// so the most specific label wins.
pub const DOCUMENT_TYPE_RULES: &[(&str, DocumentType)] = &[
    ("articles of association", DocumentType::ArticlesOfAssociation),
    ("memorandum of association", DocumentType::MemorandumOfAssociation),
    ("board resolution", DocumentType::BoardResolution),
    (
        "incorporation application form",
        DocumentType::IncorporationApplicationForm,
    ),
    (
        "register of members and directors",
        DocumentType::RegisterOfMembersAndDirectors,
    ),
    ("ubo declaration form", DocumentType::UboDeclarationForm),
    ("license application", DocumentType::LicenseApplication),
    ("business plan", DocumentType::BusinessPlan),
    ("compliance policy", DocumentType::CompliancePolicy),
    ("memorandum", DocumentType::MemorandumOfAssociation),
];

/// Classify a single document from its filename or extracted text.
/// Total over all strings: unmatched input degrades to
/// `DocumentType::Unknown`, never an error.
pub fn classify_document(filename_or_text: &str) -> DocumentType {
    let input = filename_or_text.to_lowercase();
    DOCUMENT_TYPE_RULES
        .iter()
        .find(|(phrase, _)| input.contains(phrase))
        .map(|(_, document_type)| *document_type)
        .unwrap_or(DocumentType::Unknown)
}
