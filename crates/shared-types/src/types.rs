use serde::{Deserialize, Serialize};

/// Regulatory process a batch of uploads belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Process {
    #[serde(rename = "Company Incorporation")]
    CompanyIncorporation,
    #[serde(rename = "Licensing")]
    Licensing,
    #[serde(rename = "Unknown Process")]
    Unknown,
}

impl Process {
    /// Get the canonical process label
    pub fn name(&self) -> &'static str {
        match self {
            Process::CompanyIncorporation => "Company Incorporation",
            Process::Licensing => "Licensing",
            Process::Unknown => "Unknown Process",
        }
    }
}

impl std::fmt::Display for Process {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Canonical document types appearing in ADGM formation/licensing packets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "Articles of Association")]
    ArticlesOfAssociation,
    #[serde(rename = "Memorandum of Association")]
    MemorandumOfAssociation,
    #[serde(rename = "Board Resolution")]
    BoardResolution,
    #[serde(rename = "Incorporation Application Form")]
    IncorporationApplicationForm,
    #[serde(rename = "Register of Members and Directors")]
    RegisterOfMembersAndDirectors,
    #[serde(rename = "UBO Declaration Form")]
    UboDeclarationForm,
    #[serde(rename = "License Application")]
    LicenseApplication,
    #[serde(rename = "Business Plan")]
    BusinessPlan,
    #[serde(rename = "Compliance Policy")]
    CompliancePolicy,
    #[serde(rename = "Unknown Document")]
    Unknown,
}

impl DocumentType {
    /// Get the canonical document-type label
    pub fn name(&self) -> &'static str {
        match self {
            DocumentType::ArticlesOfAssociation => "Articles of Association",
            DocumentType::MemorandumOfAssociation => "Memorandum of Association",
            DocumentType::BoardResolution => "Board Resolution",
            DocumentType::IncorporationApplicationForm => "Incorporation Application Form",
            DocumentType::RegisterOfMembersAndDirectors => "Register of Members and Directors",
            DocumentType::UboDeclarationForm => "UBO Declaration Form",
            DocumentType::LicenseApplication => "License Application",
            DocumentType::BusinessPlan => "Business Plan",
            DocumentType::CompliancePolicy => "Compliance Policy",
            DocumentType::Unknown => "Unknown Document",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A single drafting defect flagged by the rule engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub section: String,
    pub issue: String,
    pub severity: Severity,
    pub suggestion: String,
}

/// Batch-level analysis result for one upload request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub process: Process,
    pub documents_uploaded: usize,
    pub required_documents: usize,
    pub missing_documents: Vec<DocumentType>,
    pub is_complete: bool,
    pub issues: Vec<Issue>,
}

/// Text view of one uploaded file, produced by the extraction collaborator.
///
/// The engine never owns file bytes. Extraction failures are recorded here
/// so the rest of the batch keeps processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedDocument {
    pub filename: String,
    pub body: DocumentBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentBody {
    /// Ordered paragraphs as extracted from the source file
    Extracted(Vec<String>),
    /// Extraction failed; classification falls back to the filename
    Unavailable(String),
}

impl UploadedDocument {
    pub fn extracted(filename: impl Into<String>, paragraphs: Vec<String>) -> Self {
        Self {
            filename: filename.into(),
            body: DocumentBody::Extracted(paragraphs),
        }
    }

    pub fn unavailable(filename: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            body: DocumentBody::Unavailable(reason.into()),
        }
    }

    /// Full extracted text, if any, with paragraphs joined by newlines
    pub fn text(&self) -> Option<String> {
        match &self.body {
            DocumentBody::Extracted(paragraphs) => Some(paragraphs.join("\n")),
            DocumentBody::Unavailable(_) => None,
        }
    }
}
