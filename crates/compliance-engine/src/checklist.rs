//! Regulatory checklists: which document types each process requires
//!
//! Loaded once as static data and never mutated at runtime. Order within a
//! checklist is the order missing documents are reported in.

use shared_types::{DocumentType, Process};

/// Processes that carry a checklist
pub const CHECKLISTED_PROCESSES: &[Process] =
    &[Process::CompanyIncorporation, Process::Licensing];

const INCORPORATION_CHECKLIST: &[DocumentType] = &[
    DocumentType::ArticlesOfAssociation,
    DocumentType::MemorandumOfAssociation,
    DocumentType::BoardResolution,
    DocumentType::IncorporationApplicationForm,
    DocumentType::RegisterOfMembersAndDirectors,
];

const LICENSING_CHECKLIST: &[DocumentType] = &[
    DocumentType::LicenseApplication,
    DocumentType::BusinessPlan,
    DocumentType::CompliancePolicy,
];

/// Required document types for a process, in reporting order.
/// Unknown processes have no checklist.
pub fn required_documents(process: Process) -> &'static [DocumentType] {
    match process {
        Process::CompanyIncorporation => INCORPORATION_CHECKLIST,
        Process::Licensing => LICENSING_CHECKLIST,
        Process::Unknown => &[],
    }
}
