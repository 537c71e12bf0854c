//! Batch-level process classification
//!
//! An upload batch belongs to exactly one regulatory process, inferred from
//! filename signals across the whole batch.

use shared_types::{Process, UploadedDocument};

/// Ordered classification rules. Rules are tried top to bottom against every
/// filename in the batch; the first rule with any match decides the process,
/// regardless of file order.
pub const PROCESS_RULES: &[(&str, Process)] = &[
    ("article", Process::CompanyIncorporation),
    ("incorporation", Process::CompanyIncorporation),
    ("memorandum", Process::CompanyIncorporation),
    ("board resolution", Process::CompanyIncorporation),
    ("register of members", Process::CompanyIncorporation),
    ("ubo declaration", Process::CompanyIncorporation),
    ("license", Process::Licensing),
    ("business plan", Process::Licensing),
    ("compliance policy", Process::Licensing),
];

/// Classify the process for a batch of uploads. Total: an empty batch or a
/// batch with no recognised signal maps to `Process::Unknown`.
pub fn classify_process(batch: &[UploadedDocument]) -> Process {
    let filenames: Vec<String> = batch
        .iter()
        .map(|document| document.filename.to_lowercase())
        .collect();

    for (keyword, process) in PROCESS_RULES {
        if filenames.iter().any(|filename| filename.contains(keyword)) {
            return *process;
        }
    }

    Process::Unknown
}
