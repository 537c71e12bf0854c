//! Content-inspection rules
//!
//! Each rule is a pure function of (text, document type) packaged behind the
//! `Rule` trait. `RuleSet` runs registered rules in registration order and
//! concatenates their output, so adding a rule never touches existing ones.

pub mod forum;
pub mod governing_law;
pub mod jurisdiction;
pub mod language;
pub mod signatures;

use serde::{Deserialize, Serialize};
use shared_types::{DocumentType, Issue};

/// Where a flagged issue was found, for the markup step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkTarget {
    /// Index into the document's ordered text blocks
    Block(usize),
    /// Phrase located case-insensitively in the first block containing it
    Phrase(String),
}

/// A rule match: the issue plus where it was triggered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggeredIssue {
    pub target: MarkTarget,
    pub issue: Issue,
}

/// A content-inspection rule. Pure over its inputs: no side effects, same
/// input always yields the same issues.
pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;
    fn check(&self, text: &str, document_type: DocumentType) -> Vec<TriggeredIssue>;
}

/// Registered rules, run in registration order
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The standard ADGM red-flag rules, in fixed registration order
    pub fn adgm() -> Self {
        let mut set = Self::empty();
        set.register(Box::new(jurisdiction::JurisdictionRule));
        set.register(Box::new(forum::ForumRule));
        set.register(Box::new(governing_law::GoverningLawRule));
        set.register(Box::new(signatures::SignatureBlockRule));
        set.register(Box::new(language::BindingLanguageRule));
        set
    }

    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule against one document's text, concatenating output in
    /// registration order.
    pub fn run(&self, text: &str, document_type: DocumentType) -> Vec<TriggeredIssue> {
        self.rules
            .iter()
            .flat_map(|rule| rule.check(text, document_type))
            .collect()
    }

    /// Like [`RuleSet::run`], projected to the bare issues
    pub fn run_issues(&self, text: &str, document_type: DocumentType) -> Vec<Issue> {
        self.run(text, document_type)
            .into_iter()
            .map(|triggered| triggered.issue)
            .collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::adgm()
    }
}
