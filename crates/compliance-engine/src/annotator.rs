//! Inline markup of flagged text
//!
//! Render-agnostic: markers are structured data a renderer can turn into a
//! coloured run, a review comment, or a terminal highlight. The input blocks
//! are never mutated; annotation returns a new sequence with the same block
//! order and count, only adding markers.

use serde::{Deserialize, Serialize};
use shared_types::Severity;

use crate::error::EngineError;
use crate::rules::{MarkTarget, TriggeredIssue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleHint {
    Emphasis,
    Warning,
}

/// One inline marker attached to a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// Text a renderer inserts after the block
    pub note: String,
    pub style: StyleHint,
}

/// A text block plus the markers attached to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedBlock {
    pub text: String,
    pub markers: Vec<Marker>,
}

/// Annotate a document's blocks with its triggered issues.
///
/// Every triggered issue produces exactly one marker; an issue whose target
/// cannot be located fails the whole call, so nothing is dropped silently.
pub fn annotate(
    blocks: &[String],
    triggered: &[TriggeredIssue],
) -> Result<Vec<AnnotatedBlock>, EngineError> {
    let mut annotated: Vec<AnnotatedBlock> = blocks
        .iter()
        .map(|block| AnnotatedBlock {
            text: block.clone(),
            markers: Vec::new(),
        })
        .collect();

    let lowered: Vec<String> = blocks.iter().map(|block| block.to_lowercase()).collect();

    for item in triggered {
        let index = match &item.target {
            MarkTarget::Block(index) if *index < blocks.len() => *index,
            MarkTarget::Block(index) => {
                return Err(EngineError::MarkupTargetNotFound(format!(
                    "block {index} out of range ({} blocks)",
                    blocks.len()
                )));
            }
            MarkTarget::Phrase(phrase) => {
                let needle = phrase.to_lowercase();
                match lowered.iter().position(|block| block.contains(&needle)) {
                    Some(index) => index,
                    None => {
                        return Err(EngineError::MarkupTargetNotFound(format!(
                            "phrase {phrase:?} not present in any block"
                        )));
                    }
                }
            }
        };

        annotated[index].markers.push(Marker {
            note: format!(" [Comment: {}]", item.issue.issue),
            style: if item.issue.severity == Severity::High {
                StyleHint::Warning
            } else {
                StyleHint::Emphasis
            },
        });
    }

    Ok(annotated)
}
