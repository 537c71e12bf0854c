//! Question answering over the regulations corpus
//!
//! Sibling feature to the compliance engine; shares no state with it.
//! Callers depend only on the narrow [`RegulationsQa`] seam. The in-tree
//! [`ArticleIndex`] is a deterministic keyword retriever over an immutable
//! set of regulation chunks; embedding generation and model invocation live
//! behind the same trait, outside this workspace.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QaError {
    #[error("regulations corpus is empty")]
    EmptyCorpus,
    #[error("no corpus entry matches the question: {0}")]
    NoMatch(String),
}

/// Answers free-text questions against a regulations corpus
pub trait RegulationsQa {
    fn ask(&self, question: &str) -> Result<String, QaError>;
}

/// One chunk of the regulations corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub heading: String,
    pub body: String,
}

impl Article {
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
        }
    }
}

/// Immutable keyword index over regulation articles. Loaded once at startup;
/// lookups are pure, so repeated questions give repeated answers.
pub struct ArticleIndex {
    articles: Vec<Article>,
}

/// Question words that carry no retrieval signal
const STOPWORDS: &[&str] = &[
    "a", "about", "an", "and", "are", "by", "do", "does", "for", "how", "in", "is", "it", "of",
    "on", "the", "to", "what", "when", "which", "who", "with",
];

impl ArticleIndex {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    fn tokens(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty() && !STOPWORDS.contains(token))
            .map(|token| token.to_string())
            .collect()
    }

    /// Overlap score between a question and one article. Heading tokens
    /// count double: the heading names what the article is about.
    fn score(question_tokens: &[String], article: &Article) -> usize {
        let heading_tokens = Self::tokens(&article.heading);
        let body_tokens = Self::tokens(&article.body);

        question_tokens
            .iter()
            .map(|token| {
                let in_heading = heading_tokens.contains(token) as usize;
                let in_body = body_tokens.contains(token) as usize;
                2 * in_heading + in_body
            })
            .sum()
    }
}

impl RegulationsQa for ArticleIndex {
    /// Answer with the body of the best-matching article. Ties resolve to
    /// the earliest article, so answers are deterministic.
    fn ask(&self, question: &str) -> Result<String, QaError> {
        if self.articles.is_empty() {
            return Err(QaError::EmptyCorpus);
        }

        let question_tokens = Self::tokens(question);
        let best = self
            .articles
            .iter()
            .map(|article| Self::score(&question_tokens, article))
            .enumerate()
            .max_by(|(left_index, left), (right_index, right)| {
                left.cmp(right).then(right_index.cmp(left_index))
            });

        match best {
            Some((index, score)) if score > 0 => {
                let article = &self.articles[index];
                debug!(heading = %article.heading, score, "answered regulations query");
                Ok(article.body.clone())
            }
            _ => Err(QaError::NoMatch(question.to_string())),
        }
    }
}
