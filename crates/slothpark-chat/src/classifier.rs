//! Keyword classifier for visitor questions.
//!
//! Rules are checked in order and the first rule with any keyword found in
//! the lowercased input wins. Matching is plain substring search, so "this"
//! counts as a greeting because it contains "hi".

use crate::types::ResponseCategory;

/// A category and the keywords that select it.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub category: ResponseCategory,
    pub keywords: &'static [&'static str],
}

impl KeywordRule {
    /// Returns the first keyword contained in `lowered`, if any.
    pub fn find_in(&self, lowered: &str) -> Option<&'static str> {
        self.keywords.iter().copied().find(|kw| lowered.contains(kw))
    }
}

/// Classifier rules in priority order. `Default` has no rule; it is the
/// fallback.
pub const RULES: [KeywordRule; 6] = [
    KeywordRule {
        category: ResponseCategory::Greeting,
        keywords: &["hi", "hello", "hey"],
    },
    KeywordRule {
        category: ResponseCategory::About,
        keywords: &["about", "what is", "tell me about"],
    },
    KeywordRule {
        category: ResponseCategory::Tours,
        keywords: &["tour", "visit"],
    },
    KeywordRule {
        category: ResponseCategory::Hours,
        keywords: &["hour", "open", "time"],
    },
    KeywordRule {
        category: ResponseCategory::Tickets,
        keywords: &["ticket", "price", "cost"],
    },
    KeywordRule {
        category: ResponseCategory::Facts,
        keywords: &["fact", "know", "tell me"],
    },
];

/// Sort a raw visitor message into exactly one category.
pub fn classify(input: &str) -> ResponseCategory {
    let lowered = input.to_lowercase();
    for rule in &RULES {
        if let Some(keyword) = rule.find_in(&lowered) {
            tracing::debug!(category = %rule.category, keyword, "Message classified");
            return rule.category;
        }
    }
    tracing::debug!("No keyword matched, using default replies");
    ResponseCategory::Default
}
