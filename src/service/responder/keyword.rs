//! Keyword-containment symptom classifier.
//!
//! Input is lower-cased once and scanned against a fixed, ordered list of
//! categories; the first category with any matching keyword wins. Matching is
//! plain substring containment, so a keyword also matches inside longer words
//! (`"cold"` matches `"scold"`).

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::base::{
    responses,
    types::{Reply, Severity},
};

use super::{GenericResponder, Responder};

// Extra methods on `Responder` applied by the keyword implementation.

impl Responder {
    pub fn keyword() -> Self {
        Self::new(Arc::new(KeywordResponder))
    }
}

// Categories.

/// Symptom category, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Emergency,
    BloodRelated,
    General,
    Default,
}

impl Category {
    /// All categories, highest precedence first.
    pub const ALL: [Category; 4] = [Category::Emergency, Category::BloodRelated, Category::General, Category::Default];

    /// Lower-case keywords that select this category.
    ///
    /// `Default` has none; it is the fallthrough.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Emergency => &["chest pain", "heart attack", "breathing", "unconscious"],
            Category::BloodRelated => &["bleeding", "blood", "anemia", "fatigue"],
            Category::General => &["fever", "headache", "cold"],
            Category::Default => &[],
        }
    }

    pub fn response(&self) -> &'static str {
        match self {
            Category::Emergency => responses::EMERGENCY_RESPONSE,
            Category::BloodRelated => responses::BLOOD_RELATED_RESPONSE,
            Category::General => responses::GENERAL_RESPONSE,
            Category::Default => responses::DEFAULT_RESPONSE,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Category::Emergency => Severity::Emergency,
            Category::BloodRelated => Severity::Medium,
            Category::General | Category::Default => Severity::Low,
        }
    }

    /// Whether an already lower-cased input contains one of this category's keywords.
    fn matches(&self, lowered: &str) -> bool {
        self.keywords().iter().any(|k| lowered.contains(k))
    }

    /// Pick the first category, in precedence order, that matches `input`.
    pub fn detect(input: &str) -> Category {
        let lowered = input.to_lowercase();

        Category::ALL
            .into_iter()
            .find(|c| c.matches(&lowered))
            .unwrap_or(Category::Default)
    }
}

/// Classify free text into a canned response and its severity.
///
/// Total over all input; text that matches nothing gets the default reply.
pub fn classify(input: &str) -> (&'static str, Severity) {
    let category = Category::detect(input);

    (category.response(), category.severity())
}

// Specific implementations.

/// Stateless keyword responder.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordResponder;

impl GenericResponder for KeywordResponder {
    #[instrument(name = "KeywordResponder::respond", skip_all)]
    fn respond(&self, input: &str) -> Reply {
        let category = Category::detect(input);

        debug!("Classified input as {:?}.", category);

        Reply {
            text: category.response().to_string(),
            severity: category.severity(),
        }
    }
}

// Tests.
