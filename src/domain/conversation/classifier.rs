//! Keyword-based intent classifier.
//!
//! Matching is case-insensitive substring search. There is no tokenization,
//! so "mayan" mentions Maya and "offering" signals a sale.

use super::catalog::LicenseCategory;
use super::context::{ConversationContext, UserIntent};

/// One keyword group and the intent it signals.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub intent: UserIntent,
    pub keywords: &'static [&'static str],
}

impl IntentRule {
    fn matches(&self, lower_text: &str) -> bool {
        self.keywords.iter().any(|keyword| lower_text.contains(keyword))
    }
}

/// Intent groups in priority order; the first match wins.
pub const INTENT_RULES: [IntentRule; 4] = [
    IntentRule {
        intent: UserIntent::Sell,
        keywords: &["sell", "offer"],
    },
    IntentRule {
        intent: UserIntent::Valuation,
        keywords: &["worth", "value", "price"],
    },
    IntentRule {
        intent: UserIntent::Contact,
        keywords: &["contact", "speak", "talk"],
    },
    IntentRule {
        intent: UserIntent::Schedule,
        keywords: &["book", "schedule", "appoint"],
    },
];

/// What a single utterance revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Detection {
    pub license: Option<&'static str>,
    pub intent: Option<UserIntent>,
}

impl Detection {
    pub fn is_empty(&self) -> bool {
        self.license.is_none() && self.intent.is_none()
    }
}

/// Inspects utterances and folds what they reveal into the context.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Detects the license and intent mentioned in one utterance.
    ///
    /// Every category is scanned in catalog order and each one's first match
    /// replaces the previous, so the last matching category wins.
    pub fn detect(&self, utterance: &str) -> Detection {
        let lower = utterance.to_lowercase();

        let license = LicenseCategory::ALL
            .iter()
            .filter_map(|category| category.first_mentioned_in(&lower))
            .last();

        let intent = INTENT_RULES
            .iter()
            .find(|rule| rule.matches(&lower))
            .map(|rule| rule.intent);

        Detection { license, intent }
    }

    /// Returns the context updated with what the utterance revealed.
    ///
    /// Anything not mentioned is carried over unchanged.
    pub fn classify(&self, utterance: &str, context: &ConversationContext) -> ConversationContext {
        let mut updated = context.clone();
        self.apply(self.detect(utterance), &mut updated);
        updated
    }

    /// Applies a detection to the context in place.
    pub fn apply(&self, detection: Detection, context: &mut ConversationContext) {
        if let Some(license) = detection.license {
            context.record_license(license);
        }
        if let Some(intent) = detection.intent {
            context.record_intent(intent);
        }
    }
}
