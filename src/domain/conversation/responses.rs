//! Canned response selection.
//!
//! Replies come from an ordered rule table evaluated first-match-wins. The two
//! contextual rules run before the keyword table; the default reply closes it,
//! so selection is total over every input string.

use serde::{Deserialize, Serialize};

use super::context::{ConversationContext, UserIntent};

/// Keyword predicate over lowercased text.
#[derive(Debug, Clone, Copy)]
pub enum Keywords {
    /// At least one of the words appears.
    Any(&'static [&'static str]),
    /// Every nested predicate holds.
    All(&'static [Keywords]),
    /// At least one nested predicate holds.
    Either(&'static [Keywords]),
}

impl Keywords {
    pub fn matches(&self, lower_text: &str) -> bool {
        match self {
            Self::Any(words) => words.iter().any(|word| lower_text.contains(word)),
            Self::All(parts) => parts.iter().all(|part| part.matches(lower_text)),
            Self::Either(parts) => parts.iter().any(|part| part.matches(lower_text)),
        }
    }
}

/// Which rule produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    LicenseValuation,
    LicenseSale,
    Greeting,
    HowItWorks,
    AcceptedLicenses,
    ValuationFactors,
    ProcessTiming,
    ContactRouting,
    Scheduling,
    Thanks,
    Adobe,
    Microsoft,
    PaymentMethods,
    Security,
    Reset,
    Fallback,
}

/// Work to perform after a reply is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideEffect {
    /// Show the lead form after a short pause.
    OpenLeadForm,
    /// Drop the reply and clear the whole conversation after a short pause.
    ResetConversation,
}

/// A selected reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub kind: ResponseKind,
    pub text: String,
    pub side_effect: Option<SideEffect>,
}

impl Reply {
    /// Returns true if the reply text should be appended to the transcript.
    pub fn is_appended(&self) -> bool {
        self.side_effect != Some(SideEffect::ResetConversation)
    }
}

/// A keyword-triggered canned response.
#[derive(Debug, Clone, Copy)]
pub struct ResponseRule {
    pub kind: ResponseKind,
    pub keywords: Keywords,
    pub text: &'static str,
    pub side_effect: Option<SideEffect>,
}

impl ResponseRule {
    fn reply(&self) -> Reply {
        Reply {
            kind: self.kind,
            text: self.text.to_string(),
            side_effect: self.side_effect,
        }
    }
}

pub const FALLBACK_REPLY: &str = "Thank you for your message. For specific questions about your license, I can connect you with our team who can provide expert guidance tailored to your situation. Would you like to speak with a licensing specialist?";

pub const GREETING_REPLY: &str =
    "Hello! How can I assist you with software license reselling today?";

/// Keyword rules in evaluation order.
pub static RESPONSE_RULES: [ResponseRule; 13] = [
    ResponseRule {
        kind: ResponseKind::Greeting,
        keywords: Keywords::Any(&["hi", "hello", "hey"]),
        text: GREETING_REPLY,
        side_effect: None,
    },
    ResponseRule {
        kind: ResponseKind::HowItWorks,
        keywords: Keywords::Either(&[
            Keywords::Any(&["sell"]),
            Keywords::All(&[Keywords::Any(&["how"]), Keywords::Any(&["work"])]),
        ]),
        text: "To sell your software license, we follow a simple 3-step process:\n\n1. Submit your license details through our contact form\n2. Receive a competitive offer within 24 hours\n3. Accept the offer and get paid within 3-5 business days\n\nWould you like me to help you get started?",
        side_effect: None,
    },
    ResponseRule {
        kind: ResponseKind::AcceptedLicenses,
        keywords: Keywords::All(&[
            Keywords::Any(&["license"]),
            Keywords::Any(&["accept", "type"]),
        ]),
        text: "We accept most major software licenses including:\n\n• Enterprise: Microsoft 365, Windows Server, Oracle, SAP\n• Design: Adobe Creative Cloud, AutoCAD, Maya\n• Development: Visual Studio, JetBrains, Unity Pro\n• Security: Norton, McAfee, Symantec\n• Cloud: AWS, Azure, Google Cloud\n\nDo you have a specific license you're looking to sell?",
        side_effect: None,
    },
    ResponseRule {
        kind: ResponseKind::ValuationFactors,
        keywords: Keywords::Any(&["worth", "value", "price"]),
        text: "The value of your license depends on several factors:\n\n• Software type and version\n• Remaining subscription time\n• Market demand\n• License transferability\n\nFor an accurate valuation, please let me know what software license you have, or fill out our valuation form.",
        side_effect: None,
    },
    ResponseRule {
        kind: ResponseKind::ProcessTiming,
        keywords: Keywords::Any(&["time", "long", "process"]),
        text: "Our process is quick and efficient:\n\n• Valuation: Within 24 hours of submission\n• Offer acceptance: Immediate\n• Payment processing: 3-5 business days\n\nThe entire process typically takes less than a week from start to finish.",
        side_effect: None,
    },
    ResponseRule {
        kind: ResponseKind::ContactRouting,
        keywords: Keywords::Any(&["contact", "speak", "talk"]),
        text: "I'd be happy to connect you with our team. Would you like to fill out a contact form, or would you prefer to schedule a call with one of our licensing experts?",
        side_effect: Some(SideEffect::OpenLeadForm),
    },
    ResponseRule {
        kind: ResponseKind::Scheduling,
        keywords: Keywords::Any(&["book", "schedule", "appoint"]),
        text: "I can help you schedule a free consultation with one of our licensing experts. Please provide your contact information and preferred time.",
        side_effect: Some(SideEffect::OpenLeadForm),
    },
    ResponseRule {
        kind: ResponseKind::Thanks,
        keywords: Keywords::Any(&["thank"]),
        text: "You're welcome! Is there anything else I can help you with regarding software license reselling?",
        side_effect: None,
    },
    ResponseRule {
        kind: ResponseKind::Adobe,
        keywords: Keywords::Any(&["adobe"]),
        text: "Yes, we frequently buy and sell Adobe licenses, particularly Creative Cloud subscriptions. These tend to have good resale value. Would you like a valuation for your Adobe license?",
        side_effect: None,
    },
    ResponseRule {
        kind: ResponseKind::Microsoft,
        keywords: Keywords::Any(&["microsoft", "windows", "office"]),
        text: "Microsoft licenses are in high demand. We accept Microsoft 365, Windows Server, SQL Server, and other Microsoft products. Would you like to know how much your Microsoft license is worth?",
        side_effect: None,
    },
    ResponseRule {
        kind: ResponseKind::PaymentMethods,
        keywords: Keywords::Any(&["payment", "pay", "money"]),
        text: "We offer multiple payment options including bank transfer, PayPal, and check. Once your license transfer is verified, payment is sent within 3-5 business days.",
        side_effect: None,
    },
    ResponseRule {
        kind: ResponseKind::Security,
        keywords: Keywords::Any(&["safe", "secure", "trust"]),
        text: "Security is our top priority. We use industry-standard encryption for all transactions, and your information is never shared with third parties. We've facilitated thousands of secure license transfers since 2022.",
        side_effect: None,
    },
    ResponseRule {
        kind: ResponseKind::Reset,
        keywords: Keywords::Any(&["clear", "reset", "restart"]),
        text: "I've reset our conversation. How can I help you with software license reselling today?",
        side_effect: Some(SideEffect::ResetConversation),
    },
];

/// Picks exactly one reply for every utterance.
#[derive(Debug, Clone, Copy)]
pub struct ResponseSelector {
    rules: &'static [ResponseRule],
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self {
            rules: &RESPONSE_RULES,
        }
    }
}

impl ResponseSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the reply for an utterance given the already updated context.
    pub fn select(&self, utterance: &str, context: &ConversationContext) -> Reply {
        if let Some(reply) = Self::contextual(context) {
            return reply;
        }

        let lower = utterance.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.keywords.matches(&lower))
            .map(ResponseRule::reply)
            .unwrap_or_else(|| Reply {
                kind: ResponseKind::Fallback,
                text: FALLBACK_REPLY.to_string(),
                side_effect: None,
            })
    }

    fn contextual(context: &ConversationContext) -> Option<Reply> {
        let license = context.license_type()?;
        match context.user_intent()? {
            UserIntent::Valuation => Some(Reply {
                kind: ResponseKind::LicenseValuation,
                text: format!(
                    "Based on current market trends, {} licenses can fetch a good price. To get an accurate valuation for your specific license, please provide more details about version, purchase date, and subscription type.",
                    license
                ),
                side_effect: None,
            }),
            UserIntent::Sell => Some(Reply {
                kind: ResponseKind::LicenseSale,
                text: format!(
                    "Great! We have high demand for {} licenses. Would you like to get a valuation or proceed directly to selling your license?",
                    license
                ),
                side_effect: None,
            }),
            UserIntent::Contact | UserIntent::Schedule => None,
        }
    }
}
