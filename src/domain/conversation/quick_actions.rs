//! Shortcut buttons and suggested questions.

/// Suggested questions shown while the conversation is still short.
pub const EXAMPLE_QUESTIONS: [&str; 6] = [
    "How do I sell my software license?",
    "What licenses do you accept?",
    "How much is my license worth?",
    "How long does the process take?",
    "Do you buy Adobe licenses?",
    "Can I schedule a consultation?",
];

/// Example questions stay visible below this many messages.
pub const EXAMPLE_QUESTION_THRESHOLD: usize = 3;

/// A one-click action offered next to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickAction {
    /// Scripted exchange, then the lead form.
    Valuation,
    /// Scripted exchange, then the lead form.
    Schedule,
    /// Sent through the normal chat path.
    Licenses,
    /// Sent through the normal chat path.
    Help,
}

/// How a quick action is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickActionScript {
    /// Append this user and bot pair, then open the lead form.
    Scripted { user: &'static str, bot: &'static str },
    /// Send this text as if the visitor typed it.
    Ask(&'static str),
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [Self::Valuation, Self::Schedule, Self::Licenses, Self::Help];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Valuation => "Valuation",
            Self::Schedule => "Schedule",
            Self::Licenses => "Licenses",
            Self::Help => "Help",
        }
    }

    pub fn script(&self) -> QuickActionScript {
        match self {
            Self::Valuation => QuickActionScript::Scripted {
                user: "I want a license valuation.",
                bot: "To provide an accurate valuation of your software license, we'll need some details. Please fill out the form below, and our team will get back to you with a valuation within 24 hours.",
            },
            Self::Schedule => QuickActionScript::Scripted {
                user: "I want to schedule a consultation.",
                bot: "I'd be happy to help you schedule a consultation with one of our licensing experts. Please provide your contact information and preferred time.",
            },
            Self::Licenses => QuickActionScript::Ask("What licenses do you accept?"),
            Self::Help => QuickActionScript::Ask("How does the process work?"),
        }
    }
}

/// Returns true if the example questions should be offered.
pub fn shows_example_questions(message_count: usize, lead_form_open: bool) -> bool {
    message_count < EXAMPLE_QUESTION_THRESHOLD && !lead_form_open
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn examples_visible_only_early_and_without_form() {
        assert!(shows_example_questions(1, false));
        assert!(shows_example_questions(2, false));
        assert!(!shows_example_questions(3, false));
        assert!(!shows_example_questions(1, true));
    }

    #[test]
    fn chat_actions_ask_fixed_questions() {
        assert_eq!(
            QuickAction::Licenses.script(),
            QuickActionScript::Ask("What licenses do you accept?")
        );
        assert_eq!(
            QuickAction::Help.script(),
            QuickActionScript::Ask("How does the process work?")
        );
    }

    #[test]
    fn scripted_actions_carry_both_sides() {
        match QuickAction::Valuation.script() {
            QuickActionScript::Scripted { user, bot } => {
                assert_eq!(user, "I want a license valuation.");
                assert!(bot.contains("within 24 hours"));
            }
            other => panic!("unexpected script {:?}", other),
        }
    }
}
