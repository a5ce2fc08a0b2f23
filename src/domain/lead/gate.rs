//! Lead form gate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Bot prompt appended when the form opens.
pub const LEAD_FORM_PROMPT: &str =
    "Please fill out the contact form below and our team will reach out to you shortly.";

/// Whether the widget accepts chat input or is collecting contact details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadGate {
    #[default]
    Chatting,
    CollectingLead,
}

impl LeadGate {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::CollectingLead)
    }

    /// Returns true if free-text chat input is accepted.
    pub fn accepts_chat(&self) -> bool {
        matches!(self, Self::Chatting)
    }
}

impl StateMachine for LeadGate {
    fn can_transition_to(&self, target: &Self) -> bool {
        use LeadGate::*;
        matches!((self, target), (Chatting, CollectingLead) | (CollectingLead, Chatting))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            Self::Chatting => vec![Self::CollectingLead],
            Self::CollectingLead => vec![Self::Chatting],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;

    const ALL: [LeadGate; 2] = [LeadGate::Chatting, LeadGate::CollectingLead];

    #[test]
    fn starts_chatting() {
        let gate = LeadGate::default();
        assert!(gate.accepts_chat());
        assert!(!gate.is_open());
    }

    #[test]
    fn opens_and_closes() {
        let gate = LeadGate::Chatting
            .transition_to(LeadGate::CollectingLead)
            .unwrap();
        assert!(gate.is_open());
        assert_eq!(gate.transition_to(LeadGate::Chatting).unwrap(), LeadGate::Chatting);
    }

    #[test]
    fn rejects_reopening() {
        let err = LeadGate::CollectingLead
            .transition_to(LeadGate::CollectingLead)
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::invalid_format(
                "state_transition",
                "Cannot transition from CollectingLead to CollectingLead"
            )
        );
    }

    #[test]
    fn rejects_closing_twice() {
        assert!(LeadGate::Chatting.transition_to(LeadGate::Chatting).is_err());
    }

    #[test]
    fn valid_transitions_agree_with_can_transition_to() {
        for from in ALL {
            let targets = from.valid_transitions();
            for to in ALL {
                assert_eq!(
                    from.can_transition_to(&to),
                    targets.contains(&to),
                    "{:?} -> {:?}",
                    from,
                    to
                );
            }
        }
    }
}
