use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_TRIGGER_PHRASES: [&str; 2] = ["diet plan", "create a plan"];

/// History marker recorded in place of the composite plan prompt.
pub const PLAN_DETAILS_PROVIDED: &str = "All my details have been provided.";

#[derive(Debug, Clone)]
pub struct SendMessageInput {
    pub session_id: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct GetHistoryInput {
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatReply {
    pub response: String,
}

impl ChatReply {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

/// Phrases that start the guided plan flow when found anywhere in a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerPhrases(Vec<String>);

impl TriggerPhrases {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            phrases
                .into_iter()
                .map(|p| p.as_ref().trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        )
    }

    pub fn matches(&self, message: &str) -> bool {
        let message = message.to_lowercase();
        self.0.iter().any(|phrase| message.contains(phrase.as_str()))
    }
}

impl Default for TriggerPhrases {
    fn default() -> Self {
        Self::new(DEFAULT_TRIGGER_PHRASES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_phrases_match_case_insensitively() {
        let triggers = TriggerPhrases::default();
        assert!(triggers.matches("I want a DIET PLAN please"));
        assert!(triggers.matches("Can you create a plan for me?"));
    }

    #[test]
    fn test_unrelated_message_does_not_match() {
        let triggers = TriggerPhrases::default();
        assert!(!triggers.matches("How much protein is in an egg?"));
        assert!(!triggers.matches("plan my diet"));
    }

    #[test]
    fn test_custom_phrases_are_normalized() {
        let triggers = TriggerPhrases::new(["  Meal Plan ", ""]);
        assert_eq!(triggers, TriggerPhrases::new(["meal plan"]));
        assert!(triggers.matches("need a meal plan"));
        assert!(!triggers.matches("I want a diet plan"));
    }
}
