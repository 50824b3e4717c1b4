use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Attributes gathered by the guided plan flow, in the order they are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKey {
    AgeGender,
    HeightWeight,
    ActivityLevel,
    Preferences,
    Goals,
}

impl QuestionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKey::AgeGender => "age_gender",
            QuestionKey::HeightWeight => "height_weight",
            QuestionKey::ActivityLevel => "activity_level",
            QuestionKey::Preferences => "preferences",
            QuestionKey::Goals => "goals",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionSpec {
    pub key: QuestionKey,
    /// Field label used in the composite plan prompt.
    pub label: &'static str,
    pub prompt: &'static str,
}

pub const PLAN_QUESTIONS: [QuestionSpec; 5] = [
    QuestionSpec {
        key: QuestionKey::AgeGender,
        label: "Age and Gender",
        prompt: "I can definitely help with that! To create a personalized plan, I need some information. First, could you tell me your age and gender?",
    },
    QuestionSpec {
        key: QuestionKey::HeightWeight,
        label: "Height and Weight",
        prompt: "Great. What is your current height and weight? (e.g., 175cm, 70kg)",
    },
    QuestionSpec {
        key: QuestionKey::ActivityLevel,
        label: "Activity Level",
        prompt: "Thanks. How would you describe your activity level? (e.g., sedentary, lightly active, moderately active, very active)",
    },
    QuestionSpec {
        key: QuestionKey::Preferences,
        label: "Dietary Preferences/Restrictions",
        prompt: "Almost there. Do you have any dietary preferences or restrictions? (e.g., vegetarian, vegan, allergies to nuts, etc.)",
    },
    QuestionSpec {
        key: QuestionKey::Goals,
        label: "Primary Goal",
        prompt: "Finally, what is your primary goal? (e.g., weight loss, muscle gain, maintenance)",
    },
];

pub type CollectedAnswers = BTreeMap<QuestionKey, String>;

/// In-progress guided plan flow.
///
/// `next_question_index` is the 1-based position of the next question to ask,
/// so the question awaiting an answer is the one at `next_question_index - 1`.
/// A value past the end of [`PLAN_QUESTIONS`] means every question has been asked
/// and the next answer completes the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionState {
    pub next_question_index: usize,
    pub answers: CollectedAnswers,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionStep {
    Ask {
        state: CollectionState,
        question: &'static QuestionSpec,
    },
    Complete {
        answers: CollectedAnswers,
    },
}

impl CollectionState {
    /// Begins the flow; the returned question is the one to show the user.
    pub fn start() -> (Self, &'static QuestionSpec) {
        let state = Self {
            next_question_index: 2,
            answers: BTreeMap::new(),
        };

        (state, &PLAN_QUESTIONS[0])
    }

    /// The question the next user message answers.
    pub fn pending_question(&self) -> &'static QuestionSpec {
        let position = self
            .next_question_index
            .saturating_sub(2)
            .min(PLAN_QUESTIONS.len() - 1);
        &PLAN_QUESTIONS[position]
    }

    /// Records `message` against the pending question without touching `self`.
    pub fn answer(&self, message: &str) -> CollectionStep {
        let mut answers = self.answers.clone();
        answers.insert(self.pending_question().key, message.to_string());

        if self.next_question_index <= PLAN_QUESTIONS.len() {
            let question = &PLAN_QUESTIONS[self.next_question_index - 1];
            CollectionStep::Ask {
                state: CollectionState {
                    next_question_index: self.next_question_index + 1,
                    answers,
                },
                question,
            }
        } else {
            CollectionStep::Complete { answers }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_ask(step: CollectionStep) -> (CollectionState, &'static QuestionSpec) {
        match step {
            CollectionStep::Ask { state, question } => (state, question),
            CollectionStep::Complete { .. } => panic!("expected another question"),
        }
    }

    #[test]
    fn test_start_asks_first_question() {
        let (state, question) = CollectionState::start();
        assert_eq!(state.next_question_index, 2);
        assert!(state.answers.is_empty());
        assert_eq!(question.key, QuestionKey::AgeGender);
        assert_eq!(state.pending_question().key, QuestionKey::AgeGender);
    }

    #[test]
    fn test_answer_advances_one_question_at_a_time() {
        let (state, _) = CollectionState::start();

        let (state, question) = expect_ask(state.answer("30, male"));
        assert_eq!(question.key, QuestionKey::HeightWeight);
        assert_eq!(state.next_question_index, 3);
        assert_eq!(
            state.answers.get(&QuestionKey::AgeGender).map(String::as_str),
            Some("30, male")
        );
        assert_eq!(state.answers.len(), 1);

        let (state, question) = expect_ask(state.answer("175cm, 70kg"));
        assert_eq!(question.key, QuestionKey::ActivityLevel);
        assert_eq!(state.next_question_index, 4);
        assert_eq!(state.answers.len(), 2);
    }

    #[test]
    fn test_answer_does_not_mutate_receiver() {
        let (state, _) = CollectionState::start();
        let before = state.clone();
        let _ = state.answer("30, male");
        assert_eq!(state, before);
    }

    #[test]
    fn test_fifth_answer_completes_with_all_answers() {
        let (mut state, _) = CollectionState::start();
        for answer in ["30, male", "175cm, 70kg", "moderately active", "vegetarian"] {
            state = expect_ask(state.answer(answer)).0;
        }
        assert_eq!(state.next_question_index, 6);
        assert_eq!(state.pending_question().key, QuestionKey::Goals);

        match state.answer("weight loss") {
            CollectionStep::Complete { answers } => {
                let keys: Vec<QuestionKey> = answers.keys().copied().collect();
                let expected: Vec<QuestionKey> = PLAN_QUESTIONS.iter().map(|q| q.key).collect();
                assert_eq!(keys, expected);
                assert_eq!(answers[&QuestionKey::Goals], "weight loss");
                assert_eq!(answers[&QuestionKey::Preferences], "vegetarian");
            }
            CollectionStep::Ask { .. } => panic!("expected completion"),
        }
    }

    #[test]
    fn test_any_text_is_accepted_as_an_answer() {
        let (state, _) = CollectionState::start();
        let (state, _) = expect_ask(state.answer(""));
        assert_eq!(state.answers[&QuestionKey::AgeGender], "");
    }
}
