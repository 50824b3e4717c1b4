use crate::domain::chat::collection::{CollectedAnswers, PLAN_QUESTIONS};

const PLAN_INSTRUCTIONS: &str = "\
**Instructions for the plan:**
1. Structure the plan day-by-day (e.g., Monday, Tuesday, Wednesday, etc.).
2. For each day, provide suggestions for **Breakfast, Lunch, Dinner, and one or two healthy Snacks**.
3. Please try to include some variety in the meals throughout the week to keep it interesting.
4. Include a brief disclaimer at the end that this is a sample plan and consulting a professional is recommended for medical advice.";

/// Builds the single instruction sent to the agent once every plan question is answered.
pub fn build_plan_prompt(answers: &CollectedAnswers) -> String {
    let mut prompt = String::from(
        "Please create a personalized and detailed **full one-week (7-day) diet schedule** for a user with the following details:\n",
    );

    for question in PLAN_QUESTIONS.iter() {
        let answer = answers
            .get(&question.key)
            .map(String::as_str)
            .unwrap_or_default();
        prompt.push_str(&format!("- **{}:** {}\n", question.label, answer));
    }

    prompt.push('\n');
    prompt.push_str(PLAN_INSTRUCTIONS);
    prompt
}
