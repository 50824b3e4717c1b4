mod common;

use axum::http::StatusCode;
use common::DietAiContext;
use dietai_core::domain::chat::{collection::PLAN_QUESTIONS, value_objects::PLAN_DETAILS_PROVIDED};
use serde_json::{Value, json};
use test_context::test_context;

async fn chat(ctx: &DietAiContext, session_id: &str, message: &str) -> String {
    let response = ctx
        .server
        .post("/chat")
        .json(&json!({ "session_id": session_id, "message": message }))
        .await;
    response.assert_status_ok();
    response.json::<Value>()["response"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}

#[test_context(DietAiContext)]
#[tokio::test]
async fn test_free_form_message_goes_to_model(ctx: &mut DietAiContext) {
    let reply = chat(ctx, "s1", "Is spinach healthy?").await;

    assert_eq!(reply, "echo: Is spinach healthy?");
    let requests = ctx.gemini.requests();
    assert_eq!(requests.len(), 1);
    assert!(
        requests[0]["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("DietAI")
    );
}

#[test_context(DietAiContext)]
#[tokio::test]
async fn test_guided_plan_flow(ctx: &mut DietAiContext) {
    let first = chat(ctx, "plan", "Can you create a Diet Plan for me?").await;
    assert_eq!(first, PLAN_QUESTIONS[0].prompt);

    let answers = [
        "30, male",
        "180 cm, 80 kg",
        "moderately active",
        "vegetarian",
        "lose weight",
    ];
    for (answer, next) in answers[..4].iter().zip(&PLAN_QUESTIONS[1..]) {
        assert_eq!(chat(ctx, "plan", answer).await, next.prompt);
    }
    assert!(ctx.gemini.requests().is_empty());

    let plan = chat(ctx, "plan", answers[4]).await;
    assert!(plan.starts_with("echo: "));

    let prompt = ctx.gemini.last_user_text();
    for (question, answer) in PLAN_QUESTIONS.iter().zip(answers) {
        assert!(prompt.contains(&format!("**{}:** {}", question.label, answer)));
    }

    let history = ctx.server.get("/chat/plan/history").await;
    history.assert_status_ok();
    let messages = history.json::<Value>()["data"].as_array().unwrap().clone();
    let contents: Vec<&str> = messages
        .iter()
        .map(|m| m["content"].as_str().unwrap())
        .collect();
    assert_eq!(
        contents,
        vec![
            "Can you create a Diet Plan for me?",
            PLAN_QUESTIONS[0].prompt,
            PLAN_DETAILS_PROVIDED,
            plan.as_str(),
        ]
    );
    assert_eq!(messages[0]["role"], "user");
    assert_eq!(messages[1]["role"], "assistant");

    // The flow is over: the next message is free-form again.
    assert_eq!(chat(ctx, "plan", "thanks").await, "echo: thanks");
}

#[test_context(DietAiContext)]
#[tokio::test]
async fn test_empty_answer_is_accepted_during_collection(ctx: &mut DietAiContext) {
    assert_eq!(chat(ctx, "quiet", "diet plan").await, PLAN_QUESTIONS[0].prompt);
    assert_eq!(chat(ctx, "quiet", "").await, PLAN_QUESTIONS[1].prompt);
}

#[test_context(DietAiContext)]
#[tokio::test]
async fn test_sessions_do_not_share_state(ctx: &mut DietAiContext) {
    chat(ctx, "a", "I need a diet plan").await;

    assert_eq!(chat(ctx, "b", "hello").await, "echo: hello");
    assert_eq!(chat(ctx, "a", "25, female").await, PLAN_QUESTIONS[1].prompt);
}

#[test_context(DietAiContext)]
#[tokio::test]
async fn test_model_tool_call_is_executed(ctx: &mut DietAiContext) {
    let reply = chat(ctx, "bmi", "What is my BMI?").await;

    assert_eq!(
        reply,
        "Tool said: The calculated BMI is 22.9, which is considered 'Normal weight'."
    );
    assert_eq!(ctx.gemini.requests().len(), 2);
}

#[test_context(DietAiContext)]
#[tokio::test]
async fn test_model_failure_is_500_and_not_recorded(ctx: &mut DietAiContext) {
    let response = ctx
        .server
        .post("/chat")
        .json(&json!({ "session_id": "down", "message": "are you unavailable?" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "E_INTERNAL_SERVER_ERROR");
    assert_eq!(body["status"], 500);

    let history = ctx.server.get("/chat/down/history").await;
    assert_eq!(history.json::<Value>()["data"], json!([]));
}

#[test_context(DietAiContext)]
#[tokio::test]
async fn test_malformed_chat_requests_are_rejected(ctx: &mut DietAiContext) {
    let missing_message = ctx
        .server
        .post("/chat")
        .json(&json!({ "session_id": "s1" }))
        .await;
    missing_message.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(missing_message.json::<Value>()["code"], "E_BAD_REQUEST");

    let empty_session = ctx
        .server
        .post("/chat")
        .json(&json!({ "session_id": "", "message": "hi" }))
        .await;
    empty_session.assert_status(StatusCode::BAD_REQUEST);

    let not_json = ctx.server.post("/chat").text("hello").await;
    not_json.assert_status(StatusCode::BAD_REQUEST);

    assert!(ctx.gemini.requests().is_empty());
}

#[test_context(DietAiContext)]
#[tokio::test]
async fn test_health_and_docs(ctx: &mut DietAiContext) {
    let health = ctx.server.get("/health").await;
    health.assert_status_ok();
    assert_eq!(health.json::<Value>()["status"], "ok");

    let docs = ctx.server.get("/api-docs/openapi.json").await;
    docs.assert_status_ok();
    let paths = docs.json::<Value>()["paths"].clone();
    assert!(paths.get("/chat").is_some());
    assert!(paths.get("/chat/{session_id}/history").is_some());
    assert!(paths.get("/pantry/low-stock").is_some());
}
