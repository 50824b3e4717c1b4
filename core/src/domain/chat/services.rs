use tracing::{debug, info};

use crate::domain::{
    agent::ports::AgentFacade,
    chat::{
        collection::{CollectionState, CollectionStep},
        entities::ChatMessage,
        ports::{ChatService, SessionRepository},
        prompt::build_plan_prompt,
        value_objects::{ChatReply, GetHistoryInput, PLAN_DETAILS_PROVIDED, SendMessageInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    pantry::ports::PantryRepository,
};

impl<SS, AF, PR> ChatService for Service<SS, AF, PR>
where
    SS: SessionRepository,
    AF: AgentFacade,
    PR: PantryRepository,
{
    async fn send_message(&self, input: SendMessageInput) -> Result<ChatReply, CoreError> {
        let handle = self
            .session_repository
            .get_or_create(&input.session_id)
            .await?;

        // Held for the whole turn so turns on one session never interleave.
        let mut session = handle.lock().await;
        let max_messages = self.chat_config.history_max_messages;

        // 1. Collecting: the message answers the pending question
        if let Some(state) = session.collection.as_ref() {
            return match state.answer(&input.message) {
                CollectionStep::Ask { state, question } => {
                    debug!(
                        session_id = %input.session_id,
                        next_question_index = state.next_question_index,
                        "recorded plan answer"
                    );
                    session.collection = Some(state);
                    Ok(ChatReply::new(question.prompt))
                }
                CollectionStep::Complete { answers } => {
                    info!(session_id = %input.session_id, "plan details complete, generating plan");
                    let prompt = build_plan_prompt(&answers);

                    // Nothing is committed unless the agent succeeds, so the
                    // same answer can be resubmitted after a failure.
                    let output = self.agent.complete(prompt, session.history.clone()).await?;

                    session.record_exchange(PLAN_DETAILS_PROVIDED, output.clone(), max_messages);
                    session.collection = None;
                    Ok(ChatReply::new(output))
                }
            };
        }

        // 2. Idle: start the guided flow or forward to the agent
        if self.chat_config.trigger_phrases.matches(&input.message) {
            info!(session_id = %input.session_id, "starting guided plan collection");
            let (state, question) = CollectionState::start();
            session.collection = Some(state);
            session.record_exchange(input.message, question.prompt, max_messages);
            return Ok(ChatReply::new(question.prompt));
        }

        let output = self
            .agent
            .complete(input.message.clone(), session.history.clone())
            .await?;

        session.record_exchange(input.message, output.clone(), max_messages);
        Ok(ChatReply::new(output))
    }

    async fn get_history(&self, input: GetHistoryInput) -> Result<Vec<ChatMessage>, CoreError> {
        let handle = self
            .session_repository
            .get_or_create(&input.session_id)
            .await?;

        let session = handle.lock().await;
        Ok(session.history.clone())
    }
}
