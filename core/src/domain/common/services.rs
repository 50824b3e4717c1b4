use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::common::{ChatConfig, PantryConfig};

/// Shared service struct; each domain implements its service trait on it.
#[derive(Clone)]
pub struct Service<SS, AF, PR> {
    pub session_repository: SS,
    pub agent: AF,
    pub pantry_repository: PR,
    pub chat_config: ChatConfig,
    pub pantry_config: PantryConfig,
    pub(crate) pantry_lock: Arc<Mutex<()>>,
}

impl<SS, AF, PR> Service<SS, AF, PR> {
    pub fn new(
        session_repository: SS,
        agent: AF,
        pantry_repository: PR,
        chat_config: ChatConfig,
        pantry_config: PantryConfig,
    ) -> Self {
        Self {
            session_repository,
            agent,
            pantry_repository,
            chat_config,
            pantry_config,
            pantry_lock: Arc::new(Mutex::new(())),
        }
    }
}
