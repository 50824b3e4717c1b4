use std::sync::Arc;

use dietai_core::application::DietAiService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: DietAiService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: DietAiService) -> Self {
        Self { args, service }
    }
}
