use std::sync::Arc;

use nutriagent_core::application::NutriAgentService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutriAgentService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutriAgentService) -> Self {
        Self { args, service }
    }
}
