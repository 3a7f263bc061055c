use std::sync::Arc;

use imgstack_application::infrastructure_config::Config;
use imgstack_application::ports::incoming::composite::CompositeUseCase;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub composite_service: Arc<dyn CompositeUseCase>,
}

impl AppState {
    pub fn new(config: Arc<Config>, composite_service: Arc<dyn CompositeUseCase>) -> Self {
        Self {
            config,
            composite_service,
        }
    }
}
