use std::sync::Arc;

use imgstack_adapters::outgoing::image_rs::png_codec_image::ImagePngAdapter;
use imgstack_adapters::shared::app_state::AppState as AdaptersAppState;
use imgstack_application::composite::service::CompositeService;
use imgstack_application::infrastructure_config::Config;
use imgstack_application::ports::incoming::composite::CompositeUseCase;
use imgstack_application::ports::outgoing::image_codec::DynImageCodecPort;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    composite_service: Arc<CompositeService>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let codec: DynImageCodecPort = Arc::new(ImagePngAdapter::new());
        let composite_service = Arc::new(CompositeService::new(
            codec,
            config.pipeline.normalization,
        ));

        Self {
            config,
            composite_service,
        }
    }

    #[must_use]
    pub fn to_adapters_state(&self) -> AdaptersAppState {
        let composite_service: Arc<dyn CompositeUseCase> =
            Arc::clone(&self.composite_service) as Arc<dyn CompositeUseCase>;
        AdaptersAppState::new(Arc::clone(&self.config), composite_service)
    }
}
